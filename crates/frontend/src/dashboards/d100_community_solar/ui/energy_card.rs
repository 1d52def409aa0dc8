use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::components::section_header::SectionHeader;
use crate::shared::components::timeframe_selector::TimeframeSelector;
use crate::shared::icons::icon;
use contracts::dashboards::d100_community_solar::{CommunityMetrics, Timeframe};
use contracts::shared::format::format_usd;
use leptos::prelude::*;

/// "Energy Generation" summary with the page-level timeframe toggle.
#[component]
pub fn EnergyCard(
    metrics: CommunityMetrics,
    #[prop(into)] timeframe: Signal<Timeframe>,
    on_timeframe: Callback<Timeframe>,
) -> impl IntoView {
    view! {
        <CardAnimated class="glass-card energy-card" delay_ms=240>
            <SectionHeader
                title="Energy Generation"
                subtitle="Daily solar energy production and savings".to_string()
            >
                <TimeframeSelector selected=timeframe on_select=on_timeframe />
            </SectionHeader>

            <div class="energy-card__grid">
                <div class="energy-card__item">
                    <div class="energy-card__label">
                        {icon("sun")}
                        <span>"Daily Output"</span>
                    </div>
                    <div class="energy-card__value">"2,340 kWh"</div>
                    <ProgressBar value=metrics.efficiency />
                    <span class="energy-card__caption">
                        {format!("{}% efficiency", metrics.efficiency)}
                    </span>
                </div>

                <div class="energy-card__item">
                    <div class="energy-card__label">
                        {icon("dollar-sign")}
                        <span>"Daily Savings"</span>
                    </div>
                    <div class="energy-card__value">{format_usd(metrics.daily_savings)}</div>
                    <ProgressBar value=78 />
                    <span class="energy-card__caption">"Above average"</span>
                </div>
            </div>
        </CardAnimated>
    }
}
