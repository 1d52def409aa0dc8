use crate::shared::icons::icon;
use contracts::dashboards::d100_community_solar::{CommunityMetrics, MetricKind};
use contracts::shared::format::{format_thousands, format_usd};
use leptos::prelude::*;

struct CardContent {
    kind: MetricKind,
    title: &'static str,
    icon: &'static str,
    value: String,
    footnote: String,
    footnote_icon: &'static str,
}

fn card_contents(metrics: &CommunityMetrics) -> [CardContent; 3] {
    [
        CardContent {
            kind: MetricKind::Energy,
            title: "Total Energy Generated",
            icon: "zap",
            value: format!("{} kWh", format_thousands(metrics.total_energy_generated)),
            footnote: "+12% from last month".to_string(),
            footnote_icon: "trending-up",
        },
        CardContent {
            kind: MetricKind::Revenue,
            title: "Revenue Pool",
            icon: "dollar-sign",
            value: format_usd(metrics.revenue_pool),
            footnote: "+8% from last month".to_string(),
            footnote_icon: "trending-up",
        },
        CardContent {
            kind: MetricKind::Tokens,
            title: "Community Tokens",
            icon: "users",
            value: format_thousands(metrics.community_tokens),
            footnote: format!("{} active members", metrics.members),
            footnote_icon: "users",
        },
    ]
}

/// The three clickable headline tiles.
#[component]
pub fn MetricCards(metrics: CommunityMetrics, on_open: Callback<MetricKind>) -> impl IntoView {
    view! {
        <div class="metric-grid">
            {card_contents(&metrics)
                .into_iter()
                .enumerate()
                .map(|(i, card)| {
                    let kind = card.kind;
                    view! {
                        <button
                            class="metric-card"
                            data-metric=kind.as_str()
                            style=format!("animation-delay: {}ms;", i * 80)
                            on:click=move |_| on_open.run(kind)
                        >
                            <div class="metric-card__title">
                                <span class="metric-card__icon">{icon(card.icon)}</span>
                                {card.title}
                            </div>
                            <div class="metric-card__value">{card.value}</div>
                            <div class="metric-card__footnote">
                                {icon(card.footnote_icon)}
                                {card.footnote}
                            </div>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_community_solar::sample::community_metrics;

    #[test]
    fn test_card_values() {
        let cards = card_contents(&community_metrics());
        let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["45,680 kWh", "$12,450", "8,950"]);
        assert_eq!(cards[2].footnote, "127 active members");
    }

    #[test]
    fn test_cards_map_to_distinct_metrics() {
        let kinds: Vec<MetricKind> = card_contents(&community_metrics())
            .iter()
            .map(|c| c.kind)
            .collect();
        assert_eq!(kinds, MetricKind::all().to_vec());
    }
}
