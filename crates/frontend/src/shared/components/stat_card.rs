use crate::shared::icons::icon;
use contracts::dashboards::d100_community_solar::StatItem;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

/// Trend direction read from a display string such as "+12%" or "-2%".
fn trend_color(trend: &str) -> BadgeColor {
    if trend.trim_start().starts_with('-') {
        BadgeColor::Danger
    } else {
        BadgeColor::Success
    }
}

/// Summary tile: label with a trend badge, value underneath.
#[component]
pub fn StatCard(stat: StatItem) -> impl IntoView {
    let color = trend_color(&stat.trend);

    view! {
        <div class="stat-card glass-card">
            <div class="stat-card__header">
                <span class="stat-card__label">{stat.label}</span>
                <Badge appearance=BadgeAppearance::Tint color=color>
                    <span class="stat-card__trend">
                        {icon("trending-up")}
                        {stat.trend}
                    </span>
                </Badge>
            </div>
            <div class="stat-card__value">{stat.value}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_color() {
        assert!(matches!(trend_color("+12%"), BadgeColor::Success));
        assert!(matches!(trend_color("-2%"), BadgeColor::Danger));
    }
}
