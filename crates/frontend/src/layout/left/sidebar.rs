//! Sidebar navigation. Only the dashboard page exists; the other entries are placeholders.

use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
}

const ACTIVE_ITEM: &str = "dashboard";

fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem { id: "dashboard", label: "Dashboard", icon: "bar-chart" },
        MenuItem { id: "revenue", label: "Revenue Distribution", icon: "dollar-sign" },
        MenuItem { id: "energy", label: "Energy Savings", icon: "zap" },
        MenuItem { id: "members", label: "Community Members", icon: "users" },
        MenuItem { id: "contracts", label: "Smart Contracts", icon: "globe" },
        MenuItem { id: "settings", label: "Settings", icon: "settings" },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside data-zone="left" class="sidebar">
            <nav class="glass-card sidebar__nav">
                {menu_items()
                    .into_iter()
                    .map(|item| {
                        let class = if item.id == ACTIVE_ITEM {
                            "sidebar__item sidebar__item--active"
                        } else {
                            "sidebar__item"
                        };
                        view! {
                            <button class=class data-item=item.id>
                                {icon(item.icon)}
                                <span class="sidebar__label">{item.label}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_active_item() {
        let active: Vec<_> = menu_items().into_iter().filter(|i| i.id == ACTIVE_ITEM).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Dashboard");
    }
}
