use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="glass-card status-bar">
            <span class="status-bar__item">
                {icon("globe")}
                "Powered by Avalanche + Web3"
            </span>
            <span class="status-bar__item status-bar__item--green">
                {icon("leaf")}
                "Transparent, Community-Owned Energy"
            </span>
        </footer>
    }
}
