//! TopHeader: brand, wallet badge, theme toggle and settings button.

use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

#[component]
pub fn TopHeader(
    #[prop(into)] wallet_label: String,
    /// Opens the wallet dialog
    on_wallet_click: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="glass-card top-header">
            <div class="top-header__brand">
                <div class="top-header__logo">{icon("sun")}</div>
                <div>
                    <h1 class="top-header__title">"Community Solar"</h1>
                    <p class="top-header__subtitle">"Local Solar Ownership Dashboard"</p>
                </div>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__wallet"
                    title="Wallet details"
                    on:click=move |_| on_wallet_click.run(())
                >
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>
                        <span class="badge-content mono">
                            {icon("wallet")}
                            {wallet_label}
                        </span>
                    </Badge>
                </button>

                <ThemeToggle />

                <button class="top-header__icon-btn" title="Settings">
                    {icon("settings")}
                </button>
            </div>
        </header>
    }
}
