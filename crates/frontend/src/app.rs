use crate::dashboards::SolarDashboard;
use crate::shared::theme::{use_theme, ThemeProvider};
use crate::shared::toast::{ToastService, Toaster};
use contracts::shared::config::DashboardConfig;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::default();
    log::info!("community solar dashboard starting");

    provide_context(ToastService::new(&config));
    provide_context(config);

    view! {
        <ThemeProvider>
            <ThemedRoot />
        </ThemeProvider>
    }
}

/// Thaw provider bound to the current theme.
#[component]
fn ThemedRoot() -> impl IntoView {
    let theme = use_theme();

    view! {
        <ConfigProvider theme=theme.thaw_theme>
            <SolarDashboard />
            <Toaster />
        </ConfigProvider>
    }
}
