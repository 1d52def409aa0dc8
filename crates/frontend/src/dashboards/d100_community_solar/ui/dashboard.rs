use super::energy_card::EnergyCard;
use super::hero::HeroBanner;
use super::members_table::MembersTable;
use super::metric_cards::MetricCards;
use super::metric_detail::MetricDetailDialog;
use super::wallet_dialog::WalletDialog;
use crate::dashboards::d100_community_solar::state::{ActiveOverlay, DashboardState};
use crate::layout::Shell;
use contracts::dashboards::d100_community_solar::sample::{
    community_members, community_metrics, wallet_info,
};
use contracts::dashboards::d100_community_solar::{MetricKind, Timeframe};
use leptos::prelude::*;

/// Community solar dashboard page. Owns which overlay is open.
#[component]
pub fn SolarDashboard() -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());
    let metrics = community_metrics();

    // Memo so that timeframe changes do not remount an open dialog.
    let overlay = Memo::new(move |_| state.with(|s| s.active_overlay()));
    let timeframe = Signal::derive(move || state.with(|s| s.timeframe));
    let detail_timeframe = Signal::derive(move || state.with(|s| s.detail_timeframe));

    let open_metric = Callback::new(move |kind: MetricKind| {
        log::debug!("open metric overlay: {}", kind.as_str());
        state.update(|s| s.open_metric(kind));
    });
    let open_wallet = Callback::new(move |_: ()| {
        log::debug!("open wallet overlay");
        state.update(|s| s.open_wallet());
    });
    let close_overlay = Callback::new(move |_: ()| {
        log::debug!("close overlay");
        state.update(|s| s.close_overlays());
    });
    let select_timeframe = Callback::new(move |tf: Timeframe| {
        log::debug!("dashboard timeframe: {}", tf.label());
        state.update(|s| s.select_timeframe(tf));
    });
    let select_detail_timeframe = Callback::new(move |tf: Timeframe| {
        log::debug!("metric dialog timeframe: {}", tf.label());
        state.update(|s| s.select_detail_timeframe(tf));
    });

    view! {
        <Shell wallet_label=wallet_info().short_address on_wallet_click=open_wallet>
            <HeroBanner />
            <MetricCards metrics=metrics on_open=open_metric />
            <EnergyCard metrics=metrics timeframe=timeframe on_timeframe=select_timeframe />
            <MembersTable members=community_members() />
        </Shell>

        {move || match overlay.get() {
            ActiveOverlay::Metric(kind) => view! {
                <MetricDetailDialog
                    kind=kind
                    timeframe=detail_timeframe
                    on_timeframe=select_detail_timeframe
                    on_close=close_overlay
                />
            }
            .into_any(),
            ActiveOverlay::Wallet => view! { <WalletDialog on_close=close_overlay /> }.into_any(),
            ActiveOverlay::None => view! { <></> }.into_any(),
        }}
    }
}
