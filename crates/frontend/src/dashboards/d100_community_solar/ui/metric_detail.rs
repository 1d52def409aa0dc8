use crate::shared::charts::plots::plot_for;
use crate::shared::charts::PlotlyChart;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::timeframe_selector::TimeframeSelector;
use crate::shared::modal_frame::{ModalFrame, ModalHeader};
use contracts::dashboards::d100_community_solar::sample::metric_detail;
use contracts::dashboards::d100_community_solar::{MetricKind, Timeframe};
use leptos::prelude::*;

/// Drill-down dialog for one metric card.
///
/// The timeframe toggle is cosmetic: the chart and stats stay the same.
/// The selection is owned by the shell, so it survives closing and reopening.
#[component]
pub fn MetricDetailDialog(
    kind: MetricKind,
    #[prop(into)] timeframe: Signal<Timeframe>,
    on_timeframe: Callback<Timeframe>,
    on_close: Callback<()>,
) -> impl IntoView {
    let detail = metric_detail(kind);
    let chart = detail.chart;

    view! {
        <ModalFrame on_close=on_close modal_class="modal--wide">
            <ModalHeader title=detail.title icon_name=detail.icon on_close=on_close />
            <div class="modal-body metric-detail" data-metric=kind.as_str()>
                <TimeframeSelector selected=timeframe on_select=on_timeframe />

                <div class="glass-card metric-detail__chart">
                    <PlotlyChart id=format!("metric-chart-{}", kind.as_str()) plot=plot_for(&chart) />
                </div>

                <div class="metric-detail__stats">
                    {detail
                        .stats
                        .into_iter()
                        .map(|stat| view! { <StatCard stat=stat /> })
                        .collect_view()}
                </div>
            </div>
        </ModalFrame>
    }
}
