use contracts::dashboards::d100_community_solar::Timeframe;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

/// 7d / 30d / 1y toggle. Only the selection is reported; no data is reloaded.
#[component]
pub fn TimeframeSelector(
    #[prop(into)] selected: Signal<Timeframe>,
    on_select: Callback<Timeframe>,
) -> impl IntoView {
    view! {
        <div class="timeframe-selector">
            {Timeframe::all()
                .into_iter()
                .map(|tf| {
                    view! {
                        <Button
                            size=ButtonSize::Small
                            appearance=move || {
                                if selected.get() == tf {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Secondary
                                }
                            }
                            on_click=move |_| on_select.run(tf)
                        >
                            {tf.label()}
                        </Button>
                    }
                })
                .collect_view()}
        </div>
    }
}
