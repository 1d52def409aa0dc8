//! Charts rendered by Plotly.js.
//!
//! Figures are built with the `plotly` crate in [`plots`]; [`PlotlyChart`]
//! serializes one and hands it to the `Plotly` global loaded by `index.html`.

pub mod plots;

use leptos::html::Div;
use leptos::prelude::*;
use plotly::Plot;
use thiserror::Error;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(
        div_id: &str,
        data: JsValue,
        layout: JsValue,
        config: JsValue,
    ) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("figure could not be serialized: {0}")]
    Serialize(String),
    #[error("Plotly rejected the figure: {0}")]
    Plotly(String),
}

fn figure_part(figure: &JsValue, key: &str) -> Result<JsValue, ChartError> {
    js_sys::Reflect::get(figure, &JsValue::from_str(key))
        .map_err(|e| ChartError::Serialize(format!("{:?}", e)))
}

/// Draws `plot` into the element with id `div_id`.
pub fn render_plot(div_id: &str, plot: &Plot) -> Result<(), ChartError> {
    let figure = js_sys::JSON::parse(&plot.to_json())
        .map_err(|e| ChartError::Serialize(format!("{:?}", e)))?;

    new_plot(
        div_id,
        figure_part(&figure, "data")?,
        figure_part(&figure, "layout")?,
        figure_part(&figure, "config")?,
    )
    .map(|_| ())
    .map_err(|e| ChartError::Plotly(format!("{:?}", e)))
}

/// Container `div` that Plotly draws into once it is mounted.
#[component]
pub fn PlotlyChart(#[prop(into)] id: String, plot: Plot) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let div_id = id.clone();

    Effect::new(move |_| {
        if node_ref.get().is_some() {
            if let Err(err) = render_plot(&div_id, &plot) {
                log::error!("chart {}: {}", div_id, err);
            }
        }
    });

    view! { <div node_ref=node_ref id=id class="chart"></div> }
}
