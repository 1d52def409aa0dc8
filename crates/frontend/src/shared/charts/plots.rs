//! Plotly figures for the metric drill-down dialog.
//!
//! Builders are pure: they turn sample series into a [`Plot`] and never touch
//! the DOM, so the figures can be checked natively.

use contracts::dashboards::d100_community_solar::sample::{ENERGY_COLOR, EXPENSES_COLOR};
use contracts::dashboards::d100_community_solar::{
    ChartData, EnergyPoint, RevenuePoint, TokenSlice,
};
use plotly::common::{Font, Line, LineShape, Marker, Mode, Orientation};
use plotly::configuration::{Configuration, DisplayModeBar};
use plotly::layout::{BarMode, Legend, Margin};
use plotly::{Bar, Layout, Pie, Plot, Scatter};

const CHART_HEIGHT: usize = 300;
const TRANSPARENT: &str = "rgba(0,0,0,0)";
const MUTED_TEXT: &str = "#8a8a8a";

fn base_layout() -> Layout {
    Layout::new()
        .height(CHART_HEIGHT)
        .margin(Margin::new().top(10).right(10).left(50).bottom(30))
        .paper_background_color(TRANSPARENT)
        .plot_background_color(TRANSPARENT)
        .font(Font::new().color(MUTED_TEXT))
}

fn with_layout(layout: Layout) -> Plot {
    let mut plot = Plot::new();
    plot.set_layout(layout);
    plot.set_configuration(
        Configuration::new()
            .responsive(true)
            .display_mode_bar(DisplayModeBar::False),
    );
    plot
}

/// Smoothed energy line with point markers.
pub fn energy_plot(points: &[EnergyPoint]) -> Plot {
    let x: Vec<String> = points.iter().map(|p| p.name.clone()).collect();
    let y: Vec<f64> = points.iter().map(|p| p.energy).collect();

    let trace = Scatter::new(x, y)
        .mode(Mode::LinesMarkers)
        .name("kWh")
        .line(
            Line::new()
                .color(ENERGY_COLOR)
                .width(3.0)
                .shape(LineShape::Spline),
        )
        .marker(Marker::new().color(ENERGY_COLOR).size(6));

    let mut plot = with_layout(base_layout().show_legend(false));
    plot.add_trace(trace);
    plot
}

/// Revenue and expenses side by side per month.
pub fn revenue_plot(points: &[RevenuePoint]) -> Plot {
    let x: Vec<String> = points.iter().map(|p| p.name.clone()).collect();
    let revenue: Vec<f64> = points.iter().map(|p| p.revenue).collect();
    let expenses: Vec<f64> = points.iter().map(|p| p.expenses).collect();

    let revenue = Bar::new(x.clone(), revenue)
        .name("revenue")
        .marker(Marker::new().color(ENERGY_COLOR));
    let expenses = Bar::new(x, expenses)
        .name("expenses")
        .marker(Marker::new().color(EXPENSES_COLOR));

    let layout = base_layout()
        .bar_mode(BarMode::Group)
        .legend(Legend::new().orientation(Orientation::Horizontal));

    let mut plot = with_layout(layout);
    plot.add_trace(revenue);
    plot.add_trace(expenses);
    plot
}

/// Token split, slices captioned with name and percent.
pub fn token_plot(slices: &[TokenSlice]) -> Plot {
    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let labels: Vec<String> = slices.iter().map(|s| s.name.clone()).collect();
    // Slice colors follow the colorway in slice order.
    let colors: Vec<String> = slices.iter().map(|s| s.color.clone()).collect();

    let trace = Pie::new(values)
        .labels(labels)
        .text_info("label+percent");

    let mut plot = with_layout(base_layout().show_legend(false).colorway(colors));
    plot.add_trace(trace);
    plot
}

pub fn plot_for(chart: &ChartData) -> Plot {
    match chart {
        ChartData::Line(points) => energy_plot(points),
        ChartData::Bar(points) => revenue_plot(points),
        ChartData::Pie(slices) => token_plot(slices),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_community_solar::sample::{
        energy_series, revenue_series, token_distribution,
    };
    use serde_json::{json, Value};

    fn figure(plot: &Plot) -> Value {
        serde_json::from_str(&plot.to_json()).unwrap()
    }

    #[test]
    fn test_energy_plot_is_smoothed_line() {
        let fig = figure(&energy_plot(&energy_series()));
        assert_eq!(fig["data"].as_array().unwrap().len(), 1);

        let trace = &fig["data"][0];
        assert_eq!(trace["type"], "scatter");
        assert_eq!(trace["mode"], "lines+markers");
        assert_eq!(trace["line"]["shape"], "spline");
        assert_eq!(trace["line"]["color"], ENERGY_COLOR);
        assert_eq!(trace["line"]["width"], 3.0);
        assert_eq!(trace["marker"]["size"], 6);
        assert_eq!(trace["x"], json!(["Week 1", "Week 2", "Week 3", "Week 4"]));
        assert_eq!(trace["y"], json!([2400.0, 2210.0, 2290.0, 2000.0]));
    }

    #[test]
    fn test_revenue_plot_groups_two_bar_series() {
        let fig = figure(&revenue_plot(&revenue_series()));
        assert_eq!(fig["layout"]["barmode"], "group");

        let data = fig["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["type"], "bar");
        assert_eq!(data[0]["name"], "revenue");
        assert_eq!(data[0]["marker"]["color"], ENERGY_COLOR);
        assert_eq!(data[0]["y"], json!([2400.0, 2210.0, 2290.0, 2180.0]));
        assert_eq!(data[1]["name"], "expenses");
        assert_eq!(data[1]["marker"]["color"], EXPENSES_COLOR);
        assert_eq!(data[1]["x"], json!(["Jan", "Feb", "Mar", "Apr"]));
    }

    #[test]
    fn test_token_plot_labels_slices_with_percent() {
        let fig = figure(&token_plot(&token_distribution()));

        let trace = &fig["data"][0];
        assert_eq!(trace["type"], "pie");
        assert_eq!(trace["textinfo"], "label+percent");
        assert_eq!(trace["labels"], json!(["Active Members", "Reserved Pool"]));
        assert_eq!(trace["values"], json!([85.0, 15.0]));
        assert_eq!(fig["layout"]["colorway"], json!([ENERGY_COLOR, EXPENSES_COLOR]));
    }

    #[test]
    fn test_plot_for_picks_trace_type_per_chart() {
        let cases = [
            (ChartData::Line(energy_series()), "scatter"),
            (ChartData::Bar(revenue_series()), "bar"),
            (ChartData::Pie(token_distribution()), "pie"),
        ];
        for (chart, expected) in cases {
            let fig = figure(&plot_for(&chart));
            assert_eq!(fig["data"][0]["type"], expected);
            assert_eq!(fig["config"]["responsive"], true);
        }
    }
}
