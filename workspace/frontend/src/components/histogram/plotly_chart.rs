use plotly::common::{Marker, Title};
use plotly::layout::{Axis, AxisType};
use plotly::{Bar, Layout};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;
use crate::chart::{ChartBackend, ChartHandle, HistogramChart};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = Plotly)]
    fn purge(div_id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["Plotly", "Plots"], js_name = resize)]
    fn plots_resize(div_id: &str) -> Result<JsValue, JsValue>;
}

/// Plotly trace for the histogram bars.
pub fn histogram_trace(chart: &HistogramChart) -> Box<Bar<u16, f64>> {
    Bar::new(chart.labels.clone(), chart.values.clone())
        .name(chart.dataset_label)
        .marker(Marker::new().color(chart.bar_color))
}

pub fn histogram_layout(chart: &HistogramChart) -> Layout {
    Layout::new()
        .show_legend(true)
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .title(Title::with_text(chart.x_title)),
        )
        .y_axis(Axis::new().title(Title::with_text(chart.y_title)))
        .height(400)
}

pub fn plot_config() -> serde_json::Value {
    serde_json::json!({"responsive": true, "displayModeBar": false})
}

/// Plain JS objects (not `Map`s), which is what Plotly reads.
fn to_plain_object<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, String> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| format!("Failed to serialize chart: {}", e))
}

/// Draws into the element with id `div_id` through the global `Plotly` object.
pub struct PlotlyBackend {
    div_id: String,
}

impl PlotlyBackend {
    pub fn new(div_id: impl Into<String>) -> Self {
        Self { div_id: div_id.into() }
    }
}

pub struct PlotlyChart {
    div_id: String,
}

impl ChartHandle for PlotlyChart {
    fn destroy(self) {
        if let Err(e) = purge(&self.div_id) {
            log::warn!("Failed to purge chart {}: {:?}", self.div_id, e);
        }
    }

    fn resize(&self) {
        if let Err(e) = plots_resize(&self.div_id) {
            log::warn!("Failed to resize chart {}: {:?}", self.div_id, e);
        }
    }
}

impl ChartBackend for PlotlyBackend {
    type Handle = PlotlyChart;

    fn draw(&mut self, chart: &HistogramChart) -> Result<PlotlyChart, String> {
        let data = to_plain_object(&[histogram_trace(chart)])?;
        let layout = to_plain_object(&histogram_layout(chart))?;
        let config = to_plain_object(&plot_config())?;

        log::debug!("Drawing histogram bar chart into #{}", self.div_id);
        new_plot(&self.div_id, data, layout, config)
            .map_err(|e| format!("Plotly rejected the chart: {:?}", e))?;

        Ok(PlotlyChart {
            div_id: self.div_id.clone(),
        })
    }
}
