use std::cell::RefCell;
use std::rc::Rc;
use common::Histogram;
use web_sys::window;
use yew::prelude::*;
use crate::chart::HistogramRenderer;
use crate::submit::HistogramPage;
use super::plotly_chart::PlotlyBackend;

/// [`HistogramPage`] over the state of the `HistogramView` component.
#[derive(Clone)]
pub struct ViewPage {
    pub selected_image: UseStateHandle<Option<String>>,
    pub histogram_image: UseStateHandle<Option<String>>,
    pub results_visible: UseStateHandle<bool>,
    pub renderer: Rc<RefCell<HistogramRenderer<PlotlyBackend>>>,
}

impl HistogramPage for ViewPage {
    fn alert(&self, message: &str) {
        match window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    log::error!("Failed to show alert: {:?}", e);
                }
            }
            None => log::error!("No window to show alert: {}", message),
        }
    }

    fn show_histogram_image(&self, src: &str) {
        self.histogram_image.set(Some(src.to_string()));
    }

    fn show_selected_image(&self, src: &str) {
        self.selected_image.set(Some(src.to_string()));
    }

    fn render_histogram(&self, histogram: &Histogram) -> Result<(), String> {
        self.renderer.borrow_mut().render(histogram)
    }

    fn show_results(&self) {
        self.results_visible.set(true);
    }
}
