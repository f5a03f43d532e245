use common::Histogram;

pub const DATASET_LABEL: &str = "Pixel Intensity";
pub const X_AXIS_TITLE: &str = "Pixel Value";
pub const Y_AXIS_TITLE: &str = "Frequency";
pub const BAR_COLOR: &str = "black";

/// Library-independent description of the histogram bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramChart {
    pub labels: Vec<u16>,
    pub values: Vec<f64>,
    pub dataset_label: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub bar_color: &'static str,
}

impl HistogramChart {
    pub fn from_histogram(histogram: &Histogram) -> Self {
        Self {
            labels: Histogram::labels().collect(),
            values: histogram.bins().to_vec(),
            dataset_label: DATASET_LABEL,
            x_title: X_AXIS_TITLE,
            y_title: Y_AXIS_TITLE,
            bar_color: BAR_COLOR,
        }
    }
}

/// A chart currently drawn on the page.
pub trait ChartHandle {
    /// Release the drawing surface so another chart can take it.
    fn destroy(self);

    /// Re-fit the chart to its container, e.g. after the container is revealed.
    fn resize(&self);
}

/// Seam to the charting library.
pub trait ChartBackend {
    type Handle: ChartHandle;

    fn draw(&mut self, chart: &HistogramChart) -> Result<Self::Handle, String>;
}

/// Owns the one live chart instance and replaces it on every render.
pub struct HistogramRenderer<B: ChartBackend> {
    backend: B,
    current: Option<B::Handle>,
}

impl<B: ChartBackend> HistogramRenderer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            current: None,
        }
    }

    /// Destroy the previous chart, if any, then draw `histogram`.
    pub fn render(&mut self, histogram: &Histogram) -> Result<(), String> {
        if let Some(previous) = self.current.take() {
            log::debug!("Destroying previous histogram chart");
            previous.destroy();
        }

        let chart = HistogramChart::from_histogram(histogram);
        self.current = Some(self.backend.draw(&chart)?);
        log::trace!("Histogram chart drawn with {} bars", chart.values.len());
        Ok(())
    }

    /// Re-fit the live chart, if any, to its container.
    pub fn refresh_layout(&self) {
        if let Some(current) = &self.current {
            current.resize();
        }
    }

    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            previous.destroy();
        }
    }
}

impl<B: ChartBackend> Drop for HistogramRenderer<B> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Chart lifecycle events, in the order the backend saw them.
    #[derive(Debug, Clone, PartialEq)]
    pub enum ChartEvent {
        Drawn(usize),
        Destroyed(usize),
        Resized(usize),
    }

    #[derive(Default)]
    pub struct RecordingState {
        pub events: Vec<ChartEvent>,
        pub charts: Vec<HistogramChart>,
        pub live: usize,
        pub fail_next: bool,
    }

    #[derive(Clone, Default)]
    pub struct RecordingBackend {
        pub state: Rc<RefCell<RecordingState>>,
    }

    pub struct RecordingHandle {
        id: usize,
        state: Rc<RefCell<RecordingState>>,
    }

    impl ChartHandle for RecordingHandle {
        fn destroy(self) {
            let mut state = self.state.borrow_mut();
            state.live -= 1;
            state.events.push(ChartEvent::Destroyed(self.id));
        }

        fn resize(&self) {
            self.state.borrow_mut().events.push(ChartEvent::Resized(self.id));
        }
    }

    impl ChartBackend for RecordingBackend {
        type Handle = RecordingHandle;

        fn draw(&mut self, chart: &HistogramChart) -> Result<RecordingHandle, String> {
            let mut state = self.state.borrow_mut();
            if state.fail_next {
                state.fail_next = false;
                return Err("canvas unavailable".to_string());
            }
            let id = state.charts.len();
            state.charts.push(chart.clone());
            state.live += 1;
            state.events.push(ChartEvent::Drawn(id));
            Ok(RecordingHandle {
                id,
                state: self.state.clone(),
            })
        }
    }

    fn histogram(scale: f64) -> Histogram {
        Histogram::try_from((0..256).map(|i| i as f64 * scale).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn test_chart_description_matches_histogram() {
        let chart = HistogramChart::from_histogram(&histogram(1.0));

        assert_eq!(chart.labels, (0..256).collect::<Vec<u16>>());
        assert_eq!(chart.values, histogram(1.0).bins());
        assert_eq!(chart.dataset_label, "Pixel Intensity");
        assert_eq!(chart.x_title, "Pixel Value");
        assert_eq!(chart.y_title, "Frequency");
        assert_eq!(chart.bar_color, "black");
    }

    #[test]
    fn test_render_destroys_previous_before_drawing() {
        let backend = RecordingBackend::default();
        let state = backend.state.clone();
        let mut renderer = HistogramRenderer::new(backend);

        renderer.render(&histogram(1.0)).unwrap();
        renderer.render(&histogram(2.0)).unwrap();

        let state = state.borrow();
        assert_eq!(
            state.events,
            vec![
                ChartEvent::Drawn(0),
                ChartEvent::Destroyed(0),
                ChartEvent::Drawn(1),
            ]
        );
        assert_eq!(state.live, 1);
        assert_eq!(state.charts[1].values[3], 6.0);
    }

    #[test]
    fn test_failed_draw_leaves_no_chart() {
        let backend = RecordingBackend::default();
        let state = backend.state.clone();
        let mut renderer = HistogramRenderer::new(backend);

        renderer.render(&histogram(1.0)).unwrap();
        state.borrow_mut().fail_next = true;

        assert!(renderer.render(&histogram(1.0)).is_err());
        assert_eq!(state.borrow().live, 0);

        // Nothing left to re-fit.
        renderer.refresh_layout();
        assert!(!state
            .borrow()
            .events
            .iter()
            .any(|e| matches!(e, ChartEvent::Resized(_))));
    }

    #[test]
    fn test_refresh_layout_resizes_only_live_chart() {
        let backend = RecordingBackend::default();
        let state = backend.state.clone();
        let mut renderer = HistogramRenderer::new(backend);

        renderer.refresh_layout();
        assert!(state.borrow().events.is_empty());

        renderer.render(&histogram(1.0)).unwrap();
        renderer.render(&histogram(2.0)).unwrap();
        renderer.refresh_layout();

        assert_eq!(
            state.borrow().events.last(),
            Some(&ChartEvent::Resized(1))
        );
    }

    #[test]
    fn test_drop_releases_chart() {
        let backend = RecordingBackend::default();
        let state = backend.state.clone();
        {
            let mut renderer = HistogramRenderer::new(backend);
            renderer.render(&histogram(1.0)).unwrap();
            assert_eq!(state.borrow().live, 1);
        }
        assert_eq!(state.borrow().live, 0);
    }
}
