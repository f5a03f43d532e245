//! Histogram form submission flow.
//!
//! [`FormSubmitHandler`] validates the selected image, kicks off the
//! histogram image load, fetches the histogram JSON and updates the page.
//! Browser specifics sit behind [`HistogramSource`] and [`HistogramPage`].

use common::{routes, Histogram, HistogramOutcome, HistogramResponse};
use thiserror::Error;
use crate::settings::AppSettings;

/// Non-empty image identifier taken from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection(String);

impl Selection {
    pub fn parse(value: &str) -> Option<Self> {
        if value.is_empty() {
            None
        } else {
            Some(Self(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Everything a submission can fail with. The `Display` text is what the
/// user sees in the alert.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("Please select an image.")]
    MissingSelection,

    /// The server answered with an `error` field.
    #[error("Error: {0}")]
    Server(String),

    /// Network failure, bad status, or a payload that could not be used.
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Could not draw chart: {0}")]
    Render(String),
}

/// Where histogram payloads come from.
#[allow(async_fn_in_trait)]
pub trait HistogramSource {
    async fn fetch_histogram(&self, selection: &Selection) -> Result<HistogramResponse, String>;
}

/// The page elements the submission flow touches.
pub trait HistogramPage {
    /// Blocking, user-facing message.
    fn alert(&self, message: &str);

    /// `histogram-image`: set its source and make it visible.
    fn show_histogram_image(&self, src: &str);

    /// `selected-image`: set its source and make it visible.
    fn show_selected_image(&self, src: &str);

    /// Draw the chart on `histogramChart`, replacing any previous one.
    fn render_histogram(&self, histogram: &Histogram) -> Result<(), String>;

    /// Make `histogram-results` visible.
    fn show_results(&self);
}

pub struct FormSubmitHandler<S, P> {
    source: S,
    page: P,
    settings: AppSettings,
}

impl<S, P> FormSubmitHandler<S, P>
where
    S: HistogramSource,
    P: HistogramPage,
{
    pub fn new(source: S, page: P, settings: &AppSettings) -> Self {
        Self {
            source,
            page,
            settings: settings.clone(),
        }
    }

    /// Run one submission with the raw value of the `image_id` control.
    ///
    /// Every error returned here has already been shown to the user.
    pub async fn submit(&self, raw_image_id: &str) -> Result<(), SubmitError> {
        let Some(selection) = Selection::parse(raw_image_id) else {
            return self.fail(SubmitError::MissingSelection);
        };
        log::debug!("Histogram requested for image: {}", selection.as_str());

        // Loads on its own; not tied to the JSON request below.
        self.page
            .show_histogram_image(&self.settings.api_url(&routes::histogram_image(selection.as_str())));

        let response = match self.source.fetch_histogram(&selection).await {
            Ok(response) => response,
            Err(e) => return self.fail(SubmitError::Request(e)),
        };

        let report = match response.into_outcome() {
            Ok(HistogramOutcome::Ready(report)) => report,
            Ok(HistogramOutcome::Rejected(message)) => {
                return self.fail(SubmitError::Server(message));
            }
            Err(e) => return self.fail(SubmitError::Request(e.to_string())),
        };

        self.page.show_selected_image(&self.settings.api_url(&routes::static_image(
            &self.settings.static_image_prefix,
            &report.image_id,
        )));

        if let Err(e) = self.page.render_histogram(&report.histogram) {
            return self.fail(SubmitError::Render(e));
        }

        self.page.show_results();
        log::info!("Histogram displayed for image: {}", report.image_id);
        Ok(())
    }

    fn fail(&self, error: SubmitError) -> Result<(), SubmitError> {
        log::warn!("Histogram submission failed: {}", error);
        self.page.alert(&error.to_string());
        Err(error)
    }
}
