use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while turning a wire payload into a usable histogram.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HistogramError {
    #[error("histogram must have {expected} buckets, got {actual}")]
    WrongBucketCount { expected: usize, actual: usize },

    #[error("response is missing `{0}`")]
    MissingField(&'static str),
}

/// Pixel-intensity frequencies, one value per bucket 0..=255.
///
/// The bucket count is checked on construction, so every `Histogram`
/// in circulation holds exactly [`Histogram::BUCKETS`] values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Histogram {
    bins: Vec<f64>,
}

impl Histogram {
    pub const BUCKETS: usize = 256;

    /// Bucket frequencies in intensity order.
    pub fn bins(&self) -> &[f64] {
        &self.bins
    }

    /// Intensity labels `0..=255`, aligned with [`Histogram::bins`].
    pub fn labels() -> impl Iterator<Item = u16> {
        0..Self::BUCKETS as u16
    }
}

impl TryFrom<Vec<f64>> for Histogram {
    type Error = HistogramError;

    fn try_from(bins: Vec<f64>) -> Result<Self, Self::Error> {
        if bins.len() != Self::BUCKETS {
            return Err(HistogramError::WrongBucketCount {
                expected: Self::BUCKETS,
                actual: bins.len(),
            });
        }
        Ok(Self { bins })
    }
}

impl From<Histogram> for Vec<f64> {
    fn from(histogram: Histogram) -> Self {
        histogram.bins
    }
}

/// Body of `GET /histogram/json`.
///
/// The server either reports an `error`, or returns the resolved
/// `image_id` together with its `histogram`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistogramResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub histogram: Option<Vec<f64>>,
}

/// A successful histogram lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramReport {
    pub image_id: String,
    pub histogram: Histogram,
}

/// What the server said, once the payload has been checked.
#[derive(Debug, Clone, PartialEq)]
pub enum HistogramOutcome {
    /// The server reported an error message.
    Rejected(String),
    Ready(HistogramReport),
}

impl HistogramResponse {
    /// Classify the payload.
    ///
    /// A non-empty `error` wins over any other field. An empty `error`
    /// string counts as absent.
    pub fn into_outcome(self) -> Result<HistogramOutcome, HistogramError> {
        if let Some(error) = self.error.filter(|e| !e.is_empty()) {
            return Ok(HistogramOutcome::Rejected(error));
        }

        let image_id = self.image_id.ok_or(HistogramError::MissingField("image_id"))?;
        let bins = self.histogram.ok_or(HistogramError::MissingField("histogram"))?;

        Ok(HistogramOutcome::Ready(HistogramReport {
            image_id,
            histogram: Histogram::try_from(bins)?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Vec<f64> {
        (0..256).map(|i| i as f64).collect()
    }

    #[test]
    fn test_histogram_rejects_wrong_length() {
        let err = Histogram::try_from(vec![1.0; 255]).unwrap_err();
        assert_eq!(
            err,
            HistogramError::WrongBucketCount {
                expected: 256,
                actual: 255
            }
        );
        assert!(Histogram::try_from(Vec::new()).is_err());
        assert!(Histogram::try_from(vec![0.0; 257]).is_err());
    }

    #[test]
    fn test_histogram_keeps_order() {
        let histogram = Histogram::try_from(ramp()).expect("256 bins");
        assert_eq!(histogram.bins()[0], 0.0);
        assert_eq!(histogram.bins()[255], 255.0);
    }

    #[test]
    fn test_labels_cover_every_intensity() {
        let labels: Vec<u16> = Histogram::labels().collect();
        assert_eq!(labels.len(), Histogram::BUCKETS);
        assert_eq!(labels.first(), Some(&0));
        assert_eq!(labels.last(), Some(&255));
    }

    #[test]
    fn test_decode_error_payload() {
        let response: HistogramResponse =
            serde_json::from_str(r#"{"error": "Image not found"}"#).unwrap();
        assert_eq!(
            response.into_outcome().unwrap(),
            HistogramOutcome::Rejected("Image not found".to_string())
        );
    }

    #[test]
    fn test_error_takes_precedence_over_data() {
        let response = HistogramResponse {
            error: Some("boom".to_string()),
            image_id: Some("a.JPEG".to_string()),
            histogram: Some(ramp()),
        };
        assert_eq!(
            response.into_outcome().unwrap(),
            HistogramOutcome::Rejected("boom".to_string())
        );
    }

    #[test]
    fn test_empty_error_counts_as_absent() {
        let response = HistogramResponse {
            error: Some(String::new()),
            image_id: Some("a.JPEG".to_string()),
            histogram: Some(ramp()),
        };
        assert!(matches!(
            response.into_outcome().unwrap(),
            HistogramOutcome::Ready(_)
        ));
    }

    #[test]
    fn test_decode_success_payload_with_integer_counts() {
        let counts: Vec<String> = (0..256).map(|i| (i * 2).to_string()).collect();
        let body = format!(
            r#"{{"image_id": "n01440764_10026.JPEG", "histogram": [{}]}}"#,
            counts.join(",")
        );
        let response: HistogramResponse = serde_json::from_str(&body).unwrap();

        match response.into_outcome().unwrap() {
            HistogramOutcome::Ready(report) => {
                assert_eq!(report.image_id, "n01440764_10026.JPEG");
                assert_eq!(report.histogram.bins()[10], 20.0);
                assert_eq!(report.histogram.bins().len(), 256);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let response = HistogramResponse {
            histogram: Some(ramp()),
            ..Default::default()
        };
        assert_eq!(
            response.into_outcome().unwrap_err(),
            HistogramError::MissingField("image_id")
        );

        let response = HistogramResponse {
            image_id: Some("a.png".to_string()),
            ..Default::default()
        };
        assert_eq!(
            response.into_outcome().unwrap_err(),
            HistogramError::MissingField("histogram")
        );
    }

    #[test]
    fn test_short_histogram_in_payload_is_rejected() {
        let response = HistogramResponse {
            image_id: Some("a.png".to_string()),
            histogram: Some(vec![1.0, 2.0, 3.0]),
            ..Default::default()
        };
        let err = response.into_outcome().unwrap_err();
        assert_eq!(err.to_string(), "histogram must have 256 buckets, got 3");
    }

    #[test]
    fn test_histogram_deserializes_with_length_check() {
        let ok: Result<Histogram, _> = serde_json::from_str(&serde_json::to_string(&ramp()).unwrap());
        assert!(ok.is_ok());

        let bad: Result<Histogram, _> = serde_json::from_str("[1, 2, 3]");
        assert!(bad.is_err());
    }
}
