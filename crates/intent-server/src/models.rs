//! JSON request and response models for the HTTP API.

use intent_core::Intent;
use serde::{Deserialize, Serialize};

/// Request body for `POST /predict`.
///
/// A missing `text` field deserializes to the empty string, which the
/// classifier maps to the default intent.
///
/// # Example
///
/// ```
/// use intent_server::models::PredictRequest;
///
/// let req: PredictRequest = serde_json::from_str(r#"{"text": "draw a cat"}"#).unwrap();
/// assert_eq!(req.text, "draw a cat");
///
/// let req: PredictRequest = serde_json::from_str("{}").unwrap();
/// assert_eq!(req.text, "");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    /// The input text to classify.
    #[serde(default)]
    pub text: String,
}

/// Response body for `POST /predict`.
///
/// # Example
///
/// ```
/// use intent_core::{Intent, CONFIDENCE};
/// use intent_server::models::PredictResponse;
///
/// let resp = PredictResponse {
///     intent: Intent::Chat,
///     confidence: CONFIDENCE,
/// };
/// let json = serde_json::to_string(&resp).unwrap();
/// assert_eq!(json, r#"{"intent":"chat","confidence":0.95}"#);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    /// The chosen intent label.
    pub intent: Intent,
    /// Classifier certainty. Always the fixed mock confidence.
    pub confidence: f64,
}
