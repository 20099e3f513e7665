//! Axum route handlers for the HTTP API.

use axum::Json;

use intent_core::{classify, CONFIDENCE};

use crate::models::{PredictRequest, PredictResponse};

/// `POST /predict` — classify a text into an intent label.
///
/// Lowercases the input and scans the keyword tables in priority
/// order; texts matching no keyword fall through to `chat`. The
/// confidence is the fixed mock constant regardless of branch.
///
/// # Example Response
///
/// ```json
/// {"intent": "image_generation", "confidence": 0.95}
/// ```
///
/// # Errors
///
/// - 4xx: malformed JSON body (handled by Axum's `Json` rejection)
///
/// Classification itself cannot fail; any well-formed body yields 200.
pub async fn predict(Json(request): Json<PredictRequest>) -> Json<PredictResponse> {
    let intent = classify(&request.text);
    tracing::debug!(intent = intent.as_str(), "classified request");

    Json(PredictResponse {
        intent,
        confidence: CONFIDENCE,
    })
}
