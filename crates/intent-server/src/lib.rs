//! # intent-server
//!
//! The HTTP layer for the mock intent service.
//!
//! This is the leaf crate — it imports the classifier from
//! `intent-core` and exposes it over HTTP. The service is stateless:
//! requests are independent and idempotent, so the router carries no
//! shared state.
//!
//! ## Endpoints
//!
//! - `POST /predict` — classify a text into an intent label

pub mod models;
pub mod routes;

pub use intent_core;

use axum::routing::post;
use axum::Router;

/// Build the Axum application router.
///
/// # Example
///
/// ```no_run
/// use intent_server::build_app;
///
/// #[tokio::main]
/// async fn main() {
///     let app = build_app();
///     let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await.unwrap();
///     axum::serve(listener, app).await.unwrap();
/// }
/// ```
pub fn build_app() -> Router {
    Router::new().route("/predict", post(routes::predict))
}
