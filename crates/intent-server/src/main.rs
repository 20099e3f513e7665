//! Mock intent server entry point.
//!
//! Starts the Axum HTTP server on port 8000. The process serves until
//! interrupted; there is no graceful-shutdown logic.

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting mock intent server on 0.0.0.0:8000");

    let app = intent_server::build_app();

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8000")
        .await
        .expect("failed to bind to port 8000");

    tracing::info!("Mock intent server listening on 0.0.0.0:8000");

    axum::serve(listener, app)
        .await
        .expect("server error");
}
