//! Scripted upstream HTTP service
//!
//! Binds an axum router on an ephemeral local port that answers every
//! request with a fixed status and body, so adapter tests exercise the
//! real reqwest round trip.

use axum::{http::StatusCode, Router};
use tokio::net::TcpListener;

/// Serve `status` with `body` for any path. Returns the base URL.
pub async fn scripted_upstream(status: u16, body: &'static str) -> String {
    let status = StatusCode::from_u16(status).unwrap();
    let app = Router::new().fallback(move || async move { (status, body) });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}
