//! Shared helpers for client integration tests.
//!
//! Each test builds a small [`axum`] router standing in for the theater
//! server, binds it to an ephemeral port, and points a real
//! [`TheaterApi`] at it, so the full reqwest stack (serialization,
//! status handling, cookie store) is exercised.

use axum::Router;
use serde_json::{json, Value};

use playbill_client::{ClientConfig, TheaterApi};
use playbill_core::ProductionDraft;

/// Serve `router` on an ephemeral local port in the background and
/// return its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("should bind an ephemeral port");
    let addr = listener.local_addr().expect("listener should have an address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("test server should serve");
    });

    format!("http://{addr}")
}

/// Build a client against a test server's base URL.
pub fn api_for(base_url: &str) -> TheaterApi {
    let config = ClientConfig {
        base_url: base_url.to_string(),
        request_timeout_secs: 5,
    };
    TheaterApi::new(&config).expect("client should build")
}

/// A production record as the server would serialize it.
pub fn production_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "genre": "Musical",
        "director": "Trevor Nunn",
        "description": "A long-running show",
        "budget": 400000.0,
        "image": "https://example.com/show.png",
        "ongoing": true,
    })
}

/// A draft that passes every client-side rule.
pub fn valid_draft() -> ProductionDraft {
    ProductionDraft {
        title: "Cats".to_string(),
        genre: "Musical".to_string(),
        budget: Some(400_000.0),
        image: "https://example.com/cats.png".to_string(),
        director: "Trevor Nunn".to_string(),
        description: "Jellicle cats sing and dance".to_string(),
        ongoing: true,
    }
}
