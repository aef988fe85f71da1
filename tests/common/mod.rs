//! Common test utilities and helpers.

use std::time::Duration;

use axum_test::TestServer;
use profile_api::config::FactsConfig;
use profile_api::models::UserProfile;
use profile_api::{api, AppState, Config};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Timeout used in tests so the timeout branch does not take five seconds.
pub const TEST_TIMEOUT: Duration = Duration::from_millis(200);

/// Profile served by test apps.
pub fn test_profile() -> UserProfile {
    UserProfile {
        email: "test@test.com".to_string(),
        name: "Test User".to_string(),
        stack: "Rust/Axum".to_string(),
    }
}

/// Build a test server whose fact service points at `facts_url`.
pub fn build_test_app(facts_url: String) -> TestServer {
    let config = Config {
        profile: test_profile(),
        facts: FactsConfig {
            url: facts_url,
            timeout: TEST_TIMEOUT,
        },
        ..Config::default()
    };

    let state = AppState::new(config).expect("Failed to build app state");
    TestServer::new(api::app(state)).expect("Failed to create test server")
}

/// Start a mock fact service answering `GET /fact` with `template`.
pub async fn mock_fact_service(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fact"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

/// Response template for a well-formed fact.
pub fn fact_response(fact: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "fact": fact, "length": fact.len() }))
}

/// URL of a local port with nothing listening on it.
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/fact", port)
}

/// URL of a local server that accepts connections but never answers.
pub async fn unresponsive_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    format!("http://127.0.0.1:{}/fact", port)
}
