//! Shared fixtures for the mock-server integration tests.

#![allow(dead_code)]

use std::sync::Once;

use onelogin_rs::{ClientConfig, ClientIdentity, OneLoginClient};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// `base64("id:secret")`
pub const BASIC_CREDENTIALS: &str = "Basic aWQ6c2VjcmV0";
pub const TOKEN_PATH: &str = "/auth/oauth2/token";

static INIT: Once = Once::new();

/// Initialize logging for tests
pub fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Client for `("id", "secret", "us")` pointed at the mock server.
pub fn client_for(server: &MockServer) -> OneLoginClient {
    client_with(server, ClientConfig::default())
}

pub fn client_with(server: &MockServer, config: ClientConfig) -> OneLoginClient {
    init_logging();
    let identity = ClientIdentity::new("id", "secret", "us").expect("valid identity");
    let config = config.with_base_url(Url::parse(&server.uri()).expect("mock server uri"));
    OneLoginClient::with_config(identity, config).expect("client")
}

pub fn success_status() -> Value {
    json!({ "error": false, "code": 200, "type": "success", "message": "Success" })
}

/// Wraps data in a successful envelope.
pub fn envelope(data: Value) -> Value {
    json!({ "status": success_status(), "data": data })
}

/// Wraps data in a successful envelope with cursor links.
pub fn page(data: Value, next_link: Option<&str>, previous_link: Option<&str>) -> Value {
    json!({
        "status": success_status(),
        "pagination": {
            "before_cursor": null,
            "after_cursor": null,
            "previous_link": previous_link,
            "next_link": next_link
        },
        "data": data
    })
}

pub fn failure(code: u16, kind: &str, message: &str) -> Value {
    json!({
        "status": { "error": true, "code": code, "type": kind, "message": message }
    })
}

pub fn token_body(access_token: &str) -> Value {
    json!({
        "status": success_status(),
        "data": [{
            "access_token": access_token,
            "created_at": "2015-11-11T03:36:18.714Z",
            "expires_in": 36000,
            "refresh_token": "refresh",
            "token_type": "bearer",
            "account_id": 555555
        }]
    })
}

/// Mount a token endpoint that only answers a correctly formed
/// client-credentials request, expected exactly `times` times.
pub async fn mount_token(server: &MockServer, access_token: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("authorization", BASIC_CREDENTIALS))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "grant_type": "client_credentials" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(access_token)))
        .expect(times)
        .mount(server)
        .await;
}

pub fn group(id: i64, name: &str) -> Value {
    json!({ "id": id, "name": name, "reference": null })
}

pub fn user(id: i64, email: &str) -> Value {
    json!({ "id": id, "email": email, "firstname": "Test", "lastname": "User", "status": 1 })
}
