// Integration tests for the credential endpoint client
//
// A local axum server on an ephemeral port plays the credential endpoint.

use anyhow::Result;
use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use voice_console::credential::{CredentialFetchError, CredentialProvider, HttpCredentialClient, TokenRequest};

async fn serve(router: Router) -> Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    Ok(format!("http://{}", addr))
}

async fn echo_token(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let token = format!(
        "{}@{}#{}",
        params.get("identity").cloned().unwrap_or_default(),
        params.get("room").cloned().unwrap_or_default(),
        params.get("model").cloned().unwrap_or_default(),
    );
    Json(json!({ "token": token }))
}

#[tokio::test]
async fn test_fetch_sends_identity_room_and_model() -> Result<()> {
    let endpoint = serve(Router::new().route("/get-token", get(echo_token))).await?;
    let client = HttpCredentialClient::new(format!("{}/", endpoint));

    let request = TokenRequest::new("gemini-test-room", "gemini-2.0-flash-exp").with_identity("user-42");
    let credential = client.fetch(&request).await?;

    assert_eq!(credential.as_str(), "user-42@gemini-test-room#gemini-2.0-flash-exp");
    Ok(())
}

#[tokio::test]
async fn test_fetch_missing_token() -> Result<()> {
    let router = Router::new().route("/get-token", get(|| async { Json(json!({ "error": "no key" })) }));
    let endpoint = serve(router).await?;

    let client = HttpCredentialClient::new(endpoint);
    let err = client
        .fetch(&TokenRequest::new("room", "model"))
        .await
        .unwrap_err();

    assert!(matches!(err, CredentialFetchError::MissingToken));
    Ok(())
}

#[tokio::test]
async fn test_fetch_error_status() -> Result<()> {
    let router = Router::new().route(
        "/get-token",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let endpoint = serve(router).await?;

    let client = HttpCredentialClient::new(endpoint);
    let err = client
        .fetch(&TokenRequest::new("room", "model"))
        .await
        .unwrap_err();

    assert!(matches!(err, CredentialFetchError::Status(500)));
    Ok(())
}

#[tokio::test]
async fn test_fetch_unreachable_endpoint() {
    // Nothing listens on the discard port
    let client = HttpCredentialClient::new("http://127.0.0.1:9");
    let err = client
        .fetch(&TokenRequest::new("room", "model"))
        .await
        .unwrap_err();

    assert!(matches!(err, CredentialFetchError::Request(_)));
}

#[test]
fn test_generated_identity() {
    let a = TokenRequest::new("room", "model");
    let b = TokenRequest::new("room", "model");

    assert!(a.identity.starts_with("user-"));
    assert_eq!(a.identity.len(), "user-".len() + 8);
    assert_ne!(a.identity, b.identity);
}

#[test]
fn test_credential_debug_is_redacted() {
    let credential = voice_console::Credential::new("secret-jwt");
    assert!(!format!("{:?}", credential).contains("secret-jwt"));
}
