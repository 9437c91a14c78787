//! In-process stand-in for the remote GraphQL backend, used by the async
//! tests. Speaks just enough of the real contract: `tokenAuth`,
//! `registerUser` and `me`, keyed off the operation text.

use axum::http::HeaderMap;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

pub(crate) const STUB_USERNAME: &str = "demo";
pub(crate) const STUB_PASSWORD: &str = "correct-horse-battery";
pub(crate) const STUB_TOKEN: &str = "stub-session-token";

async fn stub_graphql(headers: HeaderMap, Json(request): Json<Value>) -> Json<Value> {
    let query = request["query"].as_str().unwrap_or_default();
    let variables = &request["variables"];

    if query.contains("tokenAuth") {
        let ok = variables["username"] == STUB_USERNAME && variables["password"] == STUB_PASSWORD;
        if ok {
            return Json(json!({
                "data": { "tokenAuth": { "token": STUB_TOKEN, "payload": { "username": STUB_USERNAME } } }
            }));
        }
        return Json(json!({
            "data": { "tokenAuth": null },
            "errors": [{ "message": "Please enter valid credentials" }]
        }));
    }

    if query.contains("registerUser") {
        if variables["username"] == "taken" {
            return Json(json!({
                "data": { "registerUser": { "user": null, "success": false, "errors": ["Username already exists"] } }
            }));
        }
        return Json(json!({
            "data": { "registerUser": {
                "user": {
                    "id": "7",
                    "username": variables["username"],
                    "email": variables["email"],
                    "firstName": variables["firstName"],
                    "lastName": variables["lastName"]
                },
                "success": true,
                "errors": []
            } }
        }));
    }

    if query.contains("me") {
        let authorization = headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        if authorization == Some(&format!("JWT {STUB_TOKEN}")) {
            return Json(json!({
                "data": { "me": {
                    "id": "7",
                    "username": STUB_USERNAME,
                    "email": "demo@example.com",
                    "firstName": "Demo",
                    "lastName": "User",
                    "role": "member"
                } }
            }));
        }
        return Json(json!({
            "data": { "me": null },
            "errors": [{ "message": "Invalid token" }]
        }));
    }

    Json(json!({ "data": null, "errors": [{ "message": "unknown operation" }] }))
}

/// Binds the stub on an ephemeral loopback port and returns its GraphQL URL.
pub(crate) async fn spawn_stub_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub local addr");
    let router = Router::new().route("/graphql/", post(stub_graphql));
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });
    format!("http://{addr}/graphql/")
}

/// A backend that answers every request with HTTP 500.
pub(crate) async fn spawn_failing_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind failing backend");
    let addr = listener.local_addr().expect("stub local addr");
    let router = Router::new().route(
        "/graphql/",
        post(|| async { (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });
    format!("http://{addr}/graphql/")
}
