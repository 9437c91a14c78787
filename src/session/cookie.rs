use std::convert::Infallible;

use anyhow::Context;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, HeaderValue},
};

use crate::config::SessionConfig;
use crate::state::AppState;

impl FromRef<AppState> for SessionConfig {
    fn from_ref(state: &AppState) -> Self {
        state.config.session.clone()
    }
}

/// The raw session token from the request's `Cookie` header, if any.
/// Extraction never rejects; absence is an ordinary outcome and
/// redirect-on-absence stays with the caller.
pub struct SessionToken(pub Option<String>);

#[axum::async_trait]
impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
    SessionConfig: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = SessionConfig::from_ref(state);
        let token = parts
            .headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|raw| find_cookie(raw, &config.cookie_name));
        Ok(SessionToken(token))
    }
}

fn find_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k.trim() == name).then(|| v.trim().to_string())
    })
}

/// `Set-Cookie` value storing the token: path-scoped, no explicit expiry,
/// kept away from page scripts.
pub fn issue(config: &SessionConfig, token: &str) -> anyhow::Result<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{}={}; Path={}; HttpOnly",
        config.cookie_name, token, config.cookie_path
    ))
    .context("session token is not a valid cookie value")
}

/// `Set-Cookie` value deleting the session cookie.
pub fn clear(config: &SessionConfig) -> anyhow::Result<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{}=; Path={}; HttpOnly; Max-Age=0",
        config.cookie_name, config.cookie_path
    ))
    .context("cookie name is not a valid Set-Cookie value")
}
