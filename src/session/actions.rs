use anyhow::Context;
use axum::http::HeaderValue;
use serde_json::json;
use tracing::{error, info, warn};

use crate::graphql::ops::{self, MeData, RegisterUserData, TokenAuthData, User};
use crate::session::cookie;
use crate::state::AppState;

/// Shown whenever a transport or decode failure is folded away from the user.
pub const GENERIC_ERROR: &str = "An unexpected error occurred. Please try again.";

#[derive(Debug)]
pub enum SignInOutcome {
    /// Credentials accepted; the header stores the issued token.
    Success { cookie: HeaderValue },
    Failure { message: String },
}

#[derive(Debug)]
pub enum SignUpOutcome {
    Success,
    Failure { messages: Vec<String> },
}

#[derive(Debug)]
pub struct Registration<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
}

/// Resolves the identity behind the given token via the backend `me` query.
/// Every call is a fresh round trip; a missing token still issues the query,
/// just without an authorization header. A rejected or absent identity is
/// `Ok(None)`; only transport failures error.
pub async fn current_user(state: &AppState, token: Option<&str>) -> anyhow::Result<Option<User>> {
    let client = state.graphql(token);
    let response = client
        .execute::<MeData>(ops::ME_QUERY, json!({}))
        .await
        .context("me query")?;
    Ok(response.data.and_then(|data| data.me))
}

/// Exchanges credentials for a session token and, on success, the cookie
/// header that stores it. Unexpected failures become a generic message
/// rather than propagating.
pub async fn authenticate(state: &AppState, username: &str, password: &str) -> SignInOutcome {
    match try_authenticate(state, username, password).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(error = %e, "sign-in failed unexpectedly");
            SignInOutcome::Failure {
                message: GENERIC_ERROR.into(),
            }
        }
    }
}

async fn try_authenticate(
    state: &AppState,
    username: &str,
    password: &str,
) -> anyhow::Result<SignInOutcome> {
    let client = state.graphql(None);
    let response = client
        .execute::<TokenAuthData>(
            ops::TOKEN_AUTH_MUTATION,
            json!({ "username": username, "password": password }),
        )
        .await
        .context("tokenAuth mutation")?;

    let token = response
        .data
        .and_then(|data| data.token_auth)
        .and_then(|payload| payload.token);
    if let Some(token) = token {
        let cookie = cookie::issue(&state.config.session, &token)?;
        info!(username, "user signed in");
        return Ok(SignInOutcome::Success { cookie });
    }

    let message = response
        .errors
        .first()
        .map(|e| e.message.clone())
        .unwrap_or_else(|| "Login failed".into());
    warn!(username, "sign-in rejected by backend");
    Ok(SignInOutcome::Failure { message })
}

/// Creates an account via `registerUser`. Never sets a cookie; the new user
/// signs in afterwards.
pub async fn register(state: &AppState, registration: &Registration<'_>) -> SignUpOutcome {
    match try_register(state, registration).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(error = %e, "sign-up failed unexpectedly");
            SignUpOutcome::Failure {
                messages: vec![GENERIC_ERROR.into()],
            }
        }
    }
}

async fn try_register(
    state: &AppState,
    registration: &Registration<'_>,
) -> anyhow::Result<SignUpOutcome> {
    let client = state.graphql(None);
    let response = client
        .execute::<RegisterUserData>(
            ops::REGISTER_USER_MUTATION,
            json!({
                "username": registration.username,
                "password": registration.password,
                "email": registration.email,
                "firstName": registration.first_name,
                "lastName": registration.last_name,
            }),
        )
        .await
        .context("registerUser mutation")?;

    let payload = response.data.and_then(|data| data.register_user);
    if let Some(payload) = payload {
        if payload.success {
            info!(username = registration.username, "user registered");
            return Ok(SignUpOutcome::Success);
        }
        let mut messages = payload.errors.unwrap_or_default();
        if messages.is_empty() {
            messages.push("Registration failed".into());
        }
        warn!(username = registration.username, "sign-up rejected by backend");
        return Ok(SignUpOutcome::Failure { messages });
    }

    let messages: Vec<String> = response
        .errors
        .iter()
        .map(|e| e.message.clone())
        .collect();
    let messages = if messages.is_empty() {
        vec!["Registration failed".into()]
    } else {
        messages
    };
    warn!(username = registration.username, "sign-up answered without payload");
    Ok(SignUpOutcome::Failure { messages })
}

/// Deletes the session cookie. No backend call: the token stays valid
/// server-side until it expires there.
pub fn sign_out(state: &AppState) -> anyhow::Result<HeaderValue> {
    let cookie = cookie::clear(&state.config.session)?;
    info!("user signed out");
    Ok(cookie)
}
