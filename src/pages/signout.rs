use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::{error, instrument};

use crate::session;
use crate::state::AppState;

/// Clears the session cookie and navigates home. Deletion is unconditional;
/// visiting without a session is fine.
#[instrument(skip_all)]
pub async fn show(State(state): State<AppState>) -> Response {
    match session::sign_out(&state) {
        Ok(cookie) => ([(SET_COOKIE, cookie)], Redirect::to("/")).into_response(),
        Err(e) => {
            error!(error = %e, "building the clearing cookie failed");
            Redirect::to("/").into_response()
        }
    }
}
