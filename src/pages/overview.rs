use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::{instrument, warn};

use crate::pages::layout::{escape, page};
use crate::session::{self, SessionToken};
use crate::state::AppState;

/// Requires a resolved identity; anyone else is sent to sign-in.
#[instrument(skip_all)]
pub async fn show(State(state): State<AppState>, SessionToken(token): SessionToken) -> Response {
    let user = match session::current_user(&state, token.as_deref()).await {
        Ok(user) => user,
        Err(e) => {
            warn!(error = %e, "identity lookup failed");
            None
        }
    };
    match user {
        Some(user) => {
            let body = format!(
                "<header><nav><a href=\"/\"><strong>QuickCoach</strong></a>\
                 <span class=\"links\"><a href=\"/auth/signout\">Logout</a></span></nav></header>\
                 <main><h1>Overview</h1><p>Welcome back, {}!</p></main>",
                escape(&user.first_name)
            );
            page("Overview", &body).into_response()
        }
        None => Redirect::to("/auth/signin").into_response(),
    }
}
