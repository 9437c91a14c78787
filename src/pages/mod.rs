pub mod layout;

mod home;
mod overview;
mod signin;
mod signout;
mod signup;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::show))
        .route("/overview", get(overview::show))
        .route("/auth/signin", get(signin::show).post(signin::submit))
        .route("/auth/signup", get(signup::show).post(signup::submit))
        .route("/auth/signout", get(signout::show))
}
