use axum::extract::{Query, State};
use axum::http::header::SET_COOKIE;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use tracing::instrument;

use crate::forms::{self, message_for, SigninForm, Violation};
use crate::pages::layout::{page, server_errors, text_field, SUBMIT_GUARD};
use crate::session::{self, SignInOutcome};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SigninQuery {
    #[serde(default)]
    registered: Option<String>,
}

pub async fn show(Query(query): Query<SigninQuery>) -> Html<String> {
    let registered = query.registered.as_deref() == Some("true");
    render("", &[], &[], registered)
}

#[instrument(skip_all)]
pub async fn submit(State(state): State<AppState>, Form(form): Form<SigninForm>) -> Response {
    let violations = forms::SIGNIN.validate(&form);
    if !violations.is_empty() {
        return render(&form.username, &violations, &[], false).into_response();
    }

    match session::authenticate(&state, &form.username, &form.password).await {
        SignInOutcome::Success { cookie } => {
            ([(SET_COOKIE, cookie)], Redirect::to("/")).into_response()
        }
        SignInOutcome::Failure { message } => {
            render(&form.username, &[], &[message], false).into_response()
        }
    }
}

fn render(
    username: &str,
    violations: &[Violation],
    errors: &[String],
    registered: bool,
) -> Html<String> {
    let notice = if registered {
        "<div class=\"notice\">Account created. Sign in to continue.</div>"
    } else {
        ""
    };
    let body = format!(
        r#"<header><nav><a href="/"><strong>QuickCoach</strong></a></nav></header>
<main>
<div class="card">
  <h1>Welcome Back</h1>
  <p>Sign in to continue your AI-powered coaching journey</p>
  {notice}
  {server_errors}
  <form method="post" action="/auth/signin" onsubmit="{SUBMIT_GUARD}">
    {username_field}
    {password_field}
    <button type="submit">Sign In</button>
  </form>
  <p>Don't have an account? <a href="/auth/signup">Create one here</a></p>
</div>
</main>"#,
        server_errors = server_errors(errors),
        username_field = text_field(
            "Username",
            "username",
            "text",
            username,
            message_for(violations, "username"),
        ),
        password_field = text_field(
            "Password",
            "password",
            "password",
            "",
            message_for(violations, "password"),
        ),
    );
    page("Sign in", &body)
}
