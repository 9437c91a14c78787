use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use tracing::instrument;

use crate::forms::{self, message_for, SignupForm, Violation};
use crate::pages::layout::{page, server_errors, text_field, SUBMIT_GUARD};
use crate::session::{self, Registration, SignUpOutcome};
use crate::state::AppState;

pub async fn show() -> Html<String> {
    render(&SignupForm::default(), &[], &[])
}

#[instrument(skip_all)]
pub async fn submit(State(state): State<AppState>, Form(form): Form<SignupForm>) -> Response {
    let violations = forms::SIGNUP.validate(&form);
    if !violations.is_empty() {
        return render(&form, &violations, &[]).into_response();
    }

    let registration = Registration {
        username: &form.username,
        password: &form.password,
        email: &form.email,
        first_name: &form.first_name,
        last_name: &form.last_name,
    };
    match session::register(&state, &registration).await {
        SignUpOutcome::Success => Redirect::to("/auth/signin?registered=true").into_response(),
        SignUpOutcome::Failure { messages } => render(&form, &[], &messages).into_response(),
    }
}

fn render(form: &SignupForm, violations: &[Violation], errors: &[String]) -> Html<String> {
    let body = format!(
        r#"<header><nav><a href="/"><strong>QuickCoach</strong></a></nav></header>
<main>
<div class="card">
  <h1>Create Your Account</h1>
  <p>Start getting AI-powered coaching for your technical and career challenges</p>
  {server_errors}
  <form method="post" action="/auth/signup" onsubmit="{SUBMIT_GUARD}">
    {username_field}
    {email_field}
    {first_name_field}
    {last_name_field}
    {password_field}
    {confirm_field}
    <button type="submit">Create Account</button>
  </form>
  <p>Already have an account? <a href="/auth/signin">Sign in here</a></p>
</div>
</main>"#,
        server_errors = server_errors(errors),
        username_field = text_field(
            "Username *",
            "username",
            "text",
            &form.username,
            message_for(violations, "username"),
        ),
        email_field = text_field(
            "Email Address *",
            "email",
            "email",
            &form.email,
            message_for(violations, "email"),
        ),
        first_name_field = text_field("First Name", "first_name", "text", &form.first_name, None),
        last_name_field = text_field("Last Name", "last_name", "text", &form.last_name, None),
        password_field = text_field(
            "Password *",
            "password",
            "password",
            "",
            message_for(violations, "password"),
        ),
        confirm_field = text_field(
            "Confirm Password *",
            "confirm_password",
            "password",
            "",
            message_for(violations, "confirm_password"),
        ),
    );
    page("Sign up", &body)
}
