use axum::extract::State;
use axum::response::Html;
use tracing::{debug, instrument};

use crate::graphql::ops::User;
use crate::pages::layout::{escape, page};
use crate::session::{self, SessionToken};
use crate::state::AppState;

/// Marketing page. Identity is only used to toggle the navigation links, so
/// a failed lookup degrades to the signed-out view instead of an error page.
#[instrument(skip_all)]
pub async fn show(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Html<String> {
    let user = match session::current_user(&state, token.as_deref()).await {
        Ok(user) => user,
        Err(e) => {
            debug!(error = %e, "identity lookup failed; rendering signed-out nav");
            None
        }
    };
    render(user.as_ref())
}

fn render(user: Option<&User>) -> Html<String> {
    let links = match user {
        Some(user) => format!(
            "<a href=\"/overview\">Hi {} {}!</a> <a href=\"/auth/signout\">Logout</a>",
            escape(&user.first_name),
            escape(&user.last_name)
        ),
        None => "<a href=\"/auth/signin\">Login</a> <a href=\"/auth/signup\">Get Started</a>"
            .to_string(),
    };

    let body = format!(
        r#"<header>
<nav>
  <strong>QuickCoach</strong>
  <span class="links">{links}</span>
</nav>
</header>
<main>
  <h1>Instant AI Coaching for Any Problem</h1>
  <p>Paste your technical or career problem and get step-by-step guidance,
  personalized recommendations, and actionable solutions from your AI coach.</p>
  <h2>How QuickCoach Works</h2>
  <ol>
    <li><strong>Paste your problem</strong> — share any technical challenge, career question, or learning goal.</li>
    <li><strong>AI analysis</strong> — your coach analyzes the problem and creates a personalized action plan.</li>
    <li><strong>Get a step-by-step guide</strong> — actionable steps, resources, and recommendations.</li>
  </ol>
  <h2>What you'll get</h2>
  <ul>
    <li>Session history, organized by date and topic.</li>
    <li>Smart tagging to find relevant sessions quickly.</li>
    <li>Ratings that improve future recommendations.</li>
  </ul>
</main>"#
    );
    page("Home", &body)
}
