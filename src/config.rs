use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub cookie_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub graphql_url: String,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let graphql_url = std::env::var("GRAPHQL_URL")
            .unwrap_or_else(|_| "http://localhost:8000/graphql/".into());
        let session = SessionConfig {
            cookie_name: std::env::var("SESSION_COOKIE").unwrap_or_else(|_| "token".into()),
            cookie_path: "/".into(),
        };
        // The cookie name ends up inside Set-Cookie headers; reject anything
        // that cannot appear as a cookie-name token.
        if session.cookie_name.is_empty()
            || !session
                .cookie_name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
        {
            anyhow::bail!("SESSION_COOKIE must be a non-empty alphanumeric/'-'/'_' name");
        }
        Ok(Self {
            graphql_url,
            session,
        })
    }
}
