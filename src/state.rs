use std::sync::Arc;

use crate::config::AppConfig;
use crate::graphql::GraphqlClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let http = reqwest::Client::builder().build()?;
        Ok(Self { config, http })
    }

    /// Transport factory: a client bound to the configured backend, with an
    /// `Authorization: JWT <token>` header when a token is supplied. No I/O
    /// happens until an operation is executed.
    pub fn graphql(&self, token: Option<&str>) -> GraphqlClient {
        GraphqlClient::new(self.http.clone(), self.config.graphql_url.clone(), token)
    }

    #[cfg(test)]
    pub fn fake(graphql_url: &str) -> Self {
        use crate::config::SessionConfig;

        let config = Arc::new(AppConfig {
            graphql_url: graphql_url.to_string(),
            session: SessionConfig {
                cookie_name: "token".into(),
                cookie_path: "/".into(),
            },
        });
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}
