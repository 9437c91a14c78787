use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Transport-level failure: the backend was unreachable, answered with a
/// non-success status, or returned a body that is not a GraphQL envelope.
/// GraphQL-level errors are not represented here; they travel inside
/// [`GraphqlResponse::errors`].
#[derive(Debug, thiserror::Error)]
pub enum GraphqlClientError {
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend answered HTTP {0}")]
    Status(StatusCode),
}

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

/// Standard GraphQL response envelope. Errors are carried alongside any
/// partial data the backend produced; callers see both.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
    authorization: Option<String>,
}

impl GraphqlClient {
    pub fn new(http: reqwest::Client, endpoint: String, token: Option<&str>) -> Self {
        Self {
            http,
            endpoint,
            authorization: token.map(|t| format!("JWT {t}")),
        }
    }

    /// Posts one operation and decodes the envelope. No retries, no caching;
    /// every call is a fresh round trip.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        query: &'static str,
        variables: serde_json::Value,
    ) -> Result<GraphqlResponse<T>, GraphqlClientError> {
        let mut request = self
            .http
            .post(&self.endpoint)
            .json(&GraphqlRequest { query, variables });
        if let Some(authorization) = &self.authorization {
            request = request.header(header::AUTHORIZATION, authorization.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GraphqlClientError::Status(status));
        }

        let envelope = response.json::<GraphqlResponse<T>>().await?;
        if !envelope.errors.is_empty() {
            debug!(count = envelope.errors.len(), "backend reported errors");
        }
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::ops::MeData;

    #[test]
    fn envelope_keeps_errors_alongside_partial_data() {
        let body = r#"{"data":{"me":null},"errors":[{"message":"Invalid token"}]}"#;
        let envelope: GraphqlResponse<MeData> = serde_json::from_str(body).expect("decode");
        assert!(envelope.data.is_some());
        assert!(envelope.data.unwrap().me.is_none());
        assert_eq!(envelope.errors.len(), 1);
        assert_eq!(envelope.errors[0].message, "Invalid token");
    }

    #[test]
    fn envelope_tolerates_missing_errors_field() {
        let body = r#"{"data":{"me":{"id":"1","username":"demo","email":"demo@example.com"}}}"#;
        let envelope: GraphqlResponse<MeData> = serde_json::from_str(body).expect("decode");
        assert!(envelope.errors.is_empty());
        let user = envelope.data.unwrap().me.unwrap();
        assert_eq!(user.username, "demo");
        assert_eq!(user.first_name, "");
    }

    #[tokio::test]
    async fn non_success_status_is_a_transport_error() {
        let url = crate::graphql::testing::spawn_failing_backend().await;
        let client = GraphqlClient::new(reqwest::Client::new(), url, None);
        let err = client
            .execute::<MeData>("query { me { id } }", serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, GraphqlClientError::Status(s) if s.as_u16() == 500));
    }

    #[tokio::test]
    async fn connection_failure_is_a_transport_error() {
        // Nothing listens on the discard port.
        let client = GraphqlClient::new(
            reqwest::Client::new(),
            "http://127.0.0.1:9/graphql/".into(),
            None,
        );
        let err = client
            .execute::<MeData>("query { me { id } }", serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, GraphqlClientError::Transport(_)));
    }
}
