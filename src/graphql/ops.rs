//! The operations this application consumes from the QuickCoach backend,
//! with their typed response payloads. Field names follow the backend's
//! camelCase wire format.

use serde::Deserialize;

pub const ME_QUERY: &str = r#"
query {
    me {
        id
        username
        email
        firstName
        lastName
        role
    }
}
"#;

pub const TOKEN_AUTH_MUTATION: &str = r#"
mutation TokenAuth($username: String!, $password: String!) {
    tokenAuth(username: $username, password: $password) {
        token
        payload
    }
}
"#;

pub const REGISTER_USER_MUTATION: &str = r#"
mutation RegisterUser($username: String!, $password: String!, $email: String!, $firstName: String, $lastName: String) {
    registerUser(username: $username, password: $password, email: $email, firstName: $firstName, lastName: $lastName) {
        user {
            id
            username
            email
            firstName
            lastName
        }
        success
        errors
    }
}
"#;

/// Identity record as the backend reports it. Read-only here; the backend
/// owns every field. `registerUser` answers without `role`, so the optional
/// fields default to empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct MeData {
    pub me: Option<User>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAuthData {
    pub token_auth: Option<TokenAuthPayload>,
}

#[derive(Debug, Deserialize)]
pub struct TokenAuthPayload {
    pub token: Option<String>,
    #[serde(default)]
    pub payload: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserData {
    pub register_user: Option<RegisterUserPayload>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterUserPayload {
    pub user: Option<User>,
    #[serde(default)]
    pub success: bool,
    pub errors: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_payload_decodes_backend_error_list() {
        let body = r#"{"registerUser":{"user":null,"success":false,"errors":["Username already exists"]}}"#;
        let data: RegisterUserData = serde_json::from_str(body).expect("decode");
        let payload = data.register_user.unwrap();
        assert!(!payload.success);
        assert_eq!(
            payload.errors.unwrap(),
            vec!["Username already exists".to_string()]
        );
    }

    #[test]
    fn token_auth_payload_decodes_token_and_claims() {
        let body = r#"{"tokenAuth":{"token":"abc.def.ghi","payload":{"username":"demo","exp":1}}}"#;
        let data: TokenAuthData = serde_json::from_str(body).expect("decode");
        let payload = data.token_auth.unwrap();
        assert_eq!(payload.token.as_deref(), Some("abc.def.ghi"));
        assert_eq!(payload.payload["username"], "demo");
    }
}
