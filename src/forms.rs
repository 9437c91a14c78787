//! Declarative form constraints, assembled once at module load and checked
//! before any network call is made.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

/// Lets schemas read fields without knowing the concrete form struct.
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug)]
enum Check {
    MinLen(usize),
    Email,
    MatchesField(&'static str),
}

#[derive(Debug)]
struct Rule {
    field: &'static str,
    check: Check,
    message: &'static str,
}

#[derive(Debug)]
pub struct Schema {
    rules: Vec<Rule>,
}

impl Schema {
    pub fn validate(&self, source: &dyn FieldSource) -> Vec<Violation> {
        let mut violations = Vec::new();
        for rule in &self.rules {
            let value = source.field(rule.field).unwrap_or("");
            let ok = match &rule.check {
                Check::MinLen(min) => value.chars().count() >= *min,
                Check::Email => EMAIL_RE.is_match(value),
                Check::MatchesField(other) => value == source.field(other).unwrap_or(""),
            };
            if !ok {
                violations.push(Violation {
                    field: rule.field,
                    message: rule.message,
                });
            }
        }
        violations
    }
}

/// First violation message for one field, for rendering next to its input.
pub fn message_for<'a>(violations: &'a [Violation], field: &str) -> Option<&'a str> {
    violations
        .iter()
        .find(|v| v.field == field)
        .map(|v| v.message)
}

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();

    pub static ref SIGNIN: Schema = Schema {
        rules: vec![
            Rule {
                field: "username",
                check: Check::MinLen(3),
                message: "Username must be at least 3 characters",
            },
            Rule {
                field: "password",
                check: Check::MinLen(8),
                message: "Password must be at least 8 characters",
            },
        ],
    };

    pub static ref SIGNUP: Schema = Schema {
        rules: vec![
            Rule {
                field: "username",
                check: Check::MinLen(3),
                message: "Username must be at least 3 characters",
            },
            Rule {
                field: "email",
                check: Check::Email,
                message: "Please enter a valid email address",
            },
            Rule {
                field: "password",
                check: Check::MinLen(8),
                message: "Password must be at least 8 characters",
            },
            Rule {
                field: "confirm_password",
                check: Check::MatchesField("password"),
                message: "Passwords don't match",
            },
        ],
    };
}

#[derive(Debug, Deserialize)]
pub struct SigninForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl FieldSource for SigninForm {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "username" => Some(&self.username),
            "password" => Some(&self.password),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl FieldSource for SignupForm {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "username" => Some(&self.username),
            "email" => Some(&self.email),
            "password" => Some(&self.password),
            "confirm_password" => Some(&self.confirm_password),
            "first_name" => Some(&self.first_name),
            "last_name" => Some(&self.last_name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(username: &str, email: &str, password: &str, confirm: &str) -> SignupForm {
        SignupForm {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
            first_name: String::new(),
            last_name: String::new(),
        }
    }

    #[test]
    fn signin_accepts_valid_input() {
        let form = SigninForm {
            username: "demo".into(),
            password: "longenough".into(),
        };
        assert!(SIGNIN.validate(&form).is_empty());
    }

    #[test]
    fn signin_rejects_short_username_with_specific_message() {
        let form = SigninForm {
            username: "ab".into(),
            password: "longenough".into(),
        };
        let violations = SIGNIN.validate(&form);
        assert_eq!(
            message_for(&violations, "username"),
            Some("Username must be at least 3 characters")
        );
        assert_eq!(message_for(&violations, "password"), None);
    }

    #[test]
    fn signin_rejects_short_password_with_specific_message() {
        let form = SigninForm {
            username: "demo".into(),
            password: "short".into(),
        };
        let violations = SIGNIN.validate(&form);
        assert_eq!(
            message_for(&violations, "password"),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn signup_accepts_valid_input_without_optional_names() {
        let form = signup("demo", "demo@example.com", "longenough", "longenough");
        assert!(SIGNUP.validate(&form).is_empty());
    }

    #[test]
    fn signup_rejects_invalid_email() {
        let form = signup("demo", "not-an-email", "longenough", "longenough");
        let violations = SIGNUP.validate(&form);
        assert_eq!(
            message_for(&violations, "email"),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn signup_rejects_mismatched_confirmation() {
        let form = signup("demo", "demo@example.com", "longenough", "different");
        let violations = SIGNUP.validate(&form);
        assert_eq!(
            message_for(&violations, "confirm_password"),
            Some("Passwords don't match")
        );
    }

    #[test]
    fn multiple_violations_are_all_reported() {
        let form = signup("ab", "bad", "short", "other");
        let violations = SIGNUP.validate(&form);
        assert_eq!(violations.len(), 4);
    }
}
