use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Rejection reason for a malformed email address
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid email: {0:?}")]
pub struct InvalidEmail(pub String);

/// Email value object for addresses accepted by the API
///
/// # Invariants
/// - Exactly one '@' character
/// - Non-empty local part and domain part
/// - No surrounding whitespace
///
/// Deserializing goes through `Email::parse`, so request bodies carrying
/// a malformed address are rejected by serde.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Email(String);

impl Email {
    /// Parses and validates an email address
    ///
    /// # Example
    /// ```
    /// use users_api::domain::user::Email;
    ///
    /// let email = Email::parse("jane@example.com").expect("valid email");
    /// assert_eq!(email.as_str(), "jane@example.com");
    /// ```
    pub fn parse(email: impl Into<String>) -> Result<Self, InvalidEmail> {
        let email = email.into();
        if Self::is_valid(&email) {
            Ok(Email(email))
        } else {
            Err(InvalidEmail(email))
        }
    }

    fn is_valid(email: &str) -> bool {
        if email.trim() != email {
            return false;
        }
        match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            }
            None => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Email {
    type Error = InvalidEmail;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::parse(value)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_address() {
        assert!(Email::parse("test@test.com").is_ok());
    }

    #[test]
    fn accepts_minimal_address() {
        assert!(Email::parse("a@b").is_ok());
    }

    #[test]
    fn rejects_missing_at() {
        assert_eq!(
            Email::parse("invalid"),
            Err(InvalidEmail("invalid".to_string()))
        );
    }

    #[test]
    fn rejects_empty_parts() {
        assert!(Email::parse("@example.com").is_err());
        assert!(Email::parse("jane@").is_err());
        assert!(Email::parse("").is_err());
    }

    #[test]
    fn rejects_double_at() {
        assert!(Email::parse("a@b@c").is_err());
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        assert!(Email::parse(" jane@example.com").is_err());
    }

    #[test]
    fn deserialize_validates() {
        let ok: Result<Email, _> = serde_json::from_str("\"jane@example.com\"");
        let bad: Result<Email, _> = serde_json::from_str("\"nope\"");

        assert_eq!(ok.unwrap().to_string(), "jane@example.com");
        assert!(bad.is_err());
    }
}
