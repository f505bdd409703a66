//! Caller credentials.

use std::fmt;

/// Opaque bearer token proving caller identity to mutating operations.
///
/// Never inspected here, only forwarded. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap a raw token. Blank tokens count as absent.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    /// The raw token, for the `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_is_absent() {
        assert!(AuthToken::parse("").is_none());
        assert!(AuthToken::parse("   ").is_none());
    }

    #[test]
    fn test_token_is_redacted_in_debug() {
        let token = AuthToken::parse(" secret-token ").unwrap();
        assert_eq!(token.expose(), "secret-token");
        assert!(!format!("{token:?}").contains("secret"));
    }
}
