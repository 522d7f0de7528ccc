use crate::shared::http::ApiError;

/// Explicit bearer credential handed to every request-issuing function.
///
/// Client modules never read the token from ambient storage themselves; the
/// auth context restores it once on startup and injects `Session` values
/// from there on, so every network-capable collaborator declares its
/// credential dependency in its signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Session without a credential. Requests made with it fail with
    /// `Unauthenticated` before touching the network.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// `Authorization` header value, or `Unauthenticated` when no token is
    /// present.
    pub fn bearer_header(&self) -> Result<String, ApiError> {
        self.token
            .as_deref()
            .map(|token| format!("Bearer {}", token))
            .ok_or(ApiError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_session_short_circuits() {
        assert_eq!(
            Session::anonymous().bearer_header(),
            Err(ApiError::Unauthenticated)
        );
        assert!(!Session::anonymous().is_authenticated());
    }

    #[test]
    fn bearer_header_formats_the_token() {
        let session = Session::new("abc123");
        assert_eq!(session.bearer_header().unwrap(), "Bearer abc123");
        assert!(session.is_authenticated());
    }
}
