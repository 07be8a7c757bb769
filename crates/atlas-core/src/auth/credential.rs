//! Bearer credential for protected backend calls.

use std::fmt;

/// Value sent in the `Authorization` header of protected requests.
///
/// The backend has always received a header on search requests, even from
/// anonymous clients, where the token slot holds the literal `null`. That
/// behavior is kept: [`BearerCredential::header_value`] renders
/// `Bearer null` when no token is present.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BearerCredential {
    token: Option<String>,
}

impl BearerCredential {
    /// Credential for the given token, or the anonymous credential for `None`.
    pub fn from_token(token: Option<String>) -> Self {
        Self { token }
    }

    /// The anonymous credential.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.token.is_none()
    }

    /// Full `Authorization` header value.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.token.as_deref().unwrap_or("null"))
    }
}

// Tokens never end up in logs.
impl fmt::Debug for BearerCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.token.is_some() { "<redacted>" } else { "null" };
        f.debug_struct("BearerCredential")
            .field("token", &shown)
            .finish()
    }
}
