//! Session domain model.

use serde::{Deserialize, Serialize};

/// Client-held authentication record.
///
/// `token` and `username` are always set and cleared together; use the
/// constructors rather than building the struct by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    token: Option<String>,
    username: Option<String>,
}

impl Session {
    /// An authenticated session.
    pub fn authenticated(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            username: Some(username.into()),
        }
    }

    /// The anonymous session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Whether startup restoration of the persisted session has run yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Restoration {
    #[default]
    Pending,
    Complete,
}
