//! Navigation targets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A view the client can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Landing,
    Login,
    Register,
    Query,
}

impl Route {
    /// Path of the view in the web front-end.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Query => "/query",
        }
    }

    /// Only the search view requires a session.
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Query)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
