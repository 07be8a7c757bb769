//! Book search DTOs.
//!
//! These mirror the backend response as-is. Optional fields are only checked
//! for presence before display.

use serde::{Deserialize, Serialize};

/// Body of `POST /books/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub description: String,
}

/// A single book in a search response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl Book {
    /// Authors joined with `", "`, or `None` when there are none.
    pub fn joined_authors(&self) -> Option<String> {
        join_non_empty(self.authors.as_deref())
    }

    /// Categories joined with `", "`, or `None` when there are none.
    pub fn joined_categories(&self) -> Option<String> {
        join_non_empty(self.categories.as_deref())
    }
}

fn join_non_empty(values: Option<&[String]>) -> Option<String> {
    match values {
        Some(values) if !values.is_empty() => Some(values.join(", ")),
        _ => None,
    }
}

/// Response of `POST /books/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub total_items: i64,
    pub query_keywords: String,
    #[serde(default)]
    pub items: Vec<Book>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
