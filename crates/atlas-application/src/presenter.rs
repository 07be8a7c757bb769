//! Plain-text rendering of view state.

use atlas_core::books::{Book, SearchResult};
use atlas_core::metrics::MetricsSummary;
use std::fmt::Write;

pub const NO_RESULTS: &str = "No books found. Try a different description.";

/// The landing page metrics panel.
pub fn render_metrics(metrics: &MetricsSummary) -> String {
    format!(
        "System Metrics\n  Total Requests:  {}\n  Active Requests: {}\n  Avg Latency:     {}\n",
        metrics.total_requests,
        metrics.active_requests,
        metrics.avg_latency_display()
    )
}

/// Search results header followed by the book cards, or by the
/// empty-results hint when there are none.
pub fn render_search_result(result: &SearchResult) -> String {
    let mut out = format!(
        "Found {} books using keywords: {}\n",
        result.total_items, result.query_keywords
    );
    if result.is_empty() {
        out.push_str(NO_RESULTS);
        out.push('\n');
        return out;
    }

    for book in &result.items {
        out.push('\n');
        out.push_str(&render_book(book));
    }
    out
}

/// One book card. Missing optional fields are left out.
pub fn render_book(book: &Book) -> String {
    let mut out = format!("{}\n", book.title);
    if let Some(authors) = book.joined_authors() {
        let _ = writeln!(out, "  by {}", authors);
    }
    if let Some(categories) = book.joined_categories() {
        let _ = writeln!(out, "  {}", categories);
    }
    if let Some(description) = book.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "  {}", description);
    }
    if let Some(thumbnail) = book.thumbnail.as_deref().filter(|t| !t.is_empty()) {
        let _ = writeln!(out, "  [cover] {}", thumbnail);
    }
    out
}
