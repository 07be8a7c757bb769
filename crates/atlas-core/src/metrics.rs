//! Prometheus text exposition → [`MetricsSummary`].
//!
//! The parser is deliberately forgiving: unknown lines, comments and samples
//! without a numeric tail are skipped, so any payload produces a summary.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Every sample of this family counts toward `total_requests`.
const TOTAL_REQUESTS_PREFIX: &str = "http_requests_total";
/// Only labelled samples of the gauge are summed.
const ACTIVE_REQUESTS_PREFIX: &str = "active_requests{";

static TRAILING_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([\d.]+)$").expect("trailing number pattern is valid"));

/// Numeric summary shown on the landing page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub total_requests: f64,
    pub active_requests: f64,
    /// No exported metric feeds this yet; it stays at zero.
    pub avg_latency: f64,
}

impl MetricsSummary {
    /// Latency formatted the way the landing page shows it, e.g. `0.00ms`.
    pub fn avg_latency_display(&self) -> String {
        format!("{:.2}ms", self.avg_latency)
    }
}

/// Parses a metrics payload. Never fails.
pub fn parse_metrics(raw: &str) -> MetricsSummary {
    let mut summary = MetricsSummary::default();

    for line in raw.lines() {
        if line.starts_with(TOTAL_REQUESTS_PREFIX) {
            if let Some(value) = trailing_number(line) {
                summary.total_requests += value;
            }
        }
        if line.starts_with(ACTIVE_REQUESTS_PREFIX) {
            if let Some(value) = trailing_number(line) {
                summary.active_requests += value;
            }
        }
    }

    summary
}

fn trailing_number(line: &str) -> Option<f64> {
    let value = TRAILING_NUMBER_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok());
    if value.is_none() {
        tracing::trace!("Skipping metrics sample without numeric value: {}", line);
    }
    value
}
