use atlas_core::backend::AtlasBackend;
use atlas_core::metrics::{MetricsSummary, parse_metrics};
use std::sync::Arc;

pub const METRICS_FAILED: &str = "Failed to load metrics";

/// Landing page: system metrics panel.
pub struct LandingView {
    backend: Arc<dyn AtlasBackend>,
    pub metrics: Option<MetricsSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl LandingView {
    /// A fresh view starts out loading; call [`LandingView::load_metrics`].
    pub fn new(backend: Arc<dyn AtlasBackend>) -> Self {
        Self {
            backend,
            metrics: None,
            loading: true,
            error: None,
        }
    }

    /// Fetches and parses the metrics payload.
    ///
    /// On failure the previous metrics, if any, stay on screen next to the
    /// error.
    pub async fn load_metrics(&mut self) {
        self.loading = true;
        match self.backend.fetch_metrics().await {
            Ok(raw) => {
                self.metrics = Some(parse_metrics(&raw));
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Failed to load metrics: {}", e);
                self.error = Some(METRICS_FAILED.to_string());
            }
        }
        self.loading = false;
    }
}
