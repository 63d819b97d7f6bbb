use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::scraper::{HttpLoader, PageLoader};

/// Site root used when no other base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://www.hltv.org";

/// Settings shared by every request an [`HltvClient`](crate::HltvClient) makes.
#[derive(Clone)]
pub struct HltvConfig {
    pub base_url: String,
    pub loader: Arc<dyn PageLoader>,
    pub diagnostics: Arc<dyn Diagnostics>,
}

impl HltvConfig {
    /// Default settings, loading pages through the given [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            loader: Arc::new(HttpLoader::new(client)),
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    /// Point the client at another site root, e.g. a mirror or a local fixture server.
    /// A trailing `/` is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Replace the HTTP loader, e.g. with one that retries, throttles or reads a cache.
    pub fn with_loader(mut self, loader: impl PageLoader + 'static) -> Self {
        self.loader = Arc::new(loader);
        self
    }

    /// Send caller-mistake warnings somewhere other than `tracing`.
    pub fn with_diagnostics(mut self, diagnostics: impl Diagnostics + 'static) -> Self {
        self.diagnostics = Arc::new(diagnostics);
        self
    }
}

impl Default for HltvConfig {
    fn default() -> Self {
        Self::with_client(reqwest::Client::new())
    }
}

impl Debug for HltvConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HltvConfig")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
