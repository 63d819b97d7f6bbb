pub(crate) mod parsing;
pub(crate) mod results;

pub(crate) use ::scraper::Html;
use ::scraper::{ElementRef, Selector};
use async_trait::async_trait;
use tracing::debug;

use crate::error::{HltvError, Result};

/// Strategy for turning a URL into page markup.
///
/// Implement this to route requests through a headless browser, a proxy pool
/// or a local cache. Retries and rate limiting belong here as well.
#[async_trait]
pub trait PageLoader: Send + Sync {
    async fn load_page(&self, url: &str) -> Result<String>;
}

/// Loads pages with a plain HTTP GET.
#[derive(Debug, Clone, Default)]
pub struct HttpLoader {
    client: reqwest::Client,
}

impl HttpLoader {
    /// Load pages through the provided [`reqwest::Client`].
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageLoader for HttpLoader {
    async fn load_page(&self, url: &str) -> Result<String> {
        debug!(url, "fetching page");

        let response = self.client.get(url).send().await.map_err(|e| HltvError::Http {
            url: url.to_owned(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HltvError::UnexpectedStatus {
                url: url.to_owned(),
                status,
            });
        }

        response.text().await.map_err(|e| HltvError::ResponseBody {
            url: url.to_owned(),
            source: e,
        })
    }
}

/// Load a URL through `loader` and parse the markup as an HTML document.
pub(crate) async fn fetch_page(url: &str, loader: &dyn PageLoader) -> Result<Html> {
    let body = loader.load_page(url).await?;
    Ok(Html::parse_document(&body))
}

/// Concatenated, trimmed text content of the first element matching
/// `selector` inside `element`. Returns an empty string if nothing matches.
pub(crate) fn select_text(element: &ElementRef, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .map(|e| e.text().collect::<String>())
        .unwrap_or_default()
        .trim()
        .replace(['\n', '\t'], "")
}
