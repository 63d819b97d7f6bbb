use ::scraper::error::SelectorErrorKind;
use std::num::ParseIntError;

/// All errors that can occur during HLTV scraping operations.
#[derive(thiserror::Error, Debug)]
pub enum HltvError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A custom page loader could not produce the page.
    #[error("page loader failed for {url}: {message}")]
    Loader { url: String, message: String },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// Failed to parse an integer from scraped text.
    #[error("failed to parse integer: {0}")]
    IntParse(#[from] ParseIntError),

    /// An expected HTML element or attribute was not found on the page.
    #[error("expected element not found: {context}")]
    ElementNotFound { context: &'static str },

    /// A result link did not carry a match id segment.
    #[error("malformed match link: {href:?}")]
    MalformedMatchLink { href: String },
}

impl<'a> From<SelectorErrorKind<'a>> for HltvError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        HltvError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HltvError>;
