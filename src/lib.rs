//! Scrape Counter-Strike match results from [HLTV.org](https://www.hltv.org).
//!
//! Start with [`HltvClient`] and [`HltvClient::get_results`].

pub use client::HltvClient;
pub use config::{HltvConfig, DEFAULT_BASE_URL};
pub use diagnostics::{Diagnostics, TracingDiagnostics};
pub use error::{HltvError, Result};
pub use model::*;
pub use self::scraper::{HttpLoader, PageLoader};

mod client;
mod config;
mod diagnostics;
pub mod error;
pub mod model;
mod scraper;
