//! Crawl configuration.
//!
//! # Example
//!
//! ```rust
//! use shelfscrape_core::CatalogueConfig;
//!
//! let config = CatalogueConfig::builder()
//!     .base_url("http://localhost:8080")
//!     .timeout(10)
//!     .max_pages(3)
//!     .build();
//!
//! assert_eq!(config.listing_url(2), "http://localhost:8080/catalogue/page-2.html");
//! ```

use url::Url;

use crate::{Result, ShelfError};

pub const DEFAULT_BASE_URL: &str = "http://books.toscrape.com";

/// Settings for a catalogue crawl.
#[derive(Debug, Clone)]
pub struct CatalogueConfig {
    /// Site root, without the `/catalogue` segment (default: books.toscrape.com).
    pub base_url: String,

    /// Request timeout in seconds (default: 30).
    pub timeout: u64,

    /// User-Agent sent with every request.
    pub user_agent: String,

    /// Stop after this many listing pages even if more exist (default: unbounded).
    pub max_pages: Option<usize>,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: 30,
            user_agent: concat!("Mozilla/5.0 (compatible; Shelfscrape/", env!("CARGO_PKG_VERSION"), ")").to_string(),
            max_pages: None,
        }
    }
}

impl CatalogueConfig {
    /// Creates a new builder for CatalogueConfig.
    pub fn builder() -> CatalogueConfigBuilder {
        CatalogueConfigBuilder::new()
    }

    /// Prefix joined with relative book links, always ending in `/catalogue/`.
    pub fn catalogue_base(&self) -> String {
        format!("{}/catalogue/", self.base_url.trim_end_matches('/'))
    }

    /// URL of listing page `page` (1-based).
    pub fn listing_url(&self, page: usize) -> String {
        format!("{}page-{}.html", self.catalogue_base(), page)
    }

    /// Checks that the base URL is an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::InvalidUrl`] otherwise.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).map_err(|e| ShelfError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ShelfError::InvalidUrl(format!(
                "unsupported scheme `{}` in {}",
                other, self.base_url
            ))),
        }
    }
}

/// Builder for CatalogueConfig.
pub struct CatalogueConfigBuilder {
    config: CatalogueConfig,
}

impl CatalogueConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: CatalogueConfig::default() }
    }

    pub fn base_url(mut self, value: impl Into<String>) -> Self {
        self.config.base_url = value.into();
        self
    }

    pub fn timeout(mut self, secs: u64) -> Self {
        self.config.timeout = secs;
        self
    }

    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.user_agent = value.into();
        self
    }

    pub fn max_pages(mut self, value: usize) -> Self {
        self.config.max_pages = Some(value);
        self
    }

    pub fn build(self) -> CatalogueConfig {
        self.config
    }
}

impl Default for CatalogueConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
