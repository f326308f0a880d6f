//! Page fetching.
//!
//! A [`PageSource`] turns a URL into a page body, reporting HTTP 404 as
//! `None` rather than as an error. [`HttpSource`] is the reqwest-backed
//! implementation; tests drive the crawler with in-memory sources.

use std::future::Future;
#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::Result;
use crate::parse::Document;
#[cfg(feature = "fetch")]
use crate::{CatalogueConfig, ShelfError};

/// Anything that can serve catalogue pages.
pub trait PageSource {
    /// Fetches `url`, returning its body or `None` when the page does not exist.
    fn get(&self, url: &str) -> impl Future<Output = Result<Option<String>>>;
}

/// Fetches `url` and parses the body, `None` on 404.
pub async fn fetch_page<S: PageSource>(source: &S, url: &str) -> Result<Option<Document>> {
    debug!(url, "fetching page");
    let body = source.get(url).await?;
    if body.is_none() {
        debug!(url, "page not found");
    }
    Ok(body.map(|html| Document::parse(&html)))
}

/// HTTP page source backed by a single reqwest client.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    timeout: u64,
}

#[cfg(feature = "fetch")]
impl HttpSource {
    /// Builds the client with the configured timeout and User-Agent.
    pub fn new(config: &CatalogueConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(ShelfError::HttpError)?;

        Ok(Self { client, timeout: config.timeout })
    }
}

#[cfg(feature = "fetch")]
impl PageSource for HttpSource {
    async fn get(&self, url: &str) -> Result<Option<String>> {
        let response = self
            .client
            .get(url)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ShelfError::Timeout { timeout: self.timeout }
                } else {
                    ShelfError::HttpError(e)
                }
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ShelfError::HttpStatus { status: status.as_u16(), url: url.to_string() });
        }

        Ok(Some(response.text().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct StaticSource(HashMap<&'static str, &'static str>);

    impl PageSource for StaticSource {
        async fn get(&self, url: &str) -> Result<Option<String>> {
            Ok(self.0.get(url).map(|body| body.to_string()))
        }
    }

    #[tokio::test]
    async fn test_fetch_page_found() {
        let source = StaticSource(HashMap::from([(
            "http://example.com/page-1.html",
            "<html><head><title>Page 1</title></head></html>",
        )]));

        let doc = fetch_page(&source, "http://example.com/page-1.html").await.unwrap();
        let doc = doc.unwrap();
        let title = doc.select_one("title").unwrap().unwrap();
        assert_eq!(title.text(), "Page 1");
    }

    #[tokio::test]
    async fn test_fetch_page_not_found() {
        let source = StaticSource(HashMap::new());
        let doc = fetch_page(&source, "http://example.com/page-9.html").await.unwrap();
        assert!(doc.is_none());
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_http_source_builds() {
        let config = CatalogueConfig::builder().timeout(5).build();
        let source = HttpSource::new(&config).unwrap();
        assert_eq!(source.timeout, 5);
    }
}
