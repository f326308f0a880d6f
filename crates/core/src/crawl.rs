//! Catalogue crawling.
//!
//! [`Catalogue::walk`] requests listing pages 1, 2, 3, ... until one answers
//! 404, extracts every book tile on each page and resolves each book's stock
//! from its detail page. Requests are issued one at a time.
//!
//! The aggregated list puts later pages first: every book from page N comes
//! before any book from page N-1, while books keep their on-page order.
//!
//! # Example
//!
//! ```rust,no_run
//! use shelfscrape_core::{CatalogueConfig, scrape_catalogue};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let books = scrape_catalogue(&CatalogueConfig::default()).await?;
//! println!("{} books", books.len());
//! # Ok(())
//! # }
//! ```

use tracing::{debug, info, warn};

use crate::book::{Book, Listing, UNKNOWN};
use crate::config::CatalogueConfig;
use crate::extract::{extract_listings, extract_stock};
use crate::fetch::{PageSource, fetch_page};
use crate::Result;

/// A catalogue site reachable through a [`PageSource`].
pub struct Catalogue<S> {
    source: S,
    config: CatalogueConfig,
}

impl<S: PageSource> Catalogue<S> {
    pub fn new(source: S, config: CatalogueConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &CatalogueConfig {
        &self.config
    }

    /// Crawls every listing page and returns all books, later pages first.
    ///
    /// # Errors
    ///
    /// Any transport or extraction failure aborts the whole walk.
    pub async fn walk(&self) -> Result<Vec<Book>> {
        info!(base_url = %self.config.base_url, "scraping catalogue");

        let mut pages = Vec::new();
        let mut page = 1;
        loop {
            if self.config.max_pages.is_some_and(|limit| page > limit) {
                info!(limit = page - 1, "page limit reached");
                break;
            }
            match self.scrape_page(page).await? {
                Some(books) => pages.push(books),
                None => break,
            }
            page += 1;
        }

        let books: Vec<Book> = pages.into_iter().rev().flatten().collect();
        info!(pages = page - 1, books = books.len(), "finished scraping catalogue");
        Ok(books)
    }

    /// Scrapes one listing page, `None` if it does not exist.
    pub async fn scrape_page(&self, page: usize) -> Result<Option<Vec<Book>>> {
        let url = self.config.listing_url(page);
        let listings = match fetch_page(&self.source, &url).await? {
            Some(doc) => extract_listings(&doc, &self.config.catalogue_base())?,
            None => return Ok(None),
        };
        debug!(page, books = listings.len(), "parsed listing page");

        let mut books = Vec::with_capacity(listings.len());
        for listing in listings {
            books.push(self.resolve_stock(listing).await?);
        }
        Ok(Some(books))
    }

    /// Fetches a listing's detail page and completes it with the stock count.
    ///
    /// A missing detail page yields a stock of [`UNKNOWN`].
    pub async fn resolve_stock(&self, listing: Listing) -> Result<Book> {
        let stock = match fetch_page(&self.source, &listing.link).await? {
            Some(doc) => extract_stock(&doc)?,
            None => {
                warn!(link = %listing.link, "detail page missing, stock unknown");
                UNKNOWN
            }
        };
        Ok(Book::from_listing(listing, stock))
    }
}

/// Crawls the configured catalogue over HTTP.
#[cfg(feature = "fetch")]
pub async fn scrape_catalogue(config: &CatalogueConfig) -> Result<Vec<Book>> {
    config.validate()?;
    let source = crate::fetch::HttpSource::new(config)?;
    Catalogue::new(source, config.clone()).walk().await
}
