pub mod book;
pub mod config;
pub mod crawl;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod locators;
pub mod parse;
pub mod rank;
pub mod store;

pub use book::{Book, Listing, UNKNOWN};
pub use config::{CatalogueConfig, CatalogueConfigBuilder, DEFAULT_BASE_URL};
pub use crawl::Catalogue;
#[cfg(feature = "fetch")]
pub use crawl::scrape_catalogue;
pub use error::{Result, ShelfError};
pub use extract::{extract_listing, extract_listings, extract_stock, parse_price, parse_stock, rating_from_word};
#[cfg(feature = "fetch")]
pub use fetch::HttpSource;
pub use fetch::{PageSource, fetch_page};
pub use parse::Document;
pub use rank::{Ranking, cheapest, most_stocked, top_rated};
pub use store::{load_books, save_books};
