//! Error types for shelfscrape operations.
//!
//! This module defines [`ShelfError`], covering everything that can go wrong
//! while crawling the catalogue, extracting book fields, persisting results,
//! and ranking them.
//!
//! # Example
//!
//! ```rust
//! use shelfscrape_core::{Book, ShelfError, top_rated};
//!
//! let books: Vec<Book> = Vec::new();
//! match top_rated(&books, 10) {
//!     Ok(best) => println!("{} books", best.len()),
//!     Err(ShelfError::OutOfRange { count, len }) => println!("asked for {count} of {len}"),
//!     Err(e) => println!("Error: {e}"),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for crawling, extraction, storage and ranking.
#[derive(Error, Debug)]
pub enum ShelfError {
    /// HTTP request errors from reqwest.
    ///
    /// Covers DNS failures, refused connections and other transport problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// A page answered with a non-success status other than 404.
    #[error("Unexpected HTTP status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors, usually an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// A locator matched nothing in a page that should contain it.
    #[error("No element for {field} (selector `{selector}`)")]
    MissingElement { field: &'static str, selector: String },

    /// A field's text did not have the expected shape.
    ///
    /// Raised for price text without a `£<digits>.<digits>` amount and
    /// availability text without any digits.
    #[error("Could not parse {field} from {text:?}")]
    ParseError { field: &'static str, text: String },

    /// A ranking asked for more books than it may return.
    #[error("Cannot rank {count} of {len} books: count must be below {len}")]
    OutOfRange { count: usize, len: usize },

    /// The store is missing or holds no book collection.
    #[error("No books found in {0}")]
    NoData(PathBuf),

    /// I/O errors while reading or writing the store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization errors.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for ShelfError.
pub type Result<T> = std::result::Result<T, ShelfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShelfError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_out_of_range_error() {
        let err = ShelfError::OutOfRange { count: 10, len: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_parse_error_quotes_text() {
        let err = ShelfError::ParseError { field: "price", text: "free".to_string() };
        let msg = err.to_string();
        assert!(msg.contains("price"));
        assert!(msg.contains("\"free\""));
    }

    #[test]
    fn test_http_status_error() {
        let err = ShelfError::HttpStatus { status: 503, url: "http://example.com".to_string() };
        assert!(err.to_string().contains("503"));
    }
}
