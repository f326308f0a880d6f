//! Book records produced by a scrape or loaded from the store.

use serde::{Deserialize, Serialize};

/// Sentinel for a rating word or stock count that could not be determined.
pub const UNKNOWN: i32 = -1;

/// The fields read from a book tile on a listing page.
///
/// Stock lives on the detail page, so a listing becomes a [`Book`] only once
/// its stock has been resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub title: String,
    /// Absolute URL of the detail page.
    pub link: String,
    pub price: f64,
    /// 1 to 5, or [`UNKNOWN`].
    pub rating: i32,
}

/// A fully resolved book.
///
/// The persisted form carries `title`, `price`, `stock` and `rating` only;
/// `link` is empty for books loaded from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    #[serde(skip)]
    pub link: String,
    pub price: f64,
    /// Copies available, or [`UNKNOWN`] when the detail page was missing.
    pub stock: i32,
    /// 1 to 5, or [`UNKNOWN`].
    pub rating: i32,
}

impl Book {
    /// Completes a listing with the stock count found on its detail page.
    pub fn from_listing(listing: Listing, stock: i32) -> Self {
        let Listing { title, link, price, rating } = listing;
        Self { title, link, price, stock, rating }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Listing {
        Listing {
            title: "Sharp Objects".to_string(),
            link: "http://books.toscrape.com/catalogue/sharp-objects_997/index.html".to_string(),
            price: 47.82,
            rating: 4,
        }
    }

    #[test]
    fn test_from_listing_keeps_fields() {
        let book = Book::from_listing(listing(), 20);
        assert_eq!(book.title, "Sharp Objects");
        assert_eq!(book.link, "http://books.toscrape.com/catalogue/sharp-objects_997/index.html");
        assert_eq!(book.price, 47.82);
        assert_eq!(book.rating, 4);
        assert_eq!(book.stock, 20);
    }

    #[test]
    fn test_serialized_fields() {
        let book = Book::from_listing(listing(), UNKNOWN);
        let value = serde_json::to_value(&book).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 4);
        assert!(obj.get("link").is_none());
        assert_eq!(obj["stock"], -1);
    }
}
