//! Field extraction from listing tiles and detail pages.
//!
//! Listing tiles yield a [`Listing`] (title, link, price, rating). A book's
//! detail page yields its stock count. Text is coerced as follows:
//!
//! - price: the `£<digits>.<digits>` amount, as `f64`
//! - rating: the spelled-out class word (`One` .. `Five`), unknown words map to [`UNKNOWN`]
//! - stock: the first run of digits in the availability text

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::book::{Listing, UNKNOWN};
use crate::locators::{BOOK, DETAIL, LISTING, RATING_MARKER};
use crate::parse::{Document, Element};
use crate::{Result, ShelfError};

static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"£([0-9]+\.[0-9]+)").expect("price pattern"));
static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit pattern"));

fn require<'a>(found: Option<Element<'a>>, field: &'static str, selector: &str) -> Result<Element<'a>> {
    found.ok_or_else(|| ShelfError::MissingElement { field, selector: selector.to_string() })
}

/// Extracts every book tile on a listing page, in document order.
///
/// `catalogue_base` is prefixed to each relative `href` and must end with `/`.
pub fn extract_listings(doc: &Document, catalogue_base: &str) -> Result<Vec<Listing>> {
    doc.select(LISTING.books)?
        .iter()
        .map(|item| extract_listing(item, catalogue_base))
        .collect()
}

/// Extracts title, link, price and rating from one book tile.
///
/// # Errors
///
/// Returns [`ShelfError::MissingElement`] when the title anchor, price or rating
/// element is absent, and [`ShelfError::ParseError`] when the price text holds
/// no `£` amount.
pub fn extract_listing(item: &Element<'_>, catalogue_base: &str) -> Result<Listing> {
    let anchor = require(item.select_one(BOOK.title_link)?, "title", BOOK.title_link)?;
    let title = anchor.attr("title").unwrap_or_default().to_string();
    let link = format!("{}{}", catalogue_base, anchor.attr("href").unwrap_or_default());

    let price_node = require(item.select_one(BOOK.price)?, "price", BOOK.price)?;
    let price = parse_price(&price_node.text())?;

    let rating_node = require(item.select_one(BOOK.rating)?, "rating", BOOK.rating)?;
    let rating = rating_node
        .classes()
        .find(|class| *class != RATING_MARKER)
        .map_or(UNKNOWN, rating_from_word);

    debug!(%title, price, rating, "parsed book tile");
    Ok(Listing { title, link, price, rating })
}

/// Parses the amount out of a price text such as `£51.77`.
pub fn parse_price(text: &str) -> Result<f64> {
    PRICE_RE
        .captures(text)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .ok_or_else(|| ShelfError::ParseError { field: "price", text: text.trim().to_string() })
}

/// Maps a spelled-out rating word to its number, case-insensitively.
///
/// Unknown words yield [`UNKNOWN`].
pub fn rating_from_word(word: &str) -> i32 {
    match word.to_lowercase().as_str() {
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        _ => UNKNOWN,
    }
}

/// Extracts the stock count from a book's detail page.
///
/// # Errors
///
/// Returns [`ShelfError::MissingElement`] when the availability element is
/// absent and [`ShelfError::ParseError`] when its text holds no digits.
pub fn extract_stock(doc: &Document) -> Result<i32> {
    let node = require(doc.select_one(DETAIL.stock)?, "stock", DETAIL.stock)?;
    parse_stock(&node.text())
}

/// Parses the first run of digits in an availability text.
pub fn parse_stock(text: &str) -> Result<i32> {
    DIGITS_RE
        .find(text)
        .and_then(|m| m.as_str().parse::<i32>().ok())
        .ok_or_else(|| ShelfError::ParseError { field: "stock", text: text.trim().to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const BASE: &str = "http://books.toscrape.com/catalogue/";

    const BOOK_TILE: &str = r#"
<li class="col-xs-6 col-sm-4 col-md-3 col-lg-3">
    <article class="product_pod">
        <div class="image_container">
            <a href="a-light-in-the-attic_1000/index.html"><img src="../media/cache/2c/da/2cdad67c44b002e7ead0cc35693c0e8b.jpg"
                    alt="A Light in the Attic" class="thumbnail"></a>
        </div>
        <p class="star-rating Three">
            <i class="icon-star"></i>
            <i class="icon-star"></i>
            <i class="icon-star"></i>
            <i class="icon-star"></i>
            <i class="icon-star"></i>
        </p>
        <h3><a href="a-light-in-the-attic_1000/index.html" title="A Light in the Attic">A Light in the ...</a></h3>
        <div class="product_price">
            <p class="price_color">£51.77</p>
            <p class="instock availability">
                <i class="icon-ok"></i>
                In stock
            </p>
        </div>
    </article>
</li>
"#;

    const BOOK_DETAIL: &str = r#"
<div class="col-sm-6 product_main">
    <h1>A Light in the Attic</h1>
    <p class="price_color">£51.77</p>
    <p class="instock availability">
        <i class="icon-ok"></i>
        In stock (22 available)
    </p>
    <p class="star-rating Three"></p>
</div>
"#;

    fn tile(html: &str) -> Result<Listing> {
        let doc = Document::parse(html);
        let item = doc.select_one("li.col-xs-6").unwrap().unwrap();
        extract_listing(&item, BASE)
    }

    #[test]
    fn test_extract_listing() {
        let listing = tile(BOOK_TILE).unwrap();

        assert_eq!(listing.title, "A Light in the Attic");
        assert_eq!(listing.price, 51.77);
        assert_eq!(listing.rating, 3);
        assert_eq!(
            listing.link,
            "http://books.toscrape.com/catalogue/a-light-in-the-attic_1000/index.html"
        );
    }

    #[test]
    fn test_extract_stock() {
        let doc = Document::parse(BOOK_DETAIL);
        assert_eq!(extract_stock(&doc).unwrap(), 22);
    }

    #[test]
    fn test_unknown_rating_word() {
        let html = BOOK_TILE.replace("star-rating Three", "star-rating Seven");
        assert_eq!(tile(&html).unwrap().rating, UNKNOWN);
    }

    #[rstest]
    #[case("star-rating Three Five", 3)]
    #[case("star-rating Two Four", 2)]
    #[case("star-rating  One", 1)]
    fn test_rating_uses_first_word_after_marker(#[case] classes: &str, #[case] expected: i32) {
        let html = BOOK_TILE.replace("star-rating Three", classes);
        assert_eq!(tile(&html).unwrap().rating, expected);
    }

    #[test]
    fn test_rating_without_word() {
        let html = BOOK_TILE.replace("star-rating Three", "star-rating");
        assert_eq!(tile(&html).unwrap().rating, UNKNOWN);
    }

    #[test]
    fn test_missing_title_attribute_is_empty() {
        let html = BOOK_TILE.replace(r#" title="A Light in the Attic""#, "");
        assert_eq!(tile(&html).unwrap().title, "");
    }

    #[test]
    fn test_missing_price_element() {
        let html = BOOK_TILE.replace("price_color", "price_colour");
        assert!(matches!(tile(&html), Err(ShelfError::MissingElement { field: "price", .. })));
    }

    #[test]
    fn test_price_without_amount() {
        let html = BOOK_TILE.replace("£51.77", "Free");
        assert!(matches!(tile(&html), Err(ShelfError::ParseError { field: "price", .. })));
    }

    #[test]
    fn test_stock_without_digits() {
        let html = BOOK_DETAIL.replace("In stock (22 available)", "Out of stock");
        let doc = Document::parse(&html);
        assert!(matches!(extract_stock(&doc), Err(ShelfError::ParseError { field: "stock", .. })));
    }

    #[test]
    fn test_stock_element_missing() {
        let doc = Document::parse("<div class=\"col-sm-6\"><p>nothing here</p></div>");
        assert!(matches!(extract_stock(&doc), Err(ShelfError::MissingElement { field: "stock", .. })));
    }

    #[rstest]
    #[case("one", 1)]
    #[case("Two", 2)]
    #[case("THREE", 3)]
    #[case("Four", 4)]
    #[case("five", 5)]
    #[case("zero", UNKNOWN)]
    #[case("", UNKNOWN)]
    fn test_rating_from_word(#[case] word: &str, #[case] expected: i32) {
        assert_eq!(rating_from_word(word), expected);
    }

    #[rstest]
    #[case("£51.77", 51.77)]
    #[case("  £0.99\n", 0.99)]
    #[case("Â£13.99", 13.99)]
    fn test_parse_price(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(parse_price(text).unwrap(), expected);
    }

    #[rstest]
    #[case("In stock (22 available)", 22)]
    #[case("In stock (1 available)", 1)]
    #[case("3 left, 20 more arriving", 3)]
    fn test_parse_stock(#[case] text: &str, #[case] expected: i32) {
        assert_eq!(parse_stock(text).unwrap(), expected);
    }
}
