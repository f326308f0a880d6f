//! CSS locators for the books.toscrape.com markup.
//!
//! Each table groups the selectors used in one fetch context: the listing page
//! as a whole, a single book tile on that page, and a book's detail page.

/// Selectors applied to a whole listing page.
#[derive(Debug, Clone, Copy)]
pub struct ListingLocators {
    /// One match per book tile.
    pub books: &'static str,
}

/// Selectors applied inside one book tile of a listing page.
#[derive(Debug, Clone, Copy)]
pub struct BookLocators {
    /// Anchor carrying both the `title` and `href` attributes.
    pub title_link: &'static str,
    pub price: &'static str,
    /// Element whose class list spells the rating, e.g. `star-rating Three`.
    pub rating: &'static str,
}

/// Selectors applied to a book's detail page.
#[derive(Debug, Clone, Copy)]
pub struct DetailLocators {
    /// Availability text such as "In stock (22 available)".
    pub stock: &'static str,
}

pub const LISTING: ListingLocators = ListingLocators { books: "section ol.row li.col-xs-6" };

pub const BOOK: BookLocators = BookLocators {
    title_link: "article.product_pod h3 a",
    price: "article.product_pod .product_price p.price_color",
    rating: "article.product_pod p.star-rating",
};

pub const DETAIL: DetailLocators = DetailLocators { stock: ".col-sm-6 p.instock" };

/// Marker class present on every rating element; the other class holds the word.
pub const RATING_MARKER: &str = "star-rating";

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    #[test]
    fn test_locators_compile() {
        for selector in [LISTING.books, BOOK.title_link, BOOK.price, BOOK.rating, DETAIL.stock] {
            assert!(Selector::parse(selector).is_ok(), "selector {selector} should compile");
        }
    }
}
