//! HTML parsing and CSS selector queries.
//!
//! This module provides the [`Document`] and [`Element`] types used by the
//! extractors to locate book fields in listing and detail pages.
//!
//! # Example
//!
//! ```rust
//! use shelfscrape_core::parse::Document;
//!
//! let html = r#"<p class="price_color">£51.77</p>"#;
//! let doc = Document::parse(html);
//! let price = doc.select_one("p.price_color").unwrap().unwrap();
//! assert_eq!(price.text(), "£51.77");
//! ```

use scraper::{Html, Selector};

use crate::{Result, ShelfError};

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ShelfError::HtmlParseError(format!("Invalid selector: {}", e)))
}

/// Represents a parsed HTML document.
///
/// A Document wraps a fetched page and answers CSS selector queries.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// html5ever recovers from malformed markup, so parsing itself never fails.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::HtmlParseError`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shelfscrape_core::parse::Document;
    ///
    /// let html = r#"<ol class="row"><li>First</li><li>Second</li></ol>"#;
    /// let doc = Document::parse(html);
    /// let elements = doc.select("ol.row li").unwrap();
    /// assert_eq!(elements.len(), 2);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = compile(selector)?;
        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Selects the first element matching a CSS selector, if any.
    pub fn select_one(&'_ self, selector: &str) -> Result<Option<Element<'_>>> {
        let sel = compile(selector)?;
        Ok(self.html.select(&sel).next().map(|el| Element { element: el }))
    }
}

/// A wrapper around scraper's ElementRef.
///
/// # Example
///
/// ```rust
/// use shelfscrape_core::parse::Document;
///
/// let html = r#"<a href="book_1/index.html" title="Book">Book...</a>"#;
/// let doc = Document::parse(html);
/// let link = &doc.select("a").unwrap()[0];
///
/// assert_eq!(link.attr("title"), Some("Book"));
/// assert_eq!(link.attr("href"), Some("book_1/index.html"));
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content of this element.
    ///
    /// Returns the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute.
    ///
    /// Returns `None` if the attribute is not present.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Iterates over the element's class names in the order they appear in
    /// the `class` attribute.
    ///
    /// scraper's own `classes()` hands them back sorted, which loses the
    /// position of words like the rating in `star-rating Three`.
    pub fn classes(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.element.value().attr("class").unwrap_or_default().split_whitespace()
    }

    /// Selects descendant elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::HtmlParseError`] if the selector is invalid.
    pub fn select(&self, selector: &str) -> Result<Vec<Element<'a>>> {
        let sel = compile(selector)?;
        Ok(self.element.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Selects the first descendant matching a CSS selector, if any.
    pub fn select_one(&self, selector: &str) -> Result<Option<Element<'a>>> {
        let sel = compile(selector)?;
        Ok(self.element.select(&sel).next().map(|el| Element { element: el }))
    }
}
