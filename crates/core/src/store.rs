//! JSON persistence of scraped books.
//!
//! The store is a single UTF-8 file shaped as `{ "books": [ ... ] }`,
//! pretty-printed with four-space indentation. Each record carries `title`,
//! `price`, `stock` and `rating`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::book::Book;
use crate::{Result, ShelfError};

#[derive(Serialize)]
struct ShelfRef<'a> {
    books: &'a [Book],
}

#[derive(Deserialize)]
struct Shelf {
    books: Option<Vec<Book>>,
}

/// Serializes books into the store format.
pub fn to_json(books: &[Book]) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    ShelfRef { books }.serialize(&mut ser)?;
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes books to `path`, creating parent directories as needed.
pub fn save_books(path: &Path, books: &[Book]) -> Result<()> {
    debug!(path = %path.display(), books = books.len(), "writing books");

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, to_json(books)?)?;
    Ok(())
}

/// Loads books previously written by [`save_books`].
///
/// # Errors
///
/// Returns [`ShelfError::NoData`] when the file does not exist, is empty, or
/// holds `null` or no `books` collection.
pub fn load_books(path: &Path) -> Result<Vec<Book>> {
    debug!(path = %path.display(), "loading books");

    if !path.exists() {
        return Err(ShelfError::NoData(path.to_path_buf()));
    }

    let text = fs::read_to_string(path)?;
    if text.trim().is_empty() {
        return Err(ShelfError::NoData(path.to_path_buf()));
    }

    let shelf: Option<Shelf> = serde_json::from_str(&text)?;
    shelf
        .and_then(|shelf| shelf.books)
        .ok_or_else(|| ShelfError::NoData(path.to_path_buf()))
}
