//! Book rankings.
//!
//! Each ranking returns a sorted, truncated copy of the input. Sorting is
//! stable, so books with equal keys keep their original relative order.
//!
//! A ranking may return at most `len - 1` books: asking for `count >= len`
//! fails with [`ShelfError::OutOfRange`].

use std::cmp::Ordering;
use std::fmt;

use crate::book::Book;
use crate::{Result, ShelfError};

/// The available orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    /// Highest rating first.
    TopRated,
    /// Lowest price first.
    Cheapest,
    /// Largest stock first.
    MostStocked,
}

impl Ranking {
    /// Applies this ranking to `books`, keeping the first `count`.
    pub fn apply(self, books: &[Book], count: usize) -> Result<Vec<Book>> {
        match self {
            Self::TopRated => top_rated(books, count),
            Self::Cheapest => cheapest(books, count),
            Self::MostStocked => most_stocked(books, count),
        }
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopRated => write!(f, "top rated"),
            Self::Cheapest => write!(f, "cheapest"),
            Self::MostStocked => write!(f, "most stocked"),
        }
    }
}

fn ranked(books: &[Book], count: usize, order: impl FnMut(&Book, &Book) -> Ordering) -> Result<Vec<Book>> {
    if count >= books.len() {
        return Err(ShelfError::OutOfRange { count, len: books.len() });
    }

    let mut sorted = books.to_vec();
    sorted.sort_by(order);
    sorted.truncate(count);
    Ok(sorted)
}

/// Books by descending rating.
pub fn top_rated(books: &[Book], count: usize) -> Result<Vec<Book>> {
    ranked(books, count, |a, b| b.rating.cmp(&a.rating))
}

/// Books by ascending price.
pub fn cheapest(books: &[Book], count: usize) -> Result<Vec<Book>> {
    ranked(books, count, |a, b| a.price.total_cmp(&b.price))
}

/// Books by descending stock.
pub fn most_stocked(books: &[Book], count: usize) -> Result<Vec<Book>> {
    ranked(books, count, |a, b| b.stock.cmp(&a.stock))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn book(title: &str, price: f64, stock: i32, rating: i32) -> Book {
        Book { title: title.to_string(), link: String::new(), price, stock, rating }
    }

    fn shelf() -> Vec<Book> {
        vec![
            book("a", 20.0, 5, 3),
            book("b", 10.0, 1, 5),
            book("c", 30.0, 22, 3),
            book("d", 15.5, -1, 1),
            book("e", 10.0, 5, 5),
        ]
    }

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_top_rated_is_stable() {
        let best = top_rated(&shelf(), 4).unwrap();
        assert_eq!(titles(&best), vec!["b", "e", "a", "c"]);
    }

    #[test]
    fn test_cheapest() {
        let cheap = cheapest(&shelf(), 3).unwrap();
        assert_eq!(titles(&cheap), vec!["b", "e", "d"]);
    }

    #[test]
    fn test_most_stocked() {
        let stocked = most_stocked(&shelf(), 3).unwrap();
        assert_eq!(titles(&stocked), vec!["c", "a", "e"]);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let books = shelf();
        let _ = cheapest(&books, 2).unwrap();
        assert_eq!(titles(&books), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_zero_count() {
        assert!(top_rated(&shelf(), 0).unwrap().is_empty());
    }

    #[rstest]
    #[case(Ranking::TopRated)]
    #[case(Ranking::Cheapest)]
    #[case(Ranking::MostStocked)]
    fn test_count_must_be_below_len(#[case] ranking: Ranking) {
        let books = shelf();
        assert!(matches!(
            ranking.apply(&books, books.len()),
            Err(ShelfError::OutOfRange { count: 5, len: 5 })
        ));
        assert!(matches!(ranking.apply(&books, 50), Err(ShelfError::OutOfRange { .. })));
        assert_eq!(ranking.apply(&books, books.len() - 1).unwrap().len(), 4);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(top_rated(&[], 0), Err(ShelfError::OutOfRange { count: 0, len: 0 })));
    }

    #[test]
    fn test_display() {
        assert_eq!(Ranking::MostStocked.to_string(), "most stocked");
    }
}
