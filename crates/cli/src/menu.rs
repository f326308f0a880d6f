//! Console menus.
//!
//! Prompts are written to the output handle and answers read line by line
//! from the input handle. End of input is reported as `None` so callers can
//! shut down cleanly.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use shelfscrape_core::{Book, Ranking, ShelfError};
use tracing::{debug, warn};

use crate::echo;

const START_INFO: &str = "
    SCRAPE BOOKS FROM BOOKS.TOSCRAPE.COM OR USE PRESCRAPED DATA
    !! -- SCRAPING MIGHT TAKE A WHILE TO GET ALL WEBSITES BOOKS -- !!
    !! -- ALSO MIGHT FAIL DUE TO SITE NOT RESPONDING TO REQUEST -- !!
    S - SCRAPE
    U - USE PRE-DATA
";

const RULE: &str = "--------------------";

/// Where the book collection comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Crawl the catalogue and overwrite the data file.
    Scrape,
    /// Read the data file written by an earlier scrape.
    Load,
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scrape" | "s" => Ok(Self::Scrape),
            "load" | "json" | "u" => Ok(Self::Load),
            _ => Err(format!("Invalid source: {}. Valid options: scrape, load", s)),
        }
    }
}

/// A command from the ranking menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Rank(Ranking),
    Quit,
}

impl Command {
    /// Maps a menu key to its command.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "b" => Some(Self::Rank(Ranking::TopRated)),
            "c" => Some(Self::Rank(Ranking::Cheapest)),
            "s" => Some(Self::Rank(Ranking::MostStocked)),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

pub struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts until a non-empty line is entered.
    pub fn get_input(&mut self, msg: &str) -> io::Result<Option<String>> {
        loop {
            write!(self.out, "{}", msg)?;
            self.out.flush()?;
            match self.read_line()? {
                None => return Ok(None),
                Some(line) if line.is_empty() => writeln!(self.out, "ENTER SOMETHING PLEASE...")?,
                Some(line) => return Ok(Some(line)),
            }
        }
    }

    /// Prompts until one of `choices` is entered, ignoring case.
    pub fn get_choice(&mut self, msg: &str, choices: &[&str]) -> io::Result<Option<String>> {
        writeln!(self.out, "{}", msg)?;
        loop {
            match self.get_input("> ")? {
                None => return Ok(None),
                Some(answer) => {
                    let answer = answer.to_lowercase();
                    if choices.contains(&answer.as_str()) {
                        return Ok(Some(answer));
                    }
                }
            }
        }
    }

    pub fn choose_source(&mut self) -> io::Result<Option<Source>> {
        writeln!(self.out, "{}", START_INFO)?;
        let choice = self.get_choice("S[crape] or U[se json]", &["s", "u"])?;
        Ok(choice.map(|c| if c == "s" { Source::Scrape } else { Source::Load }))
    }

    pub fn announce(&mut self, source: Source) -> io::Result<()> {
        match source {
            Source::Scrape => writeln!(self.out, "SCRAPING"),
            Source::Load => writeln!(self.out, "USING JSON"),
        }
    }

    /// Asks for confirmation; end of input counts as yes.
    pub fn confirm_quit(&mut self) -> io::Result<bool> {
        let answer = self.get_choice("ARE YOU SURE! Y[ES], N[O]", &["y", "n"])?;
        Ok(answer.is_none_or(|a| a == "y"))
    }

    pub fn print_books(&mut self, books: &[Book], msg: &str) -> io::Result<()> {
        writeln!(self.out, "--- {} ---", msg)?;
        writeln!(self.out, "{}", RULE)?;
        for book in books {
            writeln!(self.out, "TITLE: {}", book.title)?;
            writeln!(self.out, "PRICE: {}", book.price)?;
            writeln!(self.out, "RATING: {}", book.rating)?;
            writeln!(self.out, "STOCK: {}", book.stock)?;
            writeln!(self.out, "{}", RULE)?;
        }
        Ok(())
    }

    /// Runs the ranking menu until the user quits or input ends.
    ///
    /// A ranking that asks for too many books is reported and the menu continues.
    pub fn rank_loop(&mut self, books: &[Book], count: usize) -> io::Result<()> {
        loop {
            writeln!(
                self.out,
                "
    SCRAPED BOOKS FROM 'BOOKS.TOSCRAPE.COM'
    FOUND A TOTAL OF {} BOOKS...

    B - GET TOP {} RATINGS
    C - GET TOP {} CHEAPEST
    S - GET MOST STOCKED BOOKS
    Q - QUIT
",
                books.len(),
                count,
                count
            )?;

            let Some(key) = self.get_input("> ")? else {
                return Ok(());
            };

            match Command::from_key(&key.to_lowercase()) {
                Some(Command::Quit) => {
                    if self.confirm_quit()? {
                        return Ok(());
                    }
                }
                Some(Command::Rank(ranking)) => {
                    debug!(%ranking, count, "ranking books");
                    match ranking.apply(books, count) {
                        Ok(ranked) => self.print_books(&ranked, "RESULT")?,
                        Err(e @ ShelfError::OutOfRange { .. }) => {
                            warn!(error = %e, "ranking rejected");
                            echo::print_error(&e.to_string());
                        }
                        Err(e) => return Err(io::Error::other(e)),
                    }
                }
                None => {}
            }
        }
    }

    pub fn farewell(&mut self) -> io::Result<()> {
        writeln!(self.out, "EXITING...")
    }
}
