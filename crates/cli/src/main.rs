use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, anyhow};
use clap::Parser;
use shelfscrape_core::{Book, CatalogueConfig, DEFAULT_BASE_URL, load_books, save_books, scrape_catalogue};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod echo;
mod menu;

use menu::{Console, Source};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scrape books from books.toscrape.com and rank them by rating, price or stock
#[derive(Parser, Debug)]
#[command(name = "shelfscrape")]
#[command(author = "Shelfscrape Contributors")]
#[command(version)]
#[command(about = "Scrape and rank books from books.toscrape.com", long_about = None)]
struct Args {
    /// JSON file holding scraped books
    #[arg(long, default_value = "data/bookInfo.json", value_name = "FILE")]
    data_file: PathBuf,

    /// Log file
    #[arg(long, default_value = "logs/logs.txt", value_name = "FILE")]
    log_file: PathBuf,

    /// Skip the first menu: scrape or load
    #[arg(short, long, value_name = "SOURCE")]
    source: Option<Source>,

    /// Number of books shown per ranking
    #[arg(short = 'n', long, default_value = "10", value_name = "NUM")]
    count: usize,

    /// Catalogue site root
    #[arg(long, default_value = DEFAULT_BASE_URL, value_name = "URL")]
    base_url: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Stop scraping after this many listing pages
    #[arg(long, value_name = "NUM")]
    max_pages: Option<usize>,

    /// Print progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn catalogue_config(&self) -> CatalogueConfig {
        let mut builder = CatalogueConfig::builder().base_url(&self.base_url).timeout(self.timeout);
        if let Some(ua) = &self.user_agent {
            builder = builder.user_agent(ua);
        }
        if let Some(limit) = self.max_pages {
            builder = builder.max_pages(limit);
        }
        builder.build()
    }
}

/// Sends `tracing` output to `path`, honouring `RUST_LOG` when set.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shelfscrape=debug,shelfscrape_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| anyhow!(e))
}

async fn scrape(args: &Args) -> anyhow::Result<Vec<Book>> {
    let config = args.catalogue_config();
    if args.verbose {
        echo::print_step(1, 2, &format!("Scraping {}", config.base_url));
    }

    let books = scrape_catalogue(&config).await.context("Failed to scrape catalogue")?;

    if args.verbose {
        echo::print_step(2, 2, &format!("Writing {}", args.data_file.display()));
    }
    save_books(&args.data_file, &books)
        .with_context(|| format!("Failed to write books to {}", args.data_file.display()))?;

    if args.verbose {
        echo::print_success(&format!("Scraped {} books", books.len()));
    }
    Ok(books)
}

fn load(args: &Args) -> anyhow::Result<Vec<Book>> {
    let books = load_books(&args.data_file)
        .with_context(|| format!("Failed to load books from {}", args.data_file.display()))?;

    if args.verbose {
        echo::print_info(&format!("Loaded {} books from {}", books.len(), args.data_file.display()));
    }
    Ok(books)
}

/// Asks for a source until books are available.
///
/// With `--source`, a failure ends the program; interactively the user is
/// asked again. Returns `None` when input ends.
async fn obtain_books<R: io::BufRead, W: io::Write>(
    console: &mut Console<R, W>, args: &Args,
) -> anyhow::Result<Option<Vec<Book>>> {
    loop {
        let source = match args.source {
            Some(source) => source,
            None => match console.choose_source()? {
                Some(source) => source,
                None => return Ok(None),
            },
        };

        console.announce(source)?;
        let result = match source {
            Source::Scrape => scrape(args).await,
            Source::Load => load(args),
        };

        match result {
            Ok(books) => return Ok(Some(books)),
            Err(e) if args.source.is_none() => {
                error!(error = %format!("{e:#}"), "could not obtain books");
                echo::print_error(&format!("{e:#}"));
            }
            Err(e) => return Err(e),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_file)?;

    if args.verbose {
        echo::print_banner();
    }
    info!("starting app");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());

    if let Some(books) = obtain_books(&mut console, &args).await? {
        console.rank_loop(&books, args.count)?;
    }

    console.farewell()?;
    info!("terminating app");
    Ok(())
}
