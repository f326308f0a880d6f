use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("shelfscrape")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Shelfscrape Contributors")
        .about("Scrape and rank books from books.toscrape.com")
        .arg(
            clap::arg!(--data_file <FILE> "JSON file holding scraped books")
                .default_value("data/bookInfo.json")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(--log_file <FILE> "Log file")
                .default_value("logs/logs.txt")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-s --source <SOURCE> "Skip the first menu: scrape or load")
                .value_parser(["scrape", "s", "load", "json", "u"]),
        )
        .arg(clap::arg!(-n --count <NUM> "Number of books shown per ranking").default_value("10"))
        .arg(clap::arg!(--base_url <URL> "Catalogue site root").default_value("http://books.toscrape.com"))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--user_agent <UA> "Custom User-Agent for HTTP requests"))
        .arg(clap::arg!(--max_pages <NUM> "Stop scraping after this many listing pages"))
        .arg(clap::arg!(-v --verbose "Print progress to stderr"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "shelfscrape", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "shelfscrape", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "shelfscrape", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "shelfscrape", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
