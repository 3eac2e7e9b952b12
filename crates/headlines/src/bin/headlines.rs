// ABOUTME: CLI binary for the headline scraper.
// ABOUTME: Fetches a page (or reads a local HTML file), extracts headlines, and saves the top N to a text file.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use headlines::{Client, ScrapeError, DEFAULT_MAX_ITEMS, DEFAULT_OUTPUT};

/// Scrape top headlines from a news website and save them to a .txt file.
#[derive(Parser, Debug)]
#[command(name = "headlines")]
#[command(about = "Scrape top headlines from a news website and save to a .txt file")]
struct Args {
    /// URL to scrape (default: BBC News)
    #[arg(short = 'u', long = "url", default_value = "https://www.bbc.com/news")]
    url: String,

    /// Output .txt file
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// CSS/tag selector to look for (repeatable). If omitted, selectors are guessed from the host.
    #[arg(short = 's', long = "selector")]
    selectors: Vec<String>,

    /// Maximum number of headlines to save (0 saves all; negative values are rejected)
    #[arg(short = 'm', long = "max", default_value_t = DEFAULT_MAX_ITEMS)]
    max: usize,

    /// Delay before the request in seconds (politeness)
    #[arg(short = 'd', long = "delay", default_value_t = 0.5)]
    delay: f64,

    /// Parse a local HTML file instead of fetching; --url still picks the selectors
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long = "log-level", default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(&args.log_level) {
        eprintln!("error: invalid log filter {:?}: {}", args.log_level, e);
        return ExitCode::from(2);
    }

    let delay = Duration::try_from_secs_f64(args.delay).unwrap_or(Duration::ZERO);
    let mut builder = Client::builder()
        .output(&args.output)
        .max_items(args.max)
        .delay(delay);
    if !args.selectors.is_empty() {
        builder = builder.rules(args.selectors.iter().cloned());
    }

    let client = match builder.build() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(1);
        }
    };

    let html = if let Some(html_path) = &args.html {
        println!("Reading: {}", html_path.display());
        match fs::read_to_string(html_path) {
            Ok(html) => html,
            Err(source) => {
                let err = ScrapeError::Read {
                    path: html_path.clone(),
                    source,
                };
                eprintln!("error: {}", err);
                return ExitCode::from(1);
            }
        }
    } else {
        println!("Scraping: {}", args.url);
        match client.fetch_html(&args.url) {
            Ok(html) => html,
            Err(e) if e.is_http_status() => {
                println!("HTTP error while fetching: {}", e);
                return ExitCode::SUCCESS;
            }
            Err(e) => {
                println!("Network error while fetching: {}", e);
                return ExitCode::SUCCESS;
            }
        }
    };

    println!(
        "Using selectors (in order): {:?}",
        client.rules_for(&args.url)
    );

    match client.process(&html, &args.url) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) if e.is_empty_result() => {
            println!(
                "No headlines found with the provided selectors. Try adding selectors using --selector"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}
