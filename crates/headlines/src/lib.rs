// ABOUTME: Main library entry point for the headline scraper.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, Options, RunReport, ScrapeError, and the pipeline stages.

//! Headlines - fetch a page, pull out headline text, and save the top N.
//!
//! The pipeline is linear: fetch, resolve rules, extract, deduplicate,
//! truncate, write. Each stage is usable on its own.
//!
//! # Example
//!
//! ```no_run
//! use headlines::{Client, ScrapeError};
//!
//! fn main() -> Result<(), ScrapeError> {
//!     let client = Client::builder().max_items(10).build()?;
//!     let report = client.run("https://www.bbc.com/news")?;
//!     println!("{}", report);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod extract;
pub mod options;
pub mod resource;
pub mod result;
pub mod rules;
pub mod writer;

pub use crate::client::Client;
pub use crate::error::ScrapeError;
pub use crate::extract::{dedupe, extract_headlines};
pub use crate::options::{
    ClientBuilder, Options, DEFAULT_MAX_ITEMS, DEFAULT_OUTPUT, DEFAULT_USER_AGENT,
};
pub use crate::result::RunReport;
pub use crate::rules::{classify, guess_rules, resolve_rules, RuleKind};
pub use crate::writer::{format_numbered, save_headlines};
