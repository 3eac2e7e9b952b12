// ABOUTME: The Client struct that runs the fetch, extract, and write pipeline.
// ABOUTME: Provides each stage separately, process() for extract+write, and run() for the whole sequence.

use std::thread;

use tracing::{debug, info};

use crate::error::ScrapeError;
use crate::extract::extract_headlines;
use crate::options::{ClientBuilder, Options};
use crate::resource::{fetch, FetchOptions};
use crate::result::RunReport;
use crate::rules::resolve_rules;
use crate::writer::save_headlines;

/// Scrapes headlines from a single page.
///
/// Stages run strictly in sequence: delay, fetch, resolve rules, extract,
/// write. A failed stage ends the run; nothing is retried.
#[derive(Debug, Clone)]
pub struct Client {
    opts: Options,
    http_client: reqwest::blocking::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Result<Self, ScrapeError> {
        let http_client = reqwest::blocking::Client::builder()
            .user_agent(&opts.user_agent)
            .timeout(opts.timeout)
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| ScrapeError::network("", e))?;

        Ok(Self { opts, http_client })
    }

    /// The options this client was built with.
    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Waits for the politeness delay, then fetches `url` and decodes the body.
    pub fn fetch_html(&self, url: &str) -> Result<String, ScrapeError> {
        if !self.opts.delay.is_zero() {
            debug!(delay_ms = self.opts.delay.as_millis() as u64, "politeness delay");
            thread::sleep(self.opts.delay);
        }

        let fetch_opts = FetchOptions {
            headers: self.opts.headers.clone(),
        };
        let result = fetch(&self.http_client, url, &fetch_opts)?;
        Ok(result.text())
    }

    /// The rules that apply to `url`: the configured ones, or a guess from its host.
    pub fn rules_for(&self, url: &str) -> Vec<String> {
        resolve_rules(url, self.opts.rules.as_deref())
    }

    /// Extracts headlines from `html` using the rules for `url`.
    ///
    /// Returns `EmptyResult` when no rule matched any text.
    pub fn extract(&self, html: &str, url: &str) -> Result<Vec<String>, ScrapeError> {
        let rules = self.rules_for(url);
        let headlines = extract_headlines(html, &rules);
        if headlines.is_empty() {
            return Err(ScrapeError::EmptyResult {
                url: url.to_string(),
            });
        }
        Ok(headlines)
    }

    /// Writes headlines to the configured output, truncated to the configured maximum.
    pub fn save(&self, headlines: &[String]) -> Result<usize, ScrapeError> {
        save_headlines(headlines, &self.opts.output, self.opts.max_items)
    }

    /// Extracts headlines from already fetched `html` and writes them out.
    ///
    /// Nothing is written when no headline was found.
    pub fn process(&self, html: &str, url: &str) -> Result<RunReport, ScrapeError> {
        let rules = self.rules_for(url);
        let headlines = self.extract(html, url)?;
        let saved = self.save(&headlines)?;

        info!(url, found = headlines.len(), saved, "run complete");

        Ok(RunReport {
            url: url.to_string(),
            rules,
            found: headlines.len(),
            saved,
            output: self.opts.output.clone(),
        })
    }

    /// Runs the whole pipeline for `url`.
    ///
    /// No file is written unless the fetch succeeded and at least one
    /// headline was found.
    pub fn run(&self, url: &str) -> Result<RunReport, ScrapeError> {
        let html = self.fetch_html(url)?;
        self.process(&html, url)
    }
}
