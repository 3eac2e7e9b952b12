// ABOUTME: Error types for the headline scraper covering fetch, extraction, and write failures.
// ABOUTME: Provides the ScrapeError enum with convenience constructors and boolean helpers.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can end a scrape run. None of them are retried.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The target address is empty, unparsable, or not http/https.
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The server answered with a non-2xx status.
    #[error("HTTP status {status} for url ({url})")]
    HttpStatus { url: String, status: u16 },

    /// Connection, DNS, timeout, TLS, or body-read failure.
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body is larger than the fetch limit.
    #[error("content from {url} exceeds {limit} bytes")]
    TooLarge { url: String, limit: usize },

    /// No rule matched any non-empty text.
    #[error("no headlines found on {url}")]
    EmptyResult { url: String },

    /// The headlines file could not be created or written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A local HTML file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScrapeError {
    /// Creates an InvalidUrl error.
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        ScrapeError::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Creates a Network error from an underlying reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        ScrapeError::Network {
            url: url.into(),
            source,
        }
    }

    /// Returns true for every failure that happens while fetching the page.
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            ScrapeError::InvalidUrl { .. }
                | ScrapeError::HttpStatus { .. }
                | ScrapeError::Network { .. }
                | ScrapeError::TooLarge { .. }
        )
    }

    /// Returns true if this is an HttpStatus error.
    pub fn is_http_status(&self) -> bool {
        matches!(self, ScrapeError::HttpStatus { .. })
    }

    /// Returns true if this is a Network error.
    pub fn is_network(&self) -> bool {
        matches!(self, ScrapeError::Network { .. })
    }

    /// Returns true if this is an EmptyResult error.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, ScrapeError::EmptyResult { .. })
    }

    /// Returns true if this is a Write error.
    pub fn is_write(&self) -> bool {
        matches!(self, ScrapeError::Write { .. })
    }

    /// Status code of an HttpStatus error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ScrapeError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
