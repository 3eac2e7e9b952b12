// ABOUTME: Configuration options for a scrape run including Options and ClientBuilder.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances with custom settings.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::client::Client;
use crate::error::ScrapeError;

/// User agent sent with every request unless overridden.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; HeadlineScraper/1.0; +https://example.com/bot)";

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "headlines.txt";

/// Default number of headlines written.
pub const DEFAULT_MAX_ITEMS: usize = 25;

/// Configuration options for a scrape run.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    pub headers: HashMap<String, String>,
    /// Pause before the request is sent.
    pub delay: Duration,
    /// Maximum headlines written; 0 writes all of them.
    pub max_items: usize,
    pub output: PathBuf,
    /// Explicit rules; when set and non-empty they replace the guessed ones.
    pub rules: Option<Vec<String>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: HashMap::new(),
            delay: Duration::from_millis(500),
            max_items: DEFAULT_MAX_ITEMS,
            output: PathBuf::from(DEFAULT_OUTPUT),
            rules: None,
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Add a custom header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Set the politeness delay before the request.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.opts.delay = delay;
        self
    }

    /// Set the maximum number of headlines written (0 for no limit).
    pub fn max_items(mut self, max_items: usize) -> Self {
        self.opts.max_items = max_items;
        self
    }

    /// Set the output file path.
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.opts.output = output.into();
        self
    }

    /// Use explicit rules instead of guessing them from the host.
    pub fn rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opts.rules = Some(rules.into_iter().map(Into::into).collect());
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Result<Client, ScrapeError> {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
