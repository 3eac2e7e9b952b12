// ABOUTME: Writes extracted headlines to a text file as a numbered list.
// ABOUTME: Truncates to the configured maximum and reports how many entries were written.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ScrapeError;

/// Number of entries to keep; `0` keeps all of them.
fn limit(len: usize, max_items: usize) -> usize {
    if max_items == 0 {
        len
    } else {
        len.min(max_items)
    }
}

/// Formats up to `max_items` headlines as `"{index}. {text}\n"` lines, starting at 1.
pub fn format_numbered<S: AsRef<str>>(headlines: &[S], max_items: usize) -> String {
    let mut out = String::new();
    for (i, text) in headlines
        .iter()
        .take(limit(headlines.len(), max_items))
        .enumerate()
    {
        let text: &str = text.as_ref();
        let _ = writeln!(out, "{}. {}", i + 1, text);
    }
    out
}

/// Writes up to `max_items` headlines to `path` and returns how many were written.
pub fn save_headlines<S: AsRef<str>>(
    headlines: &[S],
    path: &Path,
    max_items: usize,
) -> Result<usize, ScrapeError> {
    let count = limit(headlines.len(), max_items);
    fs::write(path, format_numbered(headlines, max_items)).map_err(|source| {
        ScrapeError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!(path = %path.display(), count, "wrote headlines");
    Ok(count)
}
