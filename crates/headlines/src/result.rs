// ABOUTME: RunReport describes a completed scrape run.
// ABOUTME: Carries the rules used, counts found and saved, and renders the summary line.

use std::fmt;
use std::path::PathBuf;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub url: String,
    pub rules: Vec<String>,
    /// Unique headlines extracted from the page.
    pub found: usize,
    /// Headlines written to `output`.
    pub saved: usize,
    pub output: PathBuf,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found {} unique headlines - saved top {} to '{}'.",
            self.found,
            self.saved,
            self.output.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reports_found_and_saved() {
        let report = RunReport {
            url: "https://example.org/".to_string(),
            rules: vec!["h2".to_string()],
            found: 30,
            saved: 25,
            output: PathBuf::from("headlines.txt"),
        };
        assert_eq!(
            report.to_string(),
            "Found 30 unique headlines - saved top 25 to 'headlines.txt'."
        );
    }
}
