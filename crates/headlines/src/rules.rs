// ABOUTME: Rule classification and per-site ruleset lookup for headline extraction.
// ABOUTME: Maps a target URL's host to a curated ruleset, with a generic fallback and explicit overrides.

//! Rule resolution.
//!
//! A rule is either a CSS query or a bare tag name. Which rules apply to a page
//! is decided here:
//! - Explicit rules from the caller always win, in the order given.
//! - Otherwise the host is matched against [`KNOWN_SITES`]; first match wins.
//! - Otherwise [`GENERIC_RULES`] is used.

use url::Url;

/// How a rule is evaluated against the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Full CSS query matching.
    Query,
    /// Every element with this tag name.
    Tag,
}

/// Sites with curated rules, keyed by a host substring.
pub const KNOWN_SITES: &[(&str, &[&str])] = &[
    ("bbc.", &[".gs-c-promo-heading__title", "h3", "h2"]),
    ("cnn.", &[".cd__headline-text", "h2", "h3"]),
    ("nytimes", &[".css-1cmu9py.e1voiwgp0", "h2", "h3"]),
];

/// Rules used when no known site matches.
pub const GENERIC_RULES: &[&str] = &["h1", "h2", "h3", ".headline", ".title", ".entry-title"];

/// Classifies a rule as a CSS query or a bare tag name.
///
/// Anything starting with `.` or `#`, or containing a space, `>` or `[`, is a
/// query. Everything else is looked up by tag name.
pub fn classify(rule: &str) -> RuleKind {
    if rule.starts_with('.')
        || rule.starts_with('#')
        || rule.contains(' ')
        || rule.contains('>')
        || rule.contains('[')
    {
        RuleKind::Query
    } else {
        RuleKind::Tag
    }
}

/// Returns the lowercased host of `url`, or an empty string if it has none.
pub fn host_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_lowercase))
        .unwrap_or_default()
}

/// Returns the curated rules for the site behind `url`, or the generic rules.
pub fn guess_rules(url: &str) -> Vec<String> {
    let host = host_of(url);
    let rules = KNOWN_SITES
        .iter()
        .find(|(pattern, _)| host.contains(pattern))
        .map(|(_, rules)| *rules)
        .unwrap_or(GENERIC_RULES);
    rules.iter().map(|r| r.to_string()).collect()
}

/// Resolves the ruleset for `url`: explicit rules if any were given, otherwise a guess.
pub fn resolve_rules(url: &str, explicit: Option<&[String]>) -> Vec<String> {
    match explicit {
        Some(rules) if !rules.is_empty() => rules.to_vec(),
        _ => guess_rules(url),
    }
}
