// ABOUTME: Rule-driven headline extraction from HTML documents.
// ABOUTME: Applies rules in order, collects normalized text, and deduplicates preserving first-seen order.

//! Headline extraction.
//!
//! Key behaviors:
//! - Rules are applied in order; every rule contributes (unlike field
//!   extraction, there is no "first rule wins").
//! - A query that fails to parse is retried as a tag-name lookup.
//! - Text joins visible descendant text segments with spaces and collapses
//!   whitespace; script, style and template contents are skipped.
//! - Empty text is skipped; duplicates keep their first position.

use std::collections::HashSet;

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node, Selector};
use tracing::{debug, warn};

use crate::rules::{classify, RuleKind};

/// Extracts deduplicated headlines from `html` by applying `rules` in order.
pub fn extract_headlines<S: AsRef<str>>(html: &str, rules: &[S]) -> Vec<String> {
    let doc = Html::parse_document(html);

    let mut found: Vec<String> = Vec::new();
    for rule in rules {
        let rule: &str = rule.as_ref();
        let before = found.len();
        found.extend(
            select_rule(&doc, rule)
                .into_iter()
                .map(node_text)
                .filter(|text| !text.is_empty()),
        );
        debug!(rule, matched = found.len() - before, "applied rule");
    }

    dedupe(found)
}

/// Resolves the elements matched by a single rule, in document order.
pub fn select_rule<'a>(doc: &'a Html, rule: &str) -> Vec<ElementRef<'a>> {
    match classify(rule) {
        RuleKind::Query => match Selector::parse(rule) {
            Ok(selector) => doc.select(&selector).collect(),
            Err(err) => {
                warn!(rule, error = %err, "invalid selector, falling back to tag name");
                select_tag(doc, rule)
            }
        },
        RuleKind::Tag => select_tag(doc, rule),
    }
}

/// Every element whose tag name equals `tag`.
fn select_tag<'a>(doc: &'a Html, tag: &str) -> Vec<ElementRef<'a>> {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name().eq_ignore_ascii_case(tag))
        .collect()
}

/// Elements whose text is never shown on the page.
const HIDDEN_TAGS: &[&str] = &["script", "style", "template"];

/// Visible text of an element: segments joined by single spaces, trimmed.
///
/// Text under `script`, `style` and `template` is left out.
pub fn node_text(el: ElementRef<'_>) -> String {
    let mut words = Vec::new();
    collect_visible_text(*el, &mut words);
    words.join(" ")
}

fn collect_visible_text<'a>(node: NodeRef<'a, Node>, words: &mut Vec<&'a str>) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => words.extend(text.split_whitespace()),
            Node::Element(el) if HIDDEN_TAGS.contains(&el.name()) => {}
            Node::Element(_) => collect_visible_text(child, words),
            _ => {}
        }
    }
}

/// Drops later duplicates, keeping the first occurrence of each string in place.
pub fn dedupe<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html>
        <head><title>Front Page</title></head>
        <body>
            <div id="main">
                <h1>  Markets   rally </h1>
                <h2 class="headline">Storm hits <b>coast</b></h2>
                <h2>Election results</h2>
            </div>
            <div class="sidebar">
                <h2>Markets rally</h2>
                <span class="headline">Weather update</span>
                <h3></h3>
                <h3>   </h3>
                <a href="/more">More stories</a>
                <a>No link</a>
            </div>
        </body>
        </html>
    "#;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn dedupe_keeps_first_occurrence_in_order() {
        assert_eq!(
            dedupe(strings(&["A", "B", "A", "C"])),
            strings(&["A", "B", "C"])
        );
        assert_eq!(dedupe(Vec::<String>::new()), Vec::<String>::new());
    }

    #[test]
    fn empty_text_is_skipped() {
        let html = "<p></p><p>Hello</p><p>  </p>";
        assert_eq!(extract_headlines(html, &["p"]), strings(&["Hello"]));
    }

    #[test]
    fn text_is_joined_and_whitespace_collapsed() {
        let html = "<h2>  Storm\n hits <b>the</b>   coast  </h2>";
        assert_eq!(
            extract_headlines(html, &["h2"]),
            strings(&["Storm hits the coast"])
        );
    }

    #[test]
    fn script_style_and_template_text_is_ignored() {
        let html = concat!(
            "<h2>Storm hits coast<script>var ad = 1;</script>",
            "<style>.x{color:red}</style></h2>",
            "<h2>Storm hits <template><b>draft</b></template>coast</h2>",
        );
        assert_eq!(
            extract_headlines(html, &["h2"]),
            strings(&["Storm hits coast"])
        );
    }

    #[test]
    fn element_with_only_script_text_is_empty() {
        let html = "<h2><script>track()</script></h2><h2>Real story</h2>";
        assert_eq!(extract_headlines(html, &["h2"]), strings(&["Real story"]));
    }

    #[test]
    fn adjacent_segments_are_separated_by_a_space() {
        let html = "<h2>Hel<b>lo</b></h2>";
        assert_eq!(extract_headlines(html, &["h2"]), strings(&["Hel lo"]));
    }

    #[test]
    fn rules_apply_in_order_and_later_duplicates_drop() {
        let rules = ["h1", "h2"];
        assert_eq!(
            extract_headlines(SAMPLE_HTML, &rules),
            strings(&["Markets rally", "Storm hits coast", "Election results"])
        );
    }

    #[test]
    fn earlier_rule_decides_position() {
        // "Markets rally" matches both rules; the rule that runs first places it.
        let rules = ["h2", "h1"];
        assert_eq!(
            extract_headlines(SAMPLE_HTML, &rules),
            strings(&["Storm hits coast", "Election results", "Markets rally"])
        );
    }

    #[test]
    fn structural_queries_use_css_matching() {
        assert_eq!(
            extract_headlines(SAMPLE_HTML, &[".headline"]),
            strings(&["Storm hits coast", "Weather update"])
        );
        assert_eq!(
            extract_headlines(SAMPLE_HTML, &["#main h2"]),
            strings(&["Storm hits coast", "Election results"])
        );
        assert_eq!(
            extract_headlines(SAMPLE_HTML, &["div > span"]),
            strings(&["Weather update"])
        );
        assert_eq!(
            extract_headlines(SAMPLE_HTML, &["a[href]"]),
            strings(&["More stories"])
        );
    }

    #[test]
    fn invalid_query_falls_back_to_tag_lookup() {
        // "a[" is a query by classification but does not parse; no <a[> elements exist.
        assert_eq!(extract_headlines(SAMPLE_HTML, &["a["]), Vec::<String>::new());

        let doc = Html::parse_document(SAMPLE_HTML);
        assert!(select_rule(&doc, "h2 >").is_empty());
    }

    #[test]
    fn rule_without_matches_contributes_nothing() {
        assert_eq!(
            extract_headlines(SAMPLE_HTML, &["article", "h1", ".missing"]),
            strings(&["Markets rally"])
        );
    }

    #[test]
    fn tag_lookup_ignores_case() {
        assert_eq!(
            extract_headlines(SAMPLE_HTML, &["H1"]),
            strings(&["Markets rally"])
        );
    }

    #[test]
    fn select_rule_returns_document_order() {
        let doc = Html::parse_document(SAMPLE_HTML);
        let texts: Vec<String> = select_rule(&doc, "h2").into_iter().map(node_text).collect();
        assert_eq!(
            texts,
            strings(&["Storm hits coast", "Election results", "Markets rally"])
        );
    }
}
