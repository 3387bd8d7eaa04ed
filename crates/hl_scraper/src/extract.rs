use std::collections::HashSet;

use scraper::{Html, Selector};
use tracing::debug;

/// Tags commonly used for headlines, scanned first.
const HEADLINE_TAGS: [&str; 3] = ["h1", "h2", "h3"];

/// Class names news sites commonly put on headline elements, scanned after
/// the tag pass. These vary by website; this list covers the usual ones.
const HEADLINE_CLASSES: [&str; 7] = [
    "headline",
    "title",
    "post-title",
    "entry-title",
    "article-title",
    "news-title",
    "story-headline",
];

/// Anything at or below this length is navigation text or a section label,
/// not a headline. Measured in characters after trimming.
const MIN_HEADLINE_LEN: usize = 10;

/// Extracts unique headline texts from a parsed document.
///
/// Scans every tag selector in order, then every class selector in order,
/// collecting trimmed element text longer than [`MIN_HEADLINE_LEN`]. All
/// tag-pass candidates precede all class-pass candidates regardless of
/// document position; a final dedup pass keeps the first occurrence of
/// each distinct string.
pub fn extract_headlines(document: &Html) -> Vec<String> {
    let mut candidates = Vec::new();

    for tag in HEADLINE_TAGS {
        collect_candidates(document, tag, &mut candidates);
    }
    for class in HEADLINE_CLASSES {
        collect_candidates(document, &format!(".{}", class), &mut candidates);
    }
    debug!("Collected {} headline candidates", candidates.len());

    dedup_first_seen(candidates)
}

fn collect_candidates(document: &Html, selector: &str, out: &mut Vec<String>) {
    // All selectors are fixed literals, so parsing cannot fail at runtime.
    let selector = Selector::parse(selector).unwrap();
    for element in document.select(&selector) {
        let text = element.text().collect::<String>().trim().to_string();
        if text.chars().count() > MIN_HEADLINE_LEN {
            out.push(text);
        }
    }
}

fn dedup_first_seen(candidates: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|text| seen.insert(text.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Vec<String> {
        extract_headlines(&Html::parse_document(html))
    }

    #[test]
    fn test_short_text_is_discarded() {
        let html = r#"
            <h1>Short</h1>
            <h1>This headline is long enough</h1>
        "#;
        assert_eq!(extract(html), vec!["This headline is long enough"]);
    }

    #[test]
    fn test_exactly_ten_chars_is_discarded() {
        let html = "<h1>Ten chars!</h1><h2>Eleven char.</h2>";
        assert_eq!(extract(html), vec!["Eleven char."]);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let html = "<h1>   Padded breaking story   </h1>";
        assert_eq!(extract(html), vec!["Padded breaking story"]);
    }

    #[test]
    fn test_whitespace_only_text_is_discarded() {
        let html = "<h1>     </h1><h2></h2>";
        assert!(extract(html).is_empty());
    }

    #[test]
    fn test_tag_and_class_duplicate_kept_once() {
        let html = r#"
            <h2>Breaking News Today</h2>
            <div class="headline">Breaking News Today</div>
            <div class="headline">A different class headline</div>
        "#;
        assert_eq!(
            extract(html),
            vec!["Breaking News Today", "A different class headline"]
        );
    }

    #[test]
    fn test_tag_pass_precedes_class_pass() {
        // The class-matched element appears first in the document, but the
        // tag pass runs first, so the h1 text comes out first.
        let html = r#"
            <div class="headline">Class derived headline</div>
            <h1>Tag derived headline</h1>
        "#;
        assert_eq!(
            extract(html),
            vec!["Tag derived headline", "Class derived headline"]
        );
    }

    #[test]
    fn test_selector_order_within_tag_pass() {
        // h1 matches are scanned before h2 matches even when the h2 comes
        // first in the document.
        let html = r#"
            <h2>Second level headline</h2>
            <h1>Front page headline</h1>
        "#;
        assert_eq!(
            extract(html),
            vec!["Front page headline", "Second level headline"]
        );
    }

    #[test]
    fn test_document_order_within_one_selector() {
        let html = r#"
            <h2>First second-level story</h2>
            <p>filler</p>
            <h2>Later second-level story</h2>
        "#;
        assert_eq!(
            extract(html),
            vec!["First second-level story", "Later second-level story"]
        );
    }

    #[test]
    fn test_element_with_two_headline_classes_kept_once() {
        let html = r#"<div class="headline title">Doubly classed headline</div>"#;
        assert_eq!(extract(html), vec!["Doubly classed headline"]);
    }

    #[test]
    fn test_no_duplicates_and_min_length_invariants() {
        let html = r#"
            <h1>Economy grows faster than expected</h1>
            <h2>Economy grows faster than expected</h2>
            <h2>tiny</h2>
            <h3>Sports roundup for the weekend</h3>
            <span class="title">Economy grows faster than expected</span>
            <p class="entry-title">Opinion: on the state of things</p>
        "#;
        let headlines = extract(html);

        let unique: HashSet<&String> = headlines.iter().collect();
        assert_eq!(unique.len(), headlines.len());
        assert!(headlines.iter().all(|h| h.trim().chars().count() > 10));
        assert_eq!(headlines.len(), 3);
    }

    #[test]
    fn test_idempotent_on_same_document() {
        let html = r#"
            <h1>Parliament votes on budget bill</h1>
            <div class="post-title">Markets rally after announcement</div>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(extract_headlines(&document), extract_headlines(&document));
    }

    #[test]
    fn test_empty_document_yields_empty_list() {
        assert!(extract("<html><body><p>No headlines here, just text</p></body></html>").is_empty());
    }

    #[test]
    fn test_nested_text_is_concatenated() {
        let html = r#"<h1><a href="/story">Linked <em>emphasised</em> headline</a></h1>"#;
        assert_eq!(extract(html), vec!["Linked emphasised headline"]);
    }
}
