use crate::parser::filter::TextFilter;
use crate::parser::html::{collapse_whitespace, find_element, strip_tags};

const TEXT_TAGS: &[&str] = &["p", "h2", "h3", "h4"];

/// Plain-text rendition of the article: paragraphs and headings only,
/// joined by blank lines. Used when block extraction finds nothing.
pub fn extract_full_text(entry_html: &str, filter: &TextFilter) -> Option<String> {
    let mut parts = Vec::new();
    let mut pos = 0;
    while let Some(el) = find_element(entry_html, TEXT_TAGS, pos) {
        pos = el.end;
        let text = collapse_whitespace(&strip_tags(el.inner));
        if text.is_empty() || filter.is_boilerplate(&text) {
            continue;
        }
        parts.push(text);
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n\n"))
    }
}
