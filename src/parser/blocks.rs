use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::filter::TextFilter;
use super::html::{find_element, normalize_spaces, strip_tags};

static LI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<li\b[^>]*>(.*?)</li>").unwrap());
static SPAN_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:<span\b[^>]*>\s*)*").unwrap());
static SPAN_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(?:</span>\s*)*$").unwrap());

const BLOCK_TAGS: &[&str] = &["p", "h2", "h3", "h4", "blockquote", "ul", "ol", "strong", "b"];
const BOLD_TAGS: &[&str] = &["strong", "b"];

/// Level used for bold runs, which this source uses as sub-headings.
pub const BOLD_HEADING_LEVEL: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SaintContentBlock {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    Quote { text: String },
    List { ordered: bool, items: Vec<String> },
}

impl SaintContentBlock {
    /// Text for single-text blocks, `None` for lists.
    pub fn text(&self) -> Option<&str> {
        match self {
            SaintContentBlock::Heading { text, .. }
            | SaintContentBlock::Paragraph { text }
            | SaintContentBlock::Quote { text } => Some(text),
            SaintContentBlock::List { .. } => None,
        }
    }
}

/// Decompose the article body into typed blocks in document order.
///
/// `body_end` truncates the scan (the "other saints" heading offset), so
/// nothing after it becomes a body block.
pub fn extract_content_blocks(
    entry_html: &str,
    body_end: Option<usize>,
    filter: &TextFilter,
) -> Vec<SaintContentBlock> {
    let html = match body_end {
        Some(end) => entry_html.get(..end).unwrap_or(entry_html),
        None => entry_html,
    };

    let mut blocks = Vec::new();
    let mut pos = 0;
    while let Some(el) = find_element(html, BLOCK_TAGS, pos) {
        pos = el.end;
        match el.tag {
            "ul" | "ol" => {
                let items: Vec<String> = list_items(el.inner)
                    .iter()
                    .filter_map(|t| filter.clean(t))
                    .collect();
                if !items.is_empty() {
                    blocks.push(SaintContentBlock::List {
                        ordered: el.tag == "ol",
                        items,
                    });
                }
            }
            "strong" | "b" => push_heading(&mut blocks, filter, BOLD_HEADING_LEVEL, el.inner),
            "p" => split_paragraph(&mut blocks, filter, el.inner),
            "h2" => push_heading(&mut blocks, filter, 2, el.inner),
            "h3" => push_heading(&mut blocks, filter, 3, el.inner),
            "h4" => push_heading(&mut blocks, filter, 4, el.inner),
            "blockquote" => {
                if let Some(text) = filter.clean(&strip_tags(el.inner)) {
                    blocks.push(SaintContentBlock::Quote { text });
                }
            }
            _ => {}
        }
    }
    blocks
}

/// Tag-stripped `<li>` texts, empties removed.
pub fn list_items(list_html: &str) -> Vec<String> {
    LI_RE
        .captures_iter(list_html)
        .map(|c| normalize_spaces(&strip_tags(&c[1])))
        .filter(|t| !t.is_empty())
        .collect()
}

/// A paragraph whose only content is one bold run, optionally wrapped in spans.
pub fn is_bold_only_paragraph(inner: &str) -> bool {
    let s = inner.trim();
    if s.is_empty() {
        return false;
    }
    let prefix_end = SPAN_PREFIX_RE.find(s).map_or(0, |m| m.end());
    find_element(s, BOLD_TAGS, prefix_end)
        .is_some_and(|b| b.start == prefix_end && SPAN_SUFFIX_RE.is_match(&s[b.end..]))
}

/// Emit a paragraph, splitting out every bold run as a sub-heading in place.
fn split_paragraph(blocks: &mut Vec<SaintContentBlock>, filter: &TextFilter, inner: &str) {
    if is_bold_only_paragraph(inner) {
        push_heading(blocks, filter, BOLD_HEADING_LEVEL, inner);
        return;
    }

    let mut last = 0;
    while let Some(bold) = find_element(inner, BOLD_TAGS, last) {
        push_paragraph(blocks, filter, &inner[last..bold.start]);
        push_heading(blocks, filter, BOLD_HEADING_LEVEL, bold.inner);
        last = bold.end;
    }
    push_paragraph(blocks, filter, &inner[last..]);
}

fn push_heading(blocks: &mut Vec<SaintContentBlock>, filter: &TextFilter, level: u8, html: &str) {
    if let Some(text) = filter.clean(&strip_tags(html)) {
        blocks.push(SaintContentBlock::Heading { level, text });
    }
}

fn push_paragraph(blocks: &mut Vec<SaintContentBlock>, filter: &TextFilter, html: &str) {
    if let Some(text) = filter.clean(&strip_tags(html)) {
        blocks.push(SaintContentBlock::Paragraph { text });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(html: &str) -> Vec<SaintContentBlock> {
        extract_content_blocks(html, None, &TextFilter::default())
    }

    fn heading(level: u8, text: &str) -> SaintContentBlock {
        SaintContentBlock::Heading { level, text: text.to_string() }
    }

    fn para(text: &str) -> SaintContentBlock {
        SaintContentBlock::Paragraph { text: text.to_string() }
    }

    #[test]
    fn headings_paragraphs_quotes() {
        let b = blocks("<h2>Vida</h2><p>Nasceu em  Assis.</p><blockquote><p>Paz e bem</p></blockquote><h4>Fim</h4>");
        assert_eq!(
            b,
            vec![
                heading(2, "Vida"),
                para("Nasceu em Assis."),
                SaintContentBlock::Quote { text: "Paz e bem".to_string() },
                heading(4, "Fim"),
            ]
        );
    }

    #[test]
    fn bold_only_paragraph_is_heading() {
        assert!(is_bold_only_paragraph("<span><strong>Oração</strong></span>"));
        assert!(!is_bold_only_paragraph("<strong>a</strong> texto <strong>b</strong>"));
        assert!(!is_bold_only_paragraph("texto <b>a</b>"));
        assert_eq!(blocks("<p><span><b>Oração</b></span></p>"), vec![heading(3, "Oração")]);
    }

    #[test]
    fn mixed_bold_keeps_order() {
        let b = blocks("<p>Antes <strong>Meio</strong> depois <b>Outro</b> fim</p>");
        assert_eq!(
            b,
            vec![para("Antes"), heading(3, "Meio"), para("depois"), heading(3, "Outro"), para("fim")]
        );
    }

    #[test]
    fn top_level_bold_is_heading() {
        let b = blocks("<div><strong>Reflexão</strong></div><p>Texto</p>");
        assert_eq!(b, vec![heading(3, "Reflexão"), para("Texto")]);
    }

    #[test]
    fn lists_drop_empty_and_boilerplate_items() {
        let b = blocks("<ol><li> Um </li><li></li><li>Compartilhe no X</li><li>Dois</li></ol><ul><li> </li></ul>");
        assert_eq!(
            b,
            vec![SaintContentBlock::List {
                ordered: true,
                items: vec!["Um".to_string(), "Dois".to_string()],
            }]
        );
    }

    #[test]
    fn boilerplate_and_empty_blocks_dropped() {
        let b = blocks("<p>Ajude a Canção Nova</p><p> &nbsp; </p><p>.</p><h3>Pedido de oração</h3><p>Fica</p>");
        assert_eq!(b, vec![para("Fica")]);
    }

    #[test]
    fn truncation_excludes_tail() {
        let html = "<p>Corpo</p><h3>Outros santos</h3><ul><li>Em Roma, x</li></ul>";
        let end = html.find("<h3>");
        let b = extract_content_blocks(html, end, &TextFilter::default());
        assert_eq!(b, vec![para("Corpo")]);
    }

    #[test]
    fn nested_lists_stay_one_block() {
        let b = blocks("<ul><li>a</li><li>b<ul><li>c</li></ul></li></ul><p>x</p>");
        assert!(matches!(&b[0], SaintContentBlock::List { ordered: false, .. }));
        assert_eq!(b.last(), Some(&para("x")));
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_string(&heading(2, "Vida")).unwrap();
        assert_eq!(json, r#"{"type":"heading","level":2,"text":"Vida"}"#);
    }
}
