//! Low-level HTML string helpers.
//!
//! No DOM is built. Elements are located with regexes and closed by counting
//! nested tags of the same name, which is all the saint pages need.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static OPEN_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<([a-z][a-z0-9]*)\b[^>]*>").unwrap());
static TAG_EDGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(/?)([a-z][a-z0-9]*)\b").unwrap());
static BR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<\s*br\s*/?\s*>").unwrap());
static P_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<\s*/\s*p\s*>").unwrap());
static ANY_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static DEC_ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&#(\d+);").unwrap());
static HEX_ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#x([0-9a-fA-F]+);").unwrap());
static MANY_NEWLINES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());
static HSPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]{2,}").unwrap());
static SPACE_AFTER_NL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n[ \t]+").unwrap());
static SPACE_BEFORE_NL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+\n").unwrap());
static WS_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// A matched element with byte offsets into the scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element<'a> {
    /// Lower-cased tag name.
    pub tag: &'static str,
    /// Offset of the `<` that opens the element.
    pub start: usize,
    /// Offset just past the `>` of the closing tag.
    pub end: usize,
    pub inner: &'a str,
    pub outer: &'a str,
}

pub fn strip_html_comments(html: &str) -> String {
    COMMENT_RE.replace_all(html, "").into_owned()
}

/// Decode the handful of entities the site emits, plus numeric references.
pub fn decode_entities(s: &str) -> String {
    let named = s
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">");
    let dec = DEC_ENTITY_RE.replace_all(&named, |c: &Captures| numeric_ref(&c[1], 10));
    HEX_ENTITY_RE
        .replace_all(&dec, |c: &Captures| numeric_ref(&c[1], 16))
        .into_owned()
}

fn numeric_ref(digits: &str, radix: u32) -> String {
    u32::from_str_radix(digits, radix)
        .ok()
        .and_then(char::from_u32)
        .map(String::from)
        .unwrap_or_default()
}

/// Drop every tag, keeping line structure for `<br>` and `</p>`.
pub fn strip_tags(html: &str) -> String {
    let s = BR_RE.replace_all(html, "\n");
    let s = P_CLOSE_RE.replace_all(&s, "\n\n");
    let s = ANY_TAG_RE.replace_all(&s, "");
    let s = decode_entities(&s).replace('\r', "");
    MANY_NEWLINES_RE.replace_all(&s, "\n\n").trim().to_string()
}

/// Collapse horizontal whitespace and blank-line runs; NBSP counts as a space.
pub fn normalize_spaces(text: &str) -> String {
    let s = text.replace('\u{00A0}', " ");
    let s = HSPACE_RUN_RE.replace_all(&s, " ");
    let s = SPACE_AFTER_NL_RE.replace_all(&s, "\n");
    let s = SPACE_BEFORE_NL_RE.replace_all(&s, "\n");
    MANY_NEWLINES_RE.replace_all(&s, "\n\n").trim().to_string()
}

/// Collapse runs of two or more whitespace characters to one space.
/// A lone newline is kept.
pub fn collapse_whitespace(text: &str) -> String {
    WS_RUN_RE.replace_all(text, " ").trim().to_string()
}

/// Remove diacritics (NFD, combining marks dropped).
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Key used for phrase matching: no diacritics, lower-case.
pub fn normalize_search_key(text: &str) -> String {
    strip_diacritics(text).to_lowercase()
}

/// Find the first opening tag named in `names` at or after `from` and walk
/// to its matching close.
///
/// Returns `None` when no such tag exists or its close is missing.
pub fn find_element<'a>(html: &'a str, names: &[&'static str], from: usize) -> Option<Element<'a>> {
    let mut pos = from;
    loop {
        let (start, open_end, tag) = next_open_tag(html, names, pos)?;
        match close_of(html, tag, open_end) {
            Some((close_start, end)) => {
                return Some(Element {
                    tag,
                    start,
                    end,
                    inner: &html[open_end..close_start],
                    outer: &html[start..end],
                })
            }
            None => pos = open_end,
        }
    }
}

/// Next opening tag whose lower-cased name is in `names`: `(start, end, name)`.
pub fn next_open_tag(
    html: &str,
    names: &[&'static str],
    from: usize,
) -> Option<(usize, usize, &'static str)> {
    OPEN_TAG_RE.captures_iter(html.get(from..)?).find_map(|c| {
        let whole = c.get(0)?;
        let name = c[1].to_ascii_lowercase();
        let tag = names.iter().find(|n| **n == name)?;
        Some((from + whole.start(), from + whole.end(), *tag))
    })
}

/// Inner HTML of the element whose opening tag `open_re` matches first.
///
/// `open_re` must capture the tag name in group 1.
pub fn extract_element_inner<'a>(html: &'a str, open_re: &Regex) -> Option<&'a str> {
    let caps = open_re.captures(html)?;
    let open = caps.get(0)?;
    let tag = caps.get(1)?.as_str().to_ascii_lowercase();
    if tag.is_empty() {
        return None;
    }
    let (close_start, _) = close_of(html, &tag, open.end())?;
    Some(&html[open.end()..close_start])
}

/// Outer HTML of the first balanced `tag` element at or after `start`.
pub fn extract_balanced_outer_from<'a>(html: &'a str, tag: &'static str, start: usize) -> Option<&'a str> {
    let (open_start, open_end, tag) = next_open_tag(html, &[tag], start)?;
    let (_, end) = close_of(html, tag, open_end)?;
    Some(&html[open_start..end])
}

/// Depth-count same-named tags from `after_open` until the element closes.
/// Returns `(close_start, close_end)`.
fn close_of(html: &str, tag: &str, after_open: usize) -> Option<(usize, usize)> {
    let mut depth = 1usize;
    for c in TAG_EDGE_RE.captures_iter(html.get(after_open..)?) {
        if !c[2].eq_ignore_ascii_case(tag) {
            continue;
        }
        if c[1].is_empty() {
            depth += 1;
            continue;
        }
        depth -= 1;
        if depth == 0 {
            let close_start = after_open + c.get(0)?.start();
            let close_end = close_start + html[close_start..].find('>')? + 1;
            return Some((close_start, close_end));
        }
    }
    None
}
