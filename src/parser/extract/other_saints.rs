use regex::Regex;
use tracing::debug;

use crate::config::SiteProfile;
use crate::parser::blocks::list_items;
use crate::parser::html::find_element;

const LIST_TAGS: &[&str] = &["ul", "ol"];
const MIN_FALLBACK_ITEMS: usize = 3;

/// Names commemorated alongside the saint of the day.
///
/// With a section heading, the first list after it wins. Otherwise the list
/// that looks most like a martyrology entry is used.
pub fn extract_other_saints(
    entry_html: &str,
    heading: Option<usize>,
    profile: &SiteProfile,
) -> Option<Vec<String>> {
    if let Some(start) = heading {
        let items = find_element(entry_html, LIST_TAGS, start)
            .map(|list| list_items(list.inner))
            .unwrap_or_default();
        if !items.is_empty() {
            return Some(items);
        }
        debug!("other saints heading has no list, scoring all lists");
    }
    best_scored_list(entry_html, profile)
}

/// Highest-scoring list with at least three items; earlier lists win ties.
fn best_scored_list(entry_html: &str, profile: &SiteProfile) -> Option<Vec<String>> {
    let prefix_re = if profile.list_item_prefix.trim().is_empty() {
        None
    } else {
        Regex::new(&format!(r"(?i)^{}\s+", regex::escape(profile.list_item_prefix.trim()))).ok()
    };

    let mut best: Option<(usize, Vec<String>)> = None;
    let mut pos = 0;
    while let Some(list) = find_element(entry_html, LIST_TAGS, pos) {
        pos = list.end;
        let items = list_items(list.inner);
        if items.len() < MIN_FALLBACK_ITEMS {
            continue;
        }
        let score = score_items(&items, prefix_re.as_ref(), &profile.death_marker);
        if best.as_ref().map_or(true, |(top, _)| score > *top) {
            best = Some((score, items));
        }
    }
    best.map(|(_, items)| items)
}

fn score_items(items: &[String], prefix_re: Option<&Regex>, death_marker: &str) -> usize {
    let prefixed = prefix_re.map_or(0, |re| items.iter().filter(|i| re.is_match(i)).count());
    let marked = if death_marker.is_empty() {
        0
    } else {
        items.iter().filter(|i| i.contains(death_marker)).count()
    };
    items.len() + prefixed * 2 + marked
}
