pub mod fields;
pub mod image;
pub mod other_saints;
pub mod text;

use serde::Serialize;
use tracing::debug;

use super::blocks::{extract_content_blocks, SaintContentBlock};
use super::filter::TextFilter;
use super::html::extract_element_inner;
use super::sections::find_other_saints_heading;
use crate::config::SiteProfile;

/// Everything extracted from one saint-of-the-day page.
///
/// Each field is independent: a miss in one never affects the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SaintOfDayRecord {
    pub day: Option<String>,
    /// Three-letter, upper-case, diacritic-free month ("OUT").
    pub month: Option<String>,
    pub year: Option<String>,
    pub title: Option<String>,
    pub image: Option<String>,
    pub blocks: Vec<SaintContentBlock>,
    /// Plain-text fallback for when `blocks` is empty.
    pub full_text: Option<String>,
    pub other_saints: Option<Vec<String>>,
}

impl SaintOfDayRecord {
    pub fn has_blocks(&self) -> bool {
        !self.blocks.is_empty()
    }
}

/// Run every field extractor over a comment-free page.
pub fn extract_all(html: &str, profile: &SiteProfile) -> SaintOfDayRecord {
    let date = fields::extract_date(html, profile);
    let title = fields::extract_title(html, profile);

    let Some(entry) = content_region(html, profile) else {
        debug!(class = %profile.content_class, "content region not found");
        return SaintOfDayRecord {
            day: date.day,
            month: date.month,
            year: date.year,
            title,
            ..SaintOfDayRecord::default()
        };
    };

    let filter = TextFilter::new(profile);
    let heading = find_other_saints_heading(entry, &profile.other_saints_phrases);
    let blocks = extract_content_blocks(entry, heading, &filter);
    debug!(blocks = blocks.len(), other_saints_heading = ?heading, "content blocks extracted");

    SaintOfDayRecord {
        day: date.day,
        month: date.month,
        year: date.year,
        title,
        image: image::choose_best_image(entry, profile),
        blocks,
        full_text: text::extract_full_text(entry, &filter),
        other_saints: other_saints::extract_other_saints(entry, heading, profile),
    }
}

/// Inner HTML of the element carrying the content class marker.
fn content_region<'a>(html: &'a str, profile: &SiteProfile) -> Option<&'a str> {
    let re = regex::Regex::new(&format!(
        r#"(?i)<([a-z0-9]+)[^>]*class=["'][^"']*{}[^"']*["'][^>]*>"#,
        regex::escape(&profile.content_class)
    ))
    .ok()?;
    extract_element_inner(html, &re).filter(|inner| !inner.trim().is_empty())
}
