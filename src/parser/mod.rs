pub mod blocks;
pub mod extract;
pub mod filter;
pub mod html;
pub mod sections;

use crate::config::SiteProfile;
use extract::SaintOfDayRecord;

/// Two-step pipeline: strip comments, then extract every field.
pub fn process_page(raw_html: &str, profile: &SiteProfile) -> SaintOfDayRecord {
    let html = html::strip_html_comments(raw_html);
    extract::extract_all(&html, profile)
}
