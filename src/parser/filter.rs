use tracing::debug;

use super::html::{normalize_search_key, normalize_spaces};
use crate::config::SiteProfile;

/// Drops empty, noise and promotional fragments before they become blocks.
#[derive(Debug, Clone)]
pub struct TextFilter {
    boilerplate: Vec<String>,
    noise: Vec<String>,
}

impl TextFilter {
    pub fn new(profile: &SiteProfile) -> Self {
        TextFilter {
            boilerplate: profile
                .boilerplate
                .iter()
                .map(|p| normalize_search_key(p.trim()))
                .filter(|p| !p.is_empty())
                .collect(),
            noise: profile.noise.clone(),
        }
    }

    /// Case- and accent-insensitive containment of any boilerplate phrase.
    pub fn is_boilerplate(&self, text: &str) -> bool {
        let key = normalize_search_key(text.trim());
        self.boilerplate.iter().any(|p| key.contains(p.as_str()))
    }

    /// Normalized text, or `None` when the fragment should not be kept.
    pub fn clean(&self, text: &str) -> Option<String> {
        let cleaned = normalize_spaces(text);
        if cleaned.is_empty() || self.noise.iter().any(|n| *n == cleaned) {
            return None;
        }
        if self.is_boilerplate(&cleaned) {
            debug!(text = %cleaned, "dropping boilerplate fragment");
            return None;
        }
        Some(cleaned)
    }
}

impl Default for TextFilter {
    fn default() -> Self {
        TextFilter::new(&SiteProfile::default())
    }
}
