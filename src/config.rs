use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

const SETTINGS_FILE: &str = "santo_reader";
const ENV_PREFIX: &str = "SANTO";

pub const DEFAULT_SAINT_URL: &str = "https://santo.cancaonova.com/";
pub const DEFAULT_LITURGY_URL: &str = "https://liturgia.up.railway.app/v2/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime settings: defaults, then `santo_reader.toml`, then `SANTO_*` env vars.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub saint_url: String,
    pub liturgy_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub accept_language: String,
    pub site: SiteProfile,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            saint_url: DEFAULT_SAINT_URL.to_string(),
            liturgy_url: DEFAULT_LITURGY_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("santo_reader/", env!("CARGO_PKG_VERSION")).to_string(),
            accept_language: "pt-BR,pt;q=0.9,en;q=0.6".to_string(),
            site: SiteProfile::default(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let settings: Settings = Config::builder()
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        debug!(saint_url = %settings.saint_url, liturgy_url = %settings.liturgy_url, "settings loaded");
        Ok(settings)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Markup conventions of one saint-of-the-day site.
///
/// Everything the extractor keys on lives here so another source can be
/// supported by swapping the profile instead of the code.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteProfile {
    /// `id` attribute of the element wrapping day/month/year.
    pub date_container_id: String,
    pub day_class: String,
    pub month_class: String,
    pub year_class: String,
    /// Class fragment on the `<h1>` carrying the saint's name.
    pub title_class: String,
    /// Class fragment on the element wrapping the article body.
    pub content_class: String,
    /// Heading phrases (diacritics stripped, lower-case) that open the
    /// "other saints" section.
    pub other_saints_phrases: Vec<String>,
    /// Promotional or navigation copy; any block containing one is dropped.
    pub boilerplate: Vec<String>,
    /// Fragments dropped when they make up the whole block.
    pub noise: Vec<String>,
    pub bad_image_markers: Vec<String>,
    pub good_image_markers: Vec<String>,
    /// Word that opens a typical "other saints" entry ("Em Roma, ...").
    pub list_item_prefix: String,
    pub death_marker: String,
}

impl Default for SiteProfile {
    fn default() -> Self {
        let owned = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        SiteProfile {
            date_container_id: "date-post".to_string(),
            day_class: "dia".to_string(),
            month_class: "mes".to_string(),
            year_class: "ano".to_string(),
            title_class: "entry-title".to_string(),
            content_class: "entry-content".to_string(),
            other_saints_phrases: owned(&["outros santos", "outros santos e beatos"]),
            boilerplate: owned(&[
                "compartilhe no",
                "ajude a cancao nova",
                "pedido de oracao",
                "aplicativo liturgia",
            ]),
            noise: owned(&[".", "…", "-->", "->"]),
            bad_image_markers: owned(&["icon-x-ext", "device-liturgia", "pedido-thumb"]),
            good_image_markers: owned(&["uploads", "cnimages"]),
            list_item_prefix: "em".to_string(),
            death_marker: "†".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_cancao_nova() {
        let s = Settings::default();
        assert_eq!(s.saint_url, DEFAULT_SAINT_URL);
        assert_eq!(s.timeout(), Duration::from_secs(30));
        assert_eq!(s.site.date_container_id, "date-post");
        assert!(s.site.boilerplate.iter().any(|p| p == "compartilhe no"));
    }

    #[test]
    fn partial_profile_keeps_other_defaults() {
        let profile: SiteProfile =
            serde_json::from_str(r#"{"content_class": "post-body"}"#).unwrap();
        assert_eq!(profile.content_class, "post-body");
        assert_eq!(profile.title_class, "entry-title");
        assert_eq!(profile.bad_image_markers.len(), 3);
    }
}
