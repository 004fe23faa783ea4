use regex::Regex;
use tracing::debug;

use crate::config::SiteProfile;
use crate::parser::html::{extract_element_inner, strip_diacritics, strip_tags};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateParts {
    pub day: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
}

/// Day, month abbreviation and year from the date container.
///
/// Falls back to searching the whole page when the container is missing.
pub fn extract_date(html: &str, profile: &SiteProfile) -> DateParts {
    let container = container_re(&profile.date_container_id)
        .and_then(|re| extract_element_inner(html, &re))
        .unwrap_or_else(|| {
            debug!(id = %profile.date_container_id, "date container not found");
            html
        });

    let month_raw = class_text(container, &profile.month_class);
    DateParts {
        day: class_text(container, &profile.day_class),
        month: month_raw.as_deref().and_then(normalize_month_abbrev).or(month_raw),
        year: class_text(container, &profile.year_class),
    }
}

/// Text of the first `<h1>` whose class list contains the title marker.
pub fn extract_title(html: &str, profile: &SiteProfile) -> Option<String> {
    let pattern = format!(
        r#"(?is)<h1[^>]*class=["'][^"']*{}[^"']*["'][^>]*>(.*?)</h1>"#,
        regex::escape(&profile.title_class)
    );
    first_capture(html, &pattern)
}

/// Upper-case, diacritic-free, three-character month key ("Mar" -> "MAR",
/// "fev." -> "FEV").
pub fn normalize_month_abbrev(value: &str) -> Option<String> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }
    Some(strip_diacritics(v).to_uppercase().chars().take(3).collect())
}

fn container_re(id: &str) -> Option<Regex> {
    Regex::new(&format!(
        r#"(?i)<([a-z0-9]+)[^>]*id=["']{}["'][^>]*>"#,
        regex::escape(id)
    ))
    .ok()
}

fn class_text(html: &str, class: &str) -> Option<String> {
    let pattern = format!(r#"(?is)class=["']{}["'][^>]*>(.*?)</"#, regex::escape(class));
    first_capture(html, &pattern)
}

fn first_capture(html: &str, pattern: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    let text = strip_tags(re.captures(html)?.get(1)?.as_str());
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
