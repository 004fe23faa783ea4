use super::html::{find_element, normalize_search_key, strip_tags};

const HEADING_TAGS: &[&str] = &["h2", "h3", "h4"];

/// Offset of the first heading whose text names the "other saints" section.
///
/// Headings are compared without diacritics and case, so "Outros Santos e
/// Beatos" and "OUTROS SANTOS" both match the default phrases.
pub fn find_other_saints_heading(entry_html: &str, phrases: &[String]) -> Option<usize> {
    let phrases: Vec<String> = phrases.iter().map(|p| normalize_search_key(p)).collect();
    let mut pos = 0;
    while let Some(h) = find_element(entry_html, HEADING_TAGS, pos) {
        let text = normalize_search_key(&strip_tags(h.inner));
        if phrases.iter().any(|p| !p.is_empty() && text.contains(p.as_str())) {
            return Some(h.start);
        }
        pos = h.end;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteProfile;

    fn phrases() -> Vec<String> {
        SiteProfile::default().other_saints_phrases
    }

    #[test]
    fn finds_heading_with_accents_and_markup() {
        let html = "<h2>Vida</h2><p>x</p><h3><span>Outros Santos</span> e Beatos do dia</h3><ul></ul>";
        assert_eq!(find_other_saints_heading(html, &phrases()), html.find("<h3>"));
    }

    #[test]
    fn ignores_paragraph_mentions() {
        let html = "<p>Há outros santos neste dia</p><h4>Oração</h4>";
        assert_eq!(find_other_saints_heading(html, &phrases()), None);
    }
}
