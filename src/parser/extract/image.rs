use std::sync::LazyLock;

use regex::Regex;

use crate::config::SiteProfile;

static IMG_SRC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<img[^>]*src=["']([^"']+)["'][^>]*>"#).unwrap());
static IMAGE_EXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(jpe?g|png|webp)(\?|$)").unwrap());

/// Every `<img src>` in document order.
pub fn image_candidates(html: &str) -> Vec<&str> {
    IMG_SRC_RE
        .captures_iter(html)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}

/// Pick the article's picture out of the content region.
pub fn choose_best_image(entry_html: &str, profile: &SiteProfile) -> Option<String> {
    choose_best_image_from(&image_candidates(entry_html), profile)
}

/// First good, non-bad candidate; else first non-bad one.
pub fn choose_best_image_from(candidates: &[&str], profile: &SiteProfile) -> Option<String> {
    let usable: Vec<&str> = candidates
        .iter()
        .copied()
        .filter(|src| !is_bad(src, profile))
        .collect();
    usable
        .iter()
        .find(|src| is_good(src, profile))
        .or_else(|| usable.first())
        .map(|src| src.to_string())
}

fn is_bad(src: &str, profile: &SiteProfile) -> bool {
    let s = src.to_lowercase();
    profile.bad_image_markers.iter().any(|m| s.contains(&m.to_lowercase()))
}

fn is_good(src: &str, profile: &SiteProfile) -> bool {
    let s = src.to_lowercase();
    IMAGE_EXT_RE.is_match(&s)
        || profile.good_image_markers.iter().any(|m| s.contains(&m.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_icons_for_uploads() {
        let picked = choose_best_image_from(
            &[
                "https://santo.cancaonova.com/static/icon-x-ext.png",
                "https://santo.cancaonova.com/wp-content/uploads/foto.jpg",
            ],
            &SiteProfile::default(),
        );
        assert_eq!(picked.as_deref(), Some("https://santo.cancaonova.com/wp-content/uploads/foto.jpg"));
    }

    #[test]
    fn falls_back_to_first_not_bad() {
        let profile = SiteProfile::default();
        let picked = choose_best_image_from(&["/img/pedido-thumb.jpg", "/avatar", "/other"], &profile);
        assert_eq!(picked.as_deref(), Some("/avatar"));
        assert_eq!(choose_best_image_from(&["/DEVICE-LITURGIA.png"], &profile), None);
        assert_eq!(choose_best_image_from(&[], &profile), None);
    }

    #[test]
    fn extension_with_query_is_good() {
        let picked = choose_best_image_from(&["/pixel", "/santo.webp?w=300"], &SiteProfile::default());
        assert_eq!(picked.as_deref(), Some("/santo.webp?w=300"));
    }

    #[test]
    fn candidates_from_markup() {
        let html = r#"<p><img class="a" src="/a.png" alt=""><IMG SRC='/b.jpg'></p>"#;
        assert_eq!(image_candidates(html), vec!["/a.png", "/b.jpg"]);
    }
}
