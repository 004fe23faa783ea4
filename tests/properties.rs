use proptest::prelude::*;
use regex::Regex;

use santo_reader::parser::filter::TextFilter;
use santo_reader::verses::tokenizer::{separate_verse_numbers, unglue_apostrophes};
use santo_reader::{process_page, tokenize, SaintContentBlock, SiteProfile, VerseReference};

const APOSTROPHES: &[char] = &['‘', '’', '\'', '´', '`', '′'];

/// True when `spaced` is `original` with single spaces inserted and nothing
/// else changed.
fn only_inserts_single_spaces(spaced: &str, original: &str) -> bool {
    let mut orig = original.chars().peekable();
    let mut inserted_last = false;
    for c in spaced.chars() {
        if orig.peek() == Some(&c) {
            orig.next();
            inserted_last = false;
        } else if c == ' ' && !inserted_last {
            inserted_last = true;
        } else {
            return false;
        }
    }
    orig.next().is_none()
}

fn reading_body() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[0-9]{1,3}[a-d]?",
            "[a-zç]{1,8}",
            "[A-ZÁÉÓ][a-z]{0,6}",
            Just(" ".to_string()),
            Just(", ".to_string()),
            Just(". ".to_string()),
            Just("“".to_string()),
            Just("'".to_string()),
            Just("’".to_string()),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

fn reference() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (1u32..40, 0u32..20).prop_map(|(a, n)| format!("Mt 5, {}-{}", a, a + n)),
        (1u32..40, "[a-d]").prop_map(|(a, l)| format!("Lc 1, {}{}", a, l)),
    ]
}

fn page_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z ]{0,20}".prop_map(|t| format!("<p>{t}</p>")),
        "[A-Za-z ]{0,20}".prop_map(|t| format!("<p><strong>{t}</strong> resto</p>")),
        "[A-Za-z ]{0,20}".prop_map(|t| format!("<h2>{t}</h2>")),
        "[A-Za-z ]{0,20}".prop_map(|t| format!("<blockquote>{t}</blockquote>")),
        "[A-Za-z ]{0,20}".prop_map(|t| format!("<ul><li>{t}</li><li> </li></ul>")),
        Just("<p>Compartilhe no Facebook</p>".to_string()),
        Just("<p> . </p>".to_string()),
        Just("<p>Ajude a Canção Nova</p>".to_string()),
        Just("<div><p>".to_string()),
        Just("</div>".to_string()),
    ]
}

proptest! {
    #[test]
    fn tokens_rebuild_the_spaced_body(body in reading_body(), reference in reference()) {
        let unglued = unglue_apostrophes(&body);
        let spaced = separate_verse_numbers(&unglued, &VerseReference::parse(&reference));

        let joined: String = tokenize(&body, &reference).iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(&joined, &spaced);
        prop_assert!(only_inserts_single_spaces(&spaced, &unglued), "{:?} -> {:?}", unglued, spaced);
    }

    #[test]
    fn ungluing_only_replaces_apostrophes(body in reading_body()) {
        let unglued = unglue_apostrophes(&body);
        prop_assert_eq!(unglued.chars().count(), body.chars().count());
        for (before, after) in body.chars().zip(unglued.chars()) {
            prop_assert!(before == after || (APOSTROPHES.contains(&before) && after == ' '));
        }
    }

    #[test]
    fn verse_tokens_are_numbers(body in reading_body(), reference in reference()) {
        let verse = Regex::new(r"^[0-9]+[a-d]?$").unwrap();
        for t in tokenize(&body, &reference) {
            prop_assert_eq!(t.is_verse_number, verse.is_match(&t.text));
            prop_assert!(!t.text.is_empty());
        }
    }

    #[test]
    fn blocks_are_never_empty_or_boilerplate(parts in prop::collection::vec(page_fragment(), 0..12)) {
        let html = format!(
            r#"<h1 class="entry-title">Santo</h1><div class="entry-content">{}</div>"#,
            parts.concat()
        );
        let profile = SiteProfile::default();
        let filter = TextFilter::new(&profile);
        let record = process_page(&html, &profile);

        for block in &record.blocks {
            let texts: Vec<&str> = match block {
                SaintContentBlock::List { items, .. } => {
                    prop_assert!(!items.is_empty());
                    items.iter().map(String::as_str).collect()
                }
                other => other.text().into_iter().collect(),
            };
            for text in texts {
                prop_assert!(!text.trim().is_empty());
                prop_assert!(!filter.is_boilerplate(text));
                prop_assert!(!profile.noise.iter().any(|n| n == text));
            }
        }
        prop_assert_eq!(process_page(&html, &profile), record);
    }
}
