//! Presentation helpers for the saint-of-the-day date and names.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::extract::fields::normalize_month_abbrev;
use crate::parser::extract::SaintOfDayRecord;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^\p{L}]*)(\p{L}+(?:-\p{L}+)*)([^\p{L}]*)$").unwrap()
});

const MONTHS_PT: [(&str, &str); 12] = [
    ("JAN", "janeiro"),
    ("FEV", "fevereiro"),
    ("MAR", "março"),
    ("ABR", "abril"),
    ("MAI", "maio"),
    ("JUN", "junho"),
    ("JUL", "julho"),
    ("AGO", "agosto"),
    ("SET", "setembro"),
    ("OUT", "outubro"),
    ("NOV", "novembro"),
    ("DEZ", "dezembro"),
];

/// Full Portuguese month name for an abbreviation in any case or accenting.
pub fn month_name_pt(abbrev: &str) -> Option<&'static str> {
    let idx = month_index(abbrev)?;
    Some(MONTHS_PT[idx as usize].1)
}

/// Zero-based month number.
pub fn month_index(abbrev: &str) -> Option<u32> {
    let key = normalize_month_abbrev(abbrev)?;
    MONTHS_PT
        .iter()
        .position(|(k, _)| *k == key)
        .map(|i| i as u32)
}

/// Title-case every word and hyphen part, except the particle "de".
pub fn capitalize_words_except_de(value: &str) -> String {
    value
        .split(' ')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(part: &str) -> String {
    let Some(c) = WORD_RE.captures(part) else {
        return part.to_string();
    };
    let (leading, core, trailing) = (&c[1], &c[2], &c[3]);
    if core.to_lowercase() == "de" {
        return format!("{leading}de{trailing}");
    }
    let core = core
        .split('-')
        .map(|p| {
            let mut chars = p.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-");
    format!("{leading}{core}{trailing}")
}

/// "19 de outubro de 2026"; `None` unless day, month and year are all known.
pub fn format_date_label(record: &SaintOfDayRecord) -> Option<String> {
    let day = record.day.as_deref()?.trim();
    let month = month_name_pt(record.month.as_deref()?)?;
    let year = record.year.as_deref()?.trim();
    Some(format!("{day} de {month} de {year}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names() {
        assert_eq!(month_name_pt("FEV"), Some("fevereiro"));
        assert_eq!(month_name_pt("mar."), Some("março"));
        assert_eq!(month_name_pt("Dezembro"), Some("dezembro"));
        assert_eq!(month_name_pt("XYZ"), None);
        assert_eq!(month_index("jan"), Some(0));
        assert_eq!(month_index("DEZ"), Some(11));
    }

    #[test]
    fn capitalization_keeps_de_lower() {
        assert_eq!(capitalize_words_except_de("são joão de deus"), "São João de Deus");
        assert_eq!(capitalize_words_except_de("santa teresa d'ávila"), "Santa Teresa d'ávila");
        assert_eq!(capitalize_words_except_de("(maria-madalena) DE x"), "(Maria-Madalena) de X");
        assert_eq!(capitalize_words_except_de("1º  dia"), "1º  Dia");
    }

    #[test]
    fn date_label() {
        let record = SaintOfDayRecord {
            day: Some("19".into()),
            month: Some("OUT".into()),
            year: Some("2026".into()),
            ..Default::default()
        };
        assert_eq!(format_date_label(&record).as_deref(), Some("19 de outubro de 2026"));
        assert_eq!(format_date_label(&SaintOfDayRecord::default()), None);
    }
}
