use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)([a-d])?\s*[-–]\s*([0-9]+)([a-d])?").unwrap());
static SINGLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)([a-d])?").unwrap());

/// Ranges wider than this are not expanded; their endpoints still count.
const MAX_RANGE_SPAN: u32 = 1000;

/// The verse tokens a citation such as `"Eclo 3, 3-7. 14-17a"` allows:
/// bare numbers (`"14"`) and lettered sub-verses (`"17a"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerseReference {
    valid: BTreeSet<String>,
}

impl VerseReference {
    /// Ranges are expanded in full unless reversed or wider than 1000
    /// verses; those keep only their endpoints.
    pub fn parse(reference: &str) -> Self {
        let mut valid = BTreeSet::new();

        for c in RANGE_RE.captures_iter(reference) {
            let (Ok(start), Ok(end)) = (c[1].parse::<u32>(), c[3].parse::<u32>()) else {
                continue;
            };
            if start > end || end - start > MAX_RANGE_SPAN {
                continue;
            }
            valid.extend((start..=end).map(|n| n.to_string()));
            if let Some(letter) = c.get(4) {
                valid.insert(format!("{}{}", end, letter.as_str()));
            }
        }

        for c in SINGLE_RE.captures_iter(reference) {
            valid.insert(c[1].to_string());
            if let Some(letter) = c.get(2) {
                valid.insert(format!("{}{}", &c[1], letter.as_str()));
            }
        }

        VerseReference { valid }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.valid.contains(token)
    }

    pub fn is_empty(&self) -> bool {
        self.valid.is_empty()
    }

    pub fn len(&self) -> usize {
        self.valid.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.valid.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(reference: &str) -> Vec<String> {
        VerseReference::parse(reference).iter().map(str::to_string).collect()
    }

    #[test]
    fn ranges_and_singles() {
        let mut expected: Vec<String> = ["3", "4", "5", "6", "7", "14", "15", "16", "17", "17a"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        expected.sort();
        assert_eq!(set("3, 3-7. 14-17a"), expected);
        assert_eq!(set("Eclo 3, 3-7. 14-17a"), expected);
    }

    #[test]
    fn en_dash_and_spaces() {
        let r = VerseReference::parse("Lc 1, 26 – 28b");
        for v in ["1", "26", "27", "28", "28b"] {
            assert!(r.contains(v), "missing {v}");
        }
        assert!(!r.contains("29"));
    }

    #[test]
    fn lettered_single() {
        let r = VerseReference::parse("Mt 5, 1.3c");
        assert!(r.contains("3c") && r.contains("3") && r.contains("1"));
    }

    #[test]
    fn reversed_and_huge_ranges_not_expanded() {
        let r = VerseReference::parse("9-2");
        assert_eq!(r.len(), 2);
        let r = VerseReference::parse("1-999999");
        assert!(r.contains("999999") && !r.contains("500"));
    }

    #[test]
    fn no_numbers() {
        assert!(VerseReference::parse("Salmo responsorial").is_empty());
    }
}
