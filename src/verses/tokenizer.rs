use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::reference::VerseReference;

static GLUED_APOSTROPHE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([0-9])[‘’'´`′]([A-Za-zÀ-ÖØ-öø-ÿ"“])"#).unwrap()
});
static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());
static SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+[a-d]?)\s").unwrap());
static VERSE_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+[a-d]?$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderToken {
    pub is_verse_number: bool,
    pub text: String,
}

impl RenderToken {
    fn from_fragment(text: &str) -> Self {
        RenderToken {
            is_verse_number: VERSE_TOKEN_RE.is_match(text),
            text: text.to_string(),
        }
    }
}

/// Split scripture text into plain runs and verse-number markers.
pub fn tokenize(body: &str, reference: &str) -> Vec<RenderToken> {
    tokenize_with(body, &VerseReference::parse(reference))
}

/// Same as [`tokenize`] with an already parsed reference.
pub fn tokenize_with(body: &str, verses: &VerseReference) -> Vec<RenderToken> {
    let cleaned = unglue_apostrophes(body);
    let spaced = separate_verse_numbers(&cleaned, verses);
    split_tokens(&spaced)
}

/// `24'O` -> `24 O`: a lost separator rendered as an apostrophe.
pub fn unglue_apostrophes(text: &str) -> String {
    GLUED_APOSTROPHE_RE.replace_all(text, "$1 $2").into_owned()
}

/// What follows a digit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Follower<'a> {
    /// Lower-case letters glued on (`16mas`).
    Lower(&'a str),
    /// An upper-case letter or opening quote (`17O`).
    Upper,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Split {
    Keep,
    AfterNumber,
    /// After the first glued letter, whose byte length is carried.
    AfterFirstLetter(usize),
}

#[derive(Debug, Default)]
struct Pass {
    out: String,
    cursor: usize,
    last_verse: u64,
}

/// Insert a space after digit runs that are verse numbers glued to text.
///
/// A run counts as a verse when the reference lists it or it continues the
/// last confirmed verse by one. Anything else is left untouched.
pub fn separate_verse_numbers(text: &str, verses: &VerseReference) -> String {
    let pass = DIGITS_RE.find_iter(text).fold(Pass::default(), |mut pass, m| {
        let digits = m.as_str();
        let follower = follower_at(text, m.end());
        let (split, last_verse) = decide(digits, follower, verses, pass.last_verse);

        pass.out.push_str(&text[pass.cursor..m.end()]);
        pass.cursor = m.end();
        match split {
            Split::Keep => {}
            Split::AfterNumber => pass.out.push(' '),
            Split::AfterFirstLetter(len) => {
                pass.out.push_str(&text[m.end()..m.end() + len]);
                pass.out.push(' ');
                pass.cursor += len;
            }
        }
        pass.last_verse = last_verse;
        pass
    });

    let mut out = pass.out;
    out.push_str(&text[pass.cursor..]);
    out
}

fn follower_at(text: &str, at: usize) -> Follower<'_> {
    let rest = &text[at..];
    match rest.chars().next() {
        Some(c) if is_glued_lower(c) => {
            let len = rest.find(|c: char| !is_glued_lower(c)).unwrap_or(rest.len());
            Follower::Lower(&rest[..len])
        }
        Some(c) if c.is_ascii_uppercase() || ('À'..='Ú').contains(&c) || c == '"' || c == '“' => {
            Follower::Upper
        }
        _ => Follower::Other,
    }
}

fn is_glued_lower(c: char) -> bool {
    c.is_ascii_lowercase() || c == 'ç' || c == 'ñ'
}

/// Classify one digit run given the running verse counter.
/// Returns the edit to apply and the updated counter.
fn decide(digits: &str, follower: Follower<'_>, verses: &VerseReference, last_verse: u64) -> (Split, u64) {
    let num = digits.parse::<u64>().ok();
    let sequential = last_verse > 0 && num.is_some_and(|n| Some(n) == last_verse.checked_add(1));
    let confirmed = num.unwrap_or(last_verse);
    let listed_or_sequential = verses.contains(digits) || sequential;

    match follower {
        Follower::Lower(letters) => {
            let first = letters.chars().next().map_or(0, char::len_utf8);
            if verses.contains(&format!("{}{}", digits, &letters[..first])) {
                (Split::AfterFirstLetter(first), confirmed)
            } else if listed_or_sequential {
                (Split::AfterNumber, confirmed)
            } else {
                (Split::Keep, last_verse)
            }
        }
        Follower::Upper if listed_or_sequential => (Split::AfterNumber, confirmed),
        Follower::Other if listed_or_sequential => (Split::Keep, confirmed),
        _ => (Split::Keep, last_verse),
    }
}

/// Cut at every `digits[letter]` followed by whitespace; order and all
/// other characters are preserved.
pub fn split_tokens(text: &str) -> Vec<RenderToken> {
    let mut tokens = Vec::new();
    let mut cursor = 0;
    for c in SPLIT_RE.captures_iter(text) {
        let Some(num) = c.get(1) else { continue };
        if num.start() > cursor {
            tokens.push(RenderToken::from_fragment(&text[cursor..num.start()]));
        }
        tokens.push(RenderToken::from_fragment(num.as_str()));
        cursor = num.end();
    }
    if cursor < text.len() {
        tokens.push(RenderToken::from_fragment(&text[cursor..]));
    }
    tokens
}
