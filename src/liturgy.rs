//! Daily liturgy payload and the reading pages built from it.

use serde::{Deserialize, Serialize};

use crate::verses::{tokenize, RenderToken};

pub const DEFAULT_COLOR_HEX: &str = "#7f8c8d";

const COLORS: &[(&str, &str)] = &[
    ("branco", "#FFFFFF"),
    ("white", "#FFFFFF"),
    ("verde", "#4CAF50"),
    ("green", "#4CAF50"),
    ("roxo", "#9C27B0"),
    ("purple", "#9C27B0"),
    ("vermelho", "#F44336"),
    ("red", "#F44336"),
    ("rosa", "#E91E63"),
    ("rose", "#E91E63"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiturgyData {
    #[serde(rename = "data", default)]
    pub date: String,
    #[serde(rename = "liturgia", default)]
    pub celebration: String,
    #[serde(rename = "cor", default)]
    pub color: String,
    #[serde(rename = "leituras", default)]
    pub readings: Readings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readings {
    #[serde(rename = "primeiraLeitura", default)]
    pub first: Vec<Reading>,
    #[serde(rename = "salmo", default)]
    pub psalm: Vec<Psalm>,
    #[serde(rename = "segundaLeitura", default)]
    pub second: Vec<Reading>,
    #[serde(rename = "evangelho", default)]
    pub gospel: Vec<Reading>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(rename = "referencia", default)]
    pub reference: String,
    #[serde(rename = "titulo", default)]
    pub title: String,
    #[serde(rename = "texto", default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Psalm {
    #[serde(rename = "referencia", default)]
    pub reference: String,
    #[serde(rename = "refrao", default)]
    pub response: String,
    #[serde(rename = "texto", default)]
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingPage<'a> {
    Reading { label: &'static str, reading: &'a Reading },
    Psalm(&'a Psalm),
}

impl ReadingPage<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            ReadingPage::Reading { label, .. } => *label,
            ReadingPage::Psalm(_) => "Salmo",
        }
    }

    pub fn reference(&self) -> &str {
        match self {
            ReadingPage::Reading { reading, .. } => &reading.reference,
            ReadingPage::Psalm(p) => &p.reference,
        }
    }

    /// Verse-marked body; psalms are rendered line by line instead.
    pub fn tokens(&self) -> Vec<RenderToken> {
        match self {
            ReadingPage::Reading { reading, .. } => tokenize(&reading.text, &reading.reference),
            ReadingPage::Psalm(_) => Vec::new(),
        }
    }
}

impl Psalm {
    /// Non-blank stanza lines with their leading dash removed.
    pub fn verses(&self) -> Vec<&str> {
        self.text
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.strip_prefix("— ")
                    .or_else(|| line.strip_prefix("– "))
                    .unwrap_or(line)
            })
            .collect()
    }
}

/// First reading, psalm, second reading, gospel; absent ones are skipped.
pub fn reading_pages(data: &LiturgyData) -> Vec<ReadingPage<'_>> {
    let r = &data.readings;
    let mut pages = Vec::with_capacity(4);
    if let Some(reading) = r.first.first() {
        pages.push(ReadingPage::Reading { label: "1ª Leitura", reading });
    }
    if let Some(psalm) = r.psalm.first() {
        pages.push(ReadingPage::Psalm(psalm));
    }
    if let Some(reading) = r.second.first() {
        pages.push(ReadingPage::Reading { label: "2ª Leitura", reading });
    }
    if let Some(reading) = r.gospel.first() {
        pages.push(ReadingPage::Reading { label: "Evangelho", reading });
    }
    pages
}

/// Hex colour for a liturgical colour name (Portuguese or English).
pub fn liturgical_color_hex(name: &str) -> &'static str {
    let key = name.trim().to_lowercase();
    COLORS
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(DEFAULT_COLOR_HEX, |(_, hex)| *hex)
}
