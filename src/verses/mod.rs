//! Verse-number detection for scripture text whose markers were flattened
//! into the prose ("16mas disse" instead of "16 mas disse").

pub mod reference;
pub mod tokenizer;

pub use reference::VerseReference;
pub use tokenizer::{tokenize, tokenize_with, RenderToken};
