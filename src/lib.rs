//! Saint-of-the-day extraction for the Canção Nova site and verse-number
//! tokenizing for the daily liturgy readings.

pub mod config;
pub mod display;
pub mod error;
pub mod liturgy;
pub mod parser;
pub mod scraper;
pub mod verses;

pub use config::{Settings, SiteProfile};
pub use error::{Error, Result};
pub use parser::blocks::SaintContentBlock;
pub use parser::extract::SaintOfDayRecord;
pub use parser::process_page;
pub use verses::{tokenize, RenderToken, VerseReference};
