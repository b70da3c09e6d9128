//! Quote data model: records, the fetched collection, and the accent palette.

mod palette;
mod selector;

pub use palette::{AccentColor, ColorParseError, Palette, DEFAULT_INITIAL_COLOR, DEFAULT_PALETTE};
pub use selector::{select, Selection};

use serde::{Deserialize, Serialize};

/// One quote-and-author pair as served by the quote source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuoteRecord {
    #[serde(rename = "quote")]
    pub text: String,
    pub author: String,
}

impl QuoteRecord {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

/// Quotes in the order the source returned them. Positional identity only.
pub type QuoteCollection = Vec<QuoteRecord>;

/// Body of the quote source response: `{ "quotes": [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotesPayload {
    pub quotes: QuoteCollection,
}
