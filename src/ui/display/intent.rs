use crate::quotes::{QuoteCollection, Selection};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DisplayIntent {
    /// The fetch finished. Failures arrive as an empty collection.
    QuotesSettled { quotes: QuoteCollection },

    /// Show the quote at `quote_index` in `color`.
    Select(Selection),
}

impl Intent for DisplayIntent {}
