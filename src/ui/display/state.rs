use crate::quotes::{AccentColor, QuoteCollection, QuoteRecord};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Fetch in flight.
    #[default]
    Loading,
    /// Fetch succeeded with at least one quote.
    Populated,
    /// Fetch failed or returned nothing. Terminal.
    Empty,
}

/// Everything the quote box needs to render.
///
/// `current_quote` is a blank placeholder until the phase is `Populated`
/// and the first selection has been applied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplayState {
    pub(super) phase: LoadPhase,
    pub(super) quotes: QuoteCollection,
    pub(super) current_quote: QuoteRecord,
    pub(super) current_color: AccentColor,
}

impl UiState for DisplayState {}

impl DisplayState {
    pub fn new(initial_color: AccentColor) -> Self {
        Self {
            current_color: initial_color,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn is_populated(&self) -> bool {
        self.phase == LoadPhase::Populated
    }

    /// Loading and empty render the same way: an empty quote box.
    pub fn is_waiting(&self) -> bool {
        !self.is_populated()
    }

    pub fn quotes(&self) -> &[QuoteRecord] {
        &self.quotes
    }

    pub fn current_quote(&self) -> &QuoteRecord {
        &self.current_quote
    }

    pub fn current_color(&self) -> AccentColor {
        self.current_color
    }
}
