use crate::ui::mvi::Reducer;

use super::intent::DisplayIntent;
use super::state::{DisplayState, LoadPhase};

/// Pure transitions for [`DisplayState`]. The random draw happens in
/// [`crate::quotes::select`] before dispatch.
pub struct DisplayReducer;

impl Reducer for DisplayReducer {
    type State = DisplayState;
    type Intent = DisplayIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DisplayIntent::QuotesSettled { quotes } => match state.phase {
                LoadPhase::Loading => {
                    let phase = if quotes.is_empty() {
                        LoadPhase::Empty
                    } else {
                        LoadPhase::Populated
                    };
                    DisplayState {
                        phase,
                        quotes,
                        ..state
                    }
                }
                // Settles once; loading never comes back.
                LoadPhase::Populated | LoadPhase::Empty => state,
            },

            DisplayIntent::Select(selection) => {
                if state.phase != LoadPhase::Populated {
                    return state;
                }
                let Some(quote) = state.quotes.get(selection.quote_index).cloned() else {
                    return state;
                };
                DisplayState {
                    current_quote: quote,
                    current_color: selection.color,
                    ..state
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::{AccentColor, QuoteRecord, Selection};

    fn populated() -> DisplayState {
        DisplayReducer::reduce(
            DisplayState::default(),
            DisplayIntent::QuotesSettled {
                quotes: vec![QuoteRecord::new("A", "B"), QuoteRecord::new("C", "D")],
            },
        )
    }

    #[test]
    fn settled_with_quotes_populates() {
        let state = populated();
        assert_eq!(state.phase(), LoadPhase::Populated);
        assert_eq!(state.quotes().len(), 2);
    }

    #[test]
    fn settled_empty_is_empty() {
        let state = DisplayReducer::reduce(
            DisplayState::default(),
            DisplayIntent::QuotesSettled { quotes: vec![] },
        );
        assert_eq!(state.phase(), LoadPhase::Empty);
        assert!(!state.is_loading());
    }

    #[test]
    fn select_applies_quote_and_color() {
        let color = AccentColor::from(0xe74c3c);
        let state = DisplayReducer::reduce(
            populated(),
            DisplayIntent::Select(Selection {
                quote_index: 1,
                color,
            }),
        );
        assert_eq!(state.current_quote(), &QuoteRecord::new("C", "D"));
        assert_eq!(state.current_color(), color);
    }

    #[test]
    fn select_out_of_range_is_noop() {
        let before = populated();
        let after = DisplayReducer::reduce(
            before.clone(),
            DisplayIntent::Select(Selection {
                quote_index: 9,
                color: AccentColor::from(0x000000),
            }),
        );
        assert_eq!(before, after);
    }
}
