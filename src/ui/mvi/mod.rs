//! Unidirectional update primitives for the widget state.
//!
//! ```text
//! QuotesSettled / Select ──→ Reducer ──→ DisplayState ──→ render
//!        ↑                                                  │
//!        └──────────── fetch task / key press ──────────────┘
//! ```
//!
//! Randomness and I/O stay with the caller; reducers only apply decisions.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
