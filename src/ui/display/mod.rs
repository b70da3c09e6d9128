//! Quote display feature module.
//!
//! - `state.rs` - what is on screen (phase, collection, quote, color)
//! - `intent.rs` - fetch settlement and selector results
//! - `reducer.rs` - `Loading -> {Populated, Empty}`, `Populated -> Populated`

mod intent;
mod reducer;
mod state;

pub use intent::DisplayIntent;
pub use reducer::DisplayReducer;
pub use state::{DisplayState, LoadPhase};
