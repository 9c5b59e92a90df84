//! Calculator session feature module.
//!
//! The modal keypad that edits one card slot at a time: opened by
//! activating a slot, closed by confirm or cancel, input discarded either
//! way.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Session state (`Hidden` or `Open` over a target slot)
//! - `intent.rs` - Keypad keys and session events
//! - `reducer.rs` - Input editing transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::{CalculatorIntent, KeypadKey};
pub use reducer::CalculatorReducer;
pub use state::CalculatorState;
