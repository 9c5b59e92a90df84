//! Model-View-Intent (MVI) primitives.
//!
//! Every feature on the board and points screens keeps its state behind a
//! pure reducer; the shell dispatches intents and re-renders from the
//! returned state.
//!
//! ```text
//! gesture ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
