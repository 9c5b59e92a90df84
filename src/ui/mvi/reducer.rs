//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state in response to intents.
///
/// The reducer is the only place a feature's state changes, and it must be
/// pure: `(State, Intent) -> State`, no side effects. Everything effectful
/// (evaluation, timers, terminal I/O) happens in the shell around the
/// dispatch.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
