//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is one discrete thing that happened: a key press, a drop, a
/// counter step. Reducers consume intents to produce the next state.
pub trait Intent: Send + 'static {}
