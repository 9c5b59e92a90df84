//! Base trait for feature state.

/// Marker trait for feature state objects.
///
/// State is a complete snapshot: cloneable to produce the next state,
/// comparable to detect changes, and self-contained enough to render from.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
