//! Scorekeeping and arithmetic companion for tabletop card duels.
//!
//! Two rows of value cards summed live, a keypad calculator for entering
//! arithmetic, and a points screen tracking up to ten players. All feature
//! state sits behind pure MVI reducers in [`ui`]; [`eval`] holds the
//! arithmetic evaluator the calculator confirms through.

pub mod config;
pub mod eval;
pub mod logging;
pub mod ui;
