//! Reducer for the calculator session.

use crate::ui::mvi::Reducer;

use super::intent::{CalculatorIntent, KeypadKey};
use super::state::CalculatorState;

/// Reducer for calculator input editing.
///
/// Confirmation is coordinated by the shell: it reads the session, runs the
/// evaluator, dispatches the board confirm, then closes the session.
pub struct CalculatorReducer;

impl Reducer for CalculatorReducer {
    type State = CalculatorState;
    type Intent = CalculatorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CalculatorIntent::Open {
                row,
                index,
                initial,
            } => CalculatorState::Open {
                row,
                index,
                input: if initial.is_empty() {
                    "0".to_string()
                } else {
                    initial
                },
            },

            CalculatorIntent::Press(key) => match state {
                CalculatorState::Open {
                    row,
                    index,
                    mut input,
                } => {
                    // A digit replaces the initial "0"; operators append.
                    if input == "0" && matches!(key, KeypadKey::Digit(_)) {
                        input.clear();
                    }
                    input.push(key.glyph());
                    CalculatorState::Open { row, index, input }
                }
                other => other,
            },

            CalculatorIntent::Backspace => match state {
                CalculatorState::Open {
                    row,
                    index,
                    mut input,
                } => {
                    if input.chars().count() > 1 {
                        input.pop();
                    } else {
                        input = "0".to_string();
                    }
                    CalculatorState::Open { row, index, input }
                }
                other => other,
            },

            CalculatorIntent::Clear => match state {
                CalculatorState::Open { row, index, .. } => CalculatorState::Open {
                    row,
                    index,
                    input: "0".to_string(),
                },
                other => other,
            },

            CalculatorIntent::Close => CalculatorState::Hidden,
        }
    }
}
