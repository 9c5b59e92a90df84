//! State for the calculator session.

use crate::ui::board::RowId;
use crate::ui::mvi::UiState;

/// Calculator session: closed, or open over one target slot.
///
/// The session is transient. Confirm and cancel both return to `Hidden`;
/// nothing of the input survives the session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CalculatorState {
    #[default]
    Hidden,
    Open {
        row: RowId,
        index: usize,
        input: String,
    },
}

impl UiState for CalculatorState {}

impl CalculatorState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// The target slot and current input, when open.
    pub fn session(&self) -> Option<(RowId, usize, &str)> {
        match self {
            Self::Hidden => None,
            Self::Open { row, index, input } => Some((*row, *index, input.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_is_default() {
        assert_eq!(CalculatorState::default(), CalculatorState::Hidden);
    }

    #[test]
    fn session_exposes_target() {
        let state = CalculatorState::Open {
            row: RowId::Top,
            index: 2,
            input: "14".to_string(),
        };
        assert_eq!(state.session(), Some((RowId::Top, 2, "14")));
        assert_eq!(CalculatorState::Hidden.session(), None);
    }
}
