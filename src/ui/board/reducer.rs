//! Reducer for the duel board.

use crate::ui::mvi::Reducer;

use super::intent::BoardIntent;
use super::state::{BoardState, Slot, MAX_SLOTS};

/// Reducer for slot sequences.
///
/// Every transition is defensive: stale indices, cross-row drops and drops
/// without a destination leave the state untouched. The UI disables those
/// affordances, but the reducer does not rely on it.
pub struct BoardReducer;

impl Reducer for BoardReducer {
    type State = BoardState;
    type Intent = BoardIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BoardIntent::Confirm { row, index, value } => {
                let slots = state.row_mut(row);
                if index >= slots.len() {
                    tracing::debug!(?row, index, "confirm on stale slot index ignored");
                    return state;
                }
                slots[index].value = Some(value);

                // Edge growth: a filled edge slot spawns a fresh add-slot
                // beside it, one per side, while the row is under capacity.
                let mut index = index;
                if index == 0 && slots.len() < MAX_SLOTS {
                    slots.insert(0, Slot::empty());
                    index += 1;
                }
                if index == slots.len() - 1 && slots.len() < MAX_SLOTS {
                    slots.push(Slot::empty());
                }
            }

            BoardIntent::Reorder { row, source, dest } => {
                let Some((dest_row, raw_dest)) = dest else {
                    return state;
                };
                if dest_row != row {
                    return state;
                }
                let slots = state.row_mut(row);
                if source >= slots.len() || raw_dest >= slots.len() {
                    tracing::debug!(?row, source, raw_dest, "reorder outside row bounds ignored");
                    return state;
                }

                // An add-slot pinned to an edge must stay there: drops aimed
                // at it are retargeted one cell inward.
                let mut dest = raw_dest;
                if dest == 0 && slots[0].is_add_slot() {
                    dest = 1;
                }
                let last = slots.len() - 1;
                if dest == last && slots[last].is_add_slot() {
                    dest = last.saturating_sub(1);
                }

                let slot = slots.remove(source);
                let dest = dest.min(slots.len());
                slots.insert(dest, slot);
            }

            BoardIntent::ResetRow { row } => {
                *state.row_mut(row) = vec![Slot::empty()];
            }
        }
        state
    }
}
