use crate::ui::mvi::Intent;

use super::state::RowId;

/// User gestures on the duel board.
#[derive(Debug, Clone)]
pub enum BoardIntent {
    /// Commit a calculator result into the slot at `index`.
    Confirm {
        row: RowId,
        index: usize,
        value: i64,
    },
    /// Drop a dragged slot. `dest` carries the raw drop target as delivered
    /// by the gesture source; `None` means the drop landed outside any row.
    Reorder {
        row: RowId,
        source: usize,
        dest: Option<(RowId, usize)>,
    },
    /// Replace the row with a single fresh add-slot.
    ResetRow { row: RowId },
}

impl Intent for BoardIntent {}
