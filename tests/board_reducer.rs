use duelcalc::ui::board::{BoardIntent, BoardReducer, BoardState, RowId, Slot, MAX_SLOTS};
use duelcalc::ui::mvi::Reducer;

fn confirm(state: BoardState, row: RowId, index: usize, value: i64) -> BoardState {
    BoardReducer::reduce(state, BoardIntent::Confirm { row, index, value })
}

fn reorder(
    state: BoardState,
    row: RowId,
    source: usize,
    dest: Option<(RowId, usize)>,
) -> BoardState {
    BoardReducer::reduce(state, BoardIntent::Reorder { row, source, dest })
}

fn slot(value: Option<i64>) -> Slot {
    let mut slot = Slot::empty();
    slot.value = value;
    slot
}

/// Top row seeded with the given values, add-slots where `None`.
fn top_row(values: &[Option<i64>]) -> BoardState {
    let mut state = BoardState::default();
    state.top = values.iter().map(|v| slot(*v)).collect();
    state
}

fn values(state: &BoardState, row: RowId) -> Vec<Option<i64>> {
    state.row(row).iter().map(|slot| slot.value).collect()
}

// -- confirm and edge growth --------------------------------------------------

#[test]
fn filling_the_sole_slot_grows_both_edges() {
    let state = confirm(BoardState::default(), RowId::Top, 0, 5);
    assert_eq!(values(&state, RowId::Top), [None, Some(5), None]);
}

#[test]
fn rows_are_independent() {
    let state = confirm(BoardState::default(), RowId::Top, 0, 5);
    assert_eq!(state.row(RowId::Bottom).len(), 1);
    assert!(state.row(RowId::Bottom)[0].is_add_slot());
}

#[test]
fn overwriting_an_interior_slot_grows_nothing() {
    let state = confirm(BoardState::default(), RowId::Top, 0, 5);
    let state = confirm(state, RowId::Top, 1, 9);
    assert_eq!(values(&state, RowId::Top), [None, Some(9), None]);
}

#[test]
fn nine_first_slot_confirms_never_exceed_the_ceiling() {
    let mut state = BoardState::default();
    for i in 0..9 {
        state = confirm(state, RowId::Top, 0, i);
        assert!(state.row(RowId::Top).len() <= MAX_SLOTS);
    }
    assert_eq!(state.row(RowId::Top).len(), MAX_SLOTS);
}

#[test]
fn confirm_at_the_ceiling_adds_no_edge_slot() {
    let mut state = BoardState::default();
    for i in 0..9 {
        state = confirm(state, RowId::Top, 0, i);
    }
    let state = confirm(state, RowId::Top, 0, 99);
    assert_eq!(state.row(RowId::Top).len(), MAX_SLOTS);
    assert_eq!(state.row(RowId::Top)[0].value, Some(99));
}

#[test]
fn ceiling_is_checked_per_side() {
    // Nine slots with a filled tail: confirming the last slot still has
    // room for exactly one appended add-slot.
    let mut row: Vec<Option<i64>> = (0..9).map(|i| Some(i)).collect();
    row[0] = None;
    let state = top_row(&row);
    let state = confirm(state, RowId::Top, 8, 42);
    assert_eq!(state.row(RowId::Top).len(), MAX_SLOTS);
    assert!(state.row(RowId::Top)[9].is_add_slot());
}

#[test]
fn stale_index_confirm_is_a_noop() {
    let before = BoardState::default();
    let after = confirm(before.clone(), RowId::Top, 5, 9);
    assert_eq!(after, before);
}

// -- reorder ------------------------------------------------------------------

#[test]
fn drop_without_destination_is_a_noop() {
    let before = top_row(&[None, Some(4), Some(9), None]);
    let after = reorder(before.clone(), RowId::Top, 1, None);
    assert_eq!(after, before);
}

#[test]
fn cross_row_drop_is_a_noop() {
    let before = top_row(&[None, Some(4), Some(9), None]);
    let after = reorder(before.clone(), RowId::Top, 1, Some((RowId::Bottom, 0)));
    assert_eq!(after, before);
}

#[test]
fn leading_add_slot_is_never_displaced() {
    let state = top_row(&[None, Some(4), Some(9), None]);
    let state = reorder(state, RowId::Top, 2, Some((RowId::Top, 0)));
    assert_eq!(values(&state, RowId::Top), [None, Some(9), Some(4), None]);
}

#[test]
fn trailing_add_slot_is_never_displaced() {
    let state = top_row(&[None, Some(4), Some(9), None]);
    let state = reorder(state, RowId::Top, 1, Some((RowId::Top, 3)));
    assert_eq!(values(&state, RowId::Top), [None, Some(9), Some(4), None]);
}

#[test]
fn interior_drop_relocates_a_single_card() {
    let state = top_row(&[None, Some(1), Some(2), Some(3), None]);
    let state = reorder(state, RowId::Top, 1, Some((RowId::Top, 3)));
    assert_eq!(
        values(&state, RowId::Top),
        [None, Some(2), Some(3), Some(1), None]
    );
}

#[test]
fn reorder_keeps_slot_identity() {
    let state = top_row(&[None, Some(4), Some(9), None]);
    let moved_id = state.row(RowId::Top)[1].id;
    let state = reorder(state, RowId::Top, 1, Some((RowId::Top, 2)));
    assert_eq!(state.row(RowId::Top)[2].id, moved_id);
}

#[test]
fn out_of_bounds_source_is_a_noop() {
    let before = top_row(&[None, Some(4), None]);
    let after = reorder(before.clone(), RowId::Top, 7, Some((RowId::Top, 1)));
    assert_eq!(after, before);
}

// -- reset and sums -----------------------------------------------------------

#[test]
fn reset_replaces_the_row_with_a_fresh_add_slot() {
    let state = confirm(BoardState::default(), RowId::Top, 0, 5);
    let old_ids: Vec<_> = state.row(RowId::Top).iter().map(|s| s.id).collect();
    let state = BoardReducer::reduce(state, BoardIntent::ResetRow { row: RowId::Top });
    let slots = state.row(RowId::Top);
    assert_eq!(slots.len(), 1);
    assert!(slots[0].is_add_slot());
    assert!(!old_ids.contains(&slots[0].id));
}

#[test]
fn reset_leaves_the_other_row_alone() {
    let state = confirm(BoardState::default(), RowId::Bottom, 0, 8);
    let state = BoardReducer::reduce(state, BoardIntent::ResetRow { row: RowId::Top });
    assert_eq!(values(&state, RowId::Bottom), [None, Some(8), None]);
}

#[test]
fn row_sum_skips_add_slots() {
    let state = top_row(&[Some(4), Some(7), None]);
    assert_eq!(state.sum(RowId::Top), 11);
}
