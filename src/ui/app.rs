use crate::config::ConfigStore;
use crate::eval;
use crate::ui::board::{BoardIntent, BoardReducer, BoardState, RowId};
use crate::ui::calculator::{CalculatorIntent, CalculatorReducer, CalculatorState};
use crate::ui::mvi::Reducer;
use crate::ui::roster::{RosterIntent, RosterReducer, RosterState};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// The two screens of the application.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Board,
    Points,
}

/// Cell a pointer press or keyboard grab started from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DragOrigin {
    pub row: RowId,
    pub index: usize,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Controller shell.
///
/// Owns every feature state and all cross-feature coordination: screen
/// navigation, calculator confirm, the delayed board reset, counters, and
/// gesture bookkeeping. Reducers stay pure; everything effectful lives
/// here.
pub struct App {
    should_quit: bool,
    screen: Screen,
    config: ConfigStore,
    /// Card rows (MVI pattern).
    board: BoardState,
    /// Players and display order (MVI pattern).
    roster: RosterState,
    /// Calculator session (MVI pattern).
    calculator: CalculatorState,
    round: u32,
    cycle: u32,
    /// Slot cursor on the board screen.
    board_cursor: (RowId, usize),
    /// Card picked up for keyboard reordering.
    grabbed: Option<DragOrigin>,
    /// Cell of the last mouse press, for tap detection.
    pressed: Option<DragOrigin>,
    /// Mouse drag in flight (presses on add-slots do not start one).
    drag: Option<DragOrigin>,
    /// Deadline of a pending board reset; filled cards render cleared until
    /// the structural reset fires on a tick.
    reset_deadline: Option<Instant>,
    /// Player cursor on the points screen.
    roster_cursor: usize,
    /// Rename mode for the selected player.
    renaming: bool,
    size: (u16, u16),
}

impl App {
    pub fn new(config: ConfigStore) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Board,
            config,
            board: BoardState::default(),
            roster: RosterState::default(),
            calculator: CalculatorState::default(),
            round: 1,
            cycle: 1,
            board_cursor: (RowId::Top, 0),
            grabbed: None,
            pressed: None,
            drag: None,
            reset_deadline: None,
            roster_cursor: 0,
            renaming: false,
            size: (0, 0),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn roster(&self) -> &RosterState {
        &self.roster
    }

    pub fn calculator(&self) -> &CalculatorState {
        &self.calculator
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    pub fn board_cursor(&self) -> (RowId, usize) {
        self.board_cursor
    }

    pub fn grabbed(&self) -> Option<DragOrigin> {
        self.grabbed
    }

    pub fn roster_cursor(&self) -> usize {
        self.roster_cursor
    }

    pub fn renaming(&self) -> bool {
        self.renaming
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
    }

    // ========================================================================
    // Screen navigation
    // ========================================================================

    /// Switch to the points screen.
    ///
    /// The display order is re-captured on every entry, then stays
    /// append-stable while the screen is open.
    pub fn open_points(&mut self) {
        self.screen = Screen::Points;
        self.roster_cursor = 0;
        self.dispatch_roster(RosterIntent::SnapshotOrder);
    }

    pub fn open_board(&mut self) {
        self.screen = Screen::Board;
        self.renaming = false;
    }

    // ========================================================================
    // Calculator session
    // ========================================================================

    /// Open the calculator over a slot. Read-only against the board: the
    /// slot's current value (empty for an add-slot) seeds the input.
    pub fn open_calculator(&mut self, row: RowId, index: usize) {
        if self.is_resetting() || index >= self.board.row(row).len() {
            return;
        }
        let initial = self
            .board
            .value_at(row, index)
            .map(|v| v.to_string())
            .unwrap_or_default();
        self.dispatch_calculator(CalculatorIntent::Open {
            row,
            index,
            initial,
        });
    }

    /// Evaluate the session input, commit it to the target slot, close.
    pub fn confirm_calculator(&mut self) {
        let Some((row, index, input)) = self.calculator.session() else {
            return;
        };
        let value = eval::evaluate(input);
        tracing::debug!(?row, index, value, "calculator confirmed");
        self.dispatch_board(BoardIntent::Confirm { row, index, value });
        self.dispatch_calculator(CalculatorIntent::Close);
        self.clamp_board_cursor();
    }

    pub fn cancel_calculator(&mut self) {
        self.dispatch_calculator(CalculatorIntent::Close);
    }

    /// Dispatch an editing intent to the calculator reducer.
    pub fn dispatch_calculator(&mut self, intent: CalculatorIntent) {
        dispatch_mvi!(self, calculator, CalculatorReducer, intent);
    }

    // ========================================================================
    // Board gestures
    // ========================================================================

    pub fn move_board_cursor(&mut self, direction: i32) {
        let (row, index) = self.board_cursor;
        let len = self.board.row(row).len();
        if len == 0 {
            return;
        }
        let current = index.min(len - 1);
        let next = if direction.is_negative() {
            current.saturating_sub(direction.unsigned_abs() as usize)
        } else {
            (current + direction as usize).min(len - 1)
        };
        self.board_cursor = (row, next);
    }

    /// Move the cursor to the other row. Drops any held card; a grab never
    /// crosses rows.
    pub fn switch_board_row(&mut self) {
        let (row, index) = self.board_cursor;
        let row = match row {
            RowId::Top => RowId::Bottom,
            RowId::Bottom => RowId::Top,
        };
        let len = self.board.row(row).len();
        self.board_cursor = (row, index.min(len.saturating_sub(1)));
        self.grabbed = None;
    }

    /// Pick up the card under the cursor, or place a held card at the
    /// cursor position.
    pub fn toggle_grab(&mut self) {
        if self.is_resetting() {
            return;
        }
        let (row, index) = self.board_cursor;
        match self.grabbed.take() {
            Some(origin) => {
                self.dispatch_board(BoardIntent::Reorder {
                    row: origin.row,
                    source: origin.index,
                    dest: Some((row, index)),
                });
                self.clamp_board_cursor();
            }
            None => {
                let slot = self.board.row(row).get(index);
                if slot.is_some_and(|slot| !slot.is_add_slot()) {
                    self.grabbed = Some(DragOrigin { row, index });
                }
            }
        }
    }

    pub fn cancel_grab(&mut self) {
        self.grabbed = None;
    }

    /// Mouse press on a board cell. Any cell can become a tap; only a
    /// filled card starts a drag.
    pub fn press_board_cell(&mut self, row: RowId, index: usize) {
        if self.is_resetting() || index >= self.board.row(row).len() {
            return;
        }
        self.board_cursor = (row, index);
        self.pressed = Some(DragOrigin { row, index });
        let slot = &self.board.row(row)[index];
        if !slot.is_add_slot() {
            self.drag = Some(DragOrigin { row, index });
        }
    }

    /// Mouse release. `dest` is the hit-tested release cell; `None` means
    /// the release landed outside every cell and a drop no-ops.
    pub fn release_board_cell(&mut self, dest: Option<(RowId, usize)>) {
        let pressed = self.pressed.take();
        let drag = self.drag.take();

        // Press and release on the same cell is a tap: open the editor.
        if let (Some(press), Some((row, index))) = (pressed, dest) {
            if press.row == row && press.index == index {
                self.open_calculator(row, index);
                return;
            }
        }

        if let Some(origin) = drag {
            self.dispatch_board(BoardIntent::Reorder {
                row: origin.row,
                source: origin.index,
                dest,
            });
            self.clamp_board_cursor();
        }
    }

    // ========================================================================
    // Reset flows and counters
    // ========================================================================

    /// Begin the board reset: cards render cleared immediately, the
    /// structural reset fires once the configured delay elapses.
    pub fn begin_board_reset(&mut self) {
        if self.reset_deadline.is_some() {
            return;
        }
        let delay = Duration::from_millis(self.config.get().ui.reset_delay_ms);
        self.reset_deadline = Some(Instant::now() + delay);
        self.grabbed = None;
        self.drag = None;
        self.pressed = None;
        tracing::info!(delay_ms = delay.as_millis() as u64, "board reset started");
    }

    pub fn is_resetting(&self) -> bool {
        self.reset_deadline.is_some()
    }

    pub fn on_tick(&mut self) {
        if self
            .reset_deadline
            .is_some_and(|deadline| Instant::now() >= deadline)
        {
            self.reset_deadline = None;
            self.dispatch_board(BoardIntent::ResetRow { row: RowId::Top });
            self.dispatch_board(BoardIntent::ResetRow { row: RowId::Bottom });
            self.round = 1;
            self.clamp_board_cursor();
            tracing::info!("board reset completed");
        }
    }

    /// Clear the roster. The cycle counter resets here, coupled to the
    /// points screen's reset rather than the roster reducer.
    pub fn reset_points(&mut self) {
        self.dispatch_roster(RosterIntent::Reset);
        self.cycle = 1;
        self.roster_cursor = 0;
        self.renaming = false;
    }

    pub fn step_round(&mut self, delta: i32) {
        self.round = step_counter(self.round, delta);
    }

    pub fn step_cycle(&mut self, delta: i32) {
        self.cycle = step_counter(self.cycle, delta);
    }

    // ========================================================================
    // Roster actions
    // ========================================================================

    pub fn add_player(&mut self) {
        let presets = self.config.get().avatars.presets;
        self.dispatch_roster(RosterIntent::AddPlayer { presets });
    }

    pub fn move_roster_cursor(&mut self, direction: i32) {
        let len = self.roster.players.len();
        if len == 0 {
            self.roster_cursor = 0;
            return;
        }
        let current = self.roster_cursor.min(len - 1);
        let next = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
        self.roster_cursor = next;
    }

    pub fn selected_player_id(&self) -> Option<Uuid> {
        self.roster
            .display_players()
            .get(self.roster_cursor)
            .map(|p| p.id)
    }

    pub fn step_selected_score(&mut self, delta: i64) {
        if let Some(id) = self.selected_player_id() {
            self.dispatch_roster(RosterIntent::AdjustScore { id, delta });
        }
    }

    pub fn begin_rename(&mut self) {
        if self.selected_player_id().is_some() {
            self.renaming = true;
        }
    }

    pub fn end_rename(&mut self) {
        self.renaming = false;
    }

    /// Rename mode edits the live name per keystroke, like a controlled
    /// input field.
    pub fn rename_push(&mut self, c: char) {
        if let Some((id, mut name)) = self.selected_name() {
            name.push(c);
            self.dispatch_roster(RosterIntent::Rename { id, name });
        }
    }

    pub fn rename_pop(&mut self) {
        if let Some((id, mut name)) = self.selected_name() {
            name.pop();
            self.dispatch_roster(RosterIntent::Rename { id, name });
        }
    }

    /// Swap the selected player's avatar for the next preset. An external
    /// avatar reference re-enters the cycle at the first preset.
    pub fn cycle_selected_avatar(&mut self) {
        let Some(id) = self.selected_player_id() else {
            return;
        };
        let Some(player) = self.roster.player(id) else {
            return;
        };
        let presets = self.config.get().avatars.presets;
        if presets.is_empty() {
            return;
        }
        let next = presets
            .iter()
            .position(|preset| *preset == player.avatar)
            .map(|i| (i + 1) % presets.len())
            .unwrap_or(0);
        let avatar = presets[next].clone();
        self.dispatch_roster(RosterIntent::SetAvatar { id, avatar });
    }

    fn selected_name(&self) -> Option<(Uuid, String)> {
        let id = self.selected_player_id()?;
        let player = self.roster.player(id)?;
        Some((id, player.name.clone()))
    }

    // ========================================================================
    // Dispatch plumbing
    // ========================================================================

    fn dispatch_board(&mut self, intent: BoardIntent) {
        dispatch_mvi!(self, board, BoardReducer, intent);
    }

    fn dispatch_roster(&mut self, intent: RosterIntent) {
        dispatch_mvi!(self, roster, RosterReducer, intent);
    }

    fn clamp_board_cursor(&mut self) {
        let (row, index) = self.board_cursor;
        let len = self.board.row(row).len();
        self.board_cursor = (row, index.min(len.saturating_sub(1)));
    }
}

fn step_counter(value: u32, delta: i32) -> u32 {
    if delta.is_negative() {
        value.saturating_sub(delta.unsigned_abs()).max(1)
    } else {
        value.saturating_add(delta as u32)
    }
}
