//! Key and mouse routing.
//!
//! Focus order: an open calculator captures the keyboard entirely, then
//! rename mode on the points screen, then the active screen's bindings.
//! The calculator's capture is what scopes its key listener: attached while
//! open, gone on close.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::ui::app::{App, Screen};
use crate::ui::board::RowId;
use crate::ui::calculator::{CalculatorIntent, KeypadKey};
use crate::ui::layout::{board_layout, card_cells, cell_at, layout_regions};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.calculator().is_open() {
        handle_calculator_key(app, key);
        return;
    }

    if app.renaming() {
        handle_rename_key(app, key);
        return;
    }

    match app.screen() {
        Screen::Board => handle_board_key(app, key),
        Screen::Points => handle_points_key(app, key),
    }
}

fn handle_calculator_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.confirm_calculator(),
        KeyCode::Esc => app.cancel_calculator(),
        KeyCode::Backspace => app.dispatch_calculator(CalculatorIntent::Backspace),
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.dispatch_calculator(CalculatorIntent::Clear);
        }
        KeyCode::Char(c) => {
            if let Some(key) = KeypadKey::from_char(c) {
                app.dispatch_calculator(CalculatorIntent::Press(key));
            }
        }
        _ => {}
    }
}

fn handle_rename_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.end_rename(),
        KeyCode::Backspace => app.rename_pop(),
        KeyCode::Char(c) => app.rename_push(c),
        _ => {}
    }
}

fn handle_board_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Left => app.move_board_cursor(-1),
        KeyCode::Right => app.move_board_cursor(1),
        KeyCode::Up | KeyCode::Down => app.switch_board_row(),
        KeyCode::Enter => {
            let (row, index) = app.board_cursor();
            app.open_calculator(row, index);
        }
        KeyCode::Char(' ') => app.toggle_grab(),
        KeyCode::Esc => app.cancel_grab(),
        KeyCode::Char('r') => app.begin_board_reset(),
        KeyCode::Char('[') => app.step_round(-1),
        KeyCode::Char(']') => app.step_round(1),
        KeyCode::Char('p') | KeyCode::Tab => app.open_points(),
        _ => {}
    }
}

fn handle_points_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up => app.move_roster_cursor(-1),
        KeyCode::Down => app.move_roster_cursor(1),
        KeyCode::Char('+') | KeyCode::Char('=') => app.step_selected_score(1),
        KeyCode::Char('-') => app.step_selected_score(-1),
        KeyCode::Char('a') => app.add_player(),
        KeyCode::Enter | KeyCode::Char('n') => app.begin_rename(),
        KeyCode::Char('v') => app.cycle_selected_avatar(),
        KeyCode::Char('r') => app.reset_points(),
        KeyCode::Char('[') => app.step_cycle(-1),
        KeyCode::Char(']') => app.step_cycle(1),
        KeyCode::Char('b') | KeyCode::Tab | KeyCode::Esc => app.open_board(),
        _ => {}
    }
}

/// Translate press/release pairs on the board into taps and drops.
///
/// Destinations are hit-tested against the same card rectangles the
/// renderer draws; a release outside every cell carries no destination and
/// the drop no-ops.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.screen() != Screen::Board || app.calculator().is_open() {
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some((row, index)) = locate_cell(app, mouse.column, mouse.row) {
                app.press_board_cell(row, index);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let dest = locate_cell(app, mouse.column, mouse.row);
            app.release_board_cell(dest);
        }
        _ => {}
    }
}

fn locate_cell(app: &App, column: u16, row: u16) -> Option<(RowId, usize)> {
    let (cols, rows) = app.size();
    let area = Rect {
        x: 0,
        y: 0,
        width: cols,
        height: rows,
    };
    let (_, body, _) = layout_regions(area);
    let board = board_layout(body);

    let top_cells = card_cells(board.top_cards, app.board().row(RowId::Top).len());
    if let Some(index) = cell_at(&top_cells, column, row) {
        return Some((RowId::Top, index));
    }
    let bottom_cells = card_cells(board.bottom_cards, app.board().row(RowId::Bottom).len());
    cell_at(&bottom_cells, column, row).map(|index| (RowId::Bottom, index))
}
