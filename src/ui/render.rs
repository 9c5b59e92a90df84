//! Screen rendering.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::{App, DragOrigin, Screen};
use crate::ui::board::{RowId, Slot};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{board_layout, card_cells, centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    CARD_RED, CARD_TEXT, GLOBAL_BORDER, GOLD_ACCENT, HEADER_TEXT, HINT_TEXT, SELECTED_HIGHLIGHT,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());
    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::Board => draw_board(frame, app, body),
        Screen::Points => draw_points(frame, app, body),
    }
    frame.render_widget(Footer::new().widget(app, footer), footer);

    if app.calculator().is_open() {
        draw_calculator(frame, app);
    }
}

fn draw_board(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let layout = board_layout(body);

    draw_sum(frame, app, RowId::Top, layout.top_sum);
    draw_row(frame, app, RowId::Top, layout.top_cards);

    let divider = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(GOLD_ACCENT));
    frame.render_widget(divider, layout.divider);

    draw_row(frame, app, RowId::Bottom, layout.bottom_cards);
    draw_sum(frame, app, RowId::Bottom, layout.bottom_sum);
}

/// Row total, shown once the row has any filled card.
fn draw_sum(frame: &mut Frame<'_>, app: &App, row: RowId, area: Rect) {
    if area.height == 0 || !app.board().has_filled(row) || app.is_resetting() {
        return;
    }
    let sum = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", app.board().sum(row)),
        Style::default().fg(GOLD_ACCENT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(sum, area);
}

fn draw_row(frame: &mut Frame<'_>, app: &App, row: RowId, area: Rect) {
    let slots = app.board().row(row);
    let cells = card_cells(area, slots.len());
    for (index, (slot, cell)) in slots.iter().zip(&cells).enumerate() {
        draw_card(frame, app, row, index, slot, *cell);
    }
}

fn draw_card(frame: &mut Frame<'_>, app: &App, row: RowId, index: usize, slot: &Slot, cell: Rect) {
    let selected = app.board_cursor() == (row, index);
    let held = app.grabbed() == Some(DragOrigin { row, index });

    let border_style = if held {
        Style::default().fg(GOLD_ACCENT).add_modifier(Modifier::BOLD)
    } else if selected {
        Style::default().fg(GOLD_ACCENT)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    };

    // During the reset delay filled cards already render cleared; the
    // structural reset follows on a tick.
    let value = if app.is_resetting() { None } else { slot.value };
    let (text, text_style, card_style) = match value {
        Some(v) => (
            v.to_string(),
            Style::default().fg(CARD_TEXT).add_modifier(Modifier::BOLD),
            Style::default().bg(CARD_RED),
        ),
        None => ("+".to_string(), Style::default().fg(HINT_TEXT), Style::default()),
    };

    let pad = cell.height.saturating_sub(3) / 2;
    let mut lines: Vec<Line> = (0..pad).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(text, text_style)));

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(card_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(card, cell);
}

fn draw_points(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        "POINTS",
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    for (index, player) in app.roster().display_players().iter().enumerate() {
        let selected = index == app.roster_cursor();
        let marker = if selected { "▸ " } else { "  " };
        let renaming = selected && app.renaming();
        let name = if renaming {
            format!("{}_", player.name)
        } else {
            player.name.clone()
        };
        let spans = vec![
            Span::styled(marker.to_string(), Style::default().fg(GOLD_ACCENT)),
            Span::styled(
                format!("{:<12}", avatar_tag(&player.avatar)),
                Style::default().fg(HINT_TEXT),
            ),
            Span::styled(format!("{:<24}", name), Style::default().fg(HEADER_TEXT)),
            Span::styled(
                format!("{:>6}", player.score),
                Style::default().fg(GOLD_ACCENT).add_modifier(Modifier::BOLD),
            ),
        ];
        let mut line = Line::from(spans);
        if selected {
            line = line.style(Style::default().bg(SELECTED_HIGHLIGHT));
        }
        lines.push(line);
    }

    if !app.roster().is_full() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "a: add new player",
            Style::default().fg(HINT_TEXT),
        )));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), body);
}

/// Short display tag for an avatar reference: the file stem in brackets.
fn avatar_tag(avatar: &str) -> String {
    let stem = std::path::Path::new(avatar)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("?");
    format!("[{}]", stem)
}

const KEYPAD: [[&str; 4]; 4] = [
    ["1", "2", "3", "+"],
    ["4", "5", "6", "-"],
    ["7", "8", "9", "×"],
    ["C", "0", "⏎", "÷"],
];

fn draw_calculator(frame: &mut Frame<'_>, app: &App) {
    let Some((_, _, input)) = app.calculator().session() else {
        return;
    };

    let area = centered_rect_by_size(28, 12, frame.area());
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        input.to_string(),
        Style::default().fg(CARD_TEXT).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    for keypad_row in KEYPAD {
        let spans: Vec<Span> = keypad_row
            .iter()
            .map(|key| {
                Span::styled(
                    format!("  {}  ", key),
                    Style::default().fg(HEADER_TEXT),
                )
            })
            .collect();
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: save │ Esc: cancel",
        Style::default().fg(HINT_TEXT),
    )));

    let popup = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title("Calculator")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GOLD_ACCENT)),
    );
    frame.render_widget(popup, area);
}
