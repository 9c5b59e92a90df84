use crate::ui::app::{App, Screen};
use crate::ui::theme::{GLOBAL_BORDER, GOLD_ACCENT, HEADER_TEXT, HINT_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let (screen_name, counter_label, counter) = match app.screen() {
            Screen::Board => ("DUEL", "ROUND", app.round()),
            Screen::Points => ("POINTS", "CYCLE", app.cycle()),
        };
        let separator_style = Style::default().fg(HINT_TEXT);
        let line = Line::from(vec![
            Span::styled(
                "  DUELCALC",
                Style::default().fg(GOLD_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(screen_name.to_string(), Style::default().fg(HEADER_TEXT)),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("{} {}", counter_label, counter),
                Style::default().fg(HEADER_TEXT),
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
