use ratatui::style::Color;

pub const GOLD_ACCENT: Color = Color::Rgb(0xd4, 0xaf, 0x37);
pub const CARD_RED: Color = Color::Rgb(0x6d, 0x18, 0x18);
pub const CARD_TEXT: Color = Color::Rgb(0xf5, 0xe6, 0xb3);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HINT_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const SELECTED_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
