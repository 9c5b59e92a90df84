use crate::ui::mvi::Intent;
use uuid::Uuid;

/// User actions on the points screen.
#[derive(Debug, Clone)]
pub enum RosterIntent {
    /// Append a player with a default name and the next preset avatar,
    /// cycling through `presets` by roster size.
    AddPlayer { presets: Vec<String> },
    /// Step a player's score. Unbounded in both directions.
    AdjustScore { id: Uuid, delta: i64 },
    Rename { id: Uuid, name: String },
    SetAvatar { id: Uuid, avatar: String },
    /// Capture the display order from score-descending order. Dispatched
    /// when the points screen is entered, never while it stays open.
    SnapshotOrder,
    /// Clear the roster and its display order.
    Reset,
}

impl Intent for RosterIntent {}
