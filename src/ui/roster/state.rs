//! State for the player roster.

use crate::ui::mvi::UiState;
use uuid::Uuid;

/// Hard ceiling on roster size.
pub const MAX_PLAYERS: usize = 10;

/// A tracked player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub score: i64,
    /// Image resource reference: a preset path or an externally supplied
    /// reference. Only stored here, never interpreted.
    pub avatar: String,
}

/// Roster state: players in first-sight order plus the display-order
/// snapshot.
///
/// `display_order` is a stored list, not a derived sort. It is captured from
/// score-descending order when the points screen is entered; afterwards it
/// only grows by appended ids, so positions never jump while scores move.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RosterState {
    pub players: Vec<Player>,
    pub display_order: Vec<Uuid>,
}

impl UiState for RosterState {}

impl RosterState {
    pub fn player(&self, id: Uuid) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Players in display order.
    ///
    /// Ids missing from the snapshot sort after all snapshotted positions,
    /// keeping their relative insertion order.
    pub fn display_players(&self) -> Vec<&Player> {
        let mut players: Vec<&Player> = self.players.iter().collect();
        players.sort_by_key(|p| {
            self.display_order
                .iter()
                .position(|id| *id == p.id)
                .unwrap_or(usize::MAX)
        });
        players
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= MAX_PLAYERS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, score: i64) -> Player {
        Player {
            id: Uuid::new_v4(),
            name: name.to_string(),
            score,
            avatar: String::new(),
        }
    }

    #[test]
    fn display_players_follows_stored_order() {
        let a = player("a", 1);
        let b = player("b", 9);
        let state = RosterState {
            display_order: vec![a.id, b.id],
            players: vec![b.clone(), a.clone()],
        };
        let names: Vec<&str> = state
            .display_players()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn unsnapshotted_players_sort_last_in_insertion_order() {
        let a = player("a", 0);
        let b = player("b", 0);
        let c = player("c", 50);
        let state = RosterState {
            display_order: vec![a.id],
            players: vec![a.clone(), b.clone(), c.clone()],
        };
        let names: Vec<&str> = state
            .display_players()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
