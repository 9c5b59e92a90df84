//! Reducer for the player roster.

use crate::ui::mvi::Reducer;
use uuid::Uuid;

use super::intent::RosterIntent;
use super::state::{Player, RosterState, MAX_PLAYERS};

/// Reducer for roster transitions.
///
/// Unknown player ids and adds at capacity are silent no-ops; the UI hides
/// those affordances but the reducer stays defensive.
pub struct RosterReducer;

impl Reducer for RosterReducer {
    type State = RosterState;
    type Intent = RosterIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RosterIntent::AddPlayer { presets } => {
                if state.players.len() >= MAX_PLAYERS {
                    tracing::debug!("roster at capacity, add ignored");
                    return state;
                }
                let position = state.players.len();
                let avatar = presets
                    .get(position % presets.len().max(1))
                    .cloned()
                    .unwrap_or_default();
                let player = Player {
                    id: Uuid::new_v4(),
                    name: format!("Player {}", position + 1),
                    score: 0,
                    avatar,
                };
                // New ids append to the snapshot; existing positions never
                // move.
                state.display_order.push(player.id);
                state.players.push(player);
            }

            RosterIntent::AdjustScore { id, delta } => {
                if let Some(player) = player_mut(&mut state, id) {
                    player.score += delta;
                }
            }

            RosterIntent::Rename { id, name } => {
                if let Some(player) = player_mut(&mut state, id) {
                    player.name = name;
                }
            }

            RosterIntent::SetAvatar { id, avatar } => {
                if let Some(player) = player_mut(&mut state, id) {
                    player.avatar = avatar;
                }
            }

            RosterIntent::SnapshotOrder => {
                let mut ranked: Vec<(Uuid, i64)> =
                    state.players.iter().map(|p| (p.id, p.score)).collect();
                ranked.sort_by_key(|(_, score)| std::cmp::Reverse(*score));
                state.display_order = ranked.into_iter().map(|(id, _)| id).collect();
            }

            RosterIntent::Reset => {
                state.players.clear();
                state.display_order.clear();
            }
        }
        state
    }
}

fn player_mut(state: &mut RosterState, id: Uuid) -> Option<&mut Player> {
    let player = state.players.iter_mut().find(|p| p.id == id);
    if player.is_none() {
        tracing::debug!(%id, "unknown player id ignored");
    }
    player
}
