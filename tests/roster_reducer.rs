use duelcalc::ui::mvi::Reducer;
use duelcalc::ui::roster::{RosterIntent, RosterReducer, RosterState, MAX_PLAYERS};
use uuid::Uuid;

fn presets() -> Vec<String> {
    vec!["a.png".to_string(), "b.png".to_string(), "c.png".to_string()]
}

fn add(state: RosterState) -> RosterState {
    RosterReducer::reduce(state, RosterIntent::AddPlayer { presets: presets() })
}

fn bump_score(state: RosterState, id: Uuid, delta: i64) -> RosterState {
    RosterReducer::reduce(state, RosterIntent::AdjustScore { id, delta })
}

fn display_names(state: &RosterState) -> Vec<String> {
    state
        .display_players()
        .iter()
        .map(|p| p.name.clone())
        .collect()
}

// -- add ----------------------------------------------------------------------

#[test]
fn add_assigns_default_name_and_zero_score() {
    let state = add(RosterState::default());
    assert_eq!(state.players.len(), 1);
    assert_eq!(state.players[0].name, "Player 1");
    assert_eq!(state.players[0].score, 0);
}

#[test]
fn default_names_follow_position_at_add_time() {
    let state = add(add(add(RosterState::default())));
    let names: Vec<&str> = state.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Player 1", "Player 2", "Player 3"]);
}

#[test]
fn avatars_cycle_through_presets() {
    let mut state = RosterState::default();
    for _ in 0..4 {
        state = add(state);
    }
    let avatars: Vec<&str> = state.players.iter().map(|p| p.avatar.as_str()).collect();
    assert_eq!(avatars, ["a.png", "b.png", "c.png", "a.png"]);
}

#[test]
fn eleventh_add_is_a_noop() {
    let mut state = RosterState::default();
    for _ in 0..11 {
        state = add(state);
    }
    assert_eq!(state.players.len(), MAX_PLAYERS);
    assert_eq!(state.players.last().unwrap().name, "Player 10");
}

// -- field updates ------------------------------------------------------------

#[test]
fn scores_step_unbounded_below_zero() {
    let state = add(RosterState::default());
    let id = state.players[0].id;
    let state = bump_score(state, id, -3);
    assert_eq!(state.players[0].score, -3);
}

#[test]
fn unknown_id_updates_are_noops() {
    let before = add(RosterState::default());
    let after = RosterReducer::reduce(
        before.clone(),
        RosterIntent::AdjustScore {
            id: Uuid::new_v4(),
            delta: 1,
        },
    );
    assert_eq!(after, before);
}

#[test]
fn rename_replaces_the_text() {
    let state = add(RosterState::default());
    let id = state.players[0].id;
    let state = RosterReducer::reduce(
        state,
        RosterIntent::Rename {
            id,
            name: "The Reaper".to_string(),
        },
    );
    assert_eq!(state.players[0].name, "The Reaper");
}

#[test]
fn set_avatar_stores_an_external_reference() {
    let state = add(RosterState::default());
    let id = state.players[0].id;
    let state = RosterReducer::reduce(
        state,
        RosterIntent::SetAvatar {
            id,
            avatar: "file:///tmp/upload-20260807.png".to_string(),
        },
    );
    assert_eq!(state.players[0].avatar, "file:///tmp/upload-20260807.png");
}

// -- display-order snapshot ---------------------------------------------------

#[test]
fn snapshot_orders_by_score_descending() {
    let state = add(add(RosterState::default()));
    let a = state.players[0].id;
    let b = state.players[1].id;
    let state = bump_score(state, a, 5);
    let state = bump_score(state, b, 10);
    let state = RosterReducer::reduce(state, RosterIntent::SnapshotOrder);
    assert_eq!(display_names(&state), ["Player 2", "Player 1"]);

    // Flip the scores back: the snapshot does not move.
    let state = bump_score(state, a, 20);
    assert_eq!(display_names(&state), ["Player 2", "Player 1"]);
}

#[test]
fn late_joiners_append_after_the_snapshot() {
    let state = add(add(RosterState::default()));
    let a = state.players[0].id;
    let b = state.players[1].id;
    let state = bump_score(state, a, 10);
    let state = bump_score(state, b, 5);
    let state = RosterReducer::reduce(state, RosterIntent::SnapshotOrder);

    // A higher-scoring newcomer still lands at the end.
    let state = add(state);
    let c = state.players[2].id;
    let state = bump_score(state, c, 20);
    assert_eq!(
        display_names(&state),
        ["Player 1", "Player 2", "Player 3"]
    );
}

#[test]
fn snapshot_ties_keep_first_sight_order() {
    let state = add(add(RosterState::default()));
    let state = RosterReducer::reduce(state, RosterIntent::SnapshotOrder);
    assert_eq!(display_names(&state), ["Player 1", "Player 2"]);
}

// -- reset --------------------------------------------------------------------

#[test]
fn reset_clears_players_and_order() {
    let state = add(add(RosterState::default()));
    let state = RosterReducer::reduce(state, RosterIntent::SnapshotOrder);
    let state = RosterReducer::reduce(state, RosterIntent::Reset);
    assert!(state.players.is_empty());
    assert!(state.display_order.is_empty());
}
