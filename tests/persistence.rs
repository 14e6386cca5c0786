use std::fs;

use haunted_house::GameState;
use haunted_house::save::{SaveError, SavedGame, load_game, save_game};
use haunted_house::world::World;

fn played_game() -> GameState {
    let mut state = GameState::new(World::haunted_house());
    state.go("east");
    state.take_item();
    state.go("west");
    state.go("north");
    state.take_item();
    state
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("savegame.json");

    let state = played_game();
    state.save_to(&path).unwrap();

    let mut fresh = GameState::new(World::haunted_house());
    fresh.load_from(&path).unwrap();
    assert_eq!(fresh.current_room_id, state.current_room_id);
    assert_eq!(fresh.inventory, state.inventory);
}

#[test]
fn snapshot_restore_round_trips() {
    let state = played_game();
    let mut other = GameState::new(World::haunted_house());
    other.restore(state.snapshot()).unwrap();
    assert_eq!(other.snapshot(), state.snapshot());
}

#[test]
fn missing_save_leaves_state_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = played_game().with_save_path(dir.path().join("absent.json"));
    let before = state.snapshot();

    let out = state.load();
    assert!(out.contains("Error loading game"));
    assert_eq!(state.snapshot(), before);
}

#[test]
fn corrupt_save_leaves_state_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("savegame.json");
    fs::write(&path, "{\"version\": 1, \"room\": ").unwrap();

    let mut state = played_game();
    let before = state.snapshot();
    assert!(matches!(
        state.load_from(&path),
        Err(SaveError::Serialization(_))
    ));
    assert_eq!(state.snapshot(), before);
}

#[test]
fn unknown_room_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("savegame.json");
    let saved = SavedGame::new("attic", ["ladder".to_string()].into());
    save_game(&saved, &path).unwrap();

    let mut state = played_game();
    let before = state.snapshot();
    match state.load_from(&path) {
        Err(SaveError::UnknownRoom(room)) => assert_eq!(room, "attic"),
        other => panic!("expected unknown room, got {:?}", other),
    }
    assert_eq!(state.snapshot(), before);
    assert_eq!(load_game(&path).unwrap(), saved);
}

#[test]
fn save_and_load_report_through_output() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = played_game().with_save_path(dir.path().join("savegame.json"));

    assert_eq!(state.save().to_text(), "Game saved.");
    state.go("south");
    assert_eq!(state.current_room_id, "foyer");

    let out = state.load();
    assert_eq!(state.current_room_id, "library");
    assert!(out.contains("Library"));
    assert_eq!(out.blocks.last().unwrap().text(), "Game loaded.");
}

#[test]
fn failed_save_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let state = played_game().with_save_path(dir.path().join("missing_dir").join("s.json"));
    let before = state.snapshot();

    assert!(state.save().contains("Error saving game"));
    assert_eq!(state.snapshot(), before);
}

/// Save and reload after every step of the full walkthrough, including
/// while standing in the mystery room.
#[test]
fn every_reachable_state_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("savegame.json");

    let mut state = GameState::new(World::haunted_house());
    let walkthrough: &[&str] = &[
        "look", "e", "take", "w", "n", "take", "e", "fight", "d", "take",
    ];

    let mut visited = vec![state.current_room_id.clone()];
    for command in walkthrough {
        state.step(command);
        if visited.last() != Some(&state.current_room_id) {
            visited.push(state.current_room_id.clone());
        }

        state.save_to(&path).unwrap();
        let mut reloaded = GameState::new(World::haunted_house());
        reloaded.load_from(&path).unwrap();

        assert_eq!(reloaded.current_room_id, state.current_room_id, "after '{}'", command);
        assert_eq!(reloaded.inventory, state.inventory, "after '{}'", command);
        assert_eq!(load_game(&path).unwrap().room, state.current_room_id);
    }

    assert_eq!(
        visited,
        vec!["foyer", "kitchen", "foyer", "library", "mysteryRoom", "basement"]
    );
    assert_eq!(state.inventory.len(), 3);
}
