use std::path::Path;

use haunted_house::world::World;
use haunted_house::{GameState, WorldError, load_world_from_file, load_world_from_str};

#[test]
fn shipped_world_matches_built_in_house() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("public/haunted_house.toml");
    let loaded = load_world_from_file(&path).unwrap();
    assert_eq!(loaded, World::haunted_house());
}

#[test]
fn custom_world_plays_through_the_same_engine() {
    let src = r#"
[world]
id = "shed"
name = "Garden Shed"
start_room = "garden"

[[room]]
id = "garden"
name = "Garden"
desc = "Overgrown."
item = "torch"

[[room.exit]]
direction = "in"
target = "shed"

[[room]]
id = "shed"
name = "Shed"
desc = "Dark."
entry_requires = ["torch"]
locked_text = "It is too dark to go in."

[[room.exit]]
direction = "out"
target = "garden"
"#;
    let mut state = GameState::new(load_world_from_str(src).unwrap());

    let (out, _) = state.step("in");
    assert_eq!(out.to_text(), "It is too dark to go in.");
    state.step("take");
    state.step("in");
    assert_eq!(state.current_room_id, "shed");
    state.step("out");
    assert_eq!(state.current_room_id, "garden");
}

#[test]
fn dangling_exit_is_rejected() {
    let src = r#"
[world]
id = "w"
name = "W"
start_room = "a"

[[room]]
id = "a"
name = "A"

[[room.exit]]
direction = "north"
target = "b"
"#;
    match load_world_from_str(src) {
        Err(WorldError::Validation(errors)) => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].message.contains("targets missing room 'b'"));
        }
        other => panic!("expected validation failure, got {:?}", other.map(|w| w.id)),
    }
}
