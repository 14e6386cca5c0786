use haunted_house::GameState;
use haunted_house::world::World;

/// Stand in the mystery room holding only the key.
fn at_the_ghost() -> GameState {
    let mut state = GameState::new(World::haunted_house());
    state.go("east");
    state.take_item();
    state.go("west");
    state.go("north");
    state.go("east");
    assert_eq!(state.current_room_id, "mysteryRoom");
    state
}

#[test]
fn no_monster_no_fight() {
    let mut state = GameState::new(World::haunted_house());
    assert_eq!(state.fight().to_text(), "There is no monster here to fight.");
}

#[test]
fn unarmed_player_cannot_win_but_may_retry() {
    let mut state = at_the_ghost();

    for _ in 0..2 {
        assert_eq!(
            state.fight().to_text(),
            "You have no weapon or spell to fight the Ghost!"
        );
        assert!(state.current_room().unwrap().monster.is_some());
    }

    // fetch the sword and come back
    state.inventory.insert("sword".to_string());
    assert_eq!(
        state.fight().to_text(),
        "You defeated the Ghost with your weapon!"
    );
    assert_eq!(state.fight().to_text(), "There is no monster here to fight.");
}

#[test]
fn spell_works_as_well_as_sword() {
    let mut state = at_the_ghost();
    state.inventory.insert("spell".to_string());
    assert!(state.fight().contains("You defeated the Ghost"));
    assert!(!state.describe_current().contains("Beware!"));
}
