use std::collections::BTreeSet;

use crate::engine::conditions::carries_any;
use crate::engine::output::Output;
use crate::world;

/// Fight whatever lurks in `room`. Returns true if a monster was defeated.
pub fn handle_fight(out: &mut Output, room: &mut world::Room, inventory: &BTreeSet<String>) -> bool {
    let monster = match &room.monster {
        Some(m) => m,
        None => {
            out.say("There is no monster here to fight.");
            return false;
        }
    };

    if !carries_any(&monster.weaknesses, inventory) {
        log::debug!("unarmed against '{}' in '{}'", monster.name, room.id);
        out.event(format!(
            "You have no weapon or spell to fight the {}!",
            monster.name
        ));
        return false;
    }

    log::debug!("defeated '{}' in '{}'", monster.name, room.id);
    out.event(format!("You defeated the {} with your weapon!", monster.name));
    room.monster = None;
    true
}
