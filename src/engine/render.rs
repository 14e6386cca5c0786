use std::collections::BTreeSet;

use crate::engine::output::Output;
use crate::world;

pub fn render_room(out: &mut Output, room: &world::Room, inventory: &BTreeSet<String>) {
    out.title(room.name.clone());
    out.say(room.desc.trim());

    if room.exits.is_empty() {
        out.set_exits("Exits: (none)");
    } else {
        out.set_exits(format!("Exits: {}", room.exit_list()));
    }

    if let Some(item) = &room.item {
        out.say(format!("You see a {} here.", item));
    }

    if let Some(monster) = &room.monster {
        out.say(format!("Beware! {}", monster.desc.trim()));
    }

    out.say(inventory_line(inventory));
}

pub fn inventory_line(inventory: &BTreeSet<String>) -> String {
    if inventory.is_empty() {
        "Inventory: (empty)".to_string()
    } else {
        format!(
            "Inventory: {}",
            inventory
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<&str>>()
                .join(", ")
        )
    }
}
