use std::collections::BTreeSet;

use crate::engine::output::Output;
use crate::world;

pub fn handle_inventory(out: &mut Output, inventory: &BTreeSet<String>) {
    if inventory.is_empty() {
        out.say("You are carrying nothing.");
        return;
    }

    out.say("You are carrying:");
    for item in inventory {
        out.say(format!("  {}", item));
    }
}

/// Pick up whatever the room holds. Returns true if something was taken.
pub fn handle_take(
    out: &mut Output,
    room: &mut world::Room,
    inventory: &mut BTreeSet<String>,
) -> bool {
    match room.item.take() {
        Some(item) => {
            log::debug!("took '{}' from '{}'", item, room.id);
            out.say(format!("You picked up: {}", item));
            inventory.insert(item);
            true
        }
        None => {
            out.say("There's nothing to take here.");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::World;

    #[test]
    fn take_moves_item_into_inventory_once() {
        let mut world = World::haunted_house();
        let kitchen = world.room_mut("kitchen").unwrap();
        let mut inventory = BTreeSet::new();

        let mut out = Output::new();
        assert!(handle_take(&mut out, kitchen, &mut inventory));
        assert_eq!(out.to_text(), "You picked up: key");
        assert!(kitchen.item.is_none());

        let mut out = Output::new();
        assert!(!handle_take(&mut out, kitchen, &mut inventory));
        assert_eq!(out.to_text(), "There's nothing to take here.");
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn lists_inventory() {
        let mut out = Output::new();
        handle_inventory(&mut out, &BTreeSet::new());
        assert_eq!(out.to_text(), "You are carrying nothing.");

        let mut out = Output::new();
        let inventory: BTreeSet<String> = ["sword".to_string(), "key".to_string()].into();
        handle_inventory(&mut out, &inventory);
        assert_eq!(out.to_text(), "You are carrying:\n  key\n  sword");
    }
}
