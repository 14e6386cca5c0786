use std::collections::HashSet;

use thiserror::Error;

use super::model::World;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Collect every structural problem in `world`. An empty list means the
/// world is playable.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Rooms must not be empty
    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    // start_room must exist
    if !world.rooms.contains_key(&world.start_room) {
        errors.push(ValidationError::new(format!(
            "start_room '{}' not found among rooms",
            world.start_room
        )));
    }

    // Items that some room hands out
    let placed_items: HashSet<&str> = world
        .rooms
        .values()
        .filter_map(|r| r.item.as_deref())
        .collect();

    // Sorted so reports are stable
    let mut room_ids: Vec<&String> = world.rooms.keys().collect();
    room_ids.sort();

    for room_id in room_ids {
        let room = &world.rooms[room_id];

        if room.id != *room_id {
            errors.push(ValidationError::new(format!(
                "room stored under '{}' carries id '{}'",
                room_id, room.id
            )));
        }

        // Validate exits; players type directions in any case
        let mut seen_dirs: HashSet<String> = HashSet::new();
        for exit in &room.exits {
            if exit.direction.trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' has an exit with an empty direction",
                    room_id
                )));
            }
            if !seen_dirs.insert(exit.direction.to_lowercase()) {
                errors.push(ValidationError::new(format!(
                    "room '{}' has more than one '{}' exit",
                    room_id, exit.direction
                )));
            }
            if !world.rooms.contains_key(&exit.target) {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room_id, exit.direction, exit.target
                )));
            }
        }

        // A lock nobody can open
        for needed in &room.entry_requires {
            if !placed_items.contains(needed.as_str()) {
                errors.push(ValidationError::new(format!(
                    "room '{}' requires item '{}' which no room holds",
                    room_id, needed
                )));
            }
        }

        if let Some(monster) = &room.monster {
            if monster.name.trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' has a monster with an empty name",
                    room_id
                )));
            }
            if !monster
                .weaknesses
                .iter()
                .any(|w| placed_items.contains(w.as_str()))
            {
                let list = monster
                    .weaknesses
                    .iter()
                    .map(|w| format!("'{}'", w))
                    .collect::<Vec<String>>()
                    .join(", ");
                errors.push(ValidationError::new(format!(
                    "monster '{}' in room '{}' can only be beaten with {} which no room holds",
                    monster.name,
                    room_id,
                    if list.is_empty() { "nothing".to_string() } else { list }
                )));
            }
        }
    }

    errors
}
