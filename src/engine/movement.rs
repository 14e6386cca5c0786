use std::collections::BTreeSet;

use crate::engine::conditions::carries_all;
use crate::engine::output::Output;
use crate::engine::render::render_room;
use crate::world;

/// Single-letter shorthands for the usual compass and vertical moves.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("n", "north"),
    ("s", "south"),
    ("e", "east"),
    ("w", "west"),
    ("u", "up"),
    ("d", "down"),
];

const DIRECTIONS: &[&str] = &["north", "south", "east", "west", "up", "down"];

/// Work out which direction `token` names, if any.
///
/// An exit of the current room typed verbatim wins (exact spelling first,
/// then ignoring case; runs of whitespace count as one space), then the
/// standard directions and their one-letter abbreviations. Standard
/// directions resolve even when the room has no such exit, so the caller can
/// refuse the move.
pub fn resolve_direction(room: &world::Room, token: &str) -> Option<String> {
    let phrase = token.split_whitespace().collect::<Vec<&str>>().join(" ");
    if phrase.is_empty() {
        return None;
    }

    if let Some(exit) = room
        .exits
        .iter()
        .find(|e| e.direction == phrase)
        .or_else(|| {
            room.exits
                .iter()
                .find(|e| e.direction.eq_ignore_ascii_case(&phrase))
        })
    {
        return Some(exit.direction.clone());
    }

    let token = phrase.to_lowercase();

    if DIRECTIONS.contains(&token.as_str()) {
        return Some(token);
    }

    ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| *abbr == token)
        .map(|(_, dir)| dir.to_string())
}

/// Move through the exit named `direction`. Returns true if the player
/// changed rooms; refusals leave `current_room_id` alone.
pub fn try_move(
    out: &mut Output,
    current_room_id: &mut String,
    world: &world::World,
    inventory: &BTreeSet<String>,
    direction: &str,
) -> bool {
    let room = match world.room(current_room_id) {
        Some(r) => r,
        None => {
            out.say(format!(
                "Error: you are in an unknown room '{}'",
                current_room_id
            ));
            return false;
        }
    };

    let exit = match room.exit(direction) {
        Some(e) => e,
        None => {
            out.say("You can't go that way!");
            return false;
        }
    };

    let target = match world.room(&exit.target) {
        Some(t) => t,
        None => {
            out.say(format!(
                "You try to go {}, but something feels wrong (room not found).",
                exit.direction
            ));
            return false;
        }
    };

    if !carries_all(&target.entry_requires, inventory) {
        log::debug!("entry to '{}' refused: locked", target.id);
        out.say(target.locked_message());
        return false;
    }

    log::debug!("moving {} from '{}' to '{}'", direction, room.id, target.id);
    *current_room_id = target.id.clone();
    render_room(out, target, inventory);
    true
}
