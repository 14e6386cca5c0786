use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use super::model::{Exit, Monster, Room, World, default_weaknesses};
use super::validator::{ValidationError, validate_world};

/// Reasons a world file can be refused.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed world file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid world: {0}")]
    Invalid(String),

    #[error("world failed validation: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<&str>>()
        .join("; ")
}

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    id: String,
    name: String,
    start_room: String,
    #[serde(default)]
    desc: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    name: String,
    #[serde(default)]
    desc: String,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]

    #[serde(default)]
    item: Option<String>,

    #[serde(default)]
    monster: Option<MonsterConfig>, // [room.monster]

    #[serde(default)]
    entry_requires: Vec<String>,

    #[serde(default)]
    locked_text: Option<String>,
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

#[derive(Deserialize)]
struct MonsterConfig {
    name: String,

    #[serde(default)]
    desc: String,

    // sword or spell if omitted
    #[serde(default = "default_weaknesses")]
    weaknesses: Vec<String>,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Public API: load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, WorldError> {
    let contents = fs::read_to_string(path)?;
    load_world_from_str(&contents)
}

/// Public API: load a world from TOML text, then validate it.
pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    // Basic validation
    if world_file.world.id.trim().is_empty() {
        return Err(WorldError::Invalid("world.id may not be empty".into()));
    }
    if world_file.world.start_room.trim().is_empty() {
        return Err(WorldError::Invalid(
            "world.start_room may not be empty".into(),
        ));
    }

    // Build rooms map
    let mut rooms_map: HashMap<String, Room> = HashMap::new();

    for room_cfg in world_file.room {
        if room_cfg.id.trim().is_empty() {
            return Err(WorldError::Invalid(format!(
                "room '{}' has an empty id",
                room_cfg.name
            )));
        }
        if rooms_map.contains_key(&room_cfg.id) {
            return Err(WorldError::Invalid(format!(
                "Duplicate room id: {}",
                room_cfg.id
            )));
        }

        let exits = room_cfg
            .exit
            .into_iter()
            .map(|e| Exit {
                direction: e
                    .direction
                    .split_whitespace()
                    .collect::<Vec<&str>>()
                    .join(" "),
                target: e.target.trim().to_string(),
            })
            .collect();

        let monster = room_cfg.monster.map(|m| Monster {
            name: m.name.trim().to_string(),
            desc: normalize_multiline_desc(&m.desc),
            weaknesses: m.weaknesses,
        });

        // An empty item string means "no item"
        let item = room_cfg
            .item
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty());

        rooms_map.insert(
            room_cfg.id.clone(),
            Room {
                id: room_cfg.id,
                name: room_cfg.name,
                desc: normalize_multiline_desc(&room_cfg.desc),
                exits,
                item,
                monster,
                entry_requires: room_cfg.entry_requires,
                locked_text: room_cfg.locked_text.map(|s| normalize_multiline_desc(&s)),
            },
        );
    }

    let world = World {
        id: world_file.world.id,
        name: world_file.world.name,
        desc: normalize_multiline_desc(&world_file.world.desc),
        start_room: world_file.world.start_room,
        rooms: rooms_map,
    };

    let errors = validate_world(&world);
    if !errors.is_empty() {
        return Err(WorldError::Validation(errors));
    }

    log::debug!(
        "loaded world '{}' with {} rooms",
        world.id,
        world.rooms.len()
    );

    Ok(world)
}

/// Fold TOML multi-line strings into display text:
/// one line break becomes a space, one blank line a newline,
/// two or more blank lines a paragraph break.
fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;
    let mut first_text_seen = false;

    for line in raw.lines() {
        // Indentation in the TOML never reaches the player.
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !first_text_seen {
            result.push_str(trimmed);
            first_text_seen = true;
        } else {
            match pending_blank_lines {
                0 => {
                    result.push(' ');
                    result.push_str(trimmed);
                }
                1 => {
                    result.push('\n');
                    result.push_str(trimmed);
                }
                _ => {
                    result.push_str("\n\n");
                    result.push_str(trimmed);
                }
            }
        }

        pending_blank_lines = 0;
    }

    result
}
