use std::collections::HashMap;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Runtime world type used by the game loop.
///
/// Rooms live in a single arena keyed by id; exits refer to their targets by
/// id, so the (cyclic) room graph never owns itself.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub start_room: String,
    pub rooms: HashMap<String, Room>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub exits: Vec<Exit>,       // insertion order is display order
    pub item: Option<String>,
    pub monster: Option<Monster>,
    pub entry_requires: Vec<String>, // items needed to walk in
    pub locked_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exit {
    pub direction: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Monster {
    pub name: String,
    pub desc: String,
    pub weaknesses: Vec<String>, // any one of these wins the fight
}

impl World {
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }
}

impl Room {
    pub fn new(id: impl Into<String>, name: impl Into<String>, desc: impl Into<String>) -> Self {
        Room {
            id: id.into(),
            name: name.into(),
            desc: desc.into(),
            exits: Vec::new(),
            item: None,
            monster: None,
            entry_requires: Vec::new(),
            locked_text: None,
        }
    }

    /// Add or retarget the exit for `direction`. Re-adding a direction keeps
    /// its original position.
    pub fn set_exit(&mut self, direction: impl Into<String>, target: impl Into<String>) {
        let direction = direction.into();
        let target = target.into();
        match self.exits.iter_mut().find(|e| e.direction == direction) {
            Some(exit) => exit.target = target,
            None => self.exits.push(Exit { direction, target }),
        }
    }

    pub fn exit(&self, direction: &str) -> Option<&Exit> {
        self.exits.iter().find(|e| e.direction == direction)
    }

    pub fn exit_list(&self) -> String {
        self.exits
            .iter()
            .map(|e| e.direction.as_str())
            .collect::<Vec<&str>>()
            .join(", ")
    }

    /// Text shown when the player is turned away at this room's door.
    pub fn locked_message(&self) -> String {
        match &self.locked_text {
            Some(t) if !t.trim().is_empty() => t.trim().to_string(),
            _ => format!(
                "The door is locked. You need a {}.",
                self.entry_requires.join(" and a ")
            ),
        }
    }
}

impl Monster {
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Monster {
            name: name.into(),
            desc: desc.into(),
            weaknesses: default_weaknesses(),
        }
    }
}

pub fn default_weaknesses() -> Vec<String> {
    vec!["sword".to_string(), "spell".to_string()]
}
