use std::collections::HashMap;

use super::model::{Monster, Room, World};

impl World {
    /// The Haunted House: five rooms, three items, one ghost.
    pub fn haunted_house() -> World {
        let mut foyer = Room::new(
            "foyer",
            "Foyer",
            "You are in the foyer. A grand chandelier hangs above.",
        );
        let mut kitchen = Room::new(
            "kitchen",
            "Kitchen",
            "You see a dusty kitchen with old pots and pans.",
        );
        let mut library = Room::new(
            "library",
            "Library",
            "Shelves of old books surround you. There's a strange silence.",
        );
        let mut mystery_room = Room::new(
            "mysteryRoom",
            "Mystery Room",
            "This room has an eerie feeling and a locked door with strange symbols.",
        );
        let mut basement = Room::new(
            "basement",
            "Basement",
            "A dark, damp room with chains hanging from the walls.",
        );

        foyer.set_exit("north", "library");
        foyer.set_exit("east", "kitchen");
        kitchen.set_exit("west", "foyer");
        library.set_exit("south", "foyer");
        library.set_exit("east", "mysteryRoom");
        mystery_room.set_exit("down", "basement");

        kitchen.item = Some("key".to_string());
        library.item = Some("sword".to_string());
        basement.item = Some("spell".to_string());

        mystery_room.monster = Some(Monster::new(
            "Ghost",
            "A terrifying ghost that haunts the room.",
        ));
        mystery_room.entry_requires = vec!["key".to_string()];
        mystery_room.locked_text = Some("The door is locked. You need a key.".to_string());

        let rooms: HashMap<String, Room> = [foyer, kitchen, library, mystery_room, basement]
            .into_iter()
            .map(|r| (r.id.clone(), r))
            .collect();

        World {
            id: "haunted_house".to_string(),
            name: "Haunted House Adventure".to_string(),
            desc: "Find your way through the old house, if you dare.".to_string(),
            start_room: "foyer".to_string(),
            rooms,
        }
    }
}
