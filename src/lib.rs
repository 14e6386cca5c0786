pub mod engine;
pub mod save;
pub mod world;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use engine::{
    Output, handle_fight, handle_inventory, handle_take, render_room, resolve_direction, try_move,
};
use save::{SaveError, SavedGame, load_game, save_game};
use world::{Room, World};

pub use world::{WorldError, load_world_from_file, load_world_from_str};

const HELP_TEXT: &str = "Commands: look (l), north/south/east/west/up/down (n/s/e/w/u/d), \
go <direction>, take, fight, inventory (i), save, load, help, quit";

/// One play session: the world, where the player stands and what they carry.
pub struct GameState {
    pub world: World,
    pub current_room_id: String,
    pub inventory: BTreeSet<String>,
    pub save_path: PathBuf,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        quit: bool,
    }

    fn to_js(out: Output, quit: bool) -> JsValue {
        to_value(&WasmStepResult {
            blocks: out.blocks,
            quit,
        })
        .unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        state: GameState,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Start a game in the built-in Haunted House.
        #[wasm_bindgen(constructor)]
        pub fn new() -> WasmGame {
            WasmGame {
                state: GameState::new(World::haunted_house()),
            }
        }

        /// Start a game from a TOML world string.
        #[wasm_bindgen(js_name = fromToml)]
        pub fn from_toml(world_toml: &str) -> Result<WasmGame, JsValue> {
            let world =
                load_world_from_str(world_toml).map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame {
                state: GameState::new(world),
            })
        }

        /// Initial render of the starting room.
        #[wasm_bindgen]
        pub fn init(&self) -> JsValue {
            to_js(self.state.describe_current(), false)
        }

        /// Process a player command and return the resulting output blocks and quit flag.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            let (out, quit) = self.state.step(input);
            to_js(out, quit)
        }

        /// The session as save-file JSON, for browser storage.
        #[wasm_bindgen(js_name = snapshotJson)]
        pub fn snapshot_json(&self) -> Result<String, JsValue> {
            self.state
                .snapshot()
                .to_json()
                .map_err(|e| JsValue::from_str(&e.to_string()))
        }

        /// Restore from `snapshotJson` output and render the restored room.
        #[wasm_bindgen(js_name = restoreJson)]
        pub fn restore_json(&mut self, json: &str) -> Result<JsValue, JsValue> {
            let saved = SavedGame::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
            self.state
                .restore(saved)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(to_js(self.state.describe_current(), false))
        }
    }
}

impl GameState {
    pub fn new(world: World) -> Self {
        let current_room_id = world.start_room.clone();
        GameState {
            world,
            current_room_id,
            inventory: BTreeSet::new(),
            save_path: PathBuf::from(save::DEFAULT_SAVE_FILE),
        }
    }

    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.world.room(&self.current_room_id)
    }

    /// Room text, exits, item, monster and inventory. Changes nothing.
    pub fn describe_current(&self) -> Output {
        let mut out = Output::new();
        match self.current_room() {
            Some(room) => render_room(&mut out, room, &self.inventory),
            None => out.say(self.unknown_room_message()),
        }
        out
    }

    /// Walk through the exit named `direction`.
    pub fn go(&mut self, direction: &str) -> Output {
        let mut out = Output::new();
        try_move(
            &mut out,
            &mut self.current_room_id,
            &self.world,
            &self.inventory,
            direction,
        );
        out
    }

    pub fn take_item(&mut self) -> Output {
        let mut out = Output::new();
        match self.world.rooms.get_mut(&self.current_room_id) {
            Some(room) => {
                handle_take(&mut out, room, &mut self.inventory);
            }
            None => out.say(self.unknown_room_message()),
        }
        out
    }

    pub fn fight(&mut self) -> Output {
        let mut out = Output::new();
        match self.world.rooms.get_mut(&self.current_room_id) {
            Some(room) => {
                handle_fight(&mut out, room, &self.inventory);
            }
            None => out.say(self.unknown_room_message()),
        }
        out
    }

    pub fn inventory(&self) -> Output {
        let mut out = Output::new();
        handle_inventory(&mut out, &self.inventory);
        out
    }

    pub fn snapshot(&self) -> SavedGame {
        SavedGame::new(self.current_room_id.clone(), self.inventory.clone())
    }

    /// Apply a saved game. Room and inventory are replaced together, or not
    /// at all if the saved room is not part of this world.
    pub fn restore(&mut self, saved: SavedGame) -> Result<(), SaveError> {
        saved.validate()?;
        if !self.world.rooms.contains_key(&saved.room) {
            return Err(SaveError::UnknownRoom(saved.room));
        }
        self.current_room_id = saved.room;
        self.inventory = saved.inventory;
        Ok(())
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        save_game(&self.snapshot(), path)
    }

    pub fn load_from(&mut self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let saved = load_game(path)?;
        self.restore(saved)
    }

    /// Save to `save_path` and report the outcome.
    pub fn save(&self) -> Output {
        let mut out = Output::new();
        match self.save_to(&self.save_path) {
            Ok(()) => {
                log::info!("saved game to {}", self.save_path.display());
                out.event("Game saved.");
            }
            Err(e) => {
                log::warn!("saving to {} failed: {e}", self.save_path.display());
                out.event(format!("Error saving game: {e}"));
            }
        }
        out
    }

    /// Load from `save_path`, then show where the player now stands.
    pub fn load(&mut self) -> Output {
        let mut out = Output::new();
        let path = self.save_path.clone();
        match self.load_from(&path) {
            Ok(()) => {
                log::info!(
                    "loaded game from {} (room '{}')",
                    path.display(),
                    self.current_room_id
                );
                out.extend(self.describe_current());
                out.event("Game loaded.");
            }
            Err(e) => {
                log::warn!("loading from {} failed: {e}", path.display());
                out.event(format!("Error loading game: {e}"));
            }
        }
        out
    }

    /// Process a single player input; returns (output, quit?)
    pub fn step(&mut self, input: &str) -> (Output, bool) {
        let lower = input.trim().to_lowercase();
        let mut parts = lower.split_whitespace();
        let verb = match parts.next() {
            Some(v) => v,
            None => return (Output::new(), false),
        };
        let rest = parts.collect::<Vec<&str>>().join(" ");

        let out = match verb {
            "quit" | "exit" => {
                let mut out = Output::new();
                out.say("Goodbye.");
                return (out, true);
            }
            "look" | "l" => self.describe_current(),
            "inventory" | "inv" | "i" => self.inventory(),
            "take" | "get" => self.take_item(),
            "fight" | "attack" | "kill" => self.fight(),
            "save" => self.save(),
            "load" | "restore" => self.load(),
            "help" | "?" => {
                let mut out = Output::new();
                out.say(HELP_TEXT);
                out
            }
            "go" | "walk" if rest.is_empty() => {
                let mut out = Output::new();
                out.say("Go where?");
                out
            }
            "go" | "walk" => self.go_by_word(&rest),
            // a bare direction, which may be several words ("through door")
            _ if self.names_exit_or_direction(&lower) => self.go_by_word(&lower),
            _ => {
                let mut out = Output::new();
                out.say("I don't understand that command.");
                out
            }
        };

        (out, false)
    }

    fn names_exit_or_direction(&self, phrase: &str) -> bool {
        self.current_room()
            .and_then(|room| resolve_direction(room, phrase))
            .is_some()
    }

    fn go_by_word(&mut self, word: &str) -> Output {
        match self
            .current_room()
            .and_then(|room| resolve_direction(room, word))
        {
            Some(direction) => self.go(&direction),
            None => {
                let mut out = Output::new();
                out.say("You can't go that way!");
                out
            }
        }
    }

    fn unknown_room_message(&self) -> String {
        format!("Error: you are in an unknown room '{}'", self.current_room_id)
    }
}
