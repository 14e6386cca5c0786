mod builder;
mod loader;
mod model;
mod validator;

pub use loader::{WorldError, load_world_from_file, load_world_from_str};

// Types the engine and front ends touch; config structs stay private to the loader.
pub use model::{Exit, Monster, Room, World};
pub use validator::{ValidationError, validate_world};
