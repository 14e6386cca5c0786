mod combat;
mod conditions;
mod items;
mod movement;
mod output;
mod render;

pub use combat::handle_fight;

pub use conditions::{carries_all, carries_any};

pub use items::{handle_inventory, handle_take};

pub use movement::{resolve_direction, try_move};
pub use output::{Output, OutputBlock};
pub use render::{inventory_line, render_room};
