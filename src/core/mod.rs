//! Core game types and logic: grid, player, collision, input, world.
//!
//! Re-exports:
//! - `tile`: tile codes and the world/tile scale
//! - `grid`: bounds-safe tile grid
//! - `collision`: radius probe against the grid
//! - `player`: pose, kinematics and tuning
//! - `process_events`: input polling into intents
//! - `world`: per-frame tick and door interaction

pub mod tile;
pub mod grid;
pub mod collision;
pub mod player;
pub mod process_events;
pub mod world;

pub use grid::TileGrid;
pub use player::{CameraPose, PlayerState, PlayerTuning};
pub use process_events::InputIntents;
pub use tile::{TILE_SIZE, TileType};
pub use world::World;
