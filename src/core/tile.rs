//! Tile codes stored in the grid.

use serde::{Deserialize, Serialize};

/// Size of one grid cell in world units.
pub const TILE_SIZE: f32 = 64.0;

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileType {
    #[default]
    Empty = 0,
    Wall = 1,
    Door = 2,
    SecretWall = 3,
    Obstacle = 4,
}

impl TileType {
    pub const ALL: [TileType; 5] = [
        TileType::Empty,
        TileType::Wall,
        TileType::Door,
        TileType::SecretWall,
        TileType::Obstacle,
    ];

    /// Unknown codes are treated as solid wall.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => TileType::Empty,
            2 => TileType::Door,
            3 => TileType::SecretWall,
            4 => TileType::Obstacle,
            _ => TileType::Wall,
        }
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Impassable for the collision probe.
    #[inline]
    pub fn is_blocking(self) -> bool {
        matches!(self, TileType::Wall | TileType::SecretWall | TileType::Obstacle)
    }

    /// Stops a ray. Doors are passable but still drawn.
    #[inline]
    pub fn is_opaque(self) -> bool {
        self != TileType::Empty
    }
}
