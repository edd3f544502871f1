//! Map + player owned together and advanced once per frame.
use log::debug;

use crate::core::grid::TileGrid;
use crate::core::player::{PlayerState, PlayerTuning};
use crate::core::process_events::InputIntents;
use crate::core::tile::TileType;

/// How far ahead of the player (in tiles, truncated) the interaction reaches.
const REACH: f32 = 1.5;

pub struct World {
    pub grid: TileGrid,
    pub player: PlayerState,
}

impl World {
    pub fn new(grid: TileGrid, tuning: PlayerTuning) -> Self {
        let player = PlayerState::spawn(&grid, tuning);
        Self { grid, player }
    }

    /// Advances the player and handles the interaction key.
    pub fn tick(&mut self, intents: &InputIntents, dt: f32) {
        self.player.update(&self.grid, intents, dt);
        if intents.interact {
            self.interact();
        }
    }

    #[inline]
    pub fn tile(&self, x: i32, y: i32) -> TileType {
        self.grid.get(x, y)
    }

    /// Wall becomes Door and Door becomes Wall. Any other tile, or a cell
    /// outside the grid, is left alone and `false` is returned.
    pub fn toggle_tile(&mut self, gx: i32, gy: i32) -> bool {
        if !self.grid.in_bounds(gx, gy) {
            return false;
        }
        let next = match self.grid.get(gx, gy) {
            TileType::Wall => TileType::Door,
            TileType::Door => TileType::Wall,
            _ => return false,
        };
        debug!("toggle tile ({gx}, {gy}) -> {next:?}");
        self.grid.set(gx, gy, next)
    }

    /// Cell the interaction key acts on.
    pub fn facing_cell(&self) -> (i32, i32) {
        let (px, py) = self.player.cell();
        (
            px + (self.player.direction.x * REACH) as i32,
            py + (self.player.direction.y * REACH) as i32,
        )
    }

    pub fn interact(&mut self) -> bool {
        let (fx, fy) = self.facing_cell();
        self.toggle_tile(fx, fy)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(TileGrid::reference(), PlayerTuning::default())
    }
}
