//! Player pose, kinematics and collision response.
use std::f32::consts::TAU;

use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

use crate::core::collision::blocked_at;
use crate::core::grid::TileGrid;
use crate::core::process_events::InputIntents;
use crate::core::tile::TILE_SIZE;

const SPAWN_ATTEMPTS: usize = 100;

/// Movement constants. Speeds are in tiles per second, the radius in tiles.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub move_speed: f32,
    pub rotate_speed: f32,
    pub collision_radius: f32,
    pub sprint_multiplier: f32,
    /// Camera-plane length; 0.66 gives a ~66 degree horizontal FOV.
    pub fov_plane: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            move_speed: 3.0,
            rotate_speed: 2.0,
            collision_radius: 0.2,
            sprint_multiplier: 1.7,
            fov_plane: 0.66,
        }
    }
}

/// Camera input shared by every scene strategy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraPose {
    /// World units.
    pub position: Vector2,
    pub direction: Vector2,
    pub plane: Vector2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerState {
    pub position: Vector2,
    pub angle: f32,
    pub direction: Vector2,
    pub plane: Vector2,
    pub move_speed: f32,
    pub rotate_speed: f32,
    /// World units.
    pub collision_radius: f32,
    pub sprint_multiplier: f32,
}

#[inline]
fn rotated(v: Vector2, cos: f32, sin: f32) -> Vector2 {
    Vector2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

impl PlayerState {
    /// Player at `position` (world units) facing +x.
    pub fn new(position: Vector2, tuning: PlayerTuning) -> Self {
        Self {
            position,
            angle: 0.0,
            direction: Vector2::new(1.0, 0.0),
            plane: Vector2::new(0.0, tuning.fov_plane),
            move_speed: tuning.move_speed,
            rotate_speed: tuning.rotate_speed,
            collision_radius: tuning.collision_radius * TILE_SIZE,
            sprint_multiplier: tuning.sprint_multiplier,
        }
    }

    /// Player at the default spawn (2.5, 2.5 tiles). If that lands in a wall,
    /// probe forward along +x, falling back to +y, up to 100 times.
    pub fn spawn(grid: &TileGrid, tuning: PlayerTuning) -> Self {
        let mut player = Self::new(Vector2::new(2.5 * TILE_SIZE, 2.5 * TILE_SIZE), tuning);
        let mut attempts = 0;
        while grid.is_wall_at(player.position.x, player.position.y) && attempts < SPAWN_ATTEMPTS {
            player.position.x += TILE_SIZE;
            if grid.is_wall_at(player.position.x, player.position.y) {
                player.position.x -= TILE_SIZE;
                player.position.y += TILE_SIZE;
            }
            attempts += 1;
        }
        player
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            direction: self.direction,
            plane: self.plane,
        }
    }

    /// Grid cell containing the player.
    pub fn cell(&self) -> (i32, i32) {
        crate::core::grid::world_to_cell(self.position.x, self.position.y)
    }

    /// Integrates one frame of intents.
    pub fn update(&mut self, grid: &TileGrid, intents: &InputIntents, dt: f32) {
        let boost = if intents.sprint { self.sprint_multiplier } else { 1.0 };
        let step = self.move_speed * boost * dt;
        self.move_by(grid, intents.forward * step, intents.strafe * step);
        self.rotate(intents.turn * self.rotate_speed * dt + intents.look_delta);
    }

    /// Moves `forward` tiles along the facing and `strafe` tiles to the
    /// right of it. Each axis is accepted on its own so the player slides
    /// along walls; strafe is applied after forward, from the new position.
    pub fn move_by(&mut self, grid: &TileGrid, forward: f32, strafe: f32) {
        if forward == 0.0 && strafe == 0.0 {
            return;
        }
        let r = self.collision_radius;
        let mut pos = self.position;

        if forward != 0.0 {
            let d = forward * TILE_SIZE;
            let nx = self.position.x + self.direction.x * d;
            let ny = self.position.y + self.direction.y * d;
            if !blocked_at(grid, nx, self.position.y, r) {
                pos.x = nx;
            }
            if !blocked_at(grid, self.position.x, ny, r) {
                pos.y = ny;
            }
        }

        if strafe != 0.0 {
            let d = strafe * TILE_SIZE;
            let nx = pos.x - self.direction.y * d;
            let ny = pos.y + self.direction.x * d;
            if !blocked_at(grid, nx, pos.y, r) {
                pos.x = nx;
            }
            if !blocked_at(grid, pos.x, ny, r) {
                pos.y = ny;
            }
        }

        self.position = pos;
    }

    /// Rotates direction and camera plane together. Only the direction is
    /// re-normalised; the plane's length is the field of view.
    pub fn rotate(&mut self, delta: f32) {
        if delta == 0.0 {
            return;
        }
        let (sin, cos) = delta.sin_cos();
        let dir = rotated(self.direction, cos, sin);
        let len = (dir.x * dir.x + dir.y * dir.y).sqrt();
        self.direction = Vector2::new(dir.x / len, dir.y / len);
        self.plane = rotated(self.plane, cos, sin);

        self.angle += delta;
        while self.angle < 0.0 {
            self.angle += TAU;
        }
        while self.angle >= TAU {
            self.angle -= TAU;
        }
    }
}
