//! DDA raycaster: one ray per screen column against the tile grid.
use raylib::prelude::{Color, Vector2};

use crate::core::grid::TileGrid;
use crate::core::player::CameraPose;
use crate::core::tile::{TILE_SIZE, TileType};
use crate::render::palette::wall_color;

/// Ray components smaller than this never drive a step.
const DIR_EPSILON: f32 = 1e-4;
const FAR: f32 = 1e30;
/// Floor for the perpendicular distance. A camera sitting exactly on the
/// grid line of an adjacent wall would otherwise measure `-0.0`.
const MIN_DISTANCE: f32 = 1e-4;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HitSide {
    /// Crossed a vertical grid line (stepped along x).
    X,
    /// Crossed a horizontal grid line (stepped along y).
    Y,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    pub cell: (i32, i32),
    pub tile: TileType,
    pub side: HitSide,
    /// Distance along the camera's forward axis, in tiles. Always positive.
    pub perp_distance: f32,
    /// Cells stepped through before the hit.
    pub steps: u32,
}

impl RayHit {
    #[inline]
    pub fn world_distance(&self) -> f32 {
        self.perp_distance * TILE_SIZE
    }
}

/// In-flight DDA state for a single ray.
struct Ray {
    dir: Vector2,
    /// Grid-space origin.
    origin: (f32, f32),
    cell: (i32, i32),
    step: (i32, i32),
    delta_dist: (f32, f32),
    side_dist: (f32, f32),
}

#[inline]
fn delta(component: f32) -> f32 {
    if component.abs() < DIR_EPSILON { FAR } else { (1.0 / component).abs() }
}

impl Ray {
    fn new(position: Vector2, dir: Vector2) -> Self {
        let ox = position.x / TILE_SIZE;
        let oy = position.y / TILE_SIZE;
        let cell = (ox.floor() as i32, oy.floor() as i32);
        let delta_dist = (delta(dir.x), delta(dir.y));

        let (step_x, side_x) = if dir.x < 0.0 {
            (-1, (ox - cell.0 as f32) * delta_dist.0)
        } else {
            (1, (cell.0 as f32 + 1.0 - ox) * delta_dist.0)
        };
        let (step_y, side_y) = if dir.y < 0.0 {
            (-1, (oy - cell.1 as f32) * delta_dist.1)
        } else {
            (1, (cell.1 as f32 + 1.0 - oy) * delta_dist.1)
        };

        Self {
            dir,
            origin: (ox, oy),
            cell,
            step: (step_x, step_y),
            delta_dist,
            side_dist: (side_x, side_y),
        }
    }

    /// Advances one cell along whichever axis reaches its boundary first.
    #[inline]
    fn advance(&mut self) -> HitSide {
        if self.side_dist.0 < self.side_dist.1 {
            self.side_dist.0 += self.delta_dist.0;
            self.cell.0 += self.step.0;
            HitSide::X
        } else {
            self.side_dist.1 += self.delta_dist.1;
            self.cell.1 += self.step.1;
            HitSide::Y
        }
    }

    fn perp_distance(&self, side: HitSide) -> f32 {
        let d = match side {
            HitSide::X => {
                (self.cell.0 as f32 - self.origin.0 + (1 - self.step.0) as f32 / 2.0) / self.dir.x
            }
            HitSide::Y => {
                (self.cell.1 as f32 - self.origin.1 + (1 - self.step.1) as f32 / 2.0) / self.dir.y
            }
        };
        d.abs().max(MIN_DISTANCE)
    }
}

/// Walks the grid from `pose.position` along `dir` until a non-empty tile.
///
/// Cells are read through [`TileGrid::get`], so leaving the grid counts as
/// hitting a wall and the walk is bounded by the grid size even when the
/// map has no closed border.
pub fn cast_ray(grid: &TileGrid, pose: &CameraPose, dir: Vector2) -> RayHit {
    let mut ray = Ray::new(pose.position, dir);
    let mut steps = 0u32;
    loop {
        let side = ray.advance();
        steps += 1;
        let tile = grid.get(ray.cell.0, ray.cell.1);
        if tile.is_opaque() {
            return RayHit {
                cell: ray.cell,
                tile,
                side,
                perp_distance: ray.perp_distance(side),
                steps,
            };
        }
    }
}

/// Camera-space x in `[-1, 1)` for a column.
#[inline]
pub fn camera_x(column: i32, columns: i32) -> f32 {
    2.0 * column as f32 / columns as f32 - 1.0
}

pub fn column_ray_dir(pose: &CameraPose, column: i32, columns: i32) -> Vector2 {
    let cx = camera_x(column, columns);
    Vector2::new(
        pose.direction.x + pose.plane.x * cx,
        pose.direction.y + pose.plane.y * cx,
    )
}

pub fn cast_column(grid: &TileGrid, pose: &CameraPose, column: i32, columns: i32) -> RayHit {
    cast_ray(grid, pose, column_ray_dir(pose, column, columns))
}

/// Visibility profile for a screen `columns` wide.
pub fn cast_columns(grid: &TileGrid, pose: &CameraPose, columns: i32) -> Vec<RayHit> {
    (0..columns.max(0))
        .map(|i| cast_column(grid, pose, i, columns))
        .collect()
}

/// Vertical span of one wall column on screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WallSlice {
    pub column: i32,
    /// Unclipped projected height in pixels.
    pub line_height: i32,
    pub top: i32,
    /// Inclusive.
    pub bottom: i32,
    pub color: Color,
}

/// Projects a hit onto the screen: height is `screen_height / distance`,
/// centred on the horizon and clipped to the screen.
pub fn project_slice(hit: &RayHit, column: i32, screen_height: i32) -> WallSlice {
    let last = (screen_height - 1).max(0);
    let line_height = (screen_height as f32 / hit.perp_distance) as i32;
    let half = screen_height / 2;
    let top = half.saturating_sub(line_height / 2).clamp(0, last);
    let bottom = half.saturating_add(line_height / 2).clamp(top, last);
    WallSlice {
        column,
        line_height,
        top,
        bottom,
        color: wall_color(hit.tile, hit.side),
    }
}
