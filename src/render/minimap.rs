//! Top-down overlay in the top-right corner.
use raylib::prelude::Color;

use crate::core::grid::TileGrid;
use crate::core::player::PlayerState;
use crate::core::tile::TILE_SIZE;
use crate::render::backend::{Canvas, Viewport};
use crate::render::palette::tile_color;

pub const MINIMAP_SIZE: i32 = 150;
pub const MARGIN: i32 = 10;
/// Black at 70% opacity.
const BACKDROP: Color = Color::new(0, 0, 0, 178);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MinimapLayout {
    pub origin_x: i32,
    pub origin_y: i32,
    /// Pixels per tile, from the grid width.
    pub cell: f32,
}

impl MinimapLayout {
    pub fn new(grid: &TileGrid, viewport: Viewport) -> Self {
        Self {
            origin_x: viewport.width - MINIMAP_SIZE - MARGIN,
            origin_y: MARGIN,
            cell: MINIMAP_SIZE as f32 / grid.width().max(1) as f32,
        }
    }

    /// Screen position of a world-space point.
    pub fn project(&self, wx: f32, wy: f32) -> (f32, f32) {
        (
            self.origin_x as f32 + wx / TILE_SIZE * self.cell,
            self.origin_y as f32 + wy / TILE_SIZE * self.cell,
        )
    }
}

/// Draws the grid, the player and its facing. Reads the grid fresh each
/// call, so toggled tiles show up on the next frame.
pub fn draw_minimap<C: Canvas + ?Sized>(
    canvas: &mut C,
    grid: &TileGrid,
    player: &PlayerState,
    viewport: Viewport,
) {
    let layout = MinimapLayout::new(grid, viewport);
    let size_y = (grid.height() as f32 * layout.cell) as i32;

    canvas.fill_rect(
        layout.origin_x,
        layout.origin_y,
        MINIMAP_SIZE,
        size_y,
        BACKDROP,
    );

    let side = layout.cell.ceil() as i32;
    // every cell is painted, Empty ones opaque black over the backdrop
    for (x, y, tile) in grid.cells() {
        canvas.fill_rect(
            layout.origin_x + (x as f32 * layout.cell) as i32,
            layout.origin_y + (y as f32 * layout.cell) as i32,
            side,
            side,
            tile_color(tile),
        );
    }

    let (px, py) = layout.project(player.position.x, player.position.y);
    canvas.circle(px as i32, py as i32, layout.cell * 0.5, Color::YELLOW);
    let reach = layout.cell * 2.0;
    canvas.line(
        px as i32,
        py as i32,
        (px + player.direction.x * reach) as i32,
        (py + player.direction.y * reach) as i32,
        Color::RED,
    );

    canvas.rect_lines(layout.origin_x, layout.origin_y, MINIMAP_SIZE, size_y, Color::RAYWHITE);
}
