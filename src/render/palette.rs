//! Tile colours and the fixed side shading.
use raylib::prelude::Color;

use crate::core::tile::TileType;
use crate::render::casters::HitSide;

pub const CEILING: Color = Color::SKYBLUE;
pub const FLOOR: Color = Color::DARKGRAY;

/// Y-side walls are drawn at this brightness.
pub const SIDE_SHADE: f32 = 0.5;

pub fn tile_color(tile: TileType) -> Color {
    match tile {
        TileType::Empty => Color::BLACK,
        TileType::Wall => Color::WHITE,
        TileType::Door => Color::RED,
        TileType::SecretWall => Color::GREEN,
        TileType::Obstacle => Color::BLUE,
    }
}

#[inline]
pub fn scale_color(c: Color, k: f32) -> Color {
    let s = k.max(0.0);
    let mul = |v: u8| -> u8 { ((v as f32 * s).min(255.0)) as u8 };
    Color::new(mul(c.r), mul(c.g), mul(c.b), c.a)
}

/// Wall colour for a ray hit, darkened on y-side faces.
pub fn wall_color(tile: TileType, side: HitSide) -> Color {
    let base = tile_color(tile);
    match side {
        HitSide::X => base,
        HitSide::Y => scale_color(base, SIDE_SHADE),
    }
}
