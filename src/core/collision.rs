//! Radius-sampling collision probe.
use crate::core::grid::TileGrid;

/// Diagonal samples sit at ~radius/sqrt(2).
const DIAGONAL: f32 = 0.7;

/// Whether a circle of `radius` centred at `(x, y)` touches a blocking tile.
///
/// Samples the centre, four cardinal points at `radius` and four diagonal
/// points at `0.7 * radius`. This is not a swept test: a mover travelling
/// more than `radius` per step can tunnel through a thin wall.
pub fn blocked_at(grid: &TileGrid, x: f32, y: f32, radius: f32) -> bool {
    let d = radius * DIAGONAL;
    let samples = [
        (x, y),
        (x + radius, y),
        (x - radius, y),
        (x, y + radius),
        (x, y - radius),
        (x + d, y + d),
        (x - d, y + d),
        (x + d, y - d),
        (x - d, y - d),
    ];
    samples.iter().any(|&(sx, sy)| grid.is_wall_at(sx, sy))
}
