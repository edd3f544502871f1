//! Column renderer: ceiling and floor halves, then one vertical line per
//! screen column from the DDA profile.
use crate::core::grid::TileGrid;
use crate::core::player::CameraPose;
use crate::render::backend::{Canvas, RenderBackend, Viewport};
use crate::render::casters::{cast_column, project_slice};
use crate::render::palette;
use crate::render::scene::{RenderMode, SceneStrategy};

/// Draws the analytic view onto any canvas.
pub fn render_columns<C: Canvas + ?Sized>(
    canvas: &mut C,
    grid: &TileGrid,
    pose: &CameraPose,
    viewport: Viewport,
) {
    let (w, h) = (viewport.width, viewport.height);
    if w <= 0 || h <= 0 {
        return;
    }
    let horizon = h / 2;
    canvas.fill_rect(0, 0, w, horizon, palette::CEILING);
    canvas.fill_rect(0, horizon, w, h - horizon, palette::FLOOR);

    for x in 0..w {
        let hit = cast_column(grid, pose, x, w);
        let slice = project_slice(&hit, x, h);
        canvas.line(x, slice.top, x, slice.bottom, slice.color);
    }
}

#[derive(Default)]
pub struct AnalyticStrategy;

impl SceneStrategy for AnalyticStrategy {
    fn mode(&self) -> RenderMode {
        RenderMode::Analytic
    }

    fn is_available(&self) -> bool {
        true
    }

    fn draw(
        &mut self,
        backend: &mut dyn RenderBackend,
        grid: &TileGrid,
        pose: &CameraPose,
        viewport: Viewport,
    ) {
        render_columns(backend, grid, pose, viewport);
    }
}
