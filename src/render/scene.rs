//! Picks the scene strategy each frame and overlays the minimap.
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::grid::TileGrid;
use crate::core::player::CameraPose;
use crate::core::world::World;
use crate::render::backend::{RenderBackend, Viewport};
use crate::render::mesh::MeshStrategy;
use crate::render::minimap::draw_minimap;
use crate::render::render3d::AnalyticStrategy;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    Analytic,
    Mesh,
}

impl RenderMode {
    pub fn toggled(self) -> Self {
        match self {
            RenderMode::Analytic => RenderMode::Mesh,
            RenderMode::Mesh => RenderMode::Analytic,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RenderMode::Analytic => "raycast",
            RenderMode::Mesh => "mesh",
        }
    }
}

/// One way of drawing the 3D view from a camera pose.
pub trait SceneStrategy {
    fn mode(&self) -> RenderMode;
    fn is_available(&self) -> bool;
    fn draw(
        &mut self,
        backend: &mut dyn RenderBackend,
        grid: &TileGrid,
        pose: &CameraPose,
        viewport: Viewport,
    );
}

pub struct SceneRenderer {
    requested: RenderMode,
    analytic: AnalyticStrategy,
    mesh: MeshStrategy,
    warned_fallback: bool,
}

impl SceneRenderer {
    pub fn new(requested: RenderMode, mesh: MeshStrategy) -> Self {
        Self {
            requested,
            analytic: AnalyticStrategy,
            mesh,
            warned_fallback: false,
        }
    }

    pub fn toggle_mode(&mut self) -> RenderMode {
        self.requested = self.requested.toggled();
        debug!("render mode -> {}", self.requested.label());
        self.requested
    }

    pub fn requested_mode(&self) -> RenderMode {
        self.requested
    }

    /// Mode that will actually draw: mesh only when its pipeline exists.
    pub fn active_mode(&self) -> RenderMode {
        match self.requested {
            RenderMode::Mesh if self.mesh.is_available() => RenderMode::Mesh,
            _ => RenderMode::Analytic,
        }
    }

    pub fn mesh(&self) -> &MeshStrategy {
        &self.mesh
    }

    fn strategy(&mut self) -> &mut dyn SceneStrategy {
        match self.active_mode() {
            RenderMode::Mesh => &mut self.mesh,
            RenderMode::Analytic => &mut self.analytic,
        }
    }

    /// Draws the 3D view with the active strategy, then the minimap.
    /// Returns the mode that drew.
    pub fn render_world(
        &mut self,
        backend: &mut dyn RenderBackend,
        world: &World,
        viewport: Viewport,
    ) -> RenderMode {
        let active = self.active_mode();
        if active != self.requested && !self.warned_fallback {
            warn!("mesh renderer unavailable, drawing with raycast");
            self.warned_fallback = true;
        }
        let pose = world.player.pose();
        self.strategy().draw(backend, &world.grid, &pose, viewport);
        draw_minimap(backend, &world.grid, &world.player, viewport);
        active
    }

    pub fn has_warned_fallback(&self) -> bool {
        self.warned_fallback
    }
}
