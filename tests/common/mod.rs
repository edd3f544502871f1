#![allow(dead_code)]

use gridcaster::core::{TILE_SIZE, TileGrid, World};
use gridcaster::core::player::{CameraPose, PlayerState, PlayerTuning};
use std::cell::Cell;
use std::rc::Rc;

use gridcaster::render::mesh::{MeshFrame, ShaderParams, ShaderPipeline};
use gridcaster::render::{Canvas, RenderBackend};
use raylib::prelude::{Color, Shader, Vector2};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect { x: i32, y: i32, w: i32, h: i32, color: Color },
    RectLines { x: i32, y: i32, w: i32, h: i32, color: Color },
    Line { x0: i32, y0: i32, x1: i32, y1: i32, color: Color },
    Circle { cx: i32, cy: i32, radius: f32, color: Color },
    MeshFrame { blocks: usize, params: ShaderParams },
}

/// Backend that records draw calls instead of issuing them.
#[derive(Default)]
pub struct RecordingBackend {
    pub ops: Vec<DrawOp>,
}

impl RecordingBackend {
    pub fn lines(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Circle { .. }))
    }
}

impl Canvas for RecordingBackend {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.ops.push(DrawOp::FillRect { x, y, w, h, color });
    }

    fn rect_lines(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.ops.push(DrawOp::RectLines { x, y, w, h, color });
    }

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.ops.push(DrawOp::Line { x0, y0, x1, y1, color });
    }

    fn circle(&mut self, cx: i32, cy: i32, radius: f32, color: Color) {
        self.ops.push(DrawOp::Circle { cx, cy, radius, color });
    }
}

impl RenderBackend for RecordingBackend {
    fn draw_mesh_frame(&mut self, frame: &MeshFrame<'_>, _pipeline: &mut dyn ShaderPipeline) {
        self.ops.push(DrawOp::MeshFrame {
            blocks: frame.blocks.len(),
            params: frame.params,
        });
    }
}

/// Pipeline with no GPU shader that counts uniform pushes.
#[derive(Clone, Default)]
pub struct CountingPipeline {
    pub pushes: Rc<Cell<u32>>,
}

impl ShaderPipeline for CountingPipeline {
    fn push_uniforms(&mut self, _frame: &MeshFrame<'_>) {
        self.pushes.set(self.pushes.get() + 1);
    }

    fn shader_mut(&mut self) -> Option<&mut Shader> {
        None
    }
}

/// Pose at tile coordinates `(x, y)` looking along `dir` with a 0.66 plane.
pub fn pose_at(x: f32, y: f32, dir: (f32, f32)) -> CameraPose {
    CameraPose {
        position: Vector2::new(x * TILE_SIZE, y * TILE_SIZE),
        direction: Vector2::new(dir.0, dir.1),
        plane: Vector2::new(-dir.1 * 0.66, dir.0 * 0.66),
    }
}

pub fn player_at(x: f32, y: f32) -> PlayerState {
    PlayerState::new(Vector2::new(x * TILE_SIZE, y * TILE_SIZE), PlayerTuning::default())
}

pub fn world_with_player(grid: TileGrid, x: f32, y: f32) -> World {
    let mut world = World::new(grid, PlayerTuning::default());
    world.player = player_at(x, y);
    world
}
