//! Draw-call seam between the projectors and raylib.
use raylib::prelude::*;

use crate::render::mesh::{MeshFrame, ShaderPipeline};

/// Current drawable size in pixels, read from the window every frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        if self.height <= 0 { 1.0 } else { self.width as f32 / self.height as f32 }
    }
}

/// 2D primitives used by the column renderer and the minimap.
pub trait Canvas {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);
    fn rect_lines(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color);
    fn circle(&mut self, cx: i32, cy: i32, radius: f32, color: Color);
}

/// A canvas that can also run a 3D pass.
pub trait RenderBackend: Canvas {
    fn draw_mesh_frame(&mut self, frame: &MeshFrame<'_>, pipeline: &mut dyn ShaderPipeline);
}

/// Backend over a live raylib draw handle.
pub struct RaylibBackend<'a, 'b> {
    d: &'a mut RaylibDrawHandle<'b>,
}

impl<'a, 'b> RaylibBackend<'a, 'b> {
    pub fn new(d: &'a mut RaylibDrawHandle<'b>) -> Self {
        Self { d }
    }
}

impl Canvas for RaylibBackend<'_, '_> {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.d.draw_rectangle(x, y, w, h, color);
    }

    fn rect_lines(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.d.draw_rectangle_lines(x, y, w, h, color);
    }

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.d.draw_line(x0, y0, x1, y1, color);
    }

    fn circle(&mut self, cx: i32, cy: i32, radius: f32, color: Color) {
        self.d.draw_circle(cx, cy, radius, color);
    }
}

fn draw_frame_geometry<D: RaylibDraw3D>(d: &mut D, frame: &MeshFrame<'_>) {
    d.draw_plane(frame.floor.center, frame.floor.size, frame.floor.color);
    d.draw_cube(
        frame.ceiling.center,
        frame.ceiling.size.x,
        frame.ceiling_thickness,
        frame.ceiling.size.y,
        frame.ceiling.color,
    );
    for block in frame.blocks {
        d.draw_cube(block.center, 1.0, 1.0, 1.0, block.color);
    }
}

impl RenderBackend for RaylibBackend<'_, '_> {
    fn draw_mesh_frame(&mut self, frame: &MeshFrame<'_>, pipeline: &mut dyn ShaderPipeline) {
        let cam = &frame.camera;
        let camera = Camera3D::perspective(cam.eye, cam.target, cam.up, cam.fovy);
        let mut m = self.d.begin_mode3D(camera);
        match pipeline.shader_mut() {
            Some(shader) => {
                let mut s = m.begin_shader_mode(shader);
                draw_frame_geometry(&mut s, frame);
            }
            None => draw_frame_geometry(&mut m, frame),
        }
    }
}
