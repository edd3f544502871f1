//! GPU strategy: the same camera pose reprojected through raylib's 3D
//! pipeline, with a small fog shader.
//!
//! The frame description ([`MeshFrame`]) is built on the CPU without touching
//! the GPU; only [`MeshPipeline`] owns raylib resources.
use log::warn;
use raylib::prelude::*;

use crate::core::grid::{TileGrid, world_to_cell};
use crate::core::player::CameraPose;
use crate::core::tile::{TILE_SIZE, TileType};
use crate::error::{Error, Result};
use crate::render::backend::{RenderBackend, Viewport};
use crate::render::palette::{self, tile_color};
use crate::render::scene::{RenderMode, SceneStrategy};

/// Eye height in tiles (walls are one tile tall).
pub const EYE_HEIGHT: f32 = 0.5;
/// Chebyshev radius of cells around the player that get a block.
pub const NEIGHBOURHOOD: i32 = 8;
const CEILING_THICKNESS: f32 = 0.02;

pub const FOG_DENSITY: f32 = 0.09;
pub const DARKNESS: f32 = 0.2;
pub const TEXTURE_SCALE: f32 = 2.0;

const VERTEX_SHADER: &str = r#"#version 330
in vec3 vertexPosition;
in vec4 vertexColor;
uniform mat4 mvp;
out vec3 fragPosition;
out vec4 fragColor;
void main() {
    fragPosition = vertexPosition;
    fragColor = vertexColor;
    gl_Position = mvp * vec4(vertexPosition, 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 330
in vec3 fragPosition;
in vec4 fragColor;
uniform vec4 colDiffuse;
uniform vec3 viewPos;
uniform float fogDensity;
uniform float darkness;
uniform float textureScale;
out vec4 finalColor;
void main() {
    vec3 cell = floor(fragPosition * textureScale + 0.001);
    float checker = mod(cell.x + cell.y + cell.z, 2.0);
    vec3 base = fragColor.rgb * colDiffuse.rgb * mix(1.0, 0.82, checker);
    float dist = length(viewPos - fragPosition);
    float fog = clamp(exp(-pow(fogDensity * dist, 2.0)), 0.0, 1.0);
    finalColor = vec4(base * (1.0 - darkness) * fog, fragColor.a);
}
"#;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MeshCamera {
    pub eye: Vector3,
    pub target: Vector3,
    pub up: Vector3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl MeshCamera {
    /// Lifts the 2D pose into tile-unit 3D space: world x maps to x, world y
    /// to z, +Y is up. The vertical FOV is chosen so the horizontal FOV
    /// matches the column renderer's camera plane.
    pub fn from_pose(pose: &CameraPose, viewport: Viewport) -> Self {
        let eye = Vector3::new(
            pose.position.x / TILE_SIZE,
            EYE_HEIGHT,
            pose.position.y / TILE_SIZE,
        );
        let target = Vector3::new(eye.x + pose.direction.x, EYE_HEIGHT, eye.z + pose.direction.y);
        let plane_len = (pose.plane.x * pose.plane.x + pose.plane.y * pose.plane.y).sqrt();
        let fovy = 2.0 * (plane_len / viewport.aspect()).atan();
        Self {
            eye,
            target,
            up: Vector3::new(0.0, 1.0, 0.0),
            fovy: fovy.to_degrees(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WallBlock {
    pub cell: (i32, i32),
    pub tile: TileType,
    /// Centre of the unit cube, in tile units.
    pub center: Vector3,
    pub color: Color,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfacePlane {
    pub center: Vector3,
    /// Extent along x and z.
    pub size: Vector2,
    pub color: Color,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShaderParams {
    pub fog_density: f32,
    pub darkness: f32,
    pub texture_scale: f32,
}

impl Default for ShaderParams {
    fn default() -> Self {
        Self {
            fog_density: FOG_DENSITY,
            darkness: DARKNESS,
            texture_scale: TEXTURE_SCALE,
        }
    }
}

/// Everything the 3D pass draws for one frame. Blocks are borrowed from the
/// neighbourhood cache.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshFrame<'a> {
    pub camera: MeshCamera,
    pub blocks: &'a [WallBlock],
    pub floor: SurfacePlane,
    pub ceiling: SurfacePlane,
    pub ceiling_thickness: f32,
    pub params: ShaderParams,
}

/// Block list around a cell, rebuilt only when the grid revision or the
/// centre cell changes.
#[derive(Default)]
pub struct NeighbourhoodCache {
    key: Option<(u64, (i32, i32))>,
    blocks: Vec<WallBlock>,
    rebuilds: u64,
}

impl NeighbourhoodCache {
    pub fn blocks(&mut self, grid: &TileGrid, centre: (i32, i32)) -> &[WallBlock] {
        let key = (grid.revision(), centre);
        if self.key != Some(key) {
            self.blocks = neighbourhood_blocks(grid, centre, NEIGHBOURHOOD);
            self.key = Some(key);
            self.rebuilds += 1;
        }
        &self.blocks
    }

    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }
}

/// One block per non-empty in-bounds cell within `radius` of `centre`.
pub fn neighbourhood_blocks(grid: &TileGrid, centre: (i32, i32), radius: i32) -> Vec<WallBlock> {
    let mut blocks = Vec::new();
    for y in (centre.1 - radius)..=(centre.1 + radius) {
        for x in (centre.0 - radius)..=(centre.0 + radius) {
            if !grid.in_bounds(x, y) {
                continue;
            }
            let tile = grid.get(x, y);
            if !tile.is_opaque() {
                continue;
            }
            blocks.push(WallBlock {
                cell: (x, y),
                tile,
                center: Vector3::new(x as f32 + 0.5, 0.5, y as f32 + 0.5),
                color: tile_color(tile),
            });
        }
    }
    blocks
}

pub fn build_frame<'a>(
    grid: &TileGrid,
    pose: &CameraPose,
    viewport: Viewport,
    blocks: &'a [WallBlock],
) -> MeshFrame<'a> {
    let w = grid.width() as f32;
    let h = grid.height() as f32;
    MeshFrame {
        camera: MeshCamera::from_pose(pose, viewport),
        blocks,
        floor: SurfacePlane {
            center: Vector3::new(w * 0.5, 0.0, h * 0.5),
            size: Vector2::new(w, h),
            color: palette::FLOOR,
        },
        ceiling: SurfacePlane {
            center: Vector3::new(w * 0.5, 1.0 + CEILING_THICKNESS * 0.5, h * 0.5),
            size: Vector2::new(w, h),
            color: palette::CEILING,
        },
        ceiling_thickness: CEILING_THICKNESS,
        params: ShaderParams::default(),
    }
}

/// GPU side of the mesh pass: per-frame uniforms and the shader to bind.
pub trait ShaderPipeline {
    fn push_uniforms(&mut self, frame: &MeshFrame<'_>);

    /// Shader for the 3D pass; `None` draws with raylib's default shader.
    fn shader_mut(&mut self) -> Option<&mut Shader>;
}

/// Compiled fog shader plus its uniform locations, looked up once.
pub struct MeshPipeline {
    shader: Shader,
    view_pos_loc: i32,
    fog_density_loc: i32,
    darkness_loc: i32,
    texture_scale_loc: i32,
}

impl MeshPipeline {
    /// Compiles the shader and resolves its uniforms. raylib falls back to
    /// its default shader on compile errors, which shows up here as missing
    /// uniforms.
    pub fn acquire(rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<Self> {
        let shader =
            rl.load_shader_from_memory(thread, Some(VERTEX_SHADER), Some(FRAGMENT_SHADER));
        let loc = |name: &'static str| -> Result<i32> {
            let l = shader.get_shader_location(name);
            if l < 0 {
                Err(Error::ShaderUnavailable(format!("uniform `{name}` not found")))
            } else {
                Ok(l)
            }
        };
        let view_pos_loc = loc("viewPos")?;
        let fog_density_loc = loc("fogDensity")?;
        let darkness_loc = loc("darkness")?;
        let texture_scale_loc = loc("textureScale")?;
        Ok(Self {
            shader,
            view_pos_loc,
            fog_density_loc,
            darkness_loc,
            texture_scale_loc,
        })
    }
}

impl ShaderPipeline for MeshPipeline {
    fn push_uniforms(&mut self, frame: &MeshFrame<'_>) {
        let p = frame.params;
        self.shader.set_shader_value(self.view_pos_loc, frame.camera.eye);
        self.shader.set_shader_value(self.fog_density_loc, p.fog_density);
        self.shader.set_shader_value(self.darkness_loc, p.darkness);
        self.shader.set_shader_value(self.texture_scale_loc, p.texture_scale);
    }

    fn shader_mut(&mut self) -> Option<&mut Shader> {
        Some(&mut self.shader)
    }
}

pub struct MeshStrategy {
    pipeline: Option<Box<dyn ShaderPipeline>>,
    cache: NeighbourhoodCache,
}

impl MeshStrategy {
    pub fn new(pipeline: impl ShaderPipeline + 'static) -> Self {
        Self {
            pipeline: Some(Box::new(pipeline)),
            cache: NeighbourhoodCache::default(),
        }
    }

    /// Strategy whose resources could not be acquired.
    pub fn unavailable() -> Self {
        Self {
            pipeline: None,
            cache: NeighbourhoodCache::default(),
        }
    }

    /// Wraps an acquisition result, logging why the mesh view is off.
    pub fn from_acquired(acquired: Result<MeshPipeline>) -> Self {
        match acquired {
            Ok(p) => Self::new(p),
            Err(e) => {
                warn!("mesh renderer unavailable: {e}");
                Self::unavailable()
            }
        }
    }

    pub fn cache(&self) -> &NeighbourhoodCache {
        &self.cache
    }
}

impl SceneStrategy for MeshStrategy {
    fn mode(&self) -> RenderMode {
        RenderMode::Mesh
    }

    fn is_available(&self) -> bool {
        self.pipeline.is_some()
    }

    fn draw(
        &mut self,
        backend: &mut dyn RenderBackend,
        grid: &TileGrid,
        pose: &CameraPose,
        viewport: Viewport,
    ) {
        let Some(pipeline) = self.pipeline.as_mut() else {
            return;
        };
        let centre = world_to_cell(pose.position.x, pose.position.y);
        let blocks = self.cache.blocks(grid, centre);
        let frame = build_frame(grid, pose, viewport, blocks);
        pipeline.push_uniforms(&frame);
        backend.draw_mesh_frame(&frame, &mut **pipeline);
    }
}
