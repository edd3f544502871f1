//! Scene rendering: DDA columns, the mesh pass, and the minimap overlay.
//!
//! Re-exports:
//! - `backend`: draw-call seam and the raylib implementation
//! - `casters`: DDA ray walk and wall-slice projection
//! - `palette`: tile colours and side shading
//! - `render3d`: column renderer (analytic strategy)
//! - `mesh`: GPU strategy, frame description and shader pipeline
//! - `minimap`: top-down overlay
//! - `scene`: strategy selection with fallback

pub mod backend;
pub mod casters;
pub mod palette;
pub mod render3d;
pub mod mesh;
pub mod minimap;
pub mod scene;

pub use backend::{Canvas, RaylibBackend, RenderBackend, Viewport};
pub use scene::{RenderMode, SceneRenderer, SceneStrategy};
