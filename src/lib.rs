//! Grid-based first-person raycaster with a switchable GPU mesh view.

pub mod config;
pub mod core;
pub mod error;
pub mod render;
