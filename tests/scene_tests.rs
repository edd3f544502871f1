//! World interaction, strategy selection and overlay drawing, checked
//! through a recording backend so no window is needed.

mod common;

use common::{CountingPipeline, DrawOp, RecordingBackend, pose_at, world_with_player};
use gridcaster::core::{InputIntents, TILE_SIZE, TileGrid, TileType};
use gridcaster::render::mesh::{
    MeshStrategy, NeighbourhoodCache, ShaderParams, build_frame, neighbourhood_blocks,
};
use gridcaster::render::minimap::MINIMAP_SIZE;
use gridcaster::render::palette;
use gridcaster::render::{RenderMode, SceneRenderer, Viewport};
use raylib::prelude::Color;

#[test]
fn toggling_the_wall_ahead_opens_a_door() {
    let mut w = world_with_player(TileGrid::walled(5, 5), 3.5, 2.5);
    // facing +x, the ring wall is at (4, 2)
    assert_eq!(w.facing_cell(), (4, 2));
    let ahead = (4.5 * TILE_SIZE, 2.5 * TILE_SIZE);
    assert!(w.grid.is_wall_at(ahead.0, ahead.1));

    w.tick(&InputIntents { interact: true, ..Default::default() }, 0.0);
    assert_eq!(w.tile(4, 2), TileType::Door);
    assert!(!w.grid.is_wall_at(ahead.0, ahead.1));

    assert!(w.interact());
    assert_eq!(w.tile(4, 2), TileType::Wall);
    assert!(w.grid.is_wall_at(ahead.0, ahead.1));
    assert_eq!(w.grid.revision(), 2);
}

#[test]
fn toggling_empty_or_secret_tiles_is_a_no_op() {
    let mut g = TileGrid::walled(6, 6);
    g.set(1, 1, TileType::SecretWall);
    let mut w = world_with_player(g, 2.5, 2.5);
    let rev = w.grid.revision();
    assert!(!w.toggle_tile(3, 3));
    assert!(!w.toggle_tile(1, 1));
    assert_eq!(w.tile(3, 3), TileType::Empty);
    assert_eq!(w.tile(1, 1), TileType::SecretWall);
    assert_eq!(w.grid.revision(), rev);
}

#[test]
fn unavailable_mesh_falls_back_to_columns_and_warns_once() {
    let w = world_with_player(TileGrid::walled(8, 8), 2.5, 2.5);
    let mut r = SceneRenderer::new(RenderMode::Mesh, MeshStrategy::unavailable());
    let vp = Viewport::new(160, 120);

    let mut b = RecordingBackend::default();
    assert_eq!(r.render_world(&mut b, &w, vp), RenderMode::Analytic);
    assert!(r.has_warned_fallback());
    assert!(!b.ops.iter().any(|op| matches!(op, DrawOp::MeshFrame { .. })));
    // one line per column plus the minimap's heading line
    assert_eq!(b.lines().count(), 160 + 1);

    let mut b = RecordingBackend::default();
    assert_eq!(r.render_world(&mut b, &w, vp), RenderMode::Analytic);
    assert_eq!(r.requested_mode(), RenderMode::Mesh);
}

#[test]
fn available_mesh_draws_one_frame_and_toggles_back() {
    let w = world_with_player(TileGrid::walled(8, 8), 2.5, 2.5);
    let pipeline = CountingPipeline::default();
    let pushes = pipeline.pushes.clone();
    let mut r = SceneRenderer::new(RenderMode::Mesh, MeshStrategy::new(pipeline));
    let vp = Viewport::new(160, 120);

    let mut b = RecordingBackend::default();
    assert_eq!(r.active_mode(), RenderMode::Mesh);
    assert_eq!(r.render_world(&mut b, &w, vp), RenderMode::Mesh);
    assert!(!r.has_warned_fallback());
    assert_eq!(pushes.get(), 1);
    // radius 8 around (2, 2) covers the whole 8x8 ring
    assert_eq!(
        b.ops[0],
        DrawOp::MeshFrame { blocks: 28, params: ShaderParams::default() }
    );
    // only the minimap heading is a line; no column pass ran
    assert_eq!(b.lines().count(), 1);

    assert_eq!(r.toggle_mode(), RenderMode::Analytic);
    let mut b = RecordingBackend::default();
    assert_eq!(r.render_world(&mut b, &w, vp), RenderMode::Analytic);
    assert!(!b.ops.iter().any(|op| matches!(op, DrawOp::MeshFrame { .. })));
    assert_eq!(b.lines().count(), 160 + 1);
    assert_eq!(pushes.get(), 1);
}

#[test]
fn mesh_frames_reuse_cached_blocks_until_the_grid_changes() {
    let mut w = world_with_player(TileGrid::walled(8, 8), 2.5, 2.5);
    let mesh = MeshStrategy::new(CountingPipeline::default());
    let mut r = SceneRenderer::new(RenderMode::Mesh, mesh);
    let vp = Viewport::new(64, 48);
    let mut b = RecordingBackend::default();
    r.render_world(&mut b, &w, vp);
    r.render_world(&mut b, &w, vp);

    w.grid.set(4, 4, TileType::Obstacle);
    r.render_world(&mut b, &w, vp);
    let counts: Vec<usize> = b
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::MeshFrame { blocks, .. } => Some(*blocks),
            _ => None,
        })
        .collect();
    assert_eq!(counts, vec![28, 28, 29]);
    assert_eq!(r.mesh().cache().rebuilds(), 2);
}

#[test]
fn analytic_frame_paints_ceiling_then_floor() {
    let w = world_with_player(TileGrid::walled(8, 8), 2.5, 2.5);
    let mut r = SceneRenderer::new(RenderMode::Analytic, MeshStrategy::unavailable());
    let mut b = RecordingBackend::default();
    r.render_world(&mut b, &w, Viewport::new(100, 81));
    assert!(!r.has_warned_fallback());
    assert_eq!(
        b.ops[0],
        DrawOp::FillRect { x: 0, y: 0, w: 100, h: 40, color: palette::CEILING }
    );
    assert_eq!(
        b.ops[1],
        DrawOp::FillRect { x: 0, y: 40, w: 100, h: 41, color: palette::FLOOR }
    );
}

#[test]
fn minimap_tracks_player_and_grid_changes() {
    let mut w = world_with_player(TileGrid::walled(10, 10), 5.0, 5.0);
    let mut r = SceneRenderer::new(RenderMode::Analytic, MeshStrategy::unavailable());
    let vp = Viewport::new(800, 600);

    let mut b = RecordingBackend::default();
    r.render_world(&mut b, &w, vp);
    let cell = MINIMAP_SIZE as f32 / 10.0;
    let origin_x = 800 - MINIMAP_SIZE - 10;
    let expected = DrawOp::Circle {
        cx: origin_x + 75,
        cy: 10 + 75,
        radius: cell * 0.5,
        color: Color::YELLOW,
    };
    assert_eq!(b.circles().collect::<Vec<_>>(), vec![&expected]);
    assert!(matches!(b.ops.last(), Some(DrawOp::RectLines { w: MINIMAP_SIZE, .. })));

    let door_rects = |b: &RecordingBackend| {
        b.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillRect { color, .. } if *color == Color::RED))
            .count()
    };
    assert_eq!(door_rects(&b), 0);
    w.toggle_tile(0, 5);
    let mut b = RecordingBackend::default();
    r.render_world(&mut b, &w, vp);
    assert_eq!(door_rects(&b), 1);
}

#[test]
fn neighbourhood_cache_rebuilds_on_grid_change_only() {
    let mut g = TileGrid::walled(30, 30);
    let mut cache = NeighbourhoodCache::default();
    let first = cache.blocks(&g, (3, 3)).len();
    cache.blocks(&g, (3, 3));
    assert_eq!(cache.rebuilds(), 1);

    g.set(5, 5, TileType::Obstacle);
    let second = cache.blocks(&g, (3, 3)).len();
    assert_eq!(cache.rebuilds(), 2);
    assert_eq!(second, first + 1);

    cache.blocks(&g, (4, 3));
    assert_eq!(cache.rebuilds(), 3);
}

#[test]
fn mesh_frame_covers_the_grid_and_nearby_blocks() {
    let g = TileGrid::walled(30, 20);
    let pose = pose_at(15.5, 10.5, (1.0, 0.0));
    let blocks = neighbourhood_blocks(&g, (15, 10), 8);
    // the ring is farther than 8 cells in every direction
    assert!(blocks.is_empty());

    let frame = build_frame(&g, &pose, Viewport::new(1280, 720), &blocks);
    assert_eq!((frame.floor.center.x, frame.floor.center.z), (15.0, 10.0));
    assert_eq!((frame.floor.size.x, frame.floor.size.y), (30.0, 20.0));
    assert!(frame.ceiling.center.y > 1.0);
    assert_eq!((frame.camera.eye.x, frame.camera.eye.z), (15.5, 10.5));
}

#[test]
fn mesh_strategy_without_pipeline_draws_nothing() {
    use gridcaster::render::SceneStrategy;

    let g = TileGrid::walled(8, 8);
    let mut s = MeshStrategy::unavailable();
    let mut b = RecordingBackend::default();
    s.draw(&mut b, &g, &pose_at(2.5, 2.5, (1.0, 0.0)), Viewport::new(64, 48));
    assert!(b.ops.is_empty());
    assert_eq!(s.cache().rebuilds(), 0);
}
