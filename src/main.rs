use std::env;

use anyhow::Context;
use gridcaster::config::{CONFIG_ENV, DEFAULT_CONFIG_PATH, GameConfig};
use gridcaster::core::World;
use gridcaster::core::grid::TileGrid;
use gridcaster::core::process_events::process_events;
use gridcaster::render::mesh::{MeshPipeline, MeshStrategy};
use gridcaster::render::{RaylibBackend, RenderMode, SceneRenderer, Viewport};
use log::info;
use raylib::prelude::*;

const CONTROLS: &str = concat!(
    "WASD move | arrows/mouse turn | Shift sprint | Space door | ",
    "M mode | ESC cursor | F fullscreen"
);

fn toggle_cursor(rl: &mut RaylibHandle) {
    if rl.is_cursor_hidden() {
        rl.enable_cursor();
    } else {
        rl.disable_cursor();
    }
}

fn draw_hud(d: &mut RaylibDrawHandle, world: &World, mode: RenderMode, verbose: bool) {
    let fps = d.get_fps();
    let screen_h = d.get_screen_height();
    d.draw_text(&format!("FPS: {fps}"), 10, 10, 20, Color::WHITE);
    if !verbose {
        return;
    }
    let p = &world.player;
    d.draw_text(
        &format!("pos: ({:.2}, {:.2})", p.position.x, p.position.y),
        10,
        35,
        20,
        Color::WHITE,
    );
    d.draw_text(&format!("angle: {:.1} deg", p.angle.to_degrees()), 10, 60, 20, Color::WHITE);
    d.draw_text(&format!("mode: {}", mode.label()), 10, 85, 20, Color::WHITE);
    d.draw_text(CONTROLS, 10, screen_h - 30, 20, Color::LIGHTGRAY);
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = GameConfig::load_or_default(&config_path)
        .with_context(|| format!("loading {config_path}"))?;

    let (mut rl, thread) = raylib::init()
        .size(config.window_width, config.window_height)
        .title(&config.title)
        .resizable()
        .vsync()
        .build();
    rl.set_target_fps(config.target_fps);
    rl.set_exit_key(None);
    rl.disable_cursor();

    let mesh = if config.mesh_enabled {
        MeshStrategy::from_acquired(MeshPipeline::acquire(&mut rl, &thread))
    } else {
        info!("mesh renderer disabled by config");
        MeshStrategy::unavailable()
    };
    let mut renderer = SceneRenderer::new(config.start_mode, mesh);
    let mut world = World::new(TileGrid::reference(), config.player);
    info!(
        "world {}x{}, player at cell {:?}",
        world.grid.width(),
        world.grid.height(),
        world.player.cell()
    );

    let mut show_hud = true;
    let mut screenshots = 0u32;

    while !rl.window_should_close() {
        if rl.is_key_pressed(KeyboardKey::KEY_M) {
            renderer.toggle_mode();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
            toggle_cursor(&mut rl);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_F) {
            rl.toggle_fullscreen();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_F1) {
            show_hud = !show_hud;
        }
        if rl.is_key_pressed(KeyboardKey::KEY_F12) {
            let name = format!("screenshot_{screenshots:03}.png");
            rl.take_screenshot(&thread, &name);
            info!("saved {name}");
            screenshots += 1;
        }

        let intents = process_events(&rl, config.mouse_sensitivity);
        let dt = rl.get_frame_time();
        world.tick(&intents, dt);

        let viewport = Viewport::new(rl.get_screen_width(), rl.get_screen_height());
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        let mode = {
            let mut backend = RaylibBackend::new(&mut d);
            renderer.render_world(&mut backend, &world, viewport)
        };
        draw_hud(&mut d, &world, mode, show_hud);
    }

    Ok(())
}
