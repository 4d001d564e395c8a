//! `#[wasm_bindgen]` surface for the browser shell.
//!
//! The shell owns the canvas, the key listeners, and the
//! `requestAnimationFrame` loop; it forwards raw key codes and frame deltas
//! here and reads packed buffers and scalar state back each frame.

pub mod runner;

pub use runner::GameRunner;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<GameRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut GameRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Game not initialized. Call game_init() first.");
        f(runner)
    })
}

#[wasm_bindgen]
pub fn game_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(GameRunner::new());
    });
    log::info!("umbra: initialized");
}

#[wasm_bindgen]
pub fn game_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn game_key_down(key_code: u32) {
    with_runner(|r| r.key_down(key_code));
}

#[wasm_bindgen]
pub fn game_key_up(key_code: u32) {
    with_runner(|r| r.key_up(key_code));
}

// ---- Level control ----

#[wasm_bindgen]
pub fn game_level_count() -> u32 {
    with_runner(|r| r.level_count() as u32)
}

#[wasm_bindgen]
pub fn game_current_level() -> u32 {
    with_runner(|r| r.current_level() as u32)
}

#[wasm_bindgen]
pub fn game_load_level(index: u32) -> bool {
    with_runner(|r| r.load_level(index as usize))
}

#[wasm_bindgen]
pub fn game_load_level_json(json: &str) -> bool {
    with_runner(|r| r.load_level_json(json))
}

#[wasm_bindgen]
pub fn game_next_level() -> bool {
    with_runner(|r| r.next_level())
}

#[wasm_bindgen]
pub fn game_restart_level() -> bool {
    with_runner(|r| r.restart_level())
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_lights_ptr() -> *const f32 {
    with_runner(|r| r.lights_ptr())
}

#[wasm_bindgen]
pub fn get_light_count() -> u32 {
    with_runner(|r| r.light_count())
}

#[wasm_bindgen]
pub fn get_shadows_ptr() -> *const f32 {
    with_runner(|r| r.shadows_ptr())
}

#[wasm_bindgen]
pub fn get_shadow_floats() -> u32 {
    with_runner(|r| r.shadow_floats())
}

#[wasm_bindgen]
pub fn get_particles_ptr() -> *const f32 {
    with_runner(|r| r.particles_ptr())
}

#[wasm_bindgen]
pub fn get_particle_count() -> u32 {
    with_runner(|r| r.particle_count())
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_event_count() -> u32 {
    with_runner(|r| r.event_count())
}

// ---- Scalar state ----

#[wasm_bindgen]
pub fn get_camera_x() -> f32 {
    with_runner(|r| r.camera_x())
}

#[wasm_bindgen]
pub fn get_camera_y() -> f32 {
    with_runner(|r| r.camera_y())
}

#[wasm_bindgen]
pub fn get_player_x() -> f32 {
    with_runner(|r| r.player_x())
}

#[wasm_bindgen]
pub fn get_player_y() -> f32 {
    with_runner(|r| r.player_y())
}

#[wasm_bindgen]
pub fn player_facing_right() -> bool {
    with_runner(|r| r.player_facing_right())
}

#[wasm_bindgen]
pub fn player_in_shadow_form() -> bool {
    with_runner(|r| r.player_in_shadow_form())
}

#[wasm_bindgen]
pub fn player_is_grounded() -> bool {
    with_runner(|r| r.player_is_grounded())
}

#[wasm_bindgen]
pub fn player_is_dead() -> bool {
    with_runner(|r| r.player_is_dead())
}

#[wasm_bindgen]
pub fn get_shadow_meter() -> f32 {
    with_runner(|r| r.shadow_meter_fraction())
}

#[wasm_bindgen]
pub fn level_completed() -> bool {
    with_runner(|r| r.level_completed())
}

#[wasm_bindgen]
pub fn get_background_rgb() -> u32 {
    with_runner(|r| r.background_rgb())
}

#[wasm_bindgen]
pub fn get_world_width() -> f32 {
    with_runner(|r| r.world_width())
}

#[wasm_bindgen]
pub fn get_world_height() -> f32 {
    with_runner(|r| r.world_height())
}

#[wasm_bindgen]
pub fn get_render_alpha() -> f32 {
    with_runner(|r| r.render_alpha())
}
