//! The built-in level set.

use super::{GateDef, Level, LightDef, MirrorDef, PlatformDef, Point, SwitchDef};

fn platform(x: f32, y: f32, width: f32, height: f32) -> PlatformDef {
    PlatformDef {
        x,
        y,
        width,
        height,
    }
}

fn gate(x: f32, y: f32) -> GateDef {
    GateDef {
        x,
        y,
        width: 20.0,
        height: 100.0,
    }
}

fn light(id: &str, x: f32, y: f32, radius: f32, intensity: f32) -> LightDef {
    LightDef {
        id: id.into(),
        x,
        y,
        radius,
        color: super::default_light_color(),
        intensity,
        max_intensity: 1.0,
    }
}

fn switch(x: f32, y: f32, targets: &[&str]) -> SwitchDef {
    SwitchDef {
        x,
        y,
        targets: targets.iter().map(|t| (*t).into()).collect(),
    }
}

fn mirror(x: f32, y: f32) -> MirrorDef {
    MirrorDef {
        x,
        y,
        angle: super::default_mirror_angle(),
        reflectivity: super::default_reflectivity(),
    }
}

/// All shipped levels, in play order.
pub fn builtin_levels() -> Vec<Level> {
    vec![the_awakening(), shadow_and_light()]
}

/// Level 1: one gate, one switch-controlled light, one mirror.
fn the_awakening() -> Level {
    let mut platforms = Vec::new();
    // Ground row.
    for i in 0..10 {
        platforms.push(platform(-900.0 + i as f32 * 200.0, 400.0, 200.0, 40.0));
    }
    // Stepping platforms up and over the gate.
    platforms.push(platform(-600.0, 300.0, 100.0, 20.0));
    platforms.push(platform(-400.0, 250.0, 100.0, 20.0));
    platforms.push(platform(-200.0, 200.0, 100.0, 20.0));
    platforms.push(platform(0.0, 200.0, 100.0, 20.0));
    platforms.push(platform(200.0, 250.0, 100.0, 20.0));
    platforms.push(platform(400.0, 300.0, 100.0, 20.0));
    platforms.push(platform(600.0, 350.0, 100.0, 20.0));

    Level {
        id: 1,
        name: "The Awakening".into(),
        width: 2000.0,
        height: 1000.0,
        start: Point { x: -900.0, y: 300.0 },
        exit: Point { x: 900.0, y: 300.0 },
        background: super::default_background(),
        platforms,
        gates: vec![gate(500.0, 350.0)],
        lights: vec![
            light("light1", -800.0, 200.0, 300.0, 0.8),
            light("light2", -400.0, 100.0, 250.0, 0.7),
            // Dark until its switch is thrown.
            light("light3", 0.0, 50.0, 300.0, 0.0),
            light("light4", 400.0, 100.0, 250.0, 0.7),
            light("light5", 800.0, 200.0, 300.0, 0.8),
        ],
        switches: vec![switch(-200.0, 150.0, &["light3"])],
        mirrors: vec![mirror(300.0, 200.0)],
    }
}

/// Level 2: a climb through three gates, two switched lights, two mirrors.
fn shadow_and_light() -> Level {
    let mut platforms = Vec::new();
    // Ground row.
    for i in 0..12 {
        platforms.push(platform(-1100.0 + i as f32 * 200.0, 400.0, 200.0, 40.0));
    }
    // Right-hand wall up to the exit shelf.
    platforms.push(platform(1100.0, 300.0, 40.0, 200.0));
    platforms.push(platform(1100.0, 100.0, 40.0, 200.0));
    platforms.push(platform(1100.0, -100.0, 40.0, 200.0));
    platforms.push(platform(1100.0, -300.0, 40.0, 200.0));
    // Upper shelf.
    platforms.push(platform(900.0, -400.0, 200.0, 40.0));
    platforms.push(platform(700.0, -400.0, 200.0, 40.0));
    platforms.push(platform(500.0, -400.0, 200.0, 40.0));
    platforms.push(platform(300.0, -400.0, 200.0, 40.0));
    // Stair of stepping platforms.
    platforms.push(platform(-800.0, 200.0, 100.0, 20.0));
    platforms.push(platform(-600.0, 100.0, 100.0, 20.0));
    platforms.push(platform(-400.0, 0.0, 100.0, 20.0));
    platforms.push(platform(-200.0, -100.0, 100.0, 20.0));
    platforms.push(platform(0.0, -200.0, 100.0, 20.0));
    platforms.push(platform(200.0, -300.0, 100.0, 20.0));
    platforms.push(platform(400.0, -400.0, 100.0, 20.0));

    Level {
        id: 2,
        name: "Shadow and Light".into(),
        width: 2400.0,
        height: 1200.0,
        start: Point {
            x: -1100.0,
            y: 300.0,
        },
        exit: Point {
            x: 1100.0,
            y: -400.0,
        },
        background: super::default_background(),
        platforms,
        gates: vec![
            gate(-300.0, 0.0),
            gate(100.0, -200.0),
            gate(500.0, -400.0),
        ],
        lights: vec![
            light("pl1", -900.0, 200.0, 300.0, 0.8),
            light("pl2", -500.0, 0.0, 250.0, 0.0),
            light("pl3", -100.0, -200.0, 300.0, 0.0),
            light("pl4", 300.0, -300.0, 250.0, 0.7),
            light("pl5", 700.0, -400.0, 300.0, 0.8),
        ],
        switches: vec![
            switch(-700.0, 50.0, &["pl2"]),
            switch(-300.0, -50.0, &["pl3"]),
        ],
        mirrors: vec![mirror(-400.0, -50.0), mirror(0.0, -250.0)],
    }
}
