//! The simulation world and its tick loop.
//!
//! Tick ordering is load-bearing and must not be rearranged:
//! 1. timers and input-driven state (switches, mirror mode/rotation, form
//!    toggle),
//! 2. shadow field rebuild from the current lights × occluders,
//! 3. player movement, platform collision, gate blocking, exit and death,
//! 4. mirror reflections, which may mutate the light registry,
//! 5. shadow meter update against the field from step 2 — a reflection
//!    written in step 4 becomes visible to containment one tick later.

use glam::Vec2;

use crate::api::types::GameEvent;
use crate::core::scene::Scene;
use crate::effects::EffectsState;
use crate::entities::{
    Entity, LevelExit, LightSwitch, Mirror, MirrorMode, Platform, Player, ShadowGate, Simulated,
};
use crate::input::intents::Intents;
use crate::level::Level;
use crate::lighting::field::ShadowField;
use crate::lighting::light::{Light, LightRegistry, Rgb};

/// Fixed simulation timestep, seconds.
pub const FIXED_DT: f32 = 1.0 / 60.0;

/// RNG seed for particle effects; fixed so replays are reproducible.
const EFFECTS_SEED: u64 = 42;

/// Axis-aligned world bounds, centered on the origin. Falling below
/// `bottom` kills the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl WorldBounds {
    fn from_size(width: f32, height: f32) -> Self {
        Self {
            left: -width / 2.0,
            right: width / 2.0,
            top: -height / 2.0,
            bottom: height / 2.0,
        }
    }
}

/// What one tick reported back to the host.
#[derive(Debug, Default)]
pub struct TickResult {
    pub events: Vec<GameEvent>,
    /// Whether a gate blocked the player this tick.
    pub blocked: bool,
    /// This tick's shadow-field containment of the player position.
    pub player_in_shadow: bool,
}

/// All simulation state for one loaded level.
///
/// Every collaborator is an owned field handed to entities as a parameter;
/// nothing reaches into ambient globals. The host drives the world through
/// `tick` and reads state back through the public fields.
pub struct World {
    pub scene: Scene,
    pub lights: LightRegistry,
    pub shadow_field: ShadowField,
    pub player: Player,
    pub effects: EffectsState,
    pub bounds: WorldBounds,
    pub background: Rgb,
    completed: bool,
    prev_intents: Intents,
}

impl World {
    /// Build a world from a level description.
    pub fn from_level(level: &Level) -> Self {
        let mut world = Self {
            scene: Scene::new(),
            lights: LightRegistry::new(),
            shadow_field: ShadowField::new(),
            player: Player::new(level.start.into()),
            effects: EffectsState::new(EFFECTS_SEED),
            bounds: WorldBounds::from_size(level.width, level.height),
            background: level.background,
            completed: false,
            prev_intents: Intents::none(),
        };
        world.populate(level);
        world
    }

    /// Replace the current level with another one, resetting all state.
    pub fn load_level(&mut self, level: &Level) {
        self.scene.clear();
        self.lights.clear();
        self.shadow_field.clear();
        self.effects.clear();
        self.player = Player::new(level.start.into());
        self.bounds = WorldBounds::from_size(level.width, level.height);
        self.background = level.background;
        self.completed = false;
        self.prev_intents = Intents::none();
        self.populate(level);
    }

    fn populate(&mut self, level: &Level) {
        for def in &level.platforms {
            self.scene.spawn(Entity::Platform(Platform::new(
                Vec2::new(def.x, def.y),
                def.width,
                def.height,
            )));
        }
        for def in &level.gates {
            self.scene.spawn(Entity::Gate(ShadowGate::new(
                Vec2::new(def.x, def.y),
                def.width,
                def.height,
            )));
        }
        for def in &level.switches {
            self.scene.spawn(Entity::Switch(LightSwitch::new(
                Vec2::new(def.x, def.y),
                def.targets.clone(),
            )));
        }
        for (i, def) in level.mirrors.iter().enumerate() {
            let mirror = Mirror::new(Vec2::new(def.x, def.y), format!("reflection-{}", i + 1))
                .with_angle(def.angle)
                .with_reflectivity(def.reflectivity);
            self.scene.spawn(Entity::Mirror(mirror));
        }
        self.scene
            .spawn(Entity::Exit(LevelExit::new(level.exit.into())));

        for def in &level.lights {
            let light = Light::new(
                def.id.clone(),
                Vec2::new(def.x, def.y),
                def.radius,
                def.color,
                def.intensity,
            )
            .with_max_intensity(def.max_intensity);
            // Duplicate ids are an authoring error; the registry logs and
            // keeps the first.
            self.lights.add(light);
        }
    }

    /// Whether the exit has been reached this level.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Advance the simulation by one fixed step.
    pub fn tick(&mut self, dt: f32, intents: Intents) -> TickResult {
        let mut events = Vec::new();

        // 1. Timers, then input-driven state changes.
        let form_edge = intents.activate_form && !self.prev_intents.activate_form;
        let player_pos = self.player.pos;
        for entity in self.scene.iter_mut() {
            entity.advance(dt, &mut self.effects);
            match entity {
                Entity::Switch(s) => {
                    if s.try_activate(player_pos, intents.activate_interact, &mut self.lights) {
                        self.effects.switch_flash(s.pos, s.is_on);
                        events.push(GameEvent::SwitchToggled { on: s.is_on });
                    }
                }
                Entity::Mirror(m) => {
                    if m.try_toggle_mode(player_pos, intents.activate_interact) {
                        self.effects.mirror_shimmer(m.pos);
                        events.push(GameEvent::MirrorModeChanged {
                            rotating: m.mode == MirrorMode::Rotating,
                        });
                    }
                    m.rotate(intents.left, intents.right, dt);
                }
                _ => {}
            }
        }
        self.player
            .handle_form_toggle(form_edge, &mut self.effects, &mut events);

        // 2. Rebuild the shadow field from current light/occluder state.
        let occluders: Vec<_> = self.scene.platforms().map(|p| p.occluder()).collect();
        self.shadow_field.rebuild(&self.lights, &occluders);

        // 3. Player movement and collision resolution.
        let platforms: Vec<Platform> = self.scene.platforms().copied().collect();
        self.player.update_movement(
            dt,
            &intents,
            &platforms,
            &self.shadow_field,
            &mut self.effects,
        );

        let mut blocked = false;
        for entity in self.scene.iter_mut() {
            if let Entity::Gate(gate) = entity {
                if gate.resolve(&mut self.player) {
                    blocked = true;
                    self.effects.block_dust(self.player.pos);
                    events.push(GameEvent::GateBlocked);
                }
            }
        }

        if !self.completed {
            let reached = self.scene.iter().any(|e| match e {
                Entity::Exit(exit) => exit.overlaps(&self.player),
                _ => false,
            });
            if reached {
                self.completed = true;
                events.push(GameEvent::LevelComplete);
            }
        }

        if self.player.pos.y > self.bounds.bottom {
            self.player.die(&mut self.effects, &mut events);
        }

        // 4. Mirror reflections, writing into the light registry.
        for entity in self.scene.iter_mut() {
            if let Entity::Mirror(mirror) = entity {
                mirror.update_reflection(&mut self.lights);
            }
        }

        // 5. Shadow meter against the field rebuilt in step 2.
        let player_in_shadow = self.shadow_field.contains(self.player.pos);
        self.player
            .update_shadow_meter(dt, player_in_shadow, &mut self.effects, &mut events);

        // Presentation-only particle advance.
        self.effects.tick(dt);

        self.prev_intents = intents;
        TickResult {
            events,
            blocked,
            player_in_shadow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{GateDef, LightDef, MirrorDef, PlatformDef, Point, SwitchDef};

    fn base_level() -> Level {
        Level {
            id: 99,
            name: "Test Chamber".into(),
            width: 2400.0,
            height: 1200.0,
            start: Point { x: 500.0, y: 0.0 },
            exit: Point {
                x: -1000.0,
                y: -500.0,
            },
            background: Rgb::new(10, 25, 33),
            platforms: Vec::new(),
            gates: Vec::new(),
            lights: Vec::new(),
            switches: Vec::new(),
            mirrors: Vec::new(),
        }
    }

    fn light_def(id: &str, x: f32, y: f32, radius: f32, intensity: f32) -> LightDef {
        LightDef {
            id: id.into(),
            x,
            y,
            radius,
            color: Rgb::new(255, 220, 180),
            intensity,
            max_intensity: 1.0,
        }
    }

    #[test]
    fn single_light_single_occluder_end_to_end() {
        let mut level = base_level();
        level.platforms.push(PlatformDef {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
        });
        level.lights.push(light_def("sun", 0.0, -300.0, 300.0, 1.0));

        let mut world = World::from_level(&level);
        world.tick(FIXED_DT, Intents::none());

        assert_eq!(world.shadow_field.len(), 1);
        assert!(world.shadow_field.contains(Vec2::new(0.0, 200.0)));
        assert!(!world.shadow_field.contains(Vec2::new(0.0, -400.0)));
    }

    #[test]
    fn switch_toggle_respects_simulated_cooldown_under_held_intent() {
        let mut level = base_level();
        level.lights.push(light_def("L1", 0.0, -300.0, 300.0, 0.0));
        level.switches.push(SwitchDef {
            x: 500.0,
            y: 0.0,
            targets: vec!["L1".into()],
        });
        // A floor directly under the start keeps the player near the switch.
        level.platforms.push(PlatformDef {
            x: 500.0,
            y: 62.0,
            width: 400.0,
            height: 40.0,
        });

        let mut world = World::from_level(&level);
        let held = Intents {
            activate_interact: true,
            ..Intents::none()
        };

        let first = world.tick(FIXED_DT, held);
        assert!(first
            .events
            .contains(&GameEvent::SwitchToggled { on: true }));
        assert_eq!(world.lights.get("L1").unwrap().intensity(), 1.0);

        // Held intent through the cooldown window: no re-trigger.
        for _ in 0..29 {
            let result = world.tick(FIXED_DT, held);
            assert!(result.events.iter().all(|e| !matches!(
                e,
                GameEvent::SwitchToggled { .. }
            )));
        }
        assert_eq!(world.lights.get("L1").unwrap().intensity(), 1.0);

        // 0.5s of simulation time after the first toggle, it fires again.
        let again = world.tick(FIXED_DT, held);
        assert!(again
            .events
            .contains(&GameEvent::SwitchToggled { on: false }));
        assert_eq!(world.lights.get("L1").unwrap().intensity(), 0.0);
    }

    #[test]
    fn mirror_reflection_reaches_the_field_one_tick_late() {
        let mut level = base_level();
        level.lights.push(light_def("sun", -100.0, 0.0, 100.0, 1.0));
        level.mirrors.push(MirrorDef {
            x: 0.0,
            y: 0.0,
            angle: 0.0,
            reflectivity: 0.8,
        });
        level.platforms.push(PlatformDef {
            x: 0.0,
            y: 300.0,
            width: 100.0,
            height: 20.0,
        });

        let mut world = World::from_level(&level);

        // Tick 1: the reflection is written in phase 4, after the field
        // rebuild — only the sun has cast a polygon.
        world.tick(FIXED_DT, Intents::none());
        assert_eq!(world.shadow_field.len(), 1);
        let reflected = world.lights.get("reflection-1").expect("synthetic light");
        assert!((reflected.pos.x - (-80.0)).abs() < 1e-4);
        assert!(reflected.pos.y.abs() < 1e-4);
        assert!((reflected.intensity() - 0.64).abs() < 1e-5);

        // Tick 2: the reflected light now participates in the rebuild.
        world.tick(FIXED_DT, Intents::none());
        assert_eq!(world.shadow_field.len(), 2);
    }

    #[test]
    fn gate_blocks_until_shadow_form_is_taken() {
        let mut level = base_level();
        level.start = Point { x: 505.0, y: 350.0 };
        level.gates.push(GateDef {
            x: 500.0,
            y: 350.0,
            width: 20.0,
            height: 100.0,
        });

        let mut world = World::from_level(&level);

        let result = world.tick(FIXED_DT, Intents::none());
        assert!(result.blocked);
        assert!(result.events.contains(&GameEvent::GateBlocked));
        // Pushed to the right edge: the player started right of center.
        assert_eq!(world.player.pos.x, 500.0 + 10.0 + 20.0);

        // Take shadow form; the same overlap no longer blocks.
        let form = Intents {
            activate_form: true,
            move_left: true,
            ..Intents::none()
        };
        let result = world.tick(FIXED_DT, form);
        assert!(result.events.contains(&GameEvent::ShadowFormEntered));
        assert!(!result.blocked);
    }

    #[test]
    fn reaching_the_exit_completes_once() {
        let mut level = base_level();
        level.exit = Point { x: 500.0, y: 0.0 };
        // Floor under the exit so the player stays overlapping it.
        level.platforms.push(PlatformDef {
            x: 500.0,
            y: 62.0,
            width: 400.0,
            height: 40.0,
        });

        let mut world = World::from_level(&level);
        let first = world.tick(FIXED_DT, Intents::none());
        assert!(first.events.contains(&GameEvent::LevelComplete));
        assert!(world.is_completed());

        let second = world.tick(FIXED_DT, Intents::none());
        assert!(!second.events.contains(&GameEvent::LevelComplete));
    }

    #[test]
    fn falling_out_of_the_world_is_fatal_once() {
        let mut level = base_level();
        level.start = Point { x: 0.0, y: 560.0 };

        let mut world = World::from_level(&level);
        let mut game_overs = 0;
        for _ in 0..120 {
            let result = world.tick(FIXED_DT, Intents::none());
            game_overs += result
                .events
                .iter()
                .filter(|e| **e == GameEvent::GameOver)
                .count();
        }
        assert_eq!(game_overs, 1);
        assert!(world.player.is_dead);
    }

    #[test]
    fn load_level_resets_state() {
        let mut level_a = base_level();
        level_a.lights.push(light_def("a", 0.0, 0.0, 300.0, 1.0));
        let mut level_b = base_level();
        level_b.start = Point { x: -42.0, y: 7.0 };
        level_b.lights.push(light_def("b", 0.0, 0.0, 300.0, 1.0));

        let mut world = World::from_level(&level_a);
        world.tick(FIXED_DT, Intents::none());

        world.load_level(&level_b);
        assert!(world.lights.get("a").is_none());
        assert!(world.lights.get("b").is_some());
        assert_eq!(world.player.pos, Vec2::new(-42.0, 7.0));
        assert!(!world.is_completed());
        assert!(world.shadow_field.is_empty());
    }
}
