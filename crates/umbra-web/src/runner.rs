use umbra_engine::{
    builtin_levels, pack_events, pack_lights, pack_particles, pack_shadows, FixedTimestep,
    GameEvent, Intents, Level, LightInstance, ParticleInstance, World, FIXED_DT,
};

/// Smooth-follow camera. Lower smoothing is softer.
struct Camera {
    x: f32,
    y: f32,
    smoothing: f32,
}

impl Camera {
    fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            smoothing: 0.1,
        }
    }

    fn follow(&mut self, target_x: f32, target_y: f32) {
        self.x += (target_x - self.x) * self.smoothing;
        self.y += (target_y - self.y) * self.smoothing;
    }
}

/// Key codes the shell forwards.
mod keys {
    pub const LEFT: u32 = 37;
    pub const UP: u32 = 38;
    pub const RIGHT: u32 = 39;
    pub const SPACE: u32 = 32;
    pub const A: u32 = 65;
    pub const D: u32 = 68;
    pub const W: u32 = 87;
    pub const Q: u32 = 81;
    pub const SHIFT: u32 = 16;
}

/// Owns the world and everything the browser shell needs around it: the
/// fixed-timestep accumulator, key-state → intent mapping, a follow camera,
/// and the packed wire buffers the renderer reads.
pub struct GameRunner {
    world: World,
    levels: Vec<Level>,
    current_level: usize,
    timestep: FixedTimestep,
    intents: Intents,
    camera: Camera,
    frame_events: Vec<GameEvent>,
    light_buffer: Vec<LightInstance>,
    particle_buffer: Vec<ParticleInstance>,
    shadow_buffer: Vec<f32>,
    event_buffer: Vec<f32>,
}

impl GameRunner {
    pub fn new() -> Self {
        let levels = builtin_levels();
        let world = World::from_level(&levels[0]);
        let camera = Camera::at(world.player.pos.x, world.player.pos.y);
        Self {
            world,
            levels,
            current_level: 0,
            timestep: FixedTimestep::new(FIXED_DT),
            intents: Intents::none(),
            camera,
            frame_events: Vec::new(),
            light_buffer: Vec::new(),
            particle_buffer: Vec::new(),
            shadow_buffer: Vec::new(),
            event_buffer: Vec::new(),
        }
    }

    // ---- Level control ----

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    /// Load a built-in level by index. Returns whether the index existed.
    pub fn load_level(&mut self, index: usize) -> bool {
        let Some(level) = self.levels.get(index) else {
            return false;
        };
        self.world.load_level(level);
        self.current_level = index;
        self.camera = Camera::at(self.world.player.pos.x, self.world.player.pos.y);
        self.intents = Intents::none();
        true
    }

    /// Load a level from JSON, outside the built-in rotation.
    pub fn load_level_json(&mut self, json: &str) -> bool {
        match Level::from_json(json) {
            Ok(level) => {
                self.world.load_level(&level);
                self.camera = Camera::at(self.world.player.pos.x, self.world.player.pos.y);
                self.intents = Intents::none();
                true
            }
            Err(err) => {
                log::warn!("level JSON rejected: {err}");
                false
            }
        }
    }

    pub fn next_level(&mut self) -> bool {
        self.load_level(self.current_level + 1)
    }

    pub fn restart_level(&mut self) -> bool {
        self.load_level(self.current_level)
    }

    // ---- Input ----

    pub fn key_down(&mut self, key_code: u32) {
        self.set_key(key_code, true);
    }

    pub fn key_up(&mut self, key_code: u32) {
        self.set_key(key_code, false);
    }

    fn set_key(&mut self, key_code: u32, held: bool) {
        match key_code {
            keys::LEFT | keys::A => {
                self.intents.left = held;
                self.intents.move_left = held;
            }
            keys::RIGHT | keys::D => {
                self.intents.right = held;
                self.intents.move_right = held;
            }
            // Jump doubles as the interaction key.
            keys::UP | keys::W | keys::SPACE => {
                self.intents.jump = held;
                self.intents.activate_interact = held;
            }
            keys::SHIFT | keys::Q => {
                self.intents.activate_form = held;
            }
            _ => {}
        }
    }

    // ---- Frame driving ----

    /// Run as many fixed steps as the frame delta warrants, then refresh
    /// the camera and the wire buffers.
    pub fn tick(&mut self, frame_dt: f32) {
        let steps = self.timestep.accumulate(frame_dt);
        self.frame_events.clear();
        for _ in 0..steps {
            let result = self.world.tick(self.timestep.dt(), self.intents);
            self.frame_events.extend(result.events);
        }

        self.camera
            .follow(self.world.player.pos.x, self.world.player.pos.y);

        pack_lights(&self.world.lights, &mut self.light_buffer);
        pack_shadows(&self.world.shadow_field, &mut self.shadow_buffer);
        pack_particles(&self.world.effects, &mut self.particle_buffer);
        pack_events(&self.frame_events, &mut self.event_buffer);
    }

    // ---- Buffer accessors for JS reads ----

    pub fn lights_ptr(&self) -> *const f32 {
        self.light_buffer.as_ptr() as *const f32
    }

    pub fn light_count(&self) -> u32 {
        self.light_buffer.len() as u32
    }

    pub fn shadows_ptr(&self) -> *const f32 {
        self.shadow_buffer.as_ptr()
    }

    pub fn shadow_floats(&self) -> u32 {
        self.shadow_buffer.len() as u32
    }

    pub fn particles_ptr(&self) -> *const f32 {
        self.particle_buffer.as_ptr() as *const f32
    }

    pub fn particle_count(&self) -> u32 {
        self.particle_buffer.len() as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.event_buffer.as_ptr()
    }

    pub fn event_count(&self) -> u32 {
        (self.event_buffer.len() / umbra_engine::EVENT_FLOATS) as u32
    }

    // ---- Scalar state accessors ----

    pub fn camera_x(&self) -> f32 {
        self.camera.x
    }

    pub fn camera_y(&self) -> f32 {
        self.camera.y
    }

    pub fn player_x(&self) -> f32 {
        self.world.player.pos.x
    }

    pub fn player_y(&self) -> f32 {
        self.world.player.pos.y
    }

    pub fn player_facing_right(&self) -> bool {
        self.world.player.facing_right
    }

    pub fn player_in_shadow_form(&self) -> bool {
        self.world.player.is_in_shadow_form()
    }

    pub fn player_is_grounded(&self) -> bool {
        self.world.player.is_grounded
    }

    pub fn player_is_dead(&self) -> bool {
        self.world.player.is_dead
    }

    pub fn shadow_meter_fraction(&self) -> f32 {
        self.world.player.meter.fraction()
    }

    pub fn level_completed(&self) -> bool {
        self.world.is_completed()
    }

    /// Background color packed as 0xRRGGBB.
    pub fn background_rgb(&self) -> u32 {
        let c = self.world.background;
        ((c.r as u32) << 16) | ((c.g as u32) << 8) | c.b as u32
    }

    pub fn world_width(&self) -> f32 {
        self.world.bounds.right - self.world.bounds.left
    }

    pub fn world_height(&self) -> f32 {
        self.world.bounds.bottom - self.world.bounds.top
    }

    /// Interpolation alpha for rendering between ticks.
    pub fn render_alpha(&self) -> f32 {
        self.timestep.alpha()
    }
}

impl Default for GameRunner {
    fn default() -> Self {
        Self::new()
    }
}
