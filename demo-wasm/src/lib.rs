use hitch::{BodyHandle, EngineConfig, TowTrailer, Vec2, VerletEngine};
use wasm_bindgen::prelude::*;

/// Horizontal scroll speed of the world, in pixels per frame.
const DELTA_X: f32 = 2.0;
/// Player gravity in pixels per frame, rescaled to pixels per second squared.
const GRAVITY: f32 = 0.125 * 60.0 * 60.0;
/// Converts per-frame pixel forces into the engine's per-second-squared units.
const FORCE_SCALE: f32 = 3900.0;
const ROPE_LENGTH: f32 = 60.0;
const TRAIL_DAMPING: f32 = 0.95;
/// How far the drawn rope runs on under the sleigh sprite.
const ROPE_INSET: f32 = 10.0;

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        // Already initialised is fine; the page may call start twice on hot reload.
        let _ = console_log::init_with_level(log::Level::Warn);
    }
}

// ---- Sleigh Demo ----

/// The player's sleigh: a trailer hitched to the player sprite.
#[wasm_bindgen]
pub struct SleighDemo {
    engine: VerletEngine<f32>,
    sleigh: BodyHandle,
    width: f32,
    height: f32,
    player_speed: f32,
    dead: bool,
}

impl SleighDemo {
    fn build(width: f32, height: f32, x: f32, y: f32) -> (VerletEngine<f32>, BodyHandle) {
        let config = EngineConfig::new(width, height).with_gravity(GRAVITY);
        let mut engine = VerletEngine::from_config(config).unwrap_or_else(|err| {
            log::warn!("invalid world {}x{}: {}, using defaults", width, height, err);
            VerletEngine::new(288.0, 400.0, GRAVITY)
        });
        let mut trailer = TowTrailer::new(Vec2::new(x, y), Vec2::new(x - ROPE_LENGTH, y));
        trailer.trail_point_mut().damping = TRAIL_DAMPING;
        trailer.tow_to(Vec2::new(x, y));
        let sleigh = engine.add_body(trailer);
        (engine, sleigh)
    }
}

#[wasm_bindgen]
impl SleighDemo {
    /// `height` is the playable height, i.e. the canvas minus the ground strip.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, player_x: f32, player_y: f32) -> Self {
        let (engine, sleigh) = Self::build(width, height, player_x, player_y);
        SleighDemo {
            engine,
            sleigh,
            width,
            height,
            player_speed: 0.0,
            dead: false,
        }
    }

    /// Start over with a fresh engine and sleigh behind the player.
    pub fn restart(&mut self, player_x: f32, player_y: f32) {
        let (engine, sleigh) = Self::build(self.width, self.height, player_x, player_y);
        self.engine = engine;
        self.sleigh = sleigh;
        self.player_speed = 0.0;
        self.dead = false;
    }

    /// Per-frame player state: position and vertical speed (for rope sag).
    pub fn set_player(&mut self, x: f32, y: f32, speed: f32) {
        self.player_speed = speed;
        if let Some(trailer) = self.engine.body_mut(self.sleigh) {
            trailer.tow_to(Vec2::new(x, y));
            // The world scrolls left, so the sleigh feels a leftward, slightly lifting drag.
            trailer
                .trail_point_mut()
                .add_force(Vec2::new(-DELTA_X * 0.5 * FORCE_SCALE, -0.06 * FORCE_SCALE));
        }
    }

    /// Freeze the sleigh where it is (after a crash).
    pub fn kill(&mut self) {
        self.dead = true;
    }

    pub fn update(&mut self, dt: f32) -> usize {
        if self.dead {
            return 0;
        }
        self.engine.update(dt)
    }

    /// Returns [x, y] of the sleigh.
    pub fn trail_position(&self) -> Vec<f32> {
        match self.engine.body(self.sleigh) {
            Some(trailer) => {
                let p = trailer.trail_point().pos;
                vec![p.x, p.y]
            }
            None => Vec::new(),
        }
    }

    /// Sleigh sprite rotation in radians.
    pub fn heading(&self) -> f32 {
        self.engine.body(self.sleigh).map_or(0.0, |t| t.heading())
    }

    /// Returns [start_x, start_y, control_x, control_y, end_x, end_y] for
    /// `quadraticCurveTo`.
    pub fn rope_curve(&self) -> Vec<f32> {
        let sag = 3.0 - self.player_speed * 2.0;
        match self.engine.body(self.sleigh) {
            Some(trailer) => {
                let c = trailer.rope_curve(ROPE_INSET, sag);
                vec![c.start.x, c.start.y, c.control.x, c.control.y, c.end.x, c.end.y]
            }
            None => Vec::new(),
        }
    }

    pub fn is_rope_torn(&self) -> bool {
        self.engine.body(self.sleigh).is_some_and(|t| t.is_rope_torn())
    }
}
