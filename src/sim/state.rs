//! Game state and core simulation types
//!
//! Everything the simulation step reads or writes lives in [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::level;
use super::tick::TickInput;
use crate::Scale;
use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Character is live and the step advances every frame
    Playing,
    /// Goal platform reached; the step is frozen for good
    Won,
}

/// Things that happened during a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Jump impulse applied
    Jumped,
    /// Character came down on a platform (index in generation order)
    Landed { platform: usize },
    /// Goal platform touched on the given tick
    Won { tick: u64 },
}

/// Movement magnitudes for one surface size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    /// Horizontal speed cap
    pub speed: f32,
    /// Horizontal velocity step while a direction is held
    pub accel: f32,
    /// Horizontal damping factor with no direction held (< 1)
    pub friction: f32,
    pub gravity: f32,
    /// Magnitude of the upward velocity set on jump
    pub jump_impulse: f32,
}

impl Movement {
    pub fn for_scale(scale: Scale) -> Self {
        Self {
            speed: CHARACTER_SPEED * scale.x,
            accel: CHARACTER_ACCEL * scale.x,
            friction: FRICTION,
            gravity: GRAVITY * scale.y,
            jump_impulse: JUMP_IMPULSE * scale.y,
        }
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    /// Rising from a jump that has not landed yet
    pub jumping: bool,
    /// Resting on a platform or the floor this tick
    pub grounded: bool,
    pub movement: Movement,
}

impl Character {
    /// Create a character resting on the ground of a `width` x `height` surface
    ///
    /// It starts the way the step leaves a resting character: touching the
    /// ground, grounded, and pressed into it by one tick of gravity.
    pub fn spawn(width: f32, height: f32) -> Self {
        let scale = Scale::for_surface(width, height);
        let size = scale.apply(Vec2::new(CHARACTER_WIDTH, CHARACTER_HEIGHT));
        let ground = PLATFORM_THICKNESS * scale.y;
        Self {
            pos: Vec2::new(CHARACTER_START_X * scale.x, height - size.y - ground),
            size,
            vel: Vec2::new(0.0, GRAVITY * scale.y),
            jumping: false,
            grounded: true,
            movement: Movement::for_scale(scale),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Bounding box shifted by the pending vertical displacement only
    pub fn projected_bounds(&self, k: f32) -> Rect {
        self.bounds().translated(Vec2::new(0.0, self.vel.y * k))
    }

    /// Snap onto a surface whose top edge is at `top`
    pub fn land_on(&mut self, top: f32) {
        self.pos.y = top - self.size.y;
        self.vel.y = 0.0;
        self.grounded = true;
        self.jumping = false;
    }

    /// Advance one tick of movement inside a `surface`-sized area
    ///
    /// `k` is the tick length relative to [`SIM_DT`]; at the fixed step it is
    /// exactly 1. Returns true if a jump started this tick.
    pub fn update(&mut self, input: &TickInput, surface: Vec2, k: f32) -> bool {
        let m = self.movement;

        if input.right && self.vel.x < m.speed {
            self.vel.x = (self.vel.x + m.accel * k).min(m.speed);
        }
        if input.left && self.vel.x > -m.speed {
            self.vel.x = (self.vel.x - m.accel * k).max(-m.speed);
        }
        if !input.left && !input.right {
            // Decays toward zero but is never snapped to it
            self.vel.x *= m.friction.powf(k);
        }

        let mut jumped = false;
        if input.jump && self.grounded && !self.jumping {
            self.jumping = true;
            self.grounded = false;
            self.vel.y = -m.jump_impulse;
            jumped = true;
        }

        // No terminal velocity; landing resets it
        self.vel.y += m.gravity * k;

        self.pos += self.vel * k;

        let max_x = (surface.x - self.size.x).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);

        if self.pos.y + self.size.y > surface.y {
            self.land_on(surface.y);
        }

        jumped
    }
}

/// A static rectangle the character can stand on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    /// Touching this platform wins the run
    pub is_goal: bool,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            is_goal: false,
        }
    }

    pub fn goal(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            is_goal: true,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// World size in pixels, fixed for the run
    pub surface: Vec2,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    pub character: Character,
    /// Platforms in generation order: ground first, goal last
    pub platforms: Vec<Platform>,
    /// Events from the most recent ticks, drained by the host
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new run with a generated level
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let platforms = level::generate(width, height, &mut rng);
        Self::with_level(seed, width, height, platforms)
    }

    /// Create a run over a prebuilt platform list
    pub fn with_level(seed: u64, width: f32, height: f32, platforms: Vec<Platform>) -> Self {
        Self {
            seed,
            surface: Vec2::new(width, height),
            time_ticks: 0,
            phase: GamePhase::Playing,
            character: Character::spawn(width, height),
            platforms,
            events: Vec::new(),
        }
    }

    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.seed,
            ticks: self.time_ticks,
            won: self.is_won(),
            platforms: self.platforms.len(),
            position: (self.character.pos.x, self.character.pos.y),
        }
    }
}

/// Compact record of a run for logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    pub ticks: u64,
    pub won: bool,
    pub platforms: usize,
    pub position: (f32, f32),
}
