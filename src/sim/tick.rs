//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::geometry::overlaps;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::SIM_DT;

/// Held input intents for a single tick
///
/// Level-sensitive: each flag means "currently held", not "just pressed".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Jump (up arrow / jump button)
    pub jump: bool,
}

impl TickInput {
    /// Set an intent by its action name
    ///
    /// Accepts `left`, `right`, `up` and `jump` in any case. Returns false for
    /// names that map to no intent.
    pub fn set_intent(&mut self, name: &str, held: bool) -> bool {
        match name.to_lowercase().as_str() {
            "left" => self.left = held,
            "right" => self.right = held,
            "up" | "jump" => self.jump = held,
            _ => return false,
        }
        true
    }

    /// Release everything (focus loss, pointer leaving a button)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Advance the game state by one timestep
///
/// Collision is resolved against the character's box projected one tick
/// ahead vertically, then movement is integrated. Returns false without
/// touching the state once the run is won.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> bool {
    if state.phase == GamePhase::Won {
        return false;
    }

    state.time_ticks += 1;
    let k = dt / SIM_DT;

    // Grounding is re-derived every tick
    let was_grounded = state.character.grounded;
    state.character.grounded = false;

    // Every platform is tested against the pre-snap motion, so the last
    // qualifying one in generation order decides the landing
    let projected = state.character.projected_bounds(k);
    // Only falling characters land; rising ones pass up through
    let falling = state.character.vel.y > 0.0;

    let mut landed_on = None;
    for (index, platform) in state.platforms.iter().enumerate() {
        if falling && overlaps(&projected, &platform.rect) {
            state.character.land_on(platform.rect.y);
            landed_on = Some(index);
            if platform.is_goal {
                state.phase = GamePhase::Won;
            }
        }
    }

    if let Some(index) = landed_on
        && !was_grounded
    {
        log::debug!("Landed on platform {} at tick {}", index, state.time_ticks);
        state.events.push(GameEvent::Landed { platform: index });
    }

    if state.phase == GamePhase::Won {
        log::info!("Goal reached at tick {}", state.time_ticks);
        state.events.push(GameEvent::Won {
            tick: state.time_ticks,
        });
    }

    // Must run after the landing snap
    let surface = state.surface;
    if state.character.update(input, surface, k) {
        log::debug!("Jump at tick {}", state.time_ticks);
        state.events.push(GameEvent::Jumped);
    }

    true
}
