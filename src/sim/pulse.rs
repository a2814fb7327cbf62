//! Expanding-ring dodging
//!
//! The player steps on a fixed grid and eases toward the stepped target while
//! shockwave rings expand from random centers. Touching a ring's band ends
//! the session; score is survival time.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::ease_toward;
use crate::sim::{GamePhase, TickInput, collision::on_ring_band};

/// Distance of one grid step
pub const GRID_STEP: f32 = 60.0;
/// Per-tick catch-up fraction toward the stepped target
pub const EASE_FRAC: f32 = 0.2;

/// Ring spawn probability per tick
pub const RING_SPAWN_CHANCE: f64 = 0.03;
/// Expansion speed before the score bonus
pub const RING_BASE_SPEED: f32 = 2.0;
/// Extra expansion speed per survival point
pub const RING_SPEED_PER_POINT: f32 = 0.01;
/// Half-thickness of the deadly band around a ring's edge
pub const RING_BAND: f32 = 10.0;
pub const RING_MIN_MAX_RADIUS: f32 = 150.0;
pub const RING_EXTRA_MAX_RADIUS: f32 = 200.0;

/// One survival point per this many ticks
pub const TICKS_PER_POINT: u64 = 20;

/// An expanding shockwave. Plain data; expansion and the hit test live in
/// the tick function.
#[derive(Debug, Clone, Copy)]
pub struct Ring {
    pub center: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub speed: f32,
}

#[derive(Debug, Clone)]
pub struct PulseState {
    pub phase: GamePhase,
    pub time_ticks: u64,
    pub bounds: Vec2,
    pub pos: Vec2,
    pub target: Vec2,
    pub rings: Vec<Ring>,
    pub rng: Pcg32,
}

impl PulseState {
    pub fn new(seed: u64, bounds: Vec2) -> Self {
        Self {
            phase: GamePhase::Start,
            time_ticks: 0,
            bounds,
            pos: bounds * 0.5,
            target: bounds * 0.5,
            rings: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.pos = self.bounds * 0.5;
        self.target = self.bounds * 0.5;
        self.rings.clear();
    }

    pub fn score(&self) -> u64 {
        self.time_ticks / TICKS_PER_POINT
    }
}

/// Advance the ring field by one frame
pub fn tick(state: &mut PulseState, input: &TickInput) {
    match state.phase {
        GamePhase::Start | GamePhase::GameOver => {
            if input.action {
                state.restart();
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    // Grid steps are edge-triggered; holding a key does not glide
    if input.press_left {
        state.target.x -= GRID_STEP;
    }
    if input.press_right {
        state.target.x += GRID_STEP;
    }
    if input.press_up {
        state.target.y -= GRID_STEP;
    }
    if input.press_down {
        state.target.y += GRID_STEP;
    }
    state.target = state.target.clamp(Vec2::ZERO, state.bounds);

    state.pos = ease_toward(state.pos, state.target, EASE_FRAC);

    if state.rng.random_bool(RING_SPAWN_CHANCE) {
        let center = Vec2::new(
            state.rng.random_range(0.0..state.bounds.x),
            state.rng.random_range(0.0..state.bounds.y),
        );
        let max_radius = RING_MIN_MAX_RADIUS + state.rng.random_range(0.0..RING_EXTRA_MAX_RADIUS);
        // Later rings expand faster; locked in at spawn time
        let speed = RING_BASE_SPEED + state.score() as f32 * RING_SPEED_PER_POINT;
        state.rings.push(Ring {
            center,
            radius: 0.0,
            max_radius,
            speed,
        });
    }

    for ring in &mut state.rings {
        ring.radius += ring.speed;
    }

    for ring in &state.rings {
        if on_ring_band(state.pos, ring.center, ring.radius, RING_BAND) {
            state.phase = GamePhase::GameOver;
            return;
        }
    }

    state.rings.retain(|ring| ring.radius <= ring.max_radius);
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Vec2 = Vec2::new(1280.0, 720.0);

    fn playing_state(seed: u64) -> PulseState {
        let mut state = PulseState::new(seed, BOUNDS);
        state.restart();
        state
    }

    #[test]
    fn test_noop_outside_playing() {
        let mut state = PulseState::new(1, BOUNDS);
        let input = TickInput {
            press_left: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.target, BOUNDS * 0.5);
    }

    #[test]
    fn test_step_is_edge_triggered() {
        let mut state = playing_state(2);
        let press = TickInput {
            press_right: true,
            ..Default::default()
        };
        tick(&mut state, &press);
        assert_eq!(state.target.x, BOUNDS.x * 0.5 + GRID_STEP);

        // Held without a fresh press: target stays put
        let held = TickInput {
            held_right: true,
            ..Default::default()
        };
        tick(&mut state, &held);
        assert_eq!(state.target.x, BOUNDS.x * 0.5 + GRID_STEP);
    }

    #[test]
    fn test_target_clamped_to_bounds() {
        let mut state = playing_state(3);
        state.target = Vec2::new(20.0, 20.0);
        let press = TickInput {
            press_left: true,
            press_up: true,
            ..Default::default()
        };
        tick(&mut state, &press);
        assert_eq!(state.target, Vec2::ZERO);
    }

    #[test]
    fn test_position_eases_toward_target() {
        let mut state = playing_state(4);
        state.rng = Pcg32::seed_from_u64(4);
        state.pos = Vec2::ZERO;
        state.target = Vec2::new(100.0, 0.0);
        // Keep the field clear so easing is the only effect
        state.rings.clear();
        tick(&mut state, &TickInput::default());
        assert!((state.pos.x - 100.0 * EASE_FRAC).abs() < 1e-4);
    }

    #[test]
    fn test_ring_band_contact_ends_session() {
        let mut state = playing_state(5);
        state.rings = vec![Ring {
            center: state.pos - Vec2::new(50.0, 0.0),
            radius: 48.0,
            max_radius: 400.0,
            speed: 2.0,
        }];
        // After expansion the band sits right on the player
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_rings_despawn_past_max_radius() {
        let mut state = playing_state(6);
        state.pos = Vec2::new(10.0, 10.0);
        state.target = state.pos;
        state.rings = vec![Ring {
            center: Vec2::new(1000.0, 700.0),
            radius: 199.0,
            max_radius: 200.0,
            speed: 2.0,
        }];
        tick(&mut state, &TickInput::default());
        // The expired ring is gone; anything left is a fresh spawn
        assert!(state.rings.iter().all(|ring| ring.radius <= ring.max_radius));
        assert!(state.rings.iter().all(|ring| ring.radius < 100.0));
    }

    #[test]
    fn test_restart_clears_field_and_score() {
        let mut state = playing_state(7);
        state.time_ticks = 400;
        state.phase = GamePhase::GameOver;
        state.rings.push(Ring {
            center: Vec2::ZERO,
            radius: 10.0,
            max_radius: 200.0,
            speed: 2.0,
        });
        let input = TickInput {
            action: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score(), 0);
        assert!(state.rings.is_empty());
        assert_eq!(state.pos, BOUNDS * 0.5);
    }

    #[test]
    fn test_determinism_same_seed() {
        let mut a = playing_state(99);
        let mut b = playing_state(99);
        for _ in 0..500 {
            tick(&mut a, &TickInput::default());
            tick(&mut b, &TickInput::default());
        }
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.rings.len(), b.rings.len());
        for (x, y) in a.rings.iter().zip(&b.rings) {
            assert_eq!(x.center, y.center);
            assert_eq!(x.radius, y.radius);
        }
    }
}
