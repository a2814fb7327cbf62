//! Particle avoidance
//!
//! The only pointer-driven game: the player eases toward the cursor while
//! fragments spawn on the screen edges and home in on where the player was
//! when they spawned. Contact ends the session with a decorative burst.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::ease_toward;
use crate::sim::{GamePhase, TickInput, circles_overlap};

pub const PLAYER_RADIUS: f32 = 15.0;
/// Per-tick catch-up fraction toward the pointer
pub const FOLLOW_FRAC: f32 = 0.15;

pub const FRAGMENT_COUNT: usize = 15;
pub const FRAGMENT_MIN_SIZE: f32 = 10.0;
pub const FRAGMENT_EXTRA_SIZE: f32 = 15.0;
/// Base speed plus up to this much random spread
pub const FRAGMENT_BASE_SPEED: f32 = 2.0;
pub const FRAGMENT_EXTRA_SPEED: f32 = 4.0;
/// Extra speed per point of score at spawn time
pub const FRAGMENT_SPEED_PER_POINT: f32 = 0.02;
/// Fragments spawn this far outside the bounds
pub const SPAWN_MARGIN: f32 = 50.0;
/// And are recycled once this far outside
pub const EXIT_MARGIN: f32 = 100.0;

/// Sparks emitted when the player is caught
pub const BURST_SPARKS: usize = 10;
pub const SPARK_MAX_SPEED: f32 = 5.0;

/// One survival point per this many ticks
pub const TICKS_PER_POINT: u64 = 10;

/// A homing square, drawn edge-length `size` with `pos` its top-left corner
#[derive(Debug, Clone, Copy)]
pub struct Fragment {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Fragment {
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size * 0.5)
    }
}

/// Death-burst particle; purely visual, frozen once the session ends
#[derive(Debug, Clone, Copy)]
pub struct Spark {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32,
}

#[derive(Debug, Clone)]
pub struct SwarmState {
    pub phase: GamePhase,
    pub time_ticks: u64,
    pub bounds: Vec2,
    pub pos: Vec2,
    pub target: Vec2,
    pub fragments: Vec<Fragment>,
    pub sparks: Vec<Spark>,
    pub rng: Pcg32,
}

impl SwarmState {
    pub fn new(seed: u64, bounds: Vec2) -> Self {
        let mut state = Self {
            phase: GamePhase::Start,
            time_ticks: 0,
            bounds,
            pos: bounds * 0.5,
            target: bounds * 0.5,
            fragments: Vec::new(),
            sparks: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        state.spawn_field();
        state
    }

    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.pos = self.bounds * 0.5;
        self.target = self.bounds * 0.5;
        self.sparks.clear();
        self.spawn_field();
    }

    pub fn score(&self) -> u64 {
        self.time_ticks / TICKS_PER_POINT
    }

    fn spawn_field(&mut self) {
        self.fragments.clear();
        for _ in 0..FRAGMENT_COUNT {
            let fragment = spawn_fragment(&mut self.rng, self.bounds, self.pos, 0);
            self.fragments.push(fragment);
        }
    }
}

/// New fragment on a random edge, aimed at `aim` with score-scaled speed
fn spawn_fragment(rng: &mut Pcg32, bounds: Vec2, aim: Vec2, score: u64) -> Fragment {
    let pos = match rng.random_range(0..4u8) {
        0 => Vec2::new(rng.random_range(0.0..bounds.x), -SPAWN_MARGIN),
        1 => Vec2::new(bounds.x + SPAWN_MARGIN, rng.random_range(0.0..bounds.y)),
        2 => Vec2::new(rng.random_range(0.0..bounds.x), bounds.y + SPAWN_MARGIN),
        _ => Vec2::new(-SPAWN_MARGIN, rng.random_range(0.0..bounds.y)),
    };
    let speed = FRAGMENT_BASE_SPEED
        + rng.random_range(0.0..FRAGMENT_EXTRA_SPEED)
        + score as f32 * FRAGMENT_SPEED_PER_POINT;
    let dir = (aim - pos).normalize_or_zero();
    Fragment {
        pos,
        vel: dir * speed,
        size: FRAGMENT_MIN_SIZE + rng.random_range(0.0..FRAGMENT_EXTRA_SIZE),
    }
}

/// Advance the swarm by one frame
pub fn tick(state: &mut SwarmState, input: &TickInput) {
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

    if let Some(pointer) = input.pointer {
        state.target = pointer;
    }
    state.pos = ease_toward(state.pos, state.target, FOLLOW_FRAC);

    // Move fragments; recycle the ones that overshot past the exit margin
    let score = state.score();
    for index in 0..state.fragments.len() {
        let fragment = &mut state.fragments[index];
        fragment.pos += fragment.vel;

        let out = fragment.pos.x < -EXIT_MARGIN
            || fragment.pos.x > state.bounds.x + EXIT_MARGIN
            || fragment.pos.y < -EXIT_MARGIN
            || fragment.pos.y > state.bounds.y + EXIT_MARGIN;
        if out {
            state.fragments[index] = spawn_fragment(&mut state.rng, state.bounds, state.pos, score);
        }
    }

    for index in 0..state.fragments.len() {
        let fragment = state.fragments[index];
        if circles_overlap(
            state.pos,
            PLAYER_RADIUS,
            fragment.center(),
            fragment.size * 0.5,
        ) {
            burst(state);
            state.phase = GamePhase::GameOver;
            return;
        }
    }
}

/// One-shot spark burst at the player's final position
fn burst(state: &mut SwarmState) {
    for _ in 0..BURST_SPARKS {
        let vel = Vec2::new(
            state.rng.random_range(-SPARK_MAX_SPEED..SPARK_MAX_SPEED),
            state.rng.random_range(-SPARK_MAX_SPEED..SPARK_MAX_SPEED),
        );
        state.sparks.push(Spark {
            pos: state.pos,
            vel,
            life: 1.0,
        });
    }
}
