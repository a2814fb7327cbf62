//! Asteroid-field dodging
//!
//! A rotating ship with thrust and drag survives among wrapping asteroids.
//! Score is survival time; any contact ends the session.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{GamePhase, TickInput, circles_overlap};
use crate::wrap_coord;

pub const SHIP_RADIUS: f32 = 15.0;
/// Heading change per tick while a turn key is held
pub const TURN_RATE: f32 = 0.1;
/// Acceleration along the heading per tick of thrust
pub const THRUST_ACCEL: f32 = 0.2;
/// Multiplicative velocity decay per coasting tick
pub const DRAG: f32 = 0.98;

pub const ASTEROID_COUNT: usize = 8;
/// Component speed range for freshly spawned asteroids
pub const ASTEROID_MAX_SPEED: f32 = 3.0;
pub const ASTEROID_MIN_RADIUS: f32 = 20.0;
pub const ASTEROID_MAX_RADIUS: f32 = 40.0;

/// One survival point per this many ticks
pub const TICKS_PER_POINT: u64 = 10;

/// The player's ship. Heading follows math convention: positive y on screen
/// points down, so thrust subtracts the sine.
#[derive(Debug, Clone, Copy)]
pub struct Ship {
    pub pos: Vec2,
    pub heading: f32,
    pub vel: Vec2,
}

#[derive(Debug, Clone, Copy)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone)]
pub struct DriftState {
    pub phase: GamePhase,
    pub time_ticks: u64,
    pub bounds: Vec2,
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub rng: Pcg32,
}

impl DriftState {
    pub fn new(seed: u64, bounds: Vec2) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let asteroids = (0..ASTEROID_COUNT)
            .map(|_| spawn_asteroid(&mut rng, bounds))
            .collect();
        Self {
            phase: GamePhase::Start,
            time_ticks: 0,
            bounds,
            ship: Ship {
                pos: bounds * 0.5,
                heading: 0.0,
                vel: Vec2::ZERO,
            },
            asteroids,
            rng,
        }
    }

    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.ship = Ship {
            pos: self.bounds * 0.5,
            heading: 0.0,
            vel: Vec2::ZERO,
        };
        self.asteroids = (0..ASTEROID_COUNT)
            .map(|_| spawn_asteroid(&mut self.rng, self.bounds))
            .collect();
    }

    /// Survival score shown on the HUD and reported on game over
    pub fn score(&self) -> u64 {
        self.time_ticks / TICKS_PER_POINT
    }
}

/// New asteroid on a random screen edge with uniform velocity and size
fn spawn_asteroid(rng: &mut Pcg32, bounds: Vec2) -> Asteroid {
    let pos = if rng.random_bool(0.5) {
        Vec2::new(
            if rng.random_bool(0.5) { 0.0 } else { bounds.x },
            rng.random_range(0.0..bounds.y),
        )
    } else {
        Vec2::new(
            rng.random_range(0.0..bounds.x),
            if rng.random_bool(0.5) { 0.0 } else { bounds.y },
        )
    };
    Asteroid {
        pos,
        vel: Vec2::new(
            rng.random_range(-ASTEROID_MAX_SPEED..ASTEROID_MAX_SPEED),
            rng.random_range(-ASTEROID_MAX_SPEED..ASTEROID_MAX_SPEED),
        ),
        radius: rng.random_range(ASTEROID_MIN_RADIUS..ASTEROID_MAX_RADIUS),
    }
}

/// Advance the asteroid field by one frame
pub fn tick(state: &mut DriftState, input: &TickInput) {
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

    if input.held_left {
        state.ship.heading += TURN_RATE;
    }
    if input.held_right {
        state.ship.heading -= TURN_RATE;
    }

    if input.held_up {
        state.ship.vel += Vec2::new(
            THRUST_ACCEL * state.ship.heading.cos(),
            -THRUST_ACCEL * state.ship.heading.sin(),
        );
    } else {
        state.ship.vel *= DRAG;
    }

    state.ship.pos += state.ship.vel;
    state.ship.pos.x = wrap_coord(state.ship.pos.x, state.bounds.x);
    state.ship.pos.y = wrap_coord(state.ship.pos.y, state.bounds.y);

    for asteroid in &mut state.asteroids {
        asteroid.pos += asteroid.vel;
        // Wrap with a radius margin so asteroids fully leave before re-entering
        let r = asteroid.radius;
        if asteroid.pos.x < -r {
            asteroid.pos.x = state.bounds.x + r;
        } else if asteroid.pos.x > state.bounds.x + r {
            asteroid.pos.x = -r;
        }
        if asteroid.pos.y < -r {
            asteroid.pos.y = state.bounds.y + r;
        } else if asteroid.pos.y > state.bounds.y + r {
            asteroid.pos.y = -r;
        }
    }

    for asteroid in &state.asteroids {
        if circles_overlap(state.ship.pos, SHIP_RADIUS, asteroid.pos, asteroid.radius) {
            state.phase = GamePhase::GameOver;
            return;
        }
    }
}
