//! Vertical lane dodging
//!
//! Obstacles fall down a fixed-width road, faster as the score climbs. An
//! obstacle that slips past the bottom edge scores a point; contact ends the
//! session.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::collision::Rect;
use crate::sim::{GamePhase, TickInput};

/// Logical road size; the canvas is sized to match
pub const ROAD_SIZE: Vec2 = Vec2::new(400.0, 600.0);

pub const CAR_SIZE: Vec2 = Vec2::new(30.0, 50.0);
/// Car x speed per tick while a direction is held
pub const CAR_SPEED: f32 = 7.0;
/// Lane the car starts in, bottom center
pub const CAR_SPAWN: Vec2 = Vec2::new(ROAD_SIZE.x * 0.5 - CAR_SIZE.x * 0.5, ROAD_SIZE.y - 100.0);

pub const OBSTACLE_SIZE: Vec2 = Vec2::new(50.0, 30.0);
/// Ticks between obstacle spawns
pub const SPAWN_INTERVAL_TICKS: u64 = 40;
/// Fall speed before the score bonus
pub const BASE_FALL_SPEED: f32 = 5.0;
/// Extra fall speed per point of score
pub const FALL_SPEED_PER_POINT: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct RacerState {
    pub phase: GamePhase,
    pub score: u64,
    pub time_ticks: u64,
    pub car: Rect,
    pub obstacles: Vec<Rect>,
    pub rng: Pcg32,
}

impl RacerState {
    pub fn new(seed: u64) -> Self {
        Self {
            phase: GamePhase::Start,
            score: 0,
            time_ticks: 0,
            car: Rect {
                pos: CAR_SPAWN,
                size: CAR_SIZE,
            },
            obstacles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.time_ticks = 0;
        self.car.pos = CAR_SPAWN;
        self.obstacles.clear();
    }
}

/// Advance the road by one frame
pub fn tick(state: &mut RacerState, input: &TickInput) {
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

    let max_x = ROAD_SIZE.x - state.car.size.x;
    if input.held_left {
        state.car.pos.x -= CAR_SPEED;
    }
    if input.held_right {
        state.car.pos.x += CAR_SPEED;
    }
    state.car.pos.x = state.car.pos.x.clamp(0.0, max_x);

    if state.time_ticks.is_multiple_of(SPAWN_INTERVAL_TICKS) {
        let x = state.rng.random_range(0.0..ROAD_SIZE.x - OBSTACLE_SIZE.x);
        state.obstacles.push(Rect {
            pos: Vec2::new(x, -OBSTACLE_SIZE.y),
            size: OBSTACLE_SIZE,
        });
    }

    let fall_speed = BASE_FALL_SPEED + state.score as f32 * FALL_SPEED_PER_POINT;
    for obstacle in &mut state.obstacles {
        obstacle.pos.y += fall_speed;
    }

    for obstacle in &state.obstacles {
        if state.car.overlaps(obstacle) {
            state.phase = GamePhase::GameOver;
            return;
        }
    }

    // Obstacles that cleared the bottom edge score and despawn
    let before = state.obstacles.len();
    state.obstacles.retain(|obstacle| obstacle.top() <= ROAD_SIZE.y);
    state.score += (before - state.obstacles.len()) as u64;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_state(seed: u64) -> RacerState {
        let mut state = RacerState::new(seed);
        state.restart();
        state
    }

    #[test]
    fn test_noop_outside_playing() {
        let mut state = RacerState::new(1);
        let input = TickInput {
            held_left: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.car.pos, CAR_SPAWN);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_car_clamped_to_road() {
        let mut state = playing_state(2);
        let left = TickInput {
            held_left: true,
            ..Default::default()
        };
        for _ in 0..SPAWN_INTERVAL_TICKS - 5 {
            tick(&mut state, &left);
        }
        assert_eq!(state.car.pos.x, 0.0);
    }

    #[test]
    fn test_spawn_cadence() {
        let mut state = playing_state(3);
        for _ in 0..SPAWN_INTERVAL_TICKS - 1 {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.obstacles.is_empty());
        tick(&mut state, &TickInput::default());
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn test_passed_obstacle_scores_and_despawns() {
        let mut state = playing_state(4);
        state.obstacles.push(Rect {
            pos: Vec2::new(0.0, ROAD_SIZE.y - 1.0),
            size: OBSTACLE_SIZE,
        });
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 1);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_contact_ends_session_without_scoring() {
        let mut state = playing_state(5);
        state.obstacles.push(Rect {
            pos: state.car.pos - Vec2::new(0.0, OBSTACLE_SIZE.y - 1.0),
            size: OBSTACLE_SIZE,
        });
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 0);

        // Dead road is frozen
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn test_fall_speed_scales_with_score() {
        let mut state = playing_state(6);
        state.score = 10;
        state.obstacles.push(Rect {
            pos: Vec2::new(300.0, 100.0),
            size: OBSTACLE_SIZE,
        });
        tick(&mut state, &TickInput::default());
        let expected = 100.0 + BASE_FALL_SPEED + 10.0 * FALL_SPEED_PER_POINT;
        assert!((state.obstacles[0].pos.y - expected).abs() < 1e-4);
    }

    #[test]
    fn test_restart_clears_road() {
        let mut state = playing_state(7);
        state.phase = GamePhase::GameOver;
        state.score = 9;
        state.obstacles.push(Rect {
            pos: Vec2::new(10.0, 10.0),
            size: OBSTACLE_SIZE,
        });
        let input = TickInput {
            action: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.car.pos, CAR_SPAWN);
    }
}
