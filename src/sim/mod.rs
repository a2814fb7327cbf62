//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one `tick` call = one frame at 60 Hz)
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! Delayed effects go through [`schedule::EventQueue`], drained at the head of
//! each Playing tick, so nothing can mutate a session after it left Playing.

pub mod collision;
pub mod drift;
pub mod encounter;
pub mod flux;
pub mod pulse;
pub mod racer;
pub mod schedule;
pub mod swarm;

pub use collision::{Rect, circles_overlap, within_radius};
pub use schedule::EventQueue;

use glam::Vec2;

/// Session lifecycle shared by every game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Waiting on the title overlay for the first start input
    #[default]
    Start,
    /// Active gameplay
    Playing,
    /// Session ended; waiting for a restart input
    GameOver,
}

/// Input commands for a single tick (deterministic)
///
/// `held_*` are level-triggered and mirror the latch each frame. `press_*`,
/// `action` and `dash` are one-shot edges cleared by the driver after the
/// first substep so they apply exactly once per physical press.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub held_left: bool,
    pub held_right: bool,
    pub held_up: bool,
    pub held_down: bool,
    pub press_left: bool,
    pub press_right: bool,
    pub press_up: bool,
    pub press_down: bool,
    /// Space edge: start/restart, or polarity toggle while playing
    pub action: bool,
    /// Shift edge
    pub dash: bool,
    /// Pointer position in canvas coordinates, if the pointer has moved
    pub pointer: Option<Vec2>,
}

impl TickInput {
    /// Clear the one-shot edges, keeping held state and pointer
    pub fn clear_edges(&mut self) {
        self.press_left = false;
        self.press_right = false;
        self.press_up = false;
        self.press_down = false;
        self.action = false;
        self.dash = false;
    }

    /// Horizontal input direction. Right overwrites left when both are held;
    /// the tie-break is implementation-defined, not a contract.
    pub fn direction_x(&self) -> f32 {
        if self.held_right {
            1.0
        } else if self.held_left {
            -1.0
        } else {
            0.0
        }
    }
}
