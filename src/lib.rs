//! Neon Arcade - a pack of single-player browser minigames
//!
//! Core modules:
//! - `sim`: Deterministic simulation for every game (physics, collisions, state)
//! - `input`: Persistent key latch with fresh-press edge detection
//! - `render`: 2D canvas rendering (wasm only)
//! - `notify`: Fire-and-forget game-over report to an embedding frame

pub mod input;
pub mod notify;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod sim;

pub use input::{InputLatch, Key};
pub use notify::GameReport;

use glam::Vec2;

/// Shared loop configuration
pub mod consts {
    /// Fixed simulation timestep. All per-tick constants in the game modules
    /// assume this rate.
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
}

/// Move `current` a fraction of the way toward `target`.
///
/// Exponential easing used by the pointer and grid followers; `frac` is the
/// per-tick catch-up fraction in [0, 1].
#[inline]
pub fn ease_toward(current: Vec2, target: Vec2, frac: f32) -> Vec2 {
    current + (target - current) * frac
}

/// Wrap a coordinate across [0, extent], teleporting to the opposite edge
#[inline]
pub fn wrap_coord(value: f32, extent: f32) -> f32 {
    if value < 0.0 {
        extent
    } else if value > extent {
        0.0
    } else {
        value
    }
}
