//! Phase-shift platformer
//!
//! The most involved of the minigames: platforms are gated behind a global
//! two-valued polarity the player toggles mid-air, with jump/double-jump/dash
//! movement and a single collectible that respawns on a timer.

pub mod state;
pub mod tick;

pub use state::{
    Collectible, FluxEvent, FluxState, Platform, PlatformKind, Player, Polarity, ARENA_SIZE,
};
pub use tick::tick;
