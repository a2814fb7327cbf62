//! Platformer state and entity records

use std::ops::Range;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::sim::collision::Rect;
use crate::sim::{EventQueue, GamePhase};

/// Logical arena size; the canvas is sized to match
pub const ARENA_SIZE: Vec2 = Vec2::new(800.0, 600.0);

pub const PLAYER_SIZE: Vec2 = Vec2::new(30.0, 30.0);
pub const PLAYER_SPAWN: Vec2 = Vec2::new(100.0, 450.0);

/// Horizontal acceleration per tick while a direction is held
pub const RUN_ACCEL: f32 = 1.5;
/// Multiplicative horizontal damping per tick
pub const FRICTION: f32 = 0.8;
/// Downward acceleration per tick
pub const GRAVITY: f32 = 0.6;
/// Upward impulse for a grounded jump
pub const JUMP_IMPULSE: f32 = -12.0;
/// Reduced impulse for the mid-air jump
pub const DOUBLE_JUMP_IMPULSE: f32 = -9.0;

/// Horizontal speed snapped in while dashing
pub const DASH_SPEED: f32 = 14.0;
/// How long a dash suspends gravity
pub const DASH_DURATION_TICKS: u64 = 12;
/// Ticks until the next dash is available
pub const DASH_COOLDOWN_TICKS: u32 = 45;

/// Horizontal inset applied to the player when testing platform overlap
pub const PLATFORM_INSET: f32 = 2.0;
/// Center-to-center pickup distance
pub const PICKUP_RADIUS: f32 = 30.0;
/// Delay before a collected pickup relocates and reappears
pub const RESPAWN_DELAY_TICKS: u64 = 60;
/// Where relocated pickups may land, kept clear of the arena edges
pub const FLUX_RESPAWN_AREA: (Range<f32>, Range<f32>) = (50.0..750.0, 100.0..500.0);

/// Two-valued global toggle gating which non-static platforms are solid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    #[default]
    Alpha,
    Beta,
}

impl Polarity {
    pub fn toggled(self) -> Self {
        match self {
            Polarity::Alpha => Polarity::Beta,
            Polarity::Beta => Polarity::Alpha,
        }
    }
}

/// Platform gating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    /// Always solid
    Static,
    /// Solid only while the session polarity matches
    Polar(Polarity),
}

/// A fixed platform; immutable after creation
#[derive(Debug, Clone, Copy)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
}

impl Platform {
    pub fn new(x: f32, y: f32, w: f32, h: f32, kind: PlatformKind) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            kind,
        }
    }

    /// Collidable under the given session polarity
    pub fn is_solid(&self, current: Polarity) -> bool {
        match self.kind {
            PlatformKind::Static => true,
            PlatformKind::Polar(p) => p == current,
        }
    }
}

/// The player's kinematic state. Mutated only by [`super::tick`].
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub grounded: bool,
    /// A grounded jump arms this; consumed by the mid-air jump
    pub double_jump: bool,
    pub dashing: bool,
    /// Ticks until the next dash; 0 means available
    pub dash_cooldown: u32,
    /// Last movement direction, ±1
    pub facing: f32,
}

impl Player {
    pub fn spawn() -> Self {
        Self {
            pos: PLAYER_SPAWN,
            vel: Vec2::ZERO,
            size: PLAYER_SIZE,
            grounded: false,
            double_jump: false,
            dashing: false,
            dash_cooldown: 0,
            facing: 1.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }
}

/// A timed-respawn pickup; the same entity relocates rather than despawning
#[derive(Debug, Clone, Copy)]
pub struct Collectible {
    pub pos: Vec2,
    pub collected: bool,
}

/// Delayed effects owned by the session's event queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluxEvent {
    DashEnd,
    Respawn { index: usize },
}

/// Complete platformer session state
#[derive(Debug, Clone)]
pub struct FluxState {
    pub phase: GamePhase,
    pub polarity: Polarity,
    pub score: u64,
    pub time_ticks: u64,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub collectibles: Vec<Collectible>,
    pub events: EventQueue<FluxEvent>,
    pub rng: Pcg32,
}

impl FluxState {
    pub fn new(seed: u64) -> Self {
        Self {
            phase: GamePhase::Start,
            polarity: Polarity::default(),
            score: 0,
            time_ticks: 0,
            player: Player::spawn(),
            platforms: default_platforms(),
            collectibles: default_collectibles(),
            events: EventQueue::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Reset the session and enter Playing. The RNG stream carries over so a
    /// session remains reproducible from its construction seed.
    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.polarity = Polarity::default();
        self.score = 0;
        self.time_ticks = 0;
        self.player = Player::spawn();
        self.collectibles = default_collectibles();
        self.events.clear();
    }
}

/// Fixed course layout: a static floor plus alternating polarity steps
fn default_platforms() -> Vec<Platform> {
    use PlatformKind::{Polar, Static};
    use Polarity::{Alpha, Beta};
    vec![
        Platform::new(0.0, 550.0, 800.0, 50.0, Static),
        Platform::new(200.0, 400.0, 150.0, 20.0, Polar(Alpha)),
        Platform::new(450.0, 300.0, 150.0, 20.0, Polar(Beta)),
        Platform::new(200.0, 200.0, 150.0, 20.0, Polar(Alpha)),
        Platform::new(500.0, 150.0, 100.0, 20.0, Polar(Beta)),
    ]
}

fn default_collectibles() -> Vec<Collectible> {
    vec![Collectible {
        pos: Vec2::new(530.0, 100.0),
        collected: false,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_solid_under_both_polarities() {
        let floor = Platform::new(0.0, 550.0, 800.0, 50.0, PlatformKind::Static);
        assert!(floor.is_solid(Polarity::Alpha));
        assert!(floor.is_solid(Polarity::Beta));
    }

    #[test]
    fn test_polar_solid_only_when_matching() {
        let step = Platform::new(200.0, 400.0, 150.0, 20.0, PlatformKind::Polar(Polarity::Alpha));
        assert!(step.is_solid(Polarity::Alpha));
        assert!(!step.is_solid(Polarity::Beta));

        let other = Platform::new(450.0, 300.0, 150.0, 20.0, PlatformKind::Polar(Polarity::Beta));
        assert!(!other.is_solid(Polarity::Alpha));
        assert!(other.is_solid(Polarity::Beta));
    }

    #[test]
    fn test_polarity_toggle_round_trip() {
        let p = Polarity::Alpha;
        assert_eq!(p.toggled(), Polarity::Beta);
        assert_eq!(p.toggled().toggled(), Polarity::Alpha);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = FluxState::new(7);
        state.phase = GamePhase::Playing;
        state.score = 12;
        state.time_ticks = 999;
        state.polarity = Polarity::Beta;
        state.player.pos = Vec2::new(400.0, 20.0);
        state.player.vel = Vec2::new(3.0, -4.0);
        state.collectibles[0].collected = true;
        state.events.schedule(1000, FluxEvent::DashEnd);

        state.restart();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.polarity, Polarity::Alpha);
        assert_eq!(state.player.pos, PLAYER_SPAWN);
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert!(!state.collectibles[0].collected);
        assert!(state.events.is_empty());
    }
}
