//! Battle-menu parody
//!
//! An overworld of two linked rooms where walking the corridor risks a random
//! encounter. Battles drop the player into a bullet box as a small heart:
//! survive the whole battle to spare the enemy and score, get clipped and
//! flee at the cost of one point of resolve. Out of resolve, the session
//! ends.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::collision::Rect;
use crate::sim::{GamePhase, TickInput, within_radius};

/// Logical view size; the canvas is sized to match
pub const VIEW_SIZE: Vec2 = Vec2::new(640.0, 480.0);

pub const WALK_SPEED: f32 = 4.0;
pub const PLAYER_SIZE: f32 = 20.0;
pub const OVERWORLD_SPAWN: Vec2 = Vec2::new(300.0, 350.0);

/// The bullet box outline
pub const BATTLE_BOX: Rect = Rect {
    pos: Vec2::new(210.0, 200.0),
    size: Vec2::new(220.0, 200.0),
};
pub const HEART_SPEED: f32 = 3.0;
pub const HEART_RADIUS: f32 = 8.0;
pub const HEART_SPAWN: Vec2 = Vec2::new(310.0, 300.0);

pub const BULLET_SPEED: f32 = 4.0;
/// Bullet spawn probability per battle tick
pub const BULLET_SPAWN_CHANCE: f64 = 0.05;
pub const BULLET_HIT_RADIUS: f32 = 10.0;
/// Surviving this many battle ticks spares the enemy
pub const BATTLE_DURATION_TICKS: u64 = 500;

/// Chance per corridor-walking tick of triggering a battle
pub const ENCOUNTER_CHANCE: f64 = 0.01;
/// Hits the player can take before the session ends
pub const STARTING_RESOLVE: u32 = 3;

/// Overworld rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Room {
    /// Safe starting room
    Garden,
    /// Walking this one vertically risks an encounter
    Corridor,
}

/// Scene nested inside a Playing session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Overworld,
    Battle,
}

#[derive(Debug, Clone, Copy)]
pub struct Bullet {
    pub pos: Vec2,
    pub vy: f32,
}

#[derive(Debug, Clone)]
pub struct EncounterState {
    pub phase: GamePhase,
    /// Enemies spared
    pub score: u64,
    pub time_ticks: u64,
    pub scene: Scene,
    pub room: Room,
    /// Overworld position
    pub pos: Vec2,
    /// Heart position while in battle
    pub heart: Vec2,
    pub bullets: Vec<Bullet>,
    pub battle_ticks: u64,
    pub resolve: u32,
    pub rng: Pcg32,
}

impl EncounterState {
    pub fn new(seed: u64) -> Self {
        Self {
            phase: GamePhase::Start,
            score: 0,
            time_ticks: 0,
            scene: Scene::Overworld,
            room: Room::Garden,
            pos: OVERWORLD_SPAWN,
            heart: HEART_SPAWN,
            bullets: Vec::new(),
            battle_ticks: 0,
            resolve: STARTING_RESOLVE,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.time_ticks = 0;
        self.scene = Scene::Overworld;
        self.room = Room::Garden;
        self.pos = OVERWORLD_SPAWN;
        self.heart = HEART_SPAWN;
        self.bullets.clear();
        self.battle_ticks = 0;
        self.resolve = STARTING_RESOLVE;
    }

    fn enter_battle(&mut self) {
        self.scene = Scene::Battle;
        self.heart = HEART_SPAWN;
        self.bullets.clear();
        self.battle_ticks = 0;
    }
}

/// Advance the parody by one frame
pub fn tick(state: &mut EncounterState, input: &TickInput) {
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

    match state.scene {
        Scene::Overworld => overworld_tick(state, input),
        Scene::Battle => battle_tick(state, input),
    }
}

fn overworld_tick(state: &mut EncounterState, input: &TickInput) {
    if input.held_up {
        state.pos.y -= WALK_SPEED;
    }
    if input.held_down {
        state.pos.y += WALK_SPEED;
    }
    if input.held_left {
        state.pos.x -= WALK_SPEED;
    }
    if input.held_right {
        state.pos.x += WALK_SPEED;
    }

    match state.room {
        Room::Garden => {
            // Top exit into the corridor
            if state.pos.y < 0.0 {
                state.room = Room::Corridor;
                state.pos.y = VIEW_SIZE.y - 30.0;
            }
        }
        Room::Corridor => {
            // Bottom exit back to the garden
            if state.pos.y > VIEW_SIZE.y {
                state.room = Room::Garden;
                state.pos.y = 20.0;
                return;
            }
            let walking = input.held_up || input.held_down;
            if walking && state.rng.random_bool(ENCOUNTER_CHANCE) {
                state.enter_battle();
            }
        }
    }
}

fn battle_tick(state: &mut EncounterState, input: &TickInput) {
    if input.held_up {
        state.heart.y -= HEART_SPEED;
    }
    if input.held_down {
        state.heart.y += HEART_SPEED;
    }
    if input.held_left {
        state.heart.x -= HEART_SPEED;
    }
    if input.held_right {
        state.heart.x += HEART_SPEED;
    }
    let margin = HEART_RADIUS + 2.0;
    state.heart = state.heart.clamp(
        BATTLE_BOX.pos + Vec2::splat(margin),
        BATTLE_BOX.pos + BATTLE_BOX.size - Vec2::splat(margin),
    );

    if state.rng.random_bool(BULLET_SPAWN_CHANCE) {
        let x = state
            .rng
            .random_range(BATTLE_BOX.left()..BATTLE_BOX.right());
        state.bullets.push(Bullet {
            pos: Vec2::new(x, BATTLE_BOX.top() - 20.0),
            vy: BULLET_SPEED,
        });
    }

    let mut hit = false;
    for bullet in &mut state.bullets {
        bullet.pos.y += bullet.vy;
        if within_radius(state.heart, bullet.pos, BULLET_HIT_RADIUS) {
            hit = true;
        }
    }
    state
        .bullets
        .retain(|bullet| bullet.pos.y <= BATTLE_BOX.bottom());

    if hit {
        // Took damage and fled
        state.resolve = state.resolve.saturating_sub(1);
        if state.resolve == 0 {
            state.phase = GamePhase::GameOver;
        } else {
            state.scene = Scene::Overworld;
        }
        return;
    }

    state.battle_ticks += 1;
    if state.battle_ticks >= BATTLE_DURATION_TICKS {
        // Spared the enemy
        state.score += 1;
        state.scene = Scene::Overworld;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_state(seed: u64) -> EncounterState {
        let mut state = EncounterState::new(seed);
        state.restart();
        state
    }

    fn battle_state(seed: u64) -> EncounterState {
        let mut state = playing_state(seed);
        state.enter_battle();
        state
    }

    #[test]
    fn test_noop_outside_playing() {
        let mut state = EncounterState::new(1);
        let input = TickInput {
            held_up: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.pos, OVERWORLD_SPAWN);
    }

    #[test]
    fn test_room_transitions_both_ways() {
        let mut state = playing_state(2);
        state.pos.y = 2.0;
        let up = TickInput {
            held_up: true,
            ..Default::default()
        };
        tick(&mut state, &up);
        assert_eq!(state.room, Room::Corridor);
        assert_eq!(state.pos.y, VIEW_SIZE.y - 30.0);

        state.pos.y = VIEW_SIZE.y - 2.0;
        let down = TickInput {
            held_down: true,
            ..Default::default()
        };
        tick(&mut state, &down);
        assert_eq!(state.room, Room::Garden);
        assert_eq!(state.pos.y, 20.0);
    }

    #[test]
    fn test_corridor_walking_eventually_triggers_battle() {
        let mut state = playing_state(3);
        state.room = Room::Corridor;
        state.pos = Vec2::new(300.0, 240.0);
        let up_down = [
            TickInput {
                held_up: true,
                ..Default::default()
            },
            TickInput {
                held_down: true,
                ..Default::default()
            },
        ];
        let mut entered = false;
        for i in 0..2000 {
            tick(&mut state, &up_down[i % 2]);
            if state.scene == Scene::Battle {
                entered = true;
                break;
            }
        }
        assert!(entered, "1% chance per walking tick never fired in 2000 ticks");
        assert_eq!(state.heart, HEART_SPAWN);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_standing_still_never_triggers_battle() {
        let mut state = playing_state(4);
        state.room = Room::Corridor;
        state.pos = Vec2::new(300.0, 240.0);
        for _ in 0..2000 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.scene, Scene::Overworld);
    }

    #[test]
    fn test_heart_confined_to_box() {
        let mut state = battle_state(5);
        let left = TickInput {
            held_left: true,
            ..Default::default()
        };
        for _ in 0..100 {
            tick(&mut state, &left);
            if state.phase != GamePhase::Playing || state.scene != Scene::Battle {
                break;
            }
            assert!(state.heart.x >= BATTLE_BOX.left());
            assert!(state.heart.x <= BATTLE_BOX.right());
        }
    }

    #[test]
    fn test_bullet_hit_costs_resolve_and_flees() {
        let mut state = battle_state(6);
        state.bullets.push(Bullet {
            pos: state.heart - Vec2::new(0.0, BULLET_SPEED),
            vy: BULLET_SPEED,
        });
        tick(&mut state, &TickInput::default());
        assert_eq!(state.resolve, STARTING_RESOLVE - 1);
        assert_eq!(state.scene, Scene::Overworld);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_out_of_resolve_ends_session() {
        let mut state = battle_state(7);
        state.resolve = 1;
        state.bullets.push(Bullet {
            pos: state.heart - Vec2::new(0.0, BULLET_SPEED),
            vy: BULLET_SPEED,
        });
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);

        // Frozen after death
        let score = state.score;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, score);
    }

    #[test]
    fn test_survival_spares_and_scores() {
        let mut state = battle_state(8);
        // Two ticks from a spare; fresh bullets spawn at the box top and
        // cannot cross to the heart in that time
        state.battle_ticks = BATTLE_DURATION_TICKS - 2;
        state.bullets.clear();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.scene, Scene::Battle);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.scene, Scene::Overworld);
        assert_eq!(state.score, 1);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_restart_restores_resolve_and_room() {
        let mut state = playing_state(9);
        state.phase = GamePhase::GameOver;
        state.resolve = 0;
        state.room = Room::Corridor;
        state.score = 4;
        let input = TickInput {
            action: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.resolve, STARTING_RESOLVE);
        assert_eq!(state.room, Room::Garden);
        assert_eq!(state.score, 0);
        assert_eq!(state.pos, OVERWORLD_SPAWN);
    }
}
