//! Platformer update step
//!
//! One call advances the session by exactly one frame. Outside Playing the
//! only effect is the restart edge; every timed effect (dash end, pickup
//! respawn) fires from the event queue at the head of the tick.

use glam::Vec2;
use rand::Rng;

use super::state::{
    ARENA_SIZE, DASH_COOLDOWN_TICKS, DASH_DURATION_TICKS, DASH_SPEED, DOUBLE_JUMP_IMPULSE,
    FLUX_RESPAWN_AREA, FRICTION, FluxEvent, FluxState, GRAVITY, JUMP_IMPULSE, PICKUP_RADIUS,
    PLATFORM_INSET, RESPAWN_DELAY_TICKS, RUN_ACCEL,
};
use crate::sim::collision::{swept_landing, within_radius};
use crate::sim::{GamePhase, TickInput};

/// Advance the platformer by one frame
pub fn tick(state: &mut FluxState, input: &TickInput) {
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

    // Timed effects fire before physics so a dash that expires this tick
    // feels gravity this tick
    for event in state.events.drain_due(state.time_ticks) {
        match event {
            FluxEvent::DashEnd => state.player.dashing = false,
            FluxEvent::Respawn { index } => {
                if let Some(pickup) = state.collectibles.get_mut(index) {
                    let (x_range, y_range) = FLUX_RESPAWN_AREA;
                    pickup.pos = Vec2::new(
                        state.rng.random_range(x_range),
                        state.rng.random_range(y_range),
                    );
                    pickup.collected = false;
                }
            }
        }
    }

    if state.player.dash_cooldown > 0 {
        state.player.dash_cooldown -= 1;
    }

    // Polarity toggle only exists while playing; on the overlays the same
    // key is the restart input handled above
    if input.action {
        state.polarity = state.polarity.toggled();
    }

    // Horizontal: accelerate toward the held direction, then damp. Right
    // overwrites left when both are held (implementation-defined tie-break).
    let dir = input.direction_x();
    if dir != 0.0 {
        state.player.facing = dir;
    }
    if !state.player.dashing {
        state.player.vel.x += RUN_ACCEL * dir;
        state.player.vel.x *= FRICTION;
    }

    // Dash: snap horizontal speed, level out, suspend gravity until the
    // queued end event fires
    if input.dash && !state.player.dashing && state.player.dash_cooldown == 0 {
        state.player.dashing = true;
        state.player.vel.x = state.player.facing * DASH_SPEED;
        state.player.vel.y = 0.0;
        state.player.dash_cooldown = DASH_COOLDOWN_TICKS;
        state
            .events
            .schedule(state.time_ticks + DASH_DURATION_TICKS, FluxEvent::DashEnd);
    }

    // Jump and double jump
    if input.press_up {
        if state.player.grounded {
            state.player.vel.y = JUMP_IMPULSE;
            state.player.grounded = false;
            state.player.double_jump = true;
        } else if state.player.double_jump {
            state.player.vel.y = DOUBLE_JUMP_IMPULSE;
            state.player.double_jump = false;
        }
    }

    if !state.player.dashing {
        state.player.vel.y += GRAVITY;
    }

    state.player.pos += state.player.vel;

    state.player.pos.x = state
        .player
        .pos
        .x
        .clamp(0.0, ARENA_SIZE.x - state.player.size.x);

    // Fall death ends the frame immediately
    if state.player.pos.y > ARENA_SIZE.y {
        state.phase = GamePhase::GameOver;
        return;
    }

    // Platform landing. Each solid platform is tested against the player's
    // current (possibly already snapped) rect; the last hit in iteration
    // order wins. Platforms are not expected to overlap.
    state.player.grounded = false;
    for platform in &state.platforms {
        if !platform.is_solid(state.polarity) {
            continue;
        }
        let rect = state.player.rect();
        if let Some(snap_y) = swept_landing(&rect, state.player.vel.y, &platform.rect, PLATFORM_INSET)
        {
            state.player.pos.y = snap_y;
            state.player.vel.y = 0.0;
            state.player.grounded = true;
            state.player.double_jump = false;
        }
    }

    // Pickups: collect now, schedule the relocation
    let player_center = state.player.center();
    let mut picked = Vec::new();
    for (index, pickup) in state.collectibles.iter_mut().enumerate() {
        if !pickup.collected && within_radius(player_center, pickup.pos, PICKUP_RADIUS) {
            pickup.collected = true;
            picked.push(index);
        }
    }
    for index in picked {
        state.score += 1;
        state.events.schedule(
            state.time_ticks + RESPAWN_DELAY_TICKS,
            FluxEvent::Respawn { index },
        );
    }
}
