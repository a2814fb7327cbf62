//! Per-game scene drawing
//!
//! One draw function per game, plus the shared phase overlay. Later draws
//! occlude earlier ones; nothing here touches simulation state.

use glam::Vec2;

use super::Surface;
use crate::sim::GamePhase;
use crate::sim::drift::{DriftState, SHIP_RADIUS};
use crate::sim::encounter::{BATTLE_BOX, EncounterState, HEART_RADIUS, Room, Scene, VIEW_SIZE};
use crate::sim::flux::{FluxState, PlatformKind, Polarity};
use crate::sim::pulse::PulseState;
use crate::sim::racer::RacerState;
use crate::sim::swarm::{PLAYER_RADIUS, SwarmState};

const TITLE_FONT: &str = "48px 'Courier New', monospace";
const BODY_FONT: &str = "20px 'Courier New', monospace";
const HUD_FONT: &str = "16px 'Courier New', monospace";

/// Translucent full-viewport overlay with state-specific text. Drawn last,
/// whenever the session is not in active play.
pub fn phase_overlay(surface: &Surface, phase: GamePhase, title: &str, hint: &str, score: u64) {
    let size = surface.size();
    let center = size * 0.5;
    surface.clear("rgba(0, 0, 0, 0.65)");
    match phase {
        GamePhase::Playing => {}
        GamePhase::Start => {
            surface.text_centered(title, center - Vec2::new(0.0, 40.0), TITLE_FONT, "#fff");
            surface.text_centered(hint, center + Vec2::new(0.0, 10.0), BODY_FONT, "#aaa");
            surface.text_centered(
                "Press Space to start",
                center + Vec2::new(0.0, 50.0),
                BODY_FONT,
                "#fff",
            );
        }
        GamePhase::GameOver => {
            surface.text_centered("GAME OVER", center - Vec2::new(0.0, 40.0), TITLE_FONT, "#fff");
            surface.text_centered(
                &format!("Score: {score}"),
                center + Vec2::new(0.0, 10.0),
                BODY_FONT,
                "#fff",
            );
            surface.text_centered(
                "Press Space to retry",
                center + Vec2::new(0.0, 50.0),
                BODY_FONT,
                "#aaa",
            );
        }
    }
}

pub fn draw_flux(surface: &Surface, state: &FluxState) {
    surface.clear("#000510");

    for platform in &state.platforms {
        let (color, glow) = match platform.kind {
            PlatformKind::Static => ("#444", 0.0),
            PlatformKind::Polar(Polarity::Alpha) => {
                if state.polarity == Polarity::Alpha {
                    ("#0ff", 15.0)
                } else {
                    ("#044", 0.0)
                }
            }
            PlatformKind::Polar(Polarity::Beta) => {
                if state.polarity == Polarity::Beta {
                    ("#f0f", 15.0)
                } else {
                    ("#404", 0.0)
                }
            }
        };
        surface.fill_rect(platform.rect.pos, platform.rect.size, color, glow);
    }

    for pickup in &state.collectibles {
        if !pickup.collected {
            surface.fill_circle(pickup.pos, 8.0, "#fff", 20.0);
        }
    }

    surface.fill_rect(state.player.pos, state.player.size, "#fff", 10.0);

    if state.phase != GamePhase::Playing {
        phase_overlay(
            surface,
            state.phase,
            "FLUX",
            "Arrows move, Space shifts polarity, Shift dashes",
            state.score,
        );
    }
}

pub fn draw_drift(surface: &Surface, state: &DriftState) {
    surface.clear("#000");

    let ship = &state.ship;
    let (sin, cos) = ship.heading.sin_cos();
    let r = SHIP_RADIUS;
    let tip = ship.pos + Vec2::new(r * cos, -r * sin);
    let rear_left = ship.pos + Vec2::new(-r * (cos + sin), r * (sin - cos));
    let rear_right = ship.pos + Vec2::new(-r * (cos - sin), r * (sin + cos));
    surface.stroke_triangle(tip, rear_left, rear_right, "#fff", 2.0, 10.0);

    for asteroid in &state.asteroids {
        surface.stroke_circle(asteroid.pos, asteroid.radius, "#ff4444", 2.0, 10.0);
    }

    surface.text(
        &format!("SCORE {}", state.score()),
        Vec2::new(20.0, 30.0),
        HUD_FONT,
        "#fff",
    );

    if state.phase != GamePhase::Playing {
        phase_overlay(
            surface,
            state.phase,
            "DRIFT",
            "Arrows steer and thrust; do not touch the rocks",
            state.score(),
        );
    }
}

pub fn draw_pulse(surface: &Surface, state: &PulseState) {
    // Translucent fill leaves a motion trail instead of a hard clear
    surface.clear("rgba(10, 0, 10, 0.15)");

    let size = surface.size();
    let grid = "rgba(0, 242, 255, 0.05)";
    let mut x = 0.0;
    while x < size.x {
        surface.line(Vec2::new(x, 0.0), Vec2::new(x, size.y), grid, 1.0);
        x += 60.0;
    }
    let mut y = 0.0;
    while y < size.y {
        surface.line(Vec2::new(0.0, y), Vec2::new(size.x, y), grid, 1.0);
        y += 60.0;
    }

    for ring in &state.rings {
        let alpha = (1.0 - ring.radius / ring.max_radius).clamp(0.0, 1.0);
        let color = format!("rgba(255, 23, 112, {alpha:.3})");
        surface.stroke_circle(ring.center, ring.radius, &color, 3.0, 0.0);
    }

    surface.fill_rect(
        state.pos - Vec2::splat(10.0),
        Vec2::splat(20.0),
        "#00f2ff",
        15.0,
    );

    if state.phase != GamePhase::Playing {
        phase_overlay(
            surface,
            state.phase,
            "PULSE",
            "Arrows step the grid; stay off the shockwaves",
            state.score(),
        );
    }
}

pub fn draw_racer(surface: &Surface, state: &RacerState) {
    surface.clear("rgba(0, 0, 0, 0.3)");

    surface.fill_rect(state.car.pos, state.car.size, "#0ff", 15.0);

    for obstacle in &state.obstacles {
        surface.fill_rect(obstacle.pos, obstacle.size, "#f0f", 15.0);
    }

    if state.phase != GamePhase::Playing {
        phase_overlay(
            surface,
            state.phase,
            "RACER",
            "Left and right dodge the oncoming blocks",
            state.score,
        );
    }
}

pub fn draw_swarm(surface: &Surface, state: &SwarmState) {
    surface.clear("rgba(10, 0, 26, 0.2)");

    for fragment in &state.fragments {
        surface.stroke_rect(
            fragment.pos,
            Vec2::splat(fragment.size),
            "#bc13fe",
            2.0,
            10.0,
        );
    }

    for spark in &state.sparks {
        let color = format!("rgba(188, 19, 254, {:.3})", spark.life.clamp(0.0, 1.0));
        surface.fill_rect(spark.pos, Vec2::splat(4.0), &color, 0.0);
    }

    surface.fill_circle(state.pos, PLAYER_RADIUS, "#fff", 20.0);

    if state.phase != GamePhase::Playing {
        phase_overlay(
            surface,
            state.phase,
            "SWARM",
            "The cursor leads; the fragments follow",
            state.score(),
        );
    }
}

pub fn draw_encounter(surface: &Surface, state: &EncounterState) {
    surface.clear("#000");

    match state.scene {
        Scene::Overworld => {
            match state.room {
                Room::Garden => {
                    surface.fill_circle(Vec2::new(320.0, 240.0), 40.0, "#ff0", 10.0);
                    surface.text_centered(
                        "The Golden Garden",
                        Vec2::new(VIEW_SIZE.x * 0.5, 320.0),
                        BODY_FONT,
                        "#fff",
                    );
                }
                Room::Corridor => {
                    surface.stroke_rect(
                        Vec2::new(200.0, 0.0),
                        Vec2::new(240.0, VIEW_SIZE.y),
                        "#fff",
                        2.0,
                        0.0,
                    );
                    surface.text(
                        "Long corridor. Something is listening.",
                        Vec2::new(10.0, 20.0),
                        HUD_FONT,
                        "#fff",
                    );
                }
            }
            surface.fill_rect(state.pos, Vec2::splat(20.0), "#ff0", 0.0);
        }
        Scene::Battle => {
            surface.text_centered(
                "=( MOTHKIN )=",
                Vec2::new(VIEW_SIZE.x * 0.5, 100.0),
                BODY_FONT,
                "#fff",
            );
            surface.stroke_rect(BATTLE_BOX.pos, BATTLE_BOX.size, "#fff", 5.0, 0.0);
            surface.fill_circle(state.heart, HEART_RADIUS, "red", 5.0);
            for bullet in &state.bullets {
                surface.fill_rect(bullet.pos, Vec2::splat(10.0), "#fff", 0.0);
            }
            surface.text(
                &format!("RESOLVE {}", state.resolve),
                Vec2::new(20.0, 30.0),
                HUD_FONT,
                "#fff",
            );
        }
    }

    if state.phase != GamePhase::Playing {
        phase_overlay(
            surface,
            state.phase,
            "ENCOUNTER",
            "Walk the corridor; dodge, endure, spare",
            state.score,
        );
    }
}
