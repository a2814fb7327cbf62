//! Neon Arcade entry point
//!
//! Handles browser wiring and runs the frame loop. The simulation itself
//! lives in `neon_arcade::sim` and is platform-free.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use neon_arcade::consts::*;
    use neon_arcade::input::{InputLatch, Key};
    use neon_arcade::notify::{self, GameReport};
    use neon_arcade::render::{Surface, scene};
    use neon_arcade::sim::{GamePhase, TickInput, drift, encounter, flux, pulse, racer, swarm};

    /// The minigame this page is running, selected by query parameter
    enum Session {
        Flux(flux::FluxState),
        Drift(drift::DriftState),
        Pulse(pulse::PulseState),
        Racer(racer::RacerState),
        Swarm(swarm::SwarmState),
        Encounter(encounter::EncounterState),
    }

    impl Session {
        /// Logical canvas size for a game; None means size to the viewport
        fn fixed_size(name: &str) -> Option<Vec2> {
            match name {
                "racer" => Some(racer::ROAD_SIZE),
                "encounter" => Some(encounter::VIEW_SIZE),
                "drift" | "pulse" | "swarm" => None,
                _ => Some(flux::ARENA_SIZE),
            }
        }

        fn create(name: &str, seed: u64, bounds: Vec2) -> Self {
            match name {
                "drift" => Session::Drift(drift::DriftState::new(seed, bounds)),
                "pulse" => Session::Pulse(pulse::PulseState::new(seed, bounds)),
                "racer" => Session::Racer(racer::RacerState::new(seed)),
                "swarm" => Session::Swarm(swarm::SwarmState::new(seed, bounds)),
                "encounter" => Session::Encounter(encounter::EncounterState::new(seed)),
                _ => Session::Flux(flux::FluxState::new(seed)),
            }
        }

        fn name(&self) -> &'static str {
            match self {
                Session::Flux(_) => "flux",
                Session::Drift(_) => "drift",
                Session::Pulse(_) => "pulse",
                Session::Racer(_) => "racer",
                Session::Swarm(_) => "swarm",
                Session::Encounter(_) => "encounter",
            }
        }

        fn tick(&mut self, input: &TickInput) {
            match self {
                Session::Flux(state) => flux::tick(state, input),
                Session::Drift(state) => drift::tick(state, input),
                Session::Pulse(state) => pulse::tick(state, input),
                Session::Racer(state) => racer::tick(state, input),
                Session::Swarm(state) => swarm::tick(state, input),
                Session::Encounter(state) => encounter::tick(state, input),
            }
        }

        fn phase(&self) -> GamePhase {
            match self {
                Session::Flux(state) => state.phase,
                Session::Drift(state) => state.phase,
                Session::Pulse(state) => state.phase,
                Session::Racer(state) => state.phase,
                Session::Swarm(state) => state.phase,
                Session::Encounter(state) => state.phase,
            }
        }

        fn score(&self) -> u64 {
            match self {
                Session::Flux(state) => state.score,
                Session::Drift(state) => state.score(),
                Session::Pulse(state) => state.score(),
                Session::Racer(state) => state.score,
                Session::Swarm(state) => state.score(),
                Session::Encounter(state) => state.score,
            }
        }

        fn draw(&self, surface: &Surface) {
            match self {
                Session::Flux(state) => scene::draw_flux(surface, state),
                Session::Drift(state) => scene::draw_drift(surface, state),
                Session::Pulse(state) => scene::draw_pulse(surface, state),
                Session::Racer(state) => scene::draw_racer(surface, state),
                Session::Swarm(state) => scene::draw_swarm(surface, state),
                Session::Encounter(state) => scene::draw_encounter(surface, state),
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        session: Session,
        surface: Option<Surface>,
        latch: InputLatch,
        input: TickInput,
        accumulator: f32,
        last_time: f64,
        // Track phase transitions for the one-shot game-over report
        last_phase: GamePhase,
    }

    impl Game {
        fn new(session: Session) -> Self {
            Self {
                session,
                surface: None,
                latch: InputLatch::new(),
                input: TickInput::default(),
                accumulator: 0.0,
                last_time: 0.0,
                last_phase: GamePhase::Start,
            }
        }

        /// Mirror the latch into the level-triggered input fields
        fn sync_held(&mut self) {
            self.input.held_left = self.latch.is_held(Key::Left);
            self.input.held_right = self.latch.is_held(Key::Right);
            self.input.held_up = self.latch.is_held(Key::Up);
            self.input.held_down = self.latch.is_held(Key::Down);
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;
            self.sync_held();

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input;
                self.session.tick(&input);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // One-shot edges apply to the first substep only
                self.input.clear_edges();
            }

            let phase = self.session.phase();
            if phase != self.last_phase {
                if phase == GamePhase::GameOver {
                    let report = GameReport::new(self.session.name(), self.session.score());
                    notify::post_to_parent(&report);
                    log::info!(
                        "Game over: {} finished with score {}",
                        report.game_name,
                        report.final_score
                    );
                }
                self.last_phase = phase;
            }
        }

        /// Render the current frame
        fn render(&self) {
            if let Some(surface) = &self.surface {
                self.session.draw(surface);
            }
        }

        /// Update HUD elements in the DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&self.session.score().to_string()));
            }
            if let Session::Flux(state) = &self.session {
                if let Some(el) = document.get_element_by_id("polarity") {
                    let label = match state.polarity {
                        flux::Polarity::Alpha => "ALPHA",
                        flux::Polarity::Beta => "BETA",
                    };
                    el.set_text_content(Some(label));
                }
            }
        }
    }

    /// Pull the game name out of a location search string like "?game=drift"
    fn game_name_from_search(search: &str) -> &str {
        search
            .trim_start_matches('?')
            .split('&')
            .find_map(|pair| pair.strip_prefix("game="))
            .filter(|name| !name.is_empty())
            .unwrap_or("flux")
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Neon Arcade starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let search = window.location().search().unwrap_or_default();
        let name = game_name_from_search(&search).to_owned();

        // Fixed-size games get their logical resolution; the rest fill the
        // viewport at whatever size CSS gave the canvas
        let bounds = match Session::fixed_size(&name) {
            Some(size) => size,
            None => Vec2::new(canvas.client_width() as f32, canvas.client_height() as f32),
        };
        canvas.set_width(bounds.x as u32);
        canvas.set_height(bounds.y as u32);

        let seed = js_sys::Date::now() as u64;
        let session = Session::create(&name, seed, bounds);
        log::info!("Running {} with seed {}", session.name(), seed);

        let game = Rc::new(RefCell::new(Game::new(session)));
        game.borrow_mut().surface = Surface::new(&canvas);
        if game.borrow().surface.is_none() {
            log::error!("Could not acquire a 2d canvas context");
            return;
        }

        setup_input_handlers(&canvas, game.clone());
        request_animation_frame(game);

        log::info!("Neon Arcade running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Keyboard: latch the held state; fresh presses arm one-shot edges
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(key) = Key::from_code(&event.code()) else {
                    return;
                };
                event.prevent_default();
                let mut g = game.borrow_mut();
                if !g.latch.press(key) {
                    return; // auto-repeat
                }
                match key {
                    Key::Left => g.input.press_left = true,
                    Key::Right => g.input.press_right = true,
                    Key::Up => g.input.press_up = true,
                    Key::Down => g.input.press_down = true,
                    Key::Action => g.input.action = true,
                    Key::Dash => g.input.dash = true,
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_code(&event.code()) {
                    game.borrow_mut().latch.release(key);
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer position in canvas coordinates (swarm)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                game.borrow_mut().input.pointer = Some(pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use neon_arcade::sim::{GamePhase, TickInput, flux};

    env_logger::init();
    log::info!("Neon Arcade (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    // Headless smoke run of the platformer
    let mut state = flux::FluxState::new(0xA2CADE);
    let start = TickInput {
        action: true,
        ..Default::default()
    };
    flux::tick(&mut state, &start);
    assert_eq!(state.phase, GamePhase::Playing);

    let run_right = TickInput {
        held_right: true,
        ..Default::default()
    };
    let jump = TickInput {
        held_right: true,
        press_up: true,
        ..Default::default()
    };
    for frame in 0..600 {
        let input = if frame % 90 == 0 { &jump } else { &run_right };
        flux::tick(&mut state, input);
    }

    println!(
        "\n600 simulated frames: phase {:?}, score {}, player at ({:.1}, {:.1})",
        state.phase, state.score, state.player.pos.x, state.player.pos.y
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
