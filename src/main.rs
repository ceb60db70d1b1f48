//! Ledge Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, KeyboardEvent, PointerEvent, TouchEvent};

    use ledge_runner::Settings;
    use ledge_runner::consts::*;
    use ledge_runner::platform::{apply_key, fit_aspect};
    use ledge_runner::renderer::RenderState;
    use ledge_runner::sim::{GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        render_state: Option<RenderState>,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, width: f32, height: f32, settings: Settings) -> Self {
            Self {
                state: GameState::new(seed, width, height),
                settings,
                render_state: None,
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                if !tick(&mut self.state, &self.input, SIM_DT) {
                    self.accumulator = 0.0;
                    break;
                }
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            // The step already logged these; the HUD reads the state directly
            self.state.drain_events();

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Calculate FPS from oldest to newest frame
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let style = self.settings.style;
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.state, style) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    let _ = el.set_attribute("class", "");
                    el.set_text_content(Some(&format!("{} fps", self.fps)));
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }

            if let Some(el) = document.get_element_by_id("win-banner") {
                let class = if self.state.is_won() { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
        }
    }

    /// Canvas size for the current window, fitted to 16:9
    fn fitted_canvas_size() -> (u32, u32) {
        let window = web_sys::window();
        let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let (w, h) = window
            .map(|w| (dim(w.inner_width()), dim(w.inner_height())))
            .unwrap_or((REFERENCE_WIDTH as f64, REFERENCE_HEIGHT as f64));
        fit_aspect(w as f32, h as f32)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Ledge Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (width, height) = fitted_canvas_size();
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let seed = settings.seed_or(js_sys::Date::now() as u64);
        // World size is fixed for the run; later resizes only rescale the view
        let game = Rc::new(RefCell::new(Game::new(
            seed,
            width as f32,
            height as f32,
            settings,
        )));

        log::info!("Game initialized with seed: {} ({}x{})", seed, width, height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_keyboard(game.clone());
        setup_buttons(game.clone());
        setup_resize(canvas, game.clone());

        request_animation_frame(game);

        log::info!("Ledge Runner running!");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        for (event_name, held) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if apply_key(&mut g.input, &event.key(), held) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Releasing keys while unfocused never reaches us; drop everything held
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().input.clear();
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Wire every `[data-intent]` element as a hold-to-press button
    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let Ok(nodes) = document.query_selector_all("[data-intent]") else {
            log::warn!("No control buttons found");
            return;
        };

        for i in 0..nodes.length() {
            let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let Some(name) = el.get_attribute("data-intent") else {
                continue;
            };

            for (event_name, held) in [
                ("pointerdown", true),
                ("pointerup", false),
                ("pointerleave", false),
                ("pointercancel", false),
            ] {
                let game = game.clone();
                let name = name.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                    event.prevent_default();
                    if !game.borrow_mut().input.set_intent(&name, held) {
                        log::warn!("Unknown intent on button: {}", name);
                    }
                });
                let _ = el
                    .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
                closure.forget();
            }

            // Stop touches from scrolling or synthesizing mouse events
            for event_name in ["touchstart", "touchend"] {
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                });
                let _ = el
                    .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_resize(canvas: HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = fitted_canvas_size();
            canvas.set_width(width);
            canvas.set_height(height);
            let mut g = game.borrow_mut();
            if let Some(ref mut render_state) = g.render_state {
                render_state.resize(width, height);
            }
            // A frozen run no longer redraws on its own
            if g.state.is_won() {
                g.render();
            }
            log::info!("Resized canvas to {}x{}", width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let finished = {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
            g.update_hud();
            g.state.is_won()
        };

        // The winning frame is the last one drawn
        if finished {
            let g = game.borrow();
            match serde_json::to_string(&g.state.summary()) {
                Ok(json) => log::info!("Run complete: {}", json),
                Err(e) => log::warn!("Could not encode run summary: {}", e),
            }
            return;
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Scripted input for the headless run: run right, hop at a steady rhythm
#[cfg(not(target_arch = "wasm32"))]
fn scripted_input(tick: u64) -> ledge_runner::sim::TickInput {
    ledge_runner::sim::TickInput {
        right: true,
        jump: tick % 45 < 3,
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ledge_runner::consts::{REFERENCE_HEIGHT, REFERENCE_WIDTH, SIM_DT};
    use ledge_runner::sim::{GameState, tick};

    env_logger::init();
    log::info!("Ledge Runner (native) starting...");
    log::info!("Native mode runs headless - use `trunk serve` for the playable web version");

    let settings = ledge_runner::Settings::from_query(
        &std::env::args().nth(1).unwrap_or_default(),
    );
    let seed = settings.seed_or(42);
    let mut state = GameState::new(seed, REFERENCE_WIDTH, REFERENCE_HEIGHT);

    const MAX_TICKS: u64 = 60 * 60;
    while state.time_ticks < MAX_TICKS {
        let input = scripted_input(state.time_ticks);
        if !tick(&mut state, &input, SIM_DT) {
            break;
        }
        state.drain_events();
    }

    let summary = state.summary();
    if !summary.won {
        log::info!("Goal not reached in {} ticks", summary.ticks);
    }
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not encode run summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
