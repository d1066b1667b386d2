//! Gapwing entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlImageElement, MouseEvent};

    use gapwing::WorldConfig;
    use gapwing::renderer::{RenderState, scene_vertices};
    use gapwing::sim::{GamePhase, GameState, TickInput, tick};
    use gapwing::sprite::{Appearance, BIRD_YELLOW, Sprite, SpriteId, SpriteTable};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        sprites: SpriteTable,
        input: TickInput,
    }

    impl Game {
        fn new(seed: u64, world: WorldConfig) -> Self {
            Self {
                state: GameState::new(seed, world),
                render_state: None,
                sprites: SpriteTable::new(),
                input: TickInput::default(),
            }
        }

        /// Run exactly one simulation step for this animation frame, then
        /// clear the latched one-shot inputs
        fn update(&mut self) {
            let input = self.input;
            tick(&mut self.state, &input);

            self.input.jump = false;
            self.input.restart = false;
            self.input.toggle_mode = false;
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = scene_vertices(&self.state, &self.sprites);
                match render_state.render(&vertices) {
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

            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }

            if let Some(el) = document.get_element_by_id("hud-best") {
                el.set_text_content(Some(&self.state.high_score.to_string()));
            }

            if let Some(el) = document.get_element_by_id("hud-mode") {
                el.set_text_content(Some(self.state.mode.as_str()));
            }

            // Show/hide game over
            if let Some(el) = document.get_element_by_id("game-over") {
                if self.state.phase == GamePhase::GameOver {
                    let _ = el.set_attribute("class", "");
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&self.state.score.to_string()));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Gapwing starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        // A missing canvas is unrecoverable: there is nothing to draw into
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Bad geometry would hand the spawner an empty range; abort startup
        let world = WorldConfig::default()
            .validated()
            .expect("invalid world configuration");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, world)));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state =
            RenderState::new(surface, &adapter, width, height, (world.width, world.height)).await;
        game.borrow_mut().render_state = Some(render_state);

        // Register the bird sprite and kick off its image load. The game
        // starts immediately either way; the placeholder fill draws until
        // the image arrives, or forever if it never does.
        let bird_sprite = game.borrow_mut().sprites.insert(Sprite::new(BIRD_YELLOW));
        game.borrow_mut().state.bird.appearance = Appearance::Sprite(bird_sprite);
        load_sprite_image(game.clone(), bird_sprite, "assets/bird.png");

        // Set up input handlers
        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Gapwing running!");
    }

    /// Start an image load and wire its callbacks to the sprite slot
    fn load_sprite_image(game: Rc<RefCell<Game>>, id: SpriteId, src: &str) {
        let Ok(image) = HtmlImageElement::new() else {
            if let Some(sprite) = game.borrow_mut().sprites.get_mut(id) {
                sprite.mark_failed(src);
            }
            return;
        };

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                if let Some(sprite) = game.borrow_mut().sprites.get_mut(id) {
                    sprite.mark_loaded();
                }
            });
            image.set_onload(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
        }

        {
            let game = game.clone();
            let src = src.to_owned();
            let closure = Closure::<dyn FnMut()>::new(move || {
                if let Some(sprite) = game.borrow_mut().sprites.get_mut(id) {
                    sprite.mark_failed(&src);
                }
            });
            image.set_onerror(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
        }

        image.set_src(src);
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    " " | "ArrowUp" => {
                        event.prevent_default();
                        g.input.jump = true;
                    }
                    "r" | "R" | "Enter" => g.input.restart = true,
                    "m" | "M" => g.input.toggle_mode = true,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click: flap, or restart once the round is over
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                if g.state.phase == GamePhase::GameOver {
                    g.input.restart = true;
                } else {
                    g.input.jump = true;
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // One tick per animation frame: pacing is frame-counted, so the
    // simulation advances in lockstep with the display
    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use gapwing::WorldConfig;
    use gapwing::sim::{GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Gapwing (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let world = WorldConfig::default()
        .validated()
        .expect("invalid world configuration");

    // Scripted demo round: flap on a fixed cadence until the run ends
    let mut state = GameState::new(0xFEED_BEEF, world);
    while state.phase == GamePhase::Playing && state.frame < 10_000 {
        let input = TickInput {
            jump: state.frame % 15 == 0,
            ..Default::default()
        };
        tick(&mut state, &input);
    }

    log::info!(
        "Demo round over after {} frames, score {}",
        state.frame,
        state.score
    );
    let snapshot = serde_json::to_string_pretty(&state).expect("state serializes");
    println!("{snapshot}");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
