//! Brick Breaker entry point
//!
//! On the web: canvas rendering, keyboard input and the animation-frame loop.
//! Natively: a headless autopilot run that logs what happens.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use brick_breaker::input::Key;
    use brick_breaker::renderer::{CanvasRenderer, build_scene, end_message};
    use brick_breaker::Game;

    /// Game instance plus its display surface
    struct App {
        game: Game,
        renderer: CanvasRenderer,
    }

    impl App {
        /// Render the current frame
        fn render(&self) {
            let commands = build_scene(&self.game.snapshot(), self.game.config());
            if let Err(e) = self.renderer.draw(&commands) {
                log::warn!("Render error: {:?}", e);
            }
        }

        /// Show or hide the end-of-game banner and the Play Again button
        fn update_end_screen(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            let message = end_message(&self.game.snapshot());

            if let Some(el) = document.query_selector(".score-details").ok().flatten() {
                el.set_text_content(message.as_deref());
                set_visible(&el, message.is_some());
            }
            if let Some(btn) = document.get_element_by_id("play-again-button") {
                set_visible(&btn, message.is_some());
            }
        }
    }

    fn set_visible(el: &web_sys::Element, visible: bool) {
        if let Some(el) = el.dyn_ref::<web_sys::HtmlElement>() {
            let display = if visible { "block" } else { "none" };
            let _ = el.style().set_property("display", display);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let game = Game::default();
        canvas.set_width(game.config().canvas_width as u32);
        canvas.set_height(game.config().canvas_height as u32);

        let renderer = CanvasRenderer::new(&canvas).expect("no 2d context");
        let app = Rc::new(RefCell::new(App { game, renderer }));
        app.borrow().update_end_screen();

        setup_input_handlers(app.clone());
        setup_restart_button(app.clone());

        // Start game loop
        request_animation_frame(app);

        log::info!("Brick Breaker running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    event.prevent_default();
                    app.borrow_mut().game.key_down(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    app.borrow_mut().game.key_up(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One frame: step, draw, and schedule the next frame unless the game ended
    fn game_loop(app: Rc<RefCell<App>>) {
        let running = {
            let mut a = app.borrow_mut();
            a.game.frame();
            a.render();
            if !a.game.is_running() {
                a.update_end_screen();
            }
            a.game.is_running()
        };

        if running {
            request_animation_frame(app);
        }
    }

    fn setup_restart_button(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("play-again-button") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let was_running = {
                    let mut a = app.borrow_mut();
                    let was_running = a.game.is_running();
                    a.game.restart();
                    a.update_end_screen();
                    was_running
                };
                log::info!("Game restarted");

                // The loop exits on game over, so kick it off again
                if !was_running {
                    request_animation_frame(app.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Command line options for the headless run
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
struct Options {
    config: Option<std::path::PathBuf>,
    seed: u64,
    miss_chance: f32,
    max_frames: u64,
    json: bool,
}

#[cfg(not(target_arch = "wasm32"))]
impl Options {
    const USAGE: &'static str = "usage: brick-breaker [--config PATH] [--seed N] \
                                 [--miss-chance P] [--max-frames N] [--json]";

    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut options = Self {
            config: None,
            seed: 1,
            miss_chance: 0.05,
            max_frames: 200_000,
            json: false,
        };

        while let Some(arg) = args.next() {
            let mut value = |name: &str| args.next().ok_or(format!("{} needs a value", name));
            match arg.as_str() {
                "--config" => options.config = Some(value("--config")?.into()),
                "--seed" => {
                    options.seed = value("--seed")?
                        .parse()
                        .map_err(|e| format!("bad --seed: {}", e))?
                }
                "--miss-chance" => {
                    options.miss_chance = value("--miss-chance")?
                        .parse()
                        .map_err(|e| format!("bad --miss-chance: {}", e))?
                }
                "--max-frames" => {
                    options.max_frames = value("--max-frames")?
                        .parse()
                        .map_err(|e| format!("bad --max-frames: {}", e))?
                }
                "--json" => options.json = true,
                "-h" | "--help" => return Err(Self::USAGE.to_string()),
                other => return Err(format!("unknown argument {}\n{}", other, Self::USAGE)),
            }
        }
        Ok(options)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use brick_breaker::autopilot::Autopilot;
    use brick_breaker::{Game, GameConfig};
    use std::process::ExitCode;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("{}", msg);
            return ExitCode::from(2);
        }
    };

    let config = match &options.config {
        Some(path) => GameConfig::from_file(path),
        None => Ok(GameConfig::default()),
    };
    let mut game = match config.and_then(Game::new) {
        Ok(game) => game,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "Brick Breaker (native) autopilot run, seed {}, miss chance {}",
        options.seed,
        options.miss_chance
    );

    let mut pilot = Autopilot::new(options.seed, options.miss_chance);
    let summary = game.run(|state| pilot.drive(state), options.max_frames);

    match brick_breaker::renderer::end_message(&game.snapshot()) {
        Some(message) => log::info!("{} ({} frames)", message, summary.frames),
        None => log::warn!(
            "Stopped after {} frames: score {}, {} lives, {} bricks left",
            summary.frames,
            summary.score,
            summary.lives,
            summary.bricks_left
        ),
    }

    if options.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to encode summary: {}", e),
        }
    }

    ExitCode::SUCCESS
}
