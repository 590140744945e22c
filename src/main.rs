//! Paddle Rally entry point
//!
//! Wires the simulation core to a 2d canvas and keyboard events on wasm32.
//! The native binary is a stub; the game runs in the browser.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use glam::Vec2;
    use paddle_rally::config::GameConfig;
    use paddle_rally::input::InputMapper;
    use paddle_rally::render::{self, RenderTarget};
    use paddle_rally::sim::{GameSession, tick};

    /// RGBA in 0..1 to a CSS color string
    fn css_color(color: [f32; 4]) -> String {
        format!(
            "rgba({},{},{},{})",
            (color[0] * 255.0).round() as u8,
            (color[1] * 255.0).round() as u8,
            (color[2] * 255.0).round() as u8,
            color[3]
        )
    }

    /// Canvas 2d implementation of the core's render-target contract
    struct CanvasTarget {
        context: CanvasRenderingContext2d,
        width: f64,
        height: f64,
    }

    impl RenderTarget for CanvasTarget {
        fn clear(&mut self, color: [f32; 4]) {
            self.context.set_fill_style_str(&css_color(color));
            self.context.fill_rect(0.0, 0.0, self.width, self.height);
        }

        fn draw_rect(&mut self, pos: Vec2, size: Vec2, color: [f32; 4]) {
            self.context.set_fill_style_str(&css_color(color));
            self.context
                .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        }

        fn draw_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
            self.context.set_fill_style_str(&css_color(color));
            self.context.begin_path();
            let _ = self.context.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.context.close_path();
            self.context.fill();
        }

        fn draw_text(&mut self, text: &str, pos: Vec2, size_px: f32, color: [f32; 4]) {
            self.context.set_fill_style_str(&css_color(color));
            self.context.set_font(&format!("{size_px}px Arial"));
            let _ = self.context.fill_text(text, pos.x as f64, pos.y as f64);
        }
    }

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        mapper: InputMapper,
        target: CanvasTarget,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Paddle Rally starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = GameConfig::load();
        canvas.set_width(config.surface_width as u32);
        canvas.set_height(config.surface_height as u32);

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("failed to get 2d context")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let target = CanvasTarget {
            context,
            width: config.surface_width as f64,
            height: config.surface_height as f64,
        };

        let seed = js_sys::Date::now() as u64;
        let mapper = InputMapper::new(&config);
        let session = GameSession::new(config, seed);
        log::info!("Session initialized with seed: {seed}");

        let game = Rc::new(RefCell::new(Game {
            session,
            mapper,
            target,
        }));

        setup_input_handlers(game.clone());
        request_animation_frame(game);

        log::info!("Paddle Rally running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                let Game {
                    session, mapper, ..
                } = &mut *g;
                mapper.key_down(&event.key(), session);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                let Game {
                    session, mapper, ..
                } = &mut *g;
                mapper.key_up(&event.key(), session);
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
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

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            let Game {
                session,
                mapper,
                target,
            } = &mut *g;

            let commands = mapper.take_commands();
            tick(session, &commands);
            render::draw_frame(session, target);
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
    env_logger::init();
    log::info!("Paddle Rally (native) starting...");
    log::info!("Run with `trunk serve` for the web version");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
