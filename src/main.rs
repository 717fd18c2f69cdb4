//! Bounce Box entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use bounce_box::platform::{
        FrameCallback, FrameScheduler, PointerPhase, drive, pick_touch, surface_point,
    };
    use bounce_box::renderer::CanvasSurface;
    use bounce_box::{Game, Settings, Viewport};

    type WebGame = Game<CanvasSurface>;

    /// `requestAnimationFrame` behind the scheduler trait
    struct AnimationFrameScheduler;

    impl FrameScheduler for AnimationFrameScheduler {
        fn request_frame(&self, callback: FrameCallback) {
            let Some(window) = web_sys::window() else {
                log::error!("No window, frame loop stopped");
                return;
            };
            let closure = Closure::once_into_js(move |time: f64| callback(time));
            if let Err(e) = window.request_animation_frame(closure.unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {:?}", e);
            }
        }
    }

    fn window_viewport(window: &web_sys::Window) -> Result<Viewport, JsValue> {
        let w = window.inner_width()?.as_f64().unwrap_or(0.0);
        let h = window.inner_height()?.as_f64().unwrap_or(0.0);
        Ok(Viewport::new(w as f32, h as f32))
    }

    /// Pointer position relative to the canvas box
    fn canvas_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        surface_point(
            Vec2::new(client_x as f32, client_y as f32),
            Vec2::new(rect.left() as f32, rect.top() as f32),
        )
    }

    /// Full-window canvas inside `#app` (or the body)
    fn create_canvas(document: &web_sys::Document) -> Result<HtmlCanvasElement, JsValue> {
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_id("game-canvas");

        let style = canvas.style();
        style.set_property("display", "block")?;
        style.set_property("position", "fixed")?;
        style.set_property("top", "0")?;
        style.set_property("left", "0")?;
        style.set_property("width", "100vw")?;
        style.set_property("height", "100vh")?;

        if let Some(app) = document.get_element_by_id("app") {
            app.set_inner_html("");
            app.append_child(&canvas)?;
        } else if let Some(body) = document.body() {
            body.append_child(&canvas)?;
        } else {
            return Err(JsValue::from_str("no #app or body to mount the canvas"));
        }
        Ok(canvas)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Bounce Box starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas = create_canvas(&document)?;
        let viewport = window_viewport(&window)?;

        let surface = CanvasSurface::new(canvas.clone())?;
        surface.resize(viewport.width as u32, viewport.height as u32);

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(viewport, seed, settings, surface)));

        log::info!(
            "Game initialized with seed {} ({}x{})",
            seed,
            viewport.width,
            viewport.height
        );

        setup_input_handlers(&canvas, game.clone())?;
        setup_resize(game.clone())?;

        drive(Rc::new(AnimationFrameScheduler), game);

        log::info!("Bounce Box running!");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<WebGame>>,
    ) -> Result<(), JsValue> {
        // Mouse press / move / release
        for kind in ["mousedown", "mousemove", "mouseup"] {
            let Some(phase) = PointerPhase::from_event_type(kind) else {
                continue;
            };
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let point = canvas_point(&canvas_clone, event.client_x(), event.client_y());
                game.borrow_mut().pointer(phase, Some(point));
            });
            canvas.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start / move / end
        for kind in ["touchstart", "touchmove", "touchend"] {
            let Some(phase) = PointerPhase::from_event_type(kind) else {
                continue;
            };
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let touch = pick_touch(event.touches().get(0), event.changed_touches().get(0));
                let point =
                    touch.map(|t| canvas_point(&canvas_clone, t.client_x(), t.client_y()));
                game.borrow_mut().pointer(phase, point);
            });
            canvas.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_resize(game: Rc<RefCell<WebGame>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            match window_viewport(&window) {
                Ok(viewport) => {
                    let mut g = game.borrow_mut();
                    g.surface_mut()
                        .resize(viewport.width as u32, viewport.height as u32);
                    g.resize(viewport);
                }
                Err(e) => log::warn!("Resize ignored: {:?}", e),
            }
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bounce Box (native) starting...");
    log::info!("Native mode runs a headless flight - run with `trunk serve` for the web version");

    headless_flight();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Launch once and simulate ten seconds at 60 fps, logging every wall hit
#[cfg(not(target_arch = "wasm32"))]
fn headless_flight() {
    use bounce_box::platform::PointerPhase;
    use bounce_box::renderer::{Scene, Surface};
    use bounce_box::{Game, Settings, Viewport};
    use glam::Vec2;

    struct Headless;

    impl Surface for Headless {
        fn present(&mut self, scene: &Scene) {
            log::trace!("ball {:?} {}", scene.ball.center, scene.ball.color);
        }
    }

    let viewport = Viewport::new(1280.0, 720.0);
    let mut game = Game::new(viewport, 2024, Settings::load(), Headless);

    let start = game.state.ball.pos;
    game.pointer(PointerPhase::Start, Some(start));
    game.pointer(PointerPhase::Move, Some(start + Vec2::new(30.0, -40.0)));
    if let Some(vel) = game.pointer(PointerPhase::End, None) {
        log::info!("Launched at ({:.1}, {:.1}) px/s", vel.x, vel.y);
    }

    let frame_ms = 1000.0 / 60.0;
    let mut hits = 0;
    for i in 0..600 {
        let now = i as f64 * frame_ms;
        let outcome = game.frame(now);
        for hit in outcome.hits() {
            hits += 1;
            log::debug!("{:>7.1} ms  {:?}", now, hit);
        }
    }

    let ball = game.state.ball;
    log::info!(
        "After {} frames: pos ({:.1}, {:.1}) vel ({:.2}, {:.2}), {} wall hits",
        game.frames(),
        ball.pos.x,
        ball.pos.y,
        ball.vel.x,
        ball.vel.y,
        hits
    );
    println!("{} frames, {} wall hits, ball at rest: {}", game.frames(), hits, ball.vel.x == 0.0);
}
