//! Duck Pond entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_pond {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use duck_pond::Settings;
    use duck_pond::renderer::{RenderState, SceneBuilder};
    use duck_pond::sim::{Pond, PondInput, PondStats, apply_input, step};

    /// Everything the page holds between frames
    struct App {
        pond: Pond,
        render_state: Option<RenderState>,
        scene: SceneBuilder,
    }

    impl App {
        fn new(pond: Pond, settings: &Settings) -> Self {
            Self {
                pond,
                render_state: None,
                scene: SceneBuilder::from_settings(settings),
            }
        }

        /// One frame: advance, draw, report
        fn frame(&mut self) {
            let stats = step(&mut self.pond);
            self.render();
            self.update_stats(stats);
        }

        fn input(&mut self, input: PondInput) {
            let stats = apply_input(&mut self.pond, input);
            self.update_stats(stats);
        }

        fn render(&mut self) {
            let vertices = self.scene.build(&self.pond);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(vertices) {
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

        /// Write the counters into the page
        fn update_stats(&self, stats: PondStats) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("duckCount") {
                el.set_text_content(Some(&stats.movers.to_string()));
            }
            if let Some(el) = document.get_element_by_id("breadcrumbCount") {
                el.set_text_content(Some(&stats.lures.to_string()));
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Duck Pond starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("duckCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::load();
        settings.save();
        log::info!("Quality preset: {}", settings.quality.as_str());

        if !settings.show_stats {
            if let Some(el) = document.get_element_by_id("stats") {
                let _ = el.set_attribute("class", "hidden");
            }
        }

        // The pond lives in canvas pixel space
        let width = canvas.width();
        let height = canvas.height();
        let config = settings.pond_config(width as f32, height as f32);

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(Pond::with_config(config, seed), &settings)));

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

        let render_state = RenderState::new(
            surface,
            &adapter,
            width,
            height,
            (width as f32, height as f32),
        )
        .await;
        app.borrow_mut().render_state = Some(render_state);

        setup_canvas_click(&canvas, app.clone());
        setup_buttons(app.clone());

        {
            let a = app.borrow();
            a.update_stats(a.pond.stats());
        }

        request_animation_frame(app);

        log::info!("Duck Pond running!");
    }

    /// Click: every duck turns and a breadcrumb lands where the user clicked
    fn setup_canvas_click(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            // CSS pixels to canvas pixels
            let scale_x = canvas_clone.width() as f64 / rect.width().max(1.0);
            let scale_y = canvas_clone.height() as f64 / rect.height().max(1.0);
            let x = (event.client_x() as f64 - rect.left()) * scale_x;
            let y = (event.client_y() as f64 - rect.top()) * scale_y;
            app.borrow_mut()
                .input(PondInput::Click(glam::Vec2::new(x as f32, y as f32)));
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(app: Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let buttons = [
            ("addDuck", PondInput::AddDuck),
            ("addBreadcrumb", PondInput::AddBreadcrumb),
            ("clearDucks", PondInput::Clear),
        ];

        for (id, input) in buttons {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing button #{}", id);
                continue;
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().input(input);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_pond::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Native: run the pond headless and log what happens
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use duck_pond::Settings;
    use duck_pond::renderer::SceneBuilder;
    use duck_pond::sim::{Pond, PondEvent, PondInput, apply_input, step};

    env_logger::init();
    log::info!("Duck Pond (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);
    let ticks: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(600);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(12345);

    let settings = Settings::load();
    log::info!("Quality preset: {}", settings.quality.as_str());
    let config = settings.pond_config(
        duck_pond::consts::CANVAS_WIDTH,
        duck_pond::consts::CANVAS_HEIGHT,
    );
    let mut pond = Pond::with_config(config, seed);
    let mut scene = SceneBuilder::from_settings(&settings);

    let mut eaten = 0usize;
    let mut expired = 0usize;
    for t in 0..ticks {
        // Scatter a breadcrumb in front of the first duck every second
        if t % 60 == 0 {
            if let Some(duck) = pond.movers.first() {
                let ahead = duck.pos + duck_pond::heading_vector(duck.heading) * duck.size * 0.4;
                apply_input(&mut pond, PondInput::Click(ahead));
            }
        }

        let stats = step(&mut pond);
        for event in &pond.events {
            match event {
                PondEvent::LureEaten { .. } => eaten += 1,
                PondEvent::LureExpired { .. } => expired += 1,
            }
        }

        let vertices = scene.build(&pond).len();
        if t % 60 == 59 {
            log::info!(
                "tick {}: {} ducks, {} breadcrumbs, {} vertices",
                pond.time_ticks,
                stats.movers,
                stats.lures,
                vertices
            );
        }
    }

    println!(
        "{} ticks: {} ducks, {} breadcrumbs left, {} eaten, {} expired",
        ticks,
        pond.movers.len(),
        pond.lures.len(),
        eaten,
        expired
    );
}
