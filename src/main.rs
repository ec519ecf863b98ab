//! Orbfield entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use orbfield::renderer::{RenderState, world_vertices};
    use orbfield::sim::{TickInput, World, tick};

    /// App instance holding all state
    struct App {
        world: World,
        render_state: Option<RenderState>,
        input: TickInput,
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Orbfield starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Size the canvas to the viewport; the simulation runs in CSS pixels,
        // the surface in physical pixels
        let dpr = window.device_pixel_ratio();
        let (client_w, client_h) = viewport_size(&window);
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            world: World::new(client_w, client_h, seed),
            render_state: None,
            input: TickInput::default(),
        }));

        log::info!("World initialized with seed: {}", seed);

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

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        app.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, app.clone());

        request_animation_frame(app);

        log::info!("Orbfield running!");
    }

    fn viewport_size(window: &web_sys::Window) -> (f32, f32) {
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);
        (w as f32, h as f32)
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Mouse move - pointer tracking for the proximity highlight
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut().input.pointer = Some(Vec2::new(
                    event.client_x() as f32,
                    event.client_y() as f32,
                ));
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click - scatter a fresh batch
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().input.respawn = true;
            });
            let _ = window
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Resize - re-fit the canvas and rebuild the world in the new bounds
        {
            let app = app.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let window = web_sys::window().unwrap();
                let dpr = window.device_pixel_ratio();
                let (client_w, client_h) = viewport_size(&window);
                let width = (client_w as f64 * dpr) as u32;
                let height = (client_h as f64 * dpr) as u32;
                canvas.set_width(width);
                canvas.set_height(height);

                let mut a = app.borrow_mut();
                if let Some(ref mut render_state) = a.render_state {
                    render_state.resize(width, height);
                }
                a.input.resize = Some(Vec2::new(client_w, client_h));
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();

            let input = a.input;
            tick(&mut a.world, &input);

            // Clear one-shot inputs after processing
            a.input.respawn = false;
            a.input.resize = None;
            a.input.pointer = None;

            let vertices = world_vertices(&a.world);
            let bounds = a.world.bounds;
            if let Some(ref mut render_state) = a.render_state {
                match render_state.render(&vertices, bounds) {
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

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Orbfield (native) starting...");
    headless_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the simulation without a window: a fixed number of frames with a
/// synthetic pointer orbit standing in for the mouse. Serves as a native
/// smoke check (run with `cargo run`); the web build is the real target.
#[cfg(not(target_arch = "wasm32"))]
fn headless_run() {
    use glam::Vec2;
    use orbfield::sim::{TickInput, World, tick};

    const FRAMES: u32 = 600;

    let mut world = World::new(1280.0, 720.0, 0xC0FFEE);
    let start = std::time::Instant::now();

    for frame in 0..FRAMES {
        let t = frame as f32 * 0.02;
        let pointer = world.bounds / 2.0 + 300.0 * Vec2::new(t.cos(), t.sin());
        let input = TickInput {
            pointer: Some(pointer),
            ..Default::default()
        };
        tick(&mut world, &input);
    }

    let elapsed = start.elapsed();
    let kinetic: f32 = world
        .particles
        .iter()
        .map(|p| 0.5 * p.mass * p.vel.length_squared())
        .sum();
    let lit = world.particles.iter().filter(|p| p.alpha > 0.0).count();

    log::info!(
        "{FRAMES} frames in {:?} ({:.1} us/frame)",
        elapsed,
        elapsed.as_micros() as f64 / FRAMES as f64
    );
    log::info!("kinetic energy {kinetic:.1}, {lit} particles highlighted");
    println!(
        "headless run complete: {FRAMES} frames, {} particles",
        world.particles.len()
    );
}
