use std::cell::RefCell;
use std::rc::{Rc, Weak};

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, spawn_local};
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, Window};

use crate::domain::config::DemoConfig;
use crate::simulation::{FrameStats, Scene};
use crate::systems::orientation::OrientationSource;

use super::canvas::paint;
use super::frame_loop::FrameLoop;
use super::listener::EventListener;
use super::sensor::WebSensor;

type Orientation = Rc<OrientationSource<WebSensor>>;

struct App {
    window: Window,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    scene: RefCell<Scene>,
    orientation: Orientation,
    frame_loop: RefCell<Option<FrameLoop>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl App {
    fn viewport_size(&self) -> (f64, f64) {
        viewport_size(&self.window)
    }

    /// Match the canvas to the window and refit the walls
    fn resize(&self) {
        let (width, height) = self.viewport_size();
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.scene.borrow_mut().resize(width, height);
        console_log!("resized to {}x{}", width, height);
    }

    fn render_frame(&self) -> Result<(), JsValue> {
        let reading = self.orientation.orientation();
        let mut scene = self.scene.borrow_mut();
        let commands = scene.frame_tick(reading.as_ref());
        paint(&self.ctx, commands)
    }

    fn attach_listeners(app: &Rc<App>) -> Result<(), JsValue> {
        let mut listeners = Vec::with_capacity(6);

        let weak = Rc::downgrade(app);
        listeners.push(EventListener::new(&app.window, "resize", move |_| {
            if let Some(app) = weak.upgrade() {
                app.resize();
            }
        })?);

        // Pointer events cover mouse, pen and touch alike.
        let weak = Rc::downgrade(app);
        listeners.push(EventListener::new(&app.canvas, "pointerdown", move |event: Event| {
            if let (Some(app), Some((x, y))) = (weak.upgrade(), pointer_position(&event)) {
                app.scene.borrow_mut().pointer_down(x, y);
            }
        })?);

        let weak = Rc::downgrade(app);
        listeners.push(EventListener::new(&app.canvas, "pointermove", move |event: Event| {
            if let (Some(app), Some((x, y))) = (weak.upgrade(), pointer_position(&event)) {
                app.scene.borrow_mut().pointer_move(x, y);
            }
        })?);

        for name in ["pointerup", "pointerleave"] {
            let weak = Rc::downgrade(app);
            listeners.push(EventListener::new(&app.canvas, name, move |_| {
                if let Some(app) = weak.upgrade() {
                    app.scene.borrow_mut().pointer_up();
                }
            })?);
        }

        let button_id = app.scene.borrow().config().request_button_id.clone();
        match app.window.document().and_then(|d| d.get_element_by_id(&button_id)) {
            Some(button) => {
                let orientation = Rc::downgrade(&app.orientation);
                listeners.push(EventListener::new(&button, "click", move |_| {
                    let Some(orientation) = orientation.upgrade() else {
                        return;
                    };
                    if orientation.is_granted() {
                        return;
                    }
                    spawn_local(async move {
                        request_orientation(orientation).await;
                    });
                })?);
            }
            None => console_warn!("no #{} button, orientation can only be requested from JS", button_id),
        }

        app.listeners.borrow_mut().extend(listeners);
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.frame_loop.get_mut().take();
        self.listeners.get_mut().clear();
        self.orientation.revoke_access();
        self.canvas.remove();
    }
}

fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

/// Pointer position in canvas pixels
fn pointer_position(event: &Event) -> Option<(f64, f64)> {
    let event = event.dyn_ref::<MouseEvent>()?;
    Some((event.offset_x() as f64, event.offset_y() as f64))
}

fn random_seed() -> u64 {
    let high = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let low = js_sys::Date::now() as u64;
    (high << 32) ^ low
}

async fn request_orientation(orientation: Orientation) -> bool {
    let granted = orientation.request_access().await;
    if granted {
        console_log!("device orientation access granted");
    } else if let Some(err) = orientation.error() {
        console_warn!("device orientation unavailable: {}", err);
    }
    granted
}

/// The running demo: a full-window canvas with tilt-steered text bodies.
#[wasm_bindgen]
pub struct Demo {
    app: Rc<App>,
}

#[wasm_bindgen]
impl Demo {
    /// Build the canvas, walls and text bodies and wire up input.
    ///
    /// `config_json` overrides any subset of the defaults.
    /// Orientation access is requested once right away.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<Demo, JsValue> {
        let config = match config_json {
            Some(json) => DemoConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => DemoConfig::default(),
        };

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document.body().ok_or_else(|| JsValue::from_str("no document body"))?;

        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        body.append_child(&canvas)?;
        canvas.style().set_property("display", "block")?;
        canvas.style().set_property("touch-action", "none")?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;

        let (width, height) = viewport_size(&window);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let seed = config.seed.unwrap_or_else(random_seed);
        let mut scene = Scene::with_seed(config, width, height, seed);
        scene.create_bounds();
        scene.populate(&ctx)?;

        let orientation = Rc::new(OrientationSource::new(WebSensor::new(window.clone())));

        let app = Rc::new(App {
            window,
            canvas,
            ctx,
            scene: RefCell::new(scene),
            orientation,
            frame_loop: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        App::attach_listeners(&app)?;

        let orientation = Rc::clone(&app.orientation);
        spawn_local(async move {
            request_orientation(orientation).await;
        });

        console_log!(
            "tilt-text demo ready: {}x{} viewport, {} bodies",
            width,
            height,
            app.scene.borrow().body_count()
        );
        Ok(Demo { app })
    }

    /// Start the animation-frame loop (no-op when already running)
    pub fn start(&self) -> Result<(), JsValue> {
        if self.is_running() {
            return Ok(());
        }

        let weak: Weak<App> = Rc::downgrade(&self.app);
        let frame_loop = FrameLoop::start(self.app.window.clone(), move |_timestamp| {
            let Some(app) = weak.upgrade() else {
                return;
            };
            if let Err(err) = app.render_frame() {
                console_error!("frame {} failed: {:?}", app.scene.borrow().frame(), err);
            }
        })?;

        *self.app.frame_loop.borrow_mut() = Some(frame_loop);
        console_log!("demo started");
        Ok(())
    }

    pub fn stop(&self) {
        if let Some(frame_loop) = self.app.frame_loop.borrow_mut().take() {
            frame_loop.stop();
            console_log!("demo stopped at frame {}", self.app.scene.borrow().frame());
        }
    }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool {
        self.app
            .frame_loop
            .borrow()
            .as_ref()
            .map(FrameLoop::is_running)
            .unwrap_or(false)
    }

    /// Ask for orientation access. Resolves to `true` once tilt events flow.
    pub fn request_access(&self) -> Promise {
        let orientation = Rc::clone(&self.app.orientation);
        future_to_promise(async move { Ok(JsValue::from_bool(request_orientation(orientation).await)) })
    }

    pub fn revoke_access(&self) {
        self.app.orientation.revoke_access();
        console_log!("device orientation access revoked");
    }

    #[wasm_bindgen(getter)]
    pub fn is_access_granted(&self) -> bool {
        self.app.orientation.is_granted()
    }

    /// Last orientation failure, if any
    #[wasm_bindgen(getter)]
    pub fn orientation_error(&self) -> Option<String> {
        self.app.orientation.error().map(|e| e.to_string())
    }

    /// Re-read the window size (also runs on every `resize` event)
    pub fn resize(&self) {
        self.app.resize();
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.app.scene.borrow().body_count()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.app.scene.borrow().frame()
    }

    pub fn set_debug_overlay(&self, enabled: bool) {
        self.app.scene.borrow_mut().set_debug_overlay(enabled);
    }

    /// Enable or disable per-frame timings (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&self, enabled: bool) {
        self.app.scene.borrow_mut().enable_perf_metrics(enabled);
    }

    /// Last frame snapshot (zero timings when perf disabled)
    pub fn get_frame_stats(&self) -> FrameStats {
        self.app.scene.borrow().get_frame_stats()
    }
}
