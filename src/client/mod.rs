//! Browser host: wires a canvas, a `requestAnimationFrame` chain and a
//! train button to the render loop.

use std::cell::RefCell;
use std::rc::Rc;

use forage_core::{SharedEngine, Simulation as Engine};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlCanvasElement};

use crate::driver::{CoordinateMapper, RenderLoop, StopToken, TrainingTrigger, ViewportGeometry};
use crate::model::config::AppConfig;
use crate::ui::CanvasSurface;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn request_animation_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

/// A running browser session. Dropping it does not stop the animation;
/// call [`Session::stop`].
#[wasm_bindgen]
pub struct Session {
    stop: StopToken,
}

#[wasm_bindgen]
impl Session {
    /// Stops before the next frame. The canvas keeps its last frame.
    pub fn stop(&self) {
        self.stop.request_stop();
    }

    #[wasm_bindgen(getter)]
    pub fn stopped(&self) -> bool {
        self.stop.is_stop_requested()
    }
}

/// Starts the simulation on the canvas with id `canvas_id`, sized from the
/// canvas's current width and height. Clicking the element with id
/// `button_id` (if there is one) trains a generation and logs the report;
/// a failed training ends the animation like any other engine fault.
#[wasm_bindgen]
pub fn start(canvas_id: &str, button_id: &str) -> Result<Session, JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id `{canvas_id}`")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("`{canvas_id}` is not a canvas")))?;

    let scale = match window.device_pixel_ratio() {
        ratio if ratio > 0.0 => ratio,
        _ => 1.0,
    };
    let geometry = ViewportGeometry::new(
        f64::from(canvas.width()),
        f64::from(canvas.height()),
        scale,
    )
    .map_err(to_js)?;

    let config = AppConfig::default();
    let stop = StopToken::new();
    let engine = SharedEngine::new(Engine::new(config.sim.clone()).map_err(to_js)?);

    if let Some(button) = document.get_element_by_id(button_id) {
        let mut trainer = engine.clone();
        let mut trigger = TrainingTrigger::new().stop_on_failure(stop.clone());
        let on_click = Closure::<dyn FnMut()>::new(move || match trigger.activate(&mut trainer) {
            Ok(report) => console::log_1(&JsValue::from_str(&report.to_string())),
            Err(err) => console::error_1(&to_js(err)),
        });
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    let mut surface = CanvasSurface::new(canvas).map_err(to_js)?;
    let mut driver = RenderLoop::new(CoordinateMapper::new(geometry), config.driver.steps_per_frame)
        .map_err(to_js)?
        .with_strict_bounds(config.driver.strict_bounds);
    driver.setup(&mut surface).map_err(to_js)?;

    let session = Session { stop: stop.clone() };

    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = Rc::clone(&callback);
    let mut engine = engine;

    *callback.borrow_mut() = Some(Closure::new(move || {
        if stop.is_stop_requested() {
            tracing::info!("Browser session stopped");
            return;
        }

        if let Err(err) = driver.tick(&mut engine, &mut surface) {
            console::error_1(&to_js(err));
            return;
        }

        if let Some(frame) = next.borrow().as_ref() {
            if let Err(err) = request_animation_frame(frame) {
                console::error_1(&err);
            }
        }
    }));

    if let Some(frame) = callback.borrow().as_ref() {
        request_animation_frame(frame)?;
    }

    Ok(session)
}
