//! Browser host
//!
//! Refresh callbacks come from `requestAnimationFrame`, the resize debounce
//! from `setTimeout`, resize notifications from the window `resize` event.
//! Each callback holds a `Weak` reference to the scheduler, so once the page
//! drops its `SceneHandle` nothing keeps the scene alive.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use super::{HandleId, Host};
use crate::error::{Result, SceneError};
use crate::renderer::Viewport;
use crate::renderer::canvas::CanvasSurface;
use crate::scheduler::FrameScheduler;
use crate::settings::SceneConfig;

type SharedScheduler = Rc<RefCell<FrameScheduler<WebHost>>>;
type WeakScheduler = Weak<RefCell<FrameScheduler<WebHost>>>;

pub struct WebHost {
    window: Window,
    canvas: Option<HtmlCanvasElement>,
    frame_cb: Closure<dyn FnMut(f64)>,
    timeout_cb: Closure<dyn FnMut()>,
    resize_cb: Closure<dyn FnMut(web_sys::Event)>,
    listening: bool,
}

impl WebHost {
    pub fn new(canvas: Option<HtmlCanvasElement>, scheduler: WeakScheduler) -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| SceneError::SurfaceUnavailable("no window".into()))?;

        let frame_cb = {
            let scheduler = scheduler.clone();
            Closure::<dyn FnMut(f64)>::new(move |time: f64| {
                if let Some(s) = scheduler.upgrade() {
                    if let Ok(mut s) = s.try_borrow_mut() {
                        s.tick(time);
                    }
                }
            })
        };
        let timeout_cb = {
            let scheduler = scheduler.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Some(s) = scheduler.upgrade() {
                    if let Ok(mut s) = s.try_borrow_mut() {
                        s.flush_resize();
                    }
                }
            })
        };
        let resize_cb = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Some(s) = scheduler.upgrade() {
                if let Ok(mut s) = s.try_borrow_mut() {
                    s.on_resize_event();
                }
            }
        });

        Ok(Self {
            window,
            canvas,
            frame_cb,
            timeout_cb,
            resize_cb,
            listening: false,
        })
    }
}

impl Host for WebHost {
    type Surface = CanvasSurface;

    fn acquire_surface(&mut self) -> Result<Option<CanvasSurface>> {
        match self.canvas.clone() {
            Some(canvas) => CanvasSurface::new(canvas).map(Some),
            None => Ok(None),
        }
    }

    fn viewport(&self) -> Viewport {
        let dim = |v: std::result::Result<JsValue, JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
        };
        Viewport::new(
            dim(self.window.inner_width()),
            dim(self.window.inner_height()),
            self.window.device_pixel_ratio() as f32,
        )
    }

    fn now_ms(&self) -> f64 {
        self.window
            .performance()
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    fn request_frame(&mut self) -> Option<HandleId> {
        self.window
            .request_animation_frame(self.frame_cb.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, id: HandleId) {
        let _ = self.window.cancel_animation_frame(id);
    }

    fn set_timeout(&mut self, delay_ms: f64) -> Option<HandleId> {
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.timeout_cb.as_ref().unchecked_ref(),
                delay_ms.ceil().max(0.0) as i32,
            )
            .ok()
    }

    fn clear_timeout(&mut self, id: HandleId) {
        self.window.clear_timeout_with_handle(id);
    }

    fn attach_resize_listener(&mut self) -> Result<()> {
        self.window
            .add_event_listener_with_callback("resize", self.resize_cb.as_ref().unchecked_ref())
            .map_err(|e| SceneError::ListenerUnavailable(format!("{e:?}")))?;
        self.listening = true;
        Ok(())
    }

    fn detach_resize_listener(&mut self) {
        if self.listening {
            let _ = self.window.remove_event_listener_with_callback(
                "resize",
                self.resize_cb.as_ref().unchecked_ref(),
            );
            self.listening = false;
        }
    }
}

fn init_logging() {
    console_error_panic_hook::set_once();
    // Already initialised by an earlier handle
    let _ = console_log::init_with_level(log::Level::Info);
}

fn to_js(e: SceneError) -> JsValue {
    log::error!("{e}");
    JsValue::from_str(&e.to_string())
}

/// Page-facing handle: start/stop against a canvas plus the watch toggle
#[wasm_bindgen]
pub struct SceneHandle {
    scheduler: SharedScheduler,
}

#[wasm_bindgen]
impl SceneHandle {
    /// Build the scene from JSON settings, or from LocalStorage when absent
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> std::result::Result<SceneHandle, JsValue> {
        init_logging();
        let config = match config_json {
            Some(json) => SceneConfig::from_json(&json).map_err(to_js)?,
            None => SceneConfig::load(),
        };
        let scheduler = FrameScheduler::new(config).map_err(to_js)?;
        Ok(Self {
            scheduler: Rc::new(RefCell::new(scheduler)),
        })
    }

    /// Start drawing; `false` when there is no canvas
    pub fn start(&self, canvas: Option<HtmlCanvasElement>) -> std::result::Result<bool, JsValue> {
        let host = WebHost::new(canvas, Rc::downgrade(&self.scheduler)).map_err(to_js)?;
        self.scheduler.borrow_mut().start(host).map_err(to_js)
    }

    /// Start on the canvas with the given element id
    #[wasm_bindgen(js_name = startById)]
    pub fn start_by_id(&self, id: &str) -> std::result::Result<bool, JsValue> {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());
        self.start(canvas)
    }

    pub fn stop(&self) {
        let host = self.scheduler.borrow_mut().stop();
        drop(host);
    }

    #[wasm_bindgen(getter = watchMode)]
    pub fn watch_mode(&self) -> bool {
        self.scheduler.borrow().watch_mode()
    }

    #[wasm_bindgen(setter = watchMode)]
    pub fn set_watch_mode(&self, on: bool) {
        self.scheduler.borrow_mut().set_watch_mode(on);
    }

    pub fn fps(&self) -> u32 {
        self.scheduler.borrow().fps()
    }

    /// Persist the current settings to LocalStorage
    #[wasm_bindgen(js_name = saveConfig)]
    pub fn save_config(&self) {
        self.scheduler.borrow().config().save();
    }
}

impl Drop for SceneHandle {
    fn drop(&mut self) {
        if let Ok(mut s) = self.scheduler.try_borrow_mut() {
            drop(s.stop());
        }
    }
}
