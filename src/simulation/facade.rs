use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent, Window};

use crate::api::wasm::canvas::DebugCanvas;
use crate::api::wasm::dom::{self, DomElement, DomResolver};
use crate::api::wasm::schedule::{AnimationLoop, Interval, Listener};
use crate::domain::config::ZoneConfig;
use crate::domain::options::BodyOptions;

use super::context::SimulationContext;
use super::element::Size;
use super::item::{bind_when_active, ItemCore, SpawnSpec};
use super::perf_stats::PerfStats;
use super::perf_timer::now_ms;
use super::ZoneCore;

/// Browser callbacks that keep an active zone running. Dropping this stops
/// everything.
struct ZoneLoops {
    _runner: Interval,
    _frames: AnimationLoop,
    _listeners: Vec<Listener>,
}

#[wasm_bindgen]
pub struct GravityZone {
    core: Rc<RefCell<ZoneCore>>,
    container: HtmlElement,
    window: Window,
    overlay: Option<Rc<DebugCanvas>>,
    loops: Option<ZoneLoops>,
}

#[wasm_bindgen]
impl GravityZone {
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, debug: bool) -> Result<GravityZone, JsValue> {
        Self::build(container, ZoneConfig::default(), debug)
    }

    /// Same as the constructor with a JSON `ZoneConfig` (camelCase keys)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(container: HtmlElement, debug: bool, config_json: &str) -> Result<GravityZone, JsValue> {
        let config = ZoneConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e))?;
        Self::build(container, config, debug)
    }

    /// Build the world, publish the context and start the runner and the
    /// frame loop. Activating twice or after `deactivate` does nothing.
    pub fn activate(&mut self) -> Result<bool, JsValue> {
        let size = dom::client_size(&self.container);
        let (activated, debug, period_ms) = {
            let mut core = self.core.borrow_mut();
            let activated = core.activate(size);
            (activated, core.debug(), core.config().timestep_ms)
        };
        if !activated {
            return Ok(false);
        }

        if let Err(err) = self.start(size, debug, period_ms) {
            log::error!("zone: failed to start browser loops: {:?}", err);
            self.deactivate();
            return Err(err);
        }
        Ok(true)
    }

    /// Stop both loops, clear the world and remove the debug overlay.
    /// Safe to call repeatedly.
    pub fn deactivate(&mut self) -> bool {
        self.loops.take();
        if let Some(overlay) = self.overlay.take() {
            overlay.detach();
        }
        match self.core.try_borrow_mut() {
            Ok(mut core) => core.deactivate(),
            Err(_) => false,
        }
    }

    /// Handle for items mounted in this zone
    pub fn context(&self) -> GravityContext {
        GravityContext {
            inner: self.core.borrow().context(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.core.borrow().is_active()
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.core.borrow().body_count()
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.borrow_mut().set_gravity(x, y);
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.borrow_mut().enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.borrow().get_perf_stats()
    }
}

impl GravityZone {
    fn build(container: HtmlElement, config: ZoneConfig, debug: bool) -> Result<GravityZone, JsValue> {
        Ok(Self {
            core: Rc::new(RefCell::new(ZoneCore::new(config, debug))),
            container,
            window: dom::window()?,
            overlay: None,
            loops: None,
        })
    }

    fn start(&mut self, size: Size, debug: bool, period_ms: f64) -> Result<(), JsValue> {
        let document = dom::document()?;
        if debug {
            self.overlay = Some(Rc::new(DebugCanvas::attach(&document, &self.container, size)?));
        }

        let weak = Rc::downgrade(&self.core);
        let runner = Interval::start(&self.window, period_ms.round() as i32, move || {
            with_core(&weak, |core| {
                core.tick(now_ms());
            });
        })?;

        let frames = {
            let weak = Rc::downgrade(&self.core);
            let container = self.container.clone();
            let overlay = self.overlay.clone();
            let resolver = DomResolver::new(document);
            AnimationLoop::start(&self.window, move || {
                with_core(&weak, |core| run_frame(core, &container, &resolver, overlay.as_deref()))
                    .unwrap_or(false)
            })?
        };

        let listeners = self.bind_listeners()?;
        self.loops = Some(ZoneLoops {
            _runner: runner,
            _frames: frames,
            _listeners: listeners,
        });
        Ok(())
    }

    fn bind_listeners(&self) -> Result<Vec<Listener>, JsValue> {
        let mut listeners = Vec::with_capacity(5);

        let weak = Rc::downgrade(&self.core);
        listeners.push(Listener::add(&self.window, "resize", move |_| {
            with_core(&weak, |core| core.signal_resize(now_ms()));
        })?);

        // Press inside the container; move/release anywhere so a drag that
        // leaves the container still ends.
        let pointer = |kind: &'static str, target: &web_sys::EventTarget| {
            let weak = Rc::downgrade(&self.core);
            let container = self.container.clone();
            Listener::add(target, kind, move |event: Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let rect = container.get_bounding_client_rect();
                let x = (event.client_x() as f64 - rect.left()) as f32;
                let y = (event.client_y() as f64 - rect.top()) as f32;
                with_core(&weak, |core| match kind {
                    "pointerdown" => core.pointer_down(x, y),
                    "pointermove" => core.pointer_move(x, y),
                    _ => core.pointer_up(),
                });
            })
        };
        listeners.push(pointer("pointerdown", &self.container)?);
        listeners.push(pointer("pointermove", &self.window)?);
        listeners.push(pointer("pointerup", &self.window)?);
        listeners.push(pointer("pointercancel", &self.window)?);
        Ok(listeners)
    }
}

impl Drop for GravityZone {
    fn drop(&mut self) {
        self.deactivate();
    }
}

/// Run `f` against the zone if it still exists and is not already borrowed
/// (a stray callback racing teardown is dropped).
fn with_core<T>(weak: &Weak<RefCell<ZoneCore>>, f: impl FnOnce(&mut ZoneCore) -> T) -> Option<T> {
    let core = weak.upgrade()?;
    let mut core = core.try_borrow_mut().ok()?;
    Some(f(&mut core))
}

/// One displayed frame: finish a due resize, sync elements, redraw the
/// overlay. Returns `false` once the zone is no longer active.
fn run_frame(
    core: &mut ZoneCore,
    container: &HtmlElement,
    resolver: &DomResolver,
    overlay: Option<&DebugCanvas>,
) -> bool {
    if !core.is_active() {
        return false;
    }
    if core.poll_resize(now_ms()) {
        let size = dom::client_size(container);
        core.apply_resize(size);
        if let Some(overlay) = overlay {
            overlay.resize(size);
        }
    }
    core.sync(resolver);
    if let (Some(overlay), Some(wireframe)) = (overlay, core.wireframe()) {
        overlay.draw(wireframe);
    }
    true
}

/// Read-only view of a zone's simulation context, passed to items
#[wasm_bindgen]
#[derive(Clone)]
pub struct GravityContext {
    inner: SimulationContext,
}

#[wasm_bindgen]
impl GravityContext {
    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.inner.is_active()
    }
}

/// An element that falls, bounces and can be dragged inside a zone
#[wasm_bindgen]
pub struct GravityItem {
    core: Rc<RefCell<ItemCore<DomElement>>>,
    context: SimulationContext,
    window: Window,
}

#[wasm_bindgen]
impl GravityItem {
    /// `x`/`y` place the element's top-left corner (random above the
    /// viewport when omitted); `options` is a JSON object of body overrides.
    #[wasm_bindgen(constructor)]
    pub fn new(
        element: HtmlElement,
        x: Option<f32>,
        y: Option<f32>,
        options: Option<String>,
    ) -> Result<GravityItem, JsValue> {
        let options = parse_options(options.as_deref())?;
        let element = DomElement::new(element, Rc::new(RefCell::new(String::new())));
        Ok(Self {
            core: Rc::new(RefCell::new(ItemCore::new(element, SpawnSpec { x, y, options }))),
            context: SimulationContext::new(),
            window: dom::window()?,
        })
    }

    /// Register the body in the zone behind `context`. Before the zone is
    /// active the item waits and binds when it activates; returns whether
    /// the body was registered now.
    pub fn mount(&mut self, context: &GravityContext) -> bool {
        self.context = context.inner.clone();
        let viewport = dom::viewport_width(&self.window);
        bind_when_active(&self.core, &self.context, viewport)
    }

    pub fn unmount(&mut self) -> bool {
        self.core.borrow_mut().deactivate()
    }

    /// Move the spawn point; a mounted item is re-created under a new label
    pub fn set_spawn(&mut self, x: Option<f32>, y: Option<f32>) -> bool {
        let mut core = self.core.borrow_mut();
        let spec = SpawnSpec { x, y, ..core.spec().clone() };
        let viewport = dom::viewport_width(&self.window);
        core.update_spec(spec, &self.context, viewport)
    }

    pub fn set_options(&mut self, options: Option<String>) -> Result<bool, JsValue> {
        let options = parse_options(options.as_deref())?;
        let mut core = self.core.borrow_mut();
        let spec = SpawnSpec { options, ..core.spec().clone() };
        let viewport = dom::viewport_width(&self.window);
        Ok(core.update_spec(spec, &self.context, viewport))
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.core.borrow().is_bound()
    }

    /// Correlation label (also the element id) while mounted
    #[wasm_bindgen(getter)]
    pub fn label(&self) -> Option<String> {
        self.core.borrow().label().map(str::to_string)
    }
}

fn parse_options(json: Option<&str>) -> Result<BodyOptions, JsValue> {
    match json {
        Some(json) => BodyOptions::from_json(json).map_err(|e| JsValue::from_str(&e)),
        None => Ok(BodyOptions::default()),
    }
}
