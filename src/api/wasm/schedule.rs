//! RAII handles for browser callbacks. Dropping a handle cancels the
//! callback and releases the closure, so a zone tears down by dropping them.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, Window};

/// `setInterval` callback
pub struct Interval {
    window: Window,
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start(window: &Window, period_ms: i32, f: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut()>::new(f);
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms.max(1),
        )?;
        Ok(Self { window: window.clone(), id, _callback: callback })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.id);
    }
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Self-rescheduling `requestAnimationFrame` loop. `f` returns `false` to
/// stop the loop from inside.
pub struct AnimationLoop {
    window: Window,
    id: Rc<Cell<Option<i32>>>,
    slot: FrameSlot,
}

impl AnimationLoop {
    pub fn start(window: &Window, mut f: impl FnMut() -> bool + 'static) -> Result<Self, JsValue> {
        let id = Rc::new(Cell::new(None));
        let slot: FrameSlot = Rc::new(RefCell::new(None));

        let frame = {
            let window = window.clone();
            let id = Rc::clone(&id);
            let slot = Rc::downgrade(&slot);
            Closure::<dyn FnMut()>::new(move || {
                id.set(None);
                if !f() {
                    return;
                }
                let Some(slot) = slot.upgrade() else {
                    return;
                };
                let Ok(slot) = slot.try_borrow() else {
                    return;
                };
                if let Some(cb) = slot.as_ref() {
                    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        Ok(next) => id.set(Some(next)),
                        Err(err) => log::warn!("frame loop stopped: {:?}", err),
                    }
                }
            })
        };

        let first = window.request_animation_frame(frame.as_ref().unchecked_ref())?;
        id.set(Some(first));
        *slot.borrow_mut() = Some(frame);
        Ok(Self { window: window.clone(), id, slot })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Only safe outside the frame callback; zones drop loops from JS calls
        if let Ok(mut slot) = self.slot.try_borrow_mut() {
            slot.take();
        }
    }
}

/// `addEventListener` registration, removed on drop
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn add(target: &EventTarget, kind: &'static str, f: impl FnMut(Event) + 'static) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(f);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), kind, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}
