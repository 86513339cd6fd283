use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::simulation::{ElementResolver, ElementTransform, Size, VisualElement};

const OPACITY: &str = "opacity";
const TRANSFORM: &str = "transform";

/// Resolved elements kept before the cache is swept for detached ones
const MIN_CACHE_SWEEP: usize = 64;

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Inner size of a container (what its absolutely positioned children see)
pub fn client_size(element: &HtmlElement) -> Size {
    Size::new(element.client_width() as f32, element.client_height() as f32)
}

pub fn viewport_width(window: &Window) -> f32 {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0) as f32
}

/// An `HtmlElement` positioned through its inline style. Opacity doubles as
/// the visibility gate; its state is read from the style once and then
/// mirrored here, so frames never read styles back.
#[derive(Clone)]
pub struct DomElement {
    element: HtmlElement,
    css: Rc<RefCell<String>>,
    shown: Rc<Cell<bool>>,
}

impl DomElement {
    pub fn new(element: HtmlElement, css: Rc<RefCell<String>>) -> Self {
        let shown = element
            .style()
            .get_property_value(OPACITY)
            .map_or(false, |v| v == "1");
        Self {
            element,
            css,
            shown: Rc::new(Cell::new(shown)),
        }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    fn set_style(&self, name: &str, value: &str) {
        if let Err(err) = self.element.style().set_property(name, value) {
            log::debug!("dom: could not set {}: {:?}", name, err);
        }
    }
}

impl VisualElement for DomElement {
    fn measure(&self) -> Size {
        Size::new(self.element.offset_width() as f32, self.element.offset_height() as f32)
    }

    fn tag(&self, label: &str) {
        self.element.set_id(label);
    }

    fn apply_transform(&self, transform: &ElementTransform) {
        let Ok(mut css) = self.css.try_borrow_mut() else {
            return;
        };
        transform.write_css(&mut css);
        self.set_style(TRANSFORM, &css);
    }

    fn is_shown(&self) -> bool {
        self.shown.get()
    }

    fn set_shown(&self, shown: bool) {
        self.shown.set(shown);
        self.set_style(OPACITY, if shown { "1" } else { "0" });
    }
}

/// Finds item elements by id; one transform buffer shared across the frame.
///
/// Elements are looked up once per label and cached while they stay in the
/// document, which also keeps each one's gate state between frames.
pub struct DomResolver {
    document: Document,
    css: Rc<RefCell<String>>,
    elements: RefCell<HashMap<String, DomElement>>,
    sweep_at: Cell<usize>,
}

impl DomResolver {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            css: Rc::new(RefCell::new(String::with_capacity(64))),
            elements: RefCell::new(HashMap::new()),
            sweep_at: Cell::new(MIN_CACHE_SWEEP),
        }
    }

    pub fn cached(&self) -> usize {
        self.elements.borrow().len()
    }

    /// Drop entries whose element left the document or was re-tagged
    fn sweep(&self, elements: &mut HashMap<String, DomElement>) {
        elements.retain(|label, el| el.element.is_connected() && el.element.id() == *label);
        self.sweep_at.set((elements.len() * 2).max(MIN_CACHE_SWEEP));
    }
}

impl ElementResolver for DomResolver {
    type Element = DomElement;

    fn resolve(&self, label: &str) -> Option<DomElement> {
        if let Some(cached) = self.elements.borrow().get(label) {
            if cached.element.is_connected() {
                return Some(cached.clone());
            }
        }

        let element = self.document.get_element_by_id(label)?;
        let element = element.dyn_into::<HtmlElement>().ok()?;
        let element = DomElement::new(element, Rc::clone(&self.css));

        let mut elements = self.elements.borrow_mut();
        if elements.len() >= self.sweep_at.get() {
            self.sweep(&mut elements);
        }
        elements.insert(label.to_string(), element.clone());
        Some(element)
    }
}
