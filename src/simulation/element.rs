//! Visual side of the engine: what a bound element must support, and how
//! the host finds one by correlation label.

use std::fmt::Write;

use crate::rigid_body::RigidBody;

/// Width/height in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Displayed offset of an element's top-left corner plus rotation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementTransform {
    pub x: f32,
    pub y: f32,
    /// Radians
    pub angle: f32,
}

impl ElementTransform {
    /// Centre the element on the body: `translate(x - w/2, y - h/2) rotate(angle)`
    pub fn for_body(body: &RigidBody, size: Size) -> Self {
        Self {
            x: body.pos.x - size.width / 2.0,
            y: body.pos.y - size.height / 2.0,
            angle: body.angle,
        }
    }

    /// Write the CSS transform into `out` (cleared first) so callers can
    /// reuse one buffer across frames.
    pub fn write_css(&self, out: &mut String) {
        out.clear();
        let _ = write!(
            out,
            "translate3d({}px, {}px, 0) rotate({}rad)",
            self.x, self.y, self.angle
        );
    }
}

/// A rendered node the engine can position. Handles use interior
/// mutability (DOM nodes, `Rc<RefCell<_>>` in tests), so all methods take
/// `&self`.
pub trait VisualElement {
    /// Current rendered footprint; zero when not laid out yet
    fn measure(&self) -> Size;
    /// Tag the element with its body's correlation label
    fn tag(&self, label: &str);
    fn apply_transform(&self, transform: &ElementTransform);
    fn is_shown(&self) -> bool;
    fn set_shown(&self, shown: bool);
}

/// Per-frame lookup from correlation label to element
pub trait ElementResolver {
    type Element: VisualElement;

    fn resolve(&self, label: &str) -> Option<Self::Element>;
}
