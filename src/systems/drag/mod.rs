//! Pointer drag: spring constraint + the controller that owns its lifetime

mod constraint;
mod controller;

pub use constraint::SpringConstraint;
pub use controller::DragController;
