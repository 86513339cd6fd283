//! DOM side of the engine: element adapters, the debug overlay and the
//! scheduling handles (interval, animation frame, event listeners) that
//! drive a zone in the browser.

pub mod canvas;
pub mod dom;
pub mod schedule;

pub use crate::simulation::{GravityContext, GravityItem, GravityZone, PerfStats};
