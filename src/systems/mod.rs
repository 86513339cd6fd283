//! Systems: rigid bodies, the physics world, pointer drag, debug wireframe

pub mod debug;
pub mod drag;
pub mod rigid_body;
pub mod rigid_body_system;
