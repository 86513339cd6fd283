//! RigidBodySystem - the 2D physics world
//!
//! Rectangle bodies only. Each fixed step:
//! - gravity + position-Verlet integration with air friction
//! - spring constraints (pointer drag)
//! - sort-and-sweep broadphase, SAT narrowphase
//! - positional correction, then sequential velocity impulses
//!   (restitution + Coulomb friction)

mod broadphase;
mod collision;
mod solver;
mod system;

pub use collision::Manifold;
pub use system::{RigidBodySystem, StepReport, StepSettings};
