//! Wireframe snapshot of the world for the debug overlay.
//!
//! Captured once per displayed frame when debug mode is on; the browser
//! layer strokes it onto a canvas. Read-only with respect to the world.

use crate::rigid_body::Vec2;
use crate::rigid_body_system::RigidBodySystem;

#[derive(Clone, Copy, Debug)]
pub struct WireShape {
    pub vertices: [Vec2; 4],
    pub center: Vec2,
    pub angle: f32,
    pub is_static: bool,
    pub grabbed: bool,
}

#[derive(Default)]
pub struct Wireframe {
    pub shapes: Vec<WireShape>,
    /// (anchor, attachment) for every live spring constraint
    pub springs: Vec<(Vec2, Vec2)>,
}

impl Wireframe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capture(&mut self, world: &RigidBodySystem, grabbed: Option<u32>) {
        self.shapes.clear();
        self.springs.clear();
        for body in world.bodies() {
            self.shapes.push(WireShape {
                vertices: body.vertices,
                center: body.pos,
                angle: body.angle,
                is_static: body.is_static,
                grabbed: grabbed == Some(body.id),
            });
        }
        for c in world.constraints() {
            if let Some(body) = world.body(c.body_id) {
                self.springs.push((c.anchor, c.attachment(body)));
            }
        }
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.springs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::options::BodyParams;
    use crate::rigid_body::RigidBody;
    use crate::systems::drag::SpringConstraint;

    #[test]
    fn captures_bodies_and_springs() {
        let mut world = RigidBodySystem::new();
        world.add_body(RigidBody::new_static_rect(0.0, 0.0, 10.0, 10.0, "floor"));
        let id = world.add_body(RigidBody::new_rect(50.0, 50.0, 10.0, 10.0, &BodyParams::default(), "c".into()));
        let c = SpringConstraint::new(world.body(id).unwrap(), Vec2::new(50.0, 50.0), 0.2);
        world.add_constraint(c);

        let mut wf = Wireframe::new();
        wf.capture(&world, Some(id));
        assert_eq!(wf.shapes.len(), 2);
        assert!(wf.shapes[0].is_static);
        assert!(wf.shapes[1].grabbed);
        assert_eq!(wf.springs.len(), 1);
    }
}
