use crate::rigid_body::Vec2;
use crate::rigid_body_system::RigidBodySystem;

use super::constraint::SpringConstraint;

/// Pointer-driven drag: while the pointer is pressed over a dynamic body a
/// spring constraint ties the grabbed point to the pointer; releasing the
/// pointer destroys the constraint.
///
/// Pointer events only record state; the constraint itself is created,
/// moved and destroyed in `update`, which runs once per physics step.
///
/// The anchor is held inside `bounds` (the container), so a pointer that
/// leaves the container drags the body against the wall, never through it.
pub struct DragController {
    pointer: Vec2,
    pressed: bool,
    bounds: Option<Vec2>,
    stiffness: f32,
    constraint_id: Option<u32>,
    grabbed_body: Option<u32>,
}

impl DragController {
    pub fn new(stiffness: f32) -> Self {
        Self {
            pointer: Vec2::zero(),
            pressed: false,
            bounds: None,
            stiffness,
            constraint_id: None,
            grabbed_body: None,
        }
    }

    /// Pointer position in container coordinates
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn grabbed_body(&self) -> Option<u32> {
        self.grabbed_body
    }

    /// Keep the anchor within `[0, width] x [0, height]`
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.bounds = Some(Vec2::new(width.max(0.0), height.max(0.0)));
    }

    /// Where the spring pulls: the pointer, clamped into the bounds
    pub fn anchor(&self) -> Vec2 {
        match self.bounds {
            Some(max) => Vec2::new(self.pointer.x.clamp(0.0, max.x), self.pointer.y.clamp(0.0, max.y)),
            None => self.pointer,
        }
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
        self.pressed = true;
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.pressed = false;
    }

    pub fn update(&mut self, world: &mut RigidBodySystem) {
        if !self.pressed {
            self.release(world);
            return;
        }

        if let Some(id) = self.constraint_id {
            match world.constraint_mut(id) {
                Some(constraint) => {
                    constraint.anchor = self.anchor();
                    return;
                }
                // Grabbed body left the world (item unmounted or world cleared)
                None => {
                    self.constraint_id = None;
                    self.grabbed_body = None;
                }
            }
        }

        let Some(body) = world.dynamic_body_at(self.pointer) else {
            return;
        };
        let body_id = body.id;
        let mut constraint = SpringConstraint::new(body, self.pointer, self.stiffness);
        constraint.anchor = self.anchor();
        self.constraint_id = Some(world.add_constraint(constraint));
        self.grabbed_body = Some(body_id);
        log::trace!("drag: grabbed body {}", body_id);
    }

    fn release(&mut self, world: &mut RigidBodySystem) {
        if let Some(id) = self.constraint_id.take() {
            world.remove_constraint(id);
            log::trace!("drag: released body {:?}", self.grabbed_body);
        }
        self.grabbed_body = None;
    }

    /// Forget any grab without touching a world (used on teardown)
    pub fn reset(&mut self) {
        self.pressed = false;
        self.constraint_id = None;
        self.grabbed_body = None;
    }
}
