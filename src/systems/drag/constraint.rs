use crate::rigid_body::{RigidBody, Vec2};

/// Zero-length spring pinning a point on a body to a world-space anchor.
///
/// Solved position-based: each pass moves the attachment point (not the
/// previous position) a `stiffness` fraction of the way to the anchor, so
/// the pull shows up as velocity and released bodies keep their momentum.
/// The correction is shared between translation and rotation by effective
/// mass, so an off-centre grab swings the body around.
#[derive(Clone, Debug)]
pub struct SpringConstraint {
    pub id: u32,
    pub body_id: u32,
    /// World-space anchor (the pointer)
    pub anchor: Vec2,
    /// Attachment point in body-local, unrotated coordinates
    pub local_point: Vec2,
    pub stiffness: f32,
}

impl SpringConstraint {
    pub fn new(body: &RigidBody, grab_point: Vec2, stiffness: f32) -> Self {
        Self {
            id: 0,
            body_id: body.id,
            anchor: grab_point,
            local_point: body.world_to_local(grab_point),
            stiffness: stiffness.clamp(0.0, 1.0),
        }
    }

    /// World position of the attachment point on `body`
    pub fn attachment(&self, body: &RigidBody) -> Vec2 {
        body.local_to_world(self.local_point)
    }

    pub fn solve(&self, body: &mut RigidBody) {
        if body.is_static {
            return;
        }
        let attachment = self.attachment(body);
        let delta = (self.anchor - attachment) * self.stiffness;
        let distance = delta.length();
        if distance < 1e-4 {
            return;
        }
        let normal = delta * (1.0 / distance);
        let r = attachment - body.pos;
        let rn = r.cross(normal);
        let effective = body.inv_mass + rn * rn * body.inv_inertia;
        if effective <= 0.0 {
            return;
        }
        let impulse = distance / effective;
        body.pos += normal * (impulse * body.inv_mass);
        body.angle += rn * impulse * body.inv_inertia;
        body.update_vertices();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::options::BodyParams;

    #[test]
    fn pulls_a_fraction_of_the_way() {
        let mut body = RigidBody::new_rect(0.0, 0.0, 10.0, 10.0, &BodyParams::default(), "b".into());
        let mut c = SpringConstraint::new(&body, Vec2::new(2.0, 0.0), 0.2);
        assert_eq!(c.local_point, Vec2::new(2.0, 0.0));
        c.anchor = Vec2::new(12.0, 0.0);
        c.solve(&mut body);
        assert!((body.pos.x - 2.0).abs() < 1e-5);
        // the pull becomes velocity
        assert!(body.pos.x - body.prev_pos.x > 0.0);
        assert_eq!(body.angle, 0.0);
    }

    #[test]
    fn off_centre_pull_rotates_the_body() {
        let mut body = RigidBody::new_rect(0.0, 0.0, 40.0, 10.0, &BodyParams::default(), "b".into());
        let mut c = SpringConstraint::new(&body, Vec2::new(15.0, 0.0), 0.2);
        c.anchor = Vec2::new(15.0, 10.0);
        c.solve(&mut body);

        // Pulling the right end down turns the card clockwise on screen
        assert!(body.angle > 0.0, "angle = {}", body.angle);
        assert!(body.pos.y > 0.0 && body.pos.y < 2.0, "y = {}", body.pos.y);
        // The grabbed point moved the full fraction toward the anchor
        let moved = c.attachment(&body).y;
        assert!((moved - 2.0).abs() < 0.1, "attachment y = {}", moved);
        assert_eq!(body.prev_angle, 0.0);
    }
}
