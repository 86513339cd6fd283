use crate::domain::options::BodyParams;

use super::vec2::Vec2;

/// Matter-style inertia scale; damps rotation so dropped cards don't spin wildly.
const INERTIA_SCALE: f32 = 4.0;

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Rigid Body - a rectangle moving as a single unit
///
/// Velocity is implicit in `pos - prev_pos` (position Verlet); `velocity` is
/// refreshed after every integration / solve so readers always see the
/// displacement of the last step.
pub struct RigidBody {
    // === Identity ===
    pub id: u32,
    /// Correlation label; immutable once the body is created
    label: String,
    pub is_static: bool,

    // === Physics State ===
    /// World position (center of mass)
    pub pos: Vec2,
    pub prev_pos: Vec2,
    /// Velocity (pixels per step)
    pub velocity: Vec2,
    /// Rotation angle (radians)
    pub angle: f32,
    pub prev_angle: f32,
    /// Angular velocity (radians per step)
    pub angular_vel: f32,
    /// Accumulated force for the current step
    pub force: Vec2,
    pub torque: f32,
    /// Pending positional correction from the contact solver
    pub position_impulse: Vec2,

    // === Mass ===
    pub mass: f32,
    pub inv_mass: f32,
    pub inertia: f32,
    pub inv_inertia: f32,

    // === Shape ===
    pub half_width: f32,
    pub half_height: f32,
    /// Corners relative to the center, unrotated (clockwise in screen space)
    local_vertices: [Vec2; 4],
    /// Corners in world space
    pub vertices: [Vec2; 4],
    pub aabb: Aabb,

    // === Material properties ===
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    pub friction: f32,
    pub friction_air: f32,
}

impl RigidBody {
    /// Create a dynamic rectangular body centred at (x, y)
    pub fn new_rect(x: f32, y: f32, w: f32, h: f32, params: &BodyParams, label: String) -> Self {
        let mut body = Self::blank(x, y, w, h, label);
        let mass = (w * h * params.density).max(f32::EPSILON);
        let inertia = INERTIA_SCALE * mass * (w * w + h * h) / 12.0;
        body.mass = mass;
        body.inv_mass = 1.0 / mass;
        body.inertia = inertia;
        body.inv_inertia = if inertia > 0.0 { 1.0 / inertia } else { 0.0 };
        body.restitution = params.restitution;
        body.friction = params.friction;
        body.friction_air = params.friction_air;
        body.angle = params.angle;
        body.prev_angle = params.angle;
        body.update_vertices();
        body
    }

    /// Create a static (immovable) rectangular body, e.g. a boundary wall
    pub fn new_static_rect(x: f32, y: f32, w: f32, h: f32, label: &str) -> Self {
        let mut body = Self::blank(x, y, w, h, label.to_string());
        body.is_static = true;
        body.friction = 0.1;
        body.update_vertices();
        body
    }

    fn blank(x: f32, y: f32, w: f32, h: f32, label: String) -> Self {
        let half_width = w.max(0.0) / 2.0;
        let half_height = h.max(0.0) / 2.0;
        Self {
            id: 0,
            label,
            is_static: false,
            pos: Vec2::new(x, y),
            prev_pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            angle: 0.0,
            prev_angle: 0.0,
            angular_vel: 0.0,
            force: Vec2::zero(),
            torque: 0.0,
            position_impulse: Vec2::zero(),
            mass: f32::INFINITY,
            inv_mass: 0.0,
            inertia: f32::INFINITY,
            inv_inertia: 0.0,
            half_width,
            half_height,
            local_vertices: rect_corners(half_width, half_height),
            vertices: [Vec2::zero(); 4],
            aabb: Aabb::default(),
            restitution: 0.0,
            friction: 0.1,
            friction_air: 0.0,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn width(&self) -> f32 {
        self.half_width * 2.0
    }

    pub fn height(&self) -> f32 {
        self.half_height * 2.0
    }

    /// Recompute world-space vertices and AABB from pos/angle
    pub fn update_vertices(&mut self) {
        let (sin, cos) = self.angle.sin_cos();
        let mut min = Vec2::new(f32::INFINITY, f32::INFINITY);
        let mut max = Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        for (world, local) in self.vertices.iter_mut().zip(self.local_vertices.iter()) {
            let rx = local.x * cos - local.y * sin;
            let ry = local.x * sin + local.y * cos;
            *world = Vec2::new(self.pos.x + rx, self.pos.y + ry);
            min.x = min.x.min(world.x);
            min.y = min.y.min(world.y);
            max.x = max.x.max(world.x);
            max.y = max.y.max(world.y);
        }
        self.aabb = Aabb { min, max };
    }

    /// Teleport without changing velocity
    pub fn set_position(&mut self, p: Vec2) {
        let delta = p - self.pos;
        self.translate(delta);
    }

    /// Move position and previous position together (velocity preserved)
    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
        self.prev_pos += delta;
        self.update_vertices();
    }

    pub fn set_velocity(&mut self, v: Vec2) {
        self.prev_pos = self.pos - v;
        self.velocity = v;
    }

    pub fn set_angular_velocity(&mut self, w: f32) {
        self.prev_angle = self.angle - w;
        self.angular_vel = w;
    }

    /// Replace the rectangle geometry in place (used for boundary walls on resize)
    pub fn set_rect_geometry(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.half_width = w.max(0.0) / 2.0;
        self.half_height = h.max(0.0) / 2.0;
        self.local_vertices = rect_corners(self.half_width, self.half_height);
        self.pos = Vec2::new(x, y);
        self.prev_pos = self.pos;
        self.velocity = Vec2::zero();
        self.update_vertices();
    }

    /// Apply force for one step
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Point-in-convex-polygon test against the current world vertices
    pub fn contains_point(&self, p: Vec2) -> bool {
        if !self.aabb.contains(p) {
            return false;
        }
        let n = self.vertices.len();
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            if (b - a).cross(p - a) < 0.0 {
                return false;
            }
        }
        true
    }

    /// Local offset of a world point (undoes translation and rotation)
    pub fn world_to_local(&self, p: Vec2) -> Vec2 {
        (p - self.pos).rotate(-self.angle)
    }

    pub fn local_to_world(&self, local: Vec2) -> Vec2 {
        self.pos + local.rotate(self.angle)
    }

    /// Velocity of a body-fixed point at offset `r` from the center
    #[inline]
    pub fn point_velocity(&self, r: Vec2) -> Vec2 {
        self.velocity + Vec2::cross_scalar(self.angular_vel, r)
    }
}

/// Corners ordered so consecutive edges turn clockwise on screen (y down),
/// which makes `cross(edge, p - a) >= 0` mean "inside".
fn rect_corners(hw: f32, hh: f32) -> [Vec2; 4] {
    [
        Vec2::new(-hw, -hh),
        Vec2::new(hw, -hh),
        Vec2::new(hw, hh),
        Vec2::new(-hw, hh),
    ]
}
