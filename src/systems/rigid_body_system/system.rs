use crate::domain::config::ZoneConfig;
use crate::rigid_body::{RigidBody, Vec2};
use crate::systems::drag::SpringConstraint;

use super::broadphase::find_pairs;
use super::collision::{collide, Manifold};
use super::solver::{solve_position, solve_velocity};

/// Per-step solver parameters
#[derive(Clone, Copy, Debug)]
pub struct StepSettings {
    pub gravity: Vec2,
    pub gravity_scale: f32,
    pub delta_ms: f32,
    pub position_iterations: u32,
    pub velocity_iterations: u32,
    pub constraint_iterations: u32,
}

impl StepSettings {
    pub fn from_config(config: &ZoneConfig) -> Self {
        Self {
            gravity: Vec2::new(config.gravity_x, config.gravity_y),
            gravity_scale: config.gravity_scale,
            delta_ms: config.timestep_ms as f32,
            position_iterations: config.position_iterations,
            velocity_iterations: config.velocity_iterations,
            constraint_iterations: config.constraint_iterations,
        }
    }
}

impl Default for StepSettings {
    fn default() -> Self {
        Self::from_config(&ZoneConfig::default())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct StepReport {
    pub contacts: u32,
}

/// The physics world: every rigid body plus the live spring constraints
pub struct RigidBodySystem {
    bodies: Vec<RigidBody>,
    constraints: Vec<SpringConstraint>,
    next_id: u32,
    next_constraint_id: u32,
    // Scratch buffers reused across steps
    pairs: Vec<(usize, usize)>,
    order: Vec<usize>,
    manifolds: Vec<Manifold>,
}

impl RigidBodySystem {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            constraints: Vec::new(),
            next_id: 1,
            next_constraint_id: 1,
            pairs: Vec::new(),
            order: Vec::new(),
            manifolds: Vec::new(),
        }
    }

    /// Add a body and return its id
    pub fn add_body(&mut self, mut body: RigidBody) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        body.id = id;
        body.update_vertices();
        self.bodies.push(body);
        id
    }

    /// Remove a rigid body by ID, along with any constraint attached to it.
    pub fn remove_body(&mut self, id: u32) -> bool {
        if let Some(idx) = self.bodies.iter().position(|b| b.id == id) {
            // `remove` (not swap_remove) keeps insertion order = stacking order
            self.bodies.remove(idx);
            self.constraints.retain(|c| c.body_id != id);
            return true;
        }
        false
    }

    pub fn remove_by_label(&mut self, label: &str) -> bool {
        match self.find_by_label(label) {
            Some(body) => {
                let id = body.id;
                self.remove_body(id)
            }
            None => false,
        }
    }

    /// Remove all bodies and constraints
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.constraints.clear();
        self.manifolds.clear();
        self.pairs.clear();
        self.next_id = 1;
        self.next_constraint_id = 1;
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn dynamic_body_count(&self) -> usize {
        self.bodies.iter().filter(|b| !b.is_static).count()
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [RigidBody] {
        &mut self.bodies
    }

    pub fn body(&self, id: u32) -> Option<&RigidBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_mut(&mut self, id: u32) -> Option<&mut RigidBody> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn find_by_label(&self, label: &str) -> Option<&RigidBody> {
        self.bodies.iter().find(|b| b.label() == label)
    }

    pub fn find_by_label_mut(&mut self, label: &str) -> Option<&mut RigidBody> {
        self.bodies.iter_mut().find(|b| b.label() == label)
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.find_by_label(label).is_some()
    }

    /// Topmost (most recently added) dynamic body under `point`
    pub fn dynamic_body_at(&self, point: Vec2) -> Option<&RigidBody> {
        self.bodies
            .iter()
            .rev()
            .find(|b| !b.is_static && b.contains_point(point))
    }

    // === CONSTRAINTS ===

    pub fn add_constraint(&mut self, mut constraint: SpringConstraint) -> u32 {
        let id = self.next_constraint_id;
        self.next_constraint_id = self.next_constraint_id.saturating_add(1);
        constraint.id = id;
        self.constraints.push(constraint);
        id
    }

    pub fn remove_constraint(&mut self, id: u32) -> bool {
        let before = self.constraints.len();
        self.constraints.retain(|c| c.id != id);
        self.constraints.len() != before
    }

    pub fn constraint(&self, id: u32) -> Option<&SpringConstraint> {
        self.constraints.iter().find(|c| c.id == id)
    }

    pub fn constraint_mut(&mut self, id: u32) -> Option<&mut SpringConstraint> {
        self.constraints.iter_mut().find(|c| c.id == id)
    }

    pub fn constraints(&self) -> &[SpringConstraint] {
        &self.constraints
    }

    // === STEP ===

    /// Advance the world by one fixed step.
    pub fn update(&mut self, settings: &StepSettings) -> StepReport {
        let dt = settings.delta_ms;
        let dt_sq = dt * dt;

        for body in self.bodies.iter_mut() {
            if body.is_static {
                continue;
            }
            let g = settings.gravity * (body.mass * settings.gravity_scale);
            body.apply_force(g);
            integrate(body, dt_sq);
        }

        self.solve_constraints(settings.constraint_iterations);

        find_pairs(&self.bodies, &mut self.order, &mut self.pairs);
        self.manifolds.clear();
        for &(a, b) in self.pairs.iter() {
            if let Some(m) = collide(a, &self.bodies[a], b, &self.bodies[b]) {
                self.manifolds.push(m);
            }
        }

        solve_position(&mut self.bodies, &self.manifolds, settings.position_iterations);
        self.solve_constraints(settings.constraint_iterations);

        // Constraint and position passes moved positions; refresh velocities
        // before the impulse pass reads them.
        for body in self.bodies.iter_mut() {
            if !body.is_static {
                body.velocity = body.pos - body.prev_pos;
                body.angular_vel = body.angle - body.prev_angle;
            }
        }
        solve_velocity(&mut self.bodies, &self.manifolds, settings.velocity_iterations);

        StepReport {
            contacts: self.manifolds.len() as u32,
        }
    }

    fn solve_constraints(&mut self, iterations: u32) {
        if self.constraints.is_empty() {
            return;
        }
        for _ in 0..iterations {
            for c in self.constraints.iter() {
                if let Some(body) = self.bodies.iter_mut().find(|b| b.id == c.body_id) {
                    c.solve(body);
                }
            }
        }
    }
}

impl Default for RigidBodySystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Position Verlet with air friction; consumes the accumulated force.
fn integrate(body: &mut RigidBody, dt_sq: f32) {
    let damping = 1.0 - body.friction_air;

    let velocity = (body.pos - body.prev_pos) * damping + body.force * (body.inv_mass * dt_sq);
    body.prev_pos = body.pos;
    body.pos += velocity;
    body.velocity = velocity;

    let angular = (body.angle - body.prev_angle) * damping + body.torque * body.inv_inertia * dt_sq;
    body.prev_angle = body.angle;
    body.angle += angular;
    body.angular_vel = angular;

    body.force = Vec2::zero();
    body.torque = 0.0;
    body.update_vertices();
}
