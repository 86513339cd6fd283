use crate::rigid_body::{RigidBody, Vec2};

use super::collision::Manifold;

/// Allowed penetration before positional correction kicks in (px)
const POSITION_SLOP: f32 = 0.05;
/// Fraction of the remaining penetration resolved per position iteration
const POSITION_PERCENT: f32 = 0.4;
/// Approach speeds below this (px/step) don't bounce, so stacks can settle
const RESTING_THRESHOLD: f32 = 1.0;

/// Mutable access to two distinct bodies of the same slice
fn pair_mut(bodies: &mut [RigidBody], a: usize, b: usize) -> (&mut RigidBody, &mut RigidBody) {
    debug_assert_ne!(a, b);
    if a < b {
        let (lo, hi) = bodies.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = bodies.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}

/// Split overlapping bodies apart, weighted by inverse mass. Corrections are
/// accumulated in `position_impulse` and applied once at the end, moving the
/// previous position as well so no velocity is injected.
pub(super) fn solve_position(bodies: &mut [RigidBody], manifolds: &[Manifold], iterations: u32) {
    for _ in 0..iterations {
        for m in manifolds.iter() {
            let (a, b) = pair_mut(bodies, m.a, m.b);
            let w = a.inv_mass + b.inv_mass;
            if w <= 0.0 {
                continue;
            }
            let resolved = (b.position_impulse - a.position_impulse).dot(m.normal);
            let remaining = m.depth - resolved;
            if remaining <= POSITION_SLOP {
                continue;
            }
            let correction = (remaining - POSITION_SLOP) * POSITION_PERCENT / w;
            a.position_impulse -= m.normal * (correction * a.inv_mass);
            b.position_impulse += m.normal * (correction * b.inv_mass);
        }
    }

    for body in bodies.iter_mut() {
        if body.is_static {
            body.position_impulse = Vec2::zero();
            continue;
        }
        let impulse = body.position_impulse;
        if impulse.x != 0.0 || impulse.y != 0.0 {
            body.translate(impulse);
            body.position_impulse = Vec2::zero();
        }
    }
}

/// Sequential impulses, one per manifold at the centroid of its contact
/// points: restitution on the first pass, then plain non-penetration;
/// Coulomb friction throughout.
pub(super) fn solve_velocity(bodies: &mut [RigidBody], manifolds: &[Manifold], iterations: u32) {
    for iteration in 0..iterations {
        let first = iteration == 0;
        for m in manifolds.iter() {
            let (a, b) = pair_mut(bodies, m.a, m.b);
            if a.inv_mass + b.inv_mass <= 0.0 {
                continue;
            }
            apply_contact_impulse(a, b, m, m.centroid(), first);
        }
    }

    for body in bodies.iter_mut() {
        if body.is_static {
            continue;
        }
        body.prev_pos = body.pos - body.velocity;
        body.prev_angle = body.angle - body.angular_vel;
    }
}

fn apply_contact_impulse(
    a: &mut RigidBody,
    b: &mut RigidBody,
    m: &Manifold,
    point: Vec2,
    first: bool,
) {
    let n = m.normal;
    let ra = point - a.pos;
    let rb = point - b.pos;

    let rv = b.point_velocity(rb) - a.point_velocity(ra);
    let vn = rv.dot(n);
    if vn >= 0.0 {
        return;
    }

    let restitution = if first && -vn > RESTING_THRESHOLD { m.restitution } else { 0.0 };
    let rna = ra.cross(n);
    let rnb = rb.cross(n);
    let k = a.inv_mass + b.inv_mass + rna * rna * a.inv_inertia + rnb * rnb * b.inv_inertia;
    if k <= 0.0 {
        return;
    }
    let j = -(1.0 + restitution) * vn / k;
    apply_impulse(a, b, n * j, ra, rb);

    // Friction
    let rv = b.point_velocity(rb) - a.point_velocity(ra);
    let tangent = (rv - n * rv.dot(n)).normalize();
    if tangent.length_squared() == 0.0 {
        return;
    }
    let rta = ra.cross(tangent);
    let rtb = rb.cross(tangent);
    let kt = a.inv_mass + b.inv_mass + rta * rta * a.inv_inertia + rtb * rtb * b.inv_inertia;
    if kt <= 0.0 {
        return;
    }
    let max_friction = m.friction * j;
    let jt = (-rv.dot(tangent) / kt).clamp(-max_friction, max_friction);
    apply_impulse(a, b, tangent * jt, ra, rb);
}

#[inline]
fn apply_impulse(a: &mut RigidBody, b: &mut RigidBody, impulse: Vec2, ra: Vec2, rb: Vec2) {
    if !a.is_static {
        a.velocity -= impulse * a.inv_mass;
        a.angular_vel -= ra.cross(impulse) * a.inv_inertia;
    }
    if !b.is_static {
        b.velocity += impulse * b.inv_mass;
        b.angular_vel += rb.cross(impulse) * b.inv_inertia;
    }
}
