//! Narrowphase: separating-axis test between two rectangles

use crate::rigid_body::{RigidBody, Vec2};

/// Contact manifold between bodies `a` and `b` (indices into the body list)
#[derive(Clone, Copy, Debug)]
pub struct Manifold {
    pub a: usize,
    pub b: usize,
    /// Unit normal pointing from `a` towards `b`
    pub normal: Vec2,
    /// Penetration depth along `normal`
    pub depth: f32,
    pub contacts: [Vec2; 2],
    pub contact_count: usize,
    pub restitution: f32,
    pub friction: f32,
}

impl Manifold {
    pub fn points(&self) -> &[Vec2] {
        &self.contacts[..self.contact_count]
    }

    pub fn centroid(&self) -> Vec2 {
        let points = self.points();
        let mut sum = Vec2::zero();
        for &p in points {
            sum += p;
        }
        sum * (1.0 / points.len().max(1) as f32)
    }
}

/// Rectangles only need two axes each: opposite edges are parallel.
fn axes(body: &RigidBody) -> [Vec2; 2] {
    let v = &body.vertices;
    [(v[1] - v[0]).perp().normalize(), (v[2] - v[1]).perp().normalize()]
}

#[inline]
fn project(vertices: &[Vec2; 4], axis: Vec2) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for v in vertices.iter() {
        let d = v.dot(axis);
        min = min.min(d);
        max = max.max(d);
    }
    (min, max)
}

pub(super) fn collide(a_idx: usize, a: &RigidBody, b_idx: usize, b: &RigidBody) -> Option<Manifold> {
    let mut best_depth = f32::INFINITY;
    let mut best_axis = Vec2::zero();

    for axis in axes(a).into_iter().chain(axes(b)) {
        if axis.length_squared() == 0.0 {
            continue;
        }
        let (min_a, max_a) = project(&a.vertices, axis);
        let (min_b, max_b) = project(&b.vertices, axis);
        let overlap = max_a.min(max_b) - min_a.max(min_b);
        if overlap <= 0.0 {
            return None;
        }
        if overlap < best_depth {
            best_depth = overlap;
            best_axis = axis;
        }
    }

    if !best_depth.is_finite() {
        return None;
    }

    let normal = if (b.pos - a.pos).dot(best_axis) < 0.0 {
        -best_axis
    } else {
        best_axis
    };

    let (contacts, contact_count) = find_contacts(a, b, normal);

    Some(Manifold {
        a: a_idx,
        b: b_idx,
        normal,
        depth: best_depth,
        contacts,
        contact_count,
        restitution: a.restitution.max(b.restitution),
        friction: a.friction.min(b.friction),
    })
}

/// Up to two deepest vertices lying inside the other body. Falls back to the
/// support point of `b` against the normal when edges cross with no vertex
/// inside (rotated corner-to-corner cases).
fn find_contacts(a: &RigidBody, b: &RigidBody, normal: Vec2) -> ([Vec2; 2], usize) {
    let mut best = [(Vec2::zero(), f32::NEG_INFINITY); 2];

    let mut consider = |p: Vec2, score: f32| {
        if score > best[0].1 {
            best[1] = best[0];
            best[0] = (p, score);
        } else if score > best[1].1 {
            best[1] = (p, score);
        }
    };

    for &v in b.vertices.iter() {
        if a.contains_point(v) {
            consider(v, -v.dot(normal));
        }
    }
    for &v in a.vertices.iter() {
        if b.contains_point(v) {
            consider(v, v.dot(normal));
        }
    }

    let count = best.iter().filter(|(_, s)| s.is_finite()).count();
    if count > 0 {
        return ([best[0].0, best[1].0], count);
    }

    let mut support = b.vertices[0];
    for &v in b.vertices.iter().skip(1) {
        if v.dot(normal) < support.dot(normal) {
            support = v;
        }
    }
    ([support, support], 1)
}
