use crate::rigid_body::{Aabb, RigidBody, Vec2};
use crate::rigid_body_system::RigidBodySystem;

use super::element::Size;

/// Gap left between bodies placed side by side
const SLOT_GAP: f32 = 1.0;

/// A body that has to be moved, with where it wants to go
struct Escapee {
    index: usize,
    target: Vec2,
    velocity: Vec2,
    /// Direction to search for a free slot along each axis (toward the middle)
    step: Vec2,
}

/// Pull dynamic bodies that ended up outside a (shrunk) container back in.
///
/// A body is out of bounds when its centre is within `margin` of an edge or
/// past it. It is placed `inset` from that edge (at least its own half
/// extent, at most half the container) and its velocity along the violated
/// axis is zeroed so it cannot carry the energy back out.
///
/// Bodies clamped to the same edge or corner would land on one point and
/// the overlap solver would throw them back out, so each one takes the
/// first free slot walking from its target toward the middle of the
/// container, row by row. Returns how many bodies were moved.
pub fn contain_bodies(world: &mut RigidBodySystem, size: Size, margin: f32, inset: f32) -> u32 {
    let mut occupied: Vec<Aabb> = Vec::new();
    let mut escapees: Vec<Escapee> = Vec::new();

    for (index, body) in world.bodies().iter().enumerate() {
        if body.is_static {
            continue;
        }
        let half = half_extents(body);
        let x = clamp_axis(body.pos.x, body.velocity.x, size.width, margin, inset.max(half.x));
        let y = clamp_axis(body.pos.y, body.velocity.y, size.height, margin, inset.max(half.y));
        if !x.clamped && !y.clamped {
            occupied.push(body.aabb);
            continue;
        }
        escapees.push(Escapee {
            index,
            target: Vec2::new(x.pos, y.pos),
            velocity: Vec2::new(x.vel, y.vel),
            step: Vec2::new(x.toward_middle, y.toward_middle),
        });
    }

    for escapee in &escapees {
        let body = &mut world.bodies_mut()[escapee.index];
        let half = half_extents(body);
        let pos = free_slot(escapee, half, size, &occupied).unwrap_or(escapee.target);
        body.set_position(pos);
        body.set_velocity(escapee.velocity);
        occupied.push(body.aabb);
    }

    let moved = escapees.len() as u32;
    if moved > 0 {
        log::debug!("resize: contained {} bodies in {}x{}", moved, size.width, size.height);
    }
    moved
}

struct AxisClamp {
    pos: f32,
    vel: f32,
    clamped: bool,
    toward_middle: f32,
}

fn clamp_axis(pos: f32, vel: f32, extent: f32, margin: f32, inset: f32) -> AxisClamp {
    let inset = inset.min(extent / 2.0).max(0.0);
    let (pos, vel, clamped) = if pos > extent - margin {
        (extent - inset, 0.0, true)
    } else if pos < margin {
        (inset, 0.0, true)
    } else {
        (pos, vel, false)
    };
    let toward_middle = if pos > extent / 2.0 { -1.0 } else { 1.0 };
    AxisClamp { pos, vel, clamped, toward_middle }
}

/// Half size of the body's current (rotated) bounding box
fn half_extents(body: &RigidBody) -> Vec2 {
    (body.aabb.max - body.aabb.min) * 0.5
}

/// First slot from the target, stepping one body width toward the middle
/// along x, then one body height along y, that overlaps nothing placed so
/// far. Slots other than the target must fit the container whole.
fn free_slot(escapee: &Escapee, half: Vec2, size: Size, occupied: &[Aabb]) -> Option<Vec2> {
    let pitch = Vec2::new((half.x * 2.0 + SLOT_GAP).max(1.0), (half.y * 2.0 + SLOT_GAP).max(1.0));
    let fits = |value: f32, target: f32, half: f32, extent: f32| {
        value == target || (value >= half && value <= extent - half)
    };

    let mut row = 0.0;
    loop {
        let y = escapee.target.y + escapee.step.y * pitch.y * row;
        if !fits(y, escapee.target.y, half.y, size.height) {
            return None;
        }
        let mut col = 0.0;
        loop {
            let x = escapee.target.x + escapee.step.x * pitch.x * col;
            if !fits(x, escapee.target.x, half.x, size.width) {
                break;
            }
            let candidate = Vec2::new(x, y);
            let slot = Aabb {
                min: candidate - half,
                max: candidate + half,
            };
            if !occupied.iter().any(|other| other.overlaps(&slot)) {
                return Some(candidate);
            }
            col += 1.0;
        }
        row += 1.0;
    }
}
