//! Static boundary walls around the container
//!
//! Walls sit just outside the visible rectangle and are extended by their
//! thickness at both ends so the corners are sealed. The ceiling is lifted by
//! `ceiling_clearance`, leaving room above the container for items that
//! spawn off-screen and fall in.

use crate::domain::labels;
use crate::rigid_body::RigidBody;
use crate::rigid_body_system::RigidBodySystem;

use super::element::Size;

/// Centre/extent of one wall
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Ids of the four walls inside the world
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Boundaries {
    pub floor: u32,
    pub ceiling: u32,
    pub left: u32,
    pub right: u32,
}

/// Geometry in `[floor, ceiling, left, right]` order
pub fn wall_rects(size: Size, thickness: f32, clearance: f32) -> [WallRect; 4] {
    let (w, h, t, c) = (size.width.max(0.0), size.height.max(0.0), thickness, clearance.max(0.0));
    let side_height = h + c + 2.0 * t;
    let side_y = (h - c) / 2.0;
    [
        WallRect { x: w / 2.0, y: h + t / 2.0, width: w + 2.0 * t, height: t },
        WallRect { x: w / 2.0, y: -c - t / 2.0, width: w + 2.0 * t, height: t },
        WallRect { x: -t / 2.0, y: side_y, width: t, height: side_height },
        WallRect { x: w + t / 2.0, y: side_y, width: t, height: side_height },
    ]
}

const WALL_LABELS: [&str; 4] = [labels::FLOOR, labels::CEILING, labels::LEFT_WALL, labels::RIGHT_WALL];

pub fn create_boundaries(world: &mut RigidBodySystem, size: Size, thickness: f32, clearance: f32) -> Boundaries {
    let rects = wall_rects(size, thickness, clearance);
    let mut ids = [0u32; 4];
    for ((id, rect), label) in ids.iter_mut().zip(rects.iter()).zip(WALL_LABELS) {
        *id = world.add_body(RigidBody::new_static_rect(rect.x, rect.y, rect.width, rect.height, label));
    }
    Boundaries { floor: ids[0], ceiling: ids[1], left: ids[2], right: ids[3] }
}

/// Rewrite wall geometry in place. Contacts are rebuilt every step, so no
/// cached state refers to the old shapes.
pub fn resize_boundaries(
    world: &mut RigidBodySystem,
    walls: &Boundaries,
    size: Size,
    thickness: f32,
    clearance: f32,
) {
    let rects = wall_rects(size, thickness, clearance);
    let ids = [walls.floor, walls.ceiling, walls.left, walls.right];
    for (id, rect) in ids.into_iter().zip(rects) {
        match world.body_mut(id) {
            Some(body) => body.set_rect_geometry(rect.x, rect.y, rect.width, rect.height),
            None => log::warn!("resize: boundary body {} missing", id),
        }
    }
}
