use super::containment::contain_bodies;
use super::element::Size;
use super::walls::resize_boundaries;
use super::ZoneCore;

pub(super) fn signal_resize(zone: &mut ZoneCore, now_ms: f64) {
    if zone.is_active() {
        zone.debouncer.signal(now_ms);
    }
}

pub(super) fn poll_resize(zone: &mut ZoneCore, now_ms: f64) -> bool {
    zone.is_active() && zone.debouncer.poll(now_ms)
}

/// Walls first, then the containment sweep against the new walls. Runs
/// under `&mut ZoneCore`, so a second resize cannot start until this one
/// returns.
pub(super) fn apply_resize(zone: &mut ZoneCore, size: Size) -> u32 {
    let (Some(world), Some(walls)) = (zone.world.as_ref(), zone.boundaries.as_ref()) else {
        return 0;
    };
    let Ok(mut world) = world.try_borrow_mut() else {
        log::warn!("resize: world busy, resize skipped");
        return 0;
    };

    zone.container = size;
    zone.drag.set_bounds(size.width, size.height);
    let cfg = &zone.config;
    resize_boundaries(&mut world, walls, size, cfg.wall_thickness, cfg.ceiling_clearance);
    let moved = contain_bodies(&mut world, size, cfg.containment_margin, cfg.containment_inset);
    log::debug!("resize: container now {}x{}", size.width, size.height);
    moved
}
