//! Per-frame synchronization pass: body state -> element transform.

use super::element::{ElementResolver, ElementTransform, VisualElement};
use super::{PerfTimer, ZoneCore};

/// What one pass did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Elements written
    pub synced: u32,
    /// Dynamic bodies with no element under their label (skipped)
    pub missing: u32,
    /// Elements shown for the first time this pass
    pub revealed: u32,
}

pub(super) fn sync<R: ElementResolver>(zone: &mut ZoneCore, resolver: &R) -> SyncReport {
    let mut report = SyncReport::default();
    let Some(world) = zone.world.as_ref() else {
        return report;
    };
    let Ok(world) = world.try_borrow() else {
        return report;
    };

    let timer = if zone.perf_enabled { Some(PerfTimer::start()) } else { None };

    for body in world.bodies().iter().filter(|b| !b.is_static) {
        let Some(element) = resolver.resolve(body.label()) else {
            report.missing += 1;
            continue;
        };
        let transform = ElementTransform::for_body(body, element.measure());
        element.apply_transform(&transform);
        report.synced += 1;
        // The gate only ever opens
        if !element.is_shown() {
            element.set_shown(true);
            report.revealed += 1;
        }
    }

    if let Some(wireframe) = zone.wireframe.as_mut() {
        wireframe.capture(&world, zone.drag.grabbed_body());
    }

    if let Some(timer) = timer {
        zone.perf_stats.sync_ms = timer.elapsed_ms();
        zone.perf_stats.bodies_synced = report.synced;
        zone.perf_stats.elements_missing = report.missing;
    }
    report
}
