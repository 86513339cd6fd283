use crate::rigid_body::Vec2;

use super::perf_stats::PerfStats;
use super::ZoneCore;

pub(super) fn enable_perf_metrics(zone: &mut ZoneCore, enabled: bool) {
    zone.perf_enabled = enabled;
    if !enabled {
        zone.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(zone: &ZoneCore) -> PerfStats {
    zone.perf_stats.clone()
}

/// Host-side only; items cannot reach gravity through their world handle
pub(super) fn set_gravity(zone: &mut ZoneCore, x: f32, y: f32) {
    zone.config.gravity_x = x;
    zone.config.gravity_y = y;
    zone.settings.gravity = Vec2::new(x, y);
}
