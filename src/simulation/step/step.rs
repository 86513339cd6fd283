use super::{PerfTimer, ZoneCore};

pub(super) fn tick(zone: &mut ZoneCore, now_ms: f64) -> u32 {
    let Some(runner) = zone.runner.as_ref() else {
        return 0;
    };
    let steps = match runner.try_borrow_mut() {
        Ok(mut runner) => runner.advance(now_ms),
        Err(_) => return 0,
    };
    if steps == 0 {
        return 0;
    }
    step_fixed(zone, steps)
}

/// One fixed step = drag constraint upkeep + world update. The drag
/// controller runs first so a press made since the last step grabs before
/// the bodies move.
pub(super) fn step_fixed(zone: &mut ZoneCore, steps: u32) -> u32 {
    let Some(world) = zone.world.as_ref() else {
        return 0;
    };
    let Ok(mut world) = world.try_borrow_mut() else {
        log::warn!("step: world busy, tick skipped");
        return 0;
    };

    let perf_on = zone.perf_enabled;
    let timer = if perf_on { Some(PerfTimer::start()) } else { None };

    let mut contacts = 0;
    for _ in 0..steps {
        zone.drag.update(&mut world);
        contacts = world.update(&zone.settings).contacts;
    }

    if let Some(timer) = timer {
        zone.perf_stats.step_ms = timer.elapsed_ms();
        zone.perf_stats.steps = steps;
        zone.perf_stats.contacts = contacts;
        zone.perf_stats.body_count = world.body_count() as u32;
    }
    if steps > 1 {
        log::trace!("step: caught up {} steps", steps);
    }
    steps
}
