use super::{ZoneCore, ZoneState};

pub(super) fn pointer_down(zone: &mut ZoneCore, x: f32, y: f32) {
    if zone.is_active() {
        zone.drag.pointer_down(x, y);
    }
}

pub(super) fn pointer_move(zone: &mut ZoneCore, x: f32, y: f32) {
    if zone.is_active() {
        zone.drag.pointer_move(x, y);
    }
}

pub(super) fn pointer_up(zone: &mut ZoneCore) {
    zone.drag.pointer_up();
}

pub(super) fn deactivate(zone: &mut ZoneCore) -> bool {
    match zone.state {
        ZoneState::Disposed => return false,
        ZoneState::Uninitialized => {
            // Items waiting for activation will never bind
            zone.context.unpublish();
            zone.state = ZoneState::Disposed;
            return true;
        }
        ZoneState::Active => {}
    }

    if let Some(runner) = zone.runner.take() {
        if let Ok(mut runner) = runner.try_borrow_mut() {
            runner.stop();
        };
    }
    if let Some(world) = zone.world.take() {
        match world.try_borrow_mut() {
            Ok(mut world) => world.clear(),
            Err(_) => log::warn!("zone: world busy during teardown, dropped uncleared"),
        };
    }
    zone.context.unpublish();
    zone.debouncer.cancel();
    zone.drag.reset();
    zone.boundaries = None;
    zone.wireframe = None;
    zone.state = ZoneState::Disposed;
    log::info!("zone: disposed");
    true
}
