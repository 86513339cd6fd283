use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::config::ZoneConfig;
use crate::rigid_body::Vec2;
use crate::rigid_body_system::{RigidBodySystem, StepSettings};
use crate::systems::debug::Wireframe;
use crate::systems::drag::DragController;

use super::context::{ContextValue, RunnerHandle, SimulationContext, WorldHandle};
use super::debounce::Debouncer;
use super::element::Size;
use super::perf_stats::PerfStats;
use super::runner::Runner;
use super::walls;
use super::{ZoneCore, ZoneState};

pub(super) fn create_zone_core(config: ZoneConfig, debug: bool) -> ZoneCore {
    ZoneCore {
        settings: StepSettings::from_config(&config),
        drag: DragController::new(config.drag_stiffness),
        debouncer: Debouncer::new(config.resize_debounce_ms),
        config,
        debug,
        state: ZoneState::Uninitialized,
        context: SimulationContext::new(),
        world: None,
        runner: None,
        boundaries: None,
        wireframe: None,
        container: Size::default(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

pub(super) fn activate(zone: &mut ZoneCore, size: Size) -> bool {
    if zone.state != ZoneState::Uninitialized {
        log::debug!("zone: activate ignored in state {:?}", zone.state);
        return false;
    }

    let mut world = RigidBodySystem::new();
    let boundaries = walls::create_boundaries(
        &mut world,
        size,
        zone.config.wall_thickness,
        zone.config.ceiling_clearance,
    );
    let world = Rc::new(RefCell::new(world));
    let runner = Rc::new(RefCell::new(Runner::new(
        zone.config.timestep_ms,
        zone.config.max_steps_per_tick,
    )));

    let value = ContextValue {
        world: WorldHandle::new(&world),
        runner: RunnerHandle::new(&runner),
    };
    zone.world = Some(world);
    zone.runner = Some(runner);
    zone.boundaries = Some(boundaries);
    zone.container = size;
    zone.drag = DragController::new(zone.config.drag_stiffness);
    zone.drag.set_bounds(size.width, size.height);
    if zone.debug {
        zone.wireframe = Some(Wireframe::new());
    }
    zone.state = ZoneState::Active;
    // Last: publishing binds items that mounted before activation
    zone.context.publish(value);

    let g = zone.settings.gravity;
    if g == Vec2::zero() {
        log::warn!("zone: activated with zero gravity");
    }
    log::info!(
        "zone: active, container {}x{}, gravity ({}, {})",
        size.width,
        size.height,
        g.x,
        g.y
    );
    true
}
