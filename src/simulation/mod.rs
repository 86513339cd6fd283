//! Gravity zone: owns one physics world and keeps it mirrored onto the
//! visual elements of the items mounted inside it.
//!
//! `ZoneCore` only orchestrates. Each concern lives in its own submodule:
//! activation in init/, the integrator tick in step/, the per-frame
//! synchronization pass in render/, boundary upkeep in resize/, pointer
//! commands and teardown in commands/.
//!
//! The core is platform-agnostic: time is passed in as milliseconds and
//! elements are reached through `ElementResolver`, so everything here runs
//! in native tests. `facade` binds it to the DOM.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::config::ZoneConfig;
use crate::rigid_body_system::{RigidBodySystem, StepSettings};
use crate::systems::debug::Wireframe;
use crate::systems::drag::DragController;

pub mod context;
pub mod element;
#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/runner.rs"]
mod runner;
#[path = "step/step.rs"]
mod step;
#[path = "render/sync.rs"]
mod sync;
#[path = "resize/debounce.rs"]
mod debounce;
#[path = "resize/walls.rs"]
mod walls;
#[path = "resize/containment.rs"]
mod containment;
#[path = "resize/resize.rs"]
mod resize;
#[path = "commands/commands.rs"]
mod commands;
#[path = "item/item.rs"]
mod item;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use context::{ContextValue, RunnerHandle, SimulationContext, WorldHandle};
pub use element::{ElementResolver, ElementTransform, Size, VisualElement};
pub use facade::{GravityContext, GravityItem, GravityZone};
pub use item::{bind_when_active, ItemCore, SpawnSpec, FALLBACK_SIZE};
pub use perf_stats::PerfStats;
pub use perf_timer::now_ms;
pub use runner::Runner;
pub use sync::SyncReport;
pub use walls::{wall_rects, Boundaries, WallRect};

use debounce::Debouncer;
use perf_timer::PerfTimer;

/// Lifecycle of a zone. A disposed zone never comes back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoneState {
    Uninitialized,
    Active,
    Disposed,
}

pub struct ZoneCore {
    config: ZoneConfig,
    settings: StepSettings,
    debug: bool,
    state: ZoneState,
    context: SimulationContext,

    // Present only while active
    world: Option<Rc<RefCell<RigidBodySystem>>>,
    runner: Option<Rc<RefCell<Runner>>>,
    boundaries: Option<Boundaries>,
    wireframe: Option<Wireframe>,

    drag: DragController,
    container: Size,
    debouncer: Debouncer,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl ZoneCore {
    pub fn new(config: ZoneConfig, debug: bool) -> Self {
        init::create_zone_core(config, debug)
    }

    pub fn config(&self) -> &ZoneConfig {
        &self.config
    }

    pub fn state(&self) -> ZoneState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == ZoneState::Active
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Context to hand to items; clones share the zone's slot
    pub fn context(&self) -> SimulationContext {
        self.context.clone()
    }

    pub fn container_size(&self) -> Size {
        self.container
    }

    pub fn boundaries(&self) -> Option<Boundaries> {
        self.boundaries
    }

    /// Build the world for a container of `size` and publish the context.
    /// No-op unless the zone is still uninitialized.
    pub fn activate(&mut self, size: Size) -> bool {
        init::activate(self, size)
    }

    /// Integrator tick at wall time `now_ms`; returns the fixed steps run
    pub fn tick(&mut self, now_ms: f64) -> u32 {
        step::tick(self, now_ms)
    }

    /// Run exactly `steps` fixed steps, bypassing the runner clock
    pub fn step_fixed(&mut self, steps: u32) -> u32 {
        step::step_fixed(self, steps)
    }

    /// Write every dynamic body's state onto its element
    pub fn sync<R: ElementResolver>(&mut self, resolver: &R) -> SyncReport {
        sync::sync(self, resolver)
    }

    /// Container changed size at `now_ms`; the resize runs after the quiet period
    pub fn signal_resize(&mut self, now_ms: f64) {
        resize::signal_resize(self, now_ms);
    }

    /// True once the debounced resize is due (fires once per burst)
    pub fn poll_resize(&mut self, now_ms: f64) -> bool {
        resize::poll_resize(self, now_ms)
    }

    /// Refit walls to `size` and pull escaped bodies back inside
    pub fn apply_resize(&mut self, size: Size) -> u32 {
        resize::apply_resize(self, size)
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        commands::pointer_down(self, x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        commands::pointer_move(self, x, y);
    }

    pub fn pointer_up(&mut self) {
        commands::pointer_up(self);
    }

    pub fn grabbed_body(&self) -> Option<u32> {
        self.drag.grabbed_body()
    }

    /// Stop both loops, clear the world and unpublish the context. Idempotent.
    pub fn deactivate(&mut self) -> bool {
        commands::deactivate(self)
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    pub fn body_count(&self) -> usize {
        self.with_world(|w| w.body_count()).unwrap_or(0)
    }

    pub fn dynamic_body_count(&self) -> usize {
        self.with_world(|w| w.dynamic_body_count()).unwrap_or(0)
    }

    /// Read-only access to the world while active
    pub fn with_world<T>(&self, f: impl FnOnce(&RigidBodySystem) -> T) -> Option<T> {
        let world = self.world.as_ref()?;
        let world = world.try_borrow().ok()?;
        Some(f(&world))
    }

    /// Last captured debug wireframe (debug zones only)
    pub fn wireframe(&self) -> Option<&Wireframe> {
        self.wireframe.as_ref()
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
