//! Simulation context shared between a zone and the items mounted in it.
//!
//! The zone owns the world and the runner; the context only carries weak
//! handles to them. Before activation (and after disposal) the context is
//! empty and every item operation against it is a no-op. Items that mount
//! early queue a callback that runs when the zone publishes.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::domain::labels;
use crate::rigid_body::{RigidBody, Vec2};
use crate::rigid_body_system::RigidBodySystem;

use super::runner::Runner;

// Label collisions are astronomically unlikely; bail out instead of spinning
const MAX_LABEL_ATTEMPTS: u32 = 16;

/// Restricted view of a zone's world: items can add and remove their own
/// dynamic bodies and read body state, nothing else.
#[derive(Clone)]
pub struct WorldHandle {
    world: Weak<RefCell<RigidBodySystem>>,
}

impl WorldHandle {
    pub(crate) fn new(world: &Rc<RefCell<RigidBodySystem>>) -> Self {
        Self { world: Rc::downgrade(world) }
    }

    pub fn is_alive(&self) -> bool {
        self.world.strong_count() > 0
    }

    pub fn same_world(&self, other: &WorldHandle) -> bool {
        Weak::ptr_eq(&self.world, &other.world)
    }

    /// Build a dynamic body under a fresh label unique in this world and add
    /// it. `build` receives the label. Returns `(id, label)`, or `None` when
    /// the world is gone or busy.
    pub fn add_item_body<F>(&self, build: F) -> Option<(u32, String)>
    where
        F: FnOnce(String) -> RigidBody,
    {
        let world = self.world.upgrade()?;
        let Ok(mut world) = world.try_borrow_mut() else {
            log::warn!("item: world busy, body not added");
            return None;
        };

        let mut attempts = 0;
        let label = loop {
            let candidate = labels::generate_item_label();
            if !world.contains_label(&candidate) {
                break candidate;
            }
            attempts += 1;
            if attempts >= MAX_LABEL_ATTEMPTS {
                log::error!("item: could not generate a unique label");
                return None;
            }
        };

        let mut body = build(label.clone());
        body.is_static = false;
        let id = world.add_body(body);
        Some((id, label))
    }

    /// Remove a dynamic body. Walls cannot be removed through a handle.
    pub fn remove_body(&self, id: u32) -> bool {
        let Some(world) = self.world.upgrade() else {
            return false;
        };
        let Ok(mut world) = world.try_borrow_mut() else {
            log::warn!("item: world busy, body {} not removed", id);
            return false;
        };
        let removable = world.body(id).map_or(false, |b| !b.is_static);
        removable && world.remove_body(id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.read(|w| w.body(id).is_some()).unwrap_or(false)
    }

    pub fn body_count(&self) -> usize {
        self.read(|w| w.body_count()).unwrap_or(0)
    }

    pub fn body_position(&self, id: u32) -> Option<Vec2> {
        self.read(|w| w.body(id).map(|b| b.pos)).flatten()
    }

    fn read<T>(&self, f: impl FnOnce(&RigidBodySystem) -> T) -> Option<T> {
        let world = self.world.upgrade()?;
        let world = world.try_borrow().ok()?;
        Some(f(&world))
    }
}

/// Read-only view of the zone's integrator
#[derive(Clone)]
pub struct RunnerHandle {
    runner: Weak<RefCell<Runner>>,
}

impl RunnerHandle {
    pub(crate) fn new(runner: &Rc<RefCell<Runner>>) -> Self {
        Self { runner: Rc::downgrade(runner) }
    }

    pub fn is_running(&self) -> bool {
        self.read(|r| r.is_enabled()).unwrap_or(false)
    }

    pub fn steps_total(&self) -> u64 {
        self.read(|r| r.steps_total()).unwrap_or(0)
    }

    fn read<T>(&self, f: impl FnOnce(&Runner) -> T) -> Option<T> {
        let runner = self.runner.upgrade()?;
        let runner = runner.try_borrow().ok()?;
        Some(f(&runner))
    }
}

#[derive(Clone)]
pub struct ContextValue {
    pub world: WorldHandle,
    pub runner: RunnerHandle,
}

type Waiter = Box<dyn FnOnce(&SimulationContext)>;

/// Scoped handle handed from a zone to its items. Clones share one slot, so
/// an item holding a clone sees the zone publish and unpublish.
#[derive(Clone, Default)]
pub struct SimulationContext {
    slot: Rc<RefCell<Option<ContextValue>>>,
    waiters: Rc<RefCell<Vec<Waiter>>>,
}

impl SimulationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value, `None` while the zone is not active
    pub fn get(&self) -> Option<ContextValue> {
        self.slot.borrow().clone()
    }

    pub fn is_active(&self) -> bool {
        self.slot
            .borrow()
            .as_ref()
            .map_or(false, |value| value.world.is_alive())
    }

    /// Run `f` once the context holds a value: now if it already does,
    /// otherwise when the zone publishes. Dropped if the zone is disposed
    /// first.
    pub fn when_published(&self, f: impl FnOnce(&SimulationContext) + 'static) {
        if self.get().is_some() {
            f(self);
        } else {
            self.waiters.borrow_mut().push(Box::new(f));
        }
    }

    pub(crate) fn publish(&self, value: ContextValue) {
        *self.slot.borrow_mut() = Some(value);
        let waiters = std::mem::take(&mut *self.waiters.borrow_mut());
        for waiter in waiters {
            waiter(self);
        }
    }

    pub(crate) fn unpublish(&self) {
        self.slot.borrow_mut().take();
        self.waiters.borrow_mut().clear();
    }
}
