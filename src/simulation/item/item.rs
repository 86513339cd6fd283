//! Physics-bound element: one visual element mirrored by one dynamic body.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::random;
use crate::domain::options::BodyOptions;
use crate::rigid_body::RigidBody;

use super::context::{SimulationContext, WorldHandle};
use super::element::{Size, VisualElement};

/// Footprint used when the element has not been laid out yet
pub const FALLBACK_SIZE: Size = Size { width: 100.0, height: 100.0 };

/// Random spawns start this far above the visible area
const SPAWN_Y_MIN: f32 = -600.0;
const SPAWN_Y_RANGE: f32 = 500.0;

/// Inputs that define where and how the body is created. Changing any of
/// them recreates the body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpawnSpec {
    /// Top-left of the element; random when `None`
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub options: BodyOptions,
}

impl SpawnSpec {
    pub fn at(x: f32, y: f32) -> Self {
        Self { x: Some(x), y: Some(y), options: BodyOptions::default() }
    }

    /// Resolve the top-left spawn point for an element of `size`
    pub fn resolve(&self, size: Size, viewport_width: f32) -> (f32, f32) {
        let x = self.x.unwrap_or_else(|| {
            let span = (viewport_width - size.width).max(0.0);
            random::next_f32() * span
        });
        let y = self
            .y
            .unwrap_or_else(|| SPAWN_Y_MIN + random::next_f32() * SPAWN_Y_RANGE);
        (x, y)
    }
}

struct Binding {
    world: WorldHandle,
    body_id: u32,
    label: String,
}

pub struct ItemCore<E: VisualElement> {
    element: E,
    spec: SpawnSpec,
    binding: Option<Binding>,
    /// Mounted while the zone was inactive; binds when the zone publishes
    pending: bool,
}

impl<E: VisualElement> ItemCore<E> {
    /// Wrap an element; it stays hidden until the zone's first sync write.
    pub fn new(element: E, spec: SpawnSpec) -> Self {
        element.set_shown(false);
        Self { element, spec, binding: None, pending: false }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn spec(&self) -> &SpawnSpec {
        &self.spec
    }

    pub fn label(&self) -> Option<&str> {
        self.binding.as_ref().map(|b| b.label.as_str())
    }

    pub fn body_id(&self) -> Option<u32> {
        self.binding.as_ref().map(|b| b.body_id)
    }

    pub fn is_bound(&self) -> bool {
        self.binding.as_ref().map_or(false, |b| b.world.is_alive())
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Register a body in the context's world. No-op (false) when the context
    /// is empty or the item is already bound to that world.
    pub fn activate(&mut self, ctx: &SimulationContext, viewport_width: f32) -> bool {
        let Some(value) = ctx.get() else {
            return false;
        };
        if let Some(binding) = &self.binding {
            if binding.world.same_world(&value.world) && binding.world.contains(binding.body_id) {
                return false;
            }
            self.deactivate();
        }

        let measured = self.element.measure();
        let size = if measured.is_measured() { measured } else { FALLBACK_SIZE };
        let (x, y) = self.spec.resolve(size, viewport_width);
        let params = self.spec.options.resolve();

        let Some((body_id, label)) = value.world.add_item_body(|label| {
            RigidBody::new_rect(
                x + size.width / 2.0,
                y + size.height / 2.0,
                size.width,
                size.height,
                &params,
                label,
            )
        }) else {
            return false;
        };

        self.element.tag(&label);
        log::debug!("item: {} spawned at ({}, {}) size {}x{}", label, x, y, size.width, size.height);
        self.binding = Some(Binding { world: value.world, body_id, label });
        true
    }

    /// Remove the body if its world still exists, and cancel a pending
    /// mount. Idempotent.
    pub fn deactivate(&mut self) -> bool {
        self.pending = false;
        let Some(binding) = self.binding.take() else {
            return false;
        };
        let removed = binding.world.remove_body(binding.body_id);
        if removed {
            log::debug!("item: {} removed", binding.label);
        }
        removed
    }

    /// Replace the spawn inputs. Identical inputs are ignored; otherwise a
    /// bound item is re-created under a new label. Returns whether the
    /// inputs changed.
    pub fn update_spec(&mut self, spec: SpawnSpec, ctx: &SimulationContext, viewport_width: f32) -> bool {
        if spec == self.spec {
            return false;
        }
        self.spec = spec;
        if self.binding.is_some() {
            self.deactivate();
            self.activate(ctx, viewport_width);
        }
        true
    }
}

/// Mount a shared item: bind it now when the zone is active, otherwise as
/// soon as the zone publishes `ctx`. Returns whether it was bound now.
pub fn bind_when_active<E>(item: &Rc<RefCell<ItemCore<E>>>, ctx: &SimulationContext, viewport_width: f32) -> bool
where
    E: VisualElement + 'static,
{
    {
        let Ok(mut core) = item.try_borrow_mut() else {
            return false;
        };
        if core.activate(ctx, viewport_width) {
            core.pending = false;
            return true;
        }
        if ctx.get().is_some() || core.pending {
            return false;
        }
        core.pending = true;
    }

    let weak = Rc::downgrade(item);
    ctx.when_published(move |ctx| {
        let Some(item) = weak.upgrade() else {
            return;
        };
        let Ok(mut core) = item.try_borrow_mut() else {
            log::warn!("item: busy when the zone became active, mount skipped");
            return;
        };
        if core.pending {
            core.pending = false;
            core.activate(ctx, viewport_width);
        }
    });
    log::debug!("item: zone inactive, mount deferred");
    false
}

impl<E: VisualElement> Drop for ItemCore<E> {
    fn drop(&mut self) {
        self.deactivate();
    }
}
