use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;
use crate::core::random;
use crate::domain::labels;
use crate::domain::options::BodyOptions;
use crate::rigid_body::Vec2;

const DT: f64 = 1000.0 / 60.0;

#[derive(Default)]
struct FakeState {
    size: Cell<Size>,
    id: RefCell<String>,
    transform: Cell<Option<ElementTransform>>,
    shown: Cell<bool>,
    reveals: Cell<u32>,
    hides: Cell<u32>,
    writes: Cell<u32>,
}

#[derive(Clone)]
struct FakeElement(Rc<FakeState>);

impl FakeElement {
    fn sized(width: f32, height: f32) -> Self {
        let el = FakeElement(Rc::new(FakeState::default()));
        el.0.size.set(Size::new(width, height));
        el
    }
}

impl VisualElement for FakeElement {
    fn measure(&self) -> Size {
        self.0.size.get()
    }

    fn tag(&self, label: &str) {
        *self.0.id.borrow_mut() = label.to_string();
    }

    fn apply_transform(&self, transform: &ElementTransform) {
        self.0.transform.set(Some(*transform));
        self.0.writes.set(self.0.writes.get() + 1);
    }

    fn is_shown(&self) -> bool {
        self.0.shown.get()
    }

    fn set_shown(&self, shown: bool) {
        if shown && !self.0.shown.get() {
            self.0.reveals.set(self.0.reveals.get() + 1);
        }
        if !shown && self.0.shown.get() {
            self.0.hides.set(self.0.hides.get() + 1);
        }
        self.0.shown.set(shown);
    }
}

/// Stand-in for the document: every registered element, found by id
#[derive(Default)]
struct FakeDom {
    elements: RefCell<Vec<FakeElement>>,
}

impl FakeDom {
    fn add(&self, element: &FakeElement) {
        self.elements.borrow_mut().push(element.clone());
    }
}

impl ElementResolver for FakeDom {
    type Element = FakeElement;

    fn resolve(&self, label: &str) -> Option<FakeElement> {
        self.elements
            .borrow()
            .iter()
            .find(|el| *el.0.id.borrow() == label)
            .cloned()
    }
}

fn active_zone(width: f32, height: f32) -> ZoneCore {
    let mut zone = ZoneCore::new(ZoneConfig::default(), false);
    assert!(zone.activate(Size::new(width, height)));
    zone
}

fn mount(zone: &ZoneCore, dom: &FakeDom, spec: SpawnSpec, size: Size) -> ItemCore<FakeElement> {
    let element = FakeElement::sized(size.width, size.height);
    dom.add(&element);
    let mut item = ItemCore::new(element, spec);
    assert!(item.activate(&zone.context(), 1024.0));
    item
}

fn body_pos(zone: &ZoneCore, id: u32) -> Vec2 {
    zone.with_world(|w| w.body(id).map(|b| b.pos))
        .flatten()
        .expect("body in world")
}

#[test]
fn activation_builds_walls_and_publishes_context() {
    let mut zone = ZoneCore::new(ZoneConfig::default(), false);
    let ctx = zone.context();
    assert_eq!(zone.state(), ZoneState::Uninitialized);
    assert!(!ctx.is_active());

    assert!(zone.activate(Size::new(800.0, 600.0)));
    assert_eq!(zone.state(), ZoneState::Active);
    assert!(ctx.is_active());
    assert_eq!(zone.body_count(), 4);
    assert_eq!(zone.dynamic_body_count(), 0);

    let walls = zone.boundaries().unwrap();
    let labels_found = zone
        .with_world(|w| {
            [walls.floor, walls.ceiling, walls.left, walls.right]
                .map(|id| w.body(id).map(|b| b.label().to_string()).unwrap_or_default())
        })
        .unwrap();
    assert_eq!(labels_found, ["floor", "ceiling", "left", "right"]);
}

#[test]
fn activation_is_not_repeatable() {
    let mut zone = active_zone(800.0, 600.0);
    assert!(!zone.activate(Size::new(800.0, 600.0)));
    assert_eq!(zone.body_count(), 4);

    assert!(zone.deactivate());
    assert!(!zone.activate(Size::new(800.0, 600.0)));
    assert_eq!(zone.state(), ZoneState::Disposed);
}

#[test]
fn item_without_active_zone_is_noop() {
    let zone = ZoneCore::new(ZoneConfig::default(), false);
    let mut item = ItemCore::new(FakeElement::sized(50.0, 50.0), SpawnSpec::at(10.0, 10.0));
    assert!(!item.activate(&zone.context(), 1024.0));
    assert!(item.label().is_none());
    assert!(!item.deactivate());
}

#[test]
fn item_mounted_before_activation_binds_when_zone_activates() {
    let mut zone = ZoneCore::new(ZoneConfig::default(), false);
    let dom = FakeDom::default();
    let element = FakeElement::sized(40.0, 40.0);
    dom.add(&element);
    let item = Rc::new(RefCell::new(ItemCore::new(element.clone(), SpawnSpec::at(100.0, 100.0))));

    assert!(!bind_when_active(&item, &zone.context(), 1024.0));
    assert!(item.borrow().is_pending());
    assert!(!item.borrow().is_bound());

    assert!(zone.activate(Size::new(800.0, 600.0)));
    assert!(item.borrow().is_bound());
    assert!(!item.borrow().is_pending());
    assert_eq!(zone.dynamic_body_count(), 1);

    zone.step_fixed(10);
    assert_eq!(zone.sync(&dom), SyncReport { synced: 1, missing: 0, revealed: 1 });
    assert!(element.is_shown());
}

#[test]
fn pending_mount_is_cancelled_by_unmount_or_drop() {
    let mut zone = ZoneCore::new(ZoneConfig::default(), false);
    let unmounted = Rc::new(RefCell::new(ItemCore::new(FakeElement::sized(40.0, 40.0), SpawnSpec::at(0.0, 0.0))));
    let dropped = Rc::new(RefCell::new(ItemCore::new(FakeElement::sized(40.0, 40.0), SpawnSpec::at(50.0, 0.0))));
    assert!(!bind_when_active(&unmounted, &zone.context(), 1024.0));
    assert!(!bind_when_active(&dropped, &zone.context(), 1024.0));

    assert!(!unmounted.borrow_mut().deactivate());
    drop(dropped);

    assert!(zone.activate(Size::new(800.0, 600.0)));
    assert_eq!(zone.dynamic_body_count(), 0);
    assert!(!unmounted.borrow().is_bound());
}

#[test]
fn mounting_into_active_zone_binds_immediately() {
    let zone = active_zone(800.0, 600.0);
    let item = Rc::new(RefCell::new(ItemCore::new(FakeElement::sized(40.0, 40.0), SpawnSpec::at(0.0, 0.0))));
    assert!(bind_when_active(&item, &zone.context(), 1024.0));
    assert!(!bind_when_active(&item, &zone.context(), 1024.0));
    assert_eq!(zone.dynamic_body_count(), 1);
}

#[test]
fn item_body_is_centred_on_spawn_footprint() {
    let zone = active_zone(800.0, 600.0);
    let dom = FakeDom::default();
    let item = mount(&zone, &dom, SpawnSpec::at(100.0, -100.0), Size::new(50.0, 30.0));

    let label = item.label().unwrap().to_string();
    assert!(labels::is_item_label(&label));
    assert_eq!(*item.element().0.id.borrow(), label);
    assert_eq!(body_pos(&zone, item.body_id().unwrap()), Vec2::new(125.0, -85.0));
    assert_eq!(zone.dynamic_body_count(), 1);
}

#[test]
fn unmeasured_element_uses_fallback_footprint() {
    let zone = active_zone(800.0, 600.0);
    let dom = FakeDom::default();
    let item = mount(&zone, &dom, SpawnSpec::at(0.0, 0.0), Size::default());
    let (w, h) = zone
        .with_world(|w| {
            let b = w.body(item.body_id().unwrap()).unwrap();
            (b.width(), b.height())
        })
        .unwrap();
    assert_eq!((w, h), (FALLBACK_SIZE.width, FALLBACK_SIZE.height));
}

#[test]
fn random_spawn_stays_within_viewport_and_above_it() {
    random::seed(42);
    let zone = active_zone(800.0, 600.0);
    for _ in 0..20 {
        let mut item = ItemCore::new(FakeElement::sized(100.0, 40.0), SpawnSpec::default());
        assert!(item.activate(&zone.context(), 500.0));
        let pos = body_pos(&zone, item.body_id().unwrap());
        let (x, y) = (pos.x - 50.0, pos.y - 20.0);
        assert!((0.0..=400.0).contains(&x), "x = {}", x);
        assert!((-600.0..-100.0).contains(&y), "y = {}", y);
    }
}

#[test]
fn narrow_viewport_spawns_at_left_edge() {
    let spec = SpawnSpec { y: Some(0.0), ..SpawnSpec::default() };
    let (x, _) = spec.resolve(Size::new(300.0, 50.0), 200.0);
    assert_eq!(x, 0.0);
}

#[test]
fn first_sync_reveals_once_and_never_hides() {
    let mut zone = active_zone(800.0, 600.0);
    let dom = FakeDom::default();
    let item = mount(&zone, &dom, SpawnSpec::at(100.0, -100.0), Size::new(50.0, 50.0));
    let el = item.element().clone();
    assert!(!el.is_shown());

    let first = zone.sync(&dom);
    assert_eq!(first, SyncReport { synced: 1, missing: 0, revealed: 1 });
    for t in 1..=30 {
        zone.tick(t as f64 * DT);
        let report = zone.sync(&dom);
        assert_eq!(report.revealed, 0);
    }
    assert!(el.is_shown());
    assert_eq!(el.0.reveals.get(), 1);
    assert_eq!(el.0.hides.get(), 0);
}

#[test]
fn sync_writes_body_transform() {
    let mut zone = active_zone(800.0, 600.0);
    let dom = FakeDom::default();
    let item = mount(&zone, &dom, SpawnSpec::at(200.0, 100.0), Size::new(80.0, 40.0));

    zone.step_fixed(45);
    zone.sync(&dom);

    let (pos, angle) = zone
        .with_world(|w| {
            let b = w.body(item.body_id().unwrap()).unwrap();
            (b.pos, b.angle)
        })
        .unwrap();
    let t = item.element().0.transform.get().unwrap();
    assert_eq!(t.x, pos.x - 40.0);
    assert_eq!(t.y, pos.y - 20.0);
    assert_eq!(t.angle, angle);
    // It has been falling
    assert!(pos.y > 120.0);
}

#[test]
fn sync_skips_bodies_without_elements() {
    let mut zone = active_zone(800.0, 600.0);
    let dom = FakeDom::default();
    let orphan_dom = FakeDom::default();
    let _shown = mount(&zone, &dom, SpawnSpec::at(10.0, 10.0), Size::new(20.0, 20.0));
    let _orphan = mount(&zone, &orphan_dom, SpawnSpec::at(100.0, 10.0), Size::new(20.0, 20.0));

    let report = zone.sync(&dom);
    assert_eq!(report.synced, 1);
    assert_eq!(report.missing, 1);
}

#[test]
fn unmount_removes_exactly_one_body() {
    let zone = active_zone(800.0, 600.0);
    let dom = FakeDom::default();
    let mut a = mount(&zone, &dom, SpawnSpec::at(10.0, 10.0), Size::new(20.0, 20.0));
    let _b = mount(&zone, &dom, SpawnSpec::at(100.0, 10.0), Size::new(20.0, 20.0));
    assert_eq!(zone.body_count(), 6);

    assert!(a.deactivate());
    assert_eq!(zone.body_count(), 5);
    assert!(!a.deactivate());
    assert_eq!(zone.body_count(), 5);
}

#[test]
fn dropping_an_item_unmounts_it() {
    let zone = active_zone(800.0, 600.0);
    let dom = FakeDom::default();
    let item = mount(&zone, &dom, SpawnSpec::at(10.0, 10.0), Size::new(20.0, 20.0));
    drop(item);
    assert_eq!(zone.dynamic_body_count(), 0);
}

#[test]
fn changing_spawn_inputs_recreates_body_under_new_label() {
    let zone = active_zone(800.0, 600.0);
    let dom = FakeDom::default();
    let mut item = mount(&zone, &dom, SpawnSpec::at(10.0, 10.0), Size::new(20.0, 20.0));
    let ctx = zone.context();
    let old_label = item.label().unwrap().to_string();

    assert!(!item.update_spec(SpawnSpec::at(10.0, 10.0), &ctx, 1024.0));
    assert_eq!(item.label().unwrap(), old_label);

    assert!(item.update_spec(SpawnSpec::at(300.0, 50.0), &ctx, 1024.0));
    let new_label = item.label().unwrap().to_string();
    assert_ne!(new_label, old_label);
    assert_eq!(*item.element().0.id.borrow(), new_label);
    assert_eq!(zone.dynamic_body_count(), 1);
    assert_eq!(body_pos(&zone, item.body_id().unwrap()), Vec2::new(310.0, 60.0));

    let bouncy = SpawnSpec {
        options: BodyOptions { restitution: Some(0.95), ..BodyOptions::default() },
        ..SpawnSpec::at(300.0, 50.0)
    };
    assert!(item.update_spec(bouncy, &ctx, 1024.0));
    let restitution = zone
        .with_world(|w| w.body(item.body_id().unwrap()).unwrap().restitution)
        .unwrap();
    assert_eq!(restitution, 0.95);
    assert_eq!(zone.dynamic_body_count(), 1);
}

#[test]
fn labels_are_unique_across_items() {
    let zone = active_zone(800.0, 600.0);
    let dom = FakeDom::default();
    let items: Vec<_> = (0..50)
        .map(|i| mount(&zone, &dom, SpawnSpec::at(i as f32, 0.0), Size::new(10.0, 10.0)))
        .collect();
    let mut labels: Vec<_> = items.iter().map(|i| i.label().unwrap().to_string()).collect();
    labels.sort();
    labels.dedup();
    assert_eq!(labels.len(), 50);
}

#[test]
fn resize_clamps_escaped_bodies_and_zeroes_violated_axis() {
    let mut zone = active_zone(800.0, 600.0);
    let dom = FakeDom::default();
    let items: Vec<_> = (0..10)
        .map(|i| {
            let spec = SpawnSpec::at(650.0, 30.0 + 25.0 * i as f32);
            mount(&zone, &dom, spec, Size::new(20.0, 20.0))
        })
        .collect();
    // Give every body some motion on both axes
    set_velocity_all(&mut zone, Vec2::new(4.0, -1.5));

    assert_eq!(zone.apply_resize(Size::new(400.0, 300.0)), 10);
    for item in &items {
        let (pos, vel) = zone
            .with_world(|w| {
                let b = w.body(item.body_id().unwrap()).unwrap();
                (b.pos, b.velocity)
            })
            .unwrap();
        assert_eq!(pos.x, 350.0);
        assert_eq!(vel.x, 0.0);
        assert_eq!(vel.y, -1.5);
    }

    zone.step_fixed(1);
    for item in &items {
        let pos = body_pos(&zone, item.body_id().unwrap());
        assert!(pos.x <= 400.0 && pos.y <= 300.0, "escaped to {:?}", pos);
    }

    zone.step_fixed(600);
    for item in &items {
        let pos = body_pos(&zone, item.body_id().unwrap());
        assert!((0.0..=400.0).contains(&pos.x), "x = {}", pos.x);
        assert!((0.0..=300.0).contains(&pos.y), "y = {}", pos.y);
    }
}

#[test]
fn resize_into_corner_keeps_clamped_bodies_apart() {
    let mut zone = active_zone(800.0, 600.0);
    let dom = FakeDom::default();
    let items: Vec<_> = (0..10)
        .map(|i| {
            let spec = SpawnSpec::at(520.0 + 25.0 * i as f32, 540.0 - 45.0 * i as f32);
            mount(&zone, &dom, spec, Size::new(40.0, 40.0))
        })
        .collect();
    // Let the pile come to rest in the bottom-right of the big container
    zone.step_fixed(600);

    assert_eq!(zone.apply_resize(Size::new(400.0, 300.0)), 10);
    let placed: Vec<Vec2> = items
        .iter()
        .map(|item| body_pos(&zone, item.body_id().unwrap()))
        .collect();
    for (i, a) in placed.iter().enumerate() {
        for b in &placed[i + 1..] {
            let apart = (a.x - b.x).abs() >= 39.99 || (a.y - b.y).abs() >= 39.99;
            assert!(apart, "{:?} stacked on {:?}", a, b);
        }
    }

    zone.step_fixed(1);
    for item in &items {
        let pos = body_pos(&zone, item.body_id().unwrap());
        assert!((0.0..=400.0).contains(&pos.x), "escaped to {:?}", pos);
        assert!((0.0..=300.0).contains(&pos.y), "escaped to {:?}", pos);
    }

    zone.step_fixed(300);
    for item in &items {
        let pos = body_pos(&zone, item.body_id().unwrap());
        assert!((0.0..=400.0).contains(&pos.x), "x = {}", pos.x);
        assert!((0.0..=300.0).contains(&pos.y), "y = {}", pos.y);
    }
}

fn set_velocity_all(zone: &mut ZoneCore, v: Vec2) {
    let world = zone.world.as_ref().unwrap();
    for body in world.borrow_mut().bodies_mut().iter_mut().filter(|b| !b.is_static) {
        body.set_velocity(v);
    }
}

#[test]
fn resize_refits_walls() {
    let mut zone = active_zone(0.0, 0.0);
    zone.apply_resize(Size::new(640.0, 480.0));
    let walls = zone.boundaries().unwrap();
    let (floor_y, right_x) = zone
        .with_world(|w| (w.body(walls.floor).unwrap().pos.y, w.body(walls.right).unwrap().pos.x))
        .unwrap();
    assert_eq!(floor_y, 530.0);
    assert_eq!(right_x, 690.0);
    assert_eq!(zone.container_size(), Size::new(640.0, 480.0));
}

#[test]
fn resize_is_debounced() {
    let mut zone = active_zone(800.0, 600.0);
    zone.signal_resize(0.0);
    zone.signal_resize(120.0);
    assert!(!zone.poll_resize(250.0));
    assert!(zone.poll_resize(320.0));
    assert!(!zone.poll_resize(400.0));
}

#[test]
fn items_settle_inside_container() {
    let mut zone = active_zone(600.0, 400.0);
    let dom = FakeDom::default();
    let items: Vec<_> = (0..6)
        .map(|i| mount(&zone, &dom, SpawnSpec::at(60.0 + 80.0 * i as f32, -300.0), Size::new(60.0, 40.0)))
        .collect();

    zone.step_fixed(900);
    for item in &items {
        let pos = body_pos(&zone, item.body_id().unwrap());
        assert!((0.0..=600.0).contains(&pos.x), "x = {}", pos.x);
        // Resting on the floor
        assert!((340.0..=400.0).contains(&pos.y), "y = {}", pos.y);
    }
}

#[test]
fn tick_follows_wall_time_with_cap() {
    let mut zone = active_zone(800.0, 600.0);
    assert_eq!(zone.tick(1000.0), 0);
    assert_eq!(zone.tick(1000.0 + 3.0 * DT), 3);
    assert_eq!(zone.tick(5000.0), ZoneConfig::default().max_steps_per_tick);

    let config = ZoneConfig { max_steps_per_tick: 100, ..ZoneConfig::default() };
    let mut zone = ZoneCore::new(config, false);
    zone.activate(Size::new(800.0, 600.0));
    zone.tick(0.0);
    assert_eq!(zone.tick(1000.0), 60);
}

#[test]
fn deactivate_freezes_everything() {
    let mut zone = active_zone(800.0, 600.0);
    let dom = FakeDom::default();
    let mut item = mount(&zone, &dom, SpawnSpec::at(100.0, 100.0), Size::new(40.0, 40.0));
    let ctx = zone.context();
    zone.tick(0.0);
    zone.tick(10.0 * DT);
    zone.sync(&dom);
    let writes = item.element().0.writes.get();
    let last = item.element().0.transform.get();

    assert!(zone.deactivate());
    assert!(!zone.deactivate());
    assert_eq!(zone.state(), ZoneState::Disposed);
    assert!(!ctx.is_active());

    assert_eq!(zone.tick(20.0 * DT), 0);
    assert_eq!(zone.sync(&dom), SyncReport::default());
    assert_eq!(item.element().0.writes.get(), writes);
    assert_eq!(item.element().0.transform.get(), last);
    assert_eq!(zone.body_count(), 0);

    // Removal against the dropped world is skipped
    assert!(!item.deactivate());
    assert!(!item.activate(&ctx, 1024.0));
}

#[test]
fn deactivate_before_activate_disposes() {
    let mut zone = ZoneCore::new(ZoneConfig::default(), false);
    assert!(zone.deactivate());
    assert!(!zone.activate(Size::new(100.0, 100.0)));
}

#[test]
fn pointer_drag_pulls_item_and_release_drops_it() {
    let config = ZoneConfig { gravity_y: 0.0, ..ZoneConfig::default() };
    let mut zone = ZoneCore::new(config, false);
    zone.activate(Size::new(800.0, 600.0));
    let dom = FakeDom::default();
    let item = mount(&zone, &dom, SpawnSpec::at(100.0, 100.0), Size::new(60.0, 60.0));
    let id = item.body_id().unwrap();

    zone.pointer_down(130.0, 130.0);
    zone.step_fixed(1);
    assert_eq!(zone.grabbed_body(), Some(id));

    zone.pointer_move(400.0, 300.0);
    zone.step_fixed(60);
    let pos = body_pos(&zone, id);
    assert!(pos.x > 300.0 && pos.y > 220.0, "body only reached {:?}", pos);

    zone.pointer_up();
    zone.step_fixed(1);
    assert_eq!(zone.grabbed_body(), None);
    assert_eq!(zone.with_world(|w| w.constraints().len()), Some(0));
}

#[test]
fn dragging_past_the_wall_keeps_item_inside() {
    let config = ZoneConfig { gravity_y: 0.0, ..ZoneConfig::default() };
    let mut zone = ZoneCore::new(config, false);
    zone.activate(Size::new(800.0, 600.0));
    let dom = FakeDom::default();
    let item = mount(&zone, &dom, SpawnSpec::at(600.0, 300.0), Size::new(60.0, 60.0));
    let id = item.body_id().unwrap();

    zone.pointer_down(630.0, 330.0);
    zone.step_fixed(1);
    zone.pointer_move(1400.0, 330.0);
    zone.step_fixed(120);
    assert_eq!(zone.grabbed_body(), Some(id));
    let held = body_pos(&zone, id);
    assert!(held.x <= 801.0, "held at {:?}", held);

    zone.pointer_up();
    zone.step_fixed(120);
    let released = body_pos(&zone, id);
    assert!(released.x > 0.0 && released.x < 800.0, "released at {:?}", released);
    assert!(released.y > 0.0 && released.y < 600.0, "released at {:?}", released);
}

#[test]
fn pointer_on_wall_grabs_nothing() {
    let mut zone = active_zone(800.0, 600.0);
    zone.pointer_down(400.0, 650.0);
    zone.step_fixed(1);
    assert_eq!(zone.grabbed_body(), None);
}

#[test]
fn gravity_is_host_controlled() {
    let mut zone = active_zone(800.0, 600.0);
    let dom = FakeDom::default();
    let item = mount(&zone, &dom, SpawnSpec::at(100.0, 100.0), Size::new(40.0, 40.0));
    zone.set_gravity(0.0, 0.0);
    zone.step_fixed(30);
    assert_eq!(body_pos(&zone, item.body_id().unwrap()), Vec2::new(120.0, 120.0));
}

#[test]
fn perf_stats_zero_until_enabled() {
    let mut zone = active_zone(800.0, 600.0);
    let dom = FakeDom::default();
    let _item = mount(&zone, &dom, SpawnSpec::at(100.0, 100.0), Size::new(40.0, 40.0));

    zone.step_fixed(2);
    zone.sync(&dom);
    let stats = zone.get_perf_stats();
    assert_eq!(stats.steps(), 0);
    assert_eq!(stats.bodies_synced(), 0);

    zone.enable_perf_metrics(true);
    zone.step_fixed(3);
    zone.sync(&dom);
    let stats = zone.get_perf_stats();
    assert_eq!(stats.steps(), 3);
    assert_eq!(stats.body_count(), 5);
    assert_eq!(stats.bodies_synced(), 1);
    assert_eq!(stats.elements_missing(), 0);

    zone.enable_perf_metrics(false);
    assert_eq!(zone.get_perf_stats().steps(), 0);
}

#[test]
fn debug_zone_captures_wireframe() {
    let mut zone = ZoneCore::new(ZoneConfig::default(), true);
    zone.activate(Size::new(800.0, 600.0));
    let dom = FakeDom::default();
    let _item = mount(&zone, &dom, SpawnSpec::at(100.0, 100.0), Size::new(40.0, 40.0));

    zone.sync(&dom);
    let wireframe = zone.wireframe().unwrap();
    assert_eq!(wireframe.shapes.len(), 5);
    assert_eq!(wireframe.shapes.iter().filter(|s| s.is_static).count(), 4);

    zone.deactivate();
    assert!(zone.wireframe().is_none());
}

#[test]
fn plain_zone_has_no_wireframe() {
    let mut zone = active_zone(800.0, 600.0);
    zone.sync(&FakeDom::default());
    assert!(zone.wireframe().is_none());
}
