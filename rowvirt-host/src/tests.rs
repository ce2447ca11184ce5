use crate::*;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use rowvirt::{Rect, VirtualizerOptions};

fn container(id: u64, width: f64, height: f64) -> MemoryContainer {
    MemoryContainer::new(id, Rect::new(width, height))
}

fn people_list(count: usize) -> VirtualList<MemoryContainer> {
    VirtualList::new(VirtualizerOptions::new(count).with_estimate_size(|_| 50.0))
}

#[test]
fn rect_is_read_synchronously_on_attach() {
    let el = container(1, 800.0, 500.0);
    let mut observer = RectObserver::new(Rect::ZERO);
    assert!(observer.sync(Some(&el)));
    assert_eq!(observer.rect(), Rect::new(800.0, 500.0));
    assert!(observer.is_observing());

    // Same element again: no re-read, no change.
    el.resize(Rect::new(10.0, 10.0));
    assert!(!observer.sync(Some(&el)));
    assert_eq!(observer.rect(), Rect::new(800.0, 500.0));
}

#[test]
fn rect_changes_pass_a_value_equality_gate() {
    let el = container(1, 800.0, 500.0);
    let mut observer = RectObserver::new(Rect::new(800.0, 500.0));
    assert!(!observer.sync(Some(&el)));

    assert!(!observer.on_resize(el.id(), Rect::new(800.0, 500.0)));
    assert!(observer.on_resize(el.id(), Rect::new(800.0, 480.0)));
    assert!(observer.on_resize(el.id(), Rect::new(640.0, 480.0)));
    assert_eq!(observer.rect(), Rect::new(640.0, 480.0));
}

#[test]
fn rect_observer_stops_on_detach_and_rereads_new_element() {
    let first = container(1, 800.0, 500.0);
    let second = container(2, 300.0, 200.0);
    let mut observer = RectObserver::new(Rect::ZERO);
    observer.sync(Some(&first));

    assert!(observer.sync(None::<&MemoryContainer>));
    assert!(!observer.is_observing());
    assert!(!observer.on_resize(first.id(), Rect::new(1.0, 1.0)));
    assert_eq!(observer.rect(), Rect::ZERO);

    assert!(observer.sync(Some(&second)));
    assert_eq!(observer.rect(), Rect::new(300.0, 200.0));
    assert!(!observer.on_resize(first.id(), Rect::new(1.0, 1.0)));
}

#[test]
fn detach_without_attached_element_keeps_initial_rect() {
    let mut observer = RectObserver::new(Rect::new(320.0, 240.0));
    assert!(!observer.sync(None::<&MemoryContainer>));
    assert_eq!(observer.rect(), Rect::new(320.0, 240.0));
}

#[test]
fn scroll_binding_listens_passively_and_publishes_offset() {
    let el = container(1, 800.0, 500.0);
    let mut binding = ScrollBinding::new();
    binding.sync(Some(&el));
    assert_eq!(el.listener_options(), alloc::vec![ListenerOptions::PASSIVE]);
    assert_eq!(binding.events(), 0);

    el.scroll_by(120.0);
    el.scroll_by(30.5);
    assert_eq!(binding.offset(), 150.5);
    assert_eq!(binding.events(), 2);

    // Re-syncing the same element keeps a single subscription.
    binding.sync(Some(&el));
    assert_eq!(el.listener_count(), 1);
}

#[test]
fn scroll_binding_resets_and_releases_on_detach() {
    let el = container(1, 800.0, 500.0);
    let mut binding = ScrollBinding::new();
    binding.sync(Some(&el));
    el.scroll_by(200.0);

    binding.sync(None);
    assert_eq!(binding.offset(), 0.0);
    assert_eq!(el.listener_count(), 0);

    el.scroll_by(50.0);
    assert_eq!(binding.offset(), 0.0);

    // scroll_to without a container is a no-op.
    binding.scroll_to(10.0);
    assert_eq!(el.scroll_top(), 250.0);
}

#[test]
fn scroll_binding_switches_elements_and_drops_subscription() {
    let first = container(1, 800.0, 500.0);
    let second = container(2, 800.0, 500.0);
    second.set_scroll_top(75.0);

    let mut binding = ScrollBinding::new();
    binding.sync(Some(&first));
    binding.sync(Some(&second));
    assert_eq!(first.listener_count(), 0);
    assert_eq!(second.listener_count(), 1);
    assert_eq!(binding.offset(), 75.0);

    drop(binding);
    assert_eq!(second.listener_count(), 0);
}

#[test]
fn scroll_to_uses_default_or_custom_behavior() {
    let el = container(1, 800.0, 500.0);
    let mut binding = ScrollBinding::new();
    binding.sync(Some(&el));

    binding.scroll_to(400.0);
    assert_eq!(el.scroll_top(), 400.0);
    assert_eq!(binding.offset(), 400.0);

    let calls = Rc::new(RefCell::new(Vec::new()));
    let recorded = Rc::clone(&calls);
    binding.set_scroll_to_fn(Some(Rc::new(move |offset: f64, fallback: &dyn Fn(f64)| {
        recorded.borrow_mut().push(offset);
        fallback(offset / 2.0);
    })));
    binding.scroll_to(100.0);
    assert_eq!(*calls.borrow(), alloc::vec![100.0]);
    assert_eq!(el.scroll_top(), 50.0);
}

#[test]
fn list_renders_window_for_mounted_container() {
    let el = container(1, 800.0, 500.0);
    let mut list = people_list(1000);
    list.set_container(Some(el.clone()));

    let frame = list.render();
    assert_eq!(frame.total_size, 50_000.0);
    let indexes: Vec<usize> = frame.items.iter().map(|it| it.index).collect();
    assert_eq!(indexes, (0..=10).collect::<Vec<_>>());

    el.scroll_by(1000.0);
    let frame = list.render();
    assert_eq!(frame.items.first().map(|it| it.index), Some(19));
    assert_eq!(frame.items.last().map(|it| it.index), Some(30));
}

#[test]
fn list_uses_initial_rect_until_mounted() {
    let mut list: VirtualList<MemoryContainer> = VirtualList::new(
        VirtualizerOptions::new(100)
            .with_estimate_size(|_| 50.0)
            .with_initial_rect(Some(Rect::new(800.0, 100.0))),
    );
    let frame = list.render();
    assert_eq!(frame.items.len(), 3);

    let mut bare = people_list(100);
    assert!(bare.render().is_empty());
}

#[test]
fn list_follows_container_resizes() {
    let el = container(1, 800.0, 100.0);
    let mut list = people_list(100);
    list.set_container(Some(el.clone()));
    assert_eq!(list.render().items.len(), 3);

    el.resize(Rect::new(800.0, 300.0));
    assert!(list.on_resize(el.id(), el.bounding_rect()));
    assert_eq!(list.render().items.len(), 7);
    assert!(!list.on_resize(el.id(), el.bounding_rect()));
}

#[test]
fn correction_below_scroll_offset_leaves_container_alone() {
    let el = container(1, 800.0, 500.0);
    let mut list = people_list(1000);
    list.set_container(Some(el.clone()));
    let frame = list.render();

    let item = frame.items.iter().find(|it| it.index == 5).unwrap();
    list.measure_element(&item.measure_ref(), Some(&MemoryElement::new(80.0)));
    assert_eq!(el.scroll_top(), 0.0);

    let frame = list.render();
    assert_eq!(frame.total_size, 50_030.0);
    assert_eq!(list.virtualizer().measurements()[6].start, 330.0);
}

#[test]
fn correction_above_scroll_offset_scrolls_container_by_delta() {
    let el = container(1, 800.0, 500.0);
    let mut list = people_list(1000);
    list.set_container(Some(el.clone()));
    el.set_scroll_top(300.0);
    let frame = list.render();

    let item = frame.items.iter().find(|it| it.index == 5).unwrap();
    assert_eq!(item.start, 250.0);
    list.measure_element(&item.measure_ref(), Some(&MemoryElement::new(80.0)));

    assert_eq!(el.scroll_top(), 330.0);
    assert_eq!(list.scroll_offset(), 330.0);
    let frame = list.render();
    assert_eq!(list.virtualizer().scroll_offset(), 330.0);
    assert_eq!(frame.items.first().map(|it| it.index), Some(5));
}

#[test]
fn correction_goes_through_custom_scroll_to() {
    let el = container(1, 800.0, 500.0);
    let mut list = people_list(1000);
    list.set_container(Some(el.clone()));
    let targets = Rc::new(RefCell::new(Vec::new()));
    let recorded = Rc::clone(&targets);
    list.set_scroll_to_fn(Some(Rc::new(move |offset: f64, fallback: &dyn Fn(f64)| {
        recorded.borrow_mut().push(offset);
        fallback(offset);
    })));

    el.set_scroll_top(600.0);
    let frame = list.render();
    let item = frame.items.first().unwrap().clone();
    list.measure_element(&item.measure_ref(), Some(&MemoryElement::new(20.0)));
    assert_eq!(*targets.borrow(), alloc::vec![570.0]);
    assert_eq!(el.scroll_top(), 570.0);
}

#[test]
fn unmeasurable_elements_are_ignored() {
    let el = container(1, 800.0, 500.0);
    let mut list = people_list(100);
    list.set_container(Some(el.clone()));
    let frame = list.render();
    let item = frame.items[0].measure_ref();

    list.measure_element(&item, None::<&MemoryElement>);
    list.measure_element(&item, Some(&MemoryElement::detached()));
    assert!(!list.virtualizer().is_dirty());
    assert!(list.virtualizer().measured_cache().is_empty());
}

#[test]
fn measure_resets_corrections() {
    let el = container(1, 800.0, 500.0);
    let mut list = people_list(100);
    list.set_container(Some(el));
    let frame = list.render();
    for item in &frame.items {
        list.measure_element(&item.measure_ref(), Some(&MemoryElement::new(60.0)));
    }
    assert_eq!(list.render().total_size, 5000.0 + 11.0 * 10.0);

    list.measure();
    assert_eq!(list.render().total_size, 5000.0);
}

#[test]
fn unmount_releases_listener_and_resets_offset() {
    let el = container(1, 800.0, 500.0);
    let mut list = people_list(1000);
    list.set_container(Some(el.clone()));
    el.scroll_by(700.0);
    assert_eq!(list.scroll_offset(), 700.0);

    list.set_container(None);
    assert_eq!(el.listener_count(), 0);
    assert_eq!(list.scroll_offset(), 0.0);
    assert!(list.container().is_none());

    list.set_container(Some(el.clone()));
    assert_eq!(el.listener_count(), 1);
    drop(list);
    assert_eq!(el.listener_count(), 0);
}

#[test]
fn render_after_unmount_yields_no_items() {
    let el = container(1, 800.0, 500.0);
    let mut list = people_list(1000);
    list.set_container(Some(el.clone()));
    el.scroll_by(300.0);
    assert_eq!(list.render().items.len(), 12);

    list.set_container(None);
    assert_eq!(list.rect(), Rect::ZERO);
    assert_eq!(list.scroll_offset(), 0.0);
    let frame = list.render();
    assert!(frame.is_empty());
    assert_eq!(frame.total_size, 50_000.0);

    list.set_container(Some(el.clone()));
    assert_eq!(list.rect(), Rect::new(800.0, 500.0));
    assert!(!list.render().is_empty());
}

#[test]
fn smooth_scroll_reaches_clamped_target() {
    let el = container(1, 800.0, 500.0);
    let mut list = people_list(100);
    list.set_container(Some(el.clone()));
    list.render();

    let to = list.start_smooth_scroll(10_000.0, 0, 100, Easing::SmoothStep);
    assert_eq!(to, 4_500.0);
    assert!(list.is_animating());

    let mut last = 0.0;
    for now_ms in [0u64, 10, 20, 40, 80, 100, 120] {
        if let Some(offset) = list.tick(now_ms) {
            assert!(offset >= last);
            last = offset;
        }
    }
    assert!(!list.is_animating());
    assert_eq!(el.scroll_top(), 4_500.0);
    assert_eq!(list.render().items.last().map(|it| it.index), Some(99));
}

#[test]
fn direct_scroll_cancels_smooth_scroll() {
    let el = container(1, 800.0, 500.0);
    let mut list = people_list(100);
    list.set_container(Some(el.clone()));
    list.render();

    list.start_smooth_scroll(2_000.0, 0, 200, Easing::Linear);
    list.tick(50);
    assert_eq!(el.scroll_top(), 500.0);

    list.scroll_to_offset(100.0);
    assert!(!list.is_animating());
    assert_eq!(list.tick(100), None);
    assert_eq!(el.scroll_top(), 100.0);
}

#[test]
fn restarted_smooth_scroll_uses_new_easing() {
    let el = container(1, 800.0, 500.0);
    let mut list = people_list(100);
    list.set_container(Some(el.clone()));
    list.render();

    list.start_smooth_scroll(2_000.0, 0, 200, Easing::Linear);
    assert_eq!(list.tick(50), Some(500.0));

    list.start_smooth_scroll(1_000.0, 50, 100, Easing::SmoothStep);
    // A quarter of the way: smoothstep(0.25) = 0.15625, linear would give 625.
    assert_eq!(list.tick(75), Some(578.125));
    assert_eq!(list.tick(150), Some(1_000.0));
    assert!(!list.is_animating());
}

#[test]
fn tween_samples_endpoints_and_retargets() {
    let mut tween = Tween::new(0.0, 100.0, 1_000, 0, Easing::EaseInOutCubic);
    assert_eq!(tween.duration_ms, 1);
    assert_eq!(tween.sample(1_000), 0.0);
    assert_eq!(tween.sample(5_000), 100.0);

    tween = Tween::new(0.0, 100.0, 0, 100, Easing::Linear);
    assert_eq!(tween.sample(25), 25.0);
    tween.retarget(50, 0.0, 50);
    assert_eq!(tween.from, 50.0);
    assert_eq!(tween.sample(75), 25.0);
    assert!(tween.is_done(100));

    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
    }
}
