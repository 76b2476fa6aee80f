use crate::domain::services::{platform_scroll_lock, ScrollLock, ScrollLockSlot};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Scroll lock backend shared through context (tests and embedders may
/// provide their own; otherwise the platform lock is used)
pub type SharedScrollLock = Rc<dyn ScrollLock>;

/// Keep page scrolling disabled while `locked` is true.
///
/// The guard lives in this component's scope: it is acquired when `locked`
/// turns true, dropped when it turns false, and dropped with the scope when
/// the component unmounts.
pub fn use_scroll_lock(locked: Signal<bool>) {
    let slot = use_hook(|| {
        let lock = try_consume_context::<SharedScrollLock>().unwrap_or_else(platform_scroll_lock);
        Rc::new(RefCell::new(ScrollLockSlot::new(lock)))
    });

    let effect_slot = slot.clone();
    use_effect(move || {
        let locked = locked();
        effect_slot.borrow_mut().sync(locked);
    });

    use_drop(move || slot.borrow_mut().release());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::MemoryScrollLock;
    use dioxus::dioxus_core::NoOpMutations;

    #[derive(Clone, Copy)]
    struct Controls {
        open: Signal<bool>,
        mounted: Signal<bool>,
    }

    type ControlSlot = Rc<RefCell<Option<Controls>>>;

    #[component]
    fn Page() -> Element {
        let open = use_signal(|| false);
        let mounted = use_signal(|| true);
        let controls = use_context::<ControlSlot>();
        use_hook(|| *controls.borrow_mut() = Some(Controls { open, mounted }));

        rsx! {
            if mounted() {
                Flyout { open }
            }
        }
    }

    #[component]
    fn Flyout(open: Signal<bool>) -> Element {
        use_scroll_lock(open);
        rsx! { div {} }
    }

    /// Run queued tasks, effects and re-renders until the tree is idle
    fn settle(dom: &mut VirtualDom) {
        for _ in 0..6 {
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    fn mount() -> (VirtualDom, Rc<MemoryScrollLock>, Controls) {
        let memory = Rc::new(MemoryScrollLock::new());
        let lock: SharedScrollLock = memory.clone();
        let slot: ControlSlot = Rc::default();

        let mut dom = VirtualDom::new(Page)
            .with_root_context(lock)
            .with_root_context(slot.clone());
        dom.rebuild_in_place();
        settle(&mut dom);

        let controls = (*slot.borrow()).expect("page rendered");
        (dom, memory, controls)
    }

    fn set(dom: &mut VirtualDom, mut signal: Signal<bool>, value: bool) {
        dom.in_runtime(|| signal.set(value));
        settle(dom);
    }

    #[test]
    fn test_lock_follows_open_flag() {
        let (mut dom, memory, controls) = mount();
        assert!(!memory.is_scroll_disabled());

        set(&mut dom, controls.open, true);
        assert!(memory.is_scroll_disabled());

        set(&mut dom, controls.open, false);
        assert!(!memory.is_scroll_disabled());

        set(&mut dom, controls.open, true);
        assert!(memory.is_scroll_disabled());
    }

    #[test]
    fn test_unmount_while_open_releases() {
        let (mut dom, memory, controls) = mount();
        set(&mut dom, controls.open, true);
        assert!(memory.is_scroll_disabled());

        set(&mut dom, controls.mounted, false);
        assert!(!memory.is_scroll_disabled());
    }

    #[test]
    fn test_dropping_tree_while_open_releases() {
        let (mut dom, memory, controls) = mount();
        set(&mut dom, controls.open, true);
        drop(dom);
        assert!(!memory.is_scroll_disabled());
    }
}
