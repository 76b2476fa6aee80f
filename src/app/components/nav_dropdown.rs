use crate::domain::models::PanelEntry;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Interactions that can open or close a mega-menu item
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownEvent {
    PointerEnter,
    PointerLeave,
    TriggerFocus,
    TriggerClick,
    Escape,
    /// Focus moved to an element outside the item
    FocusLeft,
    /// Pointer pressed somewhere outside the item
    OutsidePress,
}

impl DropdownEvent {
    pub fn next_open(self, open: bool) -> bool {
        match self {
            DropdownEvent::PointerEnter | DropdownEvent::TriggerFocus => true,
            DropdownEvent::TriggerClick => !open,
            DropdownEvent::PointerLeave
            | DropdownEvent::Escape
            | DropdownEvent::FocusLeft
            | DropdownEvent::OutsidePress => false,
        }
    }

    /// Map a focus-out to an event. `next_focus_inside` is `None` when the
    /// browser reports no next target (focus went to the page itself); the
    /// pointer handlers decide in that case.
    pub fn from_focus_out(next_focus_inside: Option<bool>) -> Option<Self> {
        match next_focus_inside {
            Some(false) => Some(DropdownEvent::FocusLeft),
            Some(true) | None => None,
        }
    }
}

/// DOM id of a dropdown item, used to tell inside from outside targets
pub fn item_id(label: &str) -> String {
    let slug = label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    format!("nav-menu-{slug}")
}

/// Mega-menu item: a trigger button and a panel shown while open.
///
/// The open flag is owned by the caller so the nav can restyle itself
/// while a panel is showing. The trigger carries `data-state` for styling.
/// The panel closes when the pointer or keyboard focus leaves the item, on
/// Escape, and on a pointer press anywhere outside it.
#[component]
pub fn NavDropdown(
    label: &'static str,
    open: bool,
    on_open_change: EventHandler<bool>,
    children: Element,
) -> Element {
    let state = if open { "open" } else { "closed" };
    let id = item_id(label);
    let emit = move |event: DropdownEvent| on_open_change.call(event.next_open(open));

    use_outside_press(id.clone(), open, move || {
        on_open_change.call(DropdownEvent::OutsidePress.next_open(true))
    });

    let focus_id = id.clone();
    rsx! {
        li {
            id: "{id}",
            class: "c-nav-menu__item",
            onmouseenter: move |_| emit(DropdownEvent::PointerEnter),
            onmouseleave: move |_| emit(DropdownEvent::PointerLeave),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    emit(DropdownEvent::Escape);
                }
            },
            onfocusout: move |evt: FocusEvent| {
                if let Some(event) = DropdownEvent::from_focus_out(focus_moved_inside(&focus_id, &evt)) {
                    emit(event);
                }
            },

            button {
                class: "c-nav-menu__trigger",
                r#type: "button",
                "data-state": "{state}",
                aria_expanded: "{open}",
                onclick: move |_| emit(DropdownEvent::TriggerClick),
                onfocus: move |_| emit(DropdownEvent::TriggerFocus),
                "{label}"
                span { class: "c-nav-menu__chevron", aria_hidden: "true", "▾" }
            }

            if open {
                div { class: "c-nav-menu__content", "data-state": "{state}",
                    {children}
                }
            }
        }
    }
}

/// Grid of panel entries with title and description
#[component]
pub fn PanelList(entries: &'static [PanelEntry]) -> Element {
    rsx! {
        ul { class: "c-nav-panel",
            for entry in entries.iter() {
                li { key: "{entry.href}",
                    Link {
                        to: entry.href,
                        class: "c-nav-panel__link",
                        div { class: "c-nav-panel__title", "{entry.title}" }
                        p { class: "c-nav-panel__description", "{entry.description}" }
                    }
                }
            }
        }
    }
}

/// Listen for pointer presses outside the item while `open` is true.
fn use_outside_press(id: String, open: bool, on_outside: impl Fn() + Clone + 'static) {
    let listener = use_hook(|| Rc::new(RefCell::new(None::<OutsidePressListener>)));

    let effect_listener = listener.clone();
    use_effect(use_reactive((&open,), move |(open,)| {
        let mut slot = effect_listener.borrow_mut();
        match (open, slot.is_some()) {
            (true, false) => *slot = OutsidePressListener::attach(id.clone(), on_outside.clone()),
            (false, true) => *slot = None,
            _ => {}
        }
    }));

    use_drop(move || {
        listener.borrow_mut().take();
    });
}

#[cfg(target_arch = "wasm32")]
fn focus_moved_inside(id: &str, evt: &FocusEvent) -> Option<bool> {
    let data = evt.data();
    let next = data
        .downcast::<web_sys::FocusEvent>()
        .and_then(|e| e.related_target())?;
    Some(dom::contains(id, next))
}

// No DOM to inspect; leave the decision to pointer and keyboard handlers
#[cfg(not(target_arch = "wasm32"))]
fn focus_moved_inside(_id: &str, _evt: &FocusEvent) -> Option<bool> {
    None
}

#[cfg(target_arch = "wasm32")]
use dom::OutsidePressListener;

#[cfg(target_arch = "wasm32")]
mod dom {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    /// Whether `target` is the item with `id` or one of its descendants
    pub fn contains(id: &str, target: web_sys::EventTarget) -> bool {
        let Ok(node) = target.dyn_into::<web_sys::Node>() else {
            return false;
        };
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .is_some_and(|item| item.contains(Some(&node)))
    }

    /// Document-level `pointerdown` listener, removed on drop
    pub struct OutsidePressListener {
        callback: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl OutsidePressListener {
        pub fn attach(id: String, on_outside: impl Fn() + 'static) -> Option<Self> {
            let document = web_sys::window()?.document()?;
            let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |evt: web_sys::Event| {
                let inside = evt.target().is_some_and(|target| contains(&id, target));
                if !inside {
                    on_outside();
                }
            });
            document
                .add_event_listener_with_callback("pointerdown", callback.as_ref().unchecked_ref())
                .ok()?;
            Some(Self { callback })
        }
    }

    impl Drop for OutsidePressListener {
        fn drop(&mut self) {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document.remove_event_listener_with_callback(
                    "pointerdown",
                    self.callback.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

/// Server and native renders have no document, so the listener is inert
#[cfg(not(target_arch = "wasm32"))]
struct OutsidePressListener;

#[cfg(not(target_arch = "wasm32"))]
impl OutsidePressListener {
    fn attach(_id: String, _on_outside: impl Fn() + 'static) -> Option<Self> {
        Some(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::hover_opens(DropdownEvent::PointerEnter, false, true)]
    #[case::focus_opens(DropdownEvent::TriggerFocus, false, true)]
    #[case::click_opens(DropdownEvent::TriggerClick, false, true)]
    #[case::click_closes(DropdownEvent::TriggerClick, true, false)]
    #[case::pointer_leave_closes(DropdownEvent::PointerLeave, true, false)]
    #[case::escape_closes(DropdownEvent::Escape, true, false)]
    #[case::focus_leaving_closes(DropdownEvent::FocusLeft, true, false)]
    #[case::outside_press_closes(DropdownEvent::OutsidePress, true, false)]
    #[case::outside_press_keeps_closed(DropdownEvent::OutsidePress, false, false)]
    fn test_next_open(#[case] event: DropdownEvent, #[case] open: bool, #[case] expected: bool) {
        assert_eq!(event.next_open(open), expected);
    }

    #[test]
    fn test_focus_out_to_outside_target_closes() {
        let event = DropdownEvent::from_focus_out(Some(false));
        assert_eq!(event, Some(DropdownEvent::FocusLeft));
        assert!(!event.is_some_and(|e| e.next_open(true)));
    }

    #[test]
    fn test_focus_moving_into_panel_keeps_open() {
        assert_eq!(DropdownEvent::from_focus_out(Some(true)), None);
    }

    #[test]
    fn test_focus_out_without_next_target_defers() {
        assert_eq!(DropdownEvent::from_focus_out(None), None);
    }

    #[test]
    fn test_tab_from_trigger_to_next_link_closes() {
        // Tab onto the trigger opens, tabbing on to a sibling link closes
        let mut open = DropdownEvent::TriggerFocus.next_open(false);
        assert!(open);
        if let Some(event) = DropdownEvent::from_focus_out(Some(false)) {
            open = event.next_open(open);
        }
        assert!(!open);
    }

    #[test]
    fn test_item_id() {
        assert_eq!(item_id("Product"), "nav-menu-product");
        assert_eq!(item_id("Developer Tools"), "nav-menu-developer-tools");
    }
}
