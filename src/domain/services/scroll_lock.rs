//! Page scroll lock
//!
//! The mobile flyout disables page scrolling while it is open. The lock is
//! only ever held through a [`ScrollLockGuard`], and dropping the guard is
//! what re-enables scrolling, so closing the menu, navigating away and
//! unmounting the nav all release it the same way.

use crate::shared::errors::Result;
use crate::shared::logging::{
    log_scroll_lock_acquired, log_scroll_lock_error, log_scroll_lock_released,
};
use std::cell::Cell;
use std::rc::Rc;

/// Backend that can flip the page-level scroll flag
pub trait ScrollLock {
    fn set_scroll_disabled(&self, disabled: bool) -> Result<()>;
    fn is_scroll_disabled(&self) -> bool;
}

/// In-process lock for server rendering, native builds and tests
#[derive(Debug, Default)]
pub struct MemoryScrollLock {
    disabled: Cell<bool>,
}

impl MemoryScrollLock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScrollLock for MemoryScrollLock {
    fn set_scroll_disabled(&self, disabled: bool) -> Result<()> {
        self.disabled.set(disabled);
        Ok(())
    }

    fn is_scroll_disabled(&self) -> bool {
        self.disabled.get()
    }
}

/// Lock backed by `document.body.style.overflow`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct BodyScrollLock;

#[cfg(target_arch = "wasm32")]
impl BodyScrollLock {
    fn body() -> Result<web_sys::HtmlElement> {
        use crate::shared::errors::AppError;

        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .ok_or_else(|| AppError::DomUnavailable("document.body".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl ScrollLock for BodyScrollLock {
    fn set_scroll_disabled(&self, disabled: bool) -> Result<()> {
        use crate::shared::errors::AppError;

        let overflow = if disabled { "hidden" } else { "auto" };
        Self::body()?
            .style()
            .set_property("overflow", overflow)
            .map_err(|e: wasm_bindgen::JsValue| AppError::ScrollLock(format!("{:?}", e)))
    }

    fn is_scroll_disabled(&self) -> bool {
        Self::body()
            .ok()
            .and_then(|b| b.style().get_property_value("overflow").ok())
            .is_some_and(|v| v == "hidden")
    }
}

/// The lock for the current platform
pub fn platform_scroll_lock() -> Rc<dyn ScrollLock> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BodyScrollLock)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryScrollLock::new())
    }
}

/// Held for as long as page scrolling must stay disabled
pub struct ScrollLockGuard {
    lock: Rc<dyn ScrollLock>,
}

impl ScrollLockGuard {
    /// Disable scrolling. A backend failure is logged and the guard is still
    /// returned, so its release runs regardless.
    pub fn acquire(lock: Rc<dyn ScrollLock>) -> Self {
        match lock.set_scroll_disabled(true) {
            Ok(()) => log_scroll_lock_acquired(),
            Err(e) => log_scroll_lock_error("acquire", &e.to_string()),
        }
        Self { lock }
    }

    /// Release explicitly; equivalent to dropping the guard.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        match self.lock.set_scroll_disabled(false) {
            Ok(()) => log_scroll_lock_released(),
            Err(e) => log_scroll_lock_error("release", &e.to_string()),
        }
    }
}

/// Holds at most one guard and keeps it in step with an open flag
pub struct ScrollLockSlot {
    lock: Rc<dyn ScrollLock>,
    guard: Option<ScrollLockGuard>,
}

impl ScrollLockSlot {
    pub fn new(lock: Rc<dyn ScrollLock>) -> Self {
        Self { lock, guard: None }
    }

    /// Acquire when `locked` turns true, release when it turns false.
    pub fn sync(&mut self, locked: bool) {
        match (locked, self.guard.is_some()) {
            (true, false) => self.guard = Some(ScrollLockGuard::acquire(self.lock.clone())),
            (false, true) => self.guard = None,
            _ => {}
        }
    }

    pub fn is_held(&self) -> bool {
        self.guard.is_some()
    }

    pub fn release(&mut self) {
        self.guard = None;
    }
}
