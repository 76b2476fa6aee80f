// Nav services
// Framework-agnostic, 100% testable

pub mod observers;
pub mod scroll_lock;

pub use observers::{AuthObserver, NavInputs, RouteObserver, StaticFlag, StaticRoute, ThemeObserver};
pub use scroll_lock::{
    platform_scroll_lock, MemoryScrollLock, ScrollLock, ScrollLockGuard, ScrollLockSlot,
};

#[cfg(target_arch = "wasm32")]
pub use scroll_lock::BodyScrollLock;
