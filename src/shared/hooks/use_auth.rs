use crate::domain::services::AuthObserver;
use dioxus::prelude::*;

/// Whether the visitor has a session with the dashboard
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AuthState {
    LoggedIn,
    #[default]
    LoggedOut,
}

impl AuthState {
    pub fn from_session_present(present: bool) -> Self {
        if present {
            AuthState::LoggedIn
        } else {
            AuthState::LoggedOut
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, AuthState::LoggedIn)
    }
}

impl AuthObserver for Signal<AuthState> {
    fn is_logged_in(&self) -> bool {
        self.read().is_logged_in()
    }
}

/// Provide the auth signal. The session is detected from `storage_key` in
/// localStorage once mounted in the browser; until then the visitor is
/// treated as logged out.
pub fn use_auth_provider(storage_key: String) -> Signal<AuthState> {
    let mut auth = use_context_provider(|| Signal::new(AuthState::default()));

    use_effect(move || {
        auth.set(AuthState::from_session_present(session_present(&storage_key)));
    });

    auth
}

/// Auth signal from the nearest provider, if any
pub fn use_auth() -> Option<Signal<AuthState>> {
    try_use_context::<Signal<AuthState>>()
}

#[cfg(target_arch = "wasm32")]
fn session_present(storage_key: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(storage_key).ok().flatten())
        .is_some_and(|value| !value.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn session_present(_storage_key: &str) -> bool {
    false
}
