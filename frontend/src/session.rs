//! Session state, decoupled from routing.
//!
//! A single boolean flag persisted in localStorage gates the municipality
//! portal. This is a display gate, not a security boundary: the credential
//! pair is a development placeholder checked entirely client-side. The
//! router sees only the injected signal.

use gloo_storage::{LocalStorage, Storage};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use roadwatch_shared::session::{STORAGE_AUTH_KEY, STORAGE_AUTH_VALUE, verify_credentials};

/// Delay between persisting the session flag and flipping the signal that
/// triggers navigation, so the storage write is observable before the
/// guarded route renders.
const LOGIN_SETTLE_MS: u32 = 100;

#[derive(Clone, Copy, Default)]
pub struct SessionState {
    pub is_authenticated: bool,
}

/// Read/write signal pair shared through the Leptos context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: ReadSignal<SessionState>,
    pub set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::default());
        Self { state, set_state }
    }

    /// Signal handed to the routing service for guard checks.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// Load the persisted flag on startup. No expiry, no server verification.
pub fn init_session(ctx: &SessionContext) {
    let active = LocalStorage::get::<String>(STORAGE_AUTH_KEY)
        .map(|v| v == STORAGE_AUTH_VALUE)
        .unwrap_or(false);
    ctx.set_state.update(|state| state.is_authenticated = active);
}

/// Check credentials and, on success, persist the flag. The session signal
/// flips after a short settle delay; the router's redirect effect then takes
/// the user to the municipality portal. Returns whether the pair matched.
pub fn login(ctx: &SessionContext, username: &str, password: &str) -> bool {
    if !verify_credentials(username, password) {
        return false;
    }

    let _ = LocalStorage::set(STORAGE_AUTH_KEY, STORAGE_AUTH_VALUE);

    let set_state = ctx.set_state;
    Timeout::new(LOGIN_SETTLE_MS, move || {
        set_state.update(|state| state.is_authenticated = true);
    })
    .forget();
    true
}

/// Clear flag and storage. The routing service notices the signal change and
/// redirects away from guarded routes on its own.
pub fn logout(ctx: &SessionContext) {
    LocalStorage::delete(STORAGE_AUTH_KEY);
    ctx.set_state.update(|state| state.is_authenticated = false);
}
