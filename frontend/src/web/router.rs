//! Routing service, the core engine.
//!
//! All History API access is concentrated here. Every way a route can
//! change (programmatic navigation, back/forward buttons, session state
//! flips) funnels through [`route::apply_guard`] so the session gate holds
//! on every path into a page.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, apply_guard};

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Signal-driven router with an injected session signal for the guard.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Navigate to a path, running the guard first.
    pub fn navigate(&self, path: &str) {
        self.load(AppRoute::from_path(path), true);
    }

    /// Resolve the guard and load the resulting route. `use_push` selects
    /// pushState over replaceState (redirects replace).
    fn load(&self, target: AppRoute, use_push: bool) {
        let resolved = apply_guard(target, self.is_authenticated.get_untracked());

        if resolved != target {
            web_sys::console::log_1(
                &format!("[Router] {target} guarded, loading {resolved}").into(),
            );
            replace_history_state(resolved.to_path());
        } else if use_push {
            push_history_state(resolved.to_path());
        } else {
            replace_history_state(resolved.to_path());
        }
        self.set_route.set(resolved);
    }

    /// Back/forward buttons re-run the guard on the restored path.
    fn init_popstate_listener(&self) {
        let service = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            service.load(AppRoute::from_path(&current_path()), false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Leak the closure to keep the listener alive for the app's lifetime.
        closure.forget();
    }

    /// Session changes re-evaluate the current route: logging in moves the
    /// user off the login form, logging out moves them off guarded pages.
    fn setup_session_redirect(&self) {
        let service = *self;

        Effect::new(move |_| {
            let is_auth = service.is_authenticated.get();
            let route = service.current_route.get_untracked();
            let resolved = apply_guard(route, is_auth);

            if resolved != route {
                web_sys::console::log_1(
                    &format!("[Router] session changed, {route} -> {resolved}").into(),
                );
                push_history_state(resolved.to_path());
                service.set_route.set(resolved);
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_session_redirect();

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI components
// ============================================================================

/// Router root, to be mounted once at the top of the app.
#[component]
pub fn Router(
    /// Session signal injected into the guard
    is_authenticated: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// Renders whatever the matcher returns for the current route.
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
