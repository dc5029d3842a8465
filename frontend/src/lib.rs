//! RoadWatch frontend.
//!
//! Citizen/municipal road-damage reporting client, context-driven:
//! - `web::route`: route definitions (domain model)
//! - `web::router`: routing service with the session guard (core engine)
//! - `session`: session flag state, backed by localStorage
//! - `api`: HTTP client for the damage-reporting backend
//! - `components`: UI layer

mod api;
mod components {
    pub mod dashboard;
    mod icons;
    pub mod landing;
    pub mod login;
    pub mod wizard;
}
mod session;

use crate::components::dashboard::MunicipalityPage;
use crate::components::landing::LandingPage;
use crate::components::login::LoginPage;
use crate::components::wizard::CitizenPage;
use crate::session::{SessionContext, init_session};

use leptos::prelude::*;

// Wrappers over browser APIs. Everything that touches web_sys outside of
// view code lives here.
pub(crate) mod web {
    pub mod geolocation;
    pub mod leaflet;
    pub mod route;
    pub mod router;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// Maps the current route to its page component.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Landing => view! { <LandingPage /> }.into_any(),
        AppRoute::Citizen => view! { <CitizenPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Municipality => view! { <MunicipalityPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. Create the session context
    let session_ctx = SessionContext::new();
    provide_context(session_ctx);

    // 2. Load the persisted session flag
    init_session(&session_ctx);

    // 3. The router only sees the session signal, not the storage
    let is_authenticated = session_ctx.is_authenticated_signal();

    view! {
        // 4. Router component: the injected signal drives the guard
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
