//! Static navigation hub. Two doors: the citizen wizard and the
//! municipality portal.

use crate::components::icons::{ArrowRight, Camera, Shield};
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    let router = use_router();

    let go = move |path: &'static str| {
        move |ev: leptos::web_sys::MouseEvent| {
            ev.prevent_default();
            router.navigate(path);
        }
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-3xl">
                    <h1 class="text-5xl md:text-7xl font-bold mb-6">"RoadWatch"</h1>
                    <p class="text-xl text-base-content/70 mb-12 max-w-2xl mx-auto">
                        "AI-assisted road damage reporting for your city. \
                         Snap a photo, we take it from there."
                    </p>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        <a href="/citizen" on:click=go("/citizen") class="card bg-base-100 shadow-xl hover:shadow-2xl transition-all cursor-pointer">
                            <div class="card-body items-start text-left">
                                <div class="p-3 bg-primary/10 rounded-2xl text-primary mb-4">
                                    <Camera attr:class="h-8 w-8" />
                                </div>
                                <h2 class="card-title text-2xl">"Citizen Portal"</h2>
                                <p class="text-base-content/70">
                                    "Report damage, upload photos, and track repair status in your neighborhood."
                                </p>
                                <div class="mt-4 flex items-center gap-2 text-primary font-semibold">
                                    "Report Damage" <ArrowRight attr:class="h-4 w-4" />
                                </div>
                            </div>
                        </a>

                        <a href="/municipality" on:click=go("/municipality") class="card bg-base-100 shadow-xl hover:shadow-2xl transition-all cursor-pointer">
                            <div class="card-body items-start text-left">
                                <div class="p-3 bg-success/10 rounded-2xl text-success mb-4">
                                    <Shield attr:class="h-8 w-8" />
                                </div>
                                <h2 class="card-title text-2xl">"Municipality Portal"</h2>
                                <p class="text-base-content/70">
                                    "Analyze reports, manage workflows, and assign contractors efficiently."
                                </p>
                                <div class="mt-4 flex items-center gap-2 text-success font-semibold">
                                    "Staff Sign In" <ArrowRight attr:class="h-4 w-4" />
                                </div>
                            </div>
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
