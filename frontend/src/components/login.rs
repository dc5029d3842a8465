use crate::components::icons::{Lock, Shield, User};
use crate::session::{login, use_session};
use leptos::prelude::*;

/// Shown on every failed attempt; no lockout, no attempt counting.
const INVALID_CREDENTIALS: &str = "Invalid credentials. Hint: admin/admin123";

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        if login(&session, &username.get(), &password.get()) {
            // The session signal flips after the storage settle delay and
            // the router redirects to the municipality portal on its own.
            set_error_msg.set(None);
            set_is_submitting.set(true);
        } else {
            set_error_msg.set(Some(INVALID_CREDENTIALS.to_string()));
        }
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <Shield attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Internal Access"</h1>
                        <p class="text-base-content/70">"Municipality Portal - RoadWatch"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text flex items-center gap-2">
                                    <User attr:class="h-4 w-4" /> "Username"
                                </span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                placeholder="admin"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text flex items-center gap-2">
                                    <Lock attr:class="h-4 w-4" /> "Password"
                                </span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign In".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
