//! Citizen report wizard.
//!
//! Four steps: photo upload, AI verification + location, details,
//! confirmation. Step transitions and stale-response handling live in
//! `roadwatch_shared::wizard`; this layer owns the browser objects (file
//! handle, preview URL) and wires the remote calls.

pub mod details_step;
pub mod form_state;
pub mod map_panel;
pub mod verify_step;

use crate::api::RoadWatchApi;
use crate::components::icons::{CheckCircle2, Upload};
use crate::components::wizard::details_step::DetailsStep;
use crate::components::wizard::form_state::ReportFormState;
use crate::components::wizard::verify_step::VerifyStep;
use crate::web::geolocation;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use roadwatch_shared::location::{GeoStatus, LocationResolver};
use roadwatch_shared::wizard::{Wizard, WizardStep};

#[component]
pub fn CitizenPage() -> impl IntoView {
    let router = use_router();

    let wizard = RwSignal::new(Wizard::new());
    let resolver = RwSignal::new(LocationResolver::new());
    let geo_status = RwSignal::new(GeoStatus::Idle);
    // Browser objects are not Send; keep them in thread-local storage.
    let file = RwSignal::new_local(Option::<web_sys::File>::None);
    let preview_url = RwSignal::new(Option::<String>::None);
    let natural_dims = RwSignal::new((0.0_f64, 0.0_f64));

    let form = ReportFormState::new();
    let (submitting, set_submitting) = signal(false);
    let (submit_error, set_submit_error) = signal(Option::<String>::None);

    // One device geolocation pass; re-runnable from the verify step. The
    // token makes a fix that arrives after a newer request (or a manual
    // pick) a no-op.
    let request_location = move || {
        let Some(token) = resolver.try_update(|r| r.begin_device_request()) else {
            return;
        };
        geo_status.set(GeoStatus::Searching);
        geolocation::request_position(move |result| match result {
            Ok(point) => {
                let applied = resolver
                    .try_update(|r| r.apply_device_fix(token, point))
                    .unwrap_or(false);
                if applied {
                    geo_status.set(GeoStatus::Success);
                }
            }
            Err(message) => {
                web_sys::console::warn_1(&format!("geolocation error: {message}").into());
                geo_status.set(GeoStatus::Error);
            }
        });
    };

    // Requested automatically once when the wizard mounts.
    Effect::new(move |_| {
        request_location();
    });

    // Photo selection: local preview immediately, validation call right
    // behind it. A verdict for a photo the user already replaced is
    // discarded by the upload token.
    let handle_file_select = move |ev: leptos::web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(selected) = input.files().and_then(|list| list.get(0)) else {
            return;
        };

        if let Some(old) = preview_url.get_untracked() {
            let _ = web_sys::Url::revoke_object_url(&old);
        }
        if let Ok(url) = web_sys::Url::create_object_url_with_blob(&selected) {
            preview_url.set(Some(url));
        }
        natural_dims.set((0.0, 0.0));
        file.set(Some(selected.clone()));

        let Some(token) = wizard.try_update(|w| w.select_photo()) else {
            return;
        };
        spawn_local(async move {
            let api = RoadWatchApi::default();
            let outcome = api.validate_image(&selected).await;

            let applied = wizard
                .try_update(|w| w.apply_validation(token, outcome.as_ref().map_err(|_| ())))
                .unwrap_or(false);
            if !applied {
                return;
            }

            match &outcome {
                Ok(response) => {
                    // Photo-embedded GPS beats whatever the device said.
                    if let Some(gps) = response.gps_data {
                        web_sys::console::log_1(&"using photo capture location".into());
                        resolver.try_update(|r| r.apply_photo_gps(gps));
                    } else {
                        web_sys::console::log_1(
                            &"photo has no GPS data; keeping device/manual location".into(),
                        );
                    }
                    if let Some(prefill) = wizard.with_untracked(|w| w.prefill_damage_type()) {
                        form.damage_type.set(prefill);
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("image validation failed: {e}").into());
                }
            }
        });
    };

    let handle_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        // Browser-level `required` already blocks empty fields; this guard
        // covers programmatic submission.
        if !form.is_complete() {
            return;
        }
        let Some(photo) = file.get_untracked() else {
            return;
        };
        let point = resolver.with_untracked(|r| r.point());
        let form_data = match form.to_form_data(&photo, point) {
            Ok(data) => data,
            Err(e) => {
                web_sys::console::error_1(&format!("failed to build report: {e}").into());
                return;
            }
        };

        set_submitting.set(true);
        set_submit_error.set(None);
        spawn_local(async move {
            let api = RoadWatchApi::default();
            match api.submit_report(form_data).await {
                Ok(receipt) => {
                    wizard.try_update(|w| w.complete(receipt.complaint_id));
                }
                Err(e) => {
                    // Stay on the details step; everything entered is kept.
                    web_sys::console::error_1(&format!("submission failed: {e}").into());
                    set_submit_error.set(Some(
                        "Submission failed. Please check your connection and try again."
                            .to_string(),
                    ));
                }
            }
            set_submitting.set(false);
        });
    };

    let current_step = move || wizard.with(|w| w.step());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 flex items-center justify-center">
            <div class="card bg-base-100 shadow-2xl w-full max-w-4xl overflow-hidden">
                <div class="flex flex-col md:flex-row min-h-[600px]">
                    <ProgressSidebar wizard />

                    <div class="flex-1 p-8 md:p-12 overflow-y-auto">
                        {move || match current_step() {
                            WizardStep::Upload => view! {
                                <UploadStep
                                    wizard
                                    preview_url
                                    on_file_select=handle_file_select
                                />
                            }
                            .into_any(),
                            WizardStep::Verify => view! {
                                <VerifyStep
                                    wizard
                                    resolver
                                    geo_status
                                    preview_url
                                    natural_dims
                                    on_retry_location=request_location
                                />
                            }
                            .into_any(),
                            WizardStep::Details => view! {
                                <DetailsStep
                                    form
                                    submitting
                                    submit_error
                                    on_submit=handle_submit
                                />
                            }
                            .into_any(),
                            WizardStep::Done => view! {
                                <div class="h-full flex flex-col items-center justify-center text-center space-y-6">
                                    <div class="w-24 h-24 bg-success/20 rounded-full flex items-center justify-center">
                                        <CheckCircle2 attr:class="h-12 w-12 text-success" />
                                    </div>
                                    <h3 class="text-3xl font-bold">"Complaint Registered Successfully"</h3>
                                    <p class="text-base-content/70 max-w-sm">
                                        "Your complaint ID is "
                                        <span class="font-mono font-bold">
                                            {move || wizard.with(|w| w.complaint_id().unwrap_or("").to_string())}
                                        </span>
                                        ". Officials will review it shortly; you will receive updates \
                                         on the phone number you provided."
                                    </p>
                                    <button
                                        class="btn btn-primary px-8"
                                        on:click=move |_| router.navigate("/")
                                    >
                                        "Return to Home"
                                    </button>
                                </div>
                            }
                            .into_any(),
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Left-hand progress rail; the confirmation step has no entry of its own.
#[component]
fn ProgressSidebar(wizard: RwSignal<Wizard>) -> impl IntoView {
    const STEPS: [WizardStep; 3] = [WizardStep::Upload, WizardStep::Verify, WizardStep::Details];

    view! {
        <div class="w-full md:w-1/3 bg-primary/5 p-8 border-b md:border-b-0 md:border-r border-base-300">
            <h2 class="text-2xl font-bold mb-8">"Report Damage"</h2>
            <div class="space-y-6">
                {STEPS
                    .into_iter()
                    .map(|step| {
                        let reached = move || wizard.with(|w| w.step().number() >= step.number());
                        let passed = move || wizard.with(|w| w.step().number() > step.number());
                        view! {
                            <div class=move || {
                                if reached() {
                                    "flex items-center gap-4 text-primary"
                                } else {
                                    "flex items-center gap-4 text-base-content/40"
                                }
                            }>
                                <div class=move || {
                                    if reached() {
                                        "w-8 h-8 rounded-full border-2 border-primary bg-primary/10 flex items-center justify-center font-bold"
                                    } else {
                                        "w-8 h-8 rounded-full border-2 border-base-300 flex items-center justify-center font-bold"
                                    }
                                }>
                                    {move || {
                                        if passed() {
                                            view! { <CheckCircle2 attr:class="h-4 w-4" /> }.into_any()
                                        } else {
                                            step.number().to_string().into_any()
                                        }
                                    }}
                                </div>
                                <span class="font-semibold">{step.label()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn UploadStep<F>(
    wizard: RwSignal<Wizard>,
    preview_url: RwSignal<Option<String>>,
    on_file_select: F,
) -> impl IntoView
where
    F: Fn(leptos::web_sys::Event) + Copy + 'static,
{
    view! {
        <div class="h-full flex flex-col justify-center">
            <h3 class="text-3xl font-bold mb-4">"Share what's wrong"</h3>
            <p class="text-base-content/70 mb-8">
                "Our AI will automatically detect damage and extract coordinates from your photo."
            </p>

            <label class="border-2 border-dashed border-base-300 rounded-3xl p-12 flex flex-col items-center justify-center cursor-pointer hover:border-primary/50 transition-all">
                <input type="file" class="hidden" accept="image/*" on:change=on_file_select />
                <Upload attr:class="h-12 w-12 text-base-content/40 mb-4" />
                <span class="text-lg font-medium">"Click to upload a photo"</span>
                <span class="text-sm text-base-content/50 mt-2">"JPG, PNG up to 10MB"</span>
            </label>

            <Show when=move || wizard.with(|w| w.has_photo())>
                <div class="mt-8 flex items-center justify-between bg-base-200 p-4 rounded-2xl">
                    <div class="flex items-center gap-4">
                        {move || {
                            preview_url
                                .get()
                                .map(|url| {
                                    view! {
                                        <img src=url alt="Preview" class="w-12 h-12 rounded-lg object-cover" />
                                    }
                                })
                        }}
                        <span class="font-medium">"Photo selected"</span>
                    </div>
                    <button
                        class="btn btn-primary px-6"
                        on:click=move |_| {
                            wizard.update(|w| {
                                w.advance();
                            });
                        }
                    >
                        "Continue"
                    </button>
                </div>
            </Show>
        </div>
    }
}
