//! Verify & locate step: AI verdict banner, detection overlay, and the
//! location panel (status chip, re-request button, picker map).

use crate::components::icons::{AlertCircle, CheckCircle2, MapPin, X};
use crate::components::wizard::map_panel::MapPanel;
use leptos::prelude::*;
use roadwatch_shared::location::{GeoStatus, LocationResolver, LocationSource};
use roadwatch_shared::overlay::OverlayBox;
use roadwatch_shared::wizard::Wizard;

#[component]
pub fn VerifyStep<F>(
    wizard: RwSignal<Wizard>,
    resolver: RwSignal<LocationResolver>,
    geo_status: RwSignal<GeoStatus>,
    preview_url: RwSignal<Option<String>>,
    /// Natural (intrinsic) pixel dimensions of the preview image, known
    /// once it has loaded; the bbox overlay needs them.
    natural_dims: RwSignal<(f64, f64)>,
    on_retry_location: F,
) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    let validating = move || wizard.with(|w| w.is_validating());
    let backend_error = move || wizard.with(|w| w.backend_error());
    let gate_open = move || wizard.with(|w| w.can_submit_details());
    let searching = move || geo_status.get() == GeoStatus::Searching;

    let banner_class = move || {
        if backend_error() {
            "p-6 rounded-3xl flex items-center gap-4 bg-error/10 border border-error/50"
        } else if gate_open() {
            "p-6 rounded-3xl flex items-center gap-4 bg-success/10 border border-success/30"
        } else {
            "p-6 rounded-3xl flex items-center gap-4 bg-base-200 border border-base-300"
        }
    };

    let banner_title = move || {
        if backend_error() {
            "Backend Server Offline".to_string()
        } else {
            wizard.with(|w| {
                w.ai_result()
                    .map(|ai| ai.result.clone())
                    .unwrap_or_else(|| "Analyzing...".to_string())
            })
        }
    };

    let banner_detail = move || {
        if backend_error() {
            "The AI service is unreachable. Ensure the backend is running.".to_string()
        } else {
            let confidence = wizard.with(|w| {
                w.ai_result().map(|ai| ai.confidence_percent()).unwrap_or(0.0)
            });
            format!("Detection Confidence: {confidence:.1}%")
        }
    };

    // Pixel bbox -> percentage overlay, once the image dimensions are known.
    let overlay = move || {
        let (width, height) = natural_dims.get();
        wizard.with(|w| {
            let ai = w.ai_result()?;
            let bbox = ai.bbox?;
            let overlay = OverlayBox::from_bbox(bbox, width, height)?;
            Some((overlay.style(), ai.damage_type.clone(), ai.confidence_percent()))
        })
    };

    let on_image_load = move |ev: leptos::web_sys::Event| {
        let img = event_target::<web_sys::HtmlImageElement>(&ev);
        natural_dims.set((img.natural_width() as f64, img.natural_height() as f64));
    };

    let location_label = move || {
        let point = resolver.with(|r| r.point());
        format!("{:.4}, {:.4}", point.lat, point.lng)
    };

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <h3 class="text-2xl font-bold">"AI Verification"</h3>
                <button
                    class="btn btn-ghost btn-sm gap-2"
                    on:click=move |_| {
                        wizard.update(|w| {
                            w.back();
                        });
                    }
                >
                    <X attr:class="h-4 w-4" /> "Change Photo"
                </button>
            </div>

            <Show
                when=move || !validating()
                fallback=|| view! {
                    <div class="flex flex-col items-center py-12">
                        <span class="loading loading-spinner loading-lg text-primary mb-4"></span>
                        <p class="text-base-content/70">"Analyzing image and extracting metadata..."</p>
                    </div>
                }
            >
                <div class=banner_class>
                    {move || {
                        if backend_error() {
                            view! { <AlertCircle attr:class="h-8 w-8 text-error shrink-0" /> }.into_any()
                        } else if gate_open() {
                            view! { <CheckCircle2 attr:class="h-8 w-8 text-success shrink-0" /> }.into_any()
                        } else {
                            view! { <AlertCircle attr:class="h-8 w-8 text-base-content/40 shrink-0" /> }.into_any()
                        }
                    }}
                    <div class="flex-1">
                        <p class="font-bold text-lg">{banner_title}</p>
                        <p class="text-sm opacity-70">{banner_detail}</p>
                        <Show when=move || {
                            !backend_error()
                                && resolver.with(|r| r.source() != LocationSource::PhotoGps)
                        }>
                            <p class="text-xs mt-2 text-warning font-medium">
                                "Photo capture location not found. Using the city default or your map selection."
                            </p>
                        </Show>
                    </div>
                </div>

                <div class="relative overflow-hidden rounded-3xl border border-base-300 mx-auto max-w-sm">
                    {move || {
                        preview_url
                            .get()
                            .map(|url| {
                                view! {
                                    <img
                                        src=url
                                        alt="Detection result"
                                        class="w-full h-auto"
                                        on:load=on_image_load
                                    />
                                }
                            })
                    }}
                    {move || {
                        overlay()
                            .map(|(style, damage_type, confidence)| {
                                view! {
                                    <div
                                        class="absolute border-4 border-success shadow-lg flex flex-col justify-start"
                                        style=style
                                    >
                                        <span class="bg-success text-success-content text-[10px] font-bold px-1 w-fit uppercase">
                                            {format!("{damage_type} ({confidence:.0}%)")}
                                        </span>
                                    </div>
                                }
                            })
                    }}
                </div>

                <div class="flex justify-between items-center px-2">
                    <div class="flex flex-col">
                        <p class="text-sm font-semibold">"Target Location:"</p>
                        <p class="text-xs text-base-content/50 font-mono">{location_label}</p>
                    </div>
                    <button
                        class="btn btn-sm btn-outline btn-primary gap-1"
                        disabled=searching
                        on:click=move |_| on_retry_location()
                    >
                        <MapPin attr:class="h-3 w-3" />
                        {move || match geo_status.get() {
                            GeoStatus::Searching => "Detecting...",
                            GeoStatus::Error => "Retry Location",
                            _ => "Use My Current Location",
                        }}
                    </button>
                </div>

                <MapPanel resolver />
                <p class="text-xs text-base-content/50 text-center italic">
                    "Tip: Click on the map to adjust the location if GPS was not found"
                </p>

                <button
                    class="btn btn-primary btn-block py-4"
                    disabled=move || !gate_open()
                    on:click=move |_| {
                        wizard.update(|w| {
                            w.advance();
                        });
                    }
                >
                    "Process Complaint"
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use leptos::prelude::*;

    // Same bound as `on_retry_location`; view closures hand the callback
    // across threads, so `Send + Sync` is part of the contract.
    fn accepts_retry_callback<F: Fn() + Copy + Send + Sync + 'static>(callback: F) -> F {
        callback
    }

    #[test]
    fn retry_callback_may_capture_arena_signals() {
        let attempts = RwSignal::new(0_u32);
        let retry = accepts_retry_callback(move || attempts.update(|n| *n += 1));

        retry();
        retry();
        assert_eq!(attempts.get_untracked(), 2);
    }
}
