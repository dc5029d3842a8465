//! Details step: citizen fields, damage type, optional description.

use crate::components::icons::Send;
use crate::components::wizard::form_state::ReportFormState;
use leptos::prelude::*;
use roadwatch_shared::DamageType;

#[component]
pub fn DetailsStep<F>(
    form: ReportFormState,
    submitting: ReadSignal<bool>,
    submit_error: ReadSignal<Option<String>>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(leptos::web_sys::SubmitEvent) + Copy + 'static,
{
    view! {
        <div class="space-y-6">
            <h3 class="text-2xl font-bold">"Complaint Details"</h3>

            <Show when=move || submit_error.get().is_some()>
                <div role="alert" class="alert alert-error text-sm py-2">
                    <span>{move || submit_error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <form class="space-y-4" on:submit=on_submit>
                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="name">
                            <span class="label-text">"Full Name"</span>
                        </label>
                        <input
                            id="name"
                            type="text"
                            placeholder="Asha Rao"
                            on:input=move |ev| form.name.set(event_target_value(&ev))
                            prop:value=move || form.name.get()
                            class="input input-bordered w-full"
                            required
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="phone">
                            <span class="label-text">"Phone"</span>
                        </label>
                        <input
                            id="phone"
                            type="text"
                            placeholder="+91 98765 43210"
                            on:input=move |ev| form.phone.set(event_target_value(&ev))
                            prop:value=move || form.phone.get()
                            class="input input-bordered w-full"
                            required
                        />
                    </div>
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="ward">
                            <span class="label-text">"Ward Number"</span>
                        </label>
                        <input
                            id="ward"
                            type="text"
                            placeholder="Ward 12"
                            on:input=move |ev| form.ward.set(event_target_value(&ev))
                            prop:value=move || form.ward.get()
                            class="input input-bordered w-full"
                            required
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="damage_type">
                            <span class="label-text">"Damage Type"</span>
                        </label>
                        <select
                            id="damage_type"
                            class="select select-bordered w-full"
                            on:change=move |ev| {
                                if let Ok(damage_type) = event_target_value(&ev).parse::<DamageType>() {
                                    form.damage_type.set(damage_type);
                                }
                            }
                        >
                            {DamageType::ALL
                                .into_iter()
                                .map(|damage_type| {
                                    view! {
                                        <option
                                            value=damage_type.as_str()
                                            selected=move || form.damage_type.get() == damage_type
                                        >
                                            {damage_type.as_str()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form-control">
                    <label class="label" for="description">
                        <span class="label-text">"Description"</span>
                    </label>
                    <textarea
                        id="description"
                        class="textarea textarea-bordered w-full h-24"
                        placeholder="Give more details about the location or severity..."
                        on:input=move |ev| form.description.set(event_target_value(&ev))
                        prop:value=move || form.description.get()
                    ></textarea>
                </div>

                <button
                    type="submit"
                    class="btn btn-success btn-block gap-2"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() {
                        view! { <span class="loading loading-spinner"></span> "Submitting..." }.into_any()
                    } else {
                        view! { <Send attr:class="h-4 w-4" /> "Submit Complaint" }.into_any()
                    }}
                </button>
            </form>
        </div>
    }
}
