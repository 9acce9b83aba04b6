//! Animal Intake Form Component
//!
//! Controlled inputs for one animal record, inline per-field errors, and
//! submission to the remote API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::diet_selector::DietSelector;
use crate::form::{Field, FormController, FormValues};
use crate::models::AnimalRecord;
use crate::store::{store_add_animal, use_app_store};
use crate::validate::ValidationSchema;

/// Intake form for new animal records
#[component]
pub fn AnimalForm(#[prop(optional)] initial: Option<FormValues>) -> impl IntoView {
    let store = use_app_store();

    // Fire-and-forget: no pending state, no in-flight guard. Each resolved
    // call appends its own animal, so concurrent submissions land in
    // resolution order. Failures are logged and the form keeps its values
    // so the user can resubmit.
    let on_submit = Callback::new(move |record: AnimalRecord| {
        spawn_local(async move {
            match api::create_animal(&record).await {
                Ok(animal) => store_add_animal(&store, animal),
                Err(err) => web_sys::console::log_1(&format!("Error: {}", err).into()),
            }
        });
    });

    let form = FormController::with_values(
        initial.unwrap_or_default(),
        ValidationSchema::new(),
        on_submit,
    );

    let submit_form = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        form.submit();
    };

    view! {
        <form class="animal-form" on:submit=submit_form>
            {move || form.error_for(Field::Species).map(|msg| view! { <p class="error">{msg}</p> })}
            <input
                type="text"
                name="species"
                placeholder="Species"
                prop:value=move || form.field_value(Field::Species)
                on:input=move |ev| form.set_field(Field::Species, event_target_value(&ev))
            />

            {move || form.error_for(Field::Age).map(|msg| view! { <p class="error">{msg}</p> })}
            <input
                type="number"
                name="age"
                placeholder="Age"
                prop:value=move || form.field_value(Field::Age)
                on:input=move |ev| form.set_field(Field::Age, event_target_value(&ev))
            />

            {move || form.error_for(Field::Diet).map(|msg| view! { <p class="error">{msg}</p> })}
            <DietSelector form=form />

            {move || form.error_for(Field::Vaccinations).map(|msg| view! { <p class="error">{msg}</p> })}
            <label>
                <input
                    type="checkbox"
                    name="vaccinations"
                    prop:checked=move || form.vaccinations()
                    on:change=move |ev| form.set_vaccinations(event_target_checked(&ev))
                />
                <span>"Vaccinations"</span>
            </label>

            {move || form.error_for(Field::Notes).map(|msg| view! { <p class="error">{msg}</p> })}
            <textarea
                name="notes"
                placeholder="Notes"
                prop:value=move || form.field_value(Field::Notes)
                on:input=move |ev| form.set_field(Field::Notes, event_target_value(&ev))
            ></textarea>

            <button type="submit">"Submit"</button>
        </form>
    }
}
