//! Diet Selector Component
//!
//! Select input for the three diets, with a disabled placeholder option.

use leptos::prelude::*;

use crate::form::{Field, FormController};

/// Diet options as (value, label)
pub const DIET_OPTIONS: &[(&str, &str)] = &[
    ("carnivore", "Carnivore"),
    ("herbivore", "Herbivore"),
    ("omnivore", "Omnivore"),
];

/// Diet select bound to the form controller
#[component]
pub fn DietSelector(form: FormController) -> impl IntoView {
    view! {
        <select
            name="diet"
            prop:value=move || form.field_value(Field::Diet)
            on:change=move |ev| form.set_field(Field::Diet, event_target_value(&ev))
        >
            <option value="" disabled>"Select Diet:"</option>
            {DIET_OPTIONS.iter().map(|(value, label)| view! {
                <option value=*value>{*label}</option>
            }).collect_view()}
        </select>
    }
}
