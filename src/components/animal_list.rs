//! Submitted Animals List
//!
//! Render-only list of animals returned by successful submissions,
//! in append order.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// List of submitted animals, one line per record
#[component]
pub fn AnimalList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="animal-list">
            {move || store.animals().get().iter().map(|animal| view! {
                <div class="animal-row">"Species: " {animal.species.clone()}</div>
            }).collect_view()}
            <p class="animal-count">
                {move || format!("{} animals submitted", store.animals().get().len())}
            </p>
        </div>
    }
}
