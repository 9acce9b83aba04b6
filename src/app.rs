//! Animal Intake Frontend App
//!
//! Main application component: intake form plus the submitted list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AnimalForm, AnimalList};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Provide the store to all children; holds the render-only animal list
    provide_context(Store::new(AppState::new()));

    view! {
        <main class="main-content">
            <h1>"Animal Intake"</h1>

            <AnimalForm />

            <AnimalList />
        </main>
    }
}
