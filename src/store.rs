//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::SubmittedAnimal;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Animals returned by successful submissions, in resolution order.
    /// Render-only and append-only; discarded on reload.
    pub animals: Vec<SubmittedAnimal>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Append a submitted animal (exactly one per successful remote call)
pub fn store_add_animal(store: &AppStore, animal: SubmittedAnimal) {
    store.animals().write().push(animal);
}
