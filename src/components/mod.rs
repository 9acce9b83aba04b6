//! UI Components
//!
//! Leptos components for the intake form and the submitted-animals list.

mod animal_form;
mod animal_list;
mod diet_selector;

pub use animal_form::AnimalForm;
pub use animal_list::AnimalList;
