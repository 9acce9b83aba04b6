//! Remote API Commands
//!
//! Binding to the fixed intake endpoint. On wasm targets reqwest rides the
//! browser's fetch, so the call never blocks the UI thread.

use crate::models::{AnimalRecord, SubmittedAnimal};

/// Fixed intake endpoint
pub const ANIMALS_URL: &str = "https://reqres.in/api/animals";

/// POST a validated record and deserialize the created animal.
/// Transport failures and non-2xx statuses both map to Err.
pub async fn create_animal(record: &AnimalRecord) -> Result<SubmittedAnimal, String> {
    let response = reqwest::Client::new()
        .post(ANIMALS_URL)
        .json(record)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let response = response.error_for_status().map_err(|e| e.to_string())?;
    response
        .json::<SubmittedAnimal>()
        .await
        .map_err(|e| e.to_string())
}
