//! Frontend Models
//!
//! Data structures for the intake payload and the remote API response.

use serde::{Deserialize, Serialize};

/// Diet determines which option the select input carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    Carnivore,
    Herbivore,
    Omnivore,
}

impl Diet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Diet::Carnivore => "carnivore",
            Diet::Herbivore => "herbivore",
            Diet::Omnivore => "omnivore",
        }
    }

    /// Strict parse: anything outside the three diets is rejected
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "carnivore" => Some(Diet::Carnivore),
            "herbivore" => Some(Diet::Herbivore),
            "omnivore" => Some(Diet::Omnivore),
            _ => None,
        }
    }
}

/// Wire payload for creating an animal record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalRecord {
    pub species: String,
    pub age: f64,
    pub diet: Diet,
    pub vaccinations: bool,
    pub notes: String,
}

/// Animal record as returned by the remote API
///
/// The response shape is controlled by the remote service, so every field
/// is lenient: missing keys deserialize to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SubmittedAnimal {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub age: Option<f64>,
    #[serde(default)]
    pub diet: Option<Diet>,
    #[serde(default)]
    pub vaccinations: Option<bool>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}
