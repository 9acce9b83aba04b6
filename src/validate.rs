//! Validation Schema
//!
//! Pure per-field rules over the raw form values. Rules are independent:
//! every field is checked on every run, no short-circuiting between fields.

use crate::form::{Field, FormValues};
use crate::models::Diet;

pub const SPECIES_REQUIRED: &str = "Species is required!";
pub const AGE_REQUIRED: &str = "Age is required!";
pub const AGE_POSITIVE: &str = "Age must be positive!";
pub const DIET_REQUIRED: &str = "Diet is required!";
pub const VACCINATIONS_REQUIRED: &str = "Animal must be vaccinated!";
pub const NOTES_REQUIRED: &str = "Notes are required!";

/// Error message per field (None = valid)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub species: Option<String>,
    pub age: Option<String>,
    pub diet: Option<String>,
    pub vaccinations: Option<String>,
    pub notes: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.species.is_none()
            && self.age.is_none()
            && self.diet.is_none()
            && self.vaccinations.is_none()
            && self.notes.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Species => self.species.as_deref(),
            Field::Age => self.age.as_deref(),
            Field::Diet => self.diet.as_deref(),
            Field::Vaccinations => self.vaccinations.as_deref(),
            Field::Notes => self.notes.as_deref(),
        }
    }
}

/// Declarative rule set for the intake form
///
/// Notes were required in one captured edit of the form and optional in the
/// other; the behavior is an explicit flag here, defaulting to optional.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationSchema {
    pub notes_required: bool,
}

impl ValidationSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require_notes(mut self) -> Self {
        self.notes_required = true;
        self
    }

    /// Run every rule against the current values
    pub fn validate(&self, values: &FormValues) -> FieldErrors {
        FieldErrors {
            species: values
                .species
                .is_empty()
                .then(|| SPECIES_REQUIRED.to_string()),
            age: validate_age(&values.age),
            diet: Diet::from_str(&values.diet)
                .is_none()
                .then(|| DIET_REQUIRED.to_string()),
            vaccinations: (!values.vaccinations).then(|| VACCINATIONS_REQUIRED.to_string()),
            notes: (self.notes_required && values.notes.is_empty())
                .then(|| NOTES_REQUIRED.to_string()),
        }
    }
}

fn validate_age(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(AGE_REQUIRED.to_string());
    }
    match raw.parse::<f64>() {
        Ok(age) if age > 0.0 => None,
        Ok(_) => Some(AGE_POSITIVE.to_string()),
        Err(_) => Some(AGE_REQUIRED.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lion() -> FormValues {
        FormValues {
            species: "Lion".to_string(),
            age: "5".to_string(),
            diet: "carnivore".to_string(),
            vaccinations: true,
            notes: String::new(),
        }
    }

    #[test]
    fn test_valid_record_has_no_errors() {
        let errors = ValidationSchema::new().validate(&lion());
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn test_empty_species_rejected() {
        let values = FormValues {
            species: String::new(),
            ..lion()
        };
        let errors = ValidationSchema::new().validate(&values);
        assert_eq!(errors.get(Field::Species), Some(SPECIES_REQUIRED));
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_age_required() {
        for raw in ["", "   ", "five"] {
            let values = FormValues {
                age: raw.to_string(),
                ..lion()
            };
            let errors = ValidationSchema::new().validate(&values);
            assert_eq!(errors.get(Field::Age), Some(AGE_REQUIRED), "age = {:?}", raw);
        }
    }

    #[test]
    fn test_age_must_be_positive() {
        for raw in ["0", "-3", "-0.5"] {
            let values = FormValues {
                age: raw.to_string(),
                ..lion()
            };
            let errors = ValidationSchema::new().validate(&values);
            assert_eq!(errors.get(Field::Age), Some(AGE_POSITIVE), "age = {:?}", raw);
        }
    }

    #[test]
    fn test_diet_outside_enum_rejected() {
        for raw in ["", "frugivore", "Carnivore"] {
            let values = FormValues {
                diet: raw.to_string(),
                ..lion()
            };
            let errors = ValidationSchema::new().validate(&values);
            assert_eq!(errors.get(Field::Diet), Some(DIET_REQUIRED), "diet = {:?}", raw);
        }
    }

    #[test]
    fn test_unvaccinated_rejected() {
        let values = FormValues {
            vaccinations: false,
            ..lion()
        };
        let errors = ValidationSchema::new().validate(&values);
        assert_eq!(errors.get(Field::Vaccinations), Some(VACCINATIONS_REQUIRED));
    }

    #[test]
    fn test_notes_optional_by_default() {
        let errors = ValidationSchema::new().validate(&lion());
        assert_eq!(errors.get(Field::Notes), None);
    }

    #[test]
    fn test_notes_required_when_flagged() {
        let schema = ValidationSchema::new().require_notes();
        let errors = schema.validate(&lion());
        assert_eq!(errors.get(Field::Notes), Some(NOTES_REQUIRED));

        let values = FormValues {
            notes: "rescued cub".to_string(),
            ..lion()
        };
        assert_eq!(schema.validate(&values).get(Field::Notes), None);
    }

    #[test]
    fn test_rules_are_independent() {
        // Every failing field reports its own error in a single run
        let errors = ValidationSchema::new().validate(&FormValues::default());
        assert_eq!(errors.get(Field::Species), Some(SPECIES_REQUIRED));
        assert_eq!(errors.get(Field::Age), Some(AGE_REQUIRED));
        assert_eq!(errors.get(Field::Diet), Some(DIET_REQUIRED));
        assert_eq!(errors.get(Field::Vaccinations), Some(VACCINATIONS_REQUIRED));
    }
}
