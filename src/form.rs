//! Form Controller
//!
//! Owns the field value and touched signals, runs the injected validation
//! schema, and gates submission. The schema and submit callback arrive as
//! explicit constructor parameters rather than through any implicit wrapper.

use leptos::prelude::*;

use crate::models::{AnimalRecord, Diet};
use crate::validate::{FieldErrors, ValidationSchema};

/// Form field names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Species,
    Age,
    Diet,
    Vaccinations,
    Notes,
}

/// Raw field state backing the controlled inputs
///
/// Every field is always defined: text fields hold the raw input string
/// (age and diet included, so partial input never panics), the checkbox
/// holds a bool. `Default` is the initial mount state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormValues {
    pub species: String,
    pub age: String,
    pub diet: String,
    pub vaccinations: bool,
    pub notes: String,
}

impl FormValues {
    /// Typed wire payload; None while age or diet cannot parse.
    /// Always Some for values that pass the validation schema.
    pub fn to_record(&self) -> Option<AnimalRecord> {
        let age = self.age.trim().parse::<f64>().ok()?;
        let diet = Diet::from_str(&self.diet)?;
        Some(AnimalRecord {
            species: self.species.clone(),
            age,
            diet,
            vaccinations: self.vaccinations,
            notes: self.notes.clone(),
        })
    }
}

/// Per-field "has the user interacted with this yet" flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchedFields {
    pub species: bool,
    pub age: bool,
    pub diet: bool,
    pub vaccinations: bool,
    pub notes: bool,
}

impl TouchedFields {
    pub fn mark(&mut self, field: Field) {
        match field {
            Field::Species => self.species = true,
            Field::Age => self.age = true,
            Field::Diet => self.diet = true,
            Field::Vaccinations => self.vaccinations = true,
            Field::Notes => self.notes = true,
        }
    }

    /// A rejected submit surfaces every error, touched or not
    pub fn mark_all(&mut self) {
        *self = Self {
            species: true,
            age: true,
            diet: true,
            vaccinations: true,
            notes: true,
        };
    }

    pub fn is_touched(&self, field: Field) -> bool {
        match field {
            Field::Species => self.species,
            Field::Age => self.age,
            Field::Diet => self.diet,
            Field::Vaccinations => self.vaccinations,
            Field::Notes => self.notes,
        }
    }
}

/// Controller signals grouped in a Copy struct, passable as a component prop
#[derive(Clone, Copy)]
pub struct FormController {
    values: ReadSignal<FormValues>,
    set_values: WriteSignal<FormValues>,
    touched: ReadSignal<TouchedFields>,
    set_touched: WriteSignal<TouchedFields>,
    schema: ValidationSchema,
    on_submit: Callback<AnimalRecord>,
}

impl FormController {
    pub fn new(schema: ValidationSchema, on_submit: Callback<AnimalRecord>) -> Self {
        Self::with_values(FormValues::default(), schema, on_submit)
    }

    /// Seed the form with initial values (missing fields stay at defaults)
    pub fn with_values(
        initial: FormValues,
        schema: ValidationSchema,
        on_submit: Callback<AnimalRecord>,
    ) -> Self {
        let (values, set_values) = signal(initial);
        let (touched, set_touched) = signal(TouchedFields::default());
        Self {
            values,
            set_values,
            touched,
            set_touched,
            schema,
            on_submit,
        }
    }

    pub fn values(&self) -> FormValues {
        self.values.get()
    }

    /// Reactive read for a controlled input
    pub fn field_value(&self, field: Field) -> String {
        let values = self.values.get();
        match field {
            Field::Species => values.species,
            Field::Age => values.age,
            Field::Diet => values.diet,
            Field::Vaccinations => values.vaccinations.to_string(),
            Field::Notes => values.notes,
        }
    }

    pub fn vaccinations(&self) -> bool {
        self.values.get().vaccinations
    }

    /// Update a field from its raw input value and mark it touched
    pub fn set_field(&self, field: Field, raw: String) {
        self.set_values.update(|values| match field {
            Field::Species => values.species = raw,
            Field::Age => values.age = raw,
            Field::Diet => values.diet = raw,
            Field::Vaccinations => values.vaccinations = raw == "true",
            Field::Notes => values.notes = raw,
        });
        self.set_touched.update(|touched| touched.mark(field));
    }

    pub fn set_vaccinations(&self, checked: bool) {
        self.set_values.update(|values| values.vaccinations = checked);
        self.set_touched
            .update(|touched| touched.mark(Field::Vaccinations));
    }

    /// Current error map, derived from the value signal on every read
    pub fn errors(&self) -> FieldErrors {
        self.schema.validate(&self.values.get())
    }

    /// Inline message for a field: Some only when touched AND invalid
    pub fn error_for(&self, field: Field) -> Option<String> {
        if !self.touched.get().is_touched(field) {
            return None;
        }
        self.errors().get(field).map(str::to_string)
    }

    /// Validate and, only on a clean pass, hand the typed record to the
    /// submit callback. A rejected pass marks all fields touched so every
    /// error renders, and makes no remote call.
    pub fn submit(&self) -> bool {
        let values = self.values.get_untracked();
        if !self.schema.validate(&values).is_empty() {
            self.set_touched.update(|touched| touched.mark_all());
            return false;
        }
        match values.to_record() {
            Some(record) => {
                self.on_submit.run(record);
                true
            }
            None => false,
        }
    }
}
