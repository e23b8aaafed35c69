//! Person form state
//!
//! The edit form works on plain strings; relation fields carry a stringified
//! person id, or the empty string for "none selected", matching the values of
//! the relative pickers.

pub mod validation;

pub use validation::{
    ValidationResult, convert_date_format, is_valid_date, parse_form_date, validate_person_form,
};

use serde::{Deserialize, Serialize};

use crate::error::{FamilleError, Result};
use crate::models::{Person, PersonId};

/// Editable fields of the person form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonFormData {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub birth_date: String,
    pub birth_place: String,
    /// Father picker value
    pub father: String,
    /// Mother picker value
    pub mother: String,
    /// Spouse picker value
    pub conjoint: String,
    pub notes: String,
    pub date_deces: String,
}

/// Relation ids selected in the form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelationIds {
    pub father_id: Option<PersonId>,
    pub mother_id: Option<PersonId>,
    pub conjoint_id: Option<PersonId>,
}

impl PersonFormData {
    /// Initial form state, prefilled from `person` when editing
    #[must_use]
    pub fn from_person(person: Option<&Person>) -> Self {
        let Some(person) = person else {
            return Self::default();
        };
        let id_field = |id: Option<PersonId>| id.map(|id| id.to_string()).unwrap_or_default();
        let date_field = |date: Option<chrono::NaiveDate>| {
            date.map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };

        Self {
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            gender: person.gender.map(|g| g.label().to_string()).unwrap_or_default(),
            birth_date: date_field(person.birth_date),
            birth_place: person.birth_place.clone().unwrap_or_default(),
            father: id_field(person.father_id),
            mother: id_field(person.mother_id),
            conjoint: id_field(person.conjoint_id),
            notes: person.notes.clone().unwrap_or_default(),
            date_deces: date_field(person.death_date),
        }
    }

    /// Parse the three relation picker values
    pub fn parse_relation_ids(&self) -> Result<RelationIds> {
        Ok(RelationIds {
            father_id: parse_relation("fatherId", &self.father)?,
            mother_id: parse_relation("motherId", &self.mother)?,
            conjoint_id: parse_relation("conjointId", &self.conjoint)?,
        })
    }

    /// Ordered `(name, value)` pairs sent to the backend.
    ///
    /// Relation ids and the death date are only included when set. Dates are
    /// converted to `YYYY-MM-DD`.
    #[must_use]
    pub fn submission_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("first_name", self.first_name.clone()),
            ("last_name", self.last_name.clone()),
            ("gender", self.gender.clone()),
            ("birth_place", self.birth_place.clone()),
            ("notes", self.notes.clone()),
            ("birth_date", convert_date_format(&self.birth_date)),
        ];

        for (name, value) in [
            ("fatherId", &self.father),
            ("motherId", &self.mother),
            ("conjointId", &self.conjoint),
        ] {
            if !value.is_empty() {
                fields.push((name, value.clone()));
            }
        }

        if !self.date_deces.is_empty() {
            fields.push(("dateDeces", convert_date_format(&self.date_deces)));
        }

        fields
    }
}

fn parse_relation(field: &'static str, value: &str) -> Result<Option<PersonId>> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| FamilleError::invalid_field(field, value))
}
