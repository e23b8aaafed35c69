//! Person form validation and date handling

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::form::PersonFormData;

/// Outcome of validating a person form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// User-facing messages, in field order
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Whether the form can be submitted
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate the required fields of a person form
#[must_use]
pub fn validate_person_form(data: &PersonFormData) -> ValidationResult {
    let mut errors = Vec::new();

    if data.first_name.trim().is_empty() {
        errors.push("Le prénom est requis".to_string());
    }
    if data.last_name.trim().is_empty() {
        errors.push("Le nom est requis".to_string());
    }
    if data.gender.is_empty() {
        errors.push("Le genre est requis".to_string());
    }

    if data.birth_date.is_empty() {
        errors.push("La date de naissance est requise".to_string());
    } else if !is_valid_date(&data.birth_date) {
        errors.push("Format de date invalide".to_string());
    }

    ValidationResult { errors }
}

/// Convert `DD/MM/YYYY` to `YYYY-MM-DD`; anything else is returned unchanged
#[must_use]
pub fn convert_date_format(date: &str) -> String {
    if date.contains('/') {
        let parts: Vec<&str> = date.split('/').collect();
        if let [day, month, year] = parts.as_slice() {
            return format!("{year}-{month}-{day}");
        }
    }
    date.to_string()
}

/// Parse a form date in either accepted format
#[must_use]
pub fn parse_form_date(date: &str) -> Option<NaiveDate> {
    if date.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(&convert_date_format(date), "%Y-%m-%d").ok()
}

/// Whether `date` is a valid `DD/MM/YYYY` or `YYYY-MM-DD` date
#[must_use]
pub fn is_valid_date(date: &str) -> bool {
    parse_form_date(date).is_some()
}
