//! Shared value types for the genealogy models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::FamilleError;

/// Unique person identifier as assigned by the backend
pub type PersonId = i64;

/// Gender as recorded on a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male gender
    #[serde(rename = "Homme")]
    Male,
    /// Female gender
    #[serde(rename = "Femme")]
    Female,
}

impl Gender {
    /// Label used by the backend and the forms
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Homme",
            Self::Female => "Femme",
        }
    }

    /// The gender a spouse is expected to have
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Male,
        }
    }

    /// Lenient parse: anything but the two known labels yields `None`
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Homme" => Some(Self::Male),
            "Femme" => Some(Self::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = FamilleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| FamilleError::invalid_field("gender", s))
    }
}

/// Deserialize an optional gender, mapping empty or unknown labels to `None`
pub(crate) fn deserialize_gender<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Gender::parse))
}

/// Role of a person within a rendered family grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyRole {
    /// "Père"
    Father,
    /// "Mère"
    Mother,
    /// "Grand-père paternel"
    PaternalGrandfather,
    /// "Grand-mère paternelle"
    PaternalGrandmother,
    /// "Grand-père maternel"
    MaternalGrandfather,
    /// "Grand-mère maternelle"
    MaternalGrandmother,
    /// "Enfant"
    Child,
}

impl FamilyRole {
    /// Every role, in grid order
    pub const ALL: [Self; 7] = [
        Self::PaternalGrandfather,
        Self::PaternalGrandmother,
        Self::MaternalGrandfather,
        Self::MaternalGrandmother,
        Self::Father,
        Self::Mother,
        Self::Child,
    ];

    /// Display label of the role
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Father => "Père",
            Self::Mother => "Mère",
            Self::PaternalGrandfather => "Grand-père paternel",
            Self::PaternalGrandmother => "Grand-mère paternelle",
            Self::MaternalGrandfather => "Grand-père maternel",
            Self::MaternalGrandmother => "Grand-mère maternelle",
            Self::Child => "Enfant",
        }
    }

    /// Whether the role is one of the four grandparent slots
    #[must_use]
    pub const fn is_grandparent(self) -> bool {
        matches!(
            self,
            Self::PaternalGrandfather
                | Self::PaternalGrandmother
                | Self::MaternalGrandfather
                | Self::MaternalGrandmother
        )
    }

    /// Whether the role is one of the two parent slots
    #[must_use]
    pub const fn is_parent(self) -> bool {
        matches!(self, Self::Father | Self::Mother)
    }
}

impl fmt::Display for FamilyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FamilyRole {
    type Err = FamilleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.label() == s)
            .ok_or_else(|| FamilleError::invalid_field("role", s))
    }
}

impl Serialize for FamilyRole {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for FamilyRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A selectable entry of a relative picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownItem {
    /// Text shown to the user
    pub label: String,
    /// Stringified person id, or empty for "none selected"
    pub value: String,
}

impl DropdownItem {
    /// Create a new item
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// The "none selected" entry
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self::new(label, "")
    }

    /// Whether this is a "none selected" entry
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }

    /// The person id this item refers to, if any
    #[must_use]
    pub fn person_id(&self) -> Option<PersonId> {
        self.value.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_labels() {
        assert_eq!(Gender::parse("Homme"), Some(Gender::Male));
        assert_eq!(Gender::parse(" Femme "), Some(Gender::Female));
        assert_eq!(Gender::parse(""), None);
        assert_eq!(Gender::parse("homme"), None);
        assert_eq!(Gender::Male.opposite(), Gender::Female);
        assert!("Autre".parse::<Gender>().is_err());
    }

    #[test]
    fn test_role_labels_round_trip() {
        for role in FamilyRole::ALL {
            assert_eq!(role.label().parse::<FamilyRole>().unwrap(), role);
        }
        assert!("Cousin".parse::<FamilyRole>().is_err());
    }

    #[test]
    fn test_role_classification() {
        assert!(FamilyRole::MaternalGrandmother.is_grandparent());
        assert!(!FamilyRole::Child.is_grandparent());
        assert!(FamilyRole::Mother.is_parent());
        assert!(!FamilyRole::PaternalGrandfather.is_parent());
    }
}
