//! Person entity model
//!
//! A person record as served by the backend's `/personnes` endpoint. Relations
//! to father, mother and spouse are plain ids into the same roster; nothing in
//! this crate mutates them.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::traits::{EntityModel, Lifespan};
use crate::models::types::{Gender, PersonId, deserialize_gender};

/// Partial reference to a person, as found in a `children` list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonRef {
    /// Referenced person id, if the payload carried one
    pub id: Option<PersonId>,
    /// First name, if included
    pub first_name: Option<String>,
    /// Last name, if included
    pub last_name: Option<String>,
    /// Gender, if included
    #[serde(deserialize_with = "deserialize_gender")]
    pub gender: Option<Gender>,
}

impl PersonRef {
    /// Reference a person by id only
    #[must_use]
    pub fn from_id(id: PersonId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }
}

/// Core Person entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Backend identifier
    pub id: PersonId,
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
    /// Gender, absent when unknown
    #[serde(default, deserialize_with = "deserialize_gender")]
    pub gender: Option<Gender>,
    /// Age in years, usually computed by the backend
    #[serde(default)]
    pub age: Option<i32>,
    /// Birth date
    #[serde(default, deserialize_with = "deserialize_date")]
    pub birth_date: Option<NaiveDate>,
    /// Birth place
    #[serde(default)]
    pub birth_place: Option<String>,
    /// Death date, if deceased
    #[serde(rename = "dateDeces", default, deserialize_with = "deserialize_date")]
    pub death_date: Option<NaiveDate>,
    /// Photo URL
    #[serde(default)]
    pub photo: Option<String>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Father's id
    #[serde(rename = "fatherId", default)]
    pub father_id: Option<PersonId>,
    /// Mother's id
    #[serde(rename = "motherId", default)]
    pub mother_id: Option<PersonId>,
    /// Spouse's id
    #[serde(rename = "conjointId", default)]
    pub conjoint_id: Option<PersonId>,
    /// Children, oldest first as sent by the backend
    #[serde(default, deserialize_with = "deserialize_children")]
    pub children: Vec<PersonRef>,
}

impl Person {
    /// Create a new Person with minimal required information
    #[must_use]
    pub fn new(id: PersonId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender: None,
            age: None,
            birth_date: None,
            birth_place: None,
            death_date: None,
            photo: None,
            notes: None,
            father_id: None,
            mother_id: None,
            conjoint_id: None,
            children: Vec::new(),
        }
    }

    /// Set the gender
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Set the age
    #[must_use]
    pub const fn with_age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    /// Set the birth date
    #[must_use]
    pub const fn with_birth_date(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    /// Set the father's id
    #[must_use]
    pub const fn with_father(mut self, id: PersonId) -> Self {
        self.father_id = Some(id);
        self
    }

    /// Set the mother's id
    #[must_use]
    pub const fn with_mother(mut self, id: PersonId) -> Self {
        self.mother_id = Some(id);
        self
    }

    /// Set the spouse's id
    #[must_use]
    pub const fn with_conjoint(mut self, id: PersonId) -> Self {
        self.conjoint_id = Some(id);
        self
    }

    /// Append a child reference
    #[must_use]
    pub fn with_child(mut self, id: PersonId) -> Self {
        self.children.push(PersonRef::from_id(id));
        self
    }

    /// Label shown in relative pickers: `"<last_name> <first_name>"`
    #[must_use]
    pub fn display_label(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    /// Name as shown on cards: `"<first_name> <last_name>"`
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Ids of the children that carry one
    pub fn child_ids(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.children.iter().filter_map(|child| child.id)
    }

    /// Whether `id` is one of this person's children
    #[must_use]
    pub fn has_child(&self, id: PersonId) -> bool {
        self.child_ids().any(|child| child == id)
    }

    /// Whether `other` shares a known father or mother with this person
    #[must_use]
    pub fn is_sibling_of(&self, other: &Self) -> bool {
        if other.id == self.id {
            return false;
        }
        let same_father = self.father_id.is_some() && self.father_id == other.father_id;
        let same_mother = self.mother_id.is_some() && self.mother_id == other.mother_id;
        same_father || same_mother
    }
}

impl EntityModel for Person {
    type Id = PersonId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Lifespan for Person {
    fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    fn death_date(&self) -> Option<NaiveDate> {
        self.death_date
    }
}

/// Parse a backend date: ISO date, ISO timestamp, or `DD/MM/YYYY`.
#[must_use]
pub fn parse_backend_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let iso = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .ok()
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_backend_date))
}

fn deserialize_children<'de, D>(deserializer: D) -> Result<Vec<PersonRef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<PersonRef>>::deserialize(deserializer)?.unwrap_or_default())
}
