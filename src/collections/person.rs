//! Person roster collection
//!
//! The roster is the full list of persons fetched from the backend. It keeps
//! the backend order (the pickers list candidates in that order) and an id
//! index for lookups.

use std::cmp::Ordering;

use chrono::NaiveDate;
use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::collections::ModelCollection;
use crate::config::FilterConfig;
use crate::error::{FamilleError, Result};
use crate::filter::{EligibleRelatives, compute_eligible_relatives_with_config};
use crate::models::{Lifespan, Person, PersonId};

/// Field the roster list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    LastName,
    FirstName,
    Gender,
    BirthDate,
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The other direction
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Collection of persons in backend order, indexed by id
#[derive(Debug, Clone, Default)]
pub struct PersonCollection {
    persons: Vec<Person>,
    index: FxHashMap<PersonId, usize>,
}

impl PersonCollection {
    /// Create a new empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection from a roster, keeping its order.
    ///
    /// A later duplicate id replaces the earlier entry in place.
    #[must_use]
    pub fn from_persons(persons: Vec<Person>) -> Self {
        let mut collection = Self::new();
        for person in persons {
            collection.add(person);
        }
        collection
    }

    /// The person with `id`, or an error naming the missing id
    pub fn require(&self, id: PersonId) -> Result<&Person> {
        self.get(id).ok_or(FamilleError::PersonNotFound(id))
    }

    /// Picker label of the person with `id`
    #[must_use]
    pub fn label_for(&self, id: PersonId) -> Option<String> {
        self.get(id).map(Person::display_label)
    }

    /// Persons whose `"first last birth_place"` contains `term`, case-insensitively
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Person> {
        let needle = term.to_lowercase();
        self.filter(|person| {
            format!(
                "{} {} {}",
                person.first_name,
                person.last_name,
                person.birth_place.as_deref().unwrap_or_default()
            )
            .to_lowercase()
            .contains(&needle)
        })
    }

    /// `persons` sorted by `key` in `direction`; ties keep their order.
    ///
    /// Text keys compare lowercase. Missing birth dates sort as the earliest.
    #[must_use]
    pub fn sorted<'a>(
        persons: impl IntoIterator<Item = &'a Person>,
        key: SortKey,
        direction: SortDirection,
    ) -> Vec<&'a Person> {
        persons
            .into_iter()
            .sorted_by(|a, b| {
                let ordering = compare_by(a, b, key);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            })
            .collect()
    }

    /// Search then sort, as the roster list screen does
    #[must_use]
    pub fn search_sorted(
        &self,
        term: &str,
        sort: Option<(SortKey, SortDirection)>,
    ) -> Vec<&Person> {
        let found = self.search(term);
        match sort {
            Some((key, direction)) => Self::sorted(found, key, direction),
            None => found,
        }
    }

    /// Copy of the roster with `age` derived from birth dates where unset
    #[must_use]
    pub fn with_derived_ages(&self, reference_date: &NaiveDate) -> Self {
        let persons = self
            .persons
            .iter()
            .cloned()
            .map(|mut person| {
                if person.age.is_none() {
                    person.age = person.age_at(reference_date);
                }
                person
            })
            .collect();
        Self::from_persons(persons)
    }

    /// Picker lists for editing the person with `id`, or for a new person
    #[must_use]
    pub fn eligible_relatives(&self, id: Option<PersonId>, config: &FilterConfig) -> EligibleRelatives {
        let current = id.and_then(|id| self.get(id));
        compute_eligible_relatives_with_config(&self.persons, current, config)
    }
}

fn compare_by(a: &Person, b: &Person, key: SortKey) -> Ordering {
    let text = |value: &str| value.to_lowercase();
    match key {
        SortKey::LastName => text(&a.last_name).cmp(&text(&b.last_name)),
        SortKey::FirstName => text(&a.first_name).cmp(&text(&b.first_name)),
        SortKey::Gender => {
            let label = |p: &Person| p.gender.map(|g| g.label().to_lowercase()).unwrap_or_default();
            label(a).cmp(&label(b))
        }
        // Undated persons first
        SortKey::BirthDate => a.birth_date.cmp(&b.birth_date),
    }
}

impl ModelCollection<Person> for PersonCollection {
    fn add(&mut self, person: Person) {
        if let Some(&position) = self.index.get(&person.id) {
            log::warn!("Duplicate person id {} in roster, replacing", person.id);
            self.persons[position] = person;
        } else {
            self.index.insert(person.id, self.persons.len());
            self.persons.push(person);
        }
    }

    fn get(&self, id: PersonId) -> Option<&Person> {
        self.index.get(&id).map(|&position| &self.persons[position])
    }

    fn all(&self) -> &[Person] {
        &self.persons
    }
}
