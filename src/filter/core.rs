//! Per-role candidate predicates
//!
//! Each relation kind has its own admission rule, applied after the exclusion
//! set has removed the person itself, its current relatives, its children and
//! its siblings.

use std::fmt::Debug;

use crate::config::FilterConfig;
use crate::filter::exclusion::ExclusionSet;
use crate::models::{DropdownItem, Gender, Person, PersonId};

/// Relation a candidate list is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// Father picker
    Father,
    /// Mother picker
    Mother,
    /// Spouse picker
    Conjoint,
}

impl RelationKind {
    /// All relation kinds, in form order
    pub const ALL: [Self; 3] = [Self::Father, Self::Mother, Self::Conjoint];

    /// Placeholder label for the "none selected" entry
    #[must_use]
    pub fn placeholder(self, config: &FilterConfig) -> &str {
        match self {
            Self::Father => &config.father_placeholder,
            Self::Mother => &config.mother_placeholder,
            Self::Conjoint => &config.conjoint_placeholder,
        }
    }

    /// The id currently linked on `person` for this relation
    #[must_use]
    pub const fn selected_id(self, person: &Person) -> Option<PersonId> {
        match self {
            Self::Father => person.father_id,
            Self::Mother => person.mother_id,
            Self::Conjoint => person.conjoint_id,
        }
    }
}

/// A predicate over persons
pub trait PersonFilter: Debug {
    /// Whether `person` passes the filter
    fn matches(&self, person: &Person) -> bool;

    /// Keep the matching persons of `all`, in roster order
    fn apply<'a>(&self, all: &'a [Person]) -> Vec<&'a Person> {
        all.iter().filter(|person| self.matches(person)).collect()
    }
}

/// Candidate filter for one relation of one person
#[derive(Debug)]
pub struct RelativeFilter<'a> {
    kind: RelationKind,
    current: Option<&'a Person>,
    exclusions: &'a ExclusionSet,
    config: &'a FilterConfig,
}

impl<'a> RelativeFilter<'a> {
    /// Create a filter for `kind`
    #[must_use]
    pub const fn new(
        kind: RelationKind,
        current: Option<&'a Person>,
        exclusions: &'a ExclusionSet,
        config: &'a FilterConfig,
    ) -> Self {
        Self {
            kind,
            current,
            exclusions,
            config,
        }
    }

    fn is_child_of_current(&self, person: &Person) -> bool {
        self.current.is_some_and(|current| current.has_child(person.id))
    }

    fn is_opposite_gender(&self, gender: Gender) -> bool {
        match self.current.and_then(|current| current.gender) {
            Some(own) => gender == own.opposite(),
            None => true,
        }
    }
}

impl PersonFilter for RelativeFilter<'_> {
    fn matches(&self, person: &Person) -> bool {
        if self.exclusions.contains(person.id) {
            return false;
        }
        if !self.config.age_is_plausible(person.age) {
            return false;
        }

        match self.kind {
            RelationKind::Father => {
                person.gender == Some(Gender::Male) && !self.is_child_of_current(person)
            }
            RelationKind::Mother => {
                person.gender == Some(Gender::Female) && !self.is_child_of_current(person)
            }
            RelationKind::Conjoint => person
                .gender
                .is_some_and(|gender| self.is_opposite_gender(gender)),
        }
    }
}

/// Picker item for a person
#[must_use]
pub fn person_item(person: &Person) -> DropdownItem {
    DropdownItem::new(person.display_label(), person.id.to_string())
}

/// Filtered candidate items for `kind`, without placeholder or preserved value
#[must_use]
pub fn candidate_items(
    all: &[Person],
    current: Option<&Person>,
    kind: RelationKind,
    config: &FilterConfig,
) -> Vec<DropdownItem> {
    let exclusions = ExclusionSet::build(all, current);
    RelativeFilter::new(kind, current, &exclusions, config)
        .apply(all)
        .into_iter()
        .map(person_item)
        .collect()
}
