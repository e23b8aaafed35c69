//! Exclusion set construction
//!
//! Ids that may never be picked as father, mother or spouse of the person
//! being edited, whatever the role.

use rustc_hash::FxHashSet;

use crate::models::{Person, PersonId};

/// Ids excluded from every relative picker of one person
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    ids: FxHashSet<PersonId>,
}

impl ExclusionSet {
    /// Build the set for `current` against the whole roster.
    ///
    /// Contains the person itself, its currently linked father, mother and
    /// spouse, its children, and every sibling in `all` (anyone else sharing a
    /// known father or mother). Empty for a new person.
    #[must_use]
    pub fn build(all: &[Person], current: Option<&Person>) -> Self {
        let Some(current) = current else {
            return Self::default();
        };

        let mut ids = FxHashSet::default();
        ids.insert(current.id);
        ids.extend(current.father_id);
        ids.extend(current.mother_id);
        ids.extend(current.conjoint_id);
        ids.extend(current.child_ids());
        ids.extend(
            all.iter()
                .filter(|person| person.is_sibling_of(current))
                .map(|sibling| sibling.id),
        );

        log::trace!("Excluding {} ids for person {}", ids.len(), current.id);
        Self { ids }
    }

    /// Whether `id` is excluded
    #[must_use]
    pub fn contains(&self, id: PersonId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of excluded ids
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is excluded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
