//! Relationship target resolution
//!
//! Families are keyed by their male head: a husband keys his own household,
//! and a wife's household is found under her husband's id. Selecting a person
//! in a family grid therefore has to translate "who was selected" into "which
//! family id to open", which is what [`resolve_target_family_id`] does.

use crate::config::FamilleConfig;
use crate::models::{FamilyRole, FamilySlot, Gender, Person, PersonId};

/// Id under which `person`'s own household is keyed.
///
/// A woman's household is her spouse's, so this is her `conjoint_id` (and
/// `None` when she is unmarried). Anyone else keys their own household.
#[must_use]
pub fn family_key_for(person: &Person) -> Option<PersonId> {
    match person.gender {
        Some(Gender::Female) => person.conjoint_id,
        _ => Some(person.id),
    }
}

/// Family id to navigate to when `slot` is selected, or `None` when the slot
/// leads nowhere.
#[must_use]
pub fn resolve_target_family_id(slot: &FamilySlot) -> Option<PersonId> {
    let person = slot.person.as_ref()?;

    // The current page already is the parents' family
    if slot.role.is_parent() {
        return None;
    }

    if slot.role.is_grandparent() && person.gender == Some(Gender::Female) {
        return family_key_for(person);
    }

    if slot.role == FamilyRole::Child {
        // Unmarried children have no household of their own
        if person.conjoint_id.is_none() {
            return None;
        }
        if person.gender.is_some() {
            return family_key_for(person);
        }
    }

    Some(person.id)
}

/// Navigation path for `slot` under the given configuration
#[must_use]
pub fn target_path(slot: &FamilySlot, config: &FamilleConfig) -> Option<String> {
    let target = resolve_target_family_id(slot);
    log::debug!("Slot {} resolved to family {target:?}", slot.role);
    target.map(|id| config.family_path(id))
}

/// Default navigation path of the family keyed by `id`
#[must_use]
pub fn family_path(id: PersonId) -> String {
    FamilleConfig::default().family_path(id)
}
