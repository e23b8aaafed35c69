//! Family view model
//!
//! A family page groups a household's father and mother with the four
//! grandparents and the children. Families are keyed by their male head, see
//! [`crate::navigation::family_key_for`].

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::models::person::Person;
use crate::models::types::{FamilyRole, PersonId};
use crate::navigation::resolve_target_family_id;

/// A role-labelled reference to a person within a family grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilySlot {
    /// Role of the slot in the grid
    pub role: FamilyRole,
    /// Person filling the slot, if known
    #[serde(rename = "personne")]
    pub person: Option<Person>,
}

impl FamilySlot {
    /// Create a slot
    #[must_use]
    pub const fn new(role: FamilyRole, person: Option<Person>) -> Self {
        Self { role, person }
    }

    /// Create a filled slot
    #[must_use]
    pub const fn filled(role: FamilyRole, person: Person) -> Self {
        Self::new(role, Some(person))
    }

    /// Create an empty slot
    #[must_use]
    pub const fn empty(role: FamilyRole) -> Self {
        Self::new(role, None)
    }

    /// Family id to navigate to when the slot is selected
    #[must_use]
    pub fn target_family_id(&self) -> Option<PersonId> {
        resolve_target_family_id(self)
    }
}

/// Family payload served by `/familles/{id}/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Family {
    /// Father (family head)
    pub pere: Option<Person>,
    /// Mother
    pub mere: Option<Person>,
    /// Children
    pub enfants: Vec<Person>,
    /// Father's father
    pub grand_pere_paternel: Option<Person>,
    /// Father's mother
    pub grand_mere_paternelle: Option<Person>,
    /// Mother's father
    pub grand_pere_maternel: Option<Person>,
    /// Mother's mother
    pub grand_mere_maternelle: Option<Person>,
}

impl Family {
    /// Page title, e.g. `"Famille de Jean Dupont"`
    #[must_use]
    pub fn title(&self) -> String {
        let head = self.pere.as_ref().map(Person::full_name).unwrap_or_default();
        format!("Famille de {head}").trim().to_string()
    }

    /// Paternal grandparent slots
    #[must_use]
    pub fn paternal_grandparents(&self) -> [FamilySlot; 2] {
        [
            FamilySlot::new(FamilyRole::PaternalGrandfather, self.grand_pere_paternel.clone()),
            FamilySlot::new(FamilyRole::PaternalGrandmother, self.grand_mere_paternelle.clone()),
        ]
    }

    /// Maternal grandparent slots
    #[must_use]
    pub fn maternal_grandparents(&self) -> [FamilySlot; 2] {
        [
            FamilySlot::new(FamilyRole::MaternalGrandfather, self.grand_pere_maternel.clone()),
            FamilySlot::new(FamilyRole::MaternalGrandmother, self.grand_mere_maternelle.clone()),
        ]
    }

    /// Parent slots
    #[must_use]
    pub fn parents(&self) -> [FamilySlot; 2] {
        [
            FamilySlot::new(FamilyRole::Father, self.pere.clone()),
            FamilySlot::new(FamilyRole::Mother, self.mere.clone()),
        ]
    }

    /// Child slots, oldest first; children of unknown age come last
    #[must_use]
    pub fn children(&self) -> Vec<FamilySlot> {
        let mut children = self.enfants.clone();
        children.sort_by_key(|child| Reverse(child.age));
        children
            .into_iter()
            .map(|child| FamilySlot::filled(FamilyRole::Child, child))
            .collect()
    }

    /// Every slot in grid order
    #[must_use]
    pub fn slots(&self) -> Vec<FamilySlot> {
        let mut slots = Vec::with_capacity(6 + self.enfants.len());
        slots.extend(self.paternal_grandparents());
        slots.extend(self.maternal_grandparents());
        slots.extend(self.parents());
        slots.extend(self.children());
        slots
    }

    /// Every slot paired with the family it navigates to
    #[must_use]
    pub fn navigation_targets(&self) -> Vec<(FamilySlot, Option<PersonId>)> {
        self.slots()
            .into_iter()
            .map(|slot| {
                let target = slot.target_family_id();
                (slot, target)
            })
            .collect()
    }
}
