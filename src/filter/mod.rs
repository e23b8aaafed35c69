//! Eligible relative filtering
//!
//! Given the roster and the person being edited (or `None` for a new person),
//! computes the father, mother and spouse picker lists. Invalid choices are
//! filtered out (self, current relatives, children, siblings, wrong gender,
//! known age below the configured minimum) while an already-linked relative
//! always stays selectable.
//!
//! Everything here is pure: no I/O, no errors, same input gives the same
//! output in the same order.

pub mod core;
pub mod exclusion;
pub mod items;

pub use self::core::{PersonFilter, RelationKind, RelativeFilter, candidate_items, person_item};
pub use self::exclusion::ExclusionSet;
pub use self::items::with_selected;

use serde::{Deserialize, Serialize};

use crate::config::FilterConfig;
use crate::models::{DropdownItem, Person};

/// Picker lists for the three relation fields of the person form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibleRelatives {
    /// Father picker entries, placeholder first
    pub father_candidates: Vec<DropdownItem>,
    /// Mother picker entries, placeholder first
    pub mother_candidates: Vec<DropdownItem>,
    /// Spouse picker entries, placeholder first
    pub conjoint_candidates: Vec<DropdownItem>,
}

impl EligibleRelatives {
    /// Entries for one relation
    #[must_use]
    pub fn for_kind(&self, kind: RelationKind) -> &[DropdownItem] {
        match kind {
            RelationKind::Father => &self.father_candidates,
            RelationKind::Mother => &self.mother_candidates,
            RelationKind::Conjoint => &self.conjoint_candidates,
        }
    }
}

/// Compute the picker lists with the default configuration
#[must_use]
pub fn compute_eligible_relatives(all: &[Person], current: Option<&Person>) -> EligibleRelatives {
    compute_eligible_relatives_with_config(all, current, &FilterConfig::default())
}

/// Compute the picker lists
#[must_use]
pub fn compute_eligible_relatives_with_config(
    all: &[Person],
    current: Option<&Person>,
    config: &FilterConfig,
) -> EligibleRelatives {
    let exclusions = ExclusionSet::build(all, current);

    let list_for = |kind: RelationKind| {
        let items = RelativeFilter::new(kind, current, &exclusions, config)
            .apply(all)
            .into_iter()
            .map(person_item)
            .collect();
        let selected = current.and_then(|person| kind.selected_id(person));
        with_selected(items, all, selected, kind.placeholder(config))
    };

    let relatives = EligibleRelatives {
        father_candidates: list_for(RelationKind::Father),
        mother_candidates: list_for(RelationKind::Mother),
        conjoint_candidates: list_for(RelationKind::Conjoint),
    };

    log::debug!(
        "Eligible relatives for {:?}: {} fathers, {} mothers, {} spouses",
        current.map(|person| person.id),
        relatives.father_candidates.len() - 1,
        relatives.mother_candidates.len() - 1,
        relatives.conjoint_candidates.len() - 1,
    );

    relatives
}
