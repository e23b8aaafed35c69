//! A Rust library for genealogical records: resolving which family page a
//! selected relative leads to, and computing the admissible father, mother
//! and spouse choices when editing a person.

pub mod collections;
pub mod config;
pub mod error;
pub mod filter;
pub mod form;
pub mod loader;
pub mod models;
pub mod navigation;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{FamilleConfig, FilterConfig};
pub use error::{FamilleError, Result};
pub use models::{DropdownItem, Family, FamilyRole, FamilySlot, Gender, Person, PersonId, PersonRef};

// Relationship logic
pub use filter::{EligibleRelatives, RelationKind, compute_eligible_relatives, compute_eligible_relatives_with_config};
pub use navigation::{family_key_for, family_path, resolve_target_family_id};

// Roster and form
pub use collections::{ModelCollection, PersonCollection, SortDirection, SortKey};
pub use form::{PersonFormData, ValidationResult, validate_person_form};
pub use loader::{load_roster, load_roster_async, parse_family, parse_roster};
