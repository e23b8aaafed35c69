//! Domain models for genealogical records
//!
//! This module contains the person and family models consumed by the
//! relationship resolver and the eligible relative filter.

pub mod family;
pub mod person;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use family::{Family, FamilySlot};
pub use person::{Person, PersonRef};
pub use traits::{EntityModel, Lifespan};
pub use types::{DropdownItem, FamilyRole, Gender, PersonId};
