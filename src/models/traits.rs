//! Trait definitions for domain models
//!
//! This module defines the traits shared by the genealogy models.

use chrono::{Datelike, NaiveDate};
use std::hash::Hash;

/// A trait that all identified domain models implement.
pub trait EntityModel: Clone + Send + Sync + std::fmt::Debug {
    /// The type of identifier used for this model
    type Id: Copy + Eq + Hash + Send + Sync + std::fmt::Debug;

    /// Get the unique identifier for this model
    fn id(&self) -> Self::Id;
}

/// A trait for entities with a birth and optional death date.
pub trait Lifespan {
    /// Birth date, if known
    fn birth_date(&self) -> Option<NaiveDate>;

    /// Death date, if any
    fn death_date(&self) -> Option<NaiveDate>;

    /// Check if the entity was alive at a specific date
    fn was_alive_at(&self, date: &NaiveDate) -> bool {
        let born = self.birth_date().is_none_or(|birth| birth <= *date);
        let not_dead = self.death_date().is_none_or(|death| death >= *date);
        born && not_dead
    }

    /// Completed years at a reference date.
    ///
    /// For a deceased entity the age stops at the death date. Returns `None`
    /// without a birth date or when the reference date precedes the birth.
    fn age_at(&self, reference_date: &NaiveDate) -> Option<i32> {
        let birth = self.birth_date()?;
        let end = match self.death_date() {
            Some(death) if death < *reference_date => death,
            _ => *reference_date,
        };
        if end < birth {
            return None;
        }

        let years = end.year() - birth.year();
        // Birthday not reached yet in the final year
        let adjustment = i32::from((end.month(), end.day()) < (birth.month(), birth.day()));

        Some(years - adjustment)
    }
}
