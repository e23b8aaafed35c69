//! Roster and family payload loading
//!
//! The backend serves the roster as a JSON array of persons and a family page
//! as a JSON object. These helpers materialize either from a string or a file;
//! fetching them over HTTP is left to the caller.

use std::path::Path;
use std::time::Instant;

use crate::collections::PersonCollection;
use crate::error::Result;
use crate::error::util::{read_to_string, read_to_string_async};
use crate::models::{Family, Person};
use crate::utils::logging::{log_empty_roster, log_roster_read_complete, log_roster_read_start};

/// Parse a roster from its JSON representation
pub fn parse_roster(json: &str) -> Result<Vec<Person>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a family page payload
pub fn parse_family(json: &str) -> Result<Family> {
    Ok(serde_json::from_str(json)?)
}

/// Read a roster from a JSON file
pub fn load_roster(path: &Path) -> Result<Vec<Person>> {
    let start = Instant::now();
    log_roster_read_start("sync", path);

    let contents = read_to_string(path)?;
    let persons = parse_roster(&contents)?;
    if persons.is_empty() {
        log_empty_roster(path);
    }

    log_roster_read_complete(path, persons.len(), start.elapsed());
    Ok(persons)
}

/// Read a roster from a JSON file without blocking the runtime
pub async fn load_roster_async(path: &Path) -> Result<Vec<Person>> {
    let start = Instant::now();
    log_roster_read_start("async", path);

    let contents = read_to_string_async(path).await?;
    let persons = parse_roster(&contents)?;
    if persons.is_empty() {
        log_empty_roster(path);
    }

    log_roster_read_complete(path, persons.len(), start.elapsed());
    Ok(persons)
}

/// Read a roster file straight into an indexed collection
pub fn load_collection(path: &Path) -> Result<PersonCollection> {
    load_roster(path).map(PersonCollection::from_persons)
}
