//! Placeholder and selected-value handling for picker lists

use crate::filter::core::person_item;
use crate::models::{DropdownItem, Person, PersonId};

/// Prefix `items` with the placeholder and keep the current selection visible.
///
/// When `selected` is set, found in `all`, and not already among `items`, its
/// entry is inserted right after the placeholder. A selection that does not
/// resolve to a roster entry is dropped silently.
#[must_use]
pub fn with_selected(
    items: Vec<DropdownItem>,
    all: &[Person],
    selected: Option<PersonId>,
    placeholder: &str,
) -> Vec<DropdownItem> {
    let mut result = Vec::with_capacity(items.len() + 2);
    result.push(DropdownItem::placeholder(placeholder));

    if let Some(id) = selected {
        let value = id.to_string();
        let already_listed = items.iter().any(|item| item.value == value);

        if !already_listed {
            match all.iter().find(|person| person.id == id) {
                Some(person) => result.push(person_item(person)),
                None => log::debug!("Selected relative {id} is not in the roster, skipping"),
            }
        }
    }

    result.extend(items);
    result
}
