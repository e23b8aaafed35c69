//! Shared fixtures for integration tests
#![allow(dead_code)]

use famille::{Gender, Person, PersonId};

/// Create a man with an optional age
pub fn create_test_man(id: PersonId, first_name: &str, last_name: &str, age: Option<i32>) -> Person {
    let person = Person::new(id, first_name, last_name).with_gender(Gender::Male);
    match age {
        Some(age) => person.with_age(age),
        None => person,
    }
}

/// Create a woman with an optional age
pub fn create_test_woman(id: PersonId, first_name: &str, last_name: &str, age: Option<i32>) -> Person {
    let person = Person::new(id, first_name, last_name).with_gender(Gender::Female);
    match age {
        Some(age) => person.with_age(age),
        None => person,
    }
}

/// Three generations of the Dupont family plus unrelated adults.
///
/// * 1 Jean Dupont (M, 70) married to 2 Odette Dupont (F, 68)
/// * 3 Pierre Dupont (M, 45), son of 1 and 2, married to 4 Claire Martin (F, 43)
/// * 5 Sophie Dupont (F, 41), daughter of 1 and 2
/// * 6 Hugo Dupont (M, 15) and 7 Emma Dupont (F, 12), children of 3 and 4
/// * 8 Louis Bernard (M, age unknown), 9 Julie Petit (F, 30), 10 Nina Roux (F, 19)
pub fn create_test_roster() -> Vec<Person> {
    vec![
        create_test_man(1, "Jean", "Dupont", Some(70)).with_conjoint(2).with_child(3).with_child(5),
        create_test_woman(2, "Odette", "Dupont", Some(68)).with_conjoint(1).with_child(3).with_child(5),
        create_test_man(3, "Pierre", "Dupont", Some(45))
            .with_father(1)
            .with_mother(2)
            .with_conjoint(4)
            .with_child(6)
            .with_child(7),
        create_test_woman(4, "Claire", "Martin", Some(43)).with_conjoint(3).with_child(6).with_child(7),
        create_test_woman(5, "Sophie", "Dupont", Some(41)).with_father(1).with_mother(2),
        create_test_man(6, "Hugo", "Dupont", Some(15)).with_father(3).with_mother(4),
        create_test_woman(7, "Emma", "Dupont", Some(12)).with_father(3).with_mother(4),
        create_test_man(8, "Louis", "Bernard", None),
        create_test_woman(9, "Julie", "Petit", Some(30)),
        create_test_woman(10, "Nina", "Roux", Some(19)),
    ]
}

/// Find a fixture person by id
pub fn person(roster: &[Person], id: PersonId) -> &Person {
    roster
        .iter()
        .find(|p| p.id == id)
        .unwrap_or_else(|| panic!("fixture person {id} missing"))
}

/// Candidate values of a picker list, placeholder excluded
pub fn values(items: &[famille::DropdownItem]) -> Vec<&str> {
    items
        .iter()
        .filter(|item| !item.is_placeholder())
        .map(|item| item.value.as_str())
        .collect()
}
