#![cfg(test)]

use super::*;
use crate::record::{ByName, Person};

#[test]
fn test_membership_holds_for_every_inserted_key() {
    let people = unique_by_name([
        Person::new("Bill", 38),
        Person::new("Jen", 41),
        Person::new("Brian", 40),
        Person::new("Steve", 35),
    ]);

    for name in ["Bill", "Jen", "Brian", "Steve"] {
        assert!(
            people.contains(&ByName::from(Person::new(name, 0))),
            "{name} was inserted, so membership must succeed whatever the iteration order."
        );
    }
    assert!(
        !people.contains(&ByName::from(Person::new("Sam", 14))),
        "Names that were never inserted shouldn't be found."
    );
}

#[test]
fn test_duplicate_names_collapse_to_the_first() {
    let people = unique_by_name([
        Person::new("Bill", 38),
        Person::new("Jen", 41),
        Person::new("Bill", 62),
    ]);

    assert_eq!(
        people.len(),
        2,
        "Two people sharing a name are one key as far as the set is concerned."
    );

    let bill = people
        .get(&ByName::from(Person::new("Bill", 0)))
        .expect("Bill should be present");
    assert_eq!(
        bill.0.age, 38,
        "Inserting an equal key should keep the existing element, as std does."
    );
}

#[test]
fn test_lookup_ignores_the_non_key_field() {
    let people = unique_by_name([Person::new("Bill", 38)]);

    assert!(
        people.contains(&ByName::from(Person::new("Bill", 99))),
        "Only the name participates in identity, so any age should match."
    );
}
