#![cfg(test)]

use std::collections::{BTreeMap, BTreeSet};

use super::*;

fn sample_ages() -> BTreeMap<String, u32> {
    BTreeMap::from([("Bill".to_owned(), 38), ("Brian".to_owned(), 40)])
}

#[test]
fn test_set_iterates_in_ascending_order() {
    let names = BTreeSet::from(["Jen", "Bill", "Steve", "Brian"]);

    let first_pass: Vec<_> = names.iter().copied().collect();
    assert_eq!(
        first_pass,
        ["Bill", "Brian", "Jen", "Steve"],
        "Iteration should yield elements in ascending order regardless of insertion order."
    );

    let second_pass: Vec<_> = names.iter().copied().collect();
    assert_eq!(
        first_pass, second_pass,
        "Iteration order should be deterministic from pass to pass."
    );
}

#[test]
fn test_lookup_age_reports_miss_without_mutating() {
    let ages = sample_ages();

    assert_eq!(
        lookup_age(&ages, "Jen"),
        None,
        "An absent name should report a miss."
    );
    assert_eq!(
        ages.len(),
        2,
        "An explicit lookup must not insert anything."
    );
}

#[test]
fn test_age_or_enroll_inserts_a_default_entry() {
    let mut ages = sample_ages();

    assert_eq!(
        age_or_enroll(&mut ages, "Jen"),
        0,
        "Reading an absent name through the entry API should produce the default age."
    );
    assert_eq!(
        ages.len(),
        3,
        "The read should have inserted an entry as a side effect."
    );
    assert_eq!(
        lookup_age(&ages, "Jen"),
        Some(0),
        "The inserted entry should be the zero default, visible to later lookups."
    );
}

#[test]
fn test_age_or_enroll_leaves_existing_entries_alone() {
    let mut ages = sample_ages();

    assert_eq!(
        age_or_enroll(&mut ages, "Bill"),
        38,
        "A present name should come back with its recorded age."
    );
    assert_eq!(ages.len(), 2, "No entry should be added for a present name.");
}

#[test]
fn test_require_age_produces_a_printable_miss() {
    let ages = sample_ages();

    assert_eq!(
        require_age(&ages, "Bill").ok(),
        Some(38),
        "A present name should succeed."
    );

    let err = require_age(&ages, "Jen").expect_err("Jen was never inserted");
    assert_eq!(
        err.to_string(),
        "Could not find Jen's age.",
        "The miss should carry the fallback message as its Display output."
    );
    assert_eq!(ages.len(), 2, "A failed lookup must not insert anything.");
}
