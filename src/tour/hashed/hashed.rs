use std::collections::{BTreeSet, HashMap, HashSet};

use crate::record::{ByName, Person};

/// Runs the hashed-container walkthrough, printing to stdout.
pub fn demo() {
    println!("\n[Hashed]\n");

    // The simple case: string keys already know how to hash themselves.
    let mut ages = HashMap::new();
    ages.insert("Bill".to_owned(), 38_u32);
    println!("Bills age comes back as {:?}", ages.get("Bill"));

    // The custom-key case: people keyed by name. Two Bills collapse to one entry, and the one
    // that was inserted first wins - insertion never replaces an equal key.
    let people = unique_by_name([
        Person::new("Bill", 38),
        Person::new("Jen", 41),
        Person::new("Bill", 62),
    ]);
    println!("{} distinct names inserted", people.len());

    // Same four names, two containers. The tree-based set always prints alphabetically; the
    // hash-based set prints in whatever order the buckets land in, which can change from run to
    // run. Never assume (or test!) a hash container's iteration order - only membership.
    let names = BTreeSet::from(["Bill", "Jen", "Brian", "Steve"]);
    let unordered_names: HashSet<&str> = names.iter().copied().collect();

    for name in &names {
        println!("Ordered name: {name}");
    }
    for name in &unordered_names {
        println!("Unordered name: {name}");
    }
}

/// Collects people into a set keyed by name alone, dropping later duplicates.
pub fn unique_by_name<I>(people: I) -> HashSet<ByName>
where
    I: IntoIterator<Item = Person>,
{
    people.into_iter().map(ByName::from).collect()
}
