use std::collections::{BTreeMap, BTreeSet};

use super::UnknownName;

/// Runs the ordered-container walkthrough, printing to stdout.
pub fn demo() {
    println!("\n[Ordered]\n");

    // A set keeps one copy of every value, sorted, with logarithmic lookup.
    let mut ints = BTreeSet::new();
    ints.insert(7);
    if ints.contains(&7) {
        println!("Has a 7");
    }
    if ints.get(&7).is_some() {
        println!("Strangely, another way of checking for presence.");
    }

    // A map works like a set but associates each key with a value.
    let mut ages = BTreeMap::new();
    ages.insert("Bill".to_owned(), 38);
    ages.insert("Brian".to_owned(), 40);

    // Asking explicitly leaves the map untouched when the name is absent; the miss arrives as a
    // printable value to handle on the spot.
    match require_age(&ages, "Jen") {
        Ok(age) => println!("Jens age is {age}"),
        Err(err) => println!("{err}"),
    }

    // The entry API reads like a lookup but inserts a default-valued entry as a side effect.
    let jens_age = age_or_enroll(&mut ages, "Jen");
    println!("Asking through the entry API enrolled Jen with age {jens_age}");

    // Tree-based containers iterate in ascending key order, deterministically, every run.
    for (name, age) in &ages {
        println!("{name} is {age}");
    }
}

/// Returns the age recorded for `name`, *enrolling the name with age 0 if it is absent*.
///
/// This mirrors indexed read-access in other languages' map types: convenient, but a read that
/// mutates. Reach for [`lookup_age`] unless the insertion is actually wanted.
pub fn age_or_enroll(ages: &mut BTreeMap<String, u32>, name: &str) -> u32 {
    *ages.entry(name.to_owned()).or_default()
}

/// Returns the age recorded for `name`, or None if there is no entry. Never mutates the map.
pub fn lookup_age(ages: &BTreeMap<String, u32>, name: &str) -> Option<u32> {
    ages.get(name).copied()
}

/// Returns the age recorded for `name`, or an [`UnknownName`] whose `Display` output is the
/// fallback message to print. Never mutates the map.
pub fn require_age(ages: &BTreeMap<String, u32>, name: &str) -> Result<u32, UnknownName> {
    lookup_age(ages, name).ok_or_else(|| UnknownName {
        name: name.to_owned(),
    })
}
