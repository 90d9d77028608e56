//! Priority structures: retrieval always yields the extremal element under the instance's
//! ranking, with logarithmic insertion and removal.

use crate::heap::MinHeap;
use crate::record::{ByName, Person};

/// Runs the priority-structure walkthrough, printing to stdout.
pub fn demo() {
    println!("\n[Priority]\n");

    // Person ranks by age, so this instance always offers up the youngest.
    let mut people = MinHeap::new();
    people.push(Person::new("Brian", 39));
    people.push(Person::new("Bill", 37));
    people.push(Person::new("Jen", 38));

    if let Some(person) = people.pop() {
        println!("First out by age: {person}");
    }

    // The ranking criterion belongs to the instance, not to Person: rebuild the remaining people
    // under a name-keyed wrapper and the same structure serves them alphabetically instead.
    let mut queue: MinHeap<ByName> = people.into_iter().map(ByName::from).collect();

    while let Some(person) = queue.pop() {
        println!("Next out by name: {person}");
    }
}
