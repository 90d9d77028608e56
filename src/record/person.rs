use std::cmp::Ordering;

use derive_more::Display;

/// A named, aged individual, used as an element and key throughout the tour.
///
/// Equality and hashing are structural: two people are the same person only if both fields match.
/// The ordering is *not* structural - see [`Ord`](Person::cmp) below.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{name} ({age})")]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    /// Creates a Person from anything that can become an owned name.
    pub fn new(name: impl Into<String>, age: u32) -> Person {
        Person {
            name: name.into(),
            age,
        }
    }
}

impl Ord for Person {
    /// Ranks people by age.
    ///
    /// The name breaks ties so that the ordering agrees with equality: `Ord` promises that
    /// `a == b` exactly when `cmp` returns `Equal`, and an age-only comparison would report two
    /// different people as equal. Age remains the primary rank, so an ordered container of people
    /// always iterates youngest-first.
    fn cmp(&self, other: &Self) -> Ordering {
        self.age
            .cmp(&other.age)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
