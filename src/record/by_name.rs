use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use derive_more::{Display, From};

use super::Person;

/// A key wrapper that identifies a [`Person`] by name alone.
///
/// Hash-based containers require that equality and hashing agree: if two keys compare equal, they
/// must produce the same hash, or the container will quietly lose track of elements. Both impls
/// here therefore look at the name and nothing else. The age still travels with the key, it just
/// doesn't participate in identity, so a `HashSet<ByName>` keeps one entry per name no matter how
/// many ages show up for it.
///
/// The wrapper also reorders: `ByName` sorts alphabetically, which is how a container instance is
/// given a different ranking without touching `Person`'s own [`Ord`]. (`std` plays the same trick
/// with [`Reverse`](std::cmp::Reverse).)
#[derive(Debug, Clone, Display, From)]
#[display("{_0}")]
pub struct ByName(pub Person);

impl ByName {
    /// Unwraps the key back into the underlying Person.
    pub fn into_inner(self) -> Person {
        self.0
    }
}

impl Hash for ByName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.name.hash(state);
    }
}

impl PartialEq for ByName {
    fn eq(&self, other: &Self) -> bool {
        self.0.name == other.0.name
    }
}

impl Eq for ByName {}

impl Ord for ByName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.name.cmp(&other.0.name)
    }
}

impl PartialOrd for ByName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
