//! Unordered associative containers: [`HashMap`](std::collections::HashMap) and
//! [`HashSet`](std::collections::HashSet).
//!
//! Hash-based containers trade the tree containers' ordering guarantee for average constant-time
//! lookup. Primitive and string keys hash out of the box; a user-defined key needs [`Hash`] and
//! [`Eq`] impls that agree with each other, which is what [`ByName`](crate::record::ByName)
//! provides for [`Person`](crate::record::Person).

mod hashed;
mod tests;

pub use hashed::*;
