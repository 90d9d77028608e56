//! Ordered associative containers: [`BTreeSet`](std::collections::BTreeSet) and
//! [`BTreeMap`](std::collections::BTreeMap).
//!
//! The headline guarantee of the tree-based containers is deterministic, ascending iteration
//! order, run to run. The headline hazard is the entry API, which reads like a lookup but will
//! happily insert a default value for an absent key; the helpers here put the two side by side.

mod error;
mod ordered;
mod tests;

pub use error::*;
pub use ordered::*;
