//! Pairs and tuples: fixed-arity heterogeneous aggregates.
//!
//! Nothing dynamic here - a tuple's size and per-position types are fixed at compile time, and
//! access is by position. They mostly earn their keep as ad hoc multi-value returns when a named
//! struct isn't worth defining.

mod tuples;

pub use tuples::*;
