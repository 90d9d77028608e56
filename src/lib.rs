//! This crate is my guided tour of the standard container types.
//!
//! # Purpose
//! After years of reaching for whichever container was nearest, I wanted a single place that
//! demonstrates each family properly: what it guarantees, what it costs and where it bites. Every
//! walkthrough in [`tour`] is independent and self-contained; the binary just runs them in
//! sequence and prints what happens. None of this is meant to be production code, but I've tried
//! to write it as if it were.
//!
//! # Method
//! Each walkthrough is built on small library functions and types so that the behaviour it
//! demonstrates can be asserted in unit tests rather than just printed. The shared cast is a
//! [`Person`](record::Person) record, which turns out to be exactly awkward enough to expose the
//! interesting contracts: ordered containers want a total order, hashed containers want equality
//! that agrees with hashing, and the two don't have to pick the same field. [`record`] is where
//! those contracts live, and [`heap`] is the one place I wrapped a container rather than using it
//! bare, because `std`'s heap is max-first and the tour wants the youngest person out first.
//!
//! # Error Handling
//! There is almost nothing to handle: a lookup miss is a value, not an error. Where a walkthrough
//! wants something printable for a miss, it uses a small strongly-typed error struct rather than
//! a string, in the same spirit as the rest of my code.

#![warn(clippy::missing_panics_doc)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod heap;
pub mod record;

#[cfg(feature = "tour")]
pub mod tour;
