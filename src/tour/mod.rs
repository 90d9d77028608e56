//! The walkthroughs themselves, one module per container family.
//!
//! # Purpose
//! Each walkthrough demonstrates one family of containers in isolation: what goes in, what comes
//! out, and which contract the container is quietly relying on. They don't feed each other and
//! can be compiled out individually through the feature of the same name.
//!
//! # Method
//! A walkthrough's entry point is its `demo` function, which prints a bracketed banner and then
//! narrates a handful of operations to stdout. Anything with behaviour worth promising is pulled
//! out into a plain function or built on [`record`](crate::record)/[`heap`](crate::heap) types,
//! and asserted in the module's tests rather than eyeballed in the output.

#[cfg(feature = "contiguous")]
pub mod contiguous;

#[cfg(feature = "hashed")]
pub mod hashed;

#[cfg(feature = "ordered")]
pub mod ordered;

#[cfg(feature = "priority")]
pub mod priority;

#[cfg(feature = "tuples")]
pub mod tuples;
