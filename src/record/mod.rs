//! The record type shared by the walkthroughs, along with its key wrapper.
//!
//! A [`Person`] carries a name and an age, which is just enough state for the two identity
//! questions a container can ask to disagree: ordered containers rank people by age, while the
//! hashed containers treat people with the same name as the same person. Rather than give
//! `Person` contracts that contradict each other, the name-keyed view lives in its own wrapper
//! type, [`ByName`].

mod by_name;
mod person;

pub use by_name::*;
pub use person::*;
