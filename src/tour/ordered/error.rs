use derive_more::{Display, Error};

/// Returned when an explicit lookup finds no age recorded for a name.
#[derive(Debug, Display, Error)]
#[display("Could not find {name}'s age.")]
pub struct UnknownName {
    pub name: String,
}
