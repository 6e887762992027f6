use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for aggregate identifier types
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Convert the ID to a string
    fn as_string(&self) -> String;

    /// Build the ID from a string
    fn from_string(s: &str) -> Result<Self, String>;
}
