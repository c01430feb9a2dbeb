//! Request body field that keeps track of how it was supplied.
//!
//! A JSON field can be left out, sent as `null`, sent with the wrong type,
//! or sent with a usable value. Each case is a validation outcome of its
//! own, so none of them may fail deserialization of the whole body.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Field<T> {
    /// Key not present in the body
    Missing,
    /// Key present with `null`
    Null,
    /// Key present with a value of the wrong JSON type
    Mistyped,
    Present(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Missing
    }
}

impl<T> Field<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }

    pub fn present(&self) -> Option<&T> {
        match self {
            Field::Present(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_present(self) -> Option<T> {
        match self {
            Field::Present(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Present(value)
    }
}

/// Used with `#[serde(default)]`, so it only runs for keys that are present
impl<'de, T> Deserialize<'de> for Field<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => Field::Null,
            value => serde_json::from_value(value).map_or(Field::Mistyped, Field::Present),
        })
    }
}
