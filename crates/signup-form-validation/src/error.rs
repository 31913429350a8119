//! Validation error kinds and the per-field error map

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

use crate::model::Field;

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// Required field missing or whitespace-only
    #[error("required field is empty")]
    EmptyField,
    /// Email does not match basic address syntax
    #[error("invalid address syntax")]
    InvalidFormat,
    /// Email is well formed but not on the permitted domain
    #[error("email domain is not allowed")]
    DomainNotAllowed,
    /// Password below the minimum length
    #[error("value is too short")]
    TooShort,
}

/// A single rejected field: what went wrong and the message to show next to it
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldError {
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Returned when a host names a field that the form does not have
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

/// Field name to first-failing-rule message
///
/// Holds at most one entry per field. Serializes as a flat
/// `{ "email": "invalid email format" }` object, which is what display
/// layers render next to each input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<Field, FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `field`. An error already recorded for the field is kept.
    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.entries.entry(field).or_insert(error);
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.entries.get(&field)
    }

    /// Message for `field`, if it failed
    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).map(|error| error.message.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Failing fields in form order (name, email, password)
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Field, FieldError> {
        self.entries.iter()
    }

    /// Flatten into field name → message, dropping the error kinds
    pub fn into_messages(self) -> BTreeMap<&'static str, String> {
        self.entries
            .into_iter()
            .map(|(field, error)| (field.as_str(), error.message))
            .collect()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = (&'a Field, &'a FieldError);
    type IntoIter = btree_map::Iter<'a, Field, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, error) in &self.entries {
            map.serialize_entry(field.as_str(), &error.message)?;
        }
        map.end()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in &self.entries {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}
