//! Submission records: what comes in, what goes out

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownField;
use crate::types::{NormalizedEmail, PersonName};

/// The three inputs of the signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    /// All fields, in evaluation order
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Password];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "password" => Ok(Field::Password),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Unvalidated submission, exactly as typed
///
/// Missing keys deserialize as empty strings so that a partial payload still
/// produces per-field errors rather than a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFormInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RawFormInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Raw value typed into `field`
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }
}

/// Normalized record, produced only when every field passed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedUser {
    pub name: PersonName,
    pub email: NormalizedEmail,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_round_trips_through_str() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        assert_eq!(
            "username".parse::<Field>(),
            Err(UnknownField("username".to_string()))
        );
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let input: RawFormInput = serde_json::from_str(r#"{"email":"ana@gmail.com"}"#).unwrap();
        assert_eq!(input.name, "");
        assert_eq!(input.email, "ana@gmail.com");
        assert_eq!(input.password, "");
    }

    #[test]
    fn test_value_by_field() {
        let input = RawFormInput::new("Ana", "ana@gmail.com", "secret1");
        assert_eq!(input.value(Field::Name), "Ana");
        assert_eq!(input.value(Field::Email), "ana@gmail.com");
        assert_eq!(input.value(Field::Password), "secret1");
    }
}
