//! Ordered rule lists, one per field
//!
//! Each field owns a fixed sequence of predicate + message pairs. Rules run in
//! order and evaluation of a field stops at the first rule that fails.

use std::fmt;

use crate::email::{has_allowed_suffix, is_valid_email};
use crate::error::{FieldError, ValidationErrorKind};
use crate::model::Field;
use crate::settings::ValidatorSettings;

pub const NAME_REQUIRED: &str = "name is required";
pub const EMAIL_REQUIRED: &str = "email is required";
pub const EMAIL_INVALID: &str = "invalid email format";

type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// A predicate the raw value must satisfy, and what to report when it doesn't
pub struct Rule {
    kind: ValidationErrorKind,
    message: String,
    passes: Predicate,
}

impl Rule {
    pub fn new<F>(kind: ValidationErrorKind, message: impl Into<String>, passes: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            kind,
            message: message.into(),
            passes: Box::new(passes),
        }
    }

    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn check(&self, value: &str) -> Result<(), FieldError> {
        if (self.passes)(value) {
            Ok(())
        } else {
            Err(FieldError::new(self.kind, self.message.clone()))
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// The rules for one field, in evaluation order
#[derive(Debug)]
pub struct FieldRules {
    field: Field,
    rules: Vec<Rule>,
}

impl FieldRules {
    pub fn new(field: Field, rules: Vec<Rule>) -> Self {
        Self { field, rules }
    }

    /// Name: must not be blank
    pub fn name() -> Self {
        Self::new(
            Field::Name,
            vec![Rule::new(
                ValidationErrorKind::EmptyField,
                NAME_REQUIRED,
                |value| !value.trim().is_empty(),
            )],
        )
    }

    /// Email: present, then well formed, then on the allowed domain
    pub fn email(settings: &ValidatorSettings) -> Self {
        let suffix = settings.email.allowed_suffix.clone();
        Self::new(
            Field::Email,
            vec![
                Rule::new(ValidationErrorKind::EmptyField, EMAIL_REQUIRED, |value| {
                    !value.is_empty()
                }),
                Rule::new(ValidationErrorKind::InvalidFormat, EMAIL_INVALID, is_valid_email),
                Rule::new(
                    ValidationErrorKind::DomainNotAllowed,
                    settings.email.domain_message.clone(),
                    move |value| has_allowed_suffix(value, &suffix),
                ),
            ],
        )
    }

    /// Password: minimum length in characters
    pub fn password(settings: &ValidatorSettings) -> Self {
        let min_length = settings.password.min_length;
        Self::new(
            Field::Password,
            vec![Rule::new(
                ValidationErrorKind::TooShort,
                settings.password.too_short_message(),
                move |value| value.chars().count() >= min_length,
            )],
        )
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Error of the first rule `value` fails, if any
    pub fn first_failure(&self, value: &str) -> Option<FieldError> {
        self.rules.iter().find_map(|rule| rule.check(value).err())
    }
}
