//! Submission lifecycle: `Pending` until a submission resolves it

use crate::error::FieldErrors;
use crate::model::{RawFormInput, ValidatedUser};
use crate::validator::FormValidator;

/// How a submission resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Valid(ValidatedUser),
    Invalid(FieldErrors),
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid(_))
    }

    pub fn user(&self) -> Option<&ValidatedUser> {
        match self {
            Outcome::Valid(user) => Some(user),
            Outcome::Invalid(_) => None,
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Outcome::Valid(_) => None,
            Outcome::Invalid(errors) => Some(errors),
        }
    }
}

impl From<Result<ValidatedUser, FieldErrors>> for Outcome {
    fn from(result: Result<ValidatedUser, FieldErrors>) -> Self {
        match result {
            Ok(user) => Outcome::Valid(user),
            Err(errors) => Outcome::Invalid(errors),
        }
    }
}

impl From<Outcome> for Result<ValidatedUser, FieldErrors> {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Valid(user) => Ok(user),
            Outcome::Invalid(errors) => Err(errors),
        }
    }
}

/// Where the form currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState<'a> {
    /// Nothing submitted since the form was created or reset
    Pending,
    /// Last submission resolved
    Resolved(&'a Outcome),
}

/// One form on screen: a validator plus the outcome of the latest submission
#[derive(Debug, Default)]
pub struct FormSession {
    validator: FormValidator,
    last: Option<Outcome>,
}

impl FormSession {
    pub fn new(validator: FormValidator) -> Self {
        Self {
            validator,
            last: None,
        }
    }

    /// Start a new submission; the previous outcome is discarded first
    pub fn submit(&mut self, input: RawFormInput) -> &Outcome {
        self.last = None;
        let outcome = Outcome::from(self.validator.validate(input));
        self.last.insert(outcome)
    }

    /// Back to `Pending`
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn state(&self) -> SubmissionState<'_> {
        match &self.last {
            None => SubmissionState::Pending,
            Some(outcome) => SubmissionState::Resolved(outcome),
        }
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.last.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.last.is_none()
    }

    pub fn validator(&self) -> &FormValidator {
        &self.validator
    }
}
