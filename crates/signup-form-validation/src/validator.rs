// File: src/validator.rs
// Purpose: Run every field's rule list and build the normalized user

use crate::error::{FieldError, FieldErrors};
use crate::model::{Field, RawFormInput, ValidatedUser};
use crate::rules::FieldRules;
use crate::settings::ValidatorSettings;
use crate::types::{NormalizedEmail, PersonName};

/// Validates signup submissions
///
/// Pure: the same input always yields the same outcome and nothing outside the
/// returned value is touched.
#[derive(Debug)]
pub struct FormValidator {
    name: FieldRules,
    email: FieldRules,
    password: FieldRules,
}

impl FormValidator {
    pub fn new(settings: &ValidatorSettings) -> Self {
        Self {
            name: FieldRules::name(),
            email: FieldRules::email(settings),
            password: FieldRules::password(settings),
        }
    }

    pub fn rules(&self, field: Field) -> &FieldRules {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    /// Check one field on its own, e.g. while the user is typing
    pub fn validate_field(&self, field: Field, value: &str) -> Option<FieldError> {
        self.rules(field).first_failure(value)
    }

    /// Validate a whole submission
    ///
    /// Every field is checked even when an earlier one failed, so the returned
    /// [`FieldErrors`] lists every failing field. Transforms only run when no
    /// field failed.
    pub fn validate(&self, input: RawFormInput) -> Result<ValidatedUser, FieldErrors> {
        let mut errors = FieldErrors::new();
        for field in Field::ALL {
            if let Some(error) = self.validate_field(field, input.value(field)) {
                errors.insert(field, error);
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let RawFormInput {
            name,
            email,
            password,
        } = input;

        Ok(ValidatedUser {
            name: PersonName::new(name),
            email: NormalizedEmail::new(email),
            password,
        })
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new(&ValidatorSettings::default())
    }
}

/// Validate with the default settings
pub fn validate(input: RawFormInput) -> Result<ValidatedUser, FieldErrors> {
    FormValidator::default().validate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationErrorKind;

    #[test]
    fn test_valid_submission_is_normalized() {
        let user = validate(RawFormInput::new("john smith doe", "JOHN@GMAIL.com", "secret1")).unwrap();
        assert_eq!(user.name.as_ref(), "John Smith Doe");
        assert_eq!(user.email.as_ref(), "john@gmail.com");
        assert_eq!(user.password, "secret1");
    }

    #[test]
    fn test_all_fields_are_reported_together() {
        let errors = validate(RawFormInput::new("", "not-an-email", "123")).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::Name).unwrap().kind, ValidationErrorKind::EmptyField);
        assert_eq!(errors.get(Field::Email).unwrap().kind, ValidationErrorKind::InvalidFormat);
        assert_eq!(errors.get(Field::Password).unwrap().kind, ValidationErrorKind::TooShort);
    }

    #[test]
    fn test_validate_field() {
        let validator = FormValidator::default();
        assert!(validator.validate_field(Field::Name, "Ana").is_none());
        assert_eq!(
            validator.validate_field(Field::Email, "").map(|e| e.message),
            Some("email is required".to_string())
        );
    }

    #[test]
    fn test_password_is_not_transformed() {
        let user = validate(RawFormInput::new("ana", "ana@gmail.com", "  Se Cr3T ")).unwrap();
        assert_eq!(user.password, "  Se Cr3T ");
    }

    #[test]
    fn test_custom_settings() {
        let mut settings = ValidatorSettings::default();
        settings.password.min_length = 8;
        let validator = FormValidator::new(&settings);

        let errors = validator
            .validate(RawFormInput::new("Ana", "ana@gmail.com", "secret1"))
            .unwrap_err();
        assert_eq!(
            errors.message(Field::Password),
            Some("password must be at least 8 characters")
        );
    }
}
