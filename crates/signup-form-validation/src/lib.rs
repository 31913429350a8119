//! Signup Form Validation
//!
//! Turns a raw signup submission (name, email, password) into either a
//! normalized [`ValidatedUser`] or a [`FieldErrors`] map with one message per
//! failing field.
//!
//! ```rust
//! use signup_form_validation::{validate, Field, RawFormInput};
//!
//! let user = validate(RawFormInput::new("john smith doe", "JOHN@GMAIL.com", "secret1")).unwrap();
//! assert_eq!(user.name.as_ref(), "John Smith Doe");
//! assert_eq!(user.email.as_ref(), "john@gmail.com");
//!
//! let errors = validate(RawFormInput::new("Ana", "ana@yahoo.com", "secret1")).unwrap_err();
//! assert_eq!(errors.message(Field::Email), Some("email must be a Google address"));
//! ```
//!
//! Every field is checked against an explicit, ordered list of rules. Within a
//! field the first failing rule wins; across fields every rule list runs, so a
//! single submission reports all of its problems at once.

pub mod email;
pub mod error;
pub mod model;
pub mod name;
pub mod rules;
pub mod session;
pub mod settings;
pub mod types;
pub mod validator;

pub use error::{FieldError, FieldErrors, UnknownField, ValidationErrorKind};
pub use model::{Field, RawFormInput, ValidatedUser};
pub use rules::{FieldRules, Rule};
pub use session::{FormSession, Outcome, SubmissionState};
pub use settings::{EmailSettings, PasswordSettings, ValidatorSettings};
pub use types::{NormalizedEmail, PersonName};
pub use validator::{validate, FormValidator};
