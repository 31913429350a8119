//! Signup Form WASM
//!
//! WebAssembly bindings for the signup form validator.
//! The page collects the three inputs, hands them to `validateSignup` (or a
//! `SignupForm` instance) on submit, and renders whichever result comes back.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use signup_form_validation::{
    Field, FieldErrors, FormSession, FormValidator, Outcome, RawFormInput, ValidatedUser,
    ValidatorSettings,
};

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result handed back to JavaScript
///
/// `{ ok: true, user: {...} }` or `{ ok: false, errors: { field: message } }`
#[derive(Serialize)]
#[serde(untagged)]
enum SubmissionResult<'a> {
    Valid { ok: bool, user: &'a ValidatedUser },
    Invalid { ok: bool, errors: &'a FieldErrors },
}

impl<'a> From<&'a Outcome> for SubmissionResult<'a> {
    fn from(outcome: &'a Outcome) -> Self {
        match outcome {
            Outcome::Valid(user) => SubmissionResult::Valid { ok: true, user },
            Outcome::Invalid(errors) => SubmissionResult::Invalid { ok: false, errors },
        }
    }
}

fn parse_settings(settings: JsValue) -> Result<ValidatorSettings, JsValue> {
    if settings.is_undefined() || settings.is_null() {
        return Ok(ValidatorSettings::default());
    }
    serde_wasm_bindgen::from_value(settings)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse settings: {}", e)))
}

fn parse_input(input: JsValue) -> Result<RawFormInput, JsValue> {
    serde_wasm_bindgen::from_value(input)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form input: {}", e)))
}

// Plain objects rather than ES2015 Maps, so `result.errors.email` works
fn to_js(outcome: &Outcome) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(SubmissionResult::from(outcome).serialize(&serializer)?)
}

/// Validate a whole submission with the default rules
///
/// # Example (JavaScript)
/// ```javascript
/// const result = validateSignup({ name: 'john doe', email: 'JOHN@gmail.com', password: 'secret1' });
/// if (result.ok) show(result.user); else showErrors(result.errors);
/// ```
#[wasm_bindgen(js_name = validateSignup)]
pub fn validate_signup(input: JsValue) -> Result<JsValue, JsValue> {
    let input = parse_input(input)?;
    let outcome = Outcome::from(FormValidator::default().validate(input));
    to_js(&outcome)
}

/// Check a single field, returning its message or `undefined` when it passes
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field_name: &str, value: &str) -> Result<Option<String>, JsValue> {
    let field: Field = field_name
        .parse()
        .map_err(|e: signup_form_validation::UnknownField| JsValue::from_str(&e.to_string()))?;
    Ok(FormValidator::default()
        .validate_field(field, value)
        .map(|error| error.message))
}

/// A form on the page, remembering the outcome of its latest submission
#[wasm_bindgen]
pub struct SignupForm {
    session: FormSession,
}

#[wasm_bindgen]
impl SignupForm {
    /// Create a form; `settings` may be omitted to use the default rules
    #[wasm_bindgen(constructor)]
    pub fn new(settings: JsValue) -> Result<SignupForm, JsValue> {
        let settings = parse_settings(settings)?;
        Ok(SignupForm {
            session: FormSession::new(FormValidator::new(&settings)),
        })
    }

    pub fn submit(&mut self, input: JsValue) -> Result<JsValue, JsValue> {
        let input = parse_input(input)?;
        let outcome = self.session.submit(input);
        to_js(outcome)
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    #[wasm_bindgen(getter)]
    pub fn pending(&self) -> bool {
        self.session.is_pending()
    }

    /// Latest result, or `undefined` while pending
    pub fn result(&self) -> Result<JsValue, JsValue> {
        match self.session.outcome() {
            Some(outcome) => to_js(outcome),
            None => Ok(JsValue::UNDEFINED),
        }
    }
}
