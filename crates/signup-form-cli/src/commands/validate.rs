use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use signup_form_validation::{
    FieldErrors, FormValidator, RawFormInput, ValidatedUser, ValidatorSettings,
};
use tracing::{debug, info};

use crate::input::Source;
use crate::OutputFormat;

/// What a validation run prints, and where
#[derive(Debug, PartialEq, Eq)]
pub enum Report {
    /// Normalized user, printed to stdout
    Accepted(String),
    /// Field errors, printed to stderr
    Rejected(String),
}

impl Report {
    /// Process exit status: 0 when accepted, 1 when rejected
    pub fn code(&self) -> u8 {
        match self {
            Report::Accepted(_) => 0,
            Report::Rejected(_) => 1,
        }
    }

    pub fn emit(&self) -> ExitCode {
        match self {
            Report::Accepted(user) => println!("{}", user),
            Report::Rejected(errors) => eprintln!("{}", errors),
        }
        ExitCode::from(self.code())
    }
}

/// Validate one submission; stdout gets the user, stderr gets the errors
pub fn execute(settings: &ValidatorSettings, source: Source, format: OutputFormat) -> Result<ExitCode> {
    let input = source.read()?;
    let validator = FormValidator::new(settings);
    Ok(report(&validator, input, format)?.emit())
}

fn report(validator: &FormValidator, input: RawFormInput, format: OutputFormat) -> Result<Report> {
    match validator.validate(input) {
        Ok(user) => {
            info!(email = %user.email, "Submission accepted");
            Ok(Report::Accepted(render_user(&user)?))
        }
        Err(errors) => {
            info!(failed = errors.len(), "Submission rejected");
            debug!(%errors, "Field errors");
            Ok(Report::Rejected(render_errors(&errors, format)?))
        }
    }
}

fn render_user(user: &ValidatedUser) -> Result<String> {
    serde_json::to_string_pretty(user).context("Failed to serialize user")
}

fn render_errors(errors: &FieldErrors, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(errors).context("Failed to serialize field errors")
        }
        OutputFormat::Text => Ok(errors
            .iter()
            .map(|(field, error)| format!("{}: {}", field.to_string().bold(), error.message.red()))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use signup_form_validation::validate;

    #[test]
    fn test_render_user_as_pretty_json() {
        let user = validate(RawFormInput::new("john smith doe", "JOHN@GMAIL.com", "secret1")).unwrap();
        assert_eq!(
            render_user(&user).unwrap(),
            "{\n  \"name\": \"John Smith Doe\",\n  \"email\": \"john@gmail.com\",\n  \"password\": \"secret1\"\n}"
        );
    }

    #[test]
    fn test_render_errors_as_text() {
        colored::control::set_override(false);
        let errors = validate(RawFormInput::new("", "ana@yahoo.com", "secret1")).unwrap_err();
        assert_eq!(
            render_errors(&errors, OutputFormat::Text).unwrap(),
            "name: name is required\nemail: email must be a Google address"
        );
    }

    #[test]
    fn test_render_errors_as_json() {
        let errors = validate(RawFormInput::new("Ana", "ana@gmail.com", "123")).unwrap_err();
        let value: serde_json::Value =
            serde_json::from_str(&render_errors(&errors, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "password": "password must be at least 6 characters" })
        );
    }

    #[test]
    fn test_accepted_submission_exits_zero() {
        let report = report(
            &FormValidator::default(),
            RawFormInput::new("ana", "ana@gmail.com", "secret1"),
            OutputFormat::Json,
        )
        .unwrap();
        assert!(matches!(report, Report::Accepted(_)));
        assert_eq!(report.code(), 0);
    }

    #[test]
    fn test_rejected_submission_exits_one() {
        let report = report(
            &FormValidator::default(),
            RawFormInput::new("Ana", "ana@gmail.com", "123"),
            OutputFormat::Json,
        )
        .unwrap();
        assert_eq!(report.code(), 1);
        let Report::Rejected(errors) = &report else {
            panic!("expected a rejection, got {:?}", report);
        };
        assert!(errors.contains("password must be at least 6 characters"));
    }
}
