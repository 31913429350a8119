// File: src/config.rs
// Purpose: Validator settings from signup.toml

use anyhow::{bail, Context, Result};
use signup_form_validation::ValidatorSettings;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "signup.toml";

/// Load settings from `path`, or from `./signup.toml` when no path is given
///
/// A missing default file or an empty file yields the default settings. A
/// path given explicitly must exist.
pub fn load(path: Option<&Path>) -> Result<ValidatorSettings> {
    match path {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {:?}", path);
            }
            load_file(path)
        }
        None => {
            let path = Path::new(DEFAULT_CONFIG_PATH);
            if !path.exists() {
                tracing::debug!("No {} found, using default settings", DEFAULT_CONFIG_PATH);
                return Ok(ValidatorSettings::default());
            }
            load_file(path)
        }
    }
}

fn load_file(path: &Path) -> Result<ValidatorSettings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    if content.trim().is_empty() {
        return Ok(ValidatorSettings::default());
    }

    let settings: ValidatorSettings = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    tracing::debug!(?path, ?settings, "Loaded validator settings");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("  \n");
        let settings = load(Some(file.path())).unwrap();
        assert_eq!(settings, ValidatorSettings::default());
    }

    #[test]
    fn test_custom_settings() {
        let file = write_config(
            r#"
            [email]
            allowed_suffix = "@example.org"

            [password]
            min_length = 8
        "#,
        );
        let settings = load(Some(file.path())).unwrap();
        assert_eq!(settings.email.allowed_suffix, "@example.org");
        assert_eq!(settings.email.domain_message, "email must be a Google address");
        assert_eq!(settings.password.min_length, 8);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let file = write_config("[password]\nmin_length = \"six\"\n");
        let err = load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load(Some(missing.as_path())).is_err());
    }
}
