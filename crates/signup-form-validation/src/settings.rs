// File: src/settings.rs
// Purpose: Tunable parts of the rule lists (allowed email domain, password length)

use serde::{Deserialize, Serialize};

/// Validator settings
///
/// Every section and key is optional; the defaults describe the stock signup
/// form (Google addresses only, passwords of at least 6 characters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ValidatorSettings {
    #[serde(default)]
    pub email: EmailSettings,

    #[serde(default)]
    pub password: PasswordSettings,
}

/// Email domain restriction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSettings {
    /// Literal suffix every address must end with, compared case-insensitively
    #[serde(default = "default_allowed_suffix")]
    pub allowed_suffix: String,

    /// Message shown when the suffix does not match
    #[serde(default = "default_domain_message")]
    pub domain_message: String,
}

/// Password length requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordSettings {
    /// Minimum number of characters
    ///
    /// Length is counted in Unicode scalar values (`char`s), so `"😀😀😀"` is 3
    /// characters long regardless of how it is encoded.
    #[serde(default = "default_min_length")]
    pub min_length: usize,
}

fn default_allowed_suffix() -> String {
    "@gmail.com".to_string()
}

fn default_domain_message() -> String {
    "email must be a Google address".to_string()
}

fn default_min_length() -> usize {
    6
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            allowed_suffix: default_allowed_suffix(),
            domain_message: default_domain_message(),
        }
    }
}

impl Default for PasswordSettings {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
        }
    }
}

impl PasswordSettings {
    pub fn too_short_message(&self) -> String {
        format!("password must be at least {} characters", self.min_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ValidatorSettings::default();
        assert_eq!(settings.email.allowed_suffix, "@gmail.com");
        assert_eq!(settings.email.domain_message, "email must be a Google address");
        assert_eq!(settings.password.min_length, 6);
        assert_eq!(
            settings.password.too_short_message(),
            "password must be at least 6 characters"
        );
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let settings: ValidatorSettings = toml::from_str("").unwrap();
        assert_eq!(settings, ValidatorSettings::default());
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
            [password]
            min_length = 10
        "#;
        let settings: ValidatorSettings = toml::from_str(toml).unwrap();
        assert_eq!(settings.password.min_length, 10);
        assert_eq!(settings.email, EmailSettings::default());
    }
}
