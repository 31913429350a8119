//! Email address checks

/// Validates basic email format
///
/// Checks for:
/// - Exactly one '@' with content on both sides
/// - No leading, trailing or doubled '.' in the local part
/// - At least one '.' in the domain, not at either end
/// - Letters, digits and `._-+` in the local part; letters, digits and `.-` in the domain
/// - A top-level label of two or more characters
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if domain.contains('@') {
        return false;
    }

    if local.is_empty() || local.len() > 64 {
        return false;
    }

    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    if domain.is_empty() || domain.len() > 255 || !domain.contains('.') {
        return false;
    }

    if domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) || domain.contains("..") {
        return false;
    }

    let valid_local_char = |c: char| c.is_alphanumeric() || matches!(c, '.' | '_' | '-' | '+');
    if !local.chars().all(valid_local_char) {
        return false;
    }

    let valid_domain_char = |c: char| c.is_alphanumeric() || matches!(c, '.' | '-');
    if !domain.chars().all(valid_domain_char) {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((_, tld)) => tld.chars().count() >= 2,
        None => false,
    }
}

/// Case-insensitive suffix match, e.g. `has_allowed_suffix("Ana@GMAIL.com", "@gmail.com")`
pub fn has_allowed_suffix(email: &str, suffix: &str) -> bool {
    normalize_email(email).ends_with(&suffix.to_lowercase())
}

/// Lowercases the whole address
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}
