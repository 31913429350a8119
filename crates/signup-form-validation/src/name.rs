//! Person name normalization

/// Capitalizes every whitespace-delimited word and rejoins them with single spaces
///
/// Only the first character of each word is uppercased; the remainder is kept
/// as typed. Characters without an uppercase form pass through unchanged.
///
/// # Examples
/// ```
/// use signup_form_validation::name::capitalize_words;
/// assert_eq!(capitalize_words("john  smith doe"), "John Smith Doe");
/// assert_eq!(capitalize_words("mcDonald"), "McDonald");
/// ```
pub fn capitalize_words(value: &str) -> String {
    value
        .split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
