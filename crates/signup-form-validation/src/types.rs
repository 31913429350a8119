//! Normalized field types carried by [`ValidatedUser`](crate::ValidatedUser)
//!
//! Construction applies the field's transform, so a value of these types is
//! always in normalized form, including after deserialization.

use nutype::nutype;

use crate::name::capitalize_words;

/// A person's name with every word capitalized
///
/// ```rust
/// use signup_form_validation::PersonName;
///
/// let name = PersonName::new("john smith".to_string());
/// assert_eq!(name.as_ref(), "John Smith");
/// ```
#[nutype(
    sanitize(with = |name: String| capitalize_words(&name)),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct PersonName(String);

/// An email address folded to lowercase
#[nutype(
    sanitize(lowercase),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct NormalizedEmail(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_name_is_capitalized_on_construction() {
        let name = PersonName::new("maria  da silva".to_string());
        assert_eq!(name.as_ref(), "Maria Da Silva");
        assert_eq!(name.to_string(), "Maria Da Silva");
    }

    #[test]
    fn test_email_is_lowercased_on_construction() {
        let email = NormalizedEmail::new("Ana@GMAIL.com".to_string());
        assert_eq!(email.as_ref(), "ana@gmail.com");
    }

    #[test]
    fn test_deserialize_applies_transform() {
        let name: PersonName = serde_json::from_str(r#""ana maria""#).unwrap();
        assert_eq!(name.into_inner(), "Ana Maria");
    }
}
