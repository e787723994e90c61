//! Placeholder name and arity validation.

use crate::constants::MAX_ARITY;
use crate::types::{Family, PlaceholderKind};

/// Names accepted inside `{...}`, with the kind each one expands to.
const BUILTIN_PLACEHOLDERS: &[(&str, PlaceholderKind)] = &[
    ("bool", PlaceholderKind::Bool),
    ("int", PlaceholderKind::Int),
    ("float", PlaceholderKind::Float),
    ("string", PlaceholderKind::String),
    ("display", PlaceholderKind::Display),
];

/// Family names accepted as the first argument of `arity_family!`.
const FAMILIES: &[(&str, Family)] = &[
    ("sprintf", Family::Sprintf),
    ("uncurry", Family::Uncurry),
    ("tuple", Family::Tuple),
];

/// Characters allowed in a placeholder name.
#[inline]
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Looks up a built-in placeholder by name.
pub fn builtin_kind(name: &str) -> Option<PlaceholderKind> {
    BUILTIN_PLACEHOLDERS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, kind)| *kind)
}

/// Comma-separated list of placeholder names, for error messages.
pub fn builtin_names() -> String {
    BUILTIN_PLACEHOLDERS
        .iter()
        .map(|(name, _)| format!("{{{name}}}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Looks up an arity family by name.
pub fn family(name: &str) -> Option<Family> {
    FAMILIES
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, family)| *family)
}

/// Checks the upper arity bound requested for a family.
pub fn check_arity(family: Family, max: usize) -> Result<(), String> {
    let min = family.min_arity();
    if max < min {
        return Err(format!(
            "Arity {max} is below the smallest arity of this family ({min})"
        ));
    }
    if max > MAX_ARITY {
        return Err(format!(
            "Arity {max} exceeds the maximum supported arity ({MAX_ARITY})"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_kinds() {
        assert_eq!(builtin_kind("bool"), Some(PlaceholderKind::Bool));
        assert_eq!(builtin_kind("int"), Some(PlaceholderKind::Int));
        assert_eq!(builtin_kind("float"), Some(PlaceholderKind::Float));
        assert_eq!(builtin_kind("string"), Some(PlaceholderKind::String));
        assert_eq!(builtin_kind("display"), Some(PlaceholderKind::Display));
    }

    #[test]
    fn test_unknown_names_rejected() {
        assert_eq!(builtin_kind(""), None);
        assert_eq!(builtin_kind("Int"), None);
        assert_eq!(builtin_kind("i64"), None);
        assert_eq!(builtin_kind("d"), None);
    }

    #[test]
    fn test_name_chars() {
        assert!("display".chars().all(is_name_char));
        assert!("under_score9".chars().all(is_name_char));
        assert!(!is_name_char(' '));
        assert!(!is_name_char('-'));
        assert!(!is_name_char('{'));
    }

    #[test]
    fn test_builtin_names_listing() {
        assert_eq!(
            builtin_names(),
            "{bool}, {int}, {float}, {string}, {display}"
        );
    }

    #[test]
    fn test_families() {
        assert_eq!(family("sprintf"), Some(Family::Sprintf));
        assert_eq!(family("uncurry"), Some(Family::Uncurry));
        assert_eq!(family("tuple"), Some(Family::Tuple));
        assert_eq!(family("curry"), None);
    }

    #[test]
    fn test_arity_bounds() {
        assert!(check_arity(Family::Sprintf, 9).is_ok());
        assert!(check_arity(Family::Tuple, 0).is_ok());
        assert!(check_arity(Family::Sprintf, MAX_ARITY).is_ok());
        assert!(check_arity(Family::Sprintf, 0).is_err());
        assert!(check_arity(Family::Uncurry, 1).is_err());
        assert!(check_arity(Family::Uncurry, MAX_ARITY + 1).is_err());
    }
}
