// SPDX-License-Identifier: Apache-2.0
//! Identifier grammar predicates.

/// Returns `true` if `c` may appear anywhere in a legal identifier token.
#[must_use]
pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns `true` if `c` may appear as the first character of a legal
/// identifier token (a digit may not).
#[must_use]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns `true` if `s` matches `[A-Za-z_][A-Za-z0-9_]*`.
///
/// The empty string is not a valid identifier.
#[must_use]
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => is_ident_start(first) && chars.all(is_ident_char),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        assert!(is_valid_identifier("mesh"));
        assert!(is_valid_identifier("_"));
        assert!(is_valid_identifier("_1"));
        assert!(is_valid_identifier("cube_3"));
        assert!(is_valid_identifier("tn__"));
    }

    #[test]
    fn rejects_leading_digit() {
        assert!(!is_valid_identifier("1"));
        assert!(!is_valid_identifier("1_mesh"));
    }

    #[test]
    fn rejects_empty_and_non_ascii() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("a b"));
        assert!(!is_valid_identifier("Bäcker"));
        assert!(!is_valid_identifier("foo:bar"));
    }
}
