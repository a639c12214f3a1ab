// SPDX-License-Identifier: Apache-2.0
//! Token encoding: the reversible bootstring path and the lossy fallback.

use crate::bootstring::push_int;
use crate::ident::{is_ident_char, is_valid_identifier};

/// Reserved marker carried by every reversibly escaped token.
///
/// No guard prevents a *caller* from requesting a literal name that
/// happens to begin with this marker; such a name is a valid identifier
/// and passes through unchanged. The resulting ambiguity (for example
/// `encode("")` colliding with a literal `"tn__"`) is resolved by the
/// uniquification layer, not by the codec.
pub const PREFIX: &str = "tn__";

/// Selects which encoding path [`encode`] takes for syntactically
/// illegal input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EncodeMode {
    /// Reversible bootstring escaping (the default).
    #[default]
    Bootstring,
    /// Lossy character substitution; every illegal byte becomes `_`.
    Substitute,
}

/// A legal token plus the provenance of its spelling.
///
/// The engine reasons internally about whether a token was escaped and
/// whether the escape is reversible; callers that only need the string
/// use [`Encoded::into_string`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoded {
    /// The input was already a legal identifier and passed through
    /// byte-for-byte.
    Literal(String),
    /// The input was escaped with the reversible bootstring scheme and
    /// carries the [`PREFIX`] marker; [`crate::decode`] recovers the
    /// original string exactly.
    Transcoded(String),
    /// The input went through the lossy fallback; the token is legal but
    /// the original spelling is unrecoverable.
    Substituted(String),
}

impl Encoded {
    /// The encoded token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(s) | Self::Transcoded(s) | Self::Substituted(s) => s,
        }
    }

    /// Consumes the result, returning the plain token.
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Literal(s) | Self::Transcoded(s) | Self::Substituted(s) => s,
        }
    }

    /// `true` when the original input can be recovered from the token
    /// (either it passed through unchanged, or it was reversibly escaped).
    #[must_use]
    pub fn is_reversible(&self) -> bool {
        !matches!(self, Self::Substituted(_))
    }
}

/// Encodes arbitrary bytes as a legal, non-empty identifier token.
///
/// Valid UTF-8 input takes the path selected by `mode`; input that is
/// not valid UTF-8 always takes the lossy fallback, deterministically.
/// An input that is already a legal identifier is returned unchanged in
/// every mode.
#[must_use]
pub fn encode(input: &[u8], mode: EncodeMode) -> Encoded {
    match std::str::from_utf8(input) {
        Ok(text) if is_valid_identifier(text) => Encoded::Literal(text.to_owned()),
        Ok(text) if mode == EncodeMode::Bootstring => Encoded::Transcoded(transcode(text)),
        _ => Encoded::Substituted(substitute(input)),
    }
}

/// Reversible escape of a string that cannot stand as an identifier.
///
/// Layout: `tn__` + legal characters of the input (in order) + `_`
/// delimiter (only when that run is non-empty) + one variable-length
/// delta per illegal character.
///
/// Deltas replay the decoder's insertions: illegal characters are
/// visited in `(code point, original position)` order, and each delta
/// packs the code-point gap from the previously encoded character
/// together with the insertion index among the characters already
/// placed. See `bootstring` for the digit scheme.
fn transcode(text: &str) -> String {
    let mut basic = String::new();
    let mut escaped: Vec<(u32, usize)> = Vec::new();
    let mut placed: Vec<usize> = Vec::new();
    for (pos, c) in text.chars().enumerate() {
        if is_ident_char(c) {
            basic.push(c);
            placed.push(pos);
        } else {
            escaped.push((u32::from(c), pos));
        }
    }
    escaped.sort_unstable();

    let mut out = String::with_capacity(PREFIX.len() + text.len());
    out.push_str(PREFIX);
    out.push_str(&basic);
    if !basic.is_empty() {
        out.push('_');
    }

    let mut prev = 0u64;
    for (cp, pos) in escaped {
        let slot = placed.partition_point(|&p| p < pos);
        let delta =
            (u64::from(cp) - prev) * (placed.len() as u64 + 1) + slot as u64;
        push_int(&mut out, delta);
        placed.insert(slot, pos);
        prev = u64::from(cp);
    }
    out
}

/// Lossy fallback: byte-wise substitution with no marker.
///
/// Every byte outside the identifier alphabet becomes `_`. A leading
/// ASCII digit is kept but pushed behind a `_` so the result starts
/// legally; this loses fewer characters than replacing the digit
/// outright. The empty input becomes a bare `_`.
fn substitute(input: &[u8]) -> String {
    let mut out = String::with_capacity(input.len() + 1);
    match input.first() {
        Some(&b) if b.is_ascii_digit() => {
            out.push('_');
            out.push(char::from(b));
        }
        Some(&b) if b.is_ascii_alphabetic() || b == b'_' => out.push(char::from(b)),
        _ => out.push('_'),
    }
    for &b in input.iter().skip(1) {
        if b.is_ascii_alphanumeric() || b == b'_' {
            out.push(char::from(b));
        } else {
            out.push('_');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boot(input: &str) -> String {
        encode(input.as_bytes(), EncodeMode::Bootstring).into_string()
    }

    #[test]
    fn legal_identifiers_pass_through_in_both_modes() {
        for name in ["mesh", "_", "_1", "cube_3", "tn__"] {
            for mode in [EncodeMode::Bootstring, EncodeMode::Substitute] {
                assert_eq!(
                    encode(name.as_bytes(), mode),
                    Encoded::Literal(name.to_owned())
                );
            }
        }
    }

    #[test]
    fn empty_input_is_the_minimal_escape() {
        assert_eq!(boot(""), "tn__");
        assert_eq!(
            encode(b"", EncodeMode::Substitute).into_string(),
            "_"
        );
    }

    #[test]
    fn leading_digit_keeps_the_whole_string_in_the_basic_run() {
        assert_eq!(boot("1"), "tn__1_");
        assert_eq!(boot("1_mesh"), "tn__1_mesh_");
        assert_eq!(boot("123cube"), "tn__123cube_");
    }

    #[test]
    fn invalid_utf8_always_substitutes() {
        // "mesh_Ä" and "1_Ä" in ISO-8859-1.
        let encoded = encode(b"mesh_\xc4", EncodeMode::Bootstring);
        assert_eq!(encoded, Encoded::Substituted("mesh__".to_owned()));
        assert!(!encoded.is_reversible());
        assert_eq!(
            encode(b"1_\xc4", EncodeMode::Bootstring).into_string(),
            "_1__"
        );
    }

    #[test]
    fn substitute_mode_forces_the_lossy_path_for_unicode() {
        assert_eq!(
            encode("a b".as_bytes(), EncodeMode::Substitute),
            Encoded::Substituted("a_b".to_owned())
        );
        // Each byte of a multi-byte sequence substitutes independently.
        assert_eq!(
            encode("Bäcker".as_bytes(), EncodeMode::Substitute).into_string(),
            "B__cker"
        );
    }
}
