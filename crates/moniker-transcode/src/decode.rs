// SPDX-License-Identifier: Apache-2.0
//! Recovery of the original string from a reversibly escaped token.

use std::str::Chars;

use thiserror::Error;

use crate::bootstring::{digit_value, THRESHOLD};
use crate::encode::PREFIX;

/// Error returned by [`decode`].
///
/// Decoding is only defined for tokens produced by the reversible
/// encode path. Callers must treat every variant as "origin unknown",
/// a recoverable local condition, never as a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The token does not carry the `tn__` marker, so it was never
    /// reversibly escaped (it may be a literal or a lossy substitution).
    #[error("token does not carry the transcoding marker")]
    NotTranscoded,
    /// A character in the escape tail is outside the digit alphabet.
    #[error("invalid digit {0:?} in escape tail")]
    InvalidDigit(char),
    /// The escape tail ends in the middle of a variable-length integer.
    #[error("truncated escape tail")]
    Truncated,
    /// A delta does not fit the decoder's arithmetic; the token was not
    /// produced by the encoder.
    #[error("escape tail delta overflows")]
    Overflow,
    /// A decoded code point is not a Unicode scalar value.
    #[error("decoded code point {0:#x} is not a Unicode scalar value")]
    InvalidScalar(u32),
}

/// Decodes a token produced by the reversible encode path, returning
/// the exact original string.
///
/// For any `s` accepted by that path, `decode(&encode(s)) == s`,
/// including the empty string (`"tn__"` decodes to `""`).
pub fn decode(token: &str) -> Result<String, DecodeError> {
    let rest = token
        .strip_prefix(PREFIX)
        .ok_or(DecodeError::NotTranscoded)?;

    // The delimiter between the basic run and the escape tail is the
    // last `_`; tail digits never include `_`. No `_` at all means the
    // basic run is empty and the whole remainder is the tail.
    let (basic, tail) = match rest.rfind('_') {
        Some(at) => (&rest[..at], &rest[at + 1..]),
        None => ("", rest),
    };

    let mut out: Vec<char> = basic.chars().collect();
    let mut digits = tail.chars();
    let mut code_point = 0u64;
    while let Some(first) = digits.next() {
        let delta = read_int(first, &mut digits)?;
        let slots = out.len() as u64 + 1;
        code_point = code_point
            .checked_add(delta / slots)
            .ok_or(DecodeError::Overflow)?;
        let cp = u32::try_from(code_point).map_err(|_| DecodeError::Overflow)?;
        let c = char::from_u32(cp).ok_or(DecodeError::InvalidScalar(cp))?;
        let slot = usize::try_from(delta % slots).map_err(|_| DecodeError::Overflow)?;
        out.insert(slot, c);
    }
    Ok(out.into_iter().collect())
}

/// Reads one variable-length integer, least-significant digit first.
fn read_int(first: char, rest: &mut Chars<'_>) -> Result<u64, DecodeError> {
    let mut digit = digit_value(first).ok_or(DecodeError::InvalidDigit(first))?;
    let mut value = 0u64;
    let mut weight = 1u64;
    loop {
        value = value
            .checked_add(digit.checked_mul(weight).ok_or(DecodeError::Overflow)?)
            .ok_or(DecodeError::Overflow)?;
        if digit < THRESHOLD {
            return Ok(value);
        }
        weight = weight.checked_mul(THRESHOLD).ok_or(DecodeError::Overflow)?;
        let c = rest.next().ok_or(DecodeError::Truncated)?;
        digit = digit_value(c).ok_or(DecodeError::InvalidDigit(c))?;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn minimal_escapes() {
        assert_eq!(decode("tn__").unwrap(), "");
        assert_eq!(decode("tn__1_").unwrap(), "1");
        assert_eq!(decode("tn__1_mesh_").unwrap(), "1_mesh");
    }

    #[test]
    fn unmarked_tokens_are_not_decodable() {
        assert_eq!(decode("mesh"), Err(DecodeError::NotTranscoded));
        assert_eq!(decode("_1"), Err(DecodeError::NotTranscoded));
        assert_eq!(decode("mesh__"), Err(DecodeError::NotTranscoded));
        // The marker must be a prefix, not merely present.
        assert_eq!(decode("x_tn__y"), Err(DecodeError::NotTranscoded));
    }

    #[test]
    fn malformed_tails_are_rejected() {
        // 'o' (value 50) is a continuation digit with nothing after it.
        assert_eq!(decode("tn__foo"), Err(DecodeError::Truncated));
        // A bare continuation digit in the tail position.
        assert_eq!(decode("tn__z"), Err(DecodeError::Truncated));
    }

    #[test]
    fn scalar_gaps_are_rejected() {
        // Delta large enough to land inside the surrogate range:
        // cp = 0xD800 = 55296 with one slot.
        let mut tail = String::from("tn__");
        crate::bootstring::push_int(&mut tail, 55_296);
        assert_eq!(decode(&tail), Err(DecodeError::InvalidScalar(0xD800)));
    }
}
