// SPDX-License-Identifier: Apache-2.0
//! Base-62 variable-length integers for the escaped-token tail.
//!
//! Deltas are emitted least-significant digit first. A digit below
//! [`THRESHOLD`] terminates the integer; digits at or above it continue
//! into the next position with weight [`THRESHOLD`]. The alphabet is
//! chosen so that every digit is itself a legal identifier character and
//! never the `_` delimiter.

/// Digit alphabet, in digit-value order.
pub const DIGITS: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Number of digits in the alphabet.
pub const BASE: u64 = 62;

/// Continuation threshold: digit values below this terminate an integer.
pub const THRESHOLD: u64 = 31;

/// Appends the variable-length encoding of `q` to `out`.
#[allow(clippy::cast_possible_truncation)] // digit values are < 62
pub fn push_int(out: &mut String, mut q: u64) {
    while q >= THRESHOLD {
        let d = THRESHOLD + (q - THRESHOLD) % (BASE - THRESHOLD);
        out.push(char::from(DIGITS[d as usize]));
        q = (q - THRESHOLD) / (BASE - THRESHOLD);
    }
    out.push(char::from(DIGITS[q as usize]));
}

/// Returns the digit value of `c`, or `None` if `c` is not in the alphabet.
pub fn digit_value(c: char) -> Option<u64> {
    match c {
        '0'..='9' => Some(u64::from(c) - u64::from('0')),
        'A'..='Z' => Some(u64::from(c) - u64::from('A') + 10),
        'a'..='z' => Some(u64::from(c) - u64::from('a') + 36),
        _ => None,
    }
}
