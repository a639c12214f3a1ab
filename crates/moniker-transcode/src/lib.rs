// SPDX-License-Identifier: Apache-2.0
//! Reversible transcoding of arbitrary strings into legal identifier tokens.
//!
//! Scene hierarchies restrict node and property names to the identifier
//! grammar `[A-Za-z_][A-Za-z0-9_]*`. Authoring pipelines, however, hand us
//! whatever the source application called things: spaces, punctuation,
//! CJK text, emoji, sometimes bytes that are not even valid Unicode.
//!
//! This crate maps every input to a legal token, and for valid Unicode
//! input the mapping is lossless:
//!
//! - A string that is already a legal identifier passes through
//!   byte-for-byte, so the common case stays human-readable and trivially
//!   reversible.
//! - Anything else becomes an *escaped* token carrying the reserved
//!   `tn__` marker followed by the legal characters of the input and a
//!   compact [bootstring] tail that records exactly which characters were
//!   removed and where. [`decode`] reconstructs the original string.
//! - Bytes that are not valid UTF-8 take a deterministic lossy fallback:
//!   every illegal byte becomes `_` and no marker is attached, so the
//!   result is legal but not decodable.
//!
//! The codec is pure and stateless; collision handling between tokens is
//! a separate concern layered on top by `moniker-core`.
//!
//! [bootstring]: https://www.rfc-editor.org/rfc/rfc3492

mod bootstring;
mod decode;
mod encode;
mod ident;

pub use decode::{decode, DecodeError};
pub use encode::{encode, EncodeMode, Encoded, PREFIX};
pub use ident::{is_ident_char, is_valid_identifier};
