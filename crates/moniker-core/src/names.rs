// SPDX-License-Identifier: Apache-2.0
//! Public naming entry points.
//!
//! Every function comes in two forms: a plain form that reads the
//! runtime transcoding toggle (see [`crate::settings`]) once per call,
//! and a `_with` form taking the [`EncodeMode`] explicitly for callers
//! that thread configuration themselves.

use moniker_transcode::{encode, EncodeMode};

use crate::scope::ChildScope;
use crate::uniquify::uniquify_with;

/// Namespace delimiter in property names. Never legal inside a token,
/// never part of a multi-byte UTF-8 sequence, so byte-wise splitting is
/// safe even for raw input.
const NAMESPACE_DELIMITER: u8 = b':';

/// Produces a legal node name from the requested spelling.
#[must_use]
pub fn node_name(name: impl AsRef<[u8]>) -> String {
    node_name_with(name, crate::settings::encode_mode())
}

/// [`node_name`] with an explicit encode mode.
#[must_use]
pub fn node_name_with(name: impl AsRef<[u8]>, mode: EncodeMode) -> String {
    encode(name.as_ref(), mode).into_string()
}

/// Produces legal, mutually unique node names for an ordered batch.
///
/// The result has the same length and order as `names`; no entry equals
/// another entry or any name in `reserved`.
#[must_use]
pub fn node_names<S, R>(names: &[S], reserved: &[R]) -> Vec<String>
where
    S: AsRef<[u8]>,
    R: AsRef<str>,
{
    node_names_with(names, reserved, crate::settings::encode_mode())
}

/// [`node_names`] with an explicit encode mode.
#[must_use]
pub fn node_names_with<S, R>(names: &[S], reserved: &[R], mode: EncodeMode) -> Vec<String>
where
    S: AsRef<[u8]>,
    R: AsRef<str>,
{
    let raw: Vec<&[u8]> = names.iter().map(AsRef::as_ref).collect();
    uniquify_with(
        &raw,
        reserved.iter().map(|r| r.as_ref().to_owned()),
        |bytes| encode(bytes, mode).into_string(),
    )
}

/// Produces a legal property name, transcoding each `:`-delimited
/// namespace segment independently.
///
/// Delimiters imply segments: `":"` is two empty segments and encodes
/// to `"tn__:tn__"`.
#[must_use]
pub fn property_name(name: impl AsRef<[u8]>) -> String {
    property_name_with(name, crate::settings::encode_mode())
}

/// [`property_name`] with an explicit encode mode.
#[must_use]
pub fn property_name_with(name: impl AsRef<[u8]>, mode: EncodeMode) -> String {
    encode_namespaced(name.as_ref(), mode)
}

/// Produces legal, mutually unique property names for an ordered batch.
///
/// Uniqueness is judged on the fully joined name; collisions are
/// resolved by suffixing the final segment only.
#[must_use]
pub fn property_names<S, R>(names: &[S], reserved: &[R]) -> Vec<String>
where
    S: AsRef<[u8]>,
    R: AsRef<str>,
{
    property_names_with(names, reserved, crate::settings::encode_mode())
}

/// [`property_names`] with an explicit encode mode.
#[must_use]
pub fn property_names_with<S, R>(names: &[S], reserved: &[R], mode: EncodeMode) -> Vec<String>
where
    S: AsRef<[u8]>,
    R: AsRef<str>,
{
    let raw: Vec<&[u8]> = names.iter().map(AsRef::as_ref).collect();
    uniquify_with(
        &raw,
        reserved.iter().map(|r| r.as_ref().to_owned()),
        |bytes| encode_namespaced(bytes, mode),
    )
}

/// Produces a legal name unique among the current children of `scope`.
///
/// Stateless: every call re-lists the scope's children. Use
/// [`crate::NameCache`] when issuing many names against one scope.
#[must_use]
pub fn child_name(scope: &dyn ChildScope, name: impl AsRef<[u8]>) -> String {
    child_names(scope, std::slice::from_ref(&name))
        .pop()
        .unwrap_or_default()
}

/// Batch form of [`child_name`]: unique against the scope's current
/// children and against each other.
#[must_use]
pub fn child_names<S>(scope: &dyn ChildScope, names: &[S]) -> Vec<String>
where
    S: AsRef<[u8]>,
{
    node_names(names, &scope.child_names())
}

/// Encodes each namespace segment of `raw` independently and rejoins.
pub fn encode_namespaced(raw: &[u8], mode: EncodeMode) -> String {
    let mut out = String::new();
    for (index, segment) in raw.split(|&b| b == NAMESPACE_DELIMITER).enumerate() {
        if index > 0 {
            out.push(char::from(NAMESPACE_DELIMITER));
        }
        out.push_str(encode(segment, mode).as_str());
    }
    out
}
