// SPDX-License-Identifier: Apache-2.0
//! Scope port: the engine's view of a node in the scene tree.

use std::fmt;

/// Stable, comparable identity for a scope, used as the cache key.
///
/// Typically a node's canonical path. The engine never dereferences the
/// key back into the tree; it only compares and hashes it, so entries
/// hold no references into live scene structure.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScopeKey(String);

impl ScopeKey {
    /// Creates a key from a canonical path or any other stable identity
    /// string.
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    /// The identity string this key wraps.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Port onto the scene tree: a scope against which child names must be
/// unique.
///
/// This is the engine's only outward call. Implementors list the
/// *literal* names of the scope's current children, as stored: no
/// filtering by node state, no transcoding. A scope that has no
/// children (or cannot enumerate them) returns an empty list; that is
/// not an error condition.
pub trait ChildScope {
    /// Stable identity of this scope.
    fn key(&self) -> ScopeKey;

    /// Literal names of the scope's current children.
    fn child_names(&self) -> Vec<String>;
}
