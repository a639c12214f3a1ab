// SPDX-License-Identifier: Apache-2.0
//! Per-scope reservation state.

use moniker_transcode::{encode, EncodeMode};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::scope::{ChildScope, ScopeKey};
use crate::uniquify::uniquify_with;

/// Remembers, per scope, every name this cache has granted plus the
/// child names observed when the scope was first consulted.
///
/// The stateless [`crate::child_names`] re-lists a scope's children on
/// every call and forgets its own answers, so two calls with the same
/// request return the same name until a child is actually created. The
/// cache closes that window: a granted name stays reserved for the life
/// of the entry whether or not the caller ever creates the node.
///
/// The cache deliberately does not watch the tree. Children created
/// outside the cache after the initial listing are invisible until
/// [`NameCache::update`] is called for that scope.
#[derive(Debug, Default)]
pub struct NameCache {
    entries: FxHashMap<ScopeKey, ScopeEntry>,
}

#[derive(Debug, Default)]
struct ScopeEntry {
    used: FxHashSet<String>,
    seeded: bool,
}

impl NameCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants one name unique within `scope`, reserving it in the cache.
    pub fn child_name(&mut self, scope: &dyn ChildScope, name: impl AsRef<[u8]>) -> String {
        self.child_names(scope, std::slice::from_ref(&name))
            .pop()
            .unwrap_or_default()
    }

    /// Batch form of [`NameCache::child_name`]; grants are unique
    /// against the scope's reservation set and against each other, and
    /// all of them are reserved.
    pub fn child_names<S>(&mut self, scope: &dyn ChildScope, names: &[S]) -> Vec<String>
    where
        S: AsRef<[u8]>,
    {
        self.child_names_with(scope, names, crate::settings::encode_mode())
    }

    /// [`NameCache::child_names`] with an explicit encode mode.
    pub fn child_names_with<S>(
        &mut self,
        scope: &dyn ChildScope,
        names: &[S],
        mode: EncodeMode,
    ) -> Vec<String>
    where
        S: AsRef<[u8]>,
    {
        let entry = self.seeded_entry(scope);
        let raw: Vec<&[u8]> = names.iter().map(AsRef::as_ref).collect();
        let granted = uniquify_with(&raw, entry.used.iter().cloned(), |bytes| {
            encode(bytes, mode).into_string()
        });
        entry.used.extend(granted.iter().cloned());
        granted
    }

    /// Re-lists the scope's children and merges them into its
    /// reservation set, picking up nodes created outside this cache.
    ///
    /// Existing reservations are kept; nothing is ever released. A
    /// scope never consulted before gets an entry but stays unseeded,
    /// so the first grant against it still performs its own listing.
    pub fn update(&mut self, scope: &dyn ChildScope) {
        let entry = self.entries.entry(scope.key()).or_default();
        entry.used.extend(scope.child_names());
    }

    /// Drops all state for `scope`. The next grant against it starts
    /// from a fresh child listing.
    pub fn clear(&mut self, scope: &dyn ChildScope) {
        self.entries.remove(&scope.key());
    }

    fn seeded_entry(&mut self, scope: &dyn ChildScope) -> &mut ScopeEntry {
        let key = scope.key();
        let entry = self.entries.entry(key).or_default();
        if !entry.seeded {
            let children = scope.child_names();
            tracing::debug!(
                scope = %scope.key(),
                children = children.len(),
                "seeding name cache scope"
            );
            entry.used.extend(children);
            entry.seeded = true;
        }
        entry
    }
}
