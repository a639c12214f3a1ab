// SPDX-License-Identifier: Apache-2.0
//! Cache behavior against a scope whose children change underneath it.

use std::cell::RefCell;

use moniker_core::{ChildScope, NameCache, ScopeKey};

/// In-memory scope; tests push to `children` to model node creation
/// happening outside the cache.
struct TreeScope {
    key: &'static str,
    children: RefCell<Vec<String>>,
}

impl TreeScope {
    fn new(key: &'static str) -> Self {
        Self {
            key,
            children: RefCell::new(Vec::new()),
        }
    }

    fn define(&self, name: &str) {
        self.children.borrow_mut().push(name.to_owned());
    }
}

impl ChildScope for TreeScope {
    fn key(&self) -> ScopeKey {
        ScopeKey::new(self.key)
    }

    fn child_names(&self) -> Vec<String> {
        self.children.borrow().clone()
    }
}

#[test]
fn cache_lifecycle() {
    let scope = TreeScope::new("/Root");
    let mut cache = NameCache::new();

    // No children yet: preferred names are granted as-is.
    assert_eq!(cache.child_names(&scope, &["foo", "bar"]), ["foo", "bar"]);

    // Earlier grants stay reserved even though no child was created.
    assert_eq!(
        cache.child_names(&scope, &["foo", "bar"]),
        ["foo_1", "bar_1"]
    );

    // Children created after seeding are invisible until the caller
    // updates or clears, so a granted name may collide with them.
    scope.define("foo");
    scope.define("foo_1");
    scope.define("foo_2");
    assert_eq!(
        cache.child_names(&scope, &["foo", "bar"]),
        ["foo_2", "bar_2"]
    );

    // update() merges the current children without dropping grants.
    scope.define("foo_3");
    scope.define("foo_4");
    cache.update(&scope);
    assert_eq!(
        cache.child_names(&scope, &["foo", "bar"]),
        ["foo_5", "bar_3"]
    );

    // clear() drops everything; the next request reseeds from the
    // children that actually exist.
    cache.clear(&scope);
    assert_eq!(cache.child_names(&scope, &["foo", "bar"]), ["foo_5", "bar"]);
}

#[test]
fn single_grants_share_the_reservation_set() {
    let scope = TreeScope::new("/Root");
    scope.define("cube");
    let mut cache = NameCache::new();

    assert_eq!(cache.child_name(&scope, "cube"), "cube_1");
    assert_eq!(cache.child_name(&scope, "cube"), "cube_2");
    assert_eq!(cache.child_name(&scope, ""), "tn__");
    assert_eq!(cache.child_name(&scope, ""), "_1");
}

#[test]
fn stateless_child_names_forget_between_calls() {
    let scope = TreeScope::new("/Root");
    scope.define("cube");
    scope.define("cube_1");
    scope.define("cube_3");

    assert_eq!(moniker_core::child_name(&scope, "cube"), "cube_2");
    // Without a cache the same answer comes back until a child exists.
    assert_eq!(moniker_core::child_name(&scope, "cube"), "cube_2");
    assert_eq!(
        moniker_core::child_names(&scope, &["cube", "cube", "sphere"]),
        ["cube_2", "cube_4", "sphere"]
    );
}
