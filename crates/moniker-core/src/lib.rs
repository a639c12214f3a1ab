// SPDX-License-Identifier: Apache-2.0
//! Unique, legal node and property names for hierarchical scene trees.
//!
//! Scene storage requires that sibling nodes carry distinct names and
//! that every name (and every `:`-delimited property namespace segment)
//! matches the identifier grammar. This crate layers deterministic
//! collision resolution on top of the [`moniker_transcode`] codec:
//!
//! - [`node_name`] / [`node_names`]: legalize one name, or a batch of
//!   names made unique against each other and an optional reserved set.
//! - [`property_name`] / [`property_names`]: the namespaced variants;
//!   each `:` segment is transcoded independently and only the final
//!   segment participates in suffix generation.
//! - [`child_name`] / [`child_names`]: resolve against the existing
//!   children of a scope, via the [`ChildScope`] port.
//! - [`NameCache`]: per-scope state that remembers names already
//!   handed out, so repeated requests against a scope stay collision
//!   free before any child is actually created.
//!
//! All operations are synchronous, allocation-bounded, and
//! deterministic: the same requests in the same order against the same
//! reserved names always produce the same output. The engine computes
//! strings only; it never creates or destroys scene nodes. Its single
//! outward call is [`ChildScope::child_names`].

mod cache;
mod names;
mod scope;
pub mod settings;
mod uniquify;

pub use cache::NameCache;
pub use moniker_transcode::{decode, DecodeError, EncodeMode, Encoded};
pub use names::{
    child_name, child_names, node_name, node_name_with, node_names, node_names_with,
    property_name, property_name_with, property_names, property_names_with,
};
pub use scope::{ChildScope, ScopeKey};
