// SPDX-License-Identifier: Apache-2.0
//! Ordered batch collision resolution.
//!
//! Resolution happens on the *raw* requested spelling: a colliding name
//! gets `_1`, `_2`, … appended to its original bytes and is then
//! re-encoded, so a multibyte name picks up its suffix before escaping
//! (`"カーテンウォール"` twice yields `tn__sxB76l2Y5o0X16` and then the
//! escape of `"カーテンウォール_1"`). Membership checks are hash-based;
//! iteration order of the sets is never observed.

use rustc_hash::{FxHashMap, FxHashSet};

/// Resolves `requested` (in order) against `reserved`, returning one
/// granted name per request.
///
/// `encode_name` legalizes a raw spelling; it must be deterministic.
/// A granted name is never equal to a reserved name or to an earlier
/// grant in the same batch. Where possible the request is granted
/// verbatim; otherwise the smallest free `_N` suffix wins, with one
/// exception: a suffix spelling that a *later* request in the batch
/// asks for literally is skipped, so literal requests are honored even
/// when a collision would otherwise claim their spelling first.
pub fn uniquify_with<F>(
    requested: &[&[u8]],
    reserved: impl IntoIterator<Item = String>,
    mut encode_name: F,
) -> Vec<String>
where
    F: FnMut(&[u8]) -> String,
{
    let mut used: FxHashSet<String> = reserved.into_iter().collect();

    // Multiset of raw spellings still waiting their turn in this batch.
    let mut pending: FxHashMap<&[u8], usize> = FxHashMap::default();
    for &raw in requested {
        *pending.entry(raw).or_insert(0) += 1;
    }

    let mut granted = Vec::with_capacity(requested.len());
    for &raw in requested {
        if let Some(count) = pending.get_mut(raw) {
            *count -= 1;
            if *count == 0 {
                pending.remove(raw);
            }
        }
        let token = encode_name(raw);
        let name = if used.contains(&token) {
            next_free_suffix(raw, &used, &pending, &mut encode_name)
        } else {
            token
        };
        used.insert(name.clone());
        granted.push(name);
    }
    granted
}

/// Smallest `_N` suffix of `raw` whose encoding is neither used nor
/// spoken for by a later literal request.
fn next_free_suffix<F>(
    raw: &[u8],
    used: &FxHashSet<String>,
    pending: &FxHashMap<&[u8], usize>,
    encode_name: &mut F,
) -> String
where
    F: FnMut(&[u8]) -> String,
{
    let mut candidate = Vec::with_capacity(raw.len() + 4);
    let mut n: u64 = 1;
    // `used` is finite, so some suffix is always free.
    loop {
        candidate.clear();
        candidate.extend_from_slice(raw);
        candidate.push(b'_');
        candidate.extend_from_slice(n.to_string().as_bytes());
        if !pending.contains_key(candidate.as_slice()) {
            let token = encode_name(&candidate);
            if !used.contains(&token) {
                return token;
            }
        }
        n += 1;
    }
}
