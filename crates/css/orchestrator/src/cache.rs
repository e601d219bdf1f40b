//! Shared store of rendered nodes.
//!
//! Entries accumulate until [`RenderCache::clear`]; there is no eviction.
//! Entries are addressed by an Fx digest of the render inputs and verified
//! against a second digest keyed per cache, so a crafted Fx collision reads as
//! a miss instead of another request's node.

use core::hash::{BuildHasher as _, Hash, Hasher as _};
use std::collections::BTreeMap;
use std::hash::RandomState;

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHasher};

use crate::RenderNode;

/// Opaque key identifying one render request.
pub type CacheKey = u64;

/// Digest any hashable render inputs into a [`CacheKey`].
pub fn cache_key<T: Hash + ?Sized>(inputs: &T) -> CacheKey {
    let mut hasher = FxHasher::default();
    inputs.hash(&mut hasher);
    hasher.finish()
}

#[derive(Debug)]
struct CachedNode {
    check: u64,
    node: RenderNode,
}

/// Render cache guarded by a single read-write lock.
///
/// Safe to share between threads; writers are serialized.
#[derive(Debug, Default)]
pub struct RenderCache {
    verifier: RandomState,
    entries: RwLock<FxHashMap<CacheKey, CachedNode>>,
}

impl RenderCache {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the node rendered from `inputs`, returning the one it replaced.
    pub fn put<T: Hash + ?Sized>(&self, inputs: &T, node: RenderNode) -> Option<RenderNode> {
        let entry = CachedNode {
            check: self.verifier.hash_one(inputs),
            node,
        };
        self.entries
            .write()
            .insert(cache_key(inputs), entry)
            .map(|replaced| replaced.node)
    }

    /// The node rendered from `inputs`, if one is stored for exactly these inputs.
    pub fn get<T: Hash + ?Sized>(&self, inputs: &T) -> Option<RenderNode> {
        let check = self.verifier.hash_one(inputs);
        self.entries
            .read()
            .get(&cache_key(inputs))
            .filter(|entry| entry.check == check)
            .map(|entry| entry.node.clone())
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Copy of the current contents, ordered by key.
    pub fn snapshot(&self) -> BTreeMap<CacheKey, RenderNode> {
        self.entries
            .read()
            .iter()
            .map(|(key, entry)| (*key, entry.node.clone()))
            .collect()
    }
}
