//! The hash of elements.
//!
//! The hashing algorithm is fixed: `FxHasher` is deterministic, so that the
//! layout of a set only depends on its elements and its insertion history.

use rustc_hash::FxHasher;

use super::root::hash::{self, Hasher};

//  The hash of an element.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Hash(pub u64);

//  Computes the hash of `key`.
pub fn hash<Q>(key: &Q) -> Hash
where
    Q: ?Sized + hash::Hash,
{
    let mut hasher = FxHasher::default();
    key.hash(&mut hasher);
    Hash(hasher.finish())
}
