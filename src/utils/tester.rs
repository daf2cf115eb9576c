//! Internal testing utilities

use crate::root::{hash, iter};
use crate::root::sync::atomic::{AtomicUsize, Ordering};

//  SpyCount
//
//  A counter of the number of instances of elements.
pub struct SpyCount(AtomicUsize);

impl SpyCount {
    pub fn zero() -> Self { SpyCount(AtomicUsize::new(0)) }

    pub fn get(&self) -> usize { self.0.load(Ordering::Relaxed) }

    fn decrement(&self) { self.0.fetch_sub(1, Ordering::Relaxed); }

    fn increment(&self) { self.0.fetch_add(1, Ordering::Relaxed); }
}

//  Spy Element
//
//  An element tracking the number of instances, helpful to ensure proper drop.
//
//  Equality and hash only depend on `id`.
pub struct SpyElement<'a> {
    id: u32,
    count: &'a SpyCount,
}

impl<'a> SpyElement<'a> {
    pub fn new(id: u32, count: &'a SpyCount) -> Self {
        count.increment();
        SpyElement { id, count }
    }
}

impl<'a> Drop for SpyElement<'a> {
    fn drop(&mut self) {
        self.count.decrement();
    }
}

impl<'a> PartialEq for SpyElement<'a> {
    fn eq(&self, other: &Self) -> bool { self.id == other.id }
}

impl<'a> Eq for SpyElement<'a> {}

impl<'a> hash::Hash for SpyElement<'a> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) { hash::Hash::hash(&self.id, state); }
}

//  Collider
//
//  A value whose hash is constant, so that all instances share a bucket.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct Collider<T>(pub T);

impl<T> hash::Hash for Collider<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) { state.write_u8(0); }
}

//  Returns `count` colliders, from 0 onwards.
pub fn colliders(count: u32) -> impl iter::Iterator<Item = Collider<u32>> {
    (0..count).map(Collider)
}
