//! The bucket array underlying the HashSet.

use super::root::{borrow, fmt, hash, mem};
use super::root::vec::{self, Vec};

use super::capacity::{BucketIndex, Capacity, Size};
use super::chain::Chain;
use super::failure::{Failure, Result};
use super::hasher;

use self::borrow::Borrow;

//  The storage: one chain per bucket.
//
//  An element always lives in the chain at the index of its hash for the
//  current capacity.
pub struct BucketArray<T> {
    capacity: Capacity,
    chains: Vec<Chain<T>>,
}

impl<T> BucketArray<T> {
    //  Creates an array of `capacity` empty buckets.
    //
    //  #   Errors
    //
    //  Returns `Failure::OutOfMemory` if the array cannot be allocated.
    pub fn try_new(capacity: Capacity) -> Result<Self> {
        let mut chains = Vec::new();

        chains.try_reserve_exact(capacity.get()).map_err(|_| Failure::OutOfMemory)?;
        chains.resize_with(capacity.get(), Chain::new);

        Ok(Self { capacity, chains })
    }

    //  Returns the number of buckets.
    pub fn capacity(&self) -> Capacity { self.capacity }

    //  Returns the chains, in bucket order.
    pub fn chains(&self) -> &[Chain<T>] { &self.chains }

    //  Returns the index of the bucket `key` belongs to.
    pub fn index_of<Q>(&self, key: &Q) -> BucketIndex
    where
        Q: ?Sized + hash::Hash,
    {
        self.capacity.index_of(hasher::hash(key))
    }

    //  Gets the element equal to `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        self.chain(self.index_of(key)).find(key)
    }

    //  Appends `value` to the chain of its bucket.
    //
    //  Assumes that no element equal to `value` is present.
    pub fn push(&mut self, value: T)
    where
        T: hash::Hash,
    {
        let index = self.index_of(&value);
        self.chain_mut(index).push_back(value);
    }

    //  Removes the element equal to `key`, returning it if any.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        let index = self.index_of(key);
        self.chain_mut(index).unlink(key)
    }

    //  Moves all the elements into `target`, which then replaces `self`.
    //
    //  Elements are visited in bucket order, then chain order, and appended to
    //  the tail of their chain in `target`: elements sharing a chain in `target`
    //  retain their relative order.
    //
    //  Each element is moved into a fresh node; the former nodes are released
    //  as they are emptied.
    pub fn rehash(&mut self, mut target: Self)
    where
        T: hash::Hash,
    {
        for chain in &mut self.chains {
            while let Some(value) = chain.pop_front() {
                target.push(value);
            }
        }

        let former = mem::replace(self, target);
        debug_assert!(former.chains.iter().all(Chain::is_empty));
    }

    //  Drops all the elements, retaining the buckets.
    pub fn clear(&mut self) {
        for chain in &mut self.chains {
            chain.clear();
        }
    }

    //  Returns the chains, in bucket order, by value.
    pub fn into_chains(self) -> vec::IntoIter<Chain<T>> { self.chains.into_iter() }

    //  Formats the instance, given its `size`.
    pub fn debug(&self, name: &str, size: Size, f: &mut fmt::Formatter)
        -> fmt::Result
    where
        T: fmt::Debug,
    {
        f.debug_struct(name)
            .field("capacity", &self.capacity.get())
            .field("length", &size.0)
            .field("buckets", &self.chains)
            .finish()
    }

    fn chain(&self, index: BucketIndex) -> &Chain<T> {
        debug_assert!(index.0 < self.chains.len());

        &self.chains[index.0]
    }

    fn chain_mut(&mut self, index: BucketIndex) -> &mut Chain<T> {
        debug_assert!(index.0 < self.chains.len());

        &mut self.chains[index.0]
    }
}

impl<T: Clone> Clone for BucketArray<T> {
    fn clone(&self) -> Self {
        Self { capacity: self.capacity, chains: self.chains.clone() }
    }
}

#[cfg(test)]
mod tests {

use super::*;

use crate::utils::tester::{colliders, Collider, SpyCount, SpyElement};

fn array(buckets: usize) -> BucketArray<u32> {
    BucketArray::try_new(Capacity::new(buckets).unwrap()).unwrap()
}

fn filled(buckets: usize, values: impl IntoIterator<Item = u32>) -> BucketArray<u32> {
    let mut result = array(buckets);
    for value in values {
        result.push(value);
    }
    result
}

//  Checks that every element lives in the bucket of its hash.
fn assert_indexed<T: hash::Hash>(array: &BucketArray<T>) {
    for (index, chain) in array.chains().iter().enumerate() {
        for value in chain.iter() {
            assert_eq!(BucketIndex(index), array.index_of(value));
        }
    }
}

fn count<T>(array: &BucketArray<T>) -> usize {
    array.chains().iter().map(|chain| chain.iter().count()).sum()
}

#[test]
fn try_new() {
    let array = array(4);

    assert_eq!(4, array.capacity().get());
    assert_eq!(4, array.chains().len());
    assert!(array.chains().iter().all(Chain::is_empty));
}

#[test]
fn try_new_out_of_memory() {
    let capacity = Capacity::new(usize::MAX / 2).unwrap();

    assert_eq!(
        Some(Failure::OutOfMemory),
        BucketArray::<u64>::try_new(capacity).err()
    );
}

#[test]
fn push_get() {
    let array = filled(4, 0..10);

    assert_eq!(10, count(&array));
    assert_indexed(&array);

    for value in 0..10 {
        assert_eq!(Some(&value), array.get(&value));
    }

    assert_eq!(None, array.get(&10));
}

#[test]
fn push_single_bucket() {
    let array = filled(1, 0..5);

    let chain: Vec<_> = array.chains()[0].iter().copied().collect();
    assert_eq!(vec![0, 1, 2, 3, 4], chain);
}

#[test]
fn remove() {
    let mut array = filled(4, 0..10);

    assert_eq!(Some(3), array.remove(&3));
    assert_eq!(None, array.remove(&3));
    assert_eq!(None, array.get(&3));
    assert_eq!(9, count(&array));
    assert_indexed(&array);
}

#[test]
fn rehash_redistributes() {
    let mut array = filled(4, 0..100);

    array.rehash(BucketArray::try_new(Capacity::new(8).unwrap()).unwrap());

    assert_eq!(8, array.capacity().get());
    assert_eq!(100, count(&array));
    assert_indexed(&array);

    for value in 0..100 {
        assert_eq!(Some(&value), array.get(&value));
    }
}

#[test]
fn rehash_preserves_chain_order() {
    let mut array = BucketArray::try_new(Capacity::new(4).unwrap()).unwrap();
    for collider in colliders(10) {
        array.push(collider);
    }

    array.rehash(BucketArray::try_new(Capacity::new(8).unwrap()).unwrap());

    let index = array.index_of(&Collider(0));
    let chain: Vec<_> = array.chains()[index.0].iter().copied().collect();

    assert_eq!(colliders(10).collect::<Vec<_>>(), chain);
}

#[test]
fn rehash_no_leak() {
    let spies = SpyCount::zero();

    let mut array = BucketArray::try_new(Capacity::new(2).unwrap()).unwrap();
    for id in 0..20 {
        array.push(SpyElement::new(id, &spies));
    }

    array.rehash(BucketArray::try_new(Capacity::new(4).unwrap()).unwrap());
    assert_eq!(20, spies.get());
    assert_eq!(20, count(&array));

    array.clear();
    assert_eq!(0, spies.get());
    assert_eq!(4, array.capacity().get());
}

#[test]
fn into_chains() {
    let array = filled(4, 0..10);

    let mut values: Vec<_> = array.into_chains()
        .flat_map(|mut chain| std::iter::from_fn(move || chain.pop_front()))
        .collect();
    values.sort();

    assert_eq!((0..10).collect::<Vec<_>>(), values);
}

#[test]
fn debug() {
    let array = filled(2, [7]);

    let sink = format!("{:?}", Debugged(&array));

    assert!(sink.starts_with("BucketArray { capacity: 2, length: 1, buckets: ["));
    assert!(sink.ends_with("] }"));
    assert!(sink.contains("[7]"));
}

struct Debugged<'a>(&'a BucketArray<u32>);

impl<'a> fmt::Debug for Debugged<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.debug("BucketArray", Size(1), f)
    }
}

}
