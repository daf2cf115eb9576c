//! Iterators over the elements of a BucketArray.

use super::root::iter;
use super::root::vec;

use super::buckets::BucketArray;
use super::capacity::{BucketIndex, Size};
use super::chain::{Chain, Node};

/// ElementIterator
///
/// A cursor over the elements of a BucketArray: the current bucket, and the
/// current node within its chain.
///
/// Elements are produced in bucket order, then chain order, each exactly once.
pub struct ElementIterator<'a, T> {
    chains: &'a [Chain<T>],
    //  The next bucket to visit once the current chain is exhausted.
    index: BucketIndex,
    current: Option<&'a Node<T>>,
    //  The number of elements not yet produced.
    remaining: Size,
}

impl<'a, T> ElementIterator<'a, T> {
    //  Creates an instance.
    //
    //  `size` is the number of elements of `buckets`.
    pub fn new(buckets: &'a BucketArray<T>, size: Size) -> Self {
        Self {
            chains: buckets.chains(),
            index: BucketIndex(0),
            current: None,
            remaining: size,
        }
    }
}

impl<'a, T> Clone for ElementIterator<'a, T> {
    fn clone(&self) -> Self {
        Self {
            chains: self.chains,
            index: self.index,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> iter::Iterator for ElementIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining.0 == 0 {
            return None;
        }

        loop {
            if let Some(node) = self.current {
                self.current = node.next.as_deref();
                self.remaining.0 -= 1;
                return Some(&node.value);
            }

            let chain = self.chains.get(self.index.0)?;
            self.index.0 += 1;
            self.current = chain.head();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining.0, Some(self.remaining.0))
    }
}

impl<'a, T> iter::ExactSizeIterator for ElementIterator<'a, T> {}

impl<'a, T> iter::FusedIterator for ElementIterator<'a, T> {}

/// ElementDrain
///
/// An owning cursor over the elements of a BucketArray, releasing each node as
/// its element is produced.
pub struct ElementDrain<T> {
    chains: vec::IntoIter<Chain<T>>,
    current: Chain<T>,
    remaining: Size,
}

impl<T> ElementDrain<T> {
    //  Creates an instance.
    //
    //  `size` is the number of elements of `buckets`.
    pub fn new(buckets: BucketArray<T>, size: Size) -> Self {
        Self { chains: buckets.into_chains(), current: Chain::new(), remaining: size }
    }
}

impl<T> iter::Iterator for ElementDrain<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(value) = self.current.pop_front() {
                self.remaining.0 -= 1;
                return Some(value);
            }

            self.current = self.chains.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining.0, Some(self.remaining.0))
    }
}

impl<T> iter::ExactSizeIterator for ElementDrain<T> {}

impl<T> iter::FusedIterator for ElementDrain<T> {}
