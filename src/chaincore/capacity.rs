//! The HashSet capacity.

use super::failure::{Failure, Result};
use super::hasher::Hash;
use super::root::num::NonZeroUsize;

//  The load factor at which the bucket array grows: 3/4.
const LOAD_NUMERATOR: u128 = 3;
const LOAD_DENOMINATOR: u128 = 4;

//  Capacity.
//
//  The number of buckets of a bucket array, never 0.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Capacity(NonZeroUsize);

impl Capacity {
    //  Creates an instance.
    //
    //  #   Errors
    //
    //  Returns `Failure::ZeroCapacity` if `number_buckets` is 0.
    pub fn new(number_buckets: usize) -> Result<Self> {
        NonZeroUsize::new(number_buckets).map(Self).ok_or(Failure::ZeroCapacity)
    }

    //  Returns the number of buckets.
    pub fn get(self) -> usize { self.0.get() }

    //  Returns the capacity with twice as many buckets.
    //
    //  #   Errors
    //
    //  Returns `Failure::BucketsOverflow` if the result does not fit in `usize`.
    pub fn doubled(self) -> Result<Self> {
        self.0.checked_mul(TWO).map(Self).ok_or(Failure::BucketsOverflow)
    }

    //  Returns the index of the bucket an element of hash `hash` belongs to.
    pub fn index_of(self, hash: Hash) -> BucketIndex {
        //  `usize` never exceeds 64 bits, hence the remainder fits in `usize`.
        BucketIndex((hash.0 % self.get() as u64) as usize)
    }

    //  Returns whether `size` elements reach the maximum load factor.
    pub fn is_overloaded(self, size: Size) -> bool {
        size.0 as u128 * LOAD_DENOMINATOR >= self.get() as u128 * LOAD_NUMERATOR
    }

    //  Returns the load factor for `size` elements.
    pub fn load_factor(self, size: Size) -> f64 {
        size.0 as f64 / self.get() as f64
    }
}

/// The index of a Bucket.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BucketIndex(pub usize);

/// The number of elements in all Buckets.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Size(pub usize);

//
//  Implementation Details
//

const TWO: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(two) => two,
    None => unreachable!(),
};
