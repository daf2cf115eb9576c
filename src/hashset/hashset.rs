//! The HashSet

use super::root::{borrow, fmt, hash, hint, iter};

use super::chaincore::buckets::BucketArray;
use super::chaincore::capacity::{Capacity, Size};
use super::chaincore::iterator::{ElementDrain, ElementIterator};
use super::failure::{Failure, Result};
use super::iterator::{IntoIter, Iter};

/// The number of buckets of a `HashSet` created by `new`.
pub const DEFAULT_CAPACITY: usize = 4;

//
//  Public Interface
//

/// `HashSet`
///
/// An unordered set of distinct elements, backed by a separate-chaining hash
/// table.
///
/// Elements are compared with `Eq` and located with `Hash`; the two must agree,
/// equal elements hashing identically. Modifying an element in a way that
/// changes its hash or equality while it is in the set is a logic error: the
/// behavior is unspecified, though memory-safe.
///
/// #   Example of Send.
///
/// A `HashSet<T>` can be sent across threads whenever `T` can.
///
/// ```
/// # use chained::hashset::HashSet;
/// fn ensure_send<T: Send>(_: T) {}
///
/// let mut set: HashSet<_> = HashSet::new();
/// set.insert("Hello, World");
///
/// ensure_send(set);
/// ```
///
/// #   Example of not Send.
///
/// A non-Send T prevents the HashSet from being Send.
///
/// ```compile_fail
/// # use std::rc::Rc;
/// # use chained::hashset::HashSet;
/// fn ensure_send<T: Send>(_: T) {}
///
/// let mut set: HashSet<_> = HashSet::new();
/// set.insert(Rc::new(3));
///
/// ensure_send(set);
/// ```
pub struct HashSet<T> {
    //  The number of elements, across all buckets.
    size: Size,
    buckets: BucketArray<T>,
}

impl<T> HashSet<T> {
    /// Creates a new instance of the `HashSet` with `DEFAULT_CAPACITY` buckets.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let set: HashSet<i32> = HashSet::new();
    ///
    /// assert_eq!(0, set.len());
    /// assert_eq!(4, set.capacity());
    /// ```
    pub fn new() -> Self { Self::with_capacity(DEFAULT_CAPACITY) }

    /// Creates a new instance of the `HashSet` with `capacity` buckets.
    ///
    /// Calling this method is equivalent to calling `try_with_capacity` and
    /// panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `capacity` is 0, or if the buckets cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let set: HashSet<i32> = HashSet::with_capacity(16);
    ///
    /// assert_eq!(0, set.len());
    /// assert_eq!(16, set.capacity());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(result) => result,
            Err(error) => {
                panic_from_failure(error);
                //  Safety:
                //  -   As the name of the above function implies...
                unsafe { hint::unreachable_unchecked() }
            },
        }
    }

    /// Creates a new instance of the `HashSet` with `capacity` buckets.
    ///
    /// #   Errors
    ///
    /// Returns an error if:
    ///
    /// -   `capacity` is 0.
    /// -   Or the allocator fails to allocate the buckets.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::failure::Failure;
    /// #   use chained::hashset::HashSet;
    /// let set = HashSet::<i32>::try_with_capacity(2).unwrap();
    /// assert_eq!(2, set.capacity());
    ///
    /// assert_eq!(Some(Failure::ZeroCapacity), HashSet::<i32>::try_with_capacity(0).err());
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        let capacity = Capacity::new(capacity)?;
        let buckets = BucketArray::try_new(capacity)?;

        log::trace!("created HashSet with {} buckets", capacity.get());

        Ok(Self { size: Size(0), buckets })
    }

    /// Returns whether the instance contains any element, or not.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(1);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.size.0 == 0 }

    /// Returns the number of elements contained in the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// assert_eq!(0, set.len());
    ///
    /// set.insert(1);
    /// assert_eq!(1, set.len());
    /// ```
    pub fn len(&self) -> usize { self.size.0 }

    /// Returns the current capacity of the instance, that is its number of
    /// buckets.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// assert_eq!(4, set.capacity());
    ///
    /// set.extend([1, 2, 3]);
    /// assert_eq!(8, set.capacity());
    /// ```
    pub fn capacity(&self) -> usize { self.buckets.capacity().get() }

    /// Returns the current load factor of the instance: the number of elements
    /// per bucket.
    ///
    /// It is always strictly less than 0.75.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// set.extend([1, 2]);
    ///
    /// assert_eq!(0.5, set.load_factor());
    /// ```
    pub fn load_factor(&self) -> f64 { self.buckets.capacity().load_factor(self.size) }

    /// Returns an iterator over the elements, in an unspecified order.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let set: HashSet<_> = [1, 2, 3].into_iter().collect();
    ///
    /// let mut elements: Vec<_> = set.iter().copied().collect();
    /// elements.sort();
    ///
    /// assert_eq!(vec![1, 2, 3], elements);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::create(ElementIterator::new(&self.buckets, self.size))
    }

    /// Returns `true` if the set contains the value.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// set.insert(1);
    ///
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&0));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        self.get(value).is_some()
    }

    /// Returns a reference to the value, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<String> = HashSet::new();
    /// set.insert("apple".to_string());
    ///
    /// assert_eq!(Some("apple"), set.get("apple").map(String::as_str));
    /// assert_eq!(None, set.get("cat"));
    /// ```
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        self.buckets.get(value)
    }

    /// Inserts a value into the set.
    ///
    /// Returns `true` if the value was inserted, and `false` if an equal value
    /// was already present, in which case `value` is dropped and the set is
    /// left unmodified.
    ///
    /// If the insertion brings the load factor to 0.75, the number of buckets
    /// is doubled and all elements are redistributed before returning.
    ///
    /// #   Errors
    ///
    /// Returns an error if the number of buckets needs doubling, and:
    ///
    /// -   The doubled number of buckets overflows `usize`.
    /// -   Or the allocator fails to allocate the new buckets.
    ///
    /// In case of error, the set is left unmodified, and `value` is dropped.
    ///
    /// #   Panics
    ///
    /// If the `Hash` implementation of `T` panics while the elements are
    /// redistributed, the content of the set is unspecified, though
    /// memory-safe.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    ///
    /// assert_eq!(Ok(true), set.try_insert(3));
    /// assert_eq!(Ok(false), set.try_insert(3));
    ///
    /// assert_eq!(Some(&3), set.get(&3));
    /// ```
    pub fn try_insert(&mut self, value: T) -> Result<bool>
    where
        T: Eq + hash::Hash,
    {
        if self.contains(&value) {
            return Ok(false);
        }

        let size = Size(self.size.0 + 1);
        let capacity = self.buckets.capacity();

        //  Allocate ahead, so as not to fail past this point.
        let target = if capacity.is_overloaded(size) {
            Some(BucketArray::try_new(capacity.doubled()?)?)
        } else {
            None
        };

        self.buckets.push(value);
        self.size = size;

        if let Some(target) = target {
            log::debug!(
                "rehashing {} elements from {} to {} buckets",
                size.0,
                capacity.get(),
                target.capacity().get()
            );

            self.buckets.rehash(target);
        }

        Ok(true)
    }

    /// Inserts a value into the set.
    ///
    /// Calling this method is equivalent to calling `try_insert` and panicking
    /// on error.
    ///
    /// #   Panics
    ///
    /// Panics if the number of buckets cannot be doubled when needed.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    ///
    /// assert!(set.insert(3));
    /// assert!(!set.insert(3));
    ///
    /// assert_eq!(1, set.len());
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Eq + hash::Hash,
    {
        match self.try_insert(value) {
            Ok(result) => result,
            Err(error) => {
                panic_from_failure(error);
                //  Safety:
                //  -   As the name of the above function implies...
                unsafe { hint::unreachable_unchecked() }
            },
        }
    }

    /// Inserts multiple values in the set.
    ///
    /// If a value cannot be inserted because it is already present, it is
    /// dropped.
    ///
    /// #   Errors
    ///
    /// Returns an error on the first value which cannot be inserted, as per
    /// `try_insert`. The values inserted prior remain in the set.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// assert_eq!(Ok(()), set.try_extend([1, 2, 3, 2]));
    /// assert_eq!(3, set.len());
    /// ```
    pub fn try_extend<C>(&mut self, collection: C) -> Result<()>
    where
        C: IntoIterator<Item = T>,
        T: Eq + hash::Hash,
    {
        for value in collection {
            self.try_insert(value)?;
        }

        Ok(())
    }

    /// Removes a value from the set.
    ///
    /// Returns `true` if the value was present, and `false` otherwise. The
    /// number of buckets is left unchanged.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// assert!(!set.remove(&1));
    ///
    /// set.insert(1);
    ///
    /// assert!(set.remove(&1));
    /// assert!(!set.contains(&1));
    /// assert_eq!(0, set.len());
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        self.take(value).is_some()
    }

    /// Removes a value from the set, returning it if it was present.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<String> = HashSet::new();
    /// set.insert("apple".to_string());
    ///
    /// assert_eq!(Some("apple".to_string()), set.take("apple"));
    /// assert_eq!(None, set.take("apple"));
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        let result = self.buckets.remove(value)?;

        self.size.0 -= 1;

        Some(result)
    }

    /// Clears the instance.
    ///
    /// The instance is then empty, although it retains its buckets.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// set.extend([1, 2, 3]);
    ///
    /// set.clear();
    /// assert_eq!(0, set.len());
    /// assert_eq!(8, set.capacity());
    /// ```
    pub fn clear(&mut self) {
        //  Pre-pooping our pants in case a Drop panics.
        self.size = Size(0);

        self.buckets.clear();
    }
}

impl<T> Default for HashSet<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Clone> Clone for HashSet<T> {
    fn clone(&self) -> Self {
        Self { size: self.size, buckets: self.buckets.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for HashSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.buckets.debug("HashSet", self.size, f)
    }
}

/// Two sets are equal if they contain the same elements, regardless of their
/// capacity.
///
/// ```
/// # use chained::hashset::HashSet;
/// let mut left: HashSet<_> = HashSet::with_capacity(64);
/// left.extend([1, 2, 3]);
///
/// let right: HashSet<_> = [3, 2, 1].into_iter().collect();
///
/// assert_eq!(left, right);
/// ```
impl<T: Eq + hash::Hash> PartialEq for HashSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|e| other.contains(e))
    }
}

impl<T: Eq + hash::Hash> Eq for HashSet<T> {}

impl<T: Eq + hash::Hash> iter::Extend<T> for HashSet<T> {
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>,
    {
        self.try_extend(collection).unwrap_or_else(panic_from_failure);
    }
}

impl<T: Eq + hash::Hash> iter::FromIterator<T> for HashSet<T> {
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T>
    {
        let mut result = HashSet::new();
        result.extend(collection);
        result
    }
}

impl<'a, T> IntoIterator for &'a HashSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T> IntoIterator for HashSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::create(ElementDrain::new(self.buckets, self.size))
    }
}

#[cold]
#[inline(never)]
fn panic_from_failure(failure: Failure) {
    panic!("{}", failure);
}

//  mod tests
