//! #   The HashSet.
//!
//! The `HashSet` is an unordered set of distinct elements, with the interface
//! of the standard `HashSet`, restricted to its essentials.
//!
//! ##  Under the covers.
//!
//! Under the covers the `HashSet` is an array of buckets, each bucket being a
//! singly linked chain of the elements whose hash maps to it.
//!
//! The main consequences are:
//!
//! -   Elements are stored in individual nodes, and are never moved in memory
//!     while they remain in the same bucket array.
//! -   Whenever the number of elements reaches 3/4 of the number of buckets,
//!     the number of buckets doubles and all elements are redistributed.
//! -   Removing elements never shrinks the bucket array.
//!
//! #   Example: basic
//!
//! General usage of `HashSet` involve inserting elements, either using
//! `insert`, to insert one element at a time, or `extend`, to insert multiple
//! elements at once.
//!
//! ```
//! use chained::hashset::HashSet;
//!
//! let mut set: HashSet<_> = HashSet::new();
//! assert!(set.insert("hello"));
//! assert!(set.insert("apple"));
//! assert!(!set.insert("apple"));
//!
//! assert_eq!(2, set.len());
//! assert!(set.contains("hello"));
//!
//! set.extend(["cat", "last"]);
//!
//! assert_eq!(4, set.len());
//! assert!(set.remove("cat"));
//! assert!(!set.contains("cat"));
//!
//! for e in &set {
//!     println!("{}", e);
//! }
//! ```
//!
//! #   Example: managing capacity
//!
//! The capacity of a `HashSet` is its number of buckets:
//!
//! -   The constructors `with_capacity` and `try_with_capacity` allow
//!     specifying the initial number of buckets, 4 by default.
//! -   Inserting doubles the number of buckets as soon as the load factor
//!     reaches 0.75.
//!
//! ```
//! use chained::failure::Failure;
//! use chained::hashset::HashSet;
//!
//! //  A `HashSet` needs at least one bucket.
//! assert_eq!(Some(Failure::ZeroCapacity), HashSet::<i32>::try_with_capacity(0).err());
//!
//! let mut set: HashSet<_> = HashSet::with_capacity(8);
//! set.extend(0..5);
//! assert_eq!(8, set.capacity());
//!
//! //  The 6th element brings the load factor to 0.75.
//! set.insert(5);
//! assert_eq!(16, set.capacity());
//!
//! //  Removing does not shrink.
//! set.clear();
//! assert_eq!(16, set.capacity());
//! ```
//!
//! #   Example: sharing is caring
//!
//! The `HashSet` has no internal synchronization: mutating it requires an
//! exclusive reference. Sharing it across threads for mutation requires
//! wrapping it, for example in a `Mutex`.
//!
//! ```
//! use std::sync::Mutex;
//! use std::thread;
//!
//! use chained::hashset::HashSet;
//!
//! let set: Mutex<HashSet<u32>> = Mutex::new(HashSet::new());
//!
//! thread::scope(|scope| {
//!     for start in [0, 50] {
//!         let set = &set;
//!         scope.spawn(move || {
//!             for i in start..(start + 100) {
//!                 set.lock().unwrap().insert(i);
//!             }
//!         });
//!     }
//! });
//!
//! assert_eq!(150, set.into_inner().unwrap().len());
//! ```

pub mod iterator;

mod hashset;

pub use self::hashset::{HashSet, DEFAULT_CAPACITY};

use super::chaincore;
use super::failure;
use super::root;
