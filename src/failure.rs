//! The Failure and Result types of this library.
//!
//! Constructing a set, or growing it, may fail. The cause of the error is then
//! represented as a `Failure`.
//!
//! All faillible methods come in two versions:
//!
//! -   A faillible `try_xxx` version, which returns a `Result` with `Failure` as the error type.
//! -   A convenience `xxx` version, which invokes the `try_xxx` version and panics in case of error.
//!
//! In either case, a failure is detected before the collection is modified.

use thiserror::Error;

use super::root::result;

/// Universal Failure type of this library.
#[derive(Clone, Copy, Debug, Error, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Failure {
    /// The number of buckets requested is 0.
    #[error("the number of buckets must be strictly positive")]
    ZeroCapacity,
    /// Doubling the number of buckets would overflow `usize`.
    #[error("the number of buckets overflows usize")]
    BucketsOverflow,
    /// The allocator could not allocate the bucket array.
    #[error("the allocator could not allocate the bucket array")]
    OutOfMemory,
}

/// Universal Result type of this library.
pub type Result<T> = result::Result<T, Failure>;

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn failure_display() {
        assert_eq!(
            "the number of buckets must be strictly positive",
            format!("{}", Failure::ZeroCapacity)
        );
        assert_eq!("the number of buckets overflows usize", format!("{}", Failure::BucketsOverflow));
    }
}
