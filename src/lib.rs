#![cfg_attr(not(feature = "with-std"), no_std)]
//  Lints
#![allow(clippy::module_inception)]

//! #   The Chained Library
//!
//! A separate-chaining `HashSet`:
//! -   Buckets are singly linked chains of owned nodes.
//! -   The bucket array doubles whenever the load factor reaches 0.75.
//!
//! Elements only need to implement `Hash` and `Eq`; the hasher is fixed, and
//! deterministic across runs.

#[cfg(not(feature = "with-std"))]
extern crate alloc;

pub mod failure;
pub mod hashset;

mod chaincore;
mod utils;

use self::utils::root;
