//! Internal definition of the HashSet buckets and chains.

pub mod buckets;
pub mod capacity;
pub mod chain;
pub mod hasher;
pub mod iterator;

use super::failure;
use super::root;
