//! Re-export core/alloc/std facilities under a unified name.

#[cfg(not(feature = "with-std"))]
pub use core::{borrow, fmt, hash, hint, iter, mem, num, result, sync};

#[cfg(not(feature = "with-std"))]
pub use alloc::{boxed, vec};

#[cfg(feature = "with-std")]
pub use std::{borrow, boxed, fmt, hash, hint, iter, mem, num, result, sync, vec};
