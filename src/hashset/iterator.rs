//! Iterators over HashSet.
//!
//! `Iter` borrows the set, while `IntoIter` consumes it.

use super::root::{fmt, iter};

use super::chaincore::iterator::{ElementDrain, ElementIterator};

/// An iterator over the elements of a `HashSet`.
///
/// The elements are produced in an unspecified order, each exactly once.
///
/// The iterator borrows the `HashSet` it was created from, so that the
/// `HashSet` cannot be modified while the iterator is alive.
///
/// ```compile_fail
/// # use chained::hashset::HashSet;
/// let mut set: HashSet<_> = [1, 2, 3].into_iter().collect();
///
/// for e in set.iter() {
///     set.insert(e + 3);
/// }
/// ```
pub struct Iter<'a, T>(ElementIterator<'a, T>);

impl<'a, T> Iter<'a, T> {
    pub(crate) fn create(iterator: ElementIterator<'a, T>) -> Self {
        Self(iterator)
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<'a, T: fmt::Debug> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> iter::Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> { self.0.next() }

    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> iter::ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> iter::FusedIterator for Iter<'a, T> {}

/// An owning iterator over the elements of a `HashSet`.
///
/// The elements are produced in an unspecified order, each exactly once.
pub struct IntoIter<T>(ElementDrain<T>);

impl<T> IntoIter<T> {
    pub(crate) fn create(drain: ElementDrain<T>) -> Self { Self(drain) }
}

impl<T> iter::Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> { self.0.next() }

    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> iter::ExactSizeIterator for IntoIter<T> {}

impl<T> iter::FusedIterator for IntoIter<T> {}
