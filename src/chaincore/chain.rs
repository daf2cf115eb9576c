//! The collision chain of a bucket.
//!
//! A chain is a singly linked list of owned nodes: each node is owned by the
//! bucket, or by the node preceding it. Elements are appended at the tail, so
//! that a chain lists its elements oldest first.

use super::root::{borrow, fmt, iter};
use super::root::boxed::Box;

use self::borrow::Borrow;

//  A link to the next node, if any.
pub type Link<T> = Option<Box<Node<T>>>;

//  A node of the chain.
pub struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

//  The chain of a bucket; empty if the bucket is.
pub struct Chain<T> {
    head: Link<T>,
}

impl<T> Chain<T> {
    //  Creates an empty chain.
    pub const fn new() -> Self { Self { head: None } }

    //  Returns whether the chain is empty.
    pub fn is_empty(&self) -> bool { self.head.is_none() }

    //  Returns the head node, if any.
    pub fn head(&self) -> Option<&Node<T>> { self.head.as_deref() }

    //  Returns an iterator over the elements, oldest first.
    pub fn iter(&self) -> ChainIterator<'_, T> {
        ChainIterator { current: self.head() }
    }

    //  Returns the element equal to `key`, if any.
    pub fn find<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.iter().find(|value| <T as Borrow<Q>>::borrow(value) == key)
    }

    //  Appends `value` at the tail of the chain.
    //
    //  Does not check whether an equal element is already present.
    pub fn push_back(&mut self, value: T) {
        let mut link = &mut self.head;

        while let Some(node) = link {
            link = &mut node.next;
        }

        *link = Some(Box::new(Node { value, next: None }));
    }

    //  Removes the head of the chain, returning its element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            value
        })
    }

    //  Unlinks the first element equal to `key`, returning it.
    //
    //  The link which referred to the unlinked node, either the head or the
    //  `next` of its predecessor, is re-pointed to its successor.
    pub fn unlink<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let mut link = &mut self.head;

        while link.as_ref().is_some_and(|node| <T as Borrow<Q>>::borrow(&node.value) != key) {
            link = &mut link.as_mut()?.next;
        }

        let node = link.take()?;
        let Node { value, next } = *node;
        *link = next;

        Some(value)
    }

    //  Drops all the elements.
    pub fn clear(&mut self) {
        //  Iterative, a recursive drop of the links could overflow the stack.
        let mut link = self.head.take();

        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self { Self::new() }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) { self.clear(); }
}

impl<T: Clone> Clone for Chain<T> {
    fn clone(&self) -> Self {
        let mut result = Self::new();
        let mut tail = &mut result.head;

        for value in self.iter() {
            let node = tail.insert(Box::new(Node { value: value.clone(), next: None }));
            tail = &mut node.next;
        }

        result
    }
}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

//  An iterator over the elements of a chain.
pub struct ChainIterator<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<'a, T> Clone for ChainIterator<'a, T> {
    fn clone(&self) -> Self { Self { current: self.current } }
}

impl<'a, T> iter::Iterator for ChainIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.current?;
        self.current = node.next.as_deref();
        Some(&node.value)
    }
}

#[cfg(test)]
mod tests {

use super::*;

use crate::utils::tester::{SpyCount, SpyElement};

fn chain_of(values: &[i32]) -> Chain<i32> {
    let mut chain = Chain::new();
    for value in values {
        chain.push_back(*value);
    }
    chain
}

fn elements(chain: &Chain<i32>) -> Vec<i32> { chain.iter().copied().collect() }

#[test]
fn chain_empty() {
    let chain: Chain<i32> = Chain::default();

    assert!(chain.is_empty());
    assert!(chain.head().is_none());
    assert_eq!(None, chain.find(&1));
    assert_eq!(0, chain.iter().count());
}

#[test]
fn chain_push_back_oldest_first() {
    let chain = chain_of(&[3, 1, 2]);

    assert!(!chain.is_empty());
    assert_eq!(Some(&3), chain.head().map(|node| &node.value));
    assert_eq!(vec![3, 1, 2], elements(&chain));
}

#[test]
fn chain_find() {
    let chain = chain_of(&[3, 1, 2]);

    assert_eq!(Some(&3), chain.find(&3));
    assert_eq!(Some(&1), chain.find(&1));
    assert_eq!(Some(&2), chain.find(&2));
    assert_eq!(None, chain.find(&4));
}

#[test]
fn chain_find_borrowed() {
    let mut chain = Chain::new();
    chain.push_back(String::from("hello"));
    chain.push_back(String::from("apple"));

    assert_eq!(Some("apple"), chain.find("apple").map(String::as_str));
    assert_eq!(None, chain.find("cat"));
}

#[test]
fn chain_pop_front() {
    let mut chain = chain_of(&[3, 1]);

    assert_eq!(Some(3), chain.pop_front());
    assert_eq!(Some(1), chain.pop_front());
    assert_eq!(None, chain.pop_front());
    assert!(chain.is_empty());
}

#[test]
fn chain_unlink_head() {
    let mut chain = chain_of(&[1, 2, 3]);

    assert_eq!(Some(1), chain.unlink(&1));
    assert_eq!(vec![2, 3], elements(&chain));
}

#[test]
fn chain_unlink_middle() {
    let mut chain = chain_of(&[1, 2, 3]);

    assert_eq!(Some(2), chain.unlink(&2));
    assert_eq!(vec![1, 3], elements(&chain));
}

#[test]
fn chain_unlink_tail() {
    let mut chain = chain_of(&[1, 2, 3]);

    assert_eq!(Some(3), chain.unlink(&3));
    assert_eq!(vec![1, 2], elements(&chain));

    chain.push_back(4);
    assert_eq!(vec![1, 2, 4], elements(&chain));
}

#[test]
fn chain_unlink_absent() {
    let mut chain = chain_of(&[1, 2, 3]);

    assert_eq!(None, chain.unlink(&4));
    assert_eq!(vec![1, 2, 3], elements(&chain));

    let mut empty: Chain<i32> = Chain::new();
    assert_eq!(None, empty.unlink(&4));
}

#[test]
fn chain_unlink_last_element() {
    let mut chain = chain_of(&[1]);

    assert_eq!(Some(1), chain.unlink(&1));
    assert!(chain.is_empty());
}

#[test]
fn chain_clone() {
    let chain = chain_of(&[5, 4, 6]);
    let clone = chain.clone();

    assert_eq!(vec![5, 4, 6], elements(&clone));
    assert_eq!(elements(&chain), elements(&clone));
}

#[test]
fn chain_debug() {
    let chain = chain_of(&[1, 2]);

    assert_eq!("[1, 2]", format!("{:?}", chain));
}

#[test]
fn chain_drop_elements() {
    let count = SpyCount::zero();

    let mut chain = Chain::new();
    for id in 0..5 {
        chain.push_back(SpyElement::new(id, &count));
    }

    assert_eq!(5, count.get());

    let unlinked = chain.unlink(&SpyElement::new(2, &count));

    //  The key was dropped, the unlinked element was not.
    assert_eq!(5, count.get());

    drop(unlinked);
    assert_eq!(4, count.get());

    chain.clear();
    assert_eq!(0, count.get());
    assert!(chain.is_empty());
}

#[test]
fn chain_drop_long() {
    let mut chain = Chain::new();

    //  Build the chain from the head, to avoid quadratic appends.
    for value in 0..100_000 {
        let head = chain.head.take();
        chain.head = Some(Box::new(Node { value, next: head }));
    }

    assert_eq!(100_000, chain.iter().count());

    drop(chain);
}

}
