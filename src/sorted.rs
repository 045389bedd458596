//! Sorted Doubly Linked List
//!
//! [`SortedList`] keeps its elements in ascending order under a comparison
//! function supplied at construction. It composes the core [`LinkedList`]
//! rather than extending it: positional insertion (`push_front` /
//! `push_back`) would break the ordering invariant, so those operations are
//! simply not part of this type's surface and [`insert`](SortedList::insert)
//! is the only way in. Removal at either end trivially preserves order, so
//! the rest of the core surface is passed through unchanged.

use std::cmp::Ordering;
use std::fmt;

use crate::cursor::Cursor;
use crate::list::{Iter, LinkedList};

/// A doubly linked list whose elements stay in ascending order.
///
/// For any two adjacent elements `(a, b)` in forward order, the comparison
/// function never places `a` strictly after `b`.
///
/// # Type parameters
///
/// - `T`: The element type.
/// - `C`: The comparison function. For an [`Ord`] element type, `T::cmp`
///   works directly: `SortedList::new(i32::cmp)`.
pub struct SortedList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    list: LinkedList<T>,
    compare: C,
}

impl<T, C> SortedList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Create an empty list ordered by `compare`.
    pub fn new(compare: C) -> Self {
        Self {
            list: LinkedList::new(),
            compare,
        }
    }

    /// Insert `value` at its position in the order.
    ///
    /// The scan from the head advances only past elements that compare
    /// strictly less than `value`, so elements comparing equal keep their
    /// relative order and the new one lands after them (stable insert).
    /// O(N) scan plus O(1) splice.
    pub fn insert(&mut self, value: T) {
        let mut curr = self.list.head_ref();
        while let Some(ptr) = curr {
            if (self.compare)(self.list.value_of(ptr), &value) != Ordering::Less {
                break;
            }
            curr = self.list.next_of(ptr);
        }
        // `curr` is the first element not strictly less, or None at the end
        self.list.splice_before(curr, value);
        debug_assert!(self.is_sorted());
    }

    fn is_sorted(&self) -> bool {
        let mut iter = self.list.iter().peekable();
        while let Some(a) = iter.next() {
            if let Some(b) = iter.peek() {
                if (self.compare)(a, b) == Ordering::Greater {
                    return false;
                }
            }
        }
        true
    }

    /// Number of elements in the list.
    pub fn len(&self) -> usize { self.list.len() }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool { self.list.is_empty() }

    /// The smallest element, or [`None`] if the list is empty.
    pub fn front(&self) -> Option<&T> { self.list.front() }

    /// The largest element, or [`None`] if the list is empty.
    pub fn back(&self) -> Option<&T> { self.list.back() }

    /// Remove and return the smallest element, or [`None`] if the list is
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> { self.list.pop_front() }

    /// Remove and return the largest element, or [`None`] if the list is
    /// empty.
    pub fn pop_back(&mut self) -> Option<T> { self.list.pop_back() }

    /// Remove the first element that compares [`Ordering::Equal`] to `target`
    /// under `compare`, scanning from the front.
    ///
    /// Same contract as [`LinkedList::remove_first`]; unlinking a single
    /// element cannot disturb the order of the rest.
    pub fn remove_first<F>(&mut self, target: &T, compare: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.list.remove_first(target, compare)
    }

    /// Copy all elements into a [`Vec`] in ascending order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.list.to_vec()
    }

    /// Remove all elements.
    pub fn clear(&mut self) { self.list.clear() }

    /// Create a double-ended iterator over the elements, smallest first.
    pub fn iter(&self) -> Iter<'_, T> { self.list.iter() }

    /// Create a bidirectional [`Cursor`] positioned before the smallest
    /// element.
    pub fn cursor(&self) -> Cursor<'_, T> { self.list.cursor() }
}

impl<T, C> fmt::Debug for SortedList<T, C>
where
    T: fmt::Debug,
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, C> Extend<T> for SortedList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a SortedList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}
