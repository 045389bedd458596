//! Core Doubly Linked List
//!
//! [`LinkedList`] owns a chain of nodes held in a slab arena and linked by
//! index in both directions. The head is the first node of the forward
//! traversal and the tail the last; walking backward from the tail visits the
//! same nodes in reverse. An empty list has neither, a singleton list has the
//! same node as both.
//!
//! Besides the usual endpoint operations the list exposes two kinds of
//! traversal: [`iter`](LinkedList::iter) for a plain double-ended iterator,
//! and [`cursor`](LinkedList::cursor) for a stateful cursor that can change
//! direction mid-walk.

use std::cmp::Ordering;
use std::fmt;

use crate::cursor::Cursor;
use crate::storage::{Arena, NodeRef};

/// A single node of the chain.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: Option<NodeRef>,
    pub(crate) next: Option<NodeRef>,
}

/// A doubly linked list with O(1) insertion and removal at both ends.
///
/// The element count is tracked alongside the chain, so [`len`](Self::len) is
/// O(1) and always agrees with the number of reachable nodes.
pub struct LinkedList<T> {
    arena: Arena<Node<T>>,
    head: Option<NodeRef>,
    tail: Option<NodeRef>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self { Self::new() }
}

impl<T> LinkedList<T> {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self {
            arena: Arena::default(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of elements in the list.
    pub fn len(&self) -> usize { self.len }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool { self.len == 0 }

    fn node(&self, ptr: NodeRef) -> &Node<T> {
        self.arena.get(ptr).expect("linked node missing from arena")
    }

    fn node_mut(&mut self, ptr: NodeRef) -> &mut Node<T> {
        self.arena
            .get_mut(ptr)
            .expect("linked node missing from arena")
    }

    /// Push a value to the front of the list.
    ///
    /// If the list is empty, the new node becomes both head and tail.
    pub fn push_front(&mut self, value: T) {
        let node = self.arena.alloc(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.node_mut(head).prev = Some(node),
            // the list is empty, the new node is also the tail
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Push a value to the back of the list.
    ///
    /// If the list is empty, the new node becomes both head and tail.
    pub fn push_back(&mut self, value: T) {
        let node = self.arena.alloc(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(node),
            // the list is empty, the new node is also the head
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// The first element, or [`None`] if the list is empty.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|head| &self.node(head).value)
    }

    /// The last element, or [`None`] if the list is empty.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|tail| &self.node(tail).value)
    }

    /// Mutable reference to the first element.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(|head| &mut self.node_mut(head).value)
    }

    /// Mutable reference to the last element.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.tail.map(|tail| &mut self.node_mut(tail).value)
    }

    /// Remove and return the first element, or [`None`] if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|head| self.remove_node(head))
    }

    /// Remove and return the last element, or [`None`] if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|tail| self.remove_node(tail))
    }

    /// Remove the first element that compares [`Ordering::Equal`] to `target`
    /// under `compare`, scanning from the front.
    ///
    /// # Returns
    ///
    /// - `Some(T)`: The removed value.
    /// - `None`: No element matched; the list is unchanged.
    pub fn remove_first<F>(&mut self, target: &T, mut compare: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut curr = self.head;
        while let Some(ptr) = curr {
            if compare(&self.node(ptr).value, target) == Ordering::Equal {
                return Some(self.remove_node(ptr));
            }
            curr = self.node(ptr).next;
        }
        None
    }

    /// Unlink a node from the chain, release its slot and return the value.
    fn remove_node(&mut self, ptr: NodeRef) -> T {
        let (prev, next) = {
            let node = self.node(ptr);
            (node.prev, node.next)
        };

        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            // removing the head
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            // removing the tail
            None => self.tail = prev,
        }

        self.len -= 1;
        debug_assert_eq!(self.head.is_none(), self.tail.is_none());
        debug_assert_eq!(self.head.is_none(), self.len == 0);

        let node = self
            .arena
            .dealloc(ptr)
            .expect("linked node missing from arena");
        node.value
    }

    /// Insert `value` immediately before `position`, or at the back when
    /// `position` is [`None`].
    ///
    /// This is the splice primitive the sorted variant builds its ordered
    /// insertion on.
    pub(crate) fn splice_before(&mut self, position: Option<NodeRef>, value: T) {
        let Some(pos) = position else {
            // the scan ran off the end, the value goes last
            self.push_back(value);
            return;
        };
        let Some(prev) = self.node(pos).prev else {
            // splicing before the head
            self.push_front(value);
            return;
        };
        let node = self.arena.alloc(Node {
            value,
            prev: Some(prev),
            next: Some(pos),
        });
        self.node_mut(prev).next = Some(node);
        self.node_mut(pos).prev = Some(node);
        self.len += 1;
    }

    pub(crate) fn head_ref(&self) -> Option<NodeRef> { self.head }

    pub(crate) fn tail_ref(&self) -> Option<NodeRef> { self.tail }

    pub(crate) fn next_of(&self, ptr: NodeRef) -> Option<NodeRef> { self.node(ptr).next }

    pub(crate) fn prev_of(&self, ptr: NodeRef) -> Option<NodeRef> { self.node(ptr).prev }

    pub(crate) fn value_of(&self, ptr: NodeRef) -> &T { &self.node(ptr).value }

    /// Copy all elements into a [`Vec`] in forward order.
    ///
    /// The vector is independent of the list, no internal storage is aliased.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Remove all elements.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Create a double-ended iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            forward: self.head,
            backward: self.tail,
            remaining: self.len,
        }
    }

    /// Create a bidirectional [`Cursor`] positioned before the first element.
    pub fn cursor(&self) -> Cursor<'_, T> { Cursor::new(self) }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

/// A double-ended iterator over the elements of a [`LinkedList`].
///
/// Walks forward from the head and backward from the tail, bounded by the
/// element count so the two ends never cross.
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    forward: Option<NodeRef>,
    backward: Option<NodeRef>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let curr = self.forward?;
        self.forward = self.list.node(curr).next;
        self.remaining -= 1;
        Some(&self.list.node(curr).value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let curr = self.backward?;
        self.backward = self.list.node(curr).prev;
        self.remaining -= 1;
        Some(&self.list.node(curr).value)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
