//! Node Storage
//!
//! The containers in this crate store their nodes in a slab arena and link
//! them by index instead of by reference. This sidesteps the ownership cycle
//! that back-and-forward references would otherwise create, and keeps the
//! nodes of one list close together in memory.
//!
//! Deallocated slots are kept on a free list and reused in LIFO order, so a
//! long-lived list that churns elements does not grow without bound.

use std::fmt;
use std::mem;

/// A reference to a node slot in an [`Arena`].
///
/// The internal of this reference is a raw index into the arena. It is not
/// generational, so a `NodeRef` must not be used after the slot it points to
/// has been deallocated.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeRef(usize);

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "*{}", self.0) }
}

/// A slot in the arena.
enum Entry<T> {
    /// The slot is vacant.
    ///
    /// The free list is not ordered by index but by the order of
    /// de-allocation, the last deallocated slot will be the first reused.
    Vacant {
        /// The index of the next vacant slot.
        next: Option<usize>,
    },
    /// The slot is occupied.
    Occupied(T),
}

/// A slab arena for list nodes.
pub(crate) struct Arena<T> {
    /// The slots in the arena.
    ///
    /// A slot holds data iff it is [`Entry::Occupied`].
    entries: Vec<Entry<T>>,
    /// The head of the free list, i.e. the last deallocated slot.
    free_head: Option<usize>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            free_head: None,
        }
    }
}

impl<T> Arena<T> {
    /// Store data into the arena and return a reference to its slot.
    ///
    /// Reuses the most recently freed slot if there is one.
    pub(crate) fn alloc(&mut self, data: T) -> NodeRef {
        match self.free_head.take() {
            Some(index) => {
                let entry = &mut self.entries[index];
                self.free_head = match entry {
                    // the vacant slot will be taken, its successor becomes the new free head
                    Entry::Vacant { next } => *next,
                    // we have a free head, this slot must be vacant
                    Entry::Occupied(_) => unreachable!(),
                };
                *entry = Entry::Occupied(data);
                NodeRef(index)
            }
            None => {
                let index = self.entries.len();
                self.entries.push(Entry::Occupied(data));
                NodeRef(index)
            }
        }
    }

    /// Release a slot, returning its data.
    ///
    /// # Returns
    ///
    /// - `Some(T)`: The data of the released slot.
    /// - `None`: The reference is invalid or the slot was already vacant.
    pub(crate) fn dealloc(&mut self, ptr: NodeRef) -> Option<T> {
        match self.entries.get(ptr.0) {
            Some(Entry::Occupied(_)) => {}
            _ => return None,
        }
        let old = mem::replace(
            &mut self.entries[ptr.0],
            Entry::Vacant {
                next: self.free_head,
            },
        );
        self.free_head = Some(ptr.0);
        match old {
            Entry::Occupied(data) => Some(data),
            Entry::Vacant { .. } => unreachable!(),
        }
    }

    /// Try to dereference a slot reference.
    pub(crate) fn get(&self, ptr: NodeRef) -> Option<&T> {
        match self.entries.get(ptr.0)? {
            Entry::Occupied(data) => Some(data),
            Entry::Vacant { .. } => None,
        }
    }

    /// Try to mutably dereference a slot reference.
    pub(crate) fn get_mut(&mut self, ptr: NodeRef) -> Option<&mut T> {
        match self.entries.get_mut(ptr.0)? {
            Entry::Occupied(data) => Some(data),
            Entry::Vacant { .. } => None,
        }
    }

    /// Drop all slots and reset the free list.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.free_head = None;
    }
}
