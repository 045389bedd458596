//! Doubly Linked List Containers
//!
//! This crate provides two chain-of-nodes containers: [`LinkedList`], an
//! unordered doubly linked list with O(1) insertion and removal at both ends,
//! and [`SortedList`], which keeps its elements in ascending order under a
//! comparison function supplied at construction.
//!
//! Nodes are stored in a slab arena and linked by index in both directions,
//! so the bidirectional links never form ownership cycles. Traversal is
//! available either through a standard double-ended iterator ([`Iter`]) or
//! through a stateful bidirectional [`Cursor`] that can step both ways and
//! reports boundary overruns as recoverable errors.

pub mod cursor;
pub mod errors;
pub mod list;
pub mod sorted;

mod storage;

pub use cursor::Cursor;
pub use errors::CursorError;
pub use list::{Iter, LinkedList};
pub use sorted::SortedList;
