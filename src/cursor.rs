//! Bidirectional Cursor
//!
//! A [`Cursor`] is a stateful walk over a list that can change direction at
//! any point, unlike the plain [`Iterator`](crate::Iter) which fixes a
//! direction per end. It is conceptually positioned *between* two elements;
//! internally it tracks the node a forward step would return.
//!
//! The cursor borrows the list for its whole lifetime, so the list cannot be
//! structurally modified while a cursor is live; stale-cursor bugs are ruled
//! out at compile time. The cursor itself is traversal-only and has no
//! mutating operations.

use crate::errors::CursorError;
use crate::list::LinkedList;
use crate::storage::NodeRef;

/// A stateful bidirectional cursor over a [`LinkedList`].
///
/// Created by [`LinkedList::cursor`], positioned before the first element.
pub struct Cursor<'a, T> {
    list: &'a LinkedList<T>,
    /// The node a forward step would return. [`None`] once the cursor has
    /// moved past the last element (or the list is empty).
    curr: Option<NodeRef>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a LinkedList<T>) -> Self {
        Self {
            list,
            curr: list.head_ref(),
        }
    }

    /// Whether a forward step would yield an element.
    pub fn has_next(&self) -> bool { self.curr.is_some() }

    /// Step forward and return the element stepped over.
    ///
    /// # Errors
    ///
    /// [`CursorError::NoNext`] if the cursor is already past the last
    /// element; the cursor does not move.
    pub fn next(&mut self) -> Result<&'a T, CursorError> {
        let curr = self.curr.ok_or(CursorError::NoNext)?;
        self.curr = self.list.next_of(curr);
        Ok(self.list.value_of(curr))
    }

    /// Whether a backward step would yield an element.
    pub fn has_previous(&self) -> bool {
        match self.curr {
            // past the end, a backward step lands on the tail if there is one
            None => self.list.tail_ref().is_some(),
            Some(curr) => self.list.prev_of(curr).is_some(),
        }
    }

    /// Step backward and return the element stepped over.
    ///
    /// From any position, [`next`](Self::next) followed by `previous` (and
    /// vice versa) returns the same element.
    ///
    /// # Errors
    ///
    /// [`CursorError::NoPrevious`] if the cursor is already before the first
    /// element; the cursor does not move.
    pub fn previous(&mut self) -> Result<&'a T, CursorError> {
        let prev = match self.curr {
            None => self.list.tail_ref(),
            Some(curr) => self.list.prev_of(curr),
        };
        let prev = prev.ok_or(CursorError::NoPrevious)?;
        self.curr = Some(prev);
        Ok(self.list.value_of(prev))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_walk() {
        let mut list = LinkedList::new();
        list.push_front("Android");
        list.push_back("iOS");

        let mut cursor = list.cursor();
        assert!(cursor.has_next());
        assert_eq!(cursor.next(), Ok(&"Android"));
        assert!(cursor.has_next());
        assert_eq!(cursor.next(), Ok(&"iOS"));
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_next_past_end() {
        let mut list = LinkedList::new();
        list.push_front("ChromeOS");

        let mut cursor = list.cursor();
        assert_eq!(cursor.next(), Ok(&"ChromeOS"));
        assert_eq!(cursor.next(), Err(CursorError::NoNext));
        // the failed step must not have moved the cursor
        assert_eq!(cursor.previous(), Ok(&"ChromeOS"));
    }

    #[test]
    fn test_empty_list() {
        let list = LinkedList::<i32>::new();
        let mut cursor = list.cursor();
        assert!(!cursor.has_next());
        assert!(!cursor.has_previous());
        assert_eq!(cursor.next(), Err(CursorError::NoNext));
        assert_eq!(cursor.previous(), Err(CursorError::NoPrevious));
    }

    #[test]
    fn test_previous_at_front() {
        let list = LinkedList::from_iter([1, 2]);
        let mut cursor = list.cursor();
        assert!(!cursor.has_previous());
        assert_eq!(cursor.previous(), Err(CursorError::NoPrevious));
        // still at the front
        assert_eq!(cursor.next(), Ok(&1));
    }

    #[test]
    fn test_previous_from_past_the_end() {
        let list = LinkedList::from_iter([1, 2, 3]);
        let mut cursor = list.cursor();
        while cursor.has_next() {
            cursor.next().unwrap();
        }
        // stepping back from past the end lands on the tail
        assert!(cursor.has_previous());
        assert_eq!(cursor.previous(), Ok(&3));
        assert_eq!(cursor.previous(), Ok(&2));
        assert_eq!(cursor.previous(), Ok(&1));
        assert!(!cursor.has_previous());
    }

    #[test]
    fn test_round_trip() {
        let list = LinkedList::from_iter([10, 20, 30]);
        let mut cursor = list.cursor();

        // k steps forward then k steps back return the same values reversed
        assert_eq!(cursor.next(), Ok(&10));
        assert_eq!(cursor.next(), Ok(&20));
        assert_eq!(cursor.previous(), Ok(&20));
        assert_eq!(cursor.previous(), Ok(&10));

        // and the cursor is back at the start
        assert!(!cursor.has_previous());
        assert_eq!(cursor.next(), Ok(&10));
    }

    #[test]
    fn test_direction_changes_mid_walk() {
        let list = LinkedList::from_iter(["a", "b", "c", "d"]);
        let mut cursor = list.cursor();

        assert_eq!(cursor.next(), Ok(&"a"));
        assert_eq!(cursor.next(), Ok(&"b"));
        assert_eq!(cursor.next(), Ok(&"c"));
        assert_eq!(cursor.previous(), Ok(&"c"));
        assert_eq!(cursor.previous(), Ok(&"b"));
        assert_eq!(cursor.next(), Ok(&"b"));
        assert_eq!(cursor.next(), Ok(&"c"));
        assert_eq!(cursor.next(), Ok(&"d"));
        assert!(!cursor.has_next());
        assert!(cursor.has_previous());
    }
}
