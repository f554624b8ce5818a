use std::fmt::{Debug, Formatter};
use std::ptr::NonNull;

use crate::error::ListError;
use crate::singly::{Node, SinglyList};

/// A cursor with editing operations over a `SinglyList`, exclusively
/// borrowing it.
///
/// The cursor points to a node of the list, or to the end position one
/// past the last node. Since the nodes carry no backward links, all
/// edits work on the position *after* the cursor, which is the only
/// position a singly-linked node can reach in constant time.
///
/// At most one `CursorMut` of a list can exist at the same time:
///
/// ```compile_fail
/// use linked_lists::SinglyList;
/// use std::iter::FromIterator;
///
/// let mut list = SinglyList::from_iter([1, 2, 3]);
///
/// let mut cursor1 = list.cursor_front_mut();
/// let mut cursor2 = list.cursor_front_mut();
/// cursor1.insert_after(0).unwrap();
/// cursor2.insert_after(42).unwrap();
/// ```
pub struct CursorMut<'a, T> {
    pub(crate) current: Option<NonNull<Node<T>>>,
    pub(crate) list: &'a mut SinglyList<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut SinglyList<T>, current: Option<NonNull<Node<T>>>) -> Self {
        Self { current, list }
    }

    /// Provides a reference to the element the cursor is pointing to,
    /// or `None` if the cursor is at the end position.
    pub fn current(&self) -> Option<&T> {
        // SAFETY: `current` is a node of the exclusively borrowed list.
        self.current.map(|node| unsafe { &node.as_ref().element })
    }

    /// Provides a mutable reference to the element the cursor is
    /// pointing to, or `None` if the cursor is at the end position.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `current` is a node of the exclusively borrowed list.
        self.current
            .map(|mut node| unsafe { &mut node.as_mut().element })
    }

    /// Provides read-only access to the underlying list.
    pub fn view(&self) -> &SinglyList<T> {
        self.list
    }

    /// Moves the cursor to the next position.
    ///
    /// Moving from the last node parks the cursor at the end position;
    /// moving again from there is an error and the cursor stays put.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn move_next(&mut self) -> Result<(), ListError> {
        match self.current {
            Some(node) => {
                // SAFETY: `node` is a valid node of the list.
                self.current = unsafe { node.as_ref().next };
                Ok(())
            }
            None => Err(ListError::InvalidCursor(
                "cannot advance past the end position",
            )),
        }
    }

    /// Inserts a new element after the cursor position; the cursor
    /// keeps pointing to the node it pointed to.
    ///
    /// Inserting at the end position is an error, and the list is not
    /// changed.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::SinglyList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = SinglyList::from_iter([1, 3]);
    ///
    /// let mut cursor = list.cursor_front_mut();
    /// cursor.insert_after(2).unwrap();
    /// assert_eq!(cursor.current(), Some(&1));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    pub fn insert_after(&mut self, elt: T) -> Result<(), ListError> {
        let mut current = match self.current {
            Some(node) => node,
            None => {
                return Err(ListError::InvalidCursor(
                    "cannot insert after the end position",
                ))
            }
        };
        let mut node = Node::new_detached(elt);
        // SAFETY: `current` is a valid node; the new node takes over
        // its successor before being linked in after it.
        unsafe {
            node.as_mut().next = current.as_ref().next;
            current.as_mut().next = Some(node);
        }
        if self.list.tail == Some(current) {
            self.list.tail = Some(node);
        }
        self.list.len += 1;
        Ok(())
    }

    /// Removes the element after the cursor and returns it; the cursor
    /// keeps pointing to the node it pointed to.
    ///
    /// It is an error if the cursor is at the end position, or if it is
    /// at the last node and nothing follows it. The list is not changed
    /// in either case.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::SinglyList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = SinglyList::from_iter([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_front_mut();
    /// assert_eq!(cursor.remove_after(), Ok(2));
    /// assert_eq!(cursor.current(), Some(&1));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 3]);
    /// ```
    pub fn remove_after(&mut self) -> Result<T, ListError> {
        let mut current = match self.current {
            Some(node) => node,
            None => {
                return Err(ListError::InvalidCursor(
                    "cannot remove after the end position",
                ))
            }
        };
        let target = match unsafe { current.as_ref().next } {
            Some(node) => node,
            None => {
                return Err(ListError::InvalidCursor(
                    "no node follows the last node",
                ))
            }
        };
        // SAFETY: `target` is the successor of `current`; relinking
        // `current` to the node after `target` leaves no other pointer
        // to it.
        let node = unsafe { Box::from_raw(target.as_ptr()) };
        unsafe { current.as_mut().next = node.next };
        if self.list.tail == Some(target) {
            self.list.tail = Some(current);
        }
        self.list.len -= 1;
        Ok(node.into_element())
    }
}

impl<'a, T: Debug> Debug for CursorMut<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorMut")
            .field("current", &self.current())
            .field("list", &self.list)
            .finish()
    }
}

unsafe impl<'a, T: Send> Send for CursorMut<'a, T> {}

unsafe impl<'a, T: Sync> Sync for CursorMut<'a, T> {}
