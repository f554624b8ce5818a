use std::fmt::{Debug, Formatter};
use std::ptr::NonNull;

use crate::doubly::{DoublyList, Node};
use crate::error::ListError;

/// A cursor over a `DoublyList`, pointing to an element node or to the
/// trailer, one position past the last element.
///
/// A `Cursor` is like an iterator, except that it can freely seek
/// back-and-forth. The sentinels themselves are never handed out;
/// reading at the trailer position yields `None`.
#[derive(Clone)]
pub struct Cursor<'a, T> {
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a DoublyList<T>,
}

/// A cursor with editing operations, exclusively borrowing its
/// `DoublyList`.
///
/// Unlike [`Cursor`]s, of which several can walk the same list at the
/// same time, at most one `CursorMut` of a list can exist:
///
/// ```compile_fail
/// use linked_lists::DoublyList;
/// use std::iter::FromIterator;
///
/// let mut list = DoublyList::from_iter([1, 2, 3]);
///
/// let mut cursor1 = list.cursor_front_mut();
/// let mut cursor2 = list.cursor_front_mut();
/// cursor1.insert(0);
/// cursor2.insert(42);
/// ```
pub struct CursorMut<'a, T> {
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a mut DoublyList<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        impl<'a, T> $CURSOR<'a, T> {
            pub(crate) fn is_trailer_position(&self) -> bool {
                self.current == self.list.trailer_node()
            }
            pub(crate) fn is_front_position(&self) -> bool {
                self.prev_node() == self.list.header_node()
            }
            pub(crate) fn next_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current` is always a valid node of the list,
                // so its links are initialized.
                unsafe { self.current.as_ref().next }
            }
            pub(crate) fn prev_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current` is always a valid node of the list,
                // so its links are initialized.
                unsafe { self.current.as_ref().prev }
            }

            /// Moves the cursor to the next position.
            ///
            /// If the cursor is already at the trailer, one past the
            /// last element, it stays put and an error is returned.
            ///
            /// # Complexity
            ///
            /// This operation should compute in *O*(1) time.
            pub fn move_next(&mut self) -> Result<(), ListError> {
                if self.is_trailer_position() {
                    return Err(ListError::InvalidCursor(
                        "cannot move past the trailer position",
                    ));
                }
                self.current = self.next_node();
                Ok(())
            }

            /// Moves the cursor to the previous position.
            ///
            /// If the cursor is already at the first element, it stays
            /// put and an error is returned.
            ///
            /// # Complexity
            ///
            /// This operation should compute in *O*(1) time.
            pub fn move_prev(&mut self) -> Result<(), ListError> {
                if self.is_front_position() {
                    return Err(ListError::InvalidCursor(
                        "cannot move before the front position",
                    ));
                }
                self.current = self.prev_node();
                Ok(())
            }

            /// Moves the cursor `steps` positions forward.
            ///
            /// If the list runs out before `steps` positions are
            /// consumed, the cursor stops where the move failed and an
            /// error is returned.
            ///
            /// # Complexity
            ///
            /// This operation should compute in *O*(`steps`) time.
            pub fn seek_forward(&mut self, steps: usize) -> Result<(), ListError> {
                (0..steps).try_for_each(|_| self.move_next())
            }

            /// Moves the cursor `steps` positions backward.
            ///
            /// If the list runs out before `steps` positions are
            /// consumed, the cursor stops where the move failed and an
            /// error is returned.
            ///
            /// # Complexity
            ///
            /// This operation should compute in *O*(`steps`) time.
            pub fn seek_backward(&mut self, steps: usize) -> Result<(), ListError> {
                (0..steps).try_for_each(|_| self.move_prev())
            }

            /// Moves the cursor to the first element of the list, or to
            /// the trailer if the list is empty.
            ///
            /// # Complexity
            ///
            /// This operation should compute in *O*(1) time.
            pub fn move_to_front(&mut self) {
                self.current = self.list.front_node();
            }

            /// Moves the cursor to the trailer, one past the last
            /// element of the list.
            ///
            /// # Complexity
            ///
            /// This operation should compute in *O*(1) time.
            pub fn move_to_end(&mut self) {
                self.current = self.list.trailer_node();
            }
        }

        impl<'a, T: Debug> Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("current", &self.current())
                    .field("list", &self.list)
                    .finish()
            }
        }
    };
}

impl_cursor!(Cursor);
impl_cursor!(CursorMut);

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a DoublyList<T>, current: NonNull<Node<T>>) -> Self {
        Self { current, list }
    }

    fn same_list_with(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list)
    }

    /// Provides a reference to the element the cursor is pointing to,
    /// or `None` if the cursor is at the trailer.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyList;
    /// use std::iter::FromIterator;
    ///
    /// let list = DoublyList::from_iter([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_front();
    /// assert_eq!(cursor.current(), Some(&1));
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        if self.is_trailer_position() {
            return None;
        }
        // SAFETY: `current` is an element node, and the list cannot be
        // mutated while the cursor borrows it.
        unsafe { Some(&self.current.as_ref().element) }
    }

    /// Provides a reference to the element before the cursor, or `None`
    /// if the cursor is at the first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyList;
    /// use std::iter::FromIterator;
    ///
    /// let list = DoublyList::from_iter([1, 2, 3]);
    ///
    /// let cursor = list.cursor_end();
    /// assert_eq!(cursor.previous(), Some(&3));
    /// assert_eq!(list.cursor_front().previous(), None);
    /// ```
    pub fn previous(&self) -> Option<&'a T> {
        if self.is_front_position() {
            return None;
        }
        // SAFETY: the node before the cursor is an element node, and
        // the list cannot be mutated while the cursor borrows it.
        unsafe { Some(&self.prev_node().as_ref().element) }
    }
}

impl<'a, T> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_list_with(other) && self.current == other.current
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut DoublyList<T>, current: NonNull<Node<T>>) -> Self {
        Self { current, list }
    }

    /// Provides a reference to the element the cursor is pointing to,
    /// or `None` if the cursor is at the trailer.
    ///
    /// The reference is bound to the cursor borrow, so it cannot
    /// outlive later edits through the cursor.
    pub fn current(&self) -> Option<&T> {
        if self.is_trailer_position() {
            return None;
        }
        // SAFETY: `current` is an element node of the list.
        unsafe { Some(&self.current.as_ref().element) }
    }

    /// Provides a mutable reference to the element the cursor is
    /// pointing to, or `None` if the cursor is at the trailer.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.is_trailer_position() {
            return None;
        }
        // SAFETY: `current` is an element node of the list, exclusively
        // borrowed through the cursor.
        unsafe { Some(&mut self.current.as_mut().element) }
    }

    /// Provides a reference to the element before the cursor, or `None`
    /// if the cursor is at the first element.
    pub fn previous(&self) -> Option<&T> {
        if self.is_front_position() {
            return None;
        }
        // SAFETY: the node before the cursor is an element node.
        unsafe { Some(&self.prev_node().as_ref().element) }
    }

    /// Provides a mutable reference to the element before the cursor,
    /// or `None` if the cursor is at the first element.
    pub fn previous_mut(&mut self) -> Option<&mut T> {
        if self.is_front_position() {
            return None;
        }
        // SAFETY: the node before the cursor is an element node,
        // exclusively borrowed through the cursor.
        unsafe { Some(&mut self.prev_node().as_mut().element) }
    }

    /// Provides a read-only cursor at the current position.
    ///
    /// The lifetime of the returned cursor is bound to that of the
    /// `CursorMut`, which cannot be used while the returned cursor
    /// exists.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.current)
    }

    /// Provides read-only access to the underlying list.
    pub fn view(&self) -> &DoublyList<T> {
        self.list
    }

    /// Inserts a new element before the cursor position; the cursor
    /// keeps pointing to the element it pointed to.
    ///
    /// Inserting at the front position behaves like `push_front`, and
    /// inserting at the trailer position behaves like `push_back`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyList::from_iter([1, 3]);
    ///
    /// let mut cursor = list.cursor_front_mut();
    /// cursor.move_next().unwrap();
    /// cursor.insert(2);
    /// assert_eq!(cursor.current(), Some(&3));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    pub fn insert(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        // SAFETY: `prev_node` and `current` are adjacent nodes of the
        // list, so attaching between them is safe.
        unsafe { self.list.attach_node(self.prev_node(), self.current, node) };
    }

    /// Removes the element the cursor is pointing to and returns it;
    /// the cursor is left at the following element, or at the trailer
    /// if the removed element was the last one.
    ///
    /// Trying to remove at the trailer position is an error, and the
    /// list is not changed.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyList::from_iter([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_front_mut();
    /// cursor.move_next().unwrap();
    /// assert_eq!(cursor.remove(), Ok(2));
    /// assert_eq!(cursor.current(), Some(&3));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 3]);
    /// ```
    pub fn remove(&mut self) -> Result<T, ListError> {
        if self.is_trailer_position() {
            return Err(ListError::InvalidCursor(
                "cannot remove at the trailer position",
            ));
        }
        // SAFETY: `current` is an element node of the list.
        let node = unsafe { self.list.detach_node(self.current) };
        self.current = node.next;
        Ok(Node::into_element(node))
    }

    /// Removes the element before the cursor and returns it; the cursor
    /// keeps pointing to the element it pointed to.
    ///
    /// Trying to remove before the front position is an error, and the
    /// list is not changed.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyList::from_iter([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_end_mut();
    /// assert_eq!(cursor.backspace(), Ok(3));
    /// assert_eq!(cursor.previous(), Some(&2));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2]);
    /// ```
    pub fn backspace(&mut self) -> Result<T, ListError> {
        if self.is_front_position() {
            return Err(ListError::InvalidCursor(
                "nothing precedes the front position",
            ));
        }
        self.current = self.prev_node();
        self.remove()
    }
}

unsafe impl<'a, T: Sync> Send for Cursor<'a, T> {}

unsafe impl<'a, T: Sync> Sync for Cursor<'a, T> {}

unsafe impl<'a, T: Send> Send for CursorMut<'a, T> {}

unsafe impl<'a, T: Sync> Sync for CursorMut<'a, T> {}
