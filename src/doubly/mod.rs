use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::doubly::cursor::{Cursor, CursorMut};
use crate::doubly::iterator::{IntoIter, Iter, IterMut};
use crate::error::ListError;

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `DoublyList` is a doubly-linked list with owned nodes, bracketed
/// by a pair of permanent sentinel nodes. It allows inserting and
/// removing elements at any cursor position in constant time. In
/// compromise, reaching a position takes *O*(*n*) time.
///
/// The `DoublyList` contains:
/// - `header` and `trailer`, the two sentinel nodes. They are allocated
///   when the list is created, live as long as the list, and are never
///   exposed to callers;
/// - a length field `len` counting the element nodes between the
///   sentinels.
///
/// An empty list links `header` straight to `trailer`. The outward
/// links (`header.prev` and `trailer.next`) are self-links and are
/// never followed.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of element nodes, both inclusive;
/// - `start..end`: a half-open range of nodes, left inclusive and right
///   exclusive (probably the trailer).
pub struct DoublyList<T> {
    header: Box<Node<Erased>>,
    trailer: Box<Node<Erased>>,
    /// the number of element nodes in the list
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

// The links come first so that `Node<Erased>` and `Node<T>` share their
// link layout; a sentinel is only ever read through its link fields.
#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

struct Erased;

/// Nodes fragment detached from a list, used in list splicing.
///
/// When detached from a list, reading of `front.prev` and `back.next`
/// is invalid.
pub(crate) struct DetachedNodes<T> {
    pub(crate) front: NonNull<Node<T>>,
    pub(crate) back: NonNull<Node<T>>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

// private methods
impl<T> DoublyList<T> {
    pub(crate) fn header_node(&self) -> NonNull<Node<T>> {
        NonNull::from(self.header.as_ref()).cast()
    }
    pub(crate) fn trailer_node(&self) -> NonNull<Node<T>> {
        NonNull::from(self.trailer.as_ref()).cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `header.next` is always valid (either the first
        // element, or the trailer when the list is empty).
        unsafe { self.header_node().as_ref().next }
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `trailer.prev` is always valid (either the last
        // element, or the header when the list is empty).
        unsafe { self.trailer_node().as_ref().prev }
    }

    pub(crate) unsafe fn connect(
        &mut self,
        mut prev: NonNull<Node<T>>,
        mut next: NonNull<Node<T>>,
    ) {
        prev.as_mut().next = next;
        next.as_mut().prev = prev;
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` is an
    /// element node of the list.
    ///
    /// If `node` is a sentinel or does not belong to the list, this
    /// function call will make the list ill-formed, breaking
    /// [`INVARIANT_4`](`crate::invariants::INVARIANT_4`).
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        self.len -= 1;
        let node = Box::from_raw(node.as_ptr());
        self.connect(node.prev, node.next);
        node
    }

    /// Attach a single node `node` to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the list, or whether `prev` and `next` are adjacent
    /// (only in `#[cfg(debug_assertions)]`).
    ///
    /// If `prev` and `next` do not belong to the list, or they are not
    /// adjacent nodes, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        self.connect(prev, node);
        self.connect(node, next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }

    /// Detach a range of nodes `front..=back` from the list, and return
    /// the detached nodes.
    ///
    /// It is unsafe because it does not check whether `front..=back` is
    /// a valid range of element nodes (i.e. `front` must **NOT** be at
    /// the right of `back`, and neither may be a sentinel), or whether
    /// it belongs to the list, or whether `len` is the length of the
    /// range.
    ///
    /// If `front..=back` is not a valid range or it does not belong to
    /// the list, this function call will make the list ill-formed.
    pub(crate) unsafe fn detach_nodes(
        &mut self,
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
        len: usize,
    ) -> DetachedNodes<T> {
        self.len -= len;
        self.connect(front.as_ref().prev, back.as_ref().next);
        DetachedNodes::new(front, back, len)
    }

    /// Attach a range of detached nodes to the list, between `prev` and
    /// `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the list, or whether `prev` and `next` are adjacent
    /// (only in `#[cfg(debug_assertions)]`).
    ///
    /// If `prev` and `next` do not belong to the list, or they are not
    /// adjacent nodes, this function call will make the list ill-formed,
    /// breaking [`INVARIANT_4`](`crate::invariants::INVARIANT_4`).
    pub(crate) unsafe fn attach_nodes(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        detached: DetachedNodes<T>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        self.connect(prev, detached.front);
        self.connect(detached.back, next);
        self.len += detached.len;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, detached.front);
            assert_adjacent(detached.back, next);
        }
    }

    /// Detach all element nodes from the list, and return the detached
    /// nodes, or return `None` if the list is empty.
    ///
    /// It is safe because `self.front_node()..=self.back_node()` is a
    /// valid range of element nodes whenever the list is non-empty.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        if self.is_empty() {
            return None;
        }
        unsafe { Some(self.detach_nodes(self.front_node(), self.back_node(), self.len)) }
    }
}

impl<T> DoublyList<T> {
    /// Create an empty `DoublyList`.
    ///
    /// Both sentinels are allocated and linked to each other before the
    /// list is handed out, so every list starts in a well-formed empty
    /// state.
    ///
    /// # Examples
    /// ```
    /// use linked_lists::DoublyList;
    /// let list: DoublyList<u32> = DoublyList::new();
    /// ```
    pub fn new() -> Self {
        let mut list = Self {
            header: new_sentinel(),
            trailer: new_sentinel(),
            len: 0,
            _marker: PhantomData,
        };
        let (header, trailer) = (list.header_node(), list.trailer_node());
        // SAFETY: both sentinels are freshly allocated, and relinking
        // their inward sides establishes the empty-list shape. The
        // outward sides keep their self-links and are never followed.
        unsafe { list.connect(header, trailer) };
        list
    }

    /// Returns `true` if the `DoublyList` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyList;
    ///
    /// let mut list = DoublyList::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.trailer_node()
    }

    /// Returns the length of the `DoublyList`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyList;
    ///
    /// let mut list = DoublyList::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `DoublyList`.
    ///
    /// The list stays usable afterwards; the sentinels are not touched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyList;
    ///
    /// let mut list = DoublyList::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or
    /// [`ListError::EmptyContainer`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::{DoublyList, ListError};
    ///
    /// let mut list = DoublyList::new();
    /// assert_eq!(list.front(), Err(ListError::EmptyContainer));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Result<&T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyContainer);
        }
        // SAFETY: the list is not empty, so `front_node` is an element node.
        Ok(unsafe { &self.front_node().as_ref().element })
    }

    /// Provides a mutable reference to the front element, or
    /// [`ListError::EmptyContainer`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::{DoublyList, ListError};
    ///
    /// let mut list = DoublyList::new();
    /// assert_eq!(list.front_mut(), Err(ListError::EmptyContainer));
    ///
    /// list.push_front(1);
    /// if let Ok(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Ok(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyContainer);
        }
        // SAFETY: the list is not empty, so `front_node` is an element node.
        Ok(unsafe { &mut self.front_node().as_mut().element })
    }

    /// Provides a reference to the back element, or
    /// [`ListError::EmptyContainer`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::{DoublyList, ListError};
    ///
    /// let mut list = DoublyList::new();
    /// assert_eq!(list.back(), Err(ListError::EmptyContainer));
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Ok(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Result<&T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyContainer);
        }
        // SAFETY: the list is not empty, so `back_node` is an element node.
        Ok(unsafe { &self.back_node().as_ref().element })
    }

    /// Provides a mutable reference to the back element, or
    /// [`ListError::EmptyContainer`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::{DoublyList, ListError};
    ///
    /// let mut list = DoublyList::new();
    /// assert_eq!(list.back_mut(), Err(ListError::EmptyContainer));
    ///
    /// list.push_back(1);
    /// if let Ok(x) = list.back_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.back(), Ok(&5));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyContainer);
        }
        // SAFETY: the list is not empty, so `back_node` is an element node.
        Ok(unsafe { &mut self.back_node().as_mut().element })
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyList;
    ///
    /// let mut list = DoublyList::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Ok(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.cursor_front_mut().insert(elt);
    }

    /// Removes the first element and returns it, or `None` if the list
    /// is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyList;
    ///
    /// let mut list = DoublyList::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.cursor_front_mut().remove().ok()
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyList;
    ///
    /// let mut list = DoublyList::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Ok(&3));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        self.cursor_end_mut().insert(elt);
    }

    /// Removes the last element from the list and returns it, or `None`
    /// if it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyList;
    ///
    /// let mut list = DoublyList::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        self.cursor_end_mut().backspace().ok()
    }

    /// Provides a cursor at the first element.
    ///
    /// The cursor is pointing to the trailer if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyList;
    /// use std::iter::FromIterator;
    ///
    /// let list = DoublyList::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_front();
    /// assert_eq!(cursor.current(), Some(&1));
    /// ```
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node())
    }

    /// Provides a cursor at the trailer, one past the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyList;
    /// use std::iter::FromIterator;
    ///
    /// let list = DoublyList::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.previous(), Some(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.trailer_node())
    }

    /// Provides a cursor with editing operations at the first element.
    ///
    /// The cursor is pointing to the trailer if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyList::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_front_mut();
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&5));
    /// ```
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let front = self.front_node();
        CursorMut::new(self, front)
    }

    /// Provides a cursor with editing operations at the trailer, one
    /// past the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyList::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_end_mut();
    ///
    /// if let Some(x) = cursor.previous_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.previous(), Some(&15));
    /// ```
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let trailer = self.trailer_node();
        CursorMut::new(self, trailer)
    }

    /// Provides a forward iterator.
    ///
    /// The iterator visits the element nodes only; the sentinels are
    /// never yielded.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyList;
    ///
    /// let mut list = DoublyList::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyList;
    ///
    /// let mut list = DoublyList::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), Some(&12));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other` by splicing them between
    /// this list's last element and its trailer, and relinks `other`'s
    /// sentinels to each other. After this operation, `other` becomes
    /// empty but stays usable. If `other` is already empty, nothing
    /// happens.
    ///
    /// Appending a list to itself cannot be expressed; the borrow rules
    /// reject it at compile time:
    ///
    /// ```compile_fail
    /// use linked_lists::DoublyList;
    ///
    /// let mut list: DoublyList<i32> = DoublyList::new();
    /// list.append(&mut list);
    /// ```
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyList;
    ///
    /// let mut list1 = DoublyList::new();
    /// list1.push_back('a');
    ///
    /// let mut list2 = DoublyList::new();
    /// list2.push_back('b');
    /// list2.push_back('c');
    ///
    /// list1.append(&mut list2);
    ///
    /// let mut iter = list1.iter();
    /// assert_eq!(iter.next(), Some(&'a'));
    /// assert_eq!(iter.next(), Some(&'b'));
    /// assert_eq!(iter.next(), Some(&'c'));
    /// assert!(iter.next().is_none());
    ///
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // `self.back_node()` and `self.trailer_node()` are valid
            // nodes in the list and they are adjacent, so it is safe.
            unsafe { self.attach_nodes(self.back_node(), self.trailer_node(), detached) }
        }
    }
}

impl<T: Debug> Debug for DoublyList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for DoublyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        // The links start out dangling and are patched by `attach_node`
        // (or `connect`) before they are ever read.
        NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        })))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T> DetachedNodes<T> {
    /// It is unsafe because it must be guaranteed that `front..=back`
    /// is a valid range of element nodes and its length must be equal
    /// to `len`.
    unsafe fn new(front: NonNull<Node<T>>, back: NonNull<Node<T>>, len: usize) -> Self {
        debug_assert!(len > 0, "Cannot detach nodes of length 0");
        Self {
            front,
            back,
            len,
            _marker: PhantomData,
        }
    }
}

fn new_sentinel() -> Box<Node<Erased>> {
    let mut sentinel = Box::new(Node {
        next: NonNull::dangling(),
        prev: NonNull::dangling(),
        element: Erased,
    });
    // Self-link both sides so the sentinel is well-formed on its own;
    // `DoublyList::new` relinks the inward sides.
    let ptr = NonNull::from(sentinel.as_mut());
    sentinel.next = ptr;
    sentinel.prev = ptr;
    sentinel
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl<T> Drop for DoublyList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for DoublyList<T> {}

unsafe impl<T: Sync> Sync for DoublyList<T> {}

// Ensure that `DoublyList` and its read-only iterators are covariant in
// their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: DoublyList<&'static str>) -> DoublyList<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::doubly::DoublyList;
    use crate::error::ListError;
    use std::cell::RefCell;
    use std::fmt::Debug;
    use std::iter::FromIterator;

    #[test]
    fn list_create() {
        let mut list = DoublyList::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = DoublyList::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = DoublyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), Err(ListError::EmptyContainer));
        assert_eq!(list.back(), Err(ListError::EmptyContainer));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(1);
        assert_eq!(list.back(), Ok(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.back(), Ok(&3));
        assert_eq!(list.front(), Ok(&2));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));

        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), Err(ListError::EmptyContainer));
        assert_eq!(list.back(), Err(ListError::EmptyContainer));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_append() {
        fn check_append<T, I1, I2, I3>(list: I1, other: I2, appended: I3)
        where
            T: Clone + Eq + Debug,
            I1: IntoIterator<Item = T>,
            I2: IntoIterator<Item = T>,
            I3: IntoIterator<Item = T>,
        {
            let mut list = DoublyList::from_iter(list);
            let mut other = DoublyList::from_iter(other);
            let appended = DoublyList::from_iter(appended);

            let expected_len = list.len() + other.len();
            list.append(&mut other);
            assert!(other.is_empty());
            assert_eq!(other.len(), 0);
            assert_eq!(list, appended);
            assert_eq!(list.len(), expected_len);

            // The emptied list stays usable.
            other.append(&mut list);
            assert_eq!(other.len(), expected_len);
            assert!(list.is_empty());
        }
        check_append(0..5, 5..7, 0..7);
        check_append(0..5, None, 0..5);
        check_append(0..1, 1..2, 0..2);
        check_append(None, 0..2, 0..2);
        check_append::<usize, _, _, _>(None, None, None);
    }

    #[test]
    fn list_append_keeps_order() {
        let mut list = DoublyList::from_iter([100, 200]);
        let mut other = DoublyList::from_iter([300, 400]);

        list.append(&mut other);
        assert_eq!(list.len(), 4);
        assert!(other.is_empty());
        assert_eq!(Vec::from_iter(list), vec![100, 200, 300, 400]);
    }

    #[test]
    fn cursor_insert_and_remove() {
        let mut list = DoublyList::from_iter([1, 2, 3]);

        let mut cursor = list.cursor_front_mut();
        cursor.move_next().unwrap();
        cursor.insert(10);
        // The cursor stays on the element it pointed to.
        assert_eq!(cursor.current(), Some(&2));

        // Removal hands back the element and leaves the cursor on the
        // following one.
        assert_eq!(cursor.remove(), Ok(2));
        assert_eq!(cursor.current(), Some(&3));

        cursor.move_next().unwrap();
        assert!(cursor.current().is_none());
        assert!(matches!(
            cursor.remove(),
            Err(ListError::InvalidCursor(_))
        ));

        assert_eq!(Vec::from_iter(list), vec![1, 10, 3]);
    }

    #[test]
    fn cursor_insert_at_ends() {
        let mut list = DoublyList::from_iter([1, 2, 3]);

        // Inserting at the front position behaves like `push_front`.
        list.cursor_front_mut().insert(0);
        // Inserting at the trailer position behaves like `push_back`.
        list.cursor_end_mut().insert(4);

        assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn cursor_move_errors() {
        let list = DoublyList::from_iter([1, 2]);

        let mut cursor = list.cursor_front();
        assert!(matches!(
            cursor.move_prev(),
            Err(ListError::InvalidCursor(_))
        ));
        assert!(cursor.move_next().is_ok());
        assert!(cursor.move_next().is_ok());
        assert_eq!(cursor.current(), None);
        assert!(matches!(
            cursor.move_next(),
            Err(ListError::InvalidCursor(_))
        ));
        // A failed move leaves the cursor where it was.
        assert_eq!(cursor.previous(), Some(&2));
    }

    #[test]
    fn list_clone_is_independent() {
        let mut list = DoublyList::from_iter(0..5);
        let mut copy = list.clone();

        *copy.front_mut().unwrap() = 100;
        copy.push_back(5);

        assert_eq!(Vec::from_iter(list.iter().copied()), Vec::from_iter(0..5));
        assert_eq!(copy.len(), 6);

        drop(list);
        assert_eq!(copy.front(), Ok(&100));
    }

    #[test]
    fn list_take_and_swap() {
        let mut list = DoublyList::from_iter(0..5);
        let taken = std::mem::take(&mut list);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(Vec::from_iter(taken), Vec::from_iter(0..5));

        // The emptied source stays usable.
        list.push_back(42);
        assert_eq!(list.front(), Ok(&42));

        let mut a = DoublyList::from_iter(0..3);
        let mut b = DoublyList::from_iter(10..15);
        std::mem::swap(&mut a, &mut b);
        assert_eq!(Vec::from_iter(a.iter().copied()), Vec::from_iter(10..15));
        assert_eq!(Vec::from_iter(b.iter().copied()), Vec::from_iter(0..3));

        a.push_back(99);
        b.push_front(-1);
        assert_eq!(a.back(), Ok(&99));
        assert_eq!(b.front(), Ok(&-1));
    }

    #[test]
    fn list_len_matches_traversal() {
        let mut list = DoublyList::new();
        assert_eq!(list.len(), 0);

        list.push_back(1);
        assert_eq!(list.len(), 1);

        list.pop_front();
        assert_eq!(list.len(), 0);

        list.append(&mut DoublyList::from_iter(0..5));
        assert_eq!(list.len(), 5);
        assert_eq!(list.iter().count(), 5);

        let mut cursor = list.cursor_front_mut();
        cursor.move_next().unwrap();
        cursor.remove().unwrap();
        assert_eq!(list.len(), 4);
        assert_eq!(list.iter().count(), 4);

        list.clear();
        assert_eq!(list.len(), 0);
        assert_eq!(list.iter().count(), 0);
    }

    // proptest shrinks poorly under miri's slowdown, so these only run
    // natively.
    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::VecDeque;

        #[derive(Clone, Debug)]
        enum Op {
            PushFront(i32),
            PushBack(i32),
            PopFront,
            PopBack,
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                2 => any::<i32>().prop_map(Op::PushFront),
                2 => any::<i32>().prop_map(Op::PushBack),
                1 => Just(Op::PopFront),
                1 => Just(Op::PopBack),
            ]
        }

        proptest! {
            #[test]
            fn ops_match_reference_deque(ops in proptest::collection::vec(op(), 0..256)) {
                let mut list = DoublyList::new();
                let mut model = VecDeque::new();
                for op in ops {
                    match op {
                        Op::PushFront(x) => {
                            list.push_front(x);
                            model.push_front(x);
                        }
                        Op::PushBack(x) => {
                            list.push_back(x);
                            model.push_back(x);
                        }
                        Op::PopFront => prop_assert_eq!(list.pop_front(), model.pop_front()),
                        Op::PopBack => prop_assert_eq!(list.pop_back(), model.pop_back()),
                    }
                    prop_assert_eq!(list.len(), model.len());
                    prop_assert_eq!(list.front().ok(), model.front());
                    prop_assert_eq!(list.back().ok(), model.back());
                }
                prop_assert_eq!(list.iter().count(), model.len());
                prop_assert!(list.iter().eq(model.iter()));
            }
        }
    }
}
