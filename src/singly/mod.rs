use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::ListError;
use crate::singly::cursor::CursorMut;
use crate::singly::iterator::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `SinglyList` is a singly-linked list with owned nodes. Elements
/// can be pushed at both ends and popped at the front in constant time;
/// walking the list is strictly forward.
///
/// The `SinglyList` contains:
/// - `head`, owning the first node. Each node owns its successor
///   through its `next` link, so dropping `head` drops the whole chain;
/// - `tail`, a non-owning alias of the last node, kept so `push_back`
///   runs in constant time;
/// - a length field `len` counting the nodes.
///
/// `head` and `tail` are both vacant exactly when the list is empty
/// ([`INVARIANT_1`](`crate::invariants::INVARIANT_1`)), and `tail.next`
/// is always vacant ([`INVARIANT_2`](`crate::invariants::INVARIANT_2`)).
pub struct SinglyList<T> {
    head: Option<NonNull<Node<T>>>,
    pub(crate) tail: Option<NonNull<Node<T>>>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) struct Node<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
    pub(crate) element: T,
}

impl<T> SinglyList<T> {
    /// Creates an empty `SinglyList`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::SinglyList;
    /// let list: SinglyList<u32> = SinglyList::new();
    /// ```
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `SinglyList` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::SinglyList;
    ///
    /// let mut list = SinglyList::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the `SinglyList`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::SinglyList;
    ///
    /// let mut list = SinglyList::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `SinglyList`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::SinglyList;
    ///
    /// let mut list = SinglyList::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// list.clear();
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
    /// use linked_lists::{ListError, SinglyList};
    ///
    /// let mut list = SinglyList::new();
    /// assert_eq!(list.front(), Err(ListError::EmptyContainer));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    pub fn front(&self) -> Result<&T, ListError> {
        match self.head {
            // SAFETY: `head` is a valid node while the list is borrowed.
            Some(head) => Ok(unsafe { &head.as_ref().element }),
            None => Err(ListError::EmptyContainer),
        }
    }

    /// Provides a mutable reference to the front element, or
    /// [`ListError::EmptyContainer`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::{ListError, SinglyList};
    ///
    /// let mut list = SinglyList::new();
    /// assert_eq!(list.front_mut(), Err(ListError::EmptyContainer));
    ///
    /// list.push_front(1);
    /// if let Ok(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Ok(&5));
    /// ```
    pub fn front_mut(&mut self) -> Result<&mut T, ListError> {
        match self.head {
            // SAFETY: `head` is a valid node, exclusively borrowed.
            Some(mut head) => Ok(unsafe { &mut head.as_mut().element }),
            None => Err(ListError::EmptyContainer),
        }
    }

    /// Provides a reference to the back element, or
    /// [`ListError::EmptyContainer`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::{ListError, SinglyList};
    ///
    /// let mut list = SinglyList::new();
    /// assert_eq!(list.back(), Err(ListError::EmptyContainer));
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Ok(&1));
    /// ```
    pub fn back(&self) -> Result<&T, ListError> {
        match self.tail {
            // SAFETY: `tail` is a valid node while the list is borrowed.
            Some(tail) => Ok(unsafe { &tail.as_ref().element }),
            None => Err(ListError::EmptyContainer),
        }
    }

    /// Provides a mutable reference to the back element, or
    /// [`ListError::EmptyContainer`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::{ListError, SinglyList};
    ///
    /// let mut list = SinglyList::new();
    /// assert_eq!(list.back_mut(), Err(ListError::EmptyContainer));
    ///
    /// list.push_back(1);
    /// if let Ok(x) = list.back_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.back(), Ok(&5));
    /// ```
    pub fn back_mut(&mut self) -> Result<&mut T, ListError> {
        match self.tail {
            // SAFETY: `tail` is a valid node, exclusively borrowed.
            Some(mut tail) => Ok(unsafe { &mut tail.as_mut().element }),
            None => Err(ListError::EmptyContainer),
        }
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
    /// use linked_lists::SinglyList;
    ///
    /// let mut list = SinglyList::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Ok(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// assert_eq!(list.back(), Ok(&2));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        let mut node = Node::new_detached(elt);
        // SAFETY: the node is freshly allocated and not yet linked.
        unsafe { node.as_mut().next = self.head };
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
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
    /// use linked_lists::SinglyList;
    ///
    /// let mut list = SinglyList::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Ok(&3));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        match self.tail {
            // SAFETY: `tail` is the last node, so its `next` is vacant
            // until now.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
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
    /// use linked_lists::SinglyList;
    ///
    /// let mut list = SinglyList::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` is the first node; once `head` is rebound to
        // its successor, nothing else points to it.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.into_element())
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other` by linking this list's
    /// last node to `other`'s first node. After this operation, `other`
    /// becomes empty but stays usable. If `other` is already empty,
    /// nothing happens.
    ///
    /// Appending a list to itself cannot be expressed; the borrow rules
    /// reject it at compile time:
    ///
    /// ```compile_fail
    /// use linked_lists::SinglyList;
    ///
    /// let mut list: SinglyList<i32> = SinglyList::new();
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
    /// use linked_lists::SinglyList;
    ///
    /// let mut list1 = SinglyList::new();
    /// list1.push_back('a');
    ///
    /// let mut list2 = SinglyList::new();
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
        let (other_head, other_tail) = match (other.head.take(), other.tail.take()) {
            (Some(head), Some(tail)) => (head, tail),
            _ => return,
        };
        match self.tail {
            // SAFETY: `tail` is the last node, so its `next` is vacant.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(other_head) },
            None => self.head = Some(other_head),
        }
        self.tail = Some(other_tail);
        self.len += std::mem::replace(&mut other.len, 0);
    }

    /// Reverses the list in place, relinking the nodes rather than
    /// moving the elements.
    ///
    /// A list with less than two elements is left untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1)
    /// memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::SinglyList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = SinglyList::from_iter([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(Vec::from_iter(list), vec![3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        if self.len <= 1 {
            return;
        }
        let mut prev = None;
        let mut current = self.head;
        while let Some(mut node) = current {
            // SAFETY: each node is visited exactly once; its `next`
            // link is read before being rewritten.
            unsafe {
                current = node.as_ref().next;
                node.as_mut().next = prev;
            }
            prev = Some(node);
        }
        self.tail = self.head;
        self.head = prev;
    }

    /// Provides a cursor with editing operations at the first node.
    ///
    /// The cursor is at the end position if the list is empty.
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
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let current = self.head;
        CursorMut::new(self, current)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::SinglyList;
    ///
    /// let mut list = SinglyList::new();
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
    /// use linked_lists::SinglyList;
    ///
    /// let mut list = SinglyList::new();
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

    pub(crate) fn head_node(&self) -> Option<NonNull<Node<T>>> {
        self.head
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: None,
            element,
        })))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T: Debug> Debug for SinglyList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for SinglyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for SinglyList<T> {}

unsafe impl<T: Sync> Sync for SinglyList<T> {}

// Ensure that `SinglyList` and its read-only iterators are covariant in
// their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: SinglyList<&'static str>) -> SinglyList<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}
