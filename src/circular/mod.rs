use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::circular::iterator::{IntoIter, Iter, IterMut};
use crate::error::ListError;

pub mod iterator;

mod algorithms;

/// The `CircularList` is a circularly-linked list with owned nodes,
/// held by a single link to its last node. The nodes form a closed
/// ring: every `next` link is occupied, and `tail.next` is the front
/// node ([`INVARIANT_6`](`crate::invariants::INVARIANT_6`)).
///
/// The `CircularList` contains:
/// - `tail`, pointing to the last node, vacant exactly when the list is
///   empty. Holding the *last* node gives constant-time access to both
///   ends of the ring through `tail` and `tail.next`;
/// - a length field `len` counting the nodes.
///
/// Unlike the owning `head` chain of a `SinglyList`, the ring has no
/// terminating link, so the nodes are freed by counted traversal
/// rather than by chasing `next` until it runs out.
pub struct CircularList<T> {
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) element: T,
}

impl<T> CircularList<T> {
    /// Creates an empty `CircularList`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::CircularList;
    /// let list: CircularList<u32> = CircularList::new();
    /// ```
    pub fn new() -> Self {
        Self {
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `CircularList` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::CircularList;
    ///
    /// let mut list = CircularList::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tail.is_none()
    }

    /// Returns the length of the `CircularList`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::CircularList;
    ///
    /// let mut list = CircularList::new();
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

    /// Removes all elements from the `CircularList`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::CircularList;
    ///
    /// let mut list = CircularList::new();
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
    /// use linked_lists::{CircularList, ListError};
    ///
    /// let mut list = CircularList::new();
    /// assert_eq!(list.front(), Err(ListError::EmptyContainer));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    pub fn front(&self) -> Result<&T, ListError> {
        match self.tail {
            // SAFETY: the ring is closed, so `tail.next` is the front node.
            Some(tail) => Ok(unsafe { &tail.as_ref().next.as_ref().element }),
            None => Err(ListError::EmptyContainer),
        }
    }

    /// Provides a mutable reference to the front element, or
    /// [`ListError::EmptyContainer`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::{CircularList, ListError};
    ///
    /// let mut list = CircularList::new();
    /// assert_eq!(list.front_mut(), Err(ListError::EmptyContainer));
    ///
    /// list.push_front(1);
    /// if let Ok(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Ok(&5));
    /// ```
    pub fn front_mut(&mut self) -> Result<&mut T, ListError> {
        match self.tail {
            Some(tail) => {
                // SAFETY: the ring is closed, so `tail.next` is the
                // front node, exclusively borrowed.
                let mut front = unsafe { tail.as_ref().next };
                Ok(unsafe { &mut front.as_mut().element })
            }
            None => Err(ListError::EmptyContainer),
        }
    }

    /// Provides a reference to the back element, or
    /// [`ListError::EmptyContainer`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::{CircularList, ListError};
    ///
    /// let mut list = CircularList::new();
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
    /// use linked_lists::{CircularList, ListError};
    ///
    /// let mut list = CircularList::new();
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

    /// Adds an element first in the list, right after `tail` in ring
    /// order.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::CircularList;
    ///
    /// let mut list = CircularList::new();
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
        match self.tail {
            // SAFETY: the new node takes over the front position; the
            // ring stays closed through it.
            Some(mut tail) => unsafe {
                node.as_mut().next = tail.as_ref().next;
                tail.as_mut().next = node;
            },
            None => {
                // A lone node closes the ring on itself.
                unsafe { node.as_mut().next = node };
                self.tail = Some(node);
            }
        }
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
    /// use linked_lists::CircularList;
    ///
    /// let mut list = CircularList::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Ok(&3));
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        // The new node sits right after `tail`; advancing `tail` onto
        // it turns the front insertion into a back insertion.
        self.push_front(elt);
        self.rotate();
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
    /// use linked_lists::CircularList;
    ///
    /// let mut list = CircularList::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let mut tail = self.tail?;
        // SAFETY: the ring is closed, so `tail.next` is the front node.
        let front = unsafe { tail.as_ref().next };
        if front == tail {
            self.tail = None;
        } else {
            // SAFETY: unlinking the front node reads its successor
            // before the node is freed below.
            unsafe { tail.as_mut().next = front.as_ref().next };
        }
        // SAFETY: nothing points to the front node any more.
        let node = unsafe { Box::from_raw(front.as_ptr()) };
        self.len -= 1;
        Some(node.into_element())
    }

    /// Advances the ring by one position: the front element moves to
    /// the back, and every other element moves one position forward. An
    /// empty list is left untouched.
    ///
    /// Only the `tail` link moves; no node is relinked.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::CircularList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = CircularList::from_iter([1, 2, 3]);
    ///
    /// list.rotate();
    /// assert_eq!(list.front(), Ok(&2));
    /// assert_eq!(list.back(), Ok(&1));
    /// assert_eq!(Vec::from_iter(list), vec![2, 3, 1]);
    /// ```
    pub fn rotate(&mut self) {
        if let Some(tail) = self.tail {
            // SAFETY: the ring is closed, so `tail.next` is always valid.
            self.tail = Some(unsafe { tail.as_ref().next });
        }
    }

    /// Splits the ring into its two order-preserving halves, returning
    /// them as a pair of independent lists and leaving this list empty
    /// but usable.
    ///
    /// A list with an odd number of elements cannot be split in half;
    /// an error is returned and the list is not changed. Splitting an
    /// empty list yields two empty lists.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1)
    /// memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::CircularList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = CircularList::from_iter(1..=6);
    ///
    /// let (first, second) = list.split_even().unwrap();
    /// assert!(list.is_empty());
    /// assert_eq!(Vec::from_iter(first), vec![1, 2, 3]);
    /// assert_eq!(Vec::from_iter(second), vec![4, 5, 6]);
    /// ```
    ///
    /// ```
    /// use linked_lists::{CircularList, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = CircularList::from_iter(1..=7);
    ///
    /// assert!(matches!(
    ///     list.split_even(),
    ///     Err(ListError::InvalidOperation(_))
    /// ));
    /// assert_eq!(list.len(), 7);
    /// ```
    pub fn split_even(&mut self) -> Result<(Self, Self), ListError> {
        if self.len % 2 != 0 {
            return Err(ListError::InvalidOperation(
                "cannot split a list with an odd number of elements",
            ));
        }
        let mut tail_second = match self.tail.take() {
            Some(tail) => tail,
            None => return Ok((Self::new(), Self::new())),
        };
        let half = self.len / 2;
        self.len = 0;

        // `tail` already closes the second half; walking `half - 1`
        // steps from the front lands on the last node of the first.
        let front_first = unsafe { tail_second.as_ref().next };
        let mut tail_first = front_first;
        for _ in 0..half - 1 {
            // SAFETY: the walk stays within the closed ring.
            tail_first = unsafe { tail_first.as_ref().next };
        }
        let front_second = unsafe { tail_first.as_ref().next };

        // Close each half into its own ring.
        unsafe {
            tail_first.as_mut().next = front_first;
            tail_second.as_mut().next = front_second;
        }

        let first = Self {
            tail: Some(tail_first),
            len: half,
            _marker: PhantomData,
        };
        let second = Self {
            tail: Some(tail_second),
            len: half,
            _marker: PhantomData,
        };
        Ok((first, second))
    }

    /// Provides a forward iterator, starting at the front node and
    /// going round the ring exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::CircularList;
    ///
    /// let mut list = CircularList::new();
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

    /// Provides a forward iterator with mutable references, starting at
    /// the front node and going round the ring exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::CircularList;
    ///
    /// let mut list = CircularList::new();
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

    pub(crate) fn front_node(&self) -> Option<NonNull<Node<T>>> {
        // SAFETY: the ring is closed, so `tail.next` is the front node.
        self.tail.map(|tail| unsafe { tail.as_ref().next })
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        // The link starts out dangling and is patched by the caller
        // before it is ever read.
        NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            element,
        })))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T: Debug> Debug for CircularList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for CircularList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for CircularList<T> {}

unsafe impl<T: Sync> Sync for CircularList<T> {}

// Ensure that `CircularList` and its read-only iterators are covariant
// in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: CircularList<&'static str>) -> CircularList<&'a str> {
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
    use crate::circular::CircularList;
    use crate::error::ListError;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    #[test]
    fn list_create() {
        let mut list = CircularList::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_front(), Some(1));
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
        let mut list = CircularList::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = CircularList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), Err(ListError::EmptyContainer));
        assert_eq!(list.back(), Err(ListError::EmptyContainer));
        assert_eq!(list.pop_front(), None);

        list.push_back(1);
        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.back(), Ok(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert!(list.is_empty());

        list.push_front(2);
        list.push_front(1);
        list.push_back(3);
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.back(), Ok(&3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), Some(3));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.len(), 0);

        // The ring closes again once the list has drained.
        list.push_back(4);
        assert_eq!(list.front(), Ok(&4));
        assert_eq!(list.back(), Ok(&4));
    }

    #[test]
    fn list_rotate() {
        let mut list = CircularList::<i32>::new();
        list.rotate();
        assert!(list.is_empty());

        list.push_back(1);
        list.rotate();
        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.back(), Ok(&1));

        let mut list = CircularList::from_iter(1..=4);
        list.rotate();
        assert!(list.iter().eq([2, 3, 4, 1].iter()));
        assert_eq!(list.front(), Ok(&2));
        assert_eq!(list.back(), Ok(&1));

        // A full cycle of rotations restores the original order.
        for _ in 0..3 {
            list.rotate();
        }
        assert!(list.iter().eq([1, 2, 3, 4].iter()));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn split_even_in_half() {
        let mut list = CircularList::from_iter(1..=6);

        let (first, second) = list.split_even().unwrap();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 3);
        assert_eq!(Vec::from_iter(first), vec![1, 2, 3]);
        assert_eq!(Vec::from_iter(second), vec![4, 5, 6]);
    }

    #[test]
    fn split_even_rejects_odd_length() {
        let mut list = CircularList::from_iter(1..=7);

        assert!(matches!(
            list.split_even(),
            Err(ListError::InvalidOperation(_))
        ));
        // The failed split leaves the list untouched.
        assert_eq!(list.len(), 7);
        assert!(list.iter().eq(&Vec::from_iter(1..=7)));
        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.back(), Ok(&7));

        // The ring still works after the rejected split.
        list.rotate();
        assert_eq!(list.front(), Ok(&2));
    }

    #[test]
    fn split_even_smallest_ring() {
        let mut list = CircularList::from_iter([1, 2]);

        let (first, second) = list.split_even().unwrap();
        assert_eq!(first.front(), Ok(&1));
        assert_eq!(first.back(), Ok(&1));
        assert_eq!(second.front(), Ok(&2));
        assert_eq!(second.back(), Ok(&2));
        assert_eq!(Vec::from_iter(first), vec![1]);
        assert_eq!(Vec::from_iter(second), vec![2]);
    }

    #[test]
    fn split_even_empty() {
        let mut list = CircularList::<i32>::new();

        let (first, second) = list.split_even().unwrap();
        assert!(first.is_empty());
        assert!(second.is_empty());
        assert!(list.is_empty());
    }

    #[test]
    fn split_halves_are_independent() {
        let mut list = CircularList::from_iter(1..=6);

        let (mut first, mut second) = list.split_even().unwrap();
        first.push_back(10);
        second.pop_front();
        assert_eq!(Vec::from_iter(first), vec![1, 2, 3, 10]);
        assert_eq!(Vec::from_iter(second), vec![5, 6]);

        // The emptied ring stays usable.
        list.push_back(0);
        assert_eq!(list.front(), Ok(&0));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn list_clone_is_independent() {
        let mut list = CircularList::from_iter(0..5);
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
        let mut list = CircularList::from_iter(0..5);
        let taken = std::mem::take(&mut list);
        assert!(list.is_empty());
        assert_eq!(Vec::from_iter(taken), Vec::from_iter(0..5));

        // The emptied source stays usable.
        list.push_back(42);
        assert_eq!(list.front(), Ok(&42));

        let mut a = CircularList::from_iter(0..3);
        let mut b = CircularList::from_iter(10..15);
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
        let mut list = CircularList::new();
        assert_eq!(list.len(), 0);

        list.push_back(1);
        assert_eq!(list.len(), 1);

        list.pop_front();
        assert_eq!(list.len(), 0);

        list.extend(0..6);
        assert_eq!(list.len(), 6);
        assert_eq!(list.iter().count(), 6);

        list.rotate();
        assert_eq!(list.len(), 6);
        assert_eq!(list.iter().count(), 6);

        let (first, second) = list.split_even().unwrap();
        assert_eq!(list.len(), 0);
        assert_eq!(first.len(), first.iter().count());
        assert_eq!(second.len(), second.iter().count());

        list.clear();
        assert_eq!(list.len(), 0);
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
            Rotate,
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                3 => any::<i32>().prop_map(Op::PushFront),
                3 => any::<i32>().prop_map(Op::PushBack),
                2 => Just(Op::PopFront),
                2 => Just(Op::Rotate),
            ]
        }

        proptest! {
            #[test]
            fn ops_match_reference_deque(ops in proptest::collection::vec(op(), 0..256)) {
                let mut list = CircularList::new();
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
                        Op::Rotate => {
                            list.rotate();
                            if !model.is_empty() {
                                model.rotate_left(1);
                            }
                        }
                    }
                    prop_assert_eq!(list.len(), model.len());
                    prop_assert_eq!(list.front().ok(), model.front());
                    prop_assert_eq!(list.back().ok(), model.back());
                }
                prop_assert!(list.iter().eq(model.iter()));
            }
        }
    }
}
