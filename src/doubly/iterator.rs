use std::fmt::{Debug, Formatter};
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::doubly::{DoublyList, Node};

/// An iterator over the elements of a `DoublyList`.
///
/// This `struct` is created by [`DoublyList::iter`]. It covers the
/// half-open node range `start..end`, where `end` is the trailer, and
/// shrinks from either side as it is advanced.
pub struct Iter<'a, T> {
    start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    len: usize,
    _marker: PhantomData<&'a Node<T>>,
}

/// A mutable iterator over the elements of a `DoublyList`.
///
/// This `struct` is created by [`DoublyList::iter_mut`]. The list
/// cannot be accessed through any other path while the iterator lives:
///
/// ```compile_fail
/// use linked_lists::DoublyList;
/// use std::iter::FromIterator;
///
/// let mut list = DoublyList::from_iter([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// list.push_back(4);
/// iter.next();
/// ```
pub struct IterMut<'a, T> {
    start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    len: usize,
    _marker: PhantomData<&'a mut Node<T>>,
}

/// An owning iterator over the elements of a `DoublyList`.
///
/// This `struct` is created by the `into_iter` method on `DoublyList`
/// (provided by the [`IntoIterator`] trait).
#[derive(Clone)]
pub struct IntoIter<T> {
    list: DoublyList<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a DoublyList<T>) -> Self {
        Self {
            start: list.front_node(),
            end: list.trailer_node(),
            len: list.len(),
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start` has not reached `end`, so it is an element node.
        let node = unsafe { self.start.as_ref() };
        self.start = node.next;
        self.len -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: the range `start..end` is non-empty, so the node
        // before `end` is an element node.
        self.end = unsafe { self.end.as_ref().prev };
        self.len -= 1;
        Some(unsafe { &self.end.as_ref().element })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut DoublyList<T>) -> Self {
        Self {
            start: list.front_node(),
            end: list.trailer_node(),
            len: list.len(),
            _marker: PhantomData,
        }
    }
}

impl<T: Debug> Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let iter = Iter {
            start: self.start,
            end: self.end,
            len: self.len,
            _marker: PhantomData,
        };
        f.debug_list().entries(iter).finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start` has not reached `end`, so it is an element
        // node, exclusively borrowed by the iterator.
        let node = unsafe { self.start.as_mut() };
        self.start = node.next;
        self.len -= 1;
        Some(&mut node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: the range `start..end` is non-empty, so the node
        // before `end` is an element node, exclusively borrowed by the
        // iterator.
        self.end = unsafe { self.end.as_ref().prev };
        self.len -= 1;
        Some(unsafe { &mut self.end.as_mut().element })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for DoublyList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the list into an iterator yielding elements by value.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a DoublyList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for DoublyList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut cursor = self.cursor_end_mut();
        iter.into_iter().for_each(|elt| cursor.insert(elt));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for DoublyList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for DoublyList<T> {
    /// Converts an array into a `DoublyList`.
    ///
    /// ```
    /// use linked_lists::DoublyList;
    ///
    /// let list1 = DoublyList::from([1, 2, 3, 4]);
    /// let list2: DoublyList<_> = [1, 2, 3, 4].into();
    /// assert_eq!(list1, list2);
    /// ```
    fn from(array: [T; N]) -> Self {
        Self::from_iter(array)
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::doubly::DoublyList;
    use std::iter::FromIterator;

    macro_rules! test_iter {
        ($name:ident, $($iter:tt)*) => {
            #[test]
            #[allow(unused_mut)]
            fn $name() {
                let mut list = DoublyList::from_iter(0..10);
                let mut expected = Vec::from_iter(0..10);
                assert!(list.$($iter)*.eq(expected.$($iter)*));
            }
        };
    }

    test_iter!(iter_forward, iter());
    test_iter!(iter_backward, iter().rev());
    test_iter!(iter_mut_forward, iter_mut());
    test_iter!(iter_mut_backward, iter_mut().rev());
    test_iter!(into_iter_forward, into_iter());
    test_iter!(into_iter_backward, into_iter().rev());

    #[test]
    fn iter_double_ended() {
        let list = DoublyList::from_iter(0..5);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn iter_last() {
        let list = DoublyList::from_iter(0..5);
        assert_eq!(list.iter().last(), Some(&4));
        let empty = DoublyList::<i32>::new();
        assert_eq!(empty.iter().last(), None);
    }

    #[test]
    fn iter_debug() {
        let list = DoublyList::from_iter(0..3);
        assert_eq!(format!("{:?}", list.iter()), "[0, 1, 2]");
        assert_eq!(format!("{:?}", list), "[0, 1, 2]");
    }

    #[test]
    fn iter_mut_modifies() {
        let mut list = DoublyList::from_iter(0..5);
        for elt in list.iter_mut() {
            *elt *= 10;
        }
        assert!(list.iter().eq([0, 10, 20, 30, 40].iter()));
    }

    #[test]
    fn into_iter_drains() {
        let list = DoublyList::from_iter(0..5);
        let mut iter = list.into_iter();
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(Vec::from_iter(iter), vec![1, 2, 3]);
    }

    #[test]
    fn extend_appends() {
        let mut list = DoublyList::from_iter(0..3);
        list.extend(3..6);
        assert!(list.iter().eq(&Vec::from_iter(0..6)));

        list.extend([6, 7].iter());
        assert_eq!(list.len(), 8);
        assert_eq!(list.back(), Ok(&7));
    }

    #[test]
    fn from_array() {
        let list = DoublyList::from([1, 2, 3]);
        assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    }
}
