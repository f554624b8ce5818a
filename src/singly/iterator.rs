use std::fmt::{Debug, Formatter};
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::singly::{Node, SinglyList};

/// An iterator over the elements of a `SinglyList`.
///
/// This `struct` is created by [`SinglyList::iter`]. Since the nodes
/// carry no backward links, the iterator only walks forward.
pub struct Iter<'a, T> {
    current: Option<NonNull<Node<T>>>,
    remaining: usize,
    _marker: PhantomData<&'a Node<T>>,
}

/// A mutable iterator over the elements of a `SinglyList`.
///
/// This `struct` is created by [`SinglyList::iter_mut`]. The list
/// cannot be accessed through any other path while the iterator lives:
///
/// ```compile_fail
/// use linked_lists::SinglyList;
/// use std::iter::FromIterator;
///
/// let mut list = SinglyList::from_iter([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// list.push_back(4);
/// iter.next();
/// ```
pub struct IterMut<'a, T> {
    current: Option<NonNull<Node<T>>>,
    remaining: usize,
    _marker: PhantomData<&'a mut Node<T>>,
}

/// An owning iterator over the elements of a `SinglyList`.
///
/// This `struct` is created by the `into_iter` method on `SinglyList`
/// (provided by the [`IntoIterator`] trait).
#[derive(Clone)]
pub struct IntoIter<T> {
    list: SinglyList<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a SinglyList<T>) -> Self {
        Self {
            current: list.head_node(),
            remaining: list.len(),
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
        let node = self.current?;
        // SAFETY: `current` is a valid node of the borrowed list.
        let node = unsafe { node.as_ref() };
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut SinglyList<T>) -> Self {
        Self {
            current: list.head_node(),
            remaining: list.len(),
            _marker: PhantomData,
        }
    }
}

impl<T: Debug> Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let iter = Iter {
            current: self.current,
            remaining: self.remaining,
            _marker: PhantomData,
        };
        f.debug_list().entries(iter).finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.current?;
        // SAFETY: `current` is a valid node, exclusively borrowed by
        // the iterator, and it is visited exactly once.
        let node = unsafe { node.as_mut() };
        self.current = node.next;
        self.remaining -= 1;
        Some(&mut node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
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

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SinglyList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the list into an iterator yielding elements by value.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SinglyList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for SinglyList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|elt| self.push_back(elt));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for SinglyList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for SinglyList<T> {
    /// Converts an array into a `SinglyList`.
    ///
    /// ```
    /// use linked_lists::SinglyList;
    ///
    /// let list1 = SinglyList::from([1, 2, 3, 4]);
    /// let list2: SinglyList<_> = [1, 2, 3, 4].into();
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
    use crate::singly::SinglyList;
    use std::iter::FromIterator;

    macro_rules! test_iter {
        ($name:ident, $($iter:tt)*) => {
            #[test]
            #[allow(unused_mut)]
            fn $name() {
                let mut list = SinglyList::from_iter(0..10);
                let mut expected = Vec::from_iter(0..10);
                assert!(list.$($iter)*.eq(expected.$($iter)*));
            }
        };
    }

    test_iter!(iter_forward, iter());
    test_iter!(iter_mut_forward, iter_mut());
    test_iter!(into_iter_forward, into_iter());

    #[test]
    fn iter_is_fused() {
        let list = SinglyList::from_iter(0..3);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn iter_debug() {
        let list = SinglyList::from_iter(0..3);
        assert_eq!(format!("{:?}", list.iter()), "[0, 1, 2]");
        assert_eq!(format!("{:?}", list), "[0, 1, 2]");
    }

    #[test]
    fn iter_mut_modifies() {
        let mut list = SinglyList::from_iter(0..5);
        for elt in list.iter_mut() {
            *elt *= 10;
        }
        assert!(list.iter().eq([0, 10, 20, 30, 40].iter()));
    }

    #[test]
    fn into_iter_drains() {
        let list = SinglyList::from_iter(0..5);
        let mut iter = list.into_iter();
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.size_hint(), (4, Some(4)));
        assert_eq!(Vec::from_iter(iter), vec![1, 2, 3, 4]);
    }

    #[test]
    fn extend_appends() {
        let mut list = SinglyList::from_iter(0..3);
        list.extend(3..6);
        assert!(list.iter().eq(&Vec::from_iter(0..6)));

        list.extend([6, 7].iter());
        assert_eq!(list.len(), 8);
        assert_eq!(list.back(), Ok(&7));
    }

    #[test]
    fn from_array() {
        let list = SinglyList::from([1, 2, 3]);
        assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    }
}
