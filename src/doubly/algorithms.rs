use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::doubly::DoublyList;

impl<T: PartialEq> PartialEq for DoublyList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for DoublyList<T> {}

impl<T: PartialOrd> PartialOrd for DoublyList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for DoublyList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for DoublyList<T> {
    /// Clones the list by allocating a fresh node for every element;
    /// the clone shares no storage with the original.
    fn clone(&self) -> Self {
        Self::from_iter(self.iter().cloned())
    }
}

impl<T: Hash> Hash for DoublyList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T: PartialEq> DoublyList<T> {
    /// Returns `true` if the `DoublyList` contains an element equal to
    /// the given value.
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
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool {
        self.iter().any(|elt| elt == x)
    }
}

#[cfg(test)]
mod tests {
    use crate::doubly::DoublyList;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn list_compare() {
        let a = DoublyList::from_iter([1, 2, 3]);
        let b = DoublyList::from_iter([1, 2, 3]);
        let c = DoublyList::from_iter([1, 2, 4]);
        let d = DoublyList::from_iter([1, 2]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert!(a < c);
        assert!(d < a);
    }

    #[test]
    fn list_hash() {
        let a = DoublyList::from_iter([1, 2, 3]);
        let b = DoublyList::from_iter([1, 2, 3]);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn list_contains() {
        let list = DoublyList::from_iter(0..5);
        assert!(list.contains(&3));
        assert!(!list.contains(&7));
    }
}
