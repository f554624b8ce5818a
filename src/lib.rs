//! This crate provides three linked lists with owned nodes: a
//! singly-linked [`SinglyList`], a doubly-linked [`DoublyList`] guarded by
//! a pair of sentinels, and a singly-linked circular [`CircularList`]
//! whose last node points back at the first.
//!
//! All three lists push and pop at their cheap ends in constant time, and
//! splice another list of the same kind into themselves in constant time.
//! [`DoublyList`] additionally pops at the back and iterates backwards;
//! [`CircularList`] additionally rotates, and splits into two equal
//! halves. Fallible operations return a [`Result`] carrying a
//! [`ListError`] instead of panicking, and a call that reports an error
//! has not touched the list.
//!
//! Since every list implements [`Default`], [`std::mem::take`] empties a
//! list in constant time while leaving a usable empty list behind, and
//! [`std::mem::swap`] exchanges the contents of two lists equally cheaply.
//!
//! Here is a quick example showing how the lists work.
//!
//! ```
//! use linked_lists::DoublyList;
//! use std::iter::FromIterator;
//!
//! let mut list = DoublyList::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_front_mut();
//!
//! cursor.insert(0); // insert 0 at the front of the list
//! assert_eq!(cursor.current(), Some(&1));
//! assert_eq!(cursor.view(), &DoublyList::from_iter([0, 1, 2, 3, 4]));
//!
//! cursor.seek_forward(2).unwrap(); // move the cursor to the 3
//! assert_eq!(cursor.remove(), Ok(3));
//! assert_eq!(cursor.view(), &DoublyList::from_iter([0, 1, 2, 4]));
//! ```
//!
//! # Memory Layout
//!
//! ## The singly-linked list
//!
//! ```text
//! ╔═══════════╗      ╔═══════════╗      ╔═══════════╗
//! ║   next    ║ ───→ ║   next    ║ ───→ ║   next    ║ ───→ ∅
//! ╟───────────╢      ╟───────────╢      ╟───────────╢
//! ║ payload T ║      ║ payload T ║      ║ payload T ║
//! ╚═══════════╝      ╚═══════════╝      ╚═══════════╝
//!     Node 0             Node 1             Node 2
//!       ↑                                     ↑
//!      head                                  tail
//! ```
//!
//! The `SinglyList` contains:
//! - a pointer `head` that owns the first node;
//! - a pointer `tail` that aliases the last node without owning it;
//! - a length field `len` indicating the length of the list.
//!
//! Each node is allocated on the heap and owns its successor through its
//! `next` pointer; the `next` of the last node is empty (marked ∅ above).
//! The `tail` alias is what makes [`push_back`] constant-time. Nothing
//! points backwards, so there is no `pop_back`; removing at the back
//! would need a walk from the front.
//!
//! ## The doubly-linked list
//!
//! ```text
//! ┌───────────┐      ╔═══════════╗      ╔═══════════╗      ┌───────────┐
//! │   next    │ ───→ ║   next    ║ ───→ ║   next    ║ ───→ │  next  ⟲  │
//! ├───────────┤      ╟───────────╢      ╟───────────╢      ├───────────┤
//! │  ⟲  prev  │ ←─── ║   prev    ║ ←─── ║   prev    ║ ←─── │   prev    │
//! ├───────────┤      ╟───────────╢      ╟───────────╢      ├───────────┤
//! ┊No payload ┊      ║ payload T ║      ║ payload T ║      ┊No payload ┊
//! └╌╌╌╌╌╌╌╌╌╌╌┘      ╚═══════════╝      ╚═══════════╝      └╌╌╌╌╌╌╌╌╌╌╌┘
//!    Header              Node 0             Node 1            Trailer
//! ```
//!
//! The `DoublyList` contains:
//! - a boxed `header` sentinel whose `next` points to the first element;
//! - a boxed `trailer` sentinel whose `prev` points to the last element;
//! - a length field `len` counting the elements between them.
//!
//! The sentinels are allocated when the list is created, stay in place
//! until it is dropped, and have *NO* payload. Their outward sides
//! (`header.prev` and `trailer.next`, marked ⟲ above) point back at the
//! sentinel itself and are never followed. In an empty list the two
//! sentinels point at each other, so push and pop never special-case an
//! empty list.
//!
//! ## The circular list
//!
//! ```text
//!     ┌──────────────────────────────────────────────────────┐
//!     ↓                                                      │
//! ╔═══════════╗      ╔═══════════╗            ╔═══════════╗  │
//! ║   next    ║ ───→ ║   next    ║ ──→ ┄┄ ──→ ║   next    ║ ─┘
//! ╟───────────╢      ╟───────────╢            ╟───────────╢
//! ║ payload T ║      ║ payload T ║            ║ payload T ║
//! ╚═══════════╝      ╚═══════════╝            ╚═══════════╝
//!     Node 0             Node 1                 Node n - 1
//!       ↑                                            ↑
//!    (front)                                       (tail)
//! ```
//!
//! The `CircularList` contains:
//! - a pointer `tail` to the last node;
//! - a length field `len` indicating the length of the list.
//!
//! The `next` of the last node wraps around to the first, so the list
//! reaches its front in one step (`tail.next`) and its back in zero, and
//! [`rotate`] only has to advance `tail`. A list with a single element is
//! the smallest ring: the node's `next` points at itself. Iteration
//! counts down the nodes left to visit instead of watching for an end
//! pointer, so each element is visited exactly once.
//!
//! # Iteration
//!
//! Each list module provides `Iter`, `IterMut` and `IntoIter` iterators
//! (see [`singly::iterator`], [`doubly::iterator`] and
//! [`circular::iterator`]). All of them are fused and exact-sized, and
//! iterate the list like an array; the doubly-linked ones are
//! additionally double-ended. `IterMut` provides mutability of the
//! elements (but not of the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use linked_lists::CircularList;
//! use std::iter::FromIterator;
//!
//! let mut ring = CircularList::from_iter([1, 2, 3]);
//!
//! let mut iter = ring.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // fused, even though the ring is endless
//!
//! ring.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(ring), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! Beside iteration, cursors provide a more flexible way of viewing and
//! editing a list.
//!
//! A cursor points at a node and moves between positions explicitly. In a
//! list with length *n* there are *n* + 1 valid cursor positions: one at
//! each element, and one past-the-end position. Moving beyond those
//! bounds does not wrap or saturate; it returns an error and leaves the
//! cursor where it was.
//!
//! [`DoublyList`] cursors ([`doubly::cursor::Cursor`] and
//! [`doubly::cursor::CursorMut`]) move in both directions and edit at the
//! cursor itself: [`insert`] links a new element in before the cursor,
//! [`remove`] unlinks the element at the cursor, and [`backspace`]
//! unlinks the element before it.
//!
//! [`SinglyList`] has a forward-only [`singly::cursor::CursorMut`] that
//! edits behind itself: with only forward links, the node *after* the
//! cursor is the one that can be unlinked in constant time, so its
//! editing pair is [`insert_after`] and [`remove_after`].
//!
//! ## Examples
//!
//! ```
//! use linked_lists::SinglyList;
//! use std::iter::FromIterator;
//!
//! let mut list = SinglyList::from_iter([1, 2, 4]);
//!
//! let mut cursor = list.cursor_front_mut();
//! cursor.move_next().unwrap(); // step from the 1 to the 2
//! cursor.insert_after(3).unwrap();
//! assert_eq!(cursor.remove_after(), Ok(3));
//!
//! assert_eq!(Vec::from_iter(list), vec![1, 2, 4]);
//! ```
//!
//! # Splitting and Splicing
//!
//! [`append`] moves every element of another list to the back of `self`
//! by relinking the ends, leaving the other list empty but usable.
//! [`split_even`] cuts an even-length ring into its two halves, handing
//! both back as independent rings; a ring with an odd number of elements
//! refuses the split and stays intact.
//!
//! ## Examples
//!
//! ```
//! use linked_lists::{CircularList, DoublyList};
//! use std::iter::FromIterator;
//!
//! let mut list = DoublyList::from_iter([100, 200]);
//! let mut tail = DoublyList::from_iter([300, 400]);
//!
//! list.append(&mut tail);
//! assert!(tail.is_empty());
//! assert_eq!(Vec::from_iter(list), vec![100, 200, 300, 400]);
//!
//! let mut ring = CircularList::from_iter(1..=6);
//! let (left, right) = ring.split_even().unwrap();
//! assert!(ring.is_empty());
//! assert_eq!(Vec::from_iter(left), vec![1, 2, 3]);
//! assert_eq!(Vec::from_iter(right), vec![4, 5, 6]);
//! ```
//!
//! # Errors
//!
//! Operations that can be called at the wrong time (accessing an empty
//! list, or moving a cursor out of bounds) return a [`ListError`] rather
//! than panicking. The check always comes first: when a call errors, the
//! list has not been changed.
//!
//! ```
//! use linked_lists::{CircularList, ListError};
//! use std::iter::FromIterator;
//!
//! let empty: CircularList<i32> = CircularList::new();
//! assert_eq!(empty.front(), Err(ListError::EmptyContainer));
//!
//! let mut ring = CircularList::from_iter(1..=5);
//! assert!(matches!(ring.split_even(), Err(ListError::InvalidOperation(_))));
//! assert_eq!(ring.len(), 5); // the failed split left the ring alone
//! ```
//!
//! [`push_back`]: crate::singly::SinglyList::push_back
//! [`rotate`]: crate::circular::CircularList::rotate
//! [`append`]: crate::doubly::DoublyList::append
//! [`split_even`]: crate::circular::CircularList::split_even
//! [`insert`]: crate::doubly::cursor::CursorMut::insert
//! [`remove`]: crate::doubly::cursor::CursorMut::remove
//! [`backspace`]: crate::doubly::cursor::CursorMut::backspace
//! [`insert_after`]: crate::singly::cursor::CursorMut::insert_after
//! [`remove_after`]: crate::singly::cursor::CursorMut::remove_after

#[doc(inline)]
pub use circular::CircularList;
#[doc(inline)]
pub use doubly::DoublyList;
#[doc(inline)]
pub use error::ListError;
#[doc(inline)]
pub use singly::SinglyList;

pub mod circular;
pub mod doubly;
pub mod invariants;
pub mod singly;

mod error;

mod experiments;
