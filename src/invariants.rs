//! Collection of the invariants upheld in the [`crate`].

#![allow(dead_code)]

/// In a [`crate::SinglyList`], `head` and `tail` are both vacant
/// exactly when the list is empty, which is exactly when `len` is `0`.
pub const INVARIANT_1: () = ();

/// In a [`crate::SinglyList`], the `next` link of the tail node is
/// always vacant, and following `next` from `head` visits exactly
/// `len` nodes, the last of which is the tail.
pub const INVARIANT_2: () = ();

/// In a [`crate::DoublyList`], the header and trailer sentinels are
/// allocated when the list is created, live as long as the list, and
/// are never exposed by any accessor, cursor or iterator.
pub const INVARIANT_3: () = ();

/// In a [`crate::DoublyList`], `node.next.prev == node` and
/// `node.prev.next == node` hold for every node between the header and
/// the trailer, and following `next` from the header reaches the
/// trailer in exactly `len + 1` steps.
pub const INVARIANT_4: () = ();

/// In a [`crate::DoublyList`], `header.prev` and `trailer.next` are
/// self-links and no operation ever follows them.
pub const INVARIANT_5: () = ();

/// In a [`crate::CircularList`], `tail` is vacant exactly when the
/// list is empty; otherwise every `next` link is occupied and
/// following `next` from any node returns to that node in exactly
/// `len` steps, with `tail.next` being the front node.
pub const INVARIANT_6: () = ();

/// A cursor rests either on an element node or at the one-past-the-end
/// position; it never rests on a sentinel. A move or edit that fails
/// leaves both the cursor and the list unchanged.
pub const INVARIANT_7: () = ();

/// Every fallible operation reports its error before mutating
/// anything, so a failed call leaves its operands exactly as they
/// were.
pub const INVARIANT_8: () = ();

/// An operation that empties a list, whether [`crate::DoublyList::append`],
/// [`crate::CircularList::split_even`] or `std::mem::take`, leaves it
/// in the same state as a freshly created one, ready for reuse.
pub const INVARIANT_9: () = ();
