//! An experimental doubly-linked deque built without `unsafe`, using
//! [`GhostCell`] for token-based interior mutability and [`StaticRc`]
//! for fractional ownership of the nodes.
//!
//! Each node is owned by exactly two [`StaticRc`] halves: one held by
//! its predecessor's `next` link, or by `head` for the front node, and
//! one held by its successor's `prev` link, or by `tail` for the back
//! node. Rejoining the two halves proves exclusive ownership and
//! releases the node.
//!
//! Every operation that touches a link takes the brand's
//! [`GhostToken`], which is why the main containers of this crate keep
//! the raw-pointer layout instead: their public API carries no token
//! parameter.

#![allow(dead_code)]

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;

struct Deque<'id, T> {
    head: Option<NodePtr<'id, T>>,
    tail: Option<NodePtr<'id, T>>,
    len: usize,
}

struct Node<'id, T> {
    next: Option<NodePtr<'id, T>>,
    prev: Option<NodePtr<'id, T>>,
    element: T,
}

type NodePtr<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

impl<'id, T> Node<'id, T> {
    fn new(element: T) -> Self {
        Self {
            next: None,
            prev: None,
            element,
        }
    }
}

impl<'id, T> Default for Deque<'id, T> {
    fn default() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }
}

impl<'id, T> Deque<'id, T> {
    fn new() -> Self {
        Default::default()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn front<'a>(&'a self, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.head.as_ref().map(|head| &head.borrow(token).element)
    }

    fn back<'a>(&'a self, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.tail.as_ref().map(|tail| &tail.borrow(token).element)
    }

    fn push_front(&mut self, element: T, token: &mut GhostToken<'id>) {
        let (one, two) = Full::split(Full::new(GhostCell::new(Node::new(element))));
        match self.head.take() {
            Some(head) => {
                // The old front adopts one half as its `prev`; its own
                // half moves from `head` into the new node's `next`.
                head.borrow_mut(token).prev = Some(one);
                two.borrow_mut(token).next = Some(head);
                self.head = Some(two);
            }
            None => {
                self.head = Some(one);
                self.tail = Some(two);
            }
        }
        self.len += 1;
    }

    fn push_back(&mut self, element: T, token: &mut GhostToken<'id>) {
        let (one, two) = Full::split(Full::new(GhostCell::new(Node::new(element))));
        match self.tail.take() {
            Some(tail) => {
                // The old back adopts one half as its `next`; its own
                // half moves from `tail` into the new node's `prev`.
                tail.borrow_mut(token).next = Some(one);
                two.borrow_mut(token).prev = Some(tail);
                self.tail = Some(two);
            }
            None => {
                self.head = Some(one);
                self.tail = Some(two);
            }
        }
        self.len += 1;
    }

    fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let front = self.head.take()?;
        let full = match front.borrow_mut(token).next.take() {
            Some(next) => {
                // The second node's `prev` holds the other half of the
                // front node; taking it reunites the pair.
                let other = next.borrow_mut(token).prev.take()?;
                self.head = Some(next);
                Full::join(other, front)
            }
            None => {
                let other = self.tail.take()?;
                Full::join(other, front)
            }
        };
        self.len -= 1;
        Some(Full::into_box(full).into_inner().element)
    }

    fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let back = self.tail.take()?;
        let full = match back.borrow_mut(token).prev.take() {
            Some(prev) => {
                // The second-to-last node's `next` holds the other half
                // of the back node; taking it reunites the pair.
                let other = prev.borrow_mut(token).next.take()?;
                self.tail = Some(prev);
                Full::join(other, back)
            }
            None => {
                let other = self.head.take()?;
                Full::join(other, back)
            }
        };
        self.len -= 1;
        Some(Full::into_box(full).into_inner().element)
    }

    /// Pops every node. A non-empty `Deque` must be cleared before it
    /// goes out of scope, or its half-owned nodes leak.
    fn clear(&mut self, token: &mut GhostToken<'id>) {
        while self.pop_front(token).is_some() {}
    }
}

#[cfg(test)]
mod tests {
    use crate::experiments::Deque;
    use crate::DoublyList;
    use ghost_cell::GhostToken;

    #[test]
    fn deque_push_pop() {
        GhostToken::new(|mut token| {
            let mut deque = Deque::new();
            assert!(deque.is_empty());
            deque.push_back(1, &mut token);
            deque.push_front(2, &mut token);
            assert!(!deque.is_empty());
            assert_eq!(deque.front(&token), Some(&2));
            assert_eq!(deque.back(&token), Some(&1));
            assert_eq!(deque.pop_back(&mut token), Some(1));
            assert_eq!(deque.pop_front(&mut token), Some(2));
            assert!(deque.is_empty());
        })
    }

    #[test]
    fn matches_raw_pointer_deque() {
        GhostToken::new(|mut token| {
            let mut deque = Deque::new();
            let mut list = DoublyList::new();

            for i in 0..32 {
                if i % 3 == 0 {
                    deque.push_front(i, &mut token);
                    list.push_front(i);
                } else {
                    deque.push_back(i, &mut token);
                    list.push_back(i);
                }
                if i % 5 == 0 {
                    assert_eq!(deque.pop_back(&mut token), list.pop_back());
                }
                assert_eq!(deque.len(), list.len());
                assert_eq!(deque.front(&token), list.front().ok());
                assert_eq!(deque.back(&token), list.back().ok());
            }

            while let Some(expected) = list.pop_front() {
                assert_eq!(deque.pop_front(&mut token), Some(expected));
            }
            assert!(deque.is_empty());
            assert_eq!(deque.pop_front(&mut token), None);
        })
    }

    #[test]
    fn clear_drains_all_nodes() {
        GhostToken::new(|mut token| {
            let mut deque = Deque::new();
            for i in 0..8 {
                deque.push_back(i, &mut token);
            }
            deque.clear(&mut token);
            assert!(deque.is_empty());
            assert_eq!(deque.front(&token), None);
        })
    }
}
