use thiserror::Error;

/// The error type of fallible list operations.
///
/// All three list types report misuse through this enum, returned
/// synchronously and before any node is relinked, so a failed call
/// always leaves the list exactly as it was.
///
/// The two structural variants carry a short static message naming the
/// violated rule, which is included in the [`Display`] output.
///
/// [`Display`]: std::fmt::Display
///
/// # Examples
///
/// ```
/// use linked_lists::{ListError, SinglyList};
///
/// let list: SinglyList<i32> = SinglyList::new();
/// assert_eq!(list.front(), Err(ListError::EmptyContainer));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// `front` or `back` was called on a list with no elements.
    #[error("the list is empty")]
    EmptyContainer,
    /// A structural operation was requested that no valid relinking
    /// can satisfy, such as splitting an odd-length ring into two
    /// equal halves.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
    /// A position-based operation was given a cursor that does not
    /// denote a usable position, such as advancing past the end or
    /// removing at a sentinel.
    #[error("invalid cursor position: {0}")]
    InvalidCursor(&'static str),
}
