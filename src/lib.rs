//! Index-addressed singly and doubly linked lists over a flat node arena,
//! with in-place reversal and Floyd cycle detection. See
//! [`SinglyLinkedList`] and [`DoublyLinkedList`].

mod arena;
pub mod doubly;
pub mod error;
pub mod singly;

pub use doubly::DoublyLinkedList;
pub use error::ListError;
pub use singly::SinglyLinkedList;

/// The element type the lists store.
pub type Value = i64;
