use std::fmt;

use crate::arena::{Arena, NodeId};
use crate::error::ListError;
use crate::Value;

/// A singly linked list of [`Value`]s.
///
/// Every element lives in a node that knows only its successor, and the
/// list itself is identified by its head alone. Nodes are stored in a
/// crate-internal arena and linked by index, so the list stays entirely in
/// safe code while still supporting [`has_cycle`](Self::has_cycle), which
/// scans the chain with Floyd's tortoise-and-hare walk.
///
/// Reaching a position always means walking from the head: index-based
/// operations are `O(index)`, and anything touching the tail is `O(n)`.
///
/// ```
/// use linklists::SinglyLinkedList;
///
/// let mut list: SinglyLinkedList = (1i64..=3).collect();
/// list.push_front(0);
/// assert_eq!(list.to_string(), "0 -> 1 -> 2 -> 3");
/// assert_eq!(list.pop_back(), Ok(3));
/// assert_eq!(list.len(), 3);
/// assert!(!list.has_cycle());
/// ```
#[derive(Clone)]
pub struct SinglyLinkedList {
    head: Option<NodeId>,
    len: usize,
    arena: Arena<Node>,
}

/// One cell of the chain: a value and the id of its successor.
#[derive(Debug, Clone)]
struct Node {
    value: Value,
    next: Option<NodeId>,
}

impl SinglyLinkedList {
    /// creates an empty list
    pub fn new() -> Self {
        SinglyLinkedList {
            head: None,
            len: 0,
            arena: Arena::new(),
        }
    }

    /// number of elements in the list
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// the first value, if any
    pub fn front(&self) -> Option<&Value> {
        self.head.map(|id| &self.arena[id].value)
    }

    /// the last value, if any; walks the whole chain
    pub fn back(&self) -> Option<&Value> {
        let mut current = self.head?;
        while let Some(next) = self.arena[current].next {
            current = next;
        }
        Some(&self.arena[current].value)
    }

    /// Prepends `value`; the new node becomes the head. `O(1)`.
    pub fn push_front(&mut self, value: Value) {
        let node = Node {
            value,
            next: self.head,
        };
        self.head = Some(self.arena.insert(node));
        self.len += 1;
    }

    /// Appends `value` after the current tail, walking there first.
    pub fn push_back(&mut self, value: Value) {
        let id = self.arena.insert(Node { value, next: None });
        match self.head {
            None => self.head = Some(id),
            Some(mut current) => {
                while let Some(next) = self.arena[current].next {
                    current = next;
                }
                self.arena[current].next = Some(id);
            }
        }
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// `index` may be anything from `0` (same as
    /// [`push_front`](Self::push_front)) up to and including
    /// [`len`](Self::len), which appends. Past that the list is left
    /// untouched and [`ListError::OutOfBounds`] comes back.
    pub fn insert(&mut self, index: usize, value: Value) -> Result<(), ListError> {
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        // stop at the node in front of the requested position
        let mut current = self.head;
        for _ in 1..index {
            match current {
                Some(id) => current = self.arena[id].next,
                None => break,
            }
        }
        let Some(at) = current else {
            return Err(ListError::OutOfBounds);
        };
        let node = Node {
            value,
            next: self.arena[at].next,
        };
        let id = self.arena.insert(node);
        self.arena[at].next = Some(id);
        self.len += 1;
        Ok(())
    }

    /// Removes the head and returns its value, or [`ListError::Empty`].
    pub fn pop_front(&mut self) -> Result<Value, ListError> {
        let Some(head) = self.head else {
            return Err(ListError::Empty);
        };
        let node = self.arena.remove(head);
        self.head = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    /// Removes the tail and returns its value, or [`ListError::Empty`].
    /// Walks to the next-to-last node to unlink it.
    pub fn pop_back(&mut self) -> Result<Value, ListError> {
        let Some(head) = self.head else {
            return Err(ListError::Empty);
        };
        let mut current = head;
        while let Some(next) = self.arena[current].next {
            if self.arena[next].next.is_none() {
                self.arena[current].next = None;
                self.len -= 1;
                return Ok(self.arena.remove(next).value);
            }
            current = next;
        }
        // head was the only node
        self.head = None;
        self.len -= 1;
        Ok(self.arena.remove(head).value)
    }

    /// Removes the element at `index` and returns its value.
    ///
    /// An empty list reports [`ListError::Empty`] no matter the index; an
    /// index at or past [`len`](Self::len) reports
    /// [`ListError::OutOfBounds`].
    pub fn remove(&mut self, index: usize) -> Result<Value, ListError> {
        let Some(head) = self.head else {
            return Err(ListError::Empty);
        };
        if index == 0 {
            return self.pop_front();
        }
        let mut current = head;
        for _ in 1..index {
            match self.arena[current].next {
                Some(next) => current = next,
                None => break,
            }
        }
        let Some(target) = self.arena[current].next else {
            return Err(ListError::OutOfBounds);
        };
        self.arena[current].next = self.arena[target].next;
        self.len -= 1;
        Ok(self.arena.remove(target).value)
    }

    /// the value at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<&Value> {
        let mut current = self.head?;
        for _ in 0..index {
            current = self.arena[current].next?;
        }
        Some(&self.arena[current].value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        let mut current = self.head?;
        for _ in 0..index {
            current = self.arena[current].next?;
        }
        Some(&mut self.arena[current].value)
    }

    /// Runs `f` on every value, front to back.
    pub fn apply<F: FnMut(&mut Value)>(&mut self, mut f: F) {
        let mut current = self.head;
        while let Some(id) = current {
            let node = &mut self.arena[id];
            f(&mut node.value);
            current = node.next;
        }
    }

    /// Reverses the list in place by turning every link around. `O(n)`,
    /// no nodes are moved or reallocated.
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            let next = self.arena[id].next;
            self.arena[id].next = prev;
            prev = Some(id);
            current = next;
        }
        self.head = prev;
    }

    /// Whether the chain loops back on itself.
    ///
    /// Floyd's tortoise-and-hare: a slow cursor advancing one node per
    /// step and a fast one advancing two either run off the end (no
    /// cycle) or meet (cycle). Runs in `O(n)` with two ids of state, and
    /// terminates on cyclic chains where a plain walk would not.
    pub fn has_cycle(&self) -> bool {
        let Some(head) = self.head else {
            return false;
        };
        let mut slow = head;
        let mut fast = head;
        loop {
            match self.arena[fast].next.and_then(|next| self.arena[next].next) {
                Some(two_ahead) => fast = two_ahead,
                None => return false,
            }
            match self.arena[slow].next {
                Some(next) => slow = next,
                None => return false,
            }
            if slow == fast {
                return true;
            }
        }
    }

    /// Drops all elements at once.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.len = 0;
    }

    /// Iterator over the values, front to back.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            current: self.head,
        }
    }
}

impl Default for SinglyLinkedList {
    fn default() -> Self {
        SinglyLinkedList::new()
    }
}

/// Prints the chain the way the node walk sees it: values joined by
/// `" -> "`, nothing at all for an empty list.
impl fmt::Display for SinglyLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current = self.head;
        while let Some(id) = current {
            let node = &self.arena[id];
            write!(f, "{}", node.value)?;
            if node.next.is_some() {
                write!(f, " -> ")?;
            }
            current = node.next;
        }
        Ok(())
    }
}

impl fmt::Debug for SinglyLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Two lists are equal when they hold the same values in the same order,
/// regardless of how their nodes are laid out internally.
impl PartialEq for SinglyLinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for SinglyLinkedList {}

impl Extend<Value> for SinglyLinkedList {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl FromIterator<Value> for SinglyLinkedList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

/// Borrowing iterator returned by [`SinglyLinkedList::iter`].
pub struct Iter<'a> {
    list: &'a SinglyLinkedList,
    current: Option<NodeId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<&'a Value> {
        let id = self.current?;
        let node = &self.list.arena[id];
        self.current = node.next;
        Some(&node.value)
    }
}

impl<'a> IntoIterator for &'a SinglyLinkedList {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Owning iterator that drains the list from the front.
pub struct IntoIter(SinglyLinkedList);

impl Iterator for IntoIter {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        self.0.pop_front().ok()
    }
}

impl IntoIterator for SinglyLinkedList {
    type Item = Value;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter(self)
    }
}
