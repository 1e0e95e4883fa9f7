use std::fmt;
use std::mem;

use crate::arena::{Arena, NodeId};
use crate::error::ListError;
use crate::Value;

/// A doubly linked list of [`Value`]s.
///
/// Like [`SinglyLinkedList`](crate::SinglyLinkedList) this is an
/// arena-backed chain identified by its head, but every node also records
/// its predecessor. The back links exist for traversal: they let
/// [`iter`](Self::iter) run from either end and make unlinking a found
/// node cheap. The list is still located through `next` links only, so
/// index operations are `O(index)` and tail operations `O(n)`.
///
/// Every mutation leaves the chain mirror-consistent (`a.next == b` iff
/// `b.prev == a`), and the splicing operations check that in debug builds.
///
/// ```
/// use linklists::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::new();
/// list.push_front(10);
/// list.push_front(20);
/// list.push_back(30);
/// list.insert(1, 15)?;
/// assert_eq!(list.to_string(), "20 <-> 15 <-> 10 <-> 30");
/// let backwards: Vec<i64> = list.iter().rev().copied().collect();
/// assert_eq!(backwards, vec![30, 10, 15, 20]);
/// # Ok::<(), linklists::ListError>(())
/// ```
#[derive(Clone)]
pub struct DoublyLinkedList {
    head: Option<NodeId>,
    len: usize,
    arena: Arena<Node>,
}

#[derive(Debug, Clone)]
struct Node {
    value: Value,
    next: Option<NodeId>,
    prev: Option<NodeId>,
}

impl DoublyLinkedList {
    /// creates an empty list
    pub fn new() -> Self {
        DoublyLinkedList {
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
        self.tail_id().map(|id| &self.arena[id].value)
    }

    /// Prepends `value` and points the old head's back link at it. `O(1)`.
    pub fn push_front(&mut self, value: Value) {
        let id = self.arena.insert(Node {
            value,
            next: self.head,
            prev: None,
        });
        if let Some(old_head) = self.head {
            self.arena[old_head].prev = Some(id);
        }
        self.head = Some(id);
        self.len += 1;
        self.assert_chain();
    }

    /// Appends `value` after the current tail, walking there first.
    pub fn push_back(&mut self, value: Value) {
        let id = self.arena.insert(Node {
            value,
            next: None,
            prev: None,
        });
        match self.tail_id() {
            None => self.head = Some(id),
            Some(tail) => {
                self.arena[tail].next = Some(id);
                self.arena[id].prev = Some(tail);
            }
        }
        self.len += 1;
        self.assert_chain();
    }

    /// Inserts `value` so that it ends up at position `index`, rewiring
    /// the back links of both neighbours.
    ///
    /// Accepts `0..=len` like the singly variant; anything past that
    /// reports [`ListError::OutOfBounds`] and changes nothing.
    pub fn insert(&mut self, index: usize, value: Value) -> Result<(), ListError> {
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
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
        let successor = self.arena[at].next;
        let id = self.arena.insert(Node {
            value,
            next: successor,
            prev: Some(at),
        });
        if let Some(succ) = successor {
            self.arena[succ].prev = Some(id);
        }
        self.arena[at].next = Some(id);
        self.len += 1;
        self.assert_chain();
        Ok(())
    }

    /// Removes the head and returns its value, or [`ListError::Empty`].
    pub fn pop_front(&mut self) -> Result<Value, ListError> {
        let Some(head) = self.head else {
            return Err(ListError::Empty);
        };
        let node = self.arena.remove(head);
        self.head = node.next;
        if let Some(new_head) = node.next {
            self.arena[new_head].prev = None;
        }
        self.len -= 1;
        self.assert_chain();
        Ok(node.value)
    }

    /// Removes the tail and returns its value, or [`ListError::Empty`].
    ///
    /// Finding the tail walks the chain; unlinking it is then a single
    /// back-link lookup.
    pub fn pop_back(&mut self) -> Result<Value, ListError> {
        let Some(tail) = self.tail_id() else {
            return Err(ListError::Empty);
        };
        let node = self.arena.remove(tail);
        match node.prev {
            Some(prev) => self.arena[prev].next = None,
            None => self.head = None,
        }
        self.len -= 1;
        self.assert_chain();
        Ok(node.value)
    }

    /// Removes the element at `index` and returns its value.
    ///
    /// Same error contract as the singly list: an empty list reports
    /// [`ListError::Empty`] whatever the index, an index at or past
    /// [`len`](Self::len) reports [`ListError::OutOfBounds`].
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
        let node = self.arena.remove(target);
        self.arena[current].next = node.next;
        if let Some(succ) = node.next {
            self.arena[succ].prev = Some(current);
        }
        self.len -= 1;
        self.assert_chain();
        Ok(node.value)
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

    /// Reverses the list in place by swapping the two links of every node;
    /// the old tail becomes the head.
    pub fn reverse(&mut self) {
        let mut current = self.head;
        let mut last = None;
        while let Some(id) = current {
            let node = &mut self.arena[id];
            mem::swap(&mut node.next, &mut node.prev);
            last = Some(id);
            // the link that used to be `next`
            current = node.prev;
        }
        self.head = last;
        self.assert_chain();
    }

    /// Drops all elements at once.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.len = 0;
    }

    /// Double-ended iterator over the values; `rev()` walks the back
    /// links from the tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail_id(),
            remaining: self.len,
        }
    }

    fn tail_id(&self) -> Option<NodeId> {
        let mut current = self.head?;
        while let Some(next) = self.arena[current].next {
            current = next;
        }
        Some(current)
    }

    /// Debug-build sweep over the chain: every `next` must be mirrored by
    /// a `prev`, and the node count must match `len` and the arena.
    fn assert_chain(&self) {
        #[cfg(debug_assertions)]
        {
            let mut count = 0;
            let mut prev = None;
            let mut current = self.head;
            while let Some(id) = current {
                let node = &self.arena[id];
                debug_assert_eq!(node.prev, prev, "back link broken at position {}", count);
                prev = current;
                current = node.next;
                count += 1;
            }
            debug_assert_eq!(count, self.len, "chain length drifted from len");
            debug_assert_eq!(self.arena.len(), self.len, "arena holds unlinked nodes");
        }
    }
}

impl Default for DoublyLinkedList {
    fn default() -> Self {
        DoublyLinkedList::new()
    }
}

/// Values joined by `" <-> "`, nothing at all for an empty list.
impl fmt::Display for DoublyLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current = self.head;
        while let Some(id) = current {
            let node = &self.arena[id];
            write!(f, "{}", node.value)?;
            if node.next.is_some() {
                write!(f, " <-> ")?;
            }
            current = node.next;
        }
        Ok(())
    }
}

impl fmt::Debug for DoublyLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Two lists are equal when they hold the same values in the same order,
/// regardless of how their nodes are laid out internally.
impl PartialEq for DoublyLinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for DoublyLinkedList {}

impl Extend<Value> for DoublyLinkedList {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl FromIterator<Value> for DoublyLinkedList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

/// Borrowing iterator returned by [`DoublyLinkedList::iter`]. The two
/// cursors start at the ends and meet in the middle, so mixing `next` and
/// `next_back` never yields an element twice.
pub struct Iter<'a> {
    list: &'a DoublyLinkedList,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<&'a Value> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        let node = &self.list.arena[id];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<&'a Value> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        let node = &self.list.arena[id];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a DoublyLinkedList {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Owning iterator that drains the list from the front.
pub struct IntoIter(DoublyLinkedList);

impl Iterator for IntoIter {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        self.0.pop_front().ok()
    }
}

impl IntoIterator for DoublyLinkedList {
    type Item = Value;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[Value]) -> DoublyLinkedList {
        values.iter().copied().collect()
    }

    fn forwards(list: &DoublyLinkedList) -> Vec<Value> {
        list.iter().copied().collect()
    }

    /// Reads the chain through the `prev` links only, tail first.
    fn backwards(list: &DoublyLinkedList) -> Vec<Value> {
        let mut values = Vec::new();
        let mut current = list.tail_id();
        while let Some(id) = current {
            values.push(list.arena[id].value);
            current = list.arena[id].prev;
        }
        values
    }

    #[test]
    fn new_list_is_empty() {
        let list = DoublyLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.to_string(), "");
    }

    #[test]
    fn push_front_links_both_ways() {
        let mut list = DoublyLinkedList::new();
        list.push_front(10);
        list.push_front(20);
        list.push_front(30);
        assert_eq!(forwards(&list), vec![30, 20, 10]);
        assert_eq!(backwards(&list), vec![10, 20, 30]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn push_back_links_both_ways() {
        let mut list = DoublyLinkedList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        assert_eq!(forwards(&list), vec![1, 2, 3]);
        assert_eq!(backwards(&list), vec![3, 2, 1]);
    }

    #[test]
    fn insert_rewires_both_neighbours() {
        // the classic walkthrough: 30 <-> 20 <-> 10, append 40, splice 50 at 2
        let mut list = DoublyLinkedList::new();
        list.push_front(10);
        list.push_front(20);
        list.push_front(30);
        list.push_back(40);
        assert_eq!(list.insert(2, 50), Ok(()));
        assert_eq!(list.to_string(), "30 <-> 20 <-> 50 <-> 10 <-> 40");
        assert_eq!(backwards(&list), vec![40, 10, 50, 20, 30]);
    }

    #[test]
    fn insert_at_len_appends() {
        let mut list = list_of(&[1, 2]);
        assert_eq!(list.insert(2, 3), Ok(()));
        assert_eq!(forwards(&list), vec![1, 2, 3]);
        assert_eq!(backwards(&list), vec![3, 2, 1]);
    }

    #[test]
    fn insert_past_the_end_is_rejected() {
        let mut list = DoublyLinkedList::new();
        assert_eq!(list.insert(1, 9), Err(ListError::OutOfBounds));
        list.push_back(1);
        assert_eq!(list.insert(3, 9), Err(ListError::OutOfBounds));
        assert_eq!(forwards(&list), vec![1]);
    }

    #[test]
    fn pop_front_clears_the_new_heads_back_link() {
        let mut list = list_of(&[1, 2, 3]);
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(backwards(&list), vec![3, 2]);
        assert_eq!(list.pop_front(), Ok(2));
        assert_eq!(list.pop_front(), Ok(3));
        assert_eq!(list.pop_front(), Err(ListError::Empty));
    }

    #[test]
    fn pop_back_uses_the_back_link_to_unlink() {
        let mut list = list_of(&[1, 2, 3]);
        assert_eq!(list.pop_back(), Ok(3));
        assert_eq!(forwards(&list), vec![1, 2]);
        assert_eq!(list.pop_back(), Ok(2));
        assert_eq!(list.pop_back(), Ok(1));
        assert!(list.is_empty());
        assert_eq!(list.pop_back(), Err(ListError::Empty));
    }

    #[test]
    fn remove_bridges_the_gap_in_both_directions() {
        let mut list = list_of(&[1, 2, 3, 4]);
        assert_eq!(list.remove(2), Ok(3));
        assert_eq!(forwards(&list), vec![1, 2, 4]);
        assert_eq!(backwards(&list), vec![4, 2, 1]);
        assert_eq!(list.remove(0), Ok(1));
        assert_eq!(backwards(&list), vec![4, 2]);
    }

    #[test]
    fn remove_reports_empty_before_bounds() {
        let mut list = DoublyLinkedList::new();
        assert_eq!(list.remove(0), Err(ListError::Empty));
        assert_eq!(list.remove(4), Err(ListError::Empty));
        list.push_back(1);
        assert_eq!(list.remove(1), Err(ListError::OutOfBounds));
    }

    #[test]
    fn get_and_apply() {
        let mut list = list_of(&[5, 6, 7]);
        assert_eq!(list.get(1), Some(&6));
        assert_eq!(list.get(3), None);
        if let Some(v) = list.get_mut(0) {
            *v = 50;
        }
        list.apply(|v| *v += 1);
        assert_eq!(forwards(&list), vec![51, 7, 8]);
    }

    #[test]
    fn reverse_swaps_the_link_directions() {
        let mut list = list_of(&[1, 2, 3, 4]);
        list.reverse();
        assert_eq!(forwards(&list), vec![4, 3, 2, 1]);
        assert_eq!(backwards(&list), vec![1, 2, 3, 4]);

        let mut single = list_of(&[9]);
        single.reverse();
        assert_eq!(forwards(&single), vec![9]);

        let mut empty = DoublyLinkedList::new();
        empty.reverse();
        assert!(empty.is_empty());
    }

    #[test]
    fn reversing_twice_restores_the_order() {
        for len in 0..6i64 {
            let mut list: DoublyLinkedList = (0..len).collect();
            let forward = forwards(&list);
            let backward = backwards(&list);
            list.reverse();
            list.reverse();
            assert_eq!(forwards(&list), forward, "len {}", len);
            assert_eq!(backwards(&list), backward, "len {}", len);
        }
    }

    #[test]
    fn iterator_runs_backwards_too() {
        let list = list_of(&[1, 2, 3, 4]);
        let rev: Vec<Value> = list.iter().rev().copied().collect();
        assert_eq!(rev, vec![4, 3, 2, 1]);
        assert_eq!(list.iter().len(), 4);
    }

    #[test]
    fn meeting_cursors_never_overlap() {
        let list = list_of(&[1, 2, 3, 4, 5]);
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn display_joins_with_double_arrows() {
        assert_eq!(list_of(&[10, 20]).to_string(), "10 <-> 20");
        assert_eq!(list_of(&[7]).to_string(), "7");
        assert_eq!(DoublyLinkedList::new().to_string(), "");
    }

    #[test]
    fn equality_and_clone() {
        let a = list_of(&[1, 2, 3]);
        let mut b = a.clone();
        assert_eq!(a, b);
        b.push_back(4);
        assert_ne!(a, b);
        b.pop_back().unwrap();
        assert_eq!(a, b);
        let drained: Vec<Value> = b.into_iter().collect();
        assert_eq!(drained, vec![1, 2, 3]);
    }

    #[test]
    fn clear_resets_everything() {
        let mut list = list_of(&[1, 2, 3]);
        list.clear();
        assert!(list.is_empty());
        list.push_front(5);
        assert_eq!(forwards(&list), vec![5]);
        assert_eq!(backwards(&list), vec![5]);
    }
}
