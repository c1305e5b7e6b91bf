//! Recency list
//!
//! A doubly linked list threaded through an arena of entry slots.
//! Links are slot handles rather than references, so promotion and
//! eviction are O(1) splices with no shared mutable aliasing. Freed
//! slots are recycled before the arena grows.

use super::entry::{Entry, Slot};

/// Entries ordered from most recently used (head) to least recently used (tail)
#[derive(Debug)]
pub(crate) struct RecencyList<V> {
    slots: Vec<Option<Entry<V>>>,
    free: Vec<usize>,
    head: Option<Slot>,
    tail: Option<Slot>,
    len: usize,
}

impl<V> RecencyList<V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn get(&self, slot: Slot) -> &Entry<V> {
        match self.slots.get(slot.0) {
            Some(Some(entry)) => entry,
            _ => panic!("dangling recency slot {}", slot.0),
        }
    }

    pub(crate) fn get_mut(&mut self, slot: Slot) -> &mut Entry<V> {
        match self.slots.get_mut(slot.0) {
            Some(Some(entry)) => entry,
            _ => panic!("dangling recency slot {}", slot.0),
        }
    }

    /// Insert an entry at the head and return its slot
    pub(crate) fn push_front(&mut self, entry: Entry<V>) -> Slot {
        let slot = match self.free.pop() {
            Some(i) => {
                self.slots[i] = Some(entry);
                Slot(i)
            }
            None => {
                self.slots.push(Some(entry));
                Slot(self.slots.len() - 1)
            }
        };

        self.link_front(slot);
        self.len += 1;
        slot
    }

    /// Detach an entry and reinsert it at the head without reallocating
    pub(crate) fn move_to_front(&mut self, slot: Slot) {
        if self.head == Some(slot) {
            return;
        }

        self.unlink(slot);
        self.link_front(slot);
    }

    /// Detach an entry from wherever it sits and hand it back
    pub(crate) fn remove(&mut self, slot: Slot) -> Entry<V> {
        self.unlink(slot);

        let entry = match self.slots.get_mut(slot.0).and_then(Option::take) {
            Some(entry) => entry,
            None => panic!("dangling recency slot {}", slot.0),
        };
        self.free.push(slot.0);
        self.len -= 1;
        entry
    }

    pub(crate) fn peek_tail(&self) -> Option<Slot> {
        self.tail
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Entry<V>> {
        let slot = self.tail?;
        Some(self.remove(slot))
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterate from head to tail
    pub(crate) fn iter(&self) -> Iter<'_, V> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    fn link_front(&mut self, slot: Slot) {
        let old_head = self.head;
        {
            let entry = self.get_mut(slot);
            entry.prev = None;
            entry.next = old_head;
        }

        match old_head {
            Some(head) => self.get_mut(head).prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
    }

    fn unlink(&mut self, slot: Slot) {
        let (prev, next) = {
            let entry = self.get_mut(slot);
            (entry.prev.take(), entry.next.take())
        };

        match prev {
            Some(prev) => self.get_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.get_mut(next).prev = prev,
            None => self.tail = prev,
        }
    }
}

pub(crate) struct Iter<'a, V> {
    list: &'a RecencyList<V>,
    cursor: Option<Slot>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.list.get(self.cursor?);
        self.cursor = entry.next;
        Some(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &RecencyList<i32>) -> Vec<&str> {
        list.iter().map(|e| e.key.as_str()).collect()
    }

    fn push(list: &mut RecencyList<i32>, key: &str, value: i32) -> Slot {
        list.push_front(Entry::new(key.to_string(), value))
    }

    #[test]
    fn test_push_front_orders_newest_first() {
        let mut list = RecencyList::with_capacity(3);
        push(&mut list, "a", 1);
        push(&mut list, "b", 2);
        push(&mut list, "c", 3);

        assert_eq!(keys(&list), vec!["c", "b", "a"]);
        assert_eq!(list.len(), 3);
        let tail = list.peek_tail().unwrap();
        assert_eq!(list.get(tail).key, "a");
    }

    #[test]
    fn test_move_to_front_from_middle_and_tail() {
        let mut list = RecencyList::with_capacity(3);
        let a = push(&mut list, "a", 1);
        let b = push(&mut list, "b", 2);
        push(&mut list, "c", 3);

        list.move_to_front(b);
        assert_eq!(keys(&list), vec!["b", "c", "a"]);

        list.move_to_front(a);
        assert_eq!(keys(&list), vec!["a", "b", "c"]);
        assert_eq!(list.get(list.peek_tail().unwrap()).key, "c");

        // Already at head
        list.move_to_front(a);
        assert_eq!(keys(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove_arbitrary_position() {
        let mut list = RecencyList::with_capacity(3);
        let a = push(&mut list, "a", 1);
        let b = push(&mut list, "b", 2);
        let c = push(&mut list, "c", 3);

        assert_eq!(list.remove(b).value, 2);
        assert_eq!(keys(&list), vec!["c", "a"]);

        assert_eq!(list.remove(c).value, 3);
        assert_eq!(keys(&list), vec!["a"]);

        assert_eq!(list.remove(a).value, 1);
        assert!(keys(&list).is_empty());
        assert_eq!(list.peek_tail(), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_pop_tail() {
        let mut list = RecencyList::with_capacity(2);
        assert!(list.pop_tail().is_none());

        push(&mut list, "a", 1);
        push(&mut list, "b", 2);

        assert_eq!(list.pop_tail().unwrap().key, "a");
        assert_eq!(list.pop_tail().unwrap().key, "b");
        assert!(list.pop_tail().is_none());
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut list = RecencyList::with_capacity(2);
        let a = push(&mut list, "a", 1);
        push(&mut list, "b", 2);

        list.remove(a);
        let c = push(&mut list, "c", 3);
        assert_eq!(c, a);
        assert_eq!(list.slots.len(), 2);
        assert_eq!(keys(&list), vec!["c", "b"]);
    }

    #[test]
    fn test_clear() {
        let mut list = RecencyList::with_capacity(2);
        push(&mut list, "a", 1);
        push(&mut list, "b", 2);

        list.clear();
        assert_eq!(list.len(), 0);
        assert_eq!(list.peek_tail(), None);
        assert!(keys(&list).is_empty());
    }

    #[test]
    #[should_panic(expected = "dangling recency slot")]
    fn test_removed_slot_is_dangling() {
        let mut list = RecencyList::with_capacity(1);
        let a = push(&mut list, "a", 1);
        list.remove(a);
        list.get(a);
    }
}
