//! Snapshot store

use alloc::boxed::Box;
use alloc::vec::Vec;

/// Immutable copy of a hardware buffer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot(Box<[u8]>);

impl Snapshot {
    /// Copy `bytes` into a new snapshot
    pub fn new(bytes: &[u8]) -> Self {
        Self(bytes.into())
    }

    /// Buffer contents
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the buffer has no bytes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Snapshot {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into_boxed_slice())
    }
}

impl AsRef<[u8]> for Snapshot {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Linear history with a cursor
///
/// `cursor` indexes the current snapshot; everything after it is the redo
/// branch. Each entry is a full copy, never a diff.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Vec<Snapshot>,
    cursor: Option<usize>,
}

impl HistoryStore {
    /// Empty store with no current entry
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
        }
    }

    /// Store whose first entry is `initial`
    pub fn with_initial(initial: Snapshot) -> Self {
        let mut store = Self::new();
        store.push(initial);
        store
    }

    /// Record a new current state
    ///
    /// A snapshot equal to the current one is dropped. Otherwise any redo
    /// branch is discarded before appending.
    pub fn push(&mut self, snapshot: Snapshot) {
        if let Some(current) = self.current() {
            if *current == snapshot {
                trace!("history: duplicate snapshot ignored");
                return;
            }
        }

        let keep = self.cursor.map_or(0, |c| c + 1);
        if keep < self.entries.len() {
            debug!(
                "history: discarding {} redo entries",
                self.entries.len() - keep
            );
            self.entries.truncate(keep);
        }

        self.entries.push(snapshot);
        self.cursor = Some(self.entries.len() - 1);
        trace!("history: push, len={}", self.entries.len());
    }

    /// Step back one entry and return it
    pub fn undo(&mut self) -> Option<&Snapshot> {
        let cursor = self.cursor.filter(|&c| c > 0)? - 1;
        self.cursor = Some(cursor);
        debug!("history: undo to {}", cursor);
        self.entries.get(cursor)
    }

    /// Step forward one entry and return it
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let next = self.cursor.map_or(0, |c| c + 1);
        if self.cursor.is_none() || next >= self.entries.len() {
            return None;
        }
        self.cursor = Some(next);
        debug!("history: redo to {}", next);
        self.entries.get(next)
    }

    /// Whether `undo` would move the cursor
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    /// Whether a redo branch exists
    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    /// Snapshot at the cursor
    pub fn current(&self) -> Option<&Snapshot> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    /// Index of the current entry, `None` when empty
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of stored entries, redo branch included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use proptest::prelude::*;

    fn snap(tag: u8) -> Snapshot {
        Snapshot::new(&[tag; 4])
    }

    #[test]
    fn test_empty_store() {
        let mut store = HistoryStore::new();
        assert!(store.is_empty());
        assert!(!store.can_undo());
        assert!(!store.can_redo());
        assert!(store.undo().is_none());
        assert!(store.redo().is_none());
        assert!(store.current().is_none());
    }

    #[test]
    fn test_push_and_undo_redo() {
        let mut store = HistoryStore::with_initial(snap(0));
        store.push(snap(1));
        store.push(snap(2));
        assert_eq!(store.len(), 3);
        assert_eq!(store.cursor(), Some(2));

        assert_eq!(store.undo(), Some(&snap(1)));
        assert_eq!(store.undo(), Some(&snap(0)));
        assert!(store.undo().is_none());
        assert_eq!(store.cursor(), Some(0));

        assert_eq!(store.redo(), Some(&snap(1)));
        assert_eq!(store.redo(), Some(&snap(2)));
        assert!(store.redo().is_none());
        assert_eq!(store.current(), Some(&snap(2)));
    }

    #[test]
    fn test_duplicate_push_is_ignored() {
        let mut store = HistoryStore::with_initial(snap(0));
        store.push(snap(1));
        store.push(snap(1));
        assert_eq!(store.len(), 2);
        assert_eq!(store.cursor(), Some(1));
    }

    #[test]
    fn test_push_after_undo_discards_branch() {
        let mut store = HistoryStore::with_initial(snap(0));
        store.push(snap(1));
        store.push(snap(2));
        store.push(snap(3));
        store.undo();
        store.undo();
        assert!(store.can_redo());

        store.push(snap(9));
        assert_eq!(store.len(), 3);
        assert!(!store.can_redo());
        assert_eq!(store.undo(), Some(&snap(1)));
        assert_eq!(store.redo(), Some(&snap(9)));
    }

    #[test]
    fn test_branch_discard_abc() {
        let (a, b, c, d) = (snap(0xA), snap(0xB), snap(0xC), snap(0xD));
        let mut store = HistoryStore::new();
        store.push(a.clone());
        store.push(b);
        store.push(c);
        store.undo();
        store.undo();
        store.push(d);
        assert!(store.redo().is_none());
        assert_eq!(store.undo(), Some(&a));
    }

    #[test]
    fn test_push_equal_to_undone_state() {
        // Equal to the current entry, so nothing changes and redo survives
        let mut store = HistoryStore::with_initial(snap(0));
        store.push(snap(1));
        store.undo();
        store.push(snap(0));
        assert_eq!(store.len(), 2);
        assert!(store.can_redo());
    }

    #[test]
    fn test_clear() {
        let mut store = HistoryStore::with_initial(snap(0));
        store.push(snap(1));
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.cursor(), None);
    }

    #[test]
    fn test_snapshot_from_vec() {
        let s = Snapshot::from(vec![1u8, 2, 3]);
        assert_eq!(s.as_bytes(), &[1, 2, 3]);
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Push(u8),
        Undo,
        Redo,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..4).prop_map(Op::Push),
            Just(Op::Undo),
            Just(Op::Redo),
        ]
    }

    proptest! {
        #[test]
        fn prop_history_invariants(ops in proptest::collection::vec(op(), 0..64)) {
            let mut store = HistoryStore::with_initial(snap(0xFF));
            for op in ops {
                let before_len = store.len();
                let before_cursor = store.cursor();
                match op {
                    Op::Push(tag) => {
                        let dup = store.current() == Some(&snap(tag));
                        store.push(snap(tag));
                        if dup {
                            prop_assert_eq!(store.len(), before_len);
                            prop_assert_eq!(store.cursor(), before_cursor);
                        } else {
                            prop_assert!(!store.can_redo());
                            prop_assert_eq!(store.current(), Some(&snap(tag)));
                        }
                    }
                    Op::Undo => {
                        let could = store.can_undo();
                        prop_assert_eq!(store.undo().is_some(), could);
                        prop_assert_eq!(store.len(), before_len);
                    }
                    Op::Redo => {
                        let could = store.can_redo();
                        prop_assert_eq!(store.redo().is_some(), could);
                        prop_assert_eq!(store.len(), before_len);
                    }
                }
                let cursor = store.cursor().unwrap();
                prop_assert!(cursor < store.len());
                // Adjacent entries are never equal
                for pair in store.entries.windows(2) {
                    prop_assert_ne!(&pair[0], &pair[1]);
                }
            }
        }
    }
}
