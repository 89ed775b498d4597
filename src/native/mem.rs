//! In-process native clipboard — the crate's built-in service.
//!
//! Backs the three selection classes with ordered in-memory stores.
//! Doubles as the broker's test double (it can model commits from
//! other processes) and as a fallback service for headless embeddings
//! with no window system.

use std::sync::{Arc, Mutex};

use super::{NativeBuf, NativeClipboard, NativeError};
use crate::selection::SelectionClass;

/// Shared in-memory clipboard service.
///
/// Clones share one store, so a handle kept outside the broker can
/// observe and mutate the same state the broker sees. A poisoned lock
/// surfaces as [`NativeError`] on the fallible primitives and reads as
/// not-owned from `owns`; the service never panics across the
/// boundary.
#[derive(Debug, Clone, Default)]
pub struct MemClipboard {
    stores: Arc<Mutex<Stores>>,
}

#[derive(Debug, Default)]
struct Stores {
    primary: Store,
    secondary: Store,
    clipboard: Store,
}

impl Stores {
    fn slot(&self, class: SelectionClass) -> &Store {
        match class {
            SelectionClass::Primary => &self.primary,
            SelectionClass::Secondary => &self.secondary,
            SelectionClass::Clipboard => &self.clipboard,
        }
    }

    fn slot_mut(&mut self, class: SelectionClass) -> &mut Store {
        match class {
            SelectionClass::Primary => &mut self.primary,
            SelectionClass::Secondary => &mut self.secondary,
            SelectionClass::Clipboard => &mut self.clipboard,
        }
    }
}

/// One class's content: insertion-ordered entries plus the owner flag.
#[derive(Debug, Default)]
struct Store {
    entries: Vec<Entry>,
    owned: bool,
}

#[derive(Debug)]
struct Entry {
    target: String,
    data: Vec<u8>,
}

impl Store {
    /// Apply one commit: optional wipe, then insert/replace or remove.
    fn commit(&mut self, target: &str, data: Option<&[u8]>, clear: bool) {
        if clear {
            self.entries.clear();
        }
        match data {
            Some(bytes) => match self.entries.iter_mut().find(|e| e.target == target) {
                Some(entry) => entry.data = bytes.to_vec(),
                None => self.entries.push(Entry {
                    target: target.to_owned(),
                    data: bytes.to_vec(),
                }),
            },
            None => self.entries.retain(|e| e.target != target),
        }
    }
}

impl MemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn locked<T>(&self, op: impl FnOnce(&mut Stores) -> T) -> Result<T, NativeError> {
        let mut stores = self
            .stores
            .lock()
            .map_err(|_| NativeError::new("store lock poisoned"))?;
        Ok(op(&mut stores))
    }

    /// Commit an entry as another process would: the content changes
    /// hands and this process no longer owns the class.
    pub fn external_store(&self, class: SelectionClass, target: &str, data: &[u8]) {
        if let Ok(mut stores) = self.stores.lock() {
            let store = stores.slot_mut(class);
            store.commit(target, Some(data), false);
            store.owned = false;
        }
    }

    /// Erase a class's content as another process would.
    pub fn external_clear(&self, class: SelectionClass) {
        if let Ok(mut stores) = self.stores.lock() {
            let store = stores.slot_mut(class);
            store.entries.clear();
            store.owned = false;
        }
    }
}

impl NativeClipboard for MemClipboard {
    fn enumerate(&self, class: SelectionClass, max: usize) -> Result<Vec<NativeBuf>, NativeError> {
        self.locked(|stores| {
            stores
                .slot(class)
                .entries
                .iter()
                .take(max)
                .map(|e| NativeBuf::from_vec(e.target.clone().into_bytes()))
                .collect()
        })
    }

    fn fetch(
        &self,
        class: SelectionClass,
        target: &str,
    ) -> Result<Option<NativeBuf>, NativeError> {
        self.locked(|stores| {
            stores
                .slot(class)
                .entries
                .iter()
                .find(|e| e.target == target)
                .map(|e| NativeBuf::from_vec(e.data.clone()))
        })
    }

    fn store(
        &self,
        class: SelectionClass,
        target: &str,
        data: Option<&[u8]>,
        clear: bool,
    ) -> Result<(), NativeError> {
        self.locked(|stores| {
            let store = stores.slot_mut(class);
            store.commit(target, data, clear);
            // Any commit, including a removal, makes this process the
            // class's current source.
            store.owned = true;
        })
    }

    fn owns(&self, class: SelectionClass) -> bool {
        self.stores
            .lock()
            .map(|stores| stores.slot(class).owned)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(bufs: Vec<NativeBuf>) -> Vec<String> {
        bufs.iter()
            .map(|b| String::from_utf8(b.as_bytes().to_vec()).unwrap())
            .collect()
    }

    // -- Commit semantics --

    #[test]
    fn store_then_fetch_is_byte_identical() {
        let clip = MemClipboard::new();
        clip.store(SelectionClass::Clipboard, "text/plain", Some(b"h\xe9llo\0world"), false)
            .unwrap();

        let buf = clip
            .fetch(SelectionClass::Clipboard, "text/plain")
            .unwrap()
            .unwrap();
        assert_eq!(buf.as_bytes(), b"h\xe9llo\0world");
    }

    #[test]
    fn replacing_an_entry_keeps_one_copy() {
        let clip = MemClipboard::new();
        clip.store(SelectionClass::Primary, "text/plain", Some(b"one"), false)
            .unwrap();
        clip.store(SelectionClass::Primary, "text/plain", Some(b"two"), false)
            .unwrap();

        let listed = names(clip.enumerate(SelectionClass::Primary, 16).unwrap());
        assert_eq!(listed, vec!["text/plain"]);
        let buf = clip
            .fetch(SelectionClass::Primary, "text/plain")
            .unwrap()
            .unwrap();
        assert_eq!(buf.as_bytes(), b"two");
    }

    #[test]
    fn absent_data_removes_the_entry() {
        let clip = MemClipboard::new();
        clip.store(SelectionClass::Primary, "text/plain", Some(b"x"), false)
            .unwrap();
        clip.store(SelectionClass::Primary, "text/plain", None, false)
            .unwrap();

        assert!(clip.fetch(SelectionClass::Primary, "text/plain").unwrap().is_none());
        assert!(clip.enumerate(SelectionClass::Primary, 16).unwrap().is_empty());
    }

    #[test]
    fn clear_wipes_prior_entries_before_the_commit() {
        let clip = MemClipboard::new();
        clip.store(SelectionClass::Clipboard, "text/plain", Some(b"a"), false)
            .unwrap();
        clip.store(SelectionClass::Clipboard, "text/html", Some(b"<b>a</b>"), false)
            .unwrap();
        clip.store(SelectionClass::Clipboard, "image/png", Some(b"png"), true)
            .unwrap();

        let listed = names(clip.enumerate(SelectionClass::Clipboard, 16).unwrap());
        assert_eq!(listed, vec!["image/png"]);
    }

    #[test]
    fn enumeration_preserves_insertion_order_and_honors_max() {
        let clip = MemClipboard::new();
        for name in ["text/plain", "text/html", "image/png"] {
            clip.store(SelectionClass::Secondary, name, Some(b"x"), false)
                .unwrap();
        }

        let all = names(clip.enumerate(SelectionClass::Secondary, 16).unwrap());
        assert_eq!(all, vec!["text/plain", "text/html", "image/png"]);

        let capped = names(clip.enumerate(SelectionClass::Secondary, 2).unwrap());
        assert_eq!(capped, vec!["text/plain", "text/html"]);
    }

    #[test]
    fn classes_do_not_interfere() {
        let clip = MemClipboard::new();
        clip.store(SelectionClass::Primary, "text/plain", Some(b"primary"), false)
            .unwrap();

        assert!(clip.fetch(SelectionClass::Clipboard, "text/plain").unwrap().is_none());
        assert!(clip.enumerate(SelectionClass::Secondary, 16).unwrap().is_empty());
    }

    // -- Ownership --

    #[test]
    fn commit_claims_ownership() {
        let clip = MemClipboard::new();
        assert!(!clip.owns(SelectionClass::Clipboard));

        clip.store(SelectionClass::Clipboard, "text/plain", Some(b"x"), false)
            .unwrap();
        assert!(clip.owns(SelectionClass::Clipboard));
        assert!(!clip.owns(SelectionClass::Primary));
    }

    #[test]
    fn removal_also_claims_ownership() {
        let clip = MemClipboard::new();
        clip.store(SelectionClass::Primary, "text/plain", None, false)
            .unwrap();
        assert!(clip.owns(SelectionClass::Primary));
    }

    #[test]
    fn external_store_takes_ownership_away() {
        let clip = MemClipboard::new();
        clip.store(SelectionClass::Clipboard, "text/plain", Some(b"mine"), false)
            .unwrap();
        assert!(clip.owns(SelectionClass::Clipboard));

        clip.external_store(SelectionClass::Clipboard, "text/plain", b"theirs");
        assert!(!clip.owns(SelectionClass::Clipboard));

        let buf = clip
            .fetch(SelectionClass::Clipboard, "text/plain")
            .unwrap()
            .unwrap();
        assert_eq!(buf.as_bytes(), b"theirs");
    }

    #[test]
    fn external_clear_empties_and_disowns() {
        let clip = MemClipboard::new();
        clip.store(SelectionClass::Secondary, "text/plain", Some(b"x"), false)
            .unwrap();

        clip.external_clear(SelectionClass::Secondary);
        assert!(!clip.owns(SelectionClass::Secondary));
        assert!(clip.enumerate(SelectionClass::Secondary, 16).unwrap().is_empty());
    }

    // -- Shared handles --

    #[test]
    fn clones_share_one_store() {
        let clip = MemClipboard::new();
        let other = clip.clone();
        other
            .store(SelectionClass::Primary, "text/plain", Some(b"shared"), false)
            .unwrap();

        let buf = clip
            .fetch(SelectionClass::Primary, "text/plain")
            .unwrap()
            .unwrap();
        assert_eq!(buf.as_bytes(), b"shared");
    }
}
