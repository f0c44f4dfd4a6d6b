//! Process-wide UI state a dialog borrows while it is mounted.
//!
//! The [`Document`] stands in for the page root a dialog is portalled into.
//! It owns two pieces of global state:
//!
//! - the root overflow style, which the host page consults before scrolling
//! - the keyboard listener registry, which decides who receives key events
//!
//! Both are only ever acquired through guards. [`ScrollLock`] restores the
//! previous overflow when the last lock is dropped, [`KeyListener`]
//! unregisters itself on drop. [`MountGuard`] bundles the two so a dialog
//! releases both on every exit path, including being dropped mid-animation.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

/// Overflow value applied to the root while scrolling is locked.
pub const OVERFLOW_HIDDEN: &str = "hidden";

/// Identifier of a registered keyboard listener.
pub type ListenerId = u64;

#[derive(Debug, Default)]
struct DocumentState {
    root_overflow: Option<String>,
    scroll_locks: usize,
    saved_overflow: Option<String>,
    listeners: Vec<ListenerId>,
    next_listener: ListenerId,
}

/// Shared handle to the document root. Cloning yields another handle to the
/// same state.
#[derive(Debug, Clone, Default)]
pub struct Document {
    state: Rc<RefCell<DocumentState>>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current inline overflow style of the root, `None` when unset.
    #[must_use]
    pub fn root_overflow(&self) -> Option<String> {
        self.state.borrow().root_overflow.clone()
    }

    /// Overwrite the root overflow style.
    pub fn set_root_overflow(&self, value: Option<&str>) {
        self.state.borrow_mut().root_overflow = value.map(str::to_owned);
    }

    /// Whether the host page must refuse to scroll.
    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.state.borrow().root_overflow.as_deref() == Some(OVERFLOW_HIDDEN)
    }

    /// Lock page scrolling until the returned guard is dropped.
    ///
    /// Locks are counted: the first one saves the current overflow value and
    /// the last release restores it.
    #[must_use = "scrolling unlocks as soon as the guard is dropped"]
    pub fn lock_scroll(&self) -> ScrollLock {
        let mut state = self.state.borrow_mut();
        if state.scroll_locks == 0 {
            state.saved_overflow = state.root_overflow.take();
            state.root_overflow = Some(OVERFLOW_HIDDEN.to_string());
            debug!(previous = ?state.saved_overflow, "Locked page scroll");
        }
        state.scroll_locks += 1;
        ScrollLock {
            document: self.clone(),
        }
    }

    /// Register a keyboard listener until the returned guard is dropped.
    #[must_use = "the listener is removed as soon as the guard is dropped"]
    pub fn add_key_listener(&self) -> KeyListener {
        let mut state = self.state.borrow_mut();
        state.next_listener += 1;
        let id = state.next_listener;
        state.listeners.push(id);
        debug!(listener = id, "Registered key listener");
        KeyListener {
            document: self.clone(),
            id,
        }
    }

    #[must_use]
    pub fn has_key_listener(&self, id: ListenerId) -> bool {
        self.state.borrow().listeners.contains(&id)
    }

    /// Number of registered keyboard listeners.
    #[must_use]
    pub fn key_listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Acquire both side effects of a mounted dialog.
    #[must_use = "side effects are released as soon as the guard is dropped"]
    pub fn mount(&self) -> MountGuard {
        MountGuard {
            _scroll: self.lock_scroll(),
            listener: self.add_key_listener(),
        }
    }

    fn release_scroll(&self) {
        let mut state = self.state.borrow_mut();
        state.scroll_locks = state.scroll_locks.saturating_sub(1);
        if state.scroll_locks == 0 {
            state.root_overflow = state.saved_overflow.take();
            debug!(restored = ?state.root_overflow, "Released page scroll");
        }
    }

    fn remove_key_listener(&self, id: ListenerId) {
        self.state.borrow_mut().listeners.retain(|l| *l != id);
        debug!(listener = id, "Removed key listener");
    }
}

/// Holds the page scroll lock.
#[derive(Debug)]
pub struct ScrollLock {
    document: Document,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.document.release_scroll();
    }
}

/// Holds a keyboard listener registration.
#[derive(Debug)]
pub struct KeyListener {
    document: Document,
    id: ListenerId,
}

impl KeyListener {
    #[must_use]
    pub const fn id(&self) -> ListenerId {
        self.id
    }

    /// Whether this registration is still live in its document.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.document.has_key_listener(self.id)
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        self.document.remove_key_listener(self.id);
    }
}

/// Scroll lock and key listener of one mounted dialog.
#[derive(Debug)]
pub struct MountGuard {
    _scroll: ScrollLock,
    listener: KeyListener,
}

impl MountGuard {
    #[must_use]
    pub const fn listener(&self) -> &KeyListener {
        &self.listener
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_lock_restores_previous_value() {
        let document = Document::new();
        document.set_root_overflow(Some("scroll"));

        let lock = document.lock_scroll();
        assert!(document.is_scroll_locked());
        assert_eq!(document.root_overflow().as_deref(), Some("hidden"));

        drop(lock);
        assert!(!document.is_scroll_locked());
        assert_eq!(document.root_overflow().as_deref(), Some("scroll"));
    }

    #[test]
    fn test_nested_locks_restore_once_on_last_release() {
        let document = Document::new();
        let first = document.lock_scroll();
        let second = document.lock_scroll();

        drop(first);
        assert!(document.is_scroll_locked());
        drop(second);
        assert!(!document.is_scroll_locked());
        assert_eq!(document.root_overflow(), None);
    }

    #[test]
    fn test_key_listener_unregisters_on_drop() {
        let document = Document::new();
        let listener = document.add_key_listener();
        let id = listener.id();
        assert!(listener.is_registered());
        assert_eq!(document.key_listener_count(), 1);

        drop(listener);
        assert!(!document.has_key_listener(id));
        assert_eq!(document.key_listener_count(), 0);
    }

    #[test]
    fn test_mount_guard_releases_everything() {
        let document = Document::new();
        let guard = document.mount();
        assert!(document.is_scroll_locked());
        assert!(guard.listener().is_registered());

        drop(guard);
        assert!(!document.is_scroll_locked());
        assert_eq!(document.key_listener_count(), 0);
    }
}
