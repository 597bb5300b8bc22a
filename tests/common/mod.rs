//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use sqldraft::draft_store::MemoryDraftStore;
use sqldraft::keymap::{default_bindings, KeyCode, Keymap, Keystroke, Modifiers};
use sqldraft::{DraftStore, DraftStoreAdapter, DraftStoreError, EditorController, EditorProps, EventLog};

/// Which operations a [`FlakyStore`] rejects
#[derive(Debug, Clone, Copy, Default)]
pub struct Failures {
    pub get: bool,
    pub set: bool,
    pub remove: bool,
}

/// A memory store whose operations can be switched to fail
///
/// The switches are shared, so a test can flip them after the store has
/// been moved into an adapter.
#[derive(Debug)]
pub struct FlakyStore {
    inner: MemoryDraftStore,
    failures: Rc<Cell<Failures>>,
}

impl FlakyStore {
    pub fn new() -> (Self, Rc<Cell<Failures>>) {
        let failures = Rc::new(Cell::new(Failures::default()));
        (
            Self {
                inner: MemoryDraftStore::new(),
                failures: Rc::clone(&failures),
            },
            failures,
        )
    }
}

fn unavailable() -> DraftStoreError {
    DraftStoreError::Unavailable("storage disabled".to_string())
}

impl DraftStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, DraftStoreError> {
        if self.failures.get().get {
            return Err(unavailable());
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DraftStoreError> {
        if self.failures.get().set {
            return Err(unavailable());
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), DraftStoreError> {
        if self.failures.get().remove {
            return Err(unavailable());
        }
        self.inner.remove(key)
    }

    fn keys(&self) -> Result<Vec<String>, DraftStoreError> {
        self.inner.keys()
    }
}

/// Controller over `store` with an event log attached
pub fn controller_with(
    store: &DraftStoreAdapter,
    initial: &str,
    key: Option<&str>,
) -> (EditorController, EventLog) {
    let props = EditorProps::new(initial).with_draft_key(key.map(str::to_string));
    let mut controller = EditorController::new(props, store.clone());
    let log = EventLog::new();
    log.attach(controller.events_mut());
    (controller, log)
}

pub fn default_keymap() -> Keymap {
    Keymap::with_bindings(default_bindings())
}

pub fn ctrl_s() -> Keystroke {
    Keystroke::char_with_mods('s', Modifiers::CTRL)
}

pub fn ctrl_enter() -> Keystroke {
    Keystroke::new(KeyCode::Enter, Modifiers::CTRL)
}

pub fn meta_enter() -> Keystroke {
    Keystroke::new(KeyCode::Enter, Modifiers::META)
}
