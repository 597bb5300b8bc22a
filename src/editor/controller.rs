//! Editor controller: buffer, draft persistence and execution gating
//!
//! Construction is initialization: a controller is always in its ready
//! state. Every operation runs to completion before returning; the only
//! side effects are store writes and emitted [`EditorEvent`]s.

use crate::draft_store::{DraftStoreAdapter, DraftStoreError};
use crate::events::{EditorEvent, EventEmitter, SubscriptionId};
use crate::keymap::Command;
use crate::messages::EditorMsg;

use super::buffer::EditorBuffer;
use super::EditorProps;

#[derive(Debug)]
pub struct EditorController {
    buffer: EditorBuffer,
    store: DraftStoreAdapter,
    events: EventEmitter,
    notify_changes: bool,
}

impl EditorController {
    /// Build a controller and load its draft, if any
    pub fn new(props: EditorProps, store: DraftStoreAdapter) -> Self {
        let EditorProps {
            initial_code,
            draft_key,
            height,
        } = props;
        let mut controller = Self {
            buffer: EditorBuffer::new(String::new(), None, height),
            store,
            events: EventEmitter::new(),
            notify_changes: false,
        };
        controller.initialize(initial_code, draft_key);
        controller
    }

    /// Emit [`EditorEvent::Change`] whenever the buffer text changes
    pub fn with_change_notifications(mut self, enabled: bool) -> Self {
        self.notify_changes = enabled;
        self
    }

    /// Reset the buffer from `initial_code`, or from the stored draft for
    /// `draft_key` when one exists. Emits nothing.
    ///
    /// An empty key disables persistence. A store that cannot be read counts
    /// as having no draft.
    pub fn initialize(&mut self, initial_code: impl Into<String>, draft_key: Option<String>) {
        let draft_key = draft_key.filter(|k| !k.is_empty());
        // The adapter has already logged a failed read
        let stored = draft_key
            .as_deref()
            .and_then(|key| self.store.get(key).ok().flatten());

        let restored = stored.is_some();
        let code = stored.unwrap_or_else(|| initial_code.into());
        tracing::debug!(key = ?draft_key, restored, "Editor initialized");

        let height = self.buffer.height().to_string();
        self.buffer = EditorBuffer::new(code, draft_key, height);
    }

    pub fn code(&self) -> &str {
        self.buffer.code()
    }

    pub fn draft_key(&self) -> Option<&str> {
        self.buffer.draft_key()
    }

    pub fn height(&self) -> &str {
        self.buffer.height()
    }

    pub fn buffer(&self) -> &EditorBuffer {
        &self.buffer
    }

    pub fn store(&self) -> &DraftStoreAdapter {
        &self.store
    }

    pub fn events_mut(&mut self) -> &mut EventEmitter {
        &mut self.events
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&EditorEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(listener)
    }

    /// Replace the buffer text. Nothing is persisted.
    pub fn set_code(&mut self, text: impl Into<String>) {
        if self.buffer.set_code(text.into()) && self.notify_changes {
            self.events
                .emit(EditorEvent::Change(self.buffer.code().to_string()));
        }
    }

    /// Store the buffer verbatim under the draft key and emit `Save`
    ///
    /// Without a draft key this does nothing. If the store rejects the
    /// write, the error is returned and no event is emitted.
    pub fn save_draft(&mut self) -> Result<(), DraftStoreError> {
        let Some(key) = self.buffer.draft_key() else {
            tracing::debug!("save_draft without draft key ignored");
            return Ok(());
        };
        self.store.set(key, self.buffer.code())?;
        self.events
            .emit(EditorEvent::Save(self.buffer.code().to_string()));
        Ok(())
    }

    /// Empty the buffer and remove its stored draft
    ///
    /// The buffer is emptied even when removing the draft fails.
    pub fn clear_draft(&mut self) -> Result<(), DraftStoreError> {
        self.set_code(String::new());
        match self.buffer.draft_key() {
            Some(key) => self.store.remove(key),
            None => Ok(()),
        }
    }

    /// Emit `Execute` with the buffer as typed, unless it is blank
    ///
    /// Returns whether the event was emitted.
    pub fn execute_sql(&mut self) -> bool {
        if self.buffer.is_blank() {
            tracing::debug!("execute_sql on blank buffer ignored");
            return false;
        }
        self.events
            .emit(EditorEvent::Execute(self.buffer.code().to_string()));
        true
    }

    /// Elm-style entry point for all controller operations
    pub fn update(&mut self, msg: EditorMsg) -> Result<(), DraftStoreError> {
        match msg {
            EditorMsg::SetCode(text) => self.set_code(text),
            EditorMsg::SaveDraft => self.save_draft()?,
            EditorMsg::ClearDraft => self.clear_draft()?,
            EditorMsg::ExecuteSql => {
                self.execute_sql();
            }
        }
        Ok(())
    }

    pub fn handle_command(&mut self, command: Command) -> Result<(), DraftStoreError> {
        match command.to_msg() {
            Some(msg) => self.update(msg),
            None => Ok(()),
        }
    }
}
