//! Message types for the Elm-style editor controller
//!
//! All buffer and draft state changes flow through these messages.

/// Messages handled by [`crate::editor::EditorController::update`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMsg {
    /// Replace the buffer contents (user edit)
    SetCode(String),
    /// Persist the buffer under the draft key
    SaveDraft,
    /// Empty the buffer and remove the stored draft
    ClearDraft,
    /// Emit the buffer to the executor if it is not blank
    ExecuteSql,
}
