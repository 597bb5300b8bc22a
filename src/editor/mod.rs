//! SQL draft editor core
//!
//! - [`EditorBuffer`] - the text and the draft key it syncs with
//! - [`EditorController`] - save / clear / execute over a shared draft store
//! - [`MountedEditor`] - a controller plus its keyboard shortcuts

mod buffer;
mod controller;
mod mount;

pub use buffer::EditorBuffer;
pub use controller::EditorController;
pub use mount::MountedEditor;

/// Mount parameters supplied by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorProps {
    pub initial_code: String,
    /// Key for draft persistence; `None` disables it
    pub draft_key: Option<String>,
    /// Presentational only, passed through to the host
    pub height: String,
}

impl EditorProps {
    pub fn new(initial_code: impl Into<String>) -> Self {
        Self {
            initial_code: initial_code.into(),
            ..Self::default()
        }
    }

    pub fn with_draft_key(mut self, draft_key: Option<String>) -> Self {
        self.draft_key = draft_key;
        self
    }

    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = height.into();
        self
    }
}

impl Default for EditorProps {
    fn default() -> Self {
        Self {
            initial_code: String::new(),
            draft_key: None,
            height: crate::config::default_height(),
        }
    }
}
