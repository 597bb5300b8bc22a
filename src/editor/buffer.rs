//! In-memory editor text

/// The live text of one editor and the key it syncs with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorBuffer {
    code: String,
    draft_key: Option<String>,
    height: String,
}

impl EditorBuffer {
    pub fn new(code: String, draft_key: Option<String>, height: String) -> Self {
        Self {
            code,
            draft_key,
            height,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Replace the contents; returns whether the text actually changed
    pub fn set_code(&mut self, code: String) -> bool {
        if self.code == code {
            return false;
        }
        self.code = code;
        true
    }

    pub fn draft_key(&self) -> Option<&str> {
        self.draft_key.as_deref()
    }

    pub fn height(&self) -> &str {
        &self.height
    }

    /// Nothing but whitespace; the text itself is left as typed
    pub fn is_blank(&self) -> bool {
        self.code.trim().is_empty()
    }
}
