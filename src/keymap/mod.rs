//! Configurable keyboard mapping for the SQL editor
//!
//! Maps host keystrokes to the editor's commands:
//! - Ctrl/Meta+S saves the draft
//! - Ctrl/Meta+Enter executes the buffer
//! - user customization via `keymap.yaml`
//!
//! # Architecture
//!
//! ```text
//! host key event → Keystroke → InputRegistry::dispatch → ShortcutTrigger → EditorMsg
//! ```

mod binding;
mod command;
mod config;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use defaults::{
    default_bindings, default_keymap_yaml, load_default_keymap, load_keymap_with_overrides,
    merge_bindings,
};
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};

#[cfg(test)]
mod tests;
