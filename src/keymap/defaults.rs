//! Default keybindings for the SQL editor
//!
//! The shipped keymap is `keymap.yaml` at the crate root, embedded at compile
//! time. A user keymap at `~/.config/sqldraft/keymap.yaml` is merged on top.

use std::path::Path;

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::types::{KeyCode, Keystroke, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// The embedded keymap source, for writing a starter user keymap
pub fn default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load and merge keymaps: embedded defaults + the user's keymap file
pub fn load_default_keymap() -> Vec<Keybinding> {
    let user_path = crate::config_paths::keymap_file();
    load_keymap_with_overrides(user_path.as_deref())
}

/// Embedded defaults merged with the keymap at `user_path`, if it exists
///
/// A broken user keymap is logged and ignored.
pub fn load_keymap_with_overrides(user_path: Option<&Path>) -> Vec<Keybinding> {
    let mut bindings = match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::debug!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    if let Some(user_path) = user_path.filter(|p| p.exists()) {
        match load_keymap_file(user_path) {
            Ok(user_bindings) => {
                tracing::info!(
                    "Merging user keymap from {} ({} bindings)",
                    user_path.display(),
                    user_bindings.len()
                );
                bindings = merge_bindings(bindings, user_bindings);
            }
            Err(e) => {
                tracing::warn!("Failed to load user keymap from {}: {}", user_path.display(), e);
            }
        }
    }

    bindings
}

/// Merge user bindings into base bindings
///
/// - same keystroke as a base binding → replaces it
/// - command `Unbound` → removes base bindings for that keystroke
/// - otherwise → appended
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.command == Command::Unbound {
            result.retain(|b| b.keystroke != user_binding.keystroke);
            continue;
        }

        match result
            .iter()
            .position(|b| b.keystroke == user_binding.keystroke)
        {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}

/// Hardcoded fallback matching `keymap.yaml`
///
/// Both Ctrl and Meta variants are bound so the shortcuts behave the same
/// whichever modifier the host reports for the platform command key.
pub fn default_bindings() -> Vec<Keybinding> {
    let mut bindings = Vec::with_capacity(6);
    for mods in [Modifiers::CTRL, Modifiers::META] {
        bindings.push(bind(KeyCode::Char('s'), mods, Command::SaveDraft));
        bindings.push(bind(KeyCode::Enter, mods, Command::ExecuteSql));
        bindings.push(bind(KeyCode::NumpadEnter, mods, Command::ExecuteSql));
    }
    bindings
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}
