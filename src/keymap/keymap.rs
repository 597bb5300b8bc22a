//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::types::Keystroke;

/// The keymap stores all keybindings and handles lookup
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<Keybinding>,
    /// Keystroke to index into `bindings`; the last binding added wins
    lookup: HashMap<Keystroke, usize>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    /// Add a binding; `Unbound` bindings are not stored
    pub fn add_binding(&mut self, binding: Keybinding) {
        if binding.command == Command::Unbound {
            return;
        }
        self.lookup.insert(binding.keystroke, self.bindings.len());
        self.bindings.push(binding);
    }

    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        self.lookup
            .get(keystroke)
            .map(|&idx| self.bindings[idx].command)
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    /// Every keystroke that currently resolves to `command`
    pub fn keystrokes_for(&self, command: Command) -> Vec<Keystroke> {
        self.bindings
            .iter()
            .filter(|b| b.command == command && self.lookup(&b.keystroke) == Some(command))
            .map(|b| b.keystroke)
            .collect()
    }

    /// Display string for a command's first keybinding
    pub fn display_for(&self, command: Command) -> Option<String> {
        self.keystrokes_for(command)
            .first()
            .map(|k| k.display_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::{KeyCode, Modifiers};

    fn ctrl_s() -> Keystroke {
        Keystroke::new(KeyCode::Char('s'), Modifiers::CTRL)
    }

    fn ctrl_enter() -> Keystroke {
        Keystroke::new(KeyCode::Enter, Modifiers::CTRL)
    }

    #[test]
    fn test_lookup() {
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(ctrl_s(), Command::SaveDraft),
            Keybinding::new(ctrl_enter(), Command::ExecuteSql),
        ]);

        assert_eq!(keymap.lookup(&ctrl_s()), Some(Command::SaveDraft));
        assert_eq!(keymap.lookup(&ctrl_enter()), Some(Command::ExecuteSql));
        assert_eq!(keymap.lookup(&Keystroke::key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_later_binding_wins() {
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(ctrl_s(), Command::SaveDraft),
            Keybinding::new(ctrl_s(), Command::ClearDraft),
        ]);

        assert_eq!(keymap.lookup(&ctrl_s()), Some(Command::ClearDraft));
        assert!(keymap.keystrokes_for(Command::SaveDraft).is_empty());
    }

    #[test]
    fn test_keystrokes_for_multiple() {
        let numpad = Keystroke::new(KeyCode::NumpadEnter, Modifiers::CTRL);
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(ctrl_enter(), Command::ExecuteSql),
            Keybinding::new(numpad, Command::ExecuteSql),
        ]);

        assert_eq!(
            keymap.keystrokes_for(Command::ExecuteSql),
            vec![ctrl_enter(), numpad]
        );
    }

    #[test]
    fn test_unbound_is_ignored() {
        let keymap = Keymap::with_bindings(vec![Keybinding::new(ctrl_s(), Command::Unbound)]);
        assert!(keymap.bindings().is_empty());
    }

    #[test]
    fn test_display_for_missing_command() {
        let keymap = Keymap::new();
        assert_eq!(keymap.display_for(Command::SaveDraft), None);
    }
}
