//! A controller mounted into a host, with its shortcuts bound

use crate::draft_store::{DraftStoreAdapter, DraftStoreError};
use crate::keymap::{Command, Keymap, Keystroke};
use crate::shortcuts::{InputRegistry, ShortcutBinding, ShortcutError, ShortcutTrigger};

use super::{EditorController, EditorProps};

/// An editor for the duration of one mount
///
/// Dropping it (or calling [`MountedEditor::unmount`]) releases both shortcut
/// registrations. Only the draft store outlives it.
#[derive(Debug)]
pub struct MountedEditor {
    controller: EditorController,
    shortcuts: ShortcutBinding,
}

impl MountedEditor {
    pub fn mount(
        props: EditorProps,
        store: DraftStoreAdapter,
        registry: &InputRegistry,
        keymap: &Keymap,
    ) -> Result<Self, ShortcutError> {
        let shortcuts = ShortcutBinding::acquire(registry, keymap)?;
        let controller = EditorController::new(props, store);
        Ok(Self {
            controller,
            shortcuts,
        })
    }

    /// Mount an already configured controller
    pub fn attach(
        controller: EditorController,
        registry: &InputRegistry,
        keymap: &Keymap,
    ) -> Result<Self, ShortcutError> {
        let shortcuts = ShortcutBinding::acquire(registry, keymap)?;
        Ok(Self {
            controller,
            shortcuts,
        })
    }

    pub fn controller(&self) -> &EditorController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut EditorController {
        &mut self.controller
    }

    pub fn shortcuts(&self) -> &ShortcutBinding {
        &self.shortcuts
    }

    /// Run the command a trigger carries
    ///
    /// Returns `Ok(false)` for triggers that belong to another editor or
    /// whose registration has already been released.
    pub fn handle_trigger(&mut self, trigger: &ShortcutTrigger) -> Result<bool, DraftStoreError> {
        if !trigger.is_live() || !self.shortcuts.owns(trigger) {
            tracing::debug!(command = %trigger.command(), "Stale or foreign trigger ignored");
            return Ok(false);
        }
        self.controller.handle_command(trigger.command())?;
        Ok(true)
    }

    /// Dispatch `keystroke` through `registry` and handle this editor's triggers
    ///
    /// Returns how many triggers were handled.
    pub fn press(
        &mut self,
        registry: &InputRegistry,
        keystroke: &Keystroke,
    ) -> Result<usize, DraftStoreError> {
        let mut handled = 0;
        for trigger in registry.dispatch(keystroke) {
            if self.handle_trigger(&trigger)? {
                handled += 1;
            }
        }
        Ok(handled)
    }

    /// Hint lines for the toolbar, e.g. `Ctrl+S Save draft`
    pub fn shortcut_hints(&self) -> Vec<String> {
        let mut hints = Vec::with_capacity(2);
        for (command, keys) in [
            (Command::SaveDraft, self.shortcuts.save_keys()),
            (Command::ExecuteSql, self.shortcuts.execute_keys()),
        ] {
            if let Some(first) = keys.first() {
                hints.push(format!("{} {}", first.display_string(), command.label()));
            }
        }
        hints
    }

    /// Release the shortcuts and hand the controller back
    pub fn unmount(mut self) -> EditorController {
        self.shortcuts.release();
        let MountedEditor { controller, .. } = self;
        controller
    }
}
