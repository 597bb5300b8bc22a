//! Scoped keyboard shortcut registrations
//!
//! The host owns an [`InputRegistry`], the table of keyboard listeners it
//! consults for every key event. A mounted editor holds a
//! [`ShortcutBinding`]: two [`Registration`]s (save, execute) that are removed
//! from the registry when the binding is released or dropped, on every exit
//! path including unwinding.
//!
//! Dispatching a keystroke yields [`ShortcutTrigger`]s. A trigger stays tied
//! to its registration, so one that was dispatched before the editor was
//! unmounted but handled afterwards reports itself as dead and is ignored.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::keymap::{Command, Keymap, Keystroke};

/// Identifies one registration within a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

#[derive(Debug)]
struct Listener {
    command: Command,
    keystrokes: Vec<Keystroke>,
    alive: Rc<Cell<bool>>,
}

#[derive(Debug, Default)]
struct RegistryInner {
    next_id: u64,
    listeners: BTreeMap<ListenerId, Listener>,
}

/// Host-side table of active keyboard listeners
#[derive(Debug, Clone, Default)]
pub struct InputRegistry {
    inner: Rc<RefCell<RegistryInner>>,
}

impl InputRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen for any of `keystrokes`, reporting `command` when one arrives
    pub fn register(&self, command: Command, keystrokes: Vec<Keystroke>) -> Registration {
        let mut inner = self.inner.borrow_mut();
        // Listeners whose release found the registry busy
        inner.listeners.retain(|_, l| l.alive.get());
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;

        let alive = Rc::new(Cell::new(true));
        inner.listeners.insert(
            id,
            Listener {
                command,
                keystrokes,
                alive: Rc::clone(&alive),
            },
        );
        tracing::debug!(?id, %command, "Shortcut registered");

        Registration {
            id,
            registry: Rc::downgrade(&self.inner),
            alive,
        }
    }

    /// Triggers for every live listener bound to `keystroke`, in registration order
    pub fn dispatch(&self, keystroke: &Keystroke) -> Vec<ShortcutTrigger> {
        self.inner
            .borrow()
            .listeners
            .iter()
            .filter(|(_, l)| l.alive.get() && l.keystrokes.contains(keystroke))
            .map(|(&id, l)| ShortcutTrigger {
                listener: id,
                command: l.command,
                alive: Rc::clone(&l.alive),
            })
            .collect()
    }

    /// Live listeners only
    pub fn listener_count(&self) -> usize {
        self.inner
            .borrow()
            .listeners
            .values()
            .filter(|l| l.alive.get())
            .count()
    }
}

/// One listener in an [`InputRegistry`]; removed on release or drop
#[derive(Debug)]
pub struct Registration {
    id: ListenerId,
    registry: Weak<RefCell<RegistryInner>>,
    alive: Rc<Cell<bool>>,
}

impl Registration {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.alive.get()
    }

    /// Remove the listener. Calling this more than once is a no-op.
    pub fn release(&mut self) {
        if !self.alive.replace(false) {
            return;
        }
        if let Some(registry) = self.registry.upgrade() {
            // try_borrow_mut: never panic while unwinding through a dispatch
            match registry.try_borrow_mut() {
                Ok(mut inner) => {
                    inner.listeners.remove(&self.id);
                }
                Err(_) => tracing::warn!(id = ?self.id, "Registry busy, listener left inert"),
            }
        }
        tracing::debug!(id = ?self.id, "Shortcut released");
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.release();
    }
}

/// A shortcut activation on its way to an editor
#[derive(Debug, Clone)]
pub struct ShortcutTrigger {
    listener: ListenerId,
    command: Command,
    alive: Rc<Cell<bool>>,
}

impl ShortcutTrigger {
    pub fn command(&self) -> Command {
        self.command
    }

    pub fn listener(&self) -> ListenerId {
        self.listener
    }

    /// False once the registration that produced this trigger is released
    pub fn is_live(&self) -> bool {
        self.alive.get()
    }
}

/// Errors acquiring a [`ShortcutBinding`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortcutError {
    #[error("no keystroke is bound to {0}")]
    Unbound(Command),
}

/// The save and execute registrations of one mounted editor
#[derive(Debug)]
pub struct ShortcutBinding {
    save: Registration,
    execute: Registration,
    save_keys: Vec<Keystroke>,
    execute_keys: Vec<Keystroke>,
}

impl ShortcutBinding {
    /// Register the save and execute shortcuts `keymap` defines
    ///
    /// Both commands must have at least one keystroke; on failure nothing
    /// stays registered.
    pub fn acquire(registry: &InputRegistry, keymap: &Keymap) -> Result<Self, ShortcutError> {
        let save_keys = keymap.keystrokes_for(Command::SaveDraft);
        if save_keys.is_empty() {
            return Err(ShortcutError::Unbound(Command::SaveDraft));
        }
        let execute_keys = keymap.keystrokes_for(Command::ExecuteSql);
        if execute_keys.is_empty() {
            return Err(ShortcutError::Unbound(Command::ExecuteSql));
        }

        let save = registry.register(Command::SaveDraft, save_keys.clone());
        // If this panicked, `save` would be dropped and released
        let execute = registry.register(Command::ExecuteSql, execute_keys.clone());

        Ok(Self {
            save,
            execute,
            save_keys,
            execute_keys,
        })
    }

    pub fn owns(&self, trigger: &ShortcutTrigger) -> bool {
        trigger.listener == self.save.id() || trigger.listener == self.execute.id()
    }

    pub fn is_active(&self) -> bool {
        self.save.is_active() || self.execute.is_active()
    }

    /// Release both registrations; idempotent
    pub fn release(&mut self) {
        self.save.release();
        self.execute.release();
    }

    pub fn save_keys(&self) -> &[Keystroke] {
        &self.save_keys
    }

    pub fn execute_keys(&self) -> &[Keystroke] {
        &self.execute_keys
    }
}
