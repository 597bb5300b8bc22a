//! Observable editor events
//!
//! The controller reports what it did through an [`EventEmitter`]. Hosts
//! subscribe closures; tests usually attach an [`EventLog`] and assert on
//! what was recorded.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Something a mounted editor tells its host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// The draft was persisted; carries the stored text
    Save(String),
    /// The buffer should be run; carries the untrimmed text
    Execute(String),
    /// The buffer changed (only when change notifications are enabled)
    Change(String),
}

impl EditorEvent {
    pub fn name(&self) -> &'static str {
        match self {
            EditorEvent::Save(_) => "save",
            EditorEvent::Execute(_) => "execute",
            EditorEvent::Change(_) => "change",
        }
    }

    pub fn payload(&self) -> &str {
        match self {
            EditorEvent::Save(code) | EditorEvent::Execute(code) | EditorEvent::Change(code) => {
                code
            }
        }
    }
}

/// Handle returned by [`EventEmitter::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&EditorEvent)>;

/// Fan-out of editor events to subscribed listeners, in subscription order
#[derive(Default)]
pub struct EventEmitter {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&EditorEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn emit(&mut self, event: EditorEvent) {
        tracing::debug!(event = event.name(), bytes = event.payload().len(), "Emit");
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Shared recorder of emitted events
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<EditorEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe this log to `emitter`
    pub fn attach(&self, emitter: &mut EventEmitter) -> SubscriptionId {
        let events = Rc::clone(&self.events);
        emitter.subscribe(move |event| events.borrow_mut().push(event.clone()))
    }

    pub fn events(&self) -> Vec<EditorEvent> {
        self.events.borrow().clone()
    }

    /// Payloads of every event named `name`, oldest first
    pub fn emitted(&self, name: &str) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.name() == name)
            .map(|e| e.payload().to_string())
            .collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}
