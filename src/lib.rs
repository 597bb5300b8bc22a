//! sqldraft - SQL draft editor core
//!
//! An Elm-style controller for a SQL editing widget: a text buffer synced
//! with a keyed draft store, an execute signal gated on non-blank content,
//! and keyboard shortcuts bound for exactly the lifetime of a mount. The
//! admin backend it sits in front of is reached through [`api`], and
//! [`router`] holds the console's navigation guard.

pub mod api;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod draft_store;
pub mod editor;
pub mod events;
pub mod keymap;
pub mod messages;
pub mod router;
pub mod shortcuts;
pub mod tracing;

// Re-export commonly used types
pub use config::AppConfig;
pub use draft_store::{DraftStore, DraftStoreAdapter, DraftStoreError};
pub use editor::{EditorController, EditorProps, MountedEditor};
pub use events::{EditorEvent, EventLog};
pub use messages::EditorMsg;
pub use shortcuts::{InputRegistry, ShortcutBinding};
