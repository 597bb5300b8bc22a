//! Commands a keystroke can trigger in a mounted editor

use std::fmt;
use std::str::FromStr;

use crate::messages::EditorMsg;

/// Editor actions that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Persist the buffer under the editor's draft key
    SaveDraft,
    /// Emit the buffer to the external executor
    ExecuteSql,
    /// Empty the buffer and drop its draft
    ClearDraft,
    /// Removes a default binding when used in a user keymap
    Unbound,
}

impl Command {
    /// The message this command sends to the controller
    pub fn to_msg(self) -> Option<EditorMsg> {
        match self {
            Command::SaveDraft => Some(EditorMsg::SaveDraft),
            Command::ExecuteSql => Some(EditorMsg::ExecuteSql),
            Command::ClearDraft => Some(EditorMsg::ClearDraft),
            Command::Unbound => None,
        }
    }

    /// Label used in shortcut hints
    pub fn label(self) -> &'static str {
        match self {
            Command::SaveDraft => "Save draft",
            Command::ExecuteSql => "Execute SQL",
            Command::ClearDraft => "Clear",
            Command::Unbound => "",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::SaveDraft => "SaveDraft",
            Command::ExecuteSql => "ExecuteSql",
            Command::ClearDraft => "ClearDraft",
            Command::Unbound => "Unbound",
        };
        f.write_str(name)
    }
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SaveDraft" => Ok(Command::SaveDraft),
            "ExecuteSql" => Ok(Command::ExecuteSql),
            "ClearDraft" => Ok(Command::ClearDraft),
            "Unbound" => Ok(Command::Unbound),
            _ => Err(()),
        }
    }
}
