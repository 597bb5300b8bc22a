//! Command-line argument parsing for the sqldraft host

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SQL draft editor
#[derive(Parser, Debug)]
#[command(name = "sqldraft", version, about = "SQL drafts with save/execute shortcuts")]
pub struct CliArgs {
    /// Keep drafts in memory for this run instead of drafts.json
    #[arg(long, global = true)]
    pub memory: bool,

    /// Use this drafts file instead of the one in the config directory
    #[arg(long, global = true, value_name = "PATH")]
    pub drafts: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Print the stored draft for KEY
    Show { key: String },

    /// Save SQL from FILE (or stdin) as the draft for KEY
    Save {
        key: String,
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Clear the draft for KEY
    Clear { key: String },

    /// List stored draft keys
    List,

    /// Execute the draft for KEY (or SQL from FILE/stdin); prints it on stdout
    Run {
        #[arg(long)]
        key: Option<String>,
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Mount the editor for KEY and press keystrokes, e.g. `ctrl+s ctrl+enter`
    Press {
        key: String,
        #[arg(required = true)]
        keystrokes: Vec<String>,
        /// Replace the buffer with SQL from FILE before pressing
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Log in to the admin backend
    Login {
        username: String,
        #[arg(long, env = "SQLDRAFT_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Log out of the admin backend
    Logout,

    /// List users (admin only)
    Users,
}

/// Where SQL text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlSource {
    File(PathBuf),
    Stdin,
}

impl SqlSource {
    pub fn from_arg(file: Option<PathBuf>) -> Self {
        match file {
            Some(path) if path.as_os_str() != "-" => SqlSource::File(path),
            _ => SqlSource::Stdin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_press() {
        let args =
            CliArgs::try_parse_from(["sqldraft", "press", "report", "ctrl+s", "ctrl+enter"])
                .unwrap();
        match args.command {
            CliCommand::Press {
                key, keystrokes, ..
            } => {
                assert_eq!(key, "report");
                assert_eq!(keystrokes, vec!["ctrl+s", "ctrl+enter"]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_press_requires_keystrokes() {
        assert!(CliArgs::try_parse_from(["sqldraft", "press", "report"]).is_err());
    }

    #[test]
    fn test_global_memory_flag() {
        let args = CliArgs::try_parse_from(["sqldraft", "run", "--memory"]).unwrap();
        assert!(args.memory);
    }

    #[test]
    fn test_dash_is_stdin() {
        assert_eq!(SqlSource::from_arg(Some(PathBuf::from("-"))), SqlSource::Stdin);
        assert_eq!(SqlSource::from_arg(None), SqlSource::Stdin);
        assert_eq!(
            SqlSource::from_arg(Some(PathBuf::from("q.sql"))),
            SqlSource::File(PathBuf::from("q.sql"))
        );
    }
}
