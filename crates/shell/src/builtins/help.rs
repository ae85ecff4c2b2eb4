//! The help command.

use async_trait::async_trait;

use webterm_vfs::FsHandle;

use crate::command::{Command, CommandResult};

/// List available commands with their descriptions.
///
/// Built from a snapshot of the registry taken at registration time;
/// commands registered afterwards do not appear.
pub struct Help {
    /// (name, description) pairs, sorted by name.
    entries: Vec<(String, String)>,
}

impl Help {
    /// Create a help command over the given entries.
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl Command for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn description(&self) -> &str {
        "list available commands"
    }

    fn usage(&self) -> &str {
        "help"
    }

    async fn execute(&self, _args: &[String], _stdin: Option<&str>, _fs: &FsHandle) -> CommandResult {
        let width: usize = self
            .entries
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);

        let lines: Vec<String> = self
            .entries
            .iter()
            .map(|(name, description)| format!("{name:width$}  {description}"))
            .collect();
        CommandResult::ok(lines.join("\n"))
    }
}
