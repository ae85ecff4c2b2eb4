//! Command trait, registry, and result types.

use std::collections::HashMap;

use async_trait::async_trait;

use webterm_vfs::FsHandle;

/// Output of a single command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Textual output; becomes the next pipeline stage's stdin.
    pub output: String,
    /// Whether the command failed.
    pub error: bool,
}

impl CommandResult {
    /// Successful result with the given output.
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            error: false,
        }
    }

    /// Failed result with a user-facing message.
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            output: message.into(),
            error: true,
        }
    }
}

/// A single executable command.
#[async_trait]
pub trait Command: Send + Sync {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "ls [path]").
    fn usage(&self) -> &str;

    /// Run the command.
    ///
    /// # Arguments
    /// * `args` - Tokens after the command name
    /// * `stdin` - Output of the previous pipeline stage, if any
    /// * `fs` - Filesystem handle for read/navigate operations
    async fn execute(&self, args: &[String], stdin: Option<&str>, fs: &FsHandle) -> CommandResult;
}

/// Name-keyed table of command handlers.
///
/// Lookup is an exact, case-sensitive match; registering a name twice
/// replaces the earlier handler (last registration wins).
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under its own name.
    pub fn register(&mut self, command: Box<dyn Command>) {
        self.commands.insert(command.name().to_string(), command);
    }

    /// Look up a command by exact name.
    pub fn lookup(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Registered (name, description) pairs, sorted by name.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .commands
            .values()
            .map(|c| (c.name().to_string(), c.description().to_string()))
            .collect();
        entries.sort();
        entries
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.entries().len())
            .finish()
    }
}
