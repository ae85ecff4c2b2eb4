//! The shell: history, prompt, and pipeline execution.

use std::sync::RwLock;

use tracing::debug;

use webterm_vfs::FsHandle;

use crate::command::CommandRegistry;
use crate::outcome::{extract_link, ExecOutcome};
use crate::token::tokenize;

/// Fixed user label shown in the prompt.
pub const USER_LABEL: &str = "guest@site";

/// Cooperative shell over a virtual filesystem.
///
/// One `execute` call runs its whole pipeline to completion; stages run
/// strictly sequentially, each stage's output feeding the next stage's
/// stdin.
pub struct Shell {
    /// Shared filesystem, also handed to every command.
    fs: FsHandle,
    /// Registered command handlers.
    registry: CommandRegistry,
    /// Raw submitted lines, append-only.
    history: RwLock<Vec<String>>,
}

impl Shell {
    /// Create a shell over a filesystem and a command registry.
    pub fn new(fs: FsHandle, registry: CommandRegistry) -> Self {
        Self {
            fs,
            registry,
            history: RwLock::new(Vec::new()),
        }
    }

    /// Initialize the underlying filesystem.
    pub async fn init(&self) {
        self.fs.init().await;
    }

    /// The filesystem handle.
    pub fn fs(&self) -> &FsHandle {
        &self.fs
    }

    /// Display prompt: user label plus the current path, with the home
    /// prefix abbreviated to `~`.
    pub fn prompt(&self) -> String {
        let cwd: String = self.fs.cwd_path();
        let home: &str = self.fs.home_path();

        let short: String = if cwd == home {
            "~".to_string()
        } else if let Some(rest) = cwd.strip_prefix(home).filter(|r| r.starts_with('/')) {
            format!("~{rest}")
        } else {
            cwd
        };

        format!("{USER_LABEL}:{short}$ ")
    }

    /// Submitted lines so far (defensive copy).
    pub fn history(&self) -> Vec<String> {
        self.history.read().unwrap().clone()
    }

    /// Execute one input line.
    ///
    /// The line is trimmed, recorded to history (unless empty), split
    /// into pipeline stages on `|`, and dispatched stage by stage.
    /// Empty stages are silently skipped. An unregistered command name
    /// aborts the pipeline with an error outcome; later stages are not
    /// attempted.
    pub async fn execute(&self, line: &str) -> ExecOutcome {
        let trimmed: &str = line.trim();
        if trimmed.is_empty() {
            return ExecOutcome::empty();
        }

        self.history.write().unwrap().push(trimmed.to_string());

        let mut stdin: Option<String> = None;
        for stage in trimmed.split('|') {
            let tokens: Vec<String> = tokenize(stage);
            let Some((name, args)) = tokens.split_first() else {
                // Empty stage between two pipes; skip it.
                continue;
            };

            let Some(command) = self.registry.lookup(name) else {
                return ExecOutcome {
                    command: trimmed.to_string(),
                    output: format!("command not found: {name}"),
                    error: true,
                    link: None,
                };
            };

            debug!(command = %name, args = args.len(), "dispatching pipeline stage");
            let result = command.execute(args, stdin.as_deref(), &self.fs).await;
            if result.error {
                return ExecOutcome {
                    command: trimmed.to_string(),
                    output: result.output,
                    error: true,
                    link: None,
                };
            }
            stdin = Some(result.output);
        }

        let output: String = stdin.unwrap_or_default();
        let link = extract_link(&output);
        ExecOutcome {
            command: trimmed.to_string(),
            output,
            error: false,
            link,
        }
    }
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("prompt", &self.prompt())
            .field("history_len", &self.history.read().unwrap().len())
            .finish()
    }
}
