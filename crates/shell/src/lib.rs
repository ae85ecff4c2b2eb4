//! Cooperative shell for the embedded web terminal.
//!
//! Tokenizes input lines with quoting, splits them into pipelines,
//! and dispatches stages to pluggable commands registered by name.
//! Each stage's textual output becomes the next stage's stdin.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use webterm_shell::{builtins, CommandRegistry, Shell};
//! use webterm_vfs::{FileSystem, HttpFetcher};
//!
//! let fetcher = Arc::new(HttpFetcher::new(manifest_url, content_root));
//! let fs = Arc::new(FileSystem::new(fetcher.clone(), fetcher));
//!
//! let mut registry = CommandRegistry::new();
//! builtins::register_all(&mut registry);
//!
//! let shell = Shell::new(fs, registry);
//! shell.init().await;
//! let outcome = shell.execute("cat about.md | grep rust").await;
//! ```

pub mod builtins;
pub mod command;
pub mod outcome;
pub mod token;

mod shell;

pub use command::{Command, CommandRegistry, CommandResult};
pub use outcome::{extract_link, format_link, ExecOutcome, Link, LINK_CLOSE, LINK_OPEN};
pub use shell::{Shell, USER_LABEL};
pub use token::tokenize;
