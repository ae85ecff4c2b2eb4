//! Built-in commands.
//!
//! These cover the read/navigate surface of the filesystem; hosts can
//! register further commands (or replacements) through the registry.

mod file;
mod help;
mod nav;
mod text;

pub use file::Cat;
pub use help::Help;
pub use nav::{Cd, Ls, Pwd};
pub use text::Echo;

use crate::command::CommandRegistry;

/// Register the built-in command set, finishing with `help` built from
/// a snapshot of what is registered at that point.
pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(Box::new(Ls));
    registry.register(Box::new(Cd));
    registry.register(Box::new(Pwd));
    registry.register(Box::new(Cat));
    registry.register(Box::new(Echo));

    let mut entries: Vec<(String, String)> = registry.entries();
    entries.push(("help".to_string(), "list available commands".to_string()));
    entries.sort();
    registry.register(Box::new(Help::new(entries)));
}
