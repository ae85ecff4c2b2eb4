//! Text commands: echo.

use async_trait::async_trait;

use webterm_vfs::FsHandle;

use crate::command::{Command, CommandResult};

/// Print arguments separated by spaces.
pub struct Echo;

#[async_trait]
impl Command for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "print arguments"
    }

    fn usage(&self) -> &str {
        "echo [text ...]"
    }

    async fn execute(&self, args: &[String], _stdin: Option<&str>, _fs: &FsHandle) -> CommandResult {
        CommandResult::ok(args.join(" "))
    }
}
