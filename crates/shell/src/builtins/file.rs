//! File commands: cat.

use async_trait::async_trait;

use webterm_vfs::FsHandle;

use crate::command::{Command, CommandResult};

/// Print file contents (or pass stdin through when given no paths).
pub struct Cat;

#[async_trait]
impl Command for Cat {
    fn name(&self) -> &str {
        "cat"
    }

    fn description(&self) -> &str {
        "print file contents"
    }

    fn usage(&self) -> &str {
        "cat [file ...]"
    }

    async fn execute(&self, args: &[String], stdin: Option<&str>, fs: &FsHandle) -> CommandResult {
        if args.is_empty() {
            return match stdin {
                Some(input) => CommandResult::ok(input),
                None => CommandResult::err("cat: missing operand"),
            };
        }

        let mut parts: Vec<String> = Vec::with_capacity(args.len());
        for path in args {
            match fs.read_file(path).await {
                Some(body) => parts.push(body),
                None => {
                    return CommandResult::err(format!("cat: {path}: No such file"));
                }
            }
        }
        CommandResult::ok(parts.join(""))
    }
}
