//! Navigation commands: ls, cd, pwd.

use async_trait::async_trait;

use webterm_vfs::FsHandle;

use crate::command::{Command, CommandResult};

/// List directory contents.
pub struct Ls;

#[async_trait]
impl Command for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn description(&self) -> &str {
        "list directory contents"
    }

    fn usage(&self) -> &str {
        "ls [path]"
    }

    async fn execute(&self, args: &[String], _stdin: Option<&str>, fs: &FsHandle) -> CommandResult {
        let target: Option<&str> = args.first().map(String::as_str);
        match fs.readdir(target) {
            Some(names) => CommandResult::ok(names.join("\n")),
            None => CommandResult::err(format!(
                "ls: {}: No such file or directory",
                target.unwrap_or(".")
            )),
        }
    }
}

/// Change the current directory.
pub struct Cd;

#[async_trait]
impl Command for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn description(&self) -> &str {
        "change the working directory"
    }

    fn usage(&self) -> &str {
        "cd [path]"
    }

    async fn execute(&self, args: &[String], _stdin: Option<&str>, fs: &FsHandle) -> CommandResult {
        let target: &str = args.first().map(String::as_str).unwrap_or(fs.home_path());
        if fs.cd(target) {
            CommandResult::ok("")
        } else {
            CommandResult::err(format!("cd: {target}: Not a directory"))
        }
    }
}

/// Print the current directory.
pub struct Pwd;

#[async_trait]
impl Command for Pwd {
    fn name(&self) -> &str {
        "pwd"
    }

    fn description(&self) -> &str {
        "print the working directory"
    }

    fn usage(&self) -> &str {
        "pwd"
    }

    async fn execute(&self, _args: &[String], _stdin: Option<&str>, fs: &FsHandle) -> CommandResult {
        CommandResult::ok(fs.cwd_path())
    }
}
