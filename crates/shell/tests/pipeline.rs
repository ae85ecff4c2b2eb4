//! Integration tests for shell execution and pipelines.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use webterm_shell::{
    builtins, format_link, Command, CommandRegistry, CommandResult, ExecOutcome, Shell,
};
use webterm_vfs::{FileSystem, FsHandle, MemoryContentStore, MemoryManifestSource};

const MANIFEST: &str = r#"{
    "root": {
        "name": "/",
        "type": "directory",
        "children": {
            "readme.md": {"name": "readme.md", "type": "file", "size": 12},
            "home": {
                "name": "home",
                "type": "directory",
                "children": {
                    "guest": {
                        "name": "guest",
                        "type": "directory",
                        "children": {
                            "about.md": {"name": "about.md", "type": "file", "size": 20}
                        }
                    }
                }
            }
        }
    }
}"#;

/// Uppercase stdin.
struct Upper;

#[async_trait]
impl Command for Upper {
    fn name(&self) -> &str {
        "upper"
    }

    fn description(&self) -> &str {
        "uppercase stdin"
    }

    fn usage(&self) -> &str {
        "upper"
    }

    async fn execute(&self, _args: &[String], stdin: Option<&str>, _fs: &FsHandle) -> CommandResult {
        CommandResult::ok(stdin.unwrap_or_default().to_uppercase())
    }
}

/// Reverse stdin character order.
struct Reverse;

#[async_trait]
impl Command for Reverse {
    fn name(&self) -> &str {
        "reverse"
    }

    fn description(&self) -> &str {
        "reverse stdin"
    }

    fn usage(&self) -> &str {
        "reverse"
    }

    async fn execute(&self, _args: &[String], stdin: Option<&str>, _fs: &FsHandle) -> CommandResult {
        CommandResult::ok(stdin.unwrap_or_default().chars().rev().collect::<String>())
    }
}

/// Records whether it was ever invoked.
struct Recorder {
    invoked: Arc<AtomicBool>,
}

#[async_trait]
impl Command for Recorder {
    fn name(&self) -> &str {
        "record"
    }

    fn description(&self) -> &str {
        "record invocation"
    }

    fn usage(&self) -> &str {
        "record"
    }

    async fn execute(&self, _args: &[String], _stdin: Option<&str>, _fs: &FsHandle) -> CommandResult {
        self.invoked.store(true, Ordering::SeqCst);
        CommandResult::ok("recorded")
    }
}

/// Emits a link marker around its two arguments.
struct LinkTo;

#[async_trait]
impl Command for LinkTo {
    fn name(&self) -> &str {
        "linkto"
    }

    fn description(&self) -> &str {
        "emit a link marker"
    }

    fn usage(&self) -> &str {
        "linkto <href> <text>"
    }

    async fn execute(&self, args: &[String], _stdin: Option<&str>, _fs: &FsHandle) -> CommandResult {
        CommandResult::ok(format_link(&args[0], &args[1]))
    }
}

fn build_fs() -> FsHandle {
    let mut store: MemoryContentStore = MemoryContentStore::new();
    store.insert("/readme.md", "hello world!");
    store.insert("/home/guest/about.md", "all about the author");
    Arc::new(FileSystem::new(
        Arc::new(MemoryManifestSource::new(MANIFEST)),
        Arc::new(store),
    ))
}

async fn build_shell() -> Shell {
    let mut registry: CommandRegistry = CommandRegistry::new();
    builtins::register_all(&mut registry);
    registry.register(Box::new(Upper));
    registry.register(Box::new(Reverse));
    registry.register(Box::new(LinkTo));

    let shell: Shell = Shell::new(build_fs(), registry);
    shell.init().await;
    shell
}

#[tokio::test]
async fn pipeline_chains_stdin() {
    let shell: Shell = build_shell().await;
    let outcome: ExecOutcome = shell.execute("echo hi | upper | reverse").await;

    assert!(!outcome.error);
    assert_eq!(outcome.output, "IH");
}

#[tokio::test]
async fn command_not_found_aborts_pipeline() {
    let invoked: Arc<AtomicBool> = Arc::new(AtomicBool::new(false));
    let mut registry: CommandRegistry = CommandRegistry::new();
    builtins::register_all(&mut registry);
    registry.register(Box::new(Recorder {
        invoked: invoked.clone(),
    }));

    let shell: Shell = Shell::new(build_fs(), registry);
    shell.init().await;

    let outcome: ExecOutcome = shell.execute("doesnotexist arg | record").await;
    assert!(outcome.error);
    assert!(outcome.output.contains("doesnotexist"));
    // The stage after the unknown command must never run.
    assert!(!invoked.load(Ordering::SeqCst));
}

#[tokio::test]
async fn empty_input_is_a_noop_and_unrecorded() {
    let shell: Shell = build_shell().await;

    let outcome: ExecOutcome = shell.execute("   ").await;
    assert_eq!(outcome, ExecOutcome::empty());
    assert!(shell.history().is_empty());
}

#[tokio::test]
async fn history_appends_trimmed_lines() {
    let shell: Shell = build_shell().await;

    shell.execute("  pwd  ").await;
    shell.execute("echo one").await;
    shell.execute("nonsense").await;

    assert_eq!(shell.history(), ["pwd", "echo one", "nonsense"]);

    // Defensive copy: mutating the returned vec does not touch the shell.
    let mut copy: Vec<String> = shell.history();
    copy.clear();
    assert_eq!(shell.history().len(), 3);
}

#[tokio::test]
async fn empty_pipeline_stages_are_skipped() {
    let shell: Shell = build_shell().await;

    let outcome: ExecOutcome = shell.execute("echo hi | | upper").await;
    assert!(!outcome.error);
    assert_eq!(outcome.output, "HI");
}

#[tokio::test]
async fn quoted_arguments_survive_tokenization() {
    let shell: Shell = build_shell().await;

    let outcome: ExecOutcome = shell.execute(r#"echo "a b" c"#).await;
    assert_eq!(outcome.output, "a b c");
}

#[tokio::test]
async fn link_marker_is_surfaced() {
    let shell: Shell = build_shell().await;

    let outcome: ExecOutcome = shell.execute("linkto https://example.com Example").await;
    let link = outcome.link.expect("link extracted");
    assert_eq!(link.href, "https://example.com");
    assert_eq!(link.text, "Example");
}

#[tokio::test]
async fn plain_output_has_no_link() {
    let shell: Shell = build_shell().await;

    let outcome: ExecOutcome = shell.execute("echo no links here").await;
    assert!(outcome.link.is_none());
}

#[tokio::test]
async fn prompt_abbreviates_home() {
    let shell: Shell = build_shell().await;

    // init lands in /home/guest
    assert_eq!(shell.prompt(), "guest@site:~$ ");

    shell.execute("cd /home").await;
    assert_eq!(shell.prompt(), "guest@site:/home$ ");

    shell.execute("cd /home/guest").await;
    assert_eq!(shell.prompt(), "guest@site:~$ ");
}

#[tokio::test]
async fn builtins_cover_navigation_and_reads() {
    let shell: Shell = build_shell().await;

    let ls: ExecOutcome = shell.execute("ls /").await;
    assert_eq!(ls.output, "readme.md\nhome");

    let cat: ExecOutcome = shell.execute("cat /readme.md").await;
    assert_eq!(cat.output, "hello world!");

    let piped: ExecOutcome = shell.execute("cat about.md | upper").await;
    assert_eq!(piped.output, "ALL ABOUT THE AUTHOR");

    let cd: ExecOutcome = shell.execute("cd projects-that-do-not-exist").await;
    assert!(cd.error);

    shell.execute("cd /").await;
    let pwd: ExecOutcome = shell.execute("pwd").await;
    assert_eq!(pwd.output, "/");
}

#[tokio::test]
async fn cat_without_args_passes_stdin_through() {
    let shell: Shell = build_shell().await;

    let outcome: ExecOutcome = shell.execute("echo pass through | cat").await;
    assert_eq!(outcome.output, "pass through");
}

#[tokio::test]
async fn help_lists_commands() {
    let shell: Shell = build_shell().await;

    let outcome: ExecOutcome = shell.execute("help").await;
    assert!(!outcome.error);
    for name in ["cat", "cd", "echo", "help", "ls", "pwd"] {
        assert!(outcome.output.contains(name), "help missing {name}");
    }
}
