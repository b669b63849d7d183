use colored::Colorize;
use std::io::{self, Write};
use std::process::{Command, ExitStatus};

use crate::error::CliError;

/// Task names understood by `devtools run`, with the external invocation each maps to.
///
/// Arguments are passed verbatim without a shell, so globs such as `*.pyc`
/// reach the program literally.
pub const COMMANDS: &[(&str, &[&str])] = &[
    ("test", &["pytest"]),
    ("lint", &["black", "--check", "src/", "tests/"]),
    ("format", &["black", "src/", "tests/"]),
    ("typecheck", &["mypy", "src/"]),
    (
        "clean",
        &["rm", "-rf", "__pycache__", "*.pyc", ".pytest_cache", ".mypy_cache"],
    ),
];

/// Task names in table order.
pub fn available() -> Vec<&'static str> {
    COMMANDS.iter().map(|(name, _)| *name).collect()
}

/// Invocation for `command`, if it is a known task.
pub fn lookup(command: &str) -> Option<&'static [&'static str]> {
    COMMANDS
        .iter()
        .find(|(name, _)| *name == command)
        .map(|(_, argv)| *argv)
}

/// Run a development task.
///
/// With `verbose`, the invocation is echoed and the child inherits stdio.
/// Otherwise output is captured and relayed only if the task fails.
/// A non-zero child exit becomes [`CliError::TaskFailed`] carrying that code.
pub fn run(command: &str, verbose: bool) -> Result<(), CliError> {
    let argv = lookup(command).ok_or_else(|| CliError::UnknownCommand {
        name: command.to_string(),
        available: available(),
    })?;
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| CliError::ExecutableNotFound {
            program: command.to_string(),
        })?;

    let mut cmd = Command::new(program);
    cmd.args(args);

    if verbose {
        println!("{}", format!("Running: {}", argv.join(" ")).blue());
    }
    tracing::debug!(task = command, program = *program, ?args, "spawning task");

    let (status, captured) = if verbose {
        (cmd.status().map_err(|e| spawn_error(program, e))?, None)
    } else {
        let output = cmd.output().map_err(|e| spawn_error(program, e))?;
        (output.status, Some((output.stdout, output.stderr)))
    };
    tracing::debug!(task = command, %status, "task exited");

    if status.success() {
        println!("{}", format!("✅ {command} completed successfully").green());
        return Ok(());
    }

    println!("{}", format!("❌ {command} failed").red());
    if let Some((stdout, stderr)) = captured {
        relay(&stdout, &stderr);
    }
    Err(CliError::TaskFailed {
        command: command.to_string(),
        code: exit_code(status),
    })
}

fn spawn_error(program: &str, err: io::Error) -> CliError {
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
            CliError::ExecutableNotFound {
                program: program.to_string(),
            }
        }
        _ => CliError::io("spawn", program, err),
    }
}

fn relay(stdout: &[u8], stderr: &[u8]) {
    if let Err(e) = write_flushed(&mut io::stdout().lock(), stdout) {
        tracing::debug!(error = %e, "could not relay captured stdout");
    }
    if let Err(e) = write_flushed(&mut io::stderr().lock(), stderr) {
        tracing::debug!(error = %e, "could not relay captured stderr");
    }
}

fn write_flushed(out: &mut impl Write, bytes: &[u8]) -> io::Result<()> {
    out.write_all(bytes)?;
    out.flush()
}

/// Child exit code, or `1` when the child was terminated by a signal.
fn exit_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(0) | None => 1,
        Some(code) => code,
    }
}
