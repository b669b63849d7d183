//! Error type shared by every `devtools` command.

use std::path::PathBuf;
use thiserror::Error;

/// Failures a command handler can report.
///
/// Every variant maps to exit code `1` except [`CliError::TaskFailed`],
/// which carries the child's own exit code. See [`CliError::exit_code`].
#[derive(Debug, Error)]
pub enum CliError {
    /// `init` ended up without a project name.
    #[error("Project name is required")]
    MissingName,

    /// `init` target already exists in the current directory.
    #[error("Directory {name} already exists")]
    DirectoryExists { name: String },

    /// `run` was given a task name that is not in the command table.
    #[error("Unknown command: {name}\nAvailable commands: {}", .available.join(", "))]
    UnknownCommand {
        name: String,
        available: Vec<&'static str>,
    },

    /// The external program for a task could not be started.
    #[error("Command not found: {program}. Make sure dependencies are installed.")]
    ExecutableNotFound { program: String },

    /// The external program ran and exited unsuccessfully.
    #[error("{command} exited with status {code}")]
    TaskFailed { command: String, code: i32 },

    /// The interactive prompt was aborted or the terminal is unavailable.
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// A filesystem or process operation failed.
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::TaskFailed { code, .. } => *code,
            _ => 1,
        }
    }
}
