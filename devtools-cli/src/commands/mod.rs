//! Command implementations for the `devtools` CLI.
//!
//! Each submodule corresponds to a top-level CLI command.

/// Project scaffolding — `devtools init`.
///
/// Creates `./<name>` with pyproject.toml, README.md, a `src/<module>/`
/// package (with a click CLI stub) and a `tests/` package holding one
/// example test.
pub mod init;

/// Task runner — `devtools run <command>`.
///
/// Maps the task names test, lint, format, typecheck and clean to
/// pytest, black, mypy and rm invocations and relays their exit codes.
pub mod run;

/// Project health — `devtools status`.
///
/// Reports which of the expected project files exist, the Python
/// interpreter version, and whether a virtual environment is active.
pub mod status;

/// Shared template helpers and the generated project file templates.
pub mod templates;
