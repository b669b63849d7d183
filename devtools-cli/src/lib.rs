//! # devtools-cli
//!
//! Command-line tool for scaffolding and maintaining Python projects.
//!
//! This crate provides the `devtools` binary with the following commands:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `devtools init` | Create a new Python project skeleton |
//! | `devtools status` | Report project files and interpreter facts |
//! | `devtools run <task>` | Run test, lint, format, typecheck or clean |
//!
//! ## Architecture
//!
//! The CLI is organized into command modules under [`commands`]:
//!
//! - [`commands::init`] — project scaffolding (`devtools init`)
//! - [`commands::status`] — project health report (`devtools status`)
//! - [`commands::run`] — task dispatch to external tools (`devtools run`)
//! - [`commands::templates`] — template rendering and generated file contents
//!
//! Every handler reports failure through [`error::CliError`]; the binary prints
//! it in red and exits with [`error::CliError::exit_code`].

pub mod commands;
pub mod error;
pub mod logging;
