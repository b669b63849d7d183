use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;
use tabled::{settings::Style, Table, Tabled};

use crate::error::CliError;

/// Paths checked by `devtools status`, relative to the working directory.
pub const CHECKED_PATHS: &[&str] = &["pyproject.toml", "README.md", ".gitignore", "src/", "tests/"];

/// Interpreters probed, in order of preference.
const INTERPRETERS: &[&str] = &["python3", "python"];

const PROBE_SCRIPT: &str =
    "import sys; print('%d.%d.%d' % sys.version_info[:3], int(sys.prefix != sys.base_prefix))";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCheck {
    pub path: &'static str,
    pub exists: bool,
}

/// Facts reported by the Python interpreter found on `PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter {
    /// `major.minor.micro`
    pub version: String,
    /// True when `sys.prefix` differs from `sys.base_prefix` (a virtual environment).
    pub isolated: bool,
}

#[derive(Debug, Clone)]
pub struct StatusReport {
    pub checks: Vec<PathCheck>,
    pub interpreter: Option<Interpreter>,
}

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "File/Directory")]
    path: &'static str,
    #[tabled(rename = "Status")]
    status: String,
}

/// Show project status and health checks for the current directory.
///
/// Read-only. Always returns `Ok(())`, a missing interpreter included.
pub fn run() -> Result<(), CliError> {
    let report = collect(Path::new("."));
    let stdout = io::stdout();
    render(&report, &mut stdout.lock()).map_err(|e| CliError::io("write", "<stdout>", e))
}

/// Check every path in [`CHECKED_PATHS`] under `root` and probe the interpreter.
pub fn collect(root: &Path) -> StatusReport {
    let checks = CHECKED_PATHS
        .iter()
        .map(|&path| PathCheck {
            path,
            // "src/" on a regular file fails to stat, so check the bare name.
            exists: root.join(path.trim_end_matches('/')).exists(),
        })
        .collect();

    StatusReport {
        checks,
        interpreter: probe_interpreter(),
    }
}

/// Write the human-readable report.
pub fn render(report: &StatusReport, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "Python Project Status".bold().blue())?;

    let rows: Vec<StatusRow> = report
        .checks
        .iter()
        .map(|check| StatusRow {
            path: check.path,
            status: status_cell(check.exists),
        })
        .collect();
    let mut table = Table::new(&rows);
    table.with(Style::sharp());
    writeln!(out, "{table}")?;

    let (version, venv) = match &report.interpreter {
        Some(interp) => {
            let venv = if interp.isolated {
                "Active".green()
            } else {
                "Not active".yellow()
            };
            (interp.version.normal(), venv)
        }
        None => ("not found".yellow(), "Not active".yellow()),
    };
    writeln!(out)?;
    writeln!(out, "{} {}", "Python Version:".blue(), version)?;
    writeln!(out, "{} {}", "Virtual Environment:".blue(), venv)?;
    Ok(())
}

fn status_cell(exists: bool) -> String {
    if exists {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

fn probe_interpreter() -> Option<Interpreter> {
    let program = INTERPRETERS.iter().find_map(|name| which::which(name).ok())?;
    tracing::debug!(interpreter = %program.display(), "probing python interpreter");

    let output = match Command::new(&program).args(["-c", PROBE_SCRIPT]).output() {
        Ok(output) if output.status.success() => output,
        Ok(output) => {
            tracing::debug!(status = %output.status, "interpreter probe failed");
            return None;
        }
        Err(e) => {
            tracing::debug!(error = %e, "interpreter could not be started");
            return None;
        }
    };

    parse_probe(&String::from_utf8_lossy(&output.stdout))
}

/// Parse `"<major>.<minor>.<micro> <0|1>"` as printed by the probe script.
fn parse_probe(stdout: &str) -> Option<Interpreter> {
    let mut parts = stdout.split_whitespace();
    let version = parts.next()?;
    let isolated = match parts.next()? {
        "1" => true,
        "0" => false,
        _ => return None,
    };

    let numbers: Vec<&str> = version.split('.').collect();
    if numbers.len() != 3 || numbers.iter().any(|n| n.parse::<u32>().is_err()) {
        return None;
    }

    Some(Interpreter {
        version: version.to_string(),
        isolated,
    })
}
