use devtools_cli::commands::{init, run};
use devtools_cli::error::CliError;
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct CwdGuard {
    original: PathBuf,
}

impl CwdGuard {
    fn new(path: &Path) -> Self {
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(path).unwrap();
        CwdGuard { original }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

fn installed(program: &str) -> bool {
    which::which(program).is_ok()
}

#[test]
fn run_unknown_command_lists_tasks() {
    let err = run::run("deploy", false).unwrap_err();
    assert_eq!(err.exit_code(), 1);

    let msg = err.to_string();
    for task in ["test", "lint", "format", "typecheck", "clean"] {
        assert!(msg.contains(task), "missing {task} in {msg}");
    }
}

#[test]
fn run_command_table_maps_tools() {
    assert_eq!(run::lookup("lint"), Some(&["black", "--check", "src/", "tests/"][..]));
    assert_eq!(run::lookup("format"), Some(&["black", "src/", "tests/"][..]));
    assert_eq!(
        run::lookup("clean"),
        Some(&["rm", "-rf", "__pycache__", "*.pyc", ".pytest_cache", ".mypy_cache"][..])
    );
}

#[test]
#[serial]
fn run_clean_removes_caches() {
    if !installed("rm") {
        return;
    }
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());

    fs::create_dir_all(".pytest_cache/v").unwrap();
    fs::create_dir("__pycache__").unwrap();
    fs::write("keep.py", "").unwrap();

    run::run("clean", false).unwrap();

    assert!(!Path::new(".pytest_cache").exists());
    assert!(!Path::new("__pycache__").exists());
    assert!(Path::new("keep.py").exists());
}

#[test]
#[serial]
fn run_test_without_tests_propagates_pytest_code() {
    if !installed("pytest") {
        return;
    }
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());

    let err = run::run("test", false).unwrap_err();
    // pytest exits with 5 when no tests are collected.
    assert!(matches!(err, CliError::TaskFailed { code: 5, .. }));
    assert_eq!(err.exit_code(), 5);
}

#[test]
#[serial]
fn run_missing_executable_fails() {
    if installed("mypy") {
        return;
    }
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());

    let err = run::run("typecheck", false).unwrap_err();
    assert!(matches!(err, CliError::ExecutableNotFound { ref program } if program == "mypy"));
    assert_eq!(err.exit_code(), 1);
}

#[test]
#[serial]
fn generated_project_passes_its_own_tests() {
    if !installed("pytest") {
        return;
    }
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());

    init::run(init::InitOptions {
        name: Some("demo".into()),
        ..Default::default()
    })
    .unwrap();

    // init leaves the process inside ./demo
    run::run("test", false).unwrap();
}
