use colored::Colorize;
use dialoguer::{Input, Select};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::templates;
use crate::error::CliError;

/// Project templates accepted by `devtools init --template`.
///
/// The choice is shown to the operator but every template currently
/// produces the same skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Template {
    #[default]
    Basic,
    Web,
    Cli,
    Lib,
}

impl Template {
    pub const ALL: [Template; 4] = [Template::Basic, Template::Web, Template::Cli, Template::Lib];

    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Basic => "basic",
            Template::Web => "web",
            Template::Cli => "cli",
            Template::Lib => "lib",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw CLI flags for `devtools init`, before prompting.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub name: Option<String>,
    pub template: Option<Template>,
    pub interactive: bool,
}

/// Resolved project to scaffold.
#[derive(Debug, Clone)]
pub struct ProjectSpec {
    pub name: String,
    /// Normalized identifier form of `name`, used for the package directory.
    pub module: String,
    pub template: Template,
}

impl ProjectSpec {
    pub fn new(name: impl Into<String>, template: Template) -> Self {
        let name = name.into();
        let module = templates::to_module_name(&name);
        ProjectSpec {
            name,
            module,
            template,
        }
    }
}

/// One generated file, relative to the project root.
#[derive(Debug, Clone)]
pub struct ManifestEntry {
    pub path: PathBuf,
    pub contents: String,
}

/// Source of answers for interactive mode.
pub trait Prompter {
    fn project_name(&self) -> Result<String, CliError>;
    fn template(&self, default: Template) -> Result<Template, CliError>;
}

/// Terminal prompts backed by `dialoguer`.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn project_name(&self) -> Result<String, CliError> {
        let name: String = Input::new()
            .with_prompt("Project name")
            .allow_empty(true)
            .interact_text()?;
        Ok(name)
    }

    fn template(&self, default: Template) -> Result<Template, CliError> {
        let choices: Vec<&str> = Template::ALL.iter().map(Template::as_str).collect();
        let default_idx = Template::ALL
            .iter()
            .position(|t| *t == default)
            .unwrap_or(0);
        let idx = Select::new()
            .with_prompt("Project template")
            .items(&choices)
            .default(default_idx)
            .interact()?;
        Ok(Template::ALL[idx])
    }
}

/// Initialize a new Python project in `./<name>`.
///
/// Prompts through `dialoguer` for anything missing when `interactive` is set.
pub fn run(opts: InitOptions) -> Result<(), CliError> {
    run_with_prompter(opts, &TerminalPrompter)
}

/// Same as [`run`], with the interactive answers supplied by `prompter`.
///
/// On success the process working directory is left inside the new project.
/// Nothing is rolled back if a write fails partway through.
pub fn run_with_prompter(opts: InitOptions, prompter: &dyn Prompter) -> Result<(), CliError> {
    let spec = resolve(opts, prompter)?;
    generate_project(&spec)
}

fn resolve(opts: InitOptions, prompter: &dyn Prompter) -> Result<ProjectSpec, CliError> {
    let mut name = opts.name.filter(|n| !n.trim().is_empty());
    let mut template = opts.template;

    if opts.interactive {
        if name.is_none() {
            name = Some(prompter.project_name()?);
        }
        if template.is_none() {
            template = Some(prompter.template(Template::default())?);
        }
    }

    let name = match name {
        Some(n) if !n.trim().is_empty() => n,
        _ => return Err(CliError::MissingName),
    };

    Ok(ProjectSpec::new(name, template.unwrap_or_default()))
}

/// Files written for `spec`, in creation order.
pub fn manifest(spec: &ProjectSpec) -> Vec<ManifestEntry> {
    let package = Path::new("src").join(&spec.module);
    vec![
        ManifestEntry {
            path: PathBuf::from("pyproject.toml"),
            contents: templates::project::pyproject_toml(spec),
        },
        ManifestEntry {
            path: PathBuf::from("README.md"),
            contents: templates::project::readme(spec),
        },
        ManifestEntry {
            path: package.join("__init__.py"),
            contents: templates::project::package_init(spec),
        },
        ManifestEntry {
            path: package.join("cli.py"),
            contents: templates::project::cli_module(spec),
        },
        ManifestEntry {
            path: PathBuf::from("tests/__init__.py"),
            contents: templates::project::tests_init(),
        },
        ManifestEntry {
            path: PathBuf::from("tests/test_basic.py"),
            contents: templates::project::basic_test(),
        },
    ]
}

fn generate_project(spec: &ProjectSpec) -> Result<(), CliError> {
    let project_dir = Path::new(&spec.name);
    if project_dir.exists() {
        return Err(CliError::DirectoryExists {
            name: spec.name.clone(),
        });
    }

    println!("{}", format!("Creating Python project: {}", spec.name).green());
    println!("{}", format!("Template: {}", spec.template).blue());

    fs::create_dir(project_dir).map_err(|e| CliError::io("create", project_dir, e))?;
    std::env::set_current_dir(project_dir)
        .map_err(|e| CliError::io("enter", project_dir, e))?;
    tracing::debug!(project = %spec.name, "entered project directory");

    for dir in [Path::new("src").join(&spec.module), PathBuf::from("tests")] {
        fs::create_dir_all(&dir).map_err(|e| CliError::io("create", &dir, e))?;
        tracing::debug!(path = %dir.display(), "created directory");
    }

    for entry in manifest(spec) {
        fs::write(&entry.path, &entry.contents)
            .map_err(|e| CliError::io("write", &entry.path, e))?;
        tracing::debug!(path = %entry.path.display(), bytes = entry.contents.len(), "wrote file");
    }

    println!("{}", "✅ Project initialized successfully!".green());
    println!("{}", "Next steps:".blue());
    println!("  cd {}", spec.name);
    println!("  uv sync --dev");
    println!("  uv run pytest");

    Ok(())
}
