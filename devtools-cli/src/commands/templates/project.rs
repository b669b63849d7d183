use super::super::init::ProjectSpec;
use super::render;

const PYPROJECT_TOML: &str = r#"[project]
name = "{{name}}"
version = "0.1.0"
description = "A Python project"
readme = "README.md"
requires-python = ">=3.9"
dependencies = []

[build-system]
requires = ["hatchling"]
build-backend = "hatchling.build"

[tool.hatch.build.targets.wheel]
packages = ["src/{{module}}"]

[project.scripts]
{{module}} = "{{module}}.cli:main"

[tool.uv]
dev-dependencies = [
    "pytest>=7.0.0",
    "black>=23.0.0",
    "isort>=5.12.0",
    "mypy>=1.0.0",
]
"#;

const PACKAGE_INIT: &str = r#""""Main package for {{name}}."""

__version__ = "0.1.0"
"#;

const CLI_MODULE: &str = r#""""Command-line interface for {{name}}."""

import click


@click.group()
@click.version_option()
def main():
    """{{name}} command-line tool."""
    pass


@main.command()
def hello():
    """Say hello."""
    click.echo("Hello from {{name}}!")


if __name__ == "__main__":
    main()
"#;

const BASIC_TEST: &str = r#""""Basic tests."""

def test_example():
    """Example test."""
    assert True
"#;

fn vars(spec: &ProjectSpec) -> [(&str, &str); 2] {
    [("name", spec.name.as_str()), ("module", spec.module.as_str())]
}

pub fn pyproject_toml(spec: &ProjectSpec) -> String {
    render(PYPROJECT_TOML, &vars(spec))
}

pub fn readme(spec: &ProjectSpec) -> String {
    format!("# {}\n\nA Python project.\n", spec.name)
}

pub fn package_init(spec: &ProjectSpec) -> String {
    render(PACKAGE_INIT, &vars(spec))
}

pub fn cli_module(spec: &ProjectSpec) -> String {
    render(CLI_MODULE, &vars(spec))
}

pub fn tests_init() -> String {
    String::new()
}

pub fn basic_test() -> String {
    BASIC_TEST.to_string()
}
