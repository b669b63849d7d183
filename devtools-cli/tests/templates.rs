use devtools_cli::commands::init::{ProjectSpec, Template};
use devtools_cli::commands::templates::{project, render, to_module_name};

// ── to_module_name ──────────────────────────────────────────────────

#[test]
fn to_module_name_replaces_dashes() {
    assert_eq!(to_module_name("my-cool-app"), "my_cool_app");
}

#[test]
fn to_module_name_leaves_other_characters() {
    assert_eq!(to_module_name("My.App_2"), "My.App_2");
}

#[test]
fn to_module_name_empty() {
    assert_eq!(to_module_name(""), "");
}

// ── render ──────────────────────────────────────────────────────────

#[test]
fn render_replaces_every_occurrence() {
    let out = render("{{a}}-{{a}}/{{b}}", &[("a", "x"), ("b", "y")]);
    assert_eq!(out, "x-x/y");
}

#[test]
fn render_leaves_unknown_keys() {
    assert_eq!(render("{{missing}}", &[("a", "x")]), "{{missing}}");
}

#[test]
fn render_no_placeholders() {
    assert_eq!(render("plain text", &[("a", "x")]), "plain text");
}

// ── project templates ───────────────────────────────────────────────

#[test]
fn pyproject_has_no_unrendered_placeholders() {
    let spec = ProjectSpec::new("data-tool", Template::Basic);
    let out = project::pyproject_toml(&spec);
    assert!(!out.contains("{{"));
    assert!(out.contains("name = \"data-tool\""));
    assert!(out.contains("data_tool = \"data_tool.cli:main\""));
    assert!(out.contains("build-backend = \"hatchling.build\""));
}

#[test]
fn cli_module_keeps_python_braces() {
    let spec = ProjectSpec::new("demo", Template::Basic);
    let out = project::cli_module(&spec);
    assert!(!out.contains("{{"));
    assert!(out.contains("@click.group()"));
    assert!(out.contains("@main.command()"));
    assert!(out.contains("if __name__ == \"__main__\":"));
}

#[test]
fn package_init_exports_version() {
    let spec = ProjectSpec::new("demo", Template::Lib);
    let out = project::package_init(&spec);
    assert_eq!(out, "\"\"\"Main package for demo.\"\"\"\n\n__version__ = \"0.1.0\"\n");
}

#[test]
fn basic_test_is_tautology() {
    assert!(project::basic_test().contains("assert True"));
    assert!(project::tests_init().is_empty());
}
