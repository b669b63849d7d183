pub mod project;

/// Simple template rendering: replaces {{key}} with value.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut output = template.to_string();
    for (key, value) in vars {
        output = output.replace(&format!("{{{{{}}}}}", key), value);
    }
    output
}

/// Python identifier form of a project name (`my-app` -> `my_app`).
pub fn to_module_name(name: &str) -> String {
    name.replace('-', "_")
}
