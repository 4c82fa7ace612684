#![allow(non_snake_case)]

use super::*;
use std::io::Write;

fn html_config() -> Config {
    Config::from_str("[generate]\nformat = \"html\"\ncomponent_name = \"FromConfig\"\n").unwrap()
}

// resolve_options tests

#[test]
fn resolve_options___no_flags_no_config___react_defaults() {
    let (format, options) = resolve_options(&GenerateArgs::default(), &Config::default()).unwrap();

    assert_eq!(format, OutputFormat::React);
    assert_eq!(options, ReactOptions::default());
}

#[test]
fn resolve_options___config_only___uses_config() {
    let (format, options) = resolve_options(&GenerateArgs::default(), &html_config()).unwrap();

    assert_eq!(format, OutputFormat::Html);
    assert_eq!(options.component_name, "FromConfig");
}

#[test]
fn resolve_options___flags_set___override_config() {
    let args = GenerateArgs {
        format: Some("tsx".into()),
        component_name: Some("FromFlag".into()),
        strict: true,
        ..Default::default()
    };

    let (format, options) = resolve_options(&args, &html_config()).unwrap();

    assert_eq!(format, OutputFormat::React);
    assert_eq!(options.component_name, "FromFlag");
    assert!(options.strict_keys);
}

#[test]
fn resolve_options___unknown_format___fails() {
    let args = GenerateArgs {
        format: Some("vue".into()),
        ..Default::default()
    };

    assert!(resolve_options(&args, &Config::default()).is_err());
}

// output_path tests

#[test]
fn output_path___explicit_output___wins() {
    let args = GenerateArgs {
        template: Some("login".into()),
        output: Some(PathBuf::from("out/form.txt")),
        ..Default::default()
    };

    assert_eq!(output_path(&args, OutputFormat::React), Some(PathBuf::from("out/form.txt")));
}

#[test]
fn output_path___template_without_output___uses_format_extension() {
    let args = GenerateArgs {
        template: Some("contact".into()),
        ..Default::default()
    };

    assert_eq!(output_path(&args, OutputFormat::React), Some(PathBuf::from("contact.tsx")));
    assert_eq!(output_path(&args, OutputFormat::Html), Some(PathBuf::from("contact.html")));
}

#[test]
fn output_path___description_without_output___is_stdout() {
    assert_eq!(output_path(&GenerateArgs::default(), OutputFormat::Html), None);
}

// read_input tests

#[test]
fn read_input___file___returns_contents() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "Email (email, required)").unwrap();

    let text = read_input(Some(file.path())).unwrap();

    assert_eq!(text, "Email (email, required)");
}

#[test]
fn read_input___missing_file___fails_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fields.txt");

    let err = read_input(Some(&path)).unwrap_err();

    assert!(err.to_string().contains("fields.txt"));
}

// run tests

#[test]
fn run___input_file_to_output_file___writes_markup() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("fields.txt");
    let output = dir.path().join("form.html");
    std::fs::write(&input, "Name (text, required)\nBio (textarea, optional)").unwrap();

    let args = GenerateArgs {
        format: Some("html".into()),
        input: Some(input),
        output: Some(output.clone()),
        ..Default::default()
    };
    run(args, &Config::default()).unwrap();

    let written = std::fs::read_to_string(output).unwrap();
    assert!(written.starts_with("<form>"));
    assert!(written.contains(r#"<label>Name: <input type="text" required /></label>"#));
    assert!(written.contains(r#"<label>Bio: <input type="textarea" /></label>"#));
}

#[test]
fn run___template___writes_component() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("LoginForm.tsx");

    let args = GenerateArgs {
        template: Some("login".into()),
        output: Some(output.clone()),
        component_name: Some("LoginForm".into()),
        ..Default::default()
    };
    run(args, &Config::default()).unwrap();

    let written = std::fs::read_to_string(output).unwrap();
    assert!(written.contains("LoginForm"));
    assert!(written.contains("password"));
}

#[test]
fn run___unknown_template___fails() {
    let args = GenerateArgs {
        template: Some("checkout".into()),
        ..Default::default()
    };

    let err = run(args, &Config::default()).unwrap_err();

    assert!(err.to_string().contains("checkout"));
}

#[test]
fn run___malformed_line___reports_line() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("fields.txt");
    std::fs::write(&input, "Email (email, required)\nAge number optional").unwrap();

    let args = GenerateArgs {
        input: Some(input),
        output: Some(dir.path().join("out.tsx")),
        ..Default::default()
    };
    let err = run(args, &Config::default()).unwrap_err();

    assert_eq!(err.to_string(), "Invalid line format: Age number optional");
}
