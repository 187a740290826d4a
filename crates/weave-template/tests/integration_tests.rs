/*
 * integration_tests.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Integration tests for weave-template on the real filesystem.
 */

use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use weave_runtime::{MemoryRuntime, NativeRuntime};
use weave_template::{ExpandOptions, Expander, TemplateError, expand_file};

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir).join("test-fixtures").join(name)
}

/// Write `files` into a fresh temporary directory.
fn write_tree(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    for (name, contents) in files {
        let path = temp.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
    }
    temp
}

fn no_boundaries() -> ExpandOptions {
    ExpandOptions::new().with_boundaries(false)
}

#[test]
fn test_fixture_site_without_boundaries() {
    let expander = Expander::new(NativeRuntime::new()).with_options(no_boundaries());
    let result = expander
        .expand_to_string(&fixture_path("site/index.html"))
        .unwrap();

    assert_eq!(
        result,
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Weave</title>
  </head>
  <body>
    <nav>
      <a href="/">Home</a>
      <a href="/about">About</a>
    </nav>
  </body>
</html>
"#
    );
}

#[test]
fn test_fixture_site_with_boundaries() {
    let expander = Expander::new(NativeRuntime::new());
    let result = expander
        .expand_to_string(&fixture_path("site/index.html"))
        .unwrap();

    assert_eq!(
        result,
        r#"<!DOCTYPE html>
<html>
  <head>
    <!-- partials/head.html -->
    <meta charset="utf-8">
    <title>Weave</title>
    <!-- END partials/head.html -->
  </head>
  <body>
    <!-- partials/nav.html -->
    <nav>
      <!-- links.html -->
      <a href="/">Home</a>
      <a href="/about">About</a>
      <!-- END links.html -->
    </nav>
    <!-- END partials/nav.html -->
  </body>
</html>
"#
    );
}

#[test]
fn test_single_inclusion_writes_prefixed_artifact() {
    let temp = write_tree(&[("a.txt", "A\n  <@b.txt@>\nC\n"), ("b.txt", "X\nY\n")]);
    let root = temp.path().join("a.txt");

    let output = expand_file(&root, no_boundaries()).unwrap();

    assert_eq!(output, temp.path().join("t.a.txt"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "A\n  X\n  Y\nC\n");
}

#[test]
fn test_literal_passthrough() {
    let source = "<html>\n  <p>1 < 2 && 3 > 2</p>\n\tTabbed\n   \n  trailing  \n</html>";
    let temp = write_tree(&[("plain.html", source)]);

    let output = expand_file(&temp.path().join("plain.html"), ExpandOptions::new()).unwrap();

    assert_eq!(fs::read_to_string(output).unwrap(), source);
}

#[test]
fn test_rerun_on_output_is_noop() {
    let temp = write_tree(&[
        ("index.html", "<ul>\n  <@item.html@>\n</ul>\n"),
        ("item.html", "<li>a</li>\n<li>b</li>\n"),
    ]);

    let first = expand_file(&temp.path().join("index.html"), ExpandOptions::new()).unwrap();
    let second = expand_file(&first, ExpandOptions::new()).unwrap();

    assert_eq!(second, temp.path().join("t.t.index.html"));
    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn test_unterminated_directive_is_literal_and_not_looked_up() {
    let payload = "n".repeat(255);
    let source = format!("before <@{}@> after\n", payload);
    let temp = write_tree(&[("long.txt", source.as_str())]);

    let output = expand_file(&temp.path().join("long.txt"), no_boundaries()).unwrap();

    let result = fs::read_to_string(output).unwrap();
    assert!(result.contains(&format!("<@{}", payload)));
    assert_eq!(result, source);
}

#[test]
fn test_missing_template_creates_no_artifact() {
    let temp = write_tree(&[("index.html", "<p>plenty of valid content</p>\n<@nope.html@>\n")]);
    let root = temp.path().join("index.html");

    let err = expand_file(&root, ExpandOptions::new()).unwrap_err();

    match &err {
        TemplateError::MissingTemplate { path } => {
            assert_eq!(path, &temp.path().join("nope.html"))
        }
        other => panic!("expected MissingTemplate, got {other:?}"),
    }
    assert!(err.to_string().contains("nope.html"));
    assert!(!temp.path().join("t.index.html").exists());
}

#[test]
fn test_directory_reference_is_missing_template() {
    let temp = write_tree(&[("index.html", "<@sub@>\n"), ("sub/x.html", "x")]);

    let err = expand_file(&temp.path().join("index.html"), ExpandOptions::new()).unwrap_err();

    assert!(matches!(err, TemplateError::MissingTemplate { .. }));
}

#[test]
fn test_unwritable_destination_is_output_error() {
    let temp = write_tree(&[("index.html", "hello\n")]);
    // A directory squatting on the artifact path makes the write fail.
    fs::create_dir(temp.path().join("t.index.html")).unwrap();

    let err = expand_file(&temp.path().join("index.html"), ExpandOptions::new()).unwrap_err();

    match err {
        TemplateError::OutputWrite { path, .. } => {
            assert_eq!(path, temp.path().join("t.index.html"))
        }
        other => panic!("expected OutputWrite, got {other:?}"),
    }
}

#[test]
fn test_cycle_is_reported_not_overflowed() {
    let temp = write_tree(&[("a.html", "<@b.html@>\n"), ("b.html", "  <@a.html@>\n")]);

    let err = expand_file(&temp.path().join("a.html"), ExpandOptions::new()).unwrap_err();

    assert!(matches!(err, TemplateError::CyclicInclusion { .. }));
    assert!(!temp.path().join("t.a.html").exists());
}

#[test]
fn test_repeated_expansions_see_fresh_state() {
    let runtime = MemoryRuntime::with_files([
        ("index.html", "<@part.html@>\n"),
        ("part.html", "one\n"),
    ]);
    let expander = Expander::new(&runtime).with_options(no_boundaries());

    assert_eq!(
        expander.expand_to_string(Path::new("index.html")).unwrap(),
        "one\n"
    );

    runtime.add_file("part.html", "two\n");
    assert_eq!(
        expander.expand_to_string(Path::new("index.html")).unwrap(),
        "two\n"
    );
}

#[test]
fn test_inclusion_at_column_inside_line() {
    let temp = write_tree(&[
        ("page.md", "- item\n  - <@sub.md@>\n"),
        ("sub.md", "first\nsecond\n"),
    ]);

    let output = expand_file(&temp.path().join("page.md"), no_boundaries()).unwrap();

    // Later lines take the line's leading indentation, not the directive column.
    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "- item\n  - first\n  second\n"
    );
}
