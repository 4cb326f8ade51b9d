use super::*;

fn run_pragma(path: &str, content: &str) -> Vec<crate::violation::Violation> {
    PragmaOnce.check(&FileContext::new(path, content))
}

fn run_description(path: &str, content: &str) -> Vec<crate::violation::Violation> {
    FileDescription.check(&FileContext::new(path, content))
}

#[test]
fn header_with_pragma_once_passes() {
    let content = "#pragma once\n// ray.h \u{2014} Ray type.\n";
    assert!(run_pragma("src/core/ray.h", content).is_empty());
}

#[test]
fn header_missing_pragma_once_fails_at_line_1() {
    let violations = run_pragma("src/core/ray.h", "// ray.h \u{2014} Ray type.\n");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].line, 1);
    assert_eq!(violations[0].rule, "header/pragma-once");
}

#[test]
fn empty_header_fails_pragma_once() {
    let violations = run_pragma("src/core/ray.h", "");
    assert_eq!(violations.len(), 1);
}

#[test]
fn source_files_are_exempt_from_pragma_once() {
    assert!(run_pragma("src/core/ray.cpp", "// ray.cpp \u{2014} impl.\n").is_empty());
}

#[test]
fn header_description_on_line_2_passes() {
    let content = "#pragma once\n// ray.h \u{2014} A single traced ray.\n";
    assert!(run_description("src/core/ray.h", content).is_empty());
}

#[test]
fn source_description_on_line_1_passes() {
    let content = "// ray.cpp \u{2014} Ray implementation.\n#include \"ray.h\"\n";
    assert!(run_description("src/core/ray.cpp", content).is_empty());
}

#[test]
fn double_hyphen_separator_is_accepted() {
    let content = "// ray.cpp -- Ray implementation.\n";
    assert!(run_description("src/core/ray.cpp", content).is_empty());
}

#[test]
fn wrong_basename_fails() {
    let content = "#pragma once\n// other.h \u{2014} Wrong file name.\n";
    let violations = run_description("src/core/ray.h", content);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].line, 2);
    assert_eq!(violations[0].rule, "header/description");
    assert!(violations[0].message.contains("ray.h"));
}

#[test]
fn separator_without_description_fails() {
    let content = "// ray.cpp \u{2014}\n";
    assert_eq!(run_description("src/core/ray.cpp", content).len(), 1);
}

#[test]
fn missing_description_line_fails_at_line_1() {
    let violations = run_description("src/core/ray.h", "#pragma once\n");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].line, 1);
}

#[test]
fn description_without_separator_fails() {
    let content = "// ray.cpp Ray implementation.\n";
    assert_eq!(run_description("src/core/ray.cpp", content).len(), 1);
}
