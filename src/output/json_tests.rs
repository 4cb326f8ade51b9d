use crate::engine::{FileReport, LintStats, RunReport};
use crate::violation::Violation;

use super::*;

fn report_with(reports: Vec<FileReport>) -> RunReport {
    let stats = LintStats::from_reports(&reports);
    RunReport { reports, stats }
}

#[test]
fn output_is_valid_json_with_files_and_stats() {
    let run = report_with(vec![FileReport {
        path: "src/bad.h".to_string(),
        violations: vec![Violation::warning(
            "src/bad.h",
            4,
            "tiger/assertion-density",
            "too few assertions",
        )],
        suppressed: 1,
        read_error: None,
    }]);

    let out = JsonFormatter.format(&run).unwrap();
    assert!(out.ends_with('\n'));

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["files"][0]["path"], "src/bad.h");
    assert_eq!(value["files"][0]["suppressed"], 1);
    assert_eq!(
        value["files"][0]["violations"][0]["rule"],
        "tiger/assertion-density"
    );
    assert_eq!(value["files"][0]["violations"][0]["severity"], "warning");
    assert_eq!(value["stats"]["total_violations"], 1);
    assert_eq!(value["stats"]["rule_counts"]["tiger/assertion-density"], 1);
}

#[test]
fn read_error_field_is_omitted_when_absent() {
    let run = report_with(vec![FileReport {
        path: "src/ok.h".to_string(),
        violations: Vec::new(),
        suppressed: 0,
        read_error: None,
    }]);

    let out = JsonFormatter.format(&run).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert!(value["files"][0].get("read_error").is_none());
}

#[test]
fn read_error_field_is_present_when_set() {
    let run = report_with(vec![FileReport {
        path: "src/gone.h".to_string(),
        violations: Vec::new(),
        suppressed: 0,
        read_error: Some("permission denied".to_string()),
    }]);

    let out = JsonFormatter.format(&run).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["files"][0]["read_error"], "permission denied");
}
