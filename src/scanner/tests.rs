//! Scanner module tests
//!
//! Behavioral contract of the tag scanner: word boundaries, case modes,
//! priority ordering, message extraction and pattern-failure recovery.

use std::io::Cursor;

use super::core::TaskScannerBuilder;
use super::patterns::{CaseMode, MatcherMode};
use super::types::{Report, Severity};

const FIXME: &str = "FIXME";
const PRIORITY_HIGH_MESSAGE: &str = "here another task with priority HIGH";
const PRIORITY_NORMAL_MESSAGE: &str = "here we have a task with priority NORMAL";

const FILE_WITH_TASKS: &str = "\
public void method() {
    // TODO: here we have a task with priority NORMAL
}
// FIXME: here another task with priority HIGH
";

const FILE_WITHOUT_TASKS: &str = "\
public void method() {
    // nothing to do here
    return;
}
";

const CASE_TEST: &str = "\
TODO: upper case
todo: lower case
ToDo: camel case
Todo: title case
tOdO: silly case
TODOS: plural upper
todos: plural lower
";

/// Per-severity finding counts (high, normal, low).
fn severities(report: &Report) -> (usize, usize, usize) {
    (
        report.count_with_severity(Severity::High),
        report.count_with_severity(Severity::Normal),
        report.count_with_severity(Severity::Low),
    )
}

#[test]
fn reports_error_for_invalid_pattern() {
    let scanner = TaskScannerBuilder::new()
        .high(r"\")
        .matcher_mode(MatcherMode::RegexpMatch)
        .build();

    let report = scanner.scan_str(FILE_WITH_TASKS);

    assert_eq!(report.len(), 0);
    let error_prefix = r"Specified pattern is an invalid regular expression: '\': ";
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].starts_with(error_prefix));

    assert!(scanner.has_invalid_pattern());
    assert!(scanner.errors().starts_with(error_prefix));
}

#[test]
fn invalid_pattern_keeps_other_severities_scanning() {
    let scanner = TaskScannerBuilder::new()
        .high(r"\")
        .normal(r"^.*(TODO)(.*)$")
        .matcher_mode(MatcherMode::RegexpMatch)
        .build();

    let report = scanner.scan_str(FILE_WITH_TASKS);

    assert_eq!(report.len(), 1);
    assert_eq!(report.tasks[0].severity, Severity::Normal);
    assert_eq!(report.errors.len(), 1);
}

#[test]
fn parses_numbered_tags_with_regexp() {
    let scanner = TaskScannerBuilder::new()
        .high(r"^.*(TODO(?:[0-9]*))(.*)$")
        .case_mode(CaseMode::CaseSensitive)
        .matcher_mode(MatcherMode::RegexpMatch)
        .build();

    let report = scanner.scan_str(
        "TODO1: erstes\nTODO2: zweites\nTODO3: drittes\nTODO4: viertes\nTODO20: zwanzigstes\n",
    );

    assert_eq!(report.len(), 5);
    let expected = [
        ("TODO1", 1, "erstes"),
        ("TODO2", 2, "zweites"),
        ("TODO3", 3, "drittes"),
        ("TODO4", 4, "viertes"),
        ("TODO20", 5, "zwanzigstes"),
    ];
    for (task, (tag, line, message)) in report.tasks.iter().zip(expected) {
        assert_eq!(task.severity, Severity::High);
        assert_eq!(task.tag, tag);
        assert_eq!(task.line, line);
        assert_eq!(task.message, message);
    }
}

#[test]
fn finds_tasks_in_non_latin_text() {
    let scanner = TaskScannerBuilder::new()
        .high("FIXME")
        .normal("TODO")
        .low("")
        .build();

    let report = scanner.scan_str(
        "package example;\n\npublic class Example {\n    // FIXME: тестирование\n    // TODO: пример комментария на русском\n}\n",
    );

    assert_eq!(report.len(), 2);
    assert_eq!(report.tasks[0].severity, Severity::High);
    assert_eq!(report.tasks[0].tag, "FIXME");
    assert_eq!(report.tasks[0].line, 4);
    assert_eq!(report.tasks[0].message, "тестирование");
    assert_eq!(report.tasks[1].severity, Severity::Normal);
    assert_eq!(report.tasks[1].tag, "TODO");
    assert_eq!(report.tasks[1].line, 5);
    assert_eq!(report.tasks[1].message, "пример комментария на русском");
}

#[test]
fn finds_non_word_tags() {
    let scanner = TaskScannerBuilder::new()
        .high("!!!!!")
        .normal("!!!")
        .low("")
        .build();

    // "!!!!!" contains "!!!", so the last line counts for both severities.
    let report = scanner.scan_str("!!! fix this\nnothing here\n!!!!! urgent\n");

    assert_eq!(report.len(), 3);
    assert_eq!(severities(&report), (1, 2, 0));
}

#[test]
fn matches_tags_at_word_boundaries_only() {
    let scanner = TaskScannerBuilder::new()
        .normal("TODO")
        .low("@todo")
        .build();

    let report = scanner.scan_str(
        "TODO: in a comment\nTODOLIST is not a task\n@todo lowercase marker\nmethod_todo() is fine\nx = todos + 1\n",
    );

    assert_eq!(report.len(), 2);
    assert_eq!(severities(&report), (0, 1, 1));
    assert_eq!(report.tasks[0].tag, "TODO");
    assert_eq!(report.tasks[0].line, 1);
    assert_eq!(report.tasks[1].tag, "@todo");
    assert_eq!(report.tasks[1].line, 3);
    assert_eq!(report.tasks[1].message, "lowercase marker");
}

#[test]
fn case_sensitive_matches_exact_spelling_only() {
    verify_one_task_when_checking_case("todo", 2, "lower case");
    verify_one_task_when_checking_case("ToDo", 3, "camel case");
}

fn verify_one_task_when_checking_case(tag: &str, line: usize, message: &str) {
    let scanner = TaskScannerBuilder::new()
        .normal(tag)
        .case_mode(CaseMode::CaseSensitive)
        .build();

    let report = scanner.scan_str(CASE_TEST);

    assert_eq!(report.len(), 1);
    assert_eq!(report.tasks[0].severity, Severity::Normal);
    assert_eq!(report.tasks[0].tag, tag);
    assert_eq!(report.tasks[0].line, line);
    assert_eq!(report.tasks[0].message, message);
}

#[test]
fn ignores_case_in_source() {
    let scanner = TaskScannerBuilder::new()
        .normal("todo")
        .case_mode(CaseMode::IgnoreCase)
        .build();

    let report = scanner.scan_str(CASE_TEST);

    // All five spellings of the plain tag; "TODOS"/"todos" stay word-bounded out.
    assert_eq!(report.len(), 5);
    for task in &report.tasks {
        assert_eq!(task.tag, "TODO");
    }
}

#[test]
fn ignores_case_in_tag() {
    let scanner = TaskScannerBuilder::new()
        .normal("Todo, TodoS")
        .case_mode(CaseMode::IgnoreCase)
        .build();

    let report = scanner.scan_str(CASE_TEST);

    assert_eq!(report.len(), 7);
    for task in &report.tasks {
        assert!(task.tag.starts_with("TODO"));
    }
}

#[test]
fn finds_tasks_with_default_style_config() {
    let scanner = TaskScannerBuilder::new()
        .high("FIXME")
        .normal("TODO")
        .low("@deprecated")
        .build();

    let report = scanner.scan_str(FILE_WITH_TASKS);

    assert_eq!(report.len(), 2);
    assert_eq!(severities(&report), (1, 1, 0));
    assert_eq!(report.tasks[0].message, PRIORITY_NORMAL_MESSAGE);
    assert_eq!(report.tasks[1].message, PRIORITY_HIGH_MESSAGE);
}

#[test]
fn finds_high_priority_task() {
    let scanner = TaskScannerBuilder::new().high(FIXME).build();

    let report = scanner.scan_str(FILE_WITH_TASKS);

    assert_eq!(report.len(), 1);
    assert_eq!(severities(&report), (1, 0, 0));
}

#[test]
fn strips_whitespace_around_configured_tags() {
    let scanner = TaskScannerBuilder::new().high(" FIXME , TODO ").build();

    let report = scanner.scan_str(FILE_WITH_TASKS);

    assert_eq!(report.len(), 2);
    assert_eq!(severities(&report), (2, 0, 0));
}

#[test]
fn finds_two_tags_of_one_severity() {
    let scanner = TaskScannerBuilder::new().high("FIXME,TODO").build();

    let report = scanner.scan_str(FILE_WITH_TASKS);

    assert_eq!(report.len(), 2);
    assert_eq!(severities(&report), (2, 0, 0));
}

#[test]
fn emits_canonical_configured_tag() {
    let text = "FIXME: this is a fixme";

    let high = TaskScannerBuilder::new()
        .high("FIXME,TODO")
        .build()
        .scan_str(text);
    assert_eq!(high.len(), 1);
    assert_eq!(high.tasks[0].tag, FIXME);
    assert_eq!(high.tasks[0].message, "this is a fixme");

    let normal = TaskScannerBuilder::new()
        .normal("XXX, HELP, FIXME, TODO")
        .build()
        .scan_str(text);
    assert_eq!(normal.len(), 1);
    assert_eq!(normal.tasks[0].tag, FIXME);
}

#[test]
fn scans_all_priorities_in_order() {
    let scanner = TaskScannerBuilder::new()
        .high(FIXME)
        .normal("FIXME,TODO")
        .low("TODO")
        .build();

    let report = scanner.scan_str(FILE_WITH_TASKS);

    assert_eq!(report.len(), 4);
    assert_eq!(severities(&report), (1, 2, 1));

    // Line order first, then HIGH before NORMAL before LOW within a line.
    let order: Vec<(usize, Severity)> = report.tasks.iter().map(|t| (t.line, t.severity)).collect();
    assert_eq!(
        order,
        vec![
            (2, Severity::Normal),
            (2, Severity::Low),
            (4, Severity::High),
            (4, Severity::Normal),
        ]
    );
}

#[test]
fn one_line_can_yield_several_findings() {
    let scanner = TaskScannerBuilder::new()
        .high("FIXME")
        .normal("TODO")
        .build();

    let report = scanner.scan_str("FIXME: x TODO: y\n");

    assert_eq!(report.len(), 2);
    assert_eq!(report.tasks[0].severity, Severity::High);
    assert_eq!(report.tasks[0].message, "x TODO: y");
    assert_eq!(report.tasks[1].severity, Severity::Normal);
    assert_eq!(report.tasks[1].message, "y");

    let same_severity = TaskScannerBuilder::new()
        .high("FIXME,TODO")
        .build()
        .scan_str("FIXME: x TODO: y\n");
    assert_eq!(same_severity.len(), 2);
}

#[test]
fn scans_file_without_tasks() {
    let scanner = TaskScannerBuilder::new()
        .high("FIXME")
        .normal("TODO")
        .low("@deprecated")
        .build();

    let report = scanner.scan_str(FILE_WITHOUT_TASKS);

    assert!(report.is_empty());
    assert!(!report.has_errors());
}

#[test]
fn empty_severity_config_is_inert() {
    let scanner = TaskScannerBuilder::new()
        .high("FIXME")
        .normal("TODO")
        .low("")
        .build();

    let report = scanner.scan_str(FILE_WITH_TASKS);

    assert_eq!(severities(&report), (1, 1, 0));
    assert!(!scanner.has_invalid_pattern());
}

#[test]
fn accepts_windows_line_endings_and_missing_final_newline() {
    let scanner = TaskScannerBuilder::new().normal("TODO").build();

    let report = scanner.scan_str("TODO: one\r\nplain line\r\nTODO: two");

    assert_eq!(report.len(), 2);
    assert_eq!(report.tasks[0].line, 1);
    assert_eq!(report.tasks[0].message, "one");
    assert_eq!(report.tasks[1].line, 3);
    assert_eq!(report.tasks[1].message, "two");
}

#[test]
fn repeated_scans_are_identical() {
    let scanner = TaskScannerBuilder::new()
        .high("FIXME")
        .normal("TODO")
        .build();

    let first = scanner.scan_str(FILE_WITH_TASKS);
    let second = scanner.scan_str(FILE_WITH_TASKS);

    assert_eq!(first, second);
}

#[test]
fn reader_and_str_scans_agree() {
    let scanner = TaskScannerBuilder::new()
        .high("FIXME")
        .normal("TODO")
        .build();

    let from_reader = scanner
        .scan(Cursor::new(FILE_WITH_TASKS.as_bytes()))
        .expect("in-memory read cannot fail");

    assert_eq!(from_reader, scanner.scan_str(FILE_WITH_TASKS));
}
