//! End-to-end tests: parse a whole C translation unit and verify the full
//! finding sequence the default rule set produces.

use cvet_analyzer::{Analyzer, SourceFile};
use cvet_common::Issue;

fn analyze(source: &str) -> Vec<Issue> {
    let file = SourceFile::parse(source).expect("source should parse");
    Analyzer::with_default_rules().analyze(&file.root)
}

/// One translation unit that trips every check the analyzer ships with.
const KITCHEN_SINK: &str = r#"
#include <stdio.h>

void orphan(void) {
    printf("never called\n");
}

void constant_branches(void) {
    if (1) {
        printf("always\n");
    }
    while (0) {
        printf("never\n");
    }
}

void hollow_bodies(void) {
    int i;
    for (i = 0; i < 2; i = i + 1) {
    }
    while (1) {
    }
}

void fallthrough(int selector) {
    switch (selector) {
    case 1:
        printf("one\n");
    case 2:
        printf("two\n");
    default:
        break;
    }
}

void uninitialized(void) {
    int value;
    printf("%d\n", value);
}

void unused_local(void) {
    int temp = 5;
}

void unused_parameter(int a, int b) {
    printf("%d\n", b);
}

int main(void) {
    constant_branches();
    hollow_bodies();
    fallthrough(1);
    uninitialized();
    unused_local();
    unused_parameter(10, 20);
    return 0;
}
"#;

#[test]
fn kitchen_sink_finding_sequence() {
    let issues = analyze(KITCHEN_SINK);
    let ids: Vec<&str> = issues.iter().map(|issue| issue.rule_id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "CONSTANT_CONDITION", // if (1)
            "CONSTANT_CONDITION", // while (0)
            "EMPTY_BODY",         // for body
            "CONSTANT_CONDITION", // while (1)
            "EMPTY_BODY",         // while body
            "UNINITIALIZED_VAR",  // switch (selector) reads the parameter
            "MISSING_BREAK",      // case 1
            "MISSING_BREAK",      // case 2
            "UNINITIALIZED_VAR",  // printf(value)
            "UNUSED_VAR",         // temp
            "UNINITIALIZED_VAR",  // printf(b) reads the parameter
            "UNUSED_PARAM",       // a
            "UNUSED_FUNC",        // orphan
        ],
        "full sequence was: {:#?}",
        issues
    );
}

#[test]
fn kitchen_sink_messages_and_locations() {
    let issues = analyze(KITCHEN_SINK);

    let constant = &issues[0];
    assert_eq!(constant.message, "Condition always true");

    let falsy = &issues[1];
    assert_eq!(falsy.message, "Condition always false");

    let unused_var = issues
        .iter()
        .find(|issue| issue.rule_id == "UNUSED_VAR")
        .unwrap();
    assert_eq!(unused_var.message, "Variable 'temp' declared but never used");

    let unused_param = issues
        .iter()
        .find(|issue| issue.rule_id == "UNUSED_PARAM")
        .unwrap();
    assert_eq!(unused_param.message, "Parameter 'a' declared but never used");

    let unused_func = issues
        .iter()
        .find(|issue| issue.rule_id == "UNUSED_FUNC")
        .unwrap();
    assert_eq!(
        unused_func.message,
        "Function 'orphan' declared but never called"
    );
    // `orphan` is declared on line 4 of the fixture.
    assert_eq!(unused_func.line, 4);
}

#[test]
fn quiet_program_stays_quiet() {
    let issues = analyze(
        r#"
int scale(int factor) {
    int result;
    result = 1;
    if (factor > 0) {
        result = factor;
    }
    return result;
}

int main(void) {
    int value = scale(4);
    return value;
}
"#,
    );
    assert!(issues.is_empty(), "unexpected issues: {:#?}", issues);
}

#[test]
fn analyzer_reuse_across_units_is_clean() {
    let first = SourceFile::parse(KITCHEN_SINK).unwrap();
    let second = SourceFile::parse("int main(void) { return 0; }").unwrap();

    let mut analyzer = Analyzer::with_default_rules();
    analyzer.analyze(&first.root);
    let reused = analyzer.analyze(&second.root);
    let fresh = Analyzer::with_default_rules().analyze(&second.root);
    assert_eq!(reused, fresh);
    assert!(reused.is_empty());
}
