use std::fs::{self};

use quill::run;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run(&code) {
                panic!("quill example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No quill examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```quill") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_success(src: &str) {
    if let Err(e) = run(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

/// Runs `setup` followed by a check of `condition`; the script fails unless
/// the condition holds (the language has no assert builtin, so a failed
/// check is made to trip an unresolved identifier).
fn assert_holds(setup: &str, condition: &str) {
    let script = format!("{setup}\nif ({condition}) {{ 1 }} else {{ condition_failed }}");
    assert_success(&script);
}

#[test]
fn bindings_and_basic_arithmetic() {
    assert_holds("let x = 1 + 2;", "x == 3");
    assert_holds("let x = 7 * 9;", "x == 63");
    assert_holds("let x = 8 - 5;", "x == 3");
    assert_holds("let x = 10 / 2;", "x == 5");
    assert_holds("let x = 7 / 2;", "x == 3");
}

#[test]
fn comparisons_and_logic() {
    assert_holds("", "2 < 3");
    assert_holds("", "3 > 2");
    assert_holds("", "2 != 3");
    assert_holds("", "2 == 2");
    assert_holds("", "!false");
    assert_holds("", "true");
    assert_holds("", "false == false");
}

#[test]
fn functions_and_closures() {
    assert_holds("let square = fn(x) { x * x };", "square(3) == 9");
    assert_holds("let add = fn(a, b) { a + b };", "add(2, 5) == 7");
    assert_holds("let newAdder = fn(x) { fn(y) { x + y } };\nlet addTwo = newAdder(2);",
                 "addTwo(3) == 5");
    assert_holds("let early = fn() { return 1; 2 };", "early() == 1");
}

#[test]
fn conditionals_and_blocks() {
    assert_holds("let x = if (2 < 3) { 7 } else { 11 };", "x == 7");
    assert_holds("let x = if (2 > 3) { 7 } else { 11 };", "x == 11");
    assert_holds("let x = if (2 > 3) { 7 };", "!x");
}

#[test]
fn arrays_and_indexing() {
    assert_holds("let a = [1, 2, 3];", "a[0] == 1");
    assert_holds("let a = [1, 2, 3];", "a[2] == 3");
    assert_holds("let a = [1, 2, 3];", "len(a) == 3");
    assert_holds("let b = push([1], 2);", "len(b) == 2");
    assert_holds("let a = [1]; let b = push(a, 2);", "len(a) == 1");
}

#[test]
fn hashes_and_lookup() {
    assert_holds("let h = {\"one\": 1, 2: \"two\", true: 3};", "h[\"one\"] == 1");
    assert_holds("let h = {\"one\": 1, 2: \"two\", true: 3};", "h[true] == 3");
    assert_holds("let greeting = {\"pre\": \"Hello, \"};",
                 "len(greeting[\"pre\"] + \"quill\") == 12");
}

#[test]
fn strings_concatenate() {
    assert_holds("let s = \"Hello\" + \", \" + \"quill\";", "len(s) == 12");
}

#[test]
fn failing_scripts_fail() {
    assert_failure("missing_name");
    assert_failure("5 + true");
    assert_failure("let x = 5; x()");
    assert_failure("{[1]: 1}");
    assert_failure("5 / 0");
    assert_failure("let x 5;");
}
