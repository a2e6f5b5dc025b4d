use std::fs;

use lox::interpreter::{Interpreter, parser::core::ParseMode};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

const EXPECT: &str = "// expect: ";
const ERROR: &str = "// error: ";

/// Runs every script under `tests/scripts` and checks what it printed and
/// which errors it reported against the annotations in its comments.
#[test]
fn scripts_behave_as_annotated() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "lox"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = Expectations::from_source(&source);

        let mut interpreter = Interpreter::with_sink(ParseMode::Statement, Vec::<String>::new());
        let outcome = interpreter.evaluate(&source);
        let errors: Vec<String> = outcome.errors.iter().map(ToString::to_string).collect();

        assert_eq!(interpreter.sink(), &expected.output, "output of {path:?}");
        assert_eq!(errors, expected.errors, "errors of {path:?}");
        count += 1;
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[derive(Default)]
struct Expectations {
    output: Vec<String>,
    errors: Vec<String>,
}

impl Expectations {
    fn from_source(source: &str) -> Self {
        let mut expectations = Self::default();

        for line in source.lines() {
            if let Some(at) = line.find(EXPECT) {
                expectations.output.push(line[at + EXPECT.len()..].to_string());
            } else if let Some(at) = line.find(ERROR) {
                expectations.errors.push(line[at + ERROR.len()..].to_string());
            }
        }

        expectations
    }
}
