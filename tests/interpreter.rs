use lox::{
    error::{self, Error, RuntimeError},
    interpreter::{Interpreter, parser::core::ParseMode, value::core::Value},
    span::Span,
};
use pretty_assertions::assert_eq;

fn session() -> Interpreter<Vec<String>> {
    Interpreter::with_sink(ParseMode::Statement, Vec::new())
}

/// Evaluates `source` in a fresh session and returns the final value,
/// failing the test on any error.
fn value_of(source: &str) -> Value {
    let outcome = session().evaluate(source);
    assert!(!outcome.has_err(), "unexpected errors in {source:?}: {:?}", outcome.errors);
    outcome.success
           .unwrap_or_else(|| panic!("{source:?} produced no value"))
}

/// Evaluates `source` in a fresh session and returns the rendered errors.
fn error_messages(source: &str) -> Vec<String> {
    session().evaluate(source)
             .errors
             .iter()
             .map(ToString::to_string)
             .collect()
}

/// Runs `source` and returns what it printed.
fn output_of(source: &str) -> Vec<String> {
    let mut interpreter = session();
    let outcome = interpreter.evaluate(source);
    assert!(!outcome.has_err(), "unexpected errors in {source:?}: {:?}", outcome.errors);
    interpreter.into_sink()
}

#[test]
fn arithmetic_follows_precedence() {
    assert_eq!(value_of("1 + 2 * 3;"), Value::Number(7.0));
    assert_eq!(value_of("(1 + 2) * 3;"), Value::Number(9.0));
    assert_eq!(value_of("10 - 4 - 3;"), Value::Number(3.0));
    assert_eq!(value_of("7 / 2;"), Value::Number(3.5));
    assert_eq!(value_of("-(2 * 3);"), Value::Number(-6.0));
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_eq!(value_of("1 / 0;").to_string(), "Infinity");
    assert_eq!(value_of("-1 / 0;").to_string(), "-Infinity");
    assert_eq!(value_of("0 / 0;").to_string(), "NaN");
}

#[test]
fn numbers_print_canonically() {
    assert_eq!(output_of("print 42; print 2.50; print 0.1 + 0.2; print -0; print 1 - 1;"),
               vec!["42", "2.5", "0.30000000000000004", "0", "0"]);
}

#[test]
fn strings_concatenate() {
    assert_eq!(value_of("\"foo\" + \"bar\";"), Value::from("foobar"));
    assert_eq!(output_of("var s = \"a\"; s = s + s; print s + \"!\";"),
               vec!["aa!"]);
}

#[test]
fn strings_are_taken_verbatim() {
    assert_eq!(value_of("\"a\\b\";"), Value::from("a\\b"));
}

#[test]
fn equality_never_fails() {
    assert_eq!(value_of("1 == 1;"), Value::Boolean(true));
    assert_eq!(value_of("\"1\" == 1;"), Value::Boolean(false));
    assert_eq!(value_of("nil == false;"), Value::Boolean(false));
    assert_eq!(value_of("nil == nil;"), Value::Boolean(true));
    assert_eq!(value_of("\"a\" != \"a\";"), Value::Boolean(false));
    assert_eq!(value_of("true != 1;"), Value::Boolean(true));
}

#[test]
fn comparisons_need_numbers() {
    assert_eq!(value_of("1 < 2;"), Value::Boolean(true));
    assert_eq!(value_of("2 <= 2;"), Value::Boolean(true));
    assert_eq!(value_of("1 > 2;"), Value::Boolean(false));
    assert_eq!(error_messages("\"a\" < \"b\";"),
               vec!["[line 1] Error: Operands must be numbers."]);
}

#[test]
fn operand_type_errors() {
    assert_eq!(error_messages("1 + \"a\";"),
               vec!["[line 1] Error: Operands must be two numbers or two strings."]);
    assert_eq!(error_messages("nil + nil;"),
               vec!["[line 1] Error: Operands must be two numbers or two strings."]);
    assert_eq!(error_messages("\"a\" * 2;"),
               vec!["[line 1] Error: invalid operation: *"]);
    assert_eq!(error_messages("-\"a\";"),
               vec!["[line 1] Error: Operand must be a number."]);
}

#[test]
fn type_errors_point_at_the_operator() {
    let outcome = session().evaluate("var a = 1;\n\n a - true;");

    assert_eq!(outcome.errors[0].span(), Span::new(3, 15, 1));
    assert_eq!(outcome.errors[0].to_string(),
               "[line 3] Error: invalid operation: -");
}

#[test]
fn only_false_and_nil_are_falsy() {
    assert_eq!(value_of("!nil;"), Value::Boolean(true));
    assert_eq!(value_of("!0;"), Value::Boolean(false));
    assert_eq!(value_of("!\"\";"), Value::Boolean(false));
    assert_eq!(value_of("!!false;"), Value::Boolean(false));
}

#[test]
fn logical_operators_short_circuit() {
    assert_eq!(value_of("false and undefinedVar;"), Value::Boolean(false));
    assert_eq!(value_of("true or undefinedVar;"), Value::Boolean(true));
}

#[test]
fn logical_operators_return_an_operand() {
    assert_eq!(value_of("nil or \"fallback\";"), Value::from("fallback"));
    assert_eq!(value_of("1 and 2;"), Value::Number(2.0));
    assert_eq!(value_of("nil and 2;"), Value::Nil);
    assert_eq!(value_of("0 or 2;"), Value::Number(0.0));
}

#[test]
fn declarations_default_to_nil() {
    assert_eq!(value_of("var a; a;"), Value::Nil);
}

#[test]
fn declarations_and_print_yield_nothing() {
    let outcome = session().evaluate("var a = 1; print a;");

    assert!(!outcome.has_err());
    assert_eq!(outcome.success, None);
}

#[test]
fn inner_declarations_shadow_without_leaking() {
    assert_eq!(value_of("var x = 10; { var x = 20; } x;"), Value::Number(10.0));
    assert_eq!(output_of("var a = \"outer\"; { var a = \"inner\"; print a; } print a;"),
               vec!["inner", "outer"]);
}

#[test]
fn initializer_reads_the_outer_binding() {
    assert_eq!(output_of("var a = 1; { var a = a + 1; print a; } print a;"),
               vec!["2", "1"]);
}

#[test]
fn assignment_updates_the_nearest_declaration() {
    assert_eq!(output_of("var a = 1; { a = 2; { a = a * 10; } } print a;"),
               vec!["20"]);
    assert_eq!(value_of("var a; var b; a = b = 3;"), Value::Number(3.0));
}

#[test]
fn redeclaring_overwrites() {
    assert_eq!(value_of("var a = 1; var a = \"two\"; a;"), Value::from("two"));
}

#[test]
fn assignment_requires_a_declaration() {
    let outcome = session().evaluate("y = 1;");

    assert_eq!(outcome.errors,
               vec![Error::from(RuntimeError::UndefinedVariable { name: "y".to_string(),
                                                                  span: Span::new(1, 0, 1), })]);
    assert_eq!(outcome.errors[0].to_string(),
               "[line 1] Error: Undefined variable 'y'.");
}

#[test]
fn reading_an_undeclared_variable_fails() {
    assert_eq!(error_messages("print 1;\nprint missing;"),
               vec!["[line 2] Error: Undefined variable 'missing'."]);
}

#[test]
fn block_locals_are_gone_after_the_block() {
    assert_eq!(error_messages("{ var inner = 1; } inner;"),
               vec!["[line 1] Error: Undefined variable 'inner'."]);
}

#[test]
fn blocks_yield_their_last_value() {
    assert_eq!(value_of("{ var a = 2; a * 21; }"), Value::Number(42.0));
}

#[test]
fn if_requires_a_boolean_condition() {
    let mut interpreter = session();
    let outcome = interpreter.evaluate("if (42) print 1;");

    assert_eq!(outcome.errors[0].to_string(),
               "[line 1] Error: Condition must be a boolean.");
    assert!(interpreter.sink().is_empty());
}

#[test]
fn if_runs_exactly_one_branch() {
    assert_eq!(output_of("if (1 < 2) print \"then\"; else print \"else\";"),
               vec!["then"]);
    assert_eq!(output_of("if (nil == false) print \"then\"; else print \"else\";"),
               vec!["else"]);
    assert_eq!(output_of("if (false) print \"skipped\";"), Vec::<String>::new());
}

#[test]
fn if_yields_the_value_of_the_branch_taken() {
    assert_eq!(value_of("if (true) 1; else 2;"), Value::Number(1.0));
    assert_eq!(session().evaluate("if (false) 1;").success, None);
}

#[test]
fn unexecuted_constructs_report_not_implemented() {
    assert_eq!(error_messages("while (true) print 1;"),
               vec!["[line 1] Error: Not implemented: while statement"]);
    assert_eq!(error_messages("for (;;) print 1;"),
               vec!["[line 1] Error: Not implemented: for statement"]);
    assert_eq!(error_messages("return 1;"),
               vec!["[line 1] Error: Not implemented: return statement"]);
    assert_eq!(error_messages("fun f() { print 1; }"),
               vec!["[line 1] Error: Not implemented: function declaration"]);
    assert_eq!(error_messages("class A {}"),
               vec!["[line 1] Error: Not implemented: class declaration"]);
}

#[test]
fn runtime_error_halts_the_pass() {
    let mut interpreter = session();
    let outcome = interpreter.evaluate("print 1; print nope; print 3;");

    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(interpreter.sink(), &vec!["1".to_string()]);
}

#[test]
fn result_keeps_the_last_value_before_a_failure() {
    let outcome = session().evaluate("1 + 1; nope;");

    assert_eq!(outcome.success, Some(Value::Number(2.0)));
    assert!(outcome.has_err());
}

#[test]
fn state_survives_a_runtime_error() {
    let mut interpreter = session();

    let outcome = interpreter.evaluate("var a = 1; a = 2; a - nil; a = 3;");
    assert!(outcome.has_err());

    assert_eq!(interpreter.evaluate("a;").success, Some(Value::Number(2.0)));
}

#[test]
fn failing_block_still_pops_its_scope() {
    let mut interpreter = session();

    let outcome = interpreter.evaluate("{ var local = 1; local + nil; }");
    assert!(outcome.has_err());

    assert_eq!(interpreter.context().scope_stack.len(), 1);
    assert!(interpreter.context().get_variable("local").is_none());
}

#[test]
fn state_persists_across_calls() {
    let mut interpreter = session();

    assert!(!interpreter.evaluate("var count = 1;").has_err());
    assert!(!interpreter.evaluate("count = count + 1;").has_err());
    assert!(!interpreter.evaluate("print count;").has_err());

    assert_eq!(interpreter.sink(), &vec!["2".to_string()]);
}

#[test]
fn syntax_errors_prevent_evaluation() {
    let mut interpreter = session();
    let outcome = interpreter.evaluate("print 1; print (;");

    assert_eq!(outcome.success, None);
    assert_eq!(outcome.errors.len(), 1);
    assert!(interpreter.sink().is_empty());
}

#[test]
fn expression_mode_yields_the_last_expression() {
    let mut interpreter = Interpreter::with_sink(ParseMode::Expression, Vec::<String>::new());

    assert_eq!(interpreter.mode(), ParseMode::Expression);
    assert_eq!(interpreter.evaluate("\"hello\" + \" \" + \"world\"").success,
               Some(Value::from("hello world")));
    assert_eq!(interpreter.evaluate("1 2 3").success, Some(Value::Number(3.0)));
}

#[test]
fn exit_codes_follow_the_error_bucket() {
    assert_eq!(error::exit_code(&session().evaluate("print 1;").errors), 0);
    assert_eq!(error::exit_code(&session().evaluate("print ;").errors),
               error::EXIT_STATIC_ERROR);
    assert_eq!(error::exit_code(&session().evaluate("print \"open").errors),
               error::EXIT_STATIC_ERROR);
    assert_eq!(error::exit_code(&session().evaluate("print nope;").errors),
               error::EXIT_RUNTIME_ERROR);
}
