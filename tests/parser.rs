use lox::{
    ast::Node,
    error::{Error, LexError, ParseError},
    interpreter::parser::core::{ParseMode, Parser},
    span::Span,
};
use pretty_assertions::assert_eq;

fn render(mode: ParseMode, source: &str) -> Vec<String> {
    let outcome = Parser::new(mode).parse(source);
    assert!(!outcome.has_err(), "unexpected errors: {:?}", outcome.errors);
    outcome.success.iter().map(ToString::to_string).collect()
}

fn expression(source: &str) -> String {
    let mut rendered = render(ParseMode::Expression, source);
    assert_eq!(rendered.len(), 1, "expected a single expression in {source:?}");
    rendered.remove(0)
}

fn statements(source: &str) -> Vec<String> {
    render(ParseMode::Statement, source)
}

fn errors(source: &str) -> Vec<Error> {
    Parser::new(ParseMode::Statement).parse(source).errors
}

#[test]
fn precedence_climbs_from_factor_to_equality() {
    assert_eq!(expression("1 + 2 * 3"), "(+ 1.0 (* 2.0 3.0))");
    assert_eq!(expression("1 * 2 + 3"), "(+ (* 1.0 2.0) 3.0)");
    assert_eq!(expression("1 < 2 == 3 >= 4"), "(== (< 1.0 2.0) (>= 3.0 4.0))");
    assert_eq!(expression("-1 - -2"), "(- (- 1.0) (- 2.0))");
}

#[test]
fn binary_tiers_are_left_associative() {
    assert_eq!(expression("1 - 2 - 3"), "(- (- 1.0 2.0) 3.0)");
    assert_eq!(expression("8 / 4 / 2"), "(/ (/ 8.0 4.0) 2.0)");
    assert_eq!(expression("a == b != c"), "(!= (== a b) c)");
}

#[test]
fn unary_operators_nest() {
    assert_eq!(expression("!!true"), "(! (! true))");
    assert_eq!(expression("!-x"), "(! (- x))");
}

#[test]
fn groups_are_kept() {
    assert_eq!(expression("(1 + 2) * 3"), "(* (group (+ 1.0 2.0)) 3.0)");
    assert_eq!(expression("((nil))"), "(group (group nil))");
}

#[test]
fn literals_render_canonically() {
    assert_eq!(expression("42"), "42.0");
    assert_eq!(expression("1.50"), "1.5");
    assert_eq!(expression("\"hello world\""), "hello world");
    assert_eq!(expression("false"), "false");
}

#[test]
fn logical_operators_bind_looser_than_equality() {
    assert_eq!(expression("a or b and c"), "(or a (and b c))");
    assert_eq!(expression("a == 1 and b"), "(and (== a 1.0) b)");
    assert_eq!(expression("a or b or c"), "(or (or a b) c)");
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(expression("a = b = 3"), "(= a (= b 3.0))");
    assert_eq!(expression("a = b or c"), "(= a (or b c))");
}

#[test]
fn expression_mode_reads_consecutive_expressions() {
    assert_eq!(render(ParseMode::Expression, "1 + 2 \"x\""),
               vec!["(+ 1.0 2.0)", "x"]);
}

#[test]
fn statement_forms() {
    assert_eq!(statements("print 1; 2 + 3; var a = 1; var b;"),
               vec!["(print 1.0)", "(; (+ 2.0 3.0))", "(var a 1.0)", "(var b)"]);
    assert_eq!(statements("{ var a = 1; { print a; } }"),
               vec!["(block (var a 1.0) (block (print a)))"]);
}

#[test]
fn else_binds_to_the_nearest_if() {
    assert_eq!(statements("if (a) if (b) print 1; else print 2;"),
               vec!["(if (group a) (if (group b) (print 1.0) (print 2.0)))"]);
    assert_eq!(statements("if (a) { print 1; } else print 2;"),
               vec!["(if (group a) (block (print 1.0)) (print 2.0))"]);
}

#[test]
fn loops_parse_without_running() {
    assert_eq!(statements("while (i < 3) i = i + 1;"),
               vec!["(while (group (< i 3.0)) (; (= i (+ i 1.0))))"]);
    assert_eq!(statements("for (var i = 0; i < 3; i = i + 1) print i;"),
               vec!["(for (var i 0.0) (< i 3.0) (= i (+ i 1.0)) (print i))"]);
    assert_eq!(statements("for (;;) print 1;"),
               vec!["(for _ _ _ (print 1.0))"]);
    assert_eq!(statements("for (i = 0; ; ) { print i; }"),
               vec!["(for (; (= i 0.0)) _ _ (block (print i)))"]);
}

#[test]
fn functions_and_classes() {
    assert_eq!(statements("fun add(a, b) { return a + b; }"),
               vec!["(fun add (a b) (return (+ a b)))"]);
    assert_eq!(statements("fun noop() { return; }"),
               vec!["(fun noop () (return))"]);
    assert_eq!(statements("class B < A { init(x) { print x; } go() { return 1; } }"),
               vec!["(class B < A (fun init (x) (print x)) (fun go () (return 1.0)))"]);
    assert_eq!(statements("class Empty {}"), vec!["(class Empty)"]);
}

#[test]
fn spans_point_at_the_introducing_token() {
    let nodes = Parser::new(ParseMode::Statement).parse("var x = 1;\nif (x) print x;")
                                                 .success;

    assert_eq!(nodes[0].span(), Span::new(1, 0, 3));
    assert_eq!(nodes[1].span(), Span::new(2, 11, 2));
    let Node::IfStmt { then_branch, .. } = &nodes[1] else {
        panic!("expected an if statement, got {}", nodes[1]);
    };
    assert_eq!(then_branch.span(), Span::new(2, 18, 5));
}

#[test]
fn empty_block_is_rejected() {
    assert_eq!(errors("{ }"),
               vec![Error::from(ParseError::UnexpectedToken { token: "}".to_string(),
                                                              span:  Span::new(1, 2, 1), })]);
}

#[test]
fn assignment_target_must_be_a_variable() {
    let errors = errors("1 = 2;");

    assert_eq!(errors[0],
               Error::from(ParseError::UnexpectedToken { token: "=".to_string(),
                                                         span:  Span::new(1, 2, 1), }));
    assert_eq!(errors[0].to_string(), "[line 1] Error: Unexpected token: =");
}

#[test]
fn grouped_target_is_not_a_variable() {
    let errors = errors("(a) = 2;");

    assert_eq!(errors[0],
               Error::from(ParseError::UnexpectedToken { token: "=".to_string(),
                                                         span:  Span::new(1, 4, 1), }));
}

#[test]
fn missing_semicolon_at_end_of_input() {
    assert_eq!(errors("print 1"),
               vec![Error::from(ParseError::UnexpectedEof { span: Span::new(1, 7, 0) })]);
}

#[test]
fn every_top_level_error_is_reported() {
    let outcome = Parser::new(ParseMode::Statement).parse("42 42; 10 10;");

    assert_eq!(outcome.errors,
               vec![Error::from(ParseError::MissingToken { expected: ";".to_string(),
                                                           actual:   "42".to_string(),
                                                           span:     Span::new(1, 3, 2), }),
                    Error::from(ParseError::MissingToken { expected: ";".to_string(),
                                                           actual:   "10".to_string(),
                                                           span:     Span::new(1, 10, 2), })]);
    assert_eq!(outcome.errors[0].to_string(),
               "[line 1] Error: Missing token: expected ';' got '42'");
}

#[test]
fn unclosed_group_reports_the_token_found() {
    let errors = errors("print (1;");

    assert_eq!(errors[0],
               Error::from(ParseError::MissingToken { expected: ")".to_string(),
                                                      actual:   ";".to_string(),
                                                      span:     Span::new(1, 8, 1), }));
}

#[test]
fn parsing_resumes_after_a_failed_declaration() {
    let outcome = Parser::new(ParseMode::Statement).parse("print ; print 2;");

    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.success.len(), 1);
    assert_eq!(outcome.success[0].to_string(), "(print 2.0)");
}

#[test]
fn keywords_are_not_variable_names() {
    assert_eq!(errors("var class = 1;")[0],
               Error::from(ParseError::UnexpectedToken { token: "class".to_string(),
                                                         span:  Span::new(1, 4, 5), }));
}

#[test]
fn lexical_errors_stop_before_parsing() {
    let outcome = Parser::new(ParseMode::Statement).parse("var a = @; print (;");

    assert!(outcome.success.is_empty());
    assert_eq!(outcome.errors,
               vec![Error::from(LexError::UnexpectedCharacter { character: '@',
                                                                span:      Span::new(1, 8, 1), })]);
}

#[test]
fn errors_carry_their_line() {
    let errors = errors("print 1;\n\nprint +;");

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].to_string(), "[line 3] Error: Unexpected token: +");
}

#[test]
fn empty_input_has_no_nodes() {
    let outcome = Parser::new(ParseMode::Statement).parse("  // nothing\n");

    assert!(outcome.success.is_empty());
    assert!(outcome.errors.is_empty());
}
