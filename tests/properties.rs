#![allow(clippy::unwrap_used)]

use lox::interpreter::lexer::{TokenKind, scan};
use proptest::prelude::*;

/// Source text for tokens whose rendering is their own lexeme.
fn literal_or_punctuation() -> impl Strategy<Value = String> {
    prop_oneof![prop::string::string_regex("[0-9]{1,6}(\\.[0-9]{0,4})?").unwrap(),
                prop::string::string_regex("\"[a-z0-9 ]{0,8}\"").unwrap(),
                prop::string::string_regex("[a-z_][a-z0-9_]{0,6}").unwrap(),
                prop::sample::select(vec!["(", ")", "{", "}", ",", ".", "-", "+", ";", "*",
                                          "/", "<", "<=", ">", ">=", "!", "!=", "=", "=="])
                .prop_map(str::to_string)]
}

proptest! {
    #[test]
    fn number_lexemes_read_as_ieee_doubles(lexeme in "[0-9]{1,9}(\\.[0-9]{0,6})?") {
        let tokens = scan(&lexeme).success;
        prop_assert_eq!(tokens.len(), 1);

        let TokenKind::Number(number) = &tokens[0].kind else {
            return Err(TestCaseError::fail(format!("not a number: {:?}", tokens[0])));
        };
        let expected: f64 = if lexeme.ends_with('.') {
            format!("{lexeme}0").parse().unwrap()
        } else {
            lexeme.parse().unwrap()
        };

        prop_assert_eq!(number.value, expected);
        prop_assert_eq!(&number.lexeme, &lexeme);
    }

    #[test]
    fn single_character_operators_have_length_one(padding in 0usize..8,
                                                  op in prop::sample::select(vec!['<', '>', '!', '=', '+', '-', '*', ';'])) {
        let source = format!("{}{op} 1", " ".repeat(padding));
        let tokens = scan(&source).success;

        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].span.offset, padding);
        prop_assert_eq!(tokens[0].span.length, 1);
    }

    #[test]
    fn two_character_operators_have_length_two(padding in 0usize..8,
                                               op in prop::sample::select(vec!["<=", ">=", "==", "!="])) {
        let source = format!("{}{op}1", " ".repeat(padding));
        let tokens = scan(&source).success;

        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].span.offset, padding);
        prop_assert_eq!(tokens[0].span.length, 2);
        prop_assert_eq!(tokens[1].span.offset, padding + 2);
    }

    #[test]
    fn rescanning_rendered_tokens_is_idempotent(parts in prop::collection::vec(literal_or_punctuation(), 1..12)) {
        let first = scan(&parts.join(" "));
        prop_assert!(!first.has_err());

        let rendered = first.success
                            .iter()
                            .map(|token| token.kind.lexeme())
                            .collect::<Vec<_>>()
                            .join(" ");
        let second = scan(&rendered);

        let kinds = |tokens: &[lox::interpreter::lexer::Token]| {
            tokens.iter().map(|token| token.kind.clone()).collect::<Vec<_>>()
        };
        prop_assert_eq!(kinds(&first.success), kinds(&second.success));
    }

    #[test]
    fn scanning_never_loses_track_of_lines(lines in prop::collection::vec("[a-z]{1,5}", 1..10)) {
        let tokens = scan(&lines.join("\n")).success;

        let numbers = tokens.iter().map(|token| token.span.line).collect::<Vec<_>>();
        prop_assert_eq!(numbers, (1..=lines.len()).collect::<Vec<_>>());
    }
}
