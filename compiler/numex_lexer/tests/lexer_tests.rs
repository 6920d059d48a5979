use numex_lexer::{tokenize, Function, LexError, Operator, TokenKind};
use proptest::prelude::*;

#[allow(dead_code)]
fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

#[test]
fn test_every_builtin_is_tokenized_as_a_function() {
    init_test_logger();
    for function in Function::all() {
        let source = format!("{}(x)", function.name());
        let tokens = tokenize(&source).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Function(function), "{source}");
        assert_eq!(tokens[1].kind, TokenKind::LParen);
        assert_eq!(tokens[2].kind, TokenKind::Name("x".into()));
        assert_eq!(tokens[3].kind, TokenKind::RParen);
    }
}

#[test]
fn test_special_float_spellings_are_numbers() {
    for text in ["inf", "NaN", "infinity"] {
        let tokens = tokenize(text).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Number(text.into()));
    }
}

#[test]
fn test_comma_is_an_operator() {
    let tokens = tokenize("max(a,b)").unwrap();
    assert_eq!(tokens[3].kind, TokenKind::Operator(Operator::Comma));
    assert_eq!(tokens[3].position, 5);
}

#[test]
fn test_error_positions_are_exposed() {
    let err = tokenize("abc + a[").unwrap_err();
    assert!(matches!(err, LexError::MissingBracket { .. }));
    assert_eq!(err.position(), 6);
}

proptest! {
    #[test]
    fn prop_finite_floats_lex_as_one_number(value in 0.0f64..1.0e12) {
        let text = format!("{value}");
        let tokens = tokenize(&text).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Number(text.clone()));
    }

    #[test]
    fn prop_identifiers_lex_as_name_or_function(name in "[a-z][a-z0-9_]{0,8}") {
        let tokens = tokenize(&name).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        let expected_kind = match Function::from_name(&name) {
            Some(function) => TokenKind::Function(function),
            None if name.parse::<f64>().is_ok() => TokenKind::Number(name.clone()),
            None => TokenKind::Name(name.clone()),
        };
        prop_assert_eq!(&tokens[0].kind, &expected_kind);
    }

    #[test]
    fn prop_indexed_names_keep_their_index(name in "[a-z][a-z_]{0,6}", index in 0usize..10_000) {
        prop_assume!(Function::from_name(&name).is_none());
        prop_assume!(name.parse::<f64>().is_err());
        let source = format!("{name}[{index}]");
        let tokens = tokenize(&source).unwrap();
        prop_assert_eq!(
            &tokens[0].kind,
            &TokenKind::SlicedName { name: name.clone(), index }
        );
    }
}
