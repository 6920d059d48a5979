use approx::assert_abs_diff_eq;
use numex::{compile, evaluate, run, Env, Error, EvalError, ParseError, Value};
use pretty_assertions::assert_eq;

fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

#[test]
fn test_compile_run_and_evaluate_agree() {
    init_test_logger();
    let input = "((((4 * 2) + (3 * 5)) / (8 - 5)) - (7 + 3)) * (2 / (1 + 1))";
    let expr = compile(input).unwrap();
    for _ in 0..2 {
        match run(&expr, None) {
            Ok(Value::Scalar64(x)) => assert_abs_diff_eq!(x, -2.333333, epsilon = 1e-5),
            other => panic!("unexpected {other:?}"),
        }
    }
    assert_eq!(evaluate(input, None), run(&expr, None));
}

#[test]
fn test_pretty_print_of_function_call() {
    let expr = compile("add((1) , (2))").unwrap();
    assert_eq!(expr.pretty(), "add\n  ,\n    1\n    2\n");
}

#[test]
fn test_pretty_print_of_variables() {
    let expr = compile("aa[1] * (bb - dd) / c").unwrap();
    assert_eq!(
        expr.pretty(),
        "/\n  *\n    aa[1]\n    -\n      bb\n      dd\n  c\n"
    );
}

#[test]
fn test_unbalanced_parentheses() {
    let cases = [
        ("(1", 1),
        ("1)", 1),
        ("1* (2", 4),
        ("1 * (2 + 3", 9),
        ("1 * (2 + 3))", 11),
    ];
    for (source, position) in cases {
        assert_eq!(
            compile(source).unwrap_err(),
            Error::Parse(ParseError::UnbalancedParenthesis { position }),
            "{source}"
        );
    }
}

#[test]
fn test_missing_operand_is_an_error_not_a_crash() {
    assert!(matches!(
        evaluate("aa * ", None),
        Err(Error::Parse(ParseError::MissingOperand { symbol: "*", .. }))
    ));
}

#[test]
fn test_environment_errors() {
    let message = "Cannot evaluate expression. Key 'aa' not found in environment";
    assert_eq!(evaluate("aa * 3", None).unwrap_err().to_string(), message);

    let env = Env::new().with("aa", 1.0);
    assert_eq!(
        evaluate("bb * 3", Some(&env)),
        Err(Error::Evaluate(EvalError::KeyNotFound { name: "bb".into() }))
    );

    let env = Env::new().with("aa", 1.0).with("bb", "foo");
    assert_eq!(
        evaluate("bb * aa", Some(&env)).unwrap_err().to_string(),
        "Unsupported data type 'String' for token 'bb'"
    );

    let mut env = Env::new();
    env.set("aa", numex::Binding::Null);
    assert!(matches!(
        evaluate("aa * 3", Some(&env)),
        Err(Error::Evaluate(EvalError::UnsupportedType { type_name: "null", .. }))
    ));
}

#[test]
fn test_broadcasting_laws() {
    let env = Env::new()
        .with("s", 2.0)
        .with("v", vec![1.0, 2.0, 3.0])
        .with("w", vec![10.0, 20.0]);
    assert_eq!(evaluate("s + v", Some(&env)), Ok(Value::Vector64(vec![3.0, 4.0, 5.0])));
    assert_eq!(evaluate("s + v", Some(&env)), evaluate("v + s", Some(&env)));
    assert_eq!(evaluate("s * v", Some(&env)), evaluate("v * s", Some(&env)));
    assert_ne!(evaluate("s - v", Some(&env)), evaluate("v - s", Some(&env)));
    assert_ne!(evaluate("s / v", Some(&env)), evaluate("v / s", Some(&env)));
    assert_eq!(evaluate("v + w", Some(&env)), Ok(Value::Vector64(vec![11.0, 22.0])));
}

#[test]
fn test_indexing() {
    let env = Env::new().with("aa", vec![10.0, 20.0, 30.0]).with("bb", vec![1.0, 5.0, 2.0]);
    assert_eq!(evaluate("aa[1] * 2", Some(&env)), Ok(Value::Scalar64(40.0)));
    assert_eq!(evaluate("2 * bb[1]", Some(&env)), Ok(Value::Scalar64(10.0)));
    assert_eq!(
        evaluate("aa[3]", Some(&env)),
        Err(Error::Evaluate(EvalError::IndexOutOfRange {
            name: "aa".into(),
            index: 3,
            len: 3
        }))
    );
}
