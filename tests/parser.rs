use mechcas::{CasError, Expr, parse_expr, pretty, simplify_fully};

fn round_trip(input: &str) {
    let expr = simplify_fully(parse_expr(input).expect("parse input"));
    let printed = pretty(&expr);
    let reparsed = simplify_fully(
        parse_expr(&printed).unwrap_or_else(|e| panic!("reparse {printed:?}: {e}")),
    );
    assert_eq!(reparsed, expr, "{input} printed as {printed}");
}

#[test]
fn printed_expressions_parse_back() {
    for input in [
        "x^2 + 3*x - 1/2",
        "-E*diff(w(x, t), x, x)",
        "1/2*rhoA*diff(w(x, t), t)^2",
        "sin(2*x + 3)*exp(-t)",
        "(a + b)^10",
        "x^-1 + L*log(x)",
        "diff(w(L, t), L) - w^(1,0)(0, t) + V^(1)(w(x, t))",
    ] {
        round_trip(input);
    }
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(
        parse_expr("a - b - c").unwrap(),
        parse_expr("(a - b) - c").unwrap()
    );
    assert_eq!(
        parse_expr("2^3^2").unwrap(),
        parse_expr("2^(3^2)").unwrap()
    );
    assert_eq!(simplify_fully(parse_expr("2^3^2").unwrap()), Expr::integer(512));
}

#[test]
fn display_uses_the_pretty_printer() {
    let expr = parse_expr("w(x, t)").unwrap();
    assert_eq!(expr.to_string(), "w(x, t)");
    assert_eq!(format!("{}", parse_expr("a*b").unwrap()), "a*b");
}

#[test]
fn malformed_input_is_a_parse_error() {
    for input in ["x +", "sin(x, y)", "diff(x, x)", "w(x, t", "3 $ 4"] {
        assert!(
            matches!(parse_expr(input), Err(CasError::Parse(_))),
            "{input} should fail"
        );
    }
}
