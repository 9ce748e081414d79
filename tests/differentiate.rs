use mechcas::symbols::{W, W_T, W_X};
use mechcas::{
    CasError, Expr, differentiate, differentiate_n, differentiate_wrt, parse_expr, simplify_fully,
};

fn simp(input: &str) -> Expr {
    simplify_fully(parse_expr(input).expect("parse input"))
}

fn assert_derivative(input: &str, var: &str, expected: &str) {
    let expr = parse_expr(input).expect("parse input");
    assert_eq!(
        simplify_fully(differentiate(var, &expr)),
        simp(expected),
        "d/d{var} {input}"
    );
}

#[test]
fn polynomial_rules() {
    assert_derivative("x^3 + 2*x + 7", "x", "3*x^2 + 2");
    assert_derivative("a*x^2*y", "y", "a*x^2");
    assert_derivative("E*L", "x", "0");
}

#[test]
fn chain_rule_through_elementary_functions() {
    assert_derivative("sin(x^2)", "x", "2*x*cos(x^2)");
    assert_derivative("cos(3*x)", "x", "-3*sin(3*x)");
    assert_derivative("exp(k*t)", "t", "k*exp(k*t)");
    assert_derivative("log(x)", "x", "1/x");
}

#[test]
fn function_nodes_track_slot_orders() {
    assert_derivative("w(x, t)", "x", "diff(w(x, t), x)");
    assert_derivative("x^2*w(x, t)", "t", "x^2*diff(w(x, t), t)");
    assert_derivative("diff(w(x, t), x)", "t", "diff(w(x, t), x, t)");
    assert_derivative("w(x, t)^2", "x", "2*w(x, t)*diff(w(x, t), x)");
}

#[test]
fn repeated_differentiation() {
    let expr = parse_expr("x^4").unwrap();
    assert_eq!(simplify_fully(differentiate_n("x", &expr, 3)), simp("24*x"));
    let w = parse_expr("w(x, t)").unwrap();
    assert_eq!(differentiate_n("x", &w, 4), simp("diff(w(x, t), x, x, x, x)"));
}

#[test]
fn field_nodes_act_as_independent_variables() {
    let lagrangian = parse_expr("rhoA*diff(w(x, t), t)^2 + k*w(x, t)").unwrap();
    let by_wt = differentiate_wrt(&W_T, &lagrangian).unwrap();
    assert_eq!(simplify_fully(by_wt), simp("2*rhoA*diff(w(x, t), t)"));

    let by_w = differentiate_wrt(&W, &lagrangian).unwrap();
    assert_eq!(simplify_fully(by_w), simp("k"));

    assert!(differentiate_wrt(&W_X, &lagrangian).unwrap().is_zero());
}

#[test]
fn symbols_are_valid_targets() {
    let expr = parse_expr("t^2*y").unwrap();
    let by_t = differentiate_wrt(&Expr::var("t"), &expr).unwrap();
    assert_eq!(simplify_fully(by_t), simp("2*t*y"));
}

#[test]
fn compound_targets_are_rejected() {
    let target = parse_expr("x*y").unwrap();
    let result = differentiate_wrt(&target, &parse_expr("x").unwrap());
    assert!(matches!(result, Err(CasError::Unsupported(_))));
}

#[test]
fn functions_of_the_field_use_the_chain_rule() {
    let potential = parse_expr("-V(w(x, t))").unwrap();
    let by_w = differentiate_wrt(&W, &potential).unwrap();
    let v_prime = Expr::Function {
        name: "V".into(),
        args: vec![W.clone()],
        orders: vec![1],
    };
    assert_eq!(simplify_fully(by_w), Expr::Neg(v_prime.boxed()));

    let slope_energy = parse_expr("V(diff(w(x, t), x))").unwrap();
    assert!(differentiate_wrt(&W, &slope_energy).unwrap().is_zero());
    assert!(!differentiate_wrt(&W_X, &slope_energy).unwrap().is_zero());
}
