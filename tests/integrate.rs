use mechcas::{
    AttemptStatus, CasError, Expr, IntegrandKind, IntegrationResult, ReasonCode, Strategy,
    antiderivative, integrate, integrate_definite, parse_expr, pretty_integration_result,
    simplify_fully,
};

fn simp(input: &str) -> Expr {
    simplify_fully(parse_expr(input).expect("parse input"))
}

fn assert_integral(input: &str, expected: &str) {
    let expr = parse_expr(input).expect("parse input");
    let result = antiderivative("x", &expr).unwrap_or_else(|e| panic!("{input}: {e}"));
    assert_eq!(simplify_fully(result), simp(expected), "integral of {input}");
}

#[test]
fn polynomials_integrate_term_by_term() {
    let poly = parse_expr("x^3").unwrap();
    match integrate("x", &poly) {
        IntegrationResult::Integrated { result, report } => {
            assert_eq!(simplify_fully(result), simp("1/4*x^4"));
            assert_eq!(report.kind, IntegrandKind::Polynomial);
        }
        other => panic!("expected integration, got {other:?}"),
    }
    assert_integral("3*x^2 + 2*x + 1", "x^3 + x^2 + x");
    assert_integral("(x + 1)^2", "x^3/3 + x^2 + x");
}

#[test]
fn constants_pick_up_the_variable() {
    assert_integral("E*t", "E*t*x");
    assert_integral("1", "x");
}

#[test]
fn affine_arguments() {
    assert_integral("sin(2*x + 3)", "-1/2*cos(2*x + 3)");
    assert_integral("cos(x)", "sin(x)");
    assert_integral("exp(3*x)", "exp(3*x)/3");
    assert_integral("1/x", "log(x)");
    assert_integral("log(x)", "x*log(x) - x");
}

#[test]
fn substitution_is_recorded_for_shifted_arguments() {
    let expr = parse_expr("exp(2*x)").unwrap();
    let report = integrate("x", &expr).report().clone();
    assert!(
        report
            .attempts
            .iter()
            .any(|a| a.strategy == Strategy::Substitution && a.status == AttemptStatus::Succeeded)
    );
}

#[test]
fn field_derivatives_lose_one_order() {
    let expr = parse_expr("diff(w(x, t), x, x)").unwrap();
    match integrate("x", &expr) {
        IntegrationResult::Integrated { result, report } => {
            assert_eq!(result, simp("diff(w(x, t), x)"));
            assert_eq!(report.kind, IntegrandKind::Field);
        }
        other => panic!("expected integration, got {other:?}"),
    }
    assert_integral("diff(w(x, t), x, t)", "diff(w(x, t), t)");
}

#[test]
fn fields_without_an_x_derivative_are_not_integrable() {
    let expr = parse_expr("w(x, t)").unwrap();
    assert!(matches!(
        antiderivative("x", &expr),
        Err(CasError::NotIntegrable(_))
    ));
}

#[test]
fn tabular_parts_for_polynomial_products() {
    assert_integral("x*exp(x)", "x*exp(x) - exp(x)");
    assert_integral("x^2*cos(x)", "x^2*sin(x) + 2*x*cos(x) - 2*sin(x)");
    assert_integral("x*diff(w(x, t), x, x)", "x*diff(w(x, t), x) - w(x, t)");

    let expr = parse_expr("x*sin(x)").unwrap();
    let report = integrate("x", &expr).report().clone();
    assert!(
        report
            .attempts
            .iter()
            .any(|a| a.strategy == Strategy::IntegrationByParts)
    );
}

#[test]
fn products_of_two_transcendental_factors_fail() {
    let expr = parse_expr("sin(x)*exp(x)").unwrap();
    match integrate("x", &expr) {
        IntegrationResult::NotIntegrable(report) => {
            assert_eq!(report.reason, Some(ReasonCode::NonPolynomialFactor));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn definite_integrals_evaluate_the_bounds() {
    let expr = parse_expr("x^2").unwrap();
    let result = integrate_definite("x", &expr, &Expr::integer(0), &Expr::var("L")).unwrap();
    assert_eq!(simplify_fully(result), simp("L^3/3"));

    let field = parse_expr("diff(w(x, t), x)").unwrap();
    let result = integrate_definite("x", &field, &Expr::integer(0), &Expr::var("L")).unwrap();
    assert_eq!(simplify_fully(result), simp("w(L, t) - w(0, t)"));
}

#[test]
fn reports_render_as_lines() {
    let ok = integrate("x", &parse_expr("x").unwrap());
    let lines = pretty_integration_result(&ok);
    assert_eq!(lines[0], "integrated: 1/2*x^2");
    assert_eq!(lines[1], "kind: Polynomial");

    let failed = integrate("x", &parse_expr("exp(x^2)").unwrap());
    let lines = pretty_integration_result(&failed);
    assert_eq!(lines[0], "not integrable");
    assert!(lines.iter().any(|l| l == "reason: NoRule"));
}
