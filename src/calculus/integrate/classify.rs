use crate::expr::Expr;
use crate::simplify::{flatten_sum, mul_from_sorted_factors};

use super::common::{is_polynomial, split_constant_factors};
use super::types::IntegrandKind;

pub(super) fn classify_integrand(expr: &Expr, var: &str) -> IntegrandKind {
    if !expr.contains_var(var) {
        return IntegrandKind::Constant;
    }
    if flatten_sum(expr).len() > 1 {
        return IntegrandKind::Sum;
    }
    if is_polynomial(expr, var) {
        return IntegrandKind::Polynomial;
    }
    let (_, factors) = split_constant_factors(expr, var);
    match factors.as_slice() {
        [] => IntegrandKind::Constant,
        [single] => factor_kind(single, var),
        [first, rest @ ..] => IntegrandKind::Product(
            Box::new(classify_integrand(first, var)),
            Box::new(classify_integrand(&mul_from_sorted_factors(rest), var)),
        ),
    }
}

fn factor_kind(expr: &Expr, var: &str) -> IntegrandKind {
    match expr {
        Expr::Sin(_) | Expr::Cos(_) => IntegrandKind::Trig,
        Expr::Exp(_) => IntegrandKind::Exponential,
        Expr::Log(_) => IntegrandKind::Logarithmic,
        Expr::Function { .. } => IntegrandKind::Field,
        Expr::Pow(base, _) if !is_polynomial(base, var) => factor_kind(base, var),
        _ => IntegrandKind::Unknown,
    }
}
