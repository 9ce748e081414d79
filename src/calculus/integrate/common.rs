use crate::calculus::differentiate;
use crate::expr::Expr;
use crate::simplify::{flatten_mul, simplify_mul, split_coeff};
use num_traits::Signed;

/// Coefficient `a` of an affine expression `a*var + b`, where `a` is free of `var` and non-zero.
pub(crate) fn linear_coefficient(expr: &Expr, var: &str) -> Option<Expr> {
    let a = differentiate(var, expr);
    if a.is_zero() || a.contains_var(var) {
        None
    } else {
        Some(a)
    }
}

/// Split a product into the factor free of `var` and the remaining `var`-dependent factors.
pub(crate) fn split_constant_factors(expr: &Expr, var: &str) -> (Expr, Vec<Expr>) {
    let (c, core) = split_coeff(expr);
    let (free, dependent): (Vec<Expr>, Vec<Expr>) = flatten_mul(&core)
        .into_iter()
        .partition(|factor| !factor.contains_var(var));
    let coeff = free
        .into_iter()
        .fold(Expr::Constant(c), simplify_mul);
    (coeff, dependent)
}

/// `var` itself or `var^n` for a non-negative integer `n`.
pub(crate) fn is_var_power(expr: &Expr, var: &str) -> bool {
    match expr {
        Expr::Variable(v) => v == var,
        Expr::Pow(base, exp) => {
            matches!(&**base, Expr::Variable(v) if v == var)
                && matches!(&**exp, Expr::Constant(n) if n.is_integer() && !n.is_negative())
        }
        _ => false,
    }
}

pub fn is_polynomial(expr: &Expr, var: &str) -> bool {
    match expr {
        Expr::Constant(_) | Expr::Variable(_) => true,
        Expr::Add(a, b) | Expr::Sub(a, b) | Expr::Mul(a, b) => {
            is_polynomial(a, var) && is_polynomial(b, var)
        }
        Expr::Neg(inner) => is_polynomial(inner, var),
        Expr::Div(num, den) => is_polynomial(num, var) && !den.contains_var(var),
        Expr::Pow(base, exp) => match &**exp {
            Expr::Constant(n) if n.is_integer() && !n.is_negative() => {
                is_polynomial(base, var)
            }
            _ => !expr.contains_var(var),
        },
        other => !other.contains_var(var),
    }
}
