//! Integration by parts over the member length `[0, L]`.

use crate::calculus::{antiderivative, differentiate, integrate_definite};
use crate::error::Result;
use crate::expr::{Expr, zero};
use crate::simplify::{simplify, simplify_mul, simplify_sub, substitute_expr};
use crate::symbols::{L, X, X_NAME};

/// `[u*v]_0^L - int_0^L v * du/dx dx` with `v = int dv dx`.
///
/// `v` is taken with a zero integration constant, so boundary terms come out exactly as the
/// antiderivative gives them. Fails with `NotIntegrable` when either `dv` or `v * du/dx` has no
/// closed-form antiderivative.
pub fn int_by_parts(u: &Expr, dv: &Expr) -> Result<Expr> {
    let u = &simplify(u.clone());
    let v = antiderivative(X_NAME, dv)?;
    let uv = simplify_mul(u.clone(), v.clone());
    let boundary = simplify_sub(at(&uv, &L), at(&uv, &zero()));

    let du = differentiate(X_NAME, u);
    let remainder = integrate_definite(X_NAME, &simplify_mul(v, du), &zero(), &L)?;
    Ok(simplify_sub(boundary, remainder))
}

fn at(expr: &Expr, bound: &Expr) -> Expr {
    simplify(substitute_expr(expr, &X, bound))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_expr;

    #[test]
    fn constant_integrand_has_no_remainder() {
        let result = int_by_parts(&parse_expr("3").unwrap(), &parse_expr("2").unwrap()).unwrap();
        assert_eq!(result, simplify(parse_expr("6*L").unwrap()));
    }
}
