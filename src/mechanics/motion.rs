//! Euler-Lagrange equation of motion for the deflection field `w(x, t)`.

use crate::calculus::{differentiate, differentiate_n, differentiate_wrt};
use crate::error::Result;
use crate::expr::Expr;
use crate::simplify::{simplify, simplify_add, simplify_sub};
use crate::symbols::{T_NAME, W, W_T, W_X, W_XX, X_NAME};

/// `dL/dw - d/dt(dL/dw_t) - d/dx(dL/dw_x) + d2/dx2(dL/dw_xx) + q`.
///
/// `lagrangian` is a density in `w`, `w_t`, `w_x` and `w_xx`; each of those nodes is treated as
/// an independent variable while taking the partials. The result is canonicalized.
pub fn gov_eq(lagrangian: &Expr, q: &Expr) -> Result<Expr> {
    let lagrangian = &simplify(lagrangian.clone());
    let d_w = differentiate_wrt(&W, lagrangian)?;
    let d_wt = differentiate(T_NAME, &differentiate_wrt(&W_T, lagrangian)?);
    let d_wx = differentiate(X_NAME, &differentiate_wrt(&W_X, lagrangian)?);
    let d_wxx = differentiate_n(X_NAME, &differentiate_wrt(&W_XX, lagrangian)?, 2);

    let lhs = simplify_sub(simplify_sub(d_w, d_wt), d_wx);
    Ok(simplify_add(simplify_add(lhs, d_wxx), simplify(q.clone())))
}
