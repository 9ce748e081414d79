//! Engineering strains of a displacement field `(u, v, w)`.

use crate::calculus::differentiate;
use crate::expr::Expr;
use crate::simplify::{simplify, simplify_add, simplify_mul};
use crate::symbols::{X_NAME, Y_NAME, Z_NAME};

pub fn strain_x(u: &Expr) -> Expr {
    partial(X_NAME, u)
}

pub fn strain_y(v: &Expr) -> Expr {
    partial(Y_NAME, v)
}

pub fn strain_z(w: &Expr) -> Expr {
    partial(Z_NAME, w)
}

/// `1/2 * (dv/dz + dw/dy)`
pub fn strain_yz(v: &Expr, w: &Expr) -> Expr {
    half_sum(partial(Z_NAME, v), partial(Y_NAME, w))
}

/// `1/2 * (du/dz + dw/dx)`
pub fn strain_xz(u: &Expr, w: &Expr) -> Expr {
    half_sum(partial(Z_NAME, u), partial(X_NAME, w))
}

/// `1/2 * (du/dy + dv/dx)`
pub fn strain_xy(u: &Expr, v: &Expr) -> Expr {
    half_sum(partial(Y_NAME, u), partial(X_NAME, v))
}

fn half_sum(a: Expr, b: Expr) -> Expr {
    simplify_mul(Expr::constant(1, 2), simplify_add(a, b))
}

fn partial(var: &str, field: &Expr) -> Expr {
    differentiate(var, &simplify(field.clone()))
}
