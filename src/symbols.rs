//! Process-wide symbols shared by every mechanics helper.
//!
//! Symbols are compared by name, so the names below are the single source of truth; the
//! statics are built once on first use and handed out by reference.

use std::sync::LazyLock;

use crate::calculus::differentiate;
use crate::expr::Expr;

pub const X_NAME: &str = "x";
pub const Y_NAME: &str = "y";
pub const Z_NAME: &str = "z";
pub const T_NAME: &str = "t";
pub const E_NAME: &str = "E";
pub const G_NAME: &str = "G";
pub const K_NAME: &str = "K";
pub const L_NAME: &str = "L";
/// Name of the transverse deflection field `w(x, t)`.
pub const W_NAME: &str = "w";

/// Axial coordinate.
pub static X: LazyLock<Expr> = LazyLock::new(|| Expr::var(X_NAME));
pub static Y: LazyLock<Expr> = LazyLock::new(|| Expr::var(Y_NAME));
pub static Z: LazyLock<Expr> = LazyLock::new(|| Expr::var(Z_NAME));
/// Time.
pub static T: LazyLock<Expr> = LazyLock::new(|| Expr::var(T_NAME));
/// Young's modulus.
pub static E: LazyLock<Expr> = LazyLock::new(|| Expr::var(E_NAME));
/// Shear modulus.
pub static G: LazyLock<Expr> = LazyLock::new(|| Expr::var(G_NAME));
/// Shear correction factor.
pub static K: LazyLock<Expr> = LazyLock::new(|| Expr::var(K_NAME));
/// Length of the member; upper bound of the `x` domain.
pub static L: LazyLock<Expr> = LazyLock::new(|| Expr::var(L_NAME));

/// Deflection field `w(x, t)`.
pub static W: LazyLock<Expr> = LazyLock::new(|| Expr::func(W_NAME, vec![X.clone(), T.clone()]));
/// `dw/dt`
pub static W_T: LazyLock<Expr> = LazyLock::new(|| differentiate(T_NAME, &W));
/// `dw/dx`
pub static W_X: LazyLock<Expr> = LazyLock::new(|| differentiate(X_NAME, &W));
/// `d2w/dx2`
pub static W_XX: LazyLock<Expr> = LazyLock::new(|| differentiate(X_NAME, &W_X));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_expr;

    #[test]
    fn field_nodes_match_their_parsed_forms() {
        assert_eq!(*W, parse_expr("w(x, t)").unwrap());
        assert_eq!(*W_T, parse_expr("diff(w(x, t), t)").unwrap());
        assert_eq!(*W_XX, parse_expr("diff(w(x, t), x, x)").unwrap());
    }

    #[test]
    fn symbols_resolve_by_name() {
        assert_eq!(*X, Expr::var("x"));
        assert_eq!(X.as_variable(), Some(X_NAME));
    }
}
