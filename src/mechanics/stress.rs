//! Linear-elastic stresses: `E` times the normal strains, `2*G*K` times the shear strains.

use crate::expr::Expr;
use crate::simplify::simplify_mul;
use crate::symbols::{E, G, K};

use super::strain::{strain_x, strain_xy, strain_xz, strain_y, strain_yz, strain_z};

pub fn stress_x(u: &Expr) -> Expr {
    normal(strain_x(u))
}

pub fn stress_y(v: &Expr) -> Expr {
    normal(strain_y(v))
}

pub fn stress_z(w: &Expr) -> Expr {
    normal(strain_z(w))
}

pub fn stress_yz(v: &Expr, w: &Expr) -> Expr {
    shear(strain_yz(v, w))
}

pub fn stress_xz(u: &Expr, w: &Expr) -> Expr {
    shear(strain_xz(u, w))
}

pub fn stress_xy(u: &Expr, v: &Expr) -> Expr {
    shear(strain_xy(u, v))
}

fn normal(strain: Expr) -> Expr {
    simplify_mul(E.clone(), strain)
}

fn shear(strain: Expr) -> Expr {
    let modulus = simplify_mul(simplify_mul(Expr::integer(2), G.clone()), K.clone());
    simplify_mul(modulus, strain)
}
