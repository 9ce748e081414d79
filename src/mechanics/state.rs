use crate::expr::Expr;

use super::strain::{strain_x, strain_xy, strain_xz, strain_y, strain_yz, strain_z};
use super::stress::{stress_x, stress_xy, stress_xz, stress_y, stress_yz, stress_z};

/// Displacement components along `x`, `y` and `z`.
#[derive(Debug, Clone, PartialEq)]
pub struct Displacement {
    pub u: Expr,
    pub v: Expr,
    pub w: Expr,
}

/// The six independent engineering strains of a displacement field.
#[derive(Debug, Clone, PartialEq)]
pub struct StrainState {
    pub xx: Expr,
    pub yy: Expr,
    pub zz: Expr,
    pub yz: Expr,
    pub xz: Expr,
    pub xy: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StressState {
    pub xx: Expr,
    pub yy: Expr,
    pub zz: Expr,
    pub yz: Expr,
    pub xz: Expr,
    pub xy: Expr,
}

impl Displacement {
    pub fn new(u: Expr, v: Expr, w: Expr) -> Self {
        Displacement { u, v, w }
    }

    pub fn strains(&self) -> StrainState {
        StrainState {
            xx: strain_x(&self.u),
            yy: strain_y(&self.v),
            zz: strain_z(&self.w),
            yz: strain_yz(&self.v, &self.w),
            xz: strain_xz(&self.u, &self.w),
            xy: strain_xy(&self.u, &self.v),
        }
    }

    pub fn stresses(&self) -> StressState {
        StressState {
            xx: stress_x(&self.u),
            yy: stress_y(&self.v),
            zz: stress_z(&self.w),
            yz: stress_yz(&self.v, &self.w),
            xz: stress_xz(&self.u, &self.w),
            xy: stress_xy(&self.u, &self.v),
        }
    }
}

impl StrainState {
    /// Components in Voigt order: `xx, yy, zz, yz, xz, xy`.
    pub fn components(&self) -> [(&'static str, &Expr); 6] {
        [
            ("xx", &self.xx),
            ("yy", &self.yy),
            ("zz", &self.zz),
            ("yz", &self.yz),
            ("xz", &self.xz),
            ("xy", &self.xy),
        ]
    }
}

impl StressState {
    pub fn components(&self) -> [(&'static str, &Expr); 6] {
        [
            ("xx", &self.xx),
            ("yy", &self.yy),
            ("zz", &self.zz),
            ("yz", &self.yz),
            ("xz", &self.xz),
            ("xy", &self.xy),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_expr;

    #[test]
    fn rigid_translation_is_strain_free() {
        let field = Displacement::new(Expr::var("a"), Expr::var("b"), Expr::var("c"));
        let strains = field.strains();
        assert!(strains.components().iter().all(|(_, e)| e.is_zero()));
    }

    #[test]
    fn uniaxial_stretch_loads_only_xx() {
        let field = Displacement::new(parse_expr("s*x").unwrap(), Expr::integer(0), Expr::integer(0));
        let stresses = field.stresses();
        assert_eq!(stresses.xx, parse_expr("E*s").map(crate::simplify::simplify).unwrap());
        assert!(stresses.xy.is_zero());
    }
}
