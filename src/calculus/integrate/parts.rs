use crate::calculus::differentiate;
use crate::expr::{Expr, Rational, zero};
use crate::format::pretty;
use crate::simplify::{simplify_add, simplify_mul};
use num_traits::One;

use super::common::is_var_power;
use super::{AttemptStatus, Integrator, ReasonCode, Strategy};

/// Maximum number of rows in the tabular scheme, i.e. polynomial degree plus one.
pub const TABULAR_STEP_LIMIT: usize = 16;

impl<'a> Integrator<'a> {
    /// Tabular integration by parts for `p(var) * g(var)`, with `p` a power of `var`
    /// and `g` a single factor that can be integrated repeatedly.
    pub(super) fn integrate_product(&mut self, factors: &[Expr]) -> Option<Expr> {
        let (poly, others): (Vec<Expr>, Vec<Expr>) = factors
            .iter()
            .cloned()
            .partition(|f| is_var_power(f, self.var));
        let [g] = others.as_slice() else {
            self.record(
                Strategy::IntegrationByParts,
                AttemptStatus::Failed(ReasonCode::NonPolynomialFactor),
                Some(format!("{} factors without a polynomial role", others.len())),
            );
            return None;
        };
        if poly.is_empty() {
            self.record(Strategy::IntegrationByParts, AttemptStatus::NotApplicable, None);
            return None;
        }

        let mut p = poly.into_iter().fold(Expr::Constant(Rational::one()), simplify_mul);
        let mut g = g.clone();
        let note = Some(format!("u={}, dv={}", pretty(&p), pretty(&g)));
        let mut sign = Rational::one();
        let mut acc = zero();
        for _ in 0..TABULAR_STEP_LIMIT {
            if p.is_zero() {
                self.record(Strategy::IntegrationByParts, AttemptStatus::Succeeded, note);
                return Some(acc);
            }
            let g_int = self.integrate(&g)?;
            let row = simplify_mul(Expr::Constant(sign.clone()), simplify_mul(p.clone(), g_int.clone()));
            acc = simplify_add(acc, row);
            p = differentiate(self.var, &p);
            g = g_int;
            sign = -sign;
        }
        if p.is_zero() {
            self.record(Strategy::IntegrationByParts, AttemptStatus::Succeeded, note);
            return Some(acc);
        }
        self.record(
            Strategy::IntegrationByParts,
            AttemptStatus::Failed(ReasonCode::StepLimit(TABULAR_STEP_LIMIT)),
            note,
        );
        None
    }
}
