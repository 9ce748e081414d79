mod classify;
mod common;
mod direct;
mod parts;
mod types;

use crate::error::{CasError, Result};
use crate::expr::{Expr, zero};
use crate::format::pretty;
use crate::simplify::{flatten_sum, simplify, simplify_add, simplify_mul, simplify_sub, substitute};

use classify::classify_integrand;
use common::split_constant_factors;

pub use common::is_polynomial;
pub use parts::TABULAR_STEP_LIMIT;
pub use types::{
    AttemptStatus, IntegrandKind, IntegrandReport, IntegrationAttempt, IntegrationResult,
    ReasonCode, Strategy,
};

/// Indefinite integral of `expr` with respect to `var`. The constant of integration is zero.
pub fn integrate(var: &str, expr: &Expr) -> IntegrationResult {
    let integrand = simplify(expr.clone());
    let kind = classify_integrand(&integrand, var);
    let mut integrator = Integrator::new(var);
    match integrator.integrate(&integrand) {
        Some(result) => IntegrationResult::Integrated {
            result,
            report: IntegrandReport {
                kind,
                reason: None,
                attempts: integrator
                    .attempts
                    .into_iter()
                    .filter(|a| a.status == AttemptStatus::Succeeded)
                    .collect(),
            },
        },
        None => {
            let reason = integrator
                .attempts
                .iter()
                .rev()
                .find_map(|a| match &a.status {
                    AttemptStatus::Failed(reason) => Some(reason.clone()),
                    _ => None,
                })
                .unwrap_or(ReasonCode::NoRule);
            IntegrationResult::NotIntegrable(IntegrandReport {
                kind,
                reason: Some(reason),
                attempts: integrator.attempts,
            })
        }
    }
}

/// Indefinite integral as a `Result`, failing with [`CasError::NotIntegrable`].
pub fn antiderivative(var: &str, expr: &Expr) -> Result<Expr> {
    integrate(var, expr)
        .into_expr()
        .ok_or_else(|| CasError::NotIntegrable(pretty(expr)))
}

/// Definite integral `F(upper) - F(lower)`. The bounds are not checked against the domain of `F`.
pub fn integrate_definite(var: &str, expr: &Expr, lower: &Expr, upper: &Expr) -> Result<Expr> {
    let primitive = antiderivative(var, expr)?;
    let at = |bound: &Expr| simplify(substitute(&primitive, var, bound));
    Ok(simplify_sub(at(upper), at(lower)))
}

struct Integrator<'a> {
    var: &'a str,
    attempts: Vec<IntegrationAttempt>,
}

impl<'a> Integrator<'a> {
    fn new(var: &'a str) -> Self {
        Integrator {
            var,
            attempts: Vec::new(),
        }
    }

    fn var_expr(&self) -> Expr {
        Expr::var(self.var)
    }

    fn record(&mut self, strategy: Strategy, status: AttemptStatus, note: Option<String>) {
        let attempt = IntegrationAttempt {
            strategy,
            status,
            note,
        };
        if !self.attempts.contains(&attempt) {
            self.attempts.push(attempt);
        }
    }

    /// Integrate a simplified expression, splitting sums and constant factors first.
    fn integrate(&mut self, expr: &Expr) -> Option<Expr> {
        if !expr.contains_var(self.var) {
            self.record(Strategy::Direct, AttemptStatus::Succeeded, None);
            return Some(simplify_mul(expr.clone(), self.var_expr()));
        }

        let terms = flatten_sum(expr);
        if terms.len() > 1 {
            let mut acc = zero();
            for term in &terms {
                acc = simplify_add(acc, self.integrate(term)?);
            }
            self.record(Strategy::Linearity, AttemptStatus::Succeeded, None);
            return Some(acc);
        }

        let (coeff, factors) = split_constant_factors(expr, self.var);
        let core = match factors.as_slice() {
            [single] => self.integrate_single(single),
            _ => self.integrate_product(&factors),
        }?;
        Some(simplify_mul(coeff, core))
    }
}

#[cfg(test)]
mod integrator_internal_tests {
    use super::*;
    use crate::parser::parse_expr;

    #[test]
    fn sums_record_linearity() {
        let expr = parse_expr("x + sin(x)").unwrap();
        let report = integrate("x", &expr).report().clone();
        assert_eq!(report.kind, IntegrandKind::Sum);
        assert!(
            report
                .attempts
                .iter()
                .any(|a| a.strategy == Strategy::Linearity)
        );
    }

    #[test]
    fn failure_reports_the_last_reason() {
        let expr = parse_expr("exp(x^2)").unwrap();
        match integrate("x", &expr) {
            IntegrationResult::NotIntegrable(report) => {
                assert_eq!(report.reason, Some(ReasonCode::NoRule));
                assert_eq!(report.kind, IntegrandKind::Exponential);
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
