use crate::expr::{Expr, Rational, one};
use crate::format::pretty;
use crate::simplify::{simplify_add, simplify_div, simplify_mul, simplify_neg, simplify_pow, simplify_sub};
use num_traits::One;

use super::common::linear_coefficient;
use super::{AttemptStatus, Integrator, ReasonCode, Strategy};

impl<'a> Integrator<'a> {
    /// Antiderivative of a single `var`-dependent factor.
    pub(super) fn integrate_single(&mut self, factor: &Expr) -> Option<Expr> {
        let result = match factor {
            Expr::Variable(_) => self.power(factor, &one()),
            Expr::Pow(base, exp) if !exp.contains_var(self.var) => self.power(base, exp),
            Expr::Sin(arg) => self.affine(arg, |a, inner| {
                simplify_neg(simplify_div(Expr::Cos(inner.boxed()), a))
            }),
            Expr::Cos(arg) => self.affine(arg, |a, inner| simplify_div(Expr::Sin(inner.boxed()), a)),
            Expr::Exp(arg) => self.affine(arg, |a, inner| simplify_div(Expr::Exp(inner.boxed()), a)),
            Expr::Log(arg) => self.log_affine(arg),
            Expr::Function { name, args, orders } => self.field(name, args, orders),
            _ => None,
        };
        if result.is_none() {
            self.record(
                Strategy::Direct,
                AttemptStatus::Failed(ReasonCode::NoRule),
                Some(pretty(factor)),
            );
        }
        result
    }

    /// `(a*var + b)^n`, with `n = -1` going to the logarithm.
    fn power(&mut self, base: &Expr, exp: &Expr) -> Option<Expr> {
        let a = linear_coefficient(base, self.var)?;
        self.note_affine(base);
        if matches!(exp, Expr::Constant(n) if *n == -Rational::one()) {
            return Some(simplify_div(Expr::Log(base.clone().boxed()), a));
        }
        let raised = simplify_add(exp.clone(), one());
        Some(simplify_div(
            simplify_pow(base.clone(), raised.clone()),
            simplify_mul(raised, a),
        ))
    }

    fn affine<F>(&mut self, arg: &Expr, antiderivative: F) -> Option<Expr>
    where
        F: Fn(Expr, Expr) -> Expr,
    {
        let a = linear_coefficient(arg, self.var)?;
        self.note_affine(arg);
        Some(antiderivative(a, arg.clone()))
    }

    /// `log(a*var + b)` integrates to `(a*var + b)/a * log(a*var + b) - var`.
    fn log_affine(&mut self, arg: &Expr) -> Option<Expr> {
        let a = linear_coefficient(arg, self.var)?;
        self.record(Strategy::IntegrationByParts, AttemptStatus::Succeeded, None);
        Some(simplify_sub(
            simplify_mul(
                simplify_div(arg.clone(), a),
                Expr::Log(arg.clone().boxed()),
            ),
            self.var_expr(),
        ))
    }

    /// Lower the derivative order of the slot that holds `var` itself.
    fn field(&mut self, name: &str, args: &[Expr], orders: &[u32]) -> Option<Expr> {
        let slot = args
            .iter()
            .position(|arg| arg.as_variable() == Some(self.var))?;
        let others_free = args
            .iter()
            .enumerate()
            .all(|(i, arg)| i == slot || !arg.contains_var(self.var));
        if orders[slot] == 0 || !others_free {
            return None;
        }
        let mut lowered = orders.to_vec();
        lowered[slot] -= 1;
        self.record(Strategy::Direct, AttemptStatus::Succeeded, None);
        Some(Expr::Function {
            name: name.to_string(),
            args: args.to_vec(),
            orders: lowered,
        })
    }

    fn note_affine(&mut self, inner: &Expr) {
        if inner.as_variable() == Some(self.var) {
            self.record(Strategy::Direct, AttemptStatus::Succeeded, None);
        } else {
            self.record(
                Strategy::Substitution,
                AttemptStatus::Succeeded,
                Some(format!("u={}", pretty(inner))),
            );
        }
    }
}
