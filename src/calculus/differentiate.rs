use crate::error::{CasError, Result};
use crate::expr::{Expr, Rational, one, zero};
use crate::format::pretty;
use crate::simplify::{simplify_add, simplify_div, simplify_mul, simplify_neg, simplify_pow, simplify_sub};
use num_traits::One;

/// Partial derivative of `expr` with respect to the symbol `var`.
pub fn differentiate(var: &str, expr: &Expr) -> Expr {
    Differentiator {
        target: Target::Var(var),
    }
    .derive(expr)
}

/// The `n`-th partial derivative of `expr` with respect to `var`.
pub fn differentiate_n(var: &str, expr: &Expr, n: usize) -> Expr {
    (0..n).fold(expr.clone(), |acc, _| differentiate(var, &acc))
}

/// Partial derivative with respect to a symbol or a function node.
///
/// A function node such as `w(x, t)` or one of its derivatives is treated as an
/// independent variable: it differentiates to one against itself and symbols
/// differentiate to zero. Other function nodes go through the chain rule, so
/// `V(w(x, t))` against `w(x, t)` gives `V^(1)(w(x, t))`.
pub fn differentiate_wrt(wrt: &Expr, expr: &Expr) -> Result<Expr> {
    let target = match wrt {
        Expr::Variable(name) => Target::Var(name),
        Expr::Function { .. } => Target::Node(wrt),
        other => {
            return Err(CasError::Unsupported(format!(
                "differentiation with respect to {}",
                pretty(other)
            )));
        }
    };
    Ok(Differentiator { target }.derive(expr))
}

#[derive(Clone, Copy)]
enum Target<'a> {
    Var(&'a str),
    Node(&'a Expr),
}

struct Differentiator<'a> {
    target: Target<'a>,
}

impl<'a> Differentiator<'a> {
    fn derive(&self, expr: &Expr) -> Expr {
        match expr {
            Expr::Variable(name) => match self.target {
                Target::Var(var) if name == var => one(),
                _ => zero(),
            },
            Expr::Constant(_) => zero(),

            Expr::Add(a, b) => simplify_add(self.derive(a), self.derive(b)),
            Expr::Sub(a, b) => simplify_sub(self.derive(a), self.derive(b)),
            Expr::Mul(a, b) => self.product_rule(a, b),
            Expr::Div(a, b) => self.quotient_rule(a, b),
            Expr::Pow(a, b) => self.power_rule(a, b),
            Expr::Neg(a) => simplify_neg(self.derive(a)),

            Expr::Sin(a) => self.chain_rule(a, |inner| Expr::Cos(inner.boxed())),
            Expr::Cos(a) => simplify_neg(self.chain_rule(a, |inner| Expr::Sin(inner.boxed()))),
            Expr::Exp(a) => self.chain_rule(a, |inner| Expr::Exp(inner.boxed())),
            Expr::Log(a) => simplify_div(self.derive(a), (**a).clone()),

            Expr::Function { name, args, orders } => match self.target {
                Target::Node(node) if node == expr => one(),
                _ => self.function_rule(name, args, orders),
            },
        }
    }

    fn product_rule(&self, a: &Expr, b: &Expr) -> Expr {
        let da = self.derive(a);
        let db = self.derive(b);
        simplify_add(
            simplify_mul(da, b.clone()),
            simplify_mul(a.clone(), db),
        )
    }

    fn quotient_rule(&self, a: &Expr, b: &Expr) -> Expr {
        simplify_div(
            simplify_sub(
                simplify_mul(self.derive(a), b.clone()),
                simplify_mul(a.clone(), self.derive(b)),
            ),
            simplify_pow(b.clone(), Expr::integer(2)),
        )
    }

    fn power_rule(&self, base: &Expr, exp: &Expr) -> Expr {
        let db = self.derive(exp);
        if db.is_zero() {
            let lowered = match exp {
                Expr::Constant(n) => Expr::Constant(n - Rational::one()),
                other => simplify_sub(other.clone(), one()),
            };
            let outer = simplify_mul(exp.clone(), simplify_pow(base.clone(), lowered));
            return simplify_mul(outer, self.derive(base));
        }

        let f = simplify_pow(base.clone(), exp.clone());
        let da = self.derive(base);
        simplify_mul(
            f,
            simplify_add(
                simplify_mul(db, Expr::Log(base.clone().boxed())),
                simplify_div(simplify_mul(exp.clone(), da), base.clone()),
            ),
        )
    }

    fn chain_rule<F>(&self, arg: &Expr, outer: F) -> Expr
    where
        F: Fn(Expr) -> Expr,
    {
        simplify_mul(self.derive(arg), outer(arg.clone()))
    }

    /// Multivariate chain rule: sum over argument slots of `d(arg_i) * f_(i)(args)`.
    fn function_rule(&self, name: &str, args: &[Expr], orders: &[u32]) -> Expr {
        args.iter()
            .enumerate()
            .fold(zero(), |acc, (slot, arg)| {
                let d_arg = self.derive(arg);
                if d_arg.is_zero() {
                    return acc;
                }
                let mut raised = orders.to_vec();
                raised[slot] += 1;
                let partial = Expr::Function {
                    name: name.to_string(),
                    args: args.to_vec(),
                    orders: raised,
                };
                simplify_add(acc, simplify_mul(d_arg, partial))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_expr;

    #[test]
    fn slot_orders_accumulate_per_argument() {
        let w = parse_expr("w(x, t)").unwrap();
        let w_xt = differentiate("t", &differentiate("x", &w));
        let w_tx = differentiate("x", &differentiate("t", &w));
        assert_eq!(w_xt, w_tx);
        match w_xt {
            Expr::Function { orders, .. } => assert_eq!(orders, vec![1, 1]),
            other => panic!("expected function node, got {other:?}"),
        }
    }

    #[test]
    fn composite_arguments_use_chain_rule() {
        let f = parse_expr("f(2*x)").unwrap();
        let df = differentiate("x", &f);
        let expected = Expr::Mul(
            Expr::integer(2).boxed(),
            Expr::Function {
                name: "f".into(),
                args: vec![Expr::Mul(Expr::integer(2).boxed(), Expr::var("x").boxed())],
                orders: vec![1],
            }
            .boxed(),
        );
        assert_eq!(df, expected);
    }
}
