use crate::expr::Expr;
use num_rational::BigRational;
use num_traits::Signed;

pub fn pretty(expr: &Expr) -> String {
    fn pp(ctx: u8, expr: &Expr) -> String {
        match expr {
            Expr::Variable(v) => v.clone(),
            Expr::Constant(r) => {
                let body = show_rational(r);
                if r.is_negative() || !r.is_integer() {
                    bracket(ctx, 2, body)
                } else {
                    body
                }
            }

            Expr::Add(a, b) => {
                let s_a = pp(1, a);
                let (neg_b, b_inner) = split_neg(b);
                let s_b = pp(2, &b_inner);
                let body = format!("{s_a} {} {s_b}", if neg_b { "-" } else { "+" });
                bracket(ctx, 1, body)
            }

            Expr::Sub(a, b) => {
                let s_a = pp(1, a);
                let (neg_b, b_inner) = split_neg(b);
                let s_b = pp(2, &b_inner);
                let body = format!("{s_a} {} {s_b}", if neg_b { "+" } else { "-" });
                bracket(ctx, 1, body)
            }

            Expr::Mul(a, b) => {
                let (na, a_inner) = split_neg(a);
                let (nb, b_inner) = split_neg(b);
                // a*(b*c) reads the same as a*b*c
                let rhs_ctx = if matches!(b_inner, Expr::Mul(_, _)) { 2 } else { 3 };
                let body = format!("{}*{}", pp(2, &a_inner), pp(rhs_ctx, &b_inner));
                if na ^ nb {
                    bracket(ctx, 2, format!("-{body}"))
                } else {
                    bracket(ctx, 2, body)
                }
            }

            Expr::Div(a, b) => {
                let (na, a_inner) = split_neg(a);
                let (nb, b_inner) = split_neg(b);
                let body = format!("{}/{}", pp(2, &a_inner), pp(3, &b_inner));
                if na ^ nb {
                    bracket(ctx, 2, format!("-{body}"))
                } else {
                    bracket(ctx, 2, body)
                }
            }

            Expr::Pow(a, b) => bracket(ctx, 3, format!("{}^{}", pp(4, a), pp(3, b))),

            Expr::Neg(a) => {
                let (is_neg, inner) = split_neg(a);
                if is_neg {
                    pp(ctx, &inner)
                } else {
                    bracket(ctx, 2, format!("-{}", pp(2, &inner)))
                }
            }

            Expr::Sin(a) => format!("sin({})", pp(0, a)),
            Expr::Cos(a) => format!("cos({})", pp(0, a)),
            Expr::Exp(a) => format!("exp({})", pp(0, a)),
            Expr::Log(a) => format!("log({})", pp(0, a)),

            Expr::Function { name, args, orders } => {
                let arg_list = args.iter().map(|a| pp(0, a)).collect::<Vec<_>>().join(", ");
                if orders.iter().all(|o| *o == 0) {
                    format!("{name}({arg_list})")
                } else if let Some(vars) = derivative_vars(args, orders) {
                    format!("diff({name}({arg_list}), {})", vars.join(", "))
                } else {
                    let orders = orders
                        .iter()
                        .map(|o| o.to_string())
                        .collect::<Vec<_>>()
                        .join(",");
                    format!("{name}^({orders})({arg_list})")
                }
            }
        }
    }

    pp(0, expr)
}

/// Differentiation variables in slot order, when every differentiated slot holds a distinct symbol.
fn derivative_vars<'a>(args: &'a [Expr], orders: &[u32]) -> Option<Vec<&'a str>> {
    let mut vars = Vec::new();
    for (slot, (arg, order)) in args.iter().zip(orders).enumerate() {
        if *order == 0 {
            continue;
        }
        let name = arg.as_variable()?;
        if args[..slot].iter().any(|other| other == arg) {
            return None;
        }
        vars.extend(std::iter::repeat_n(name, *order as usize));
    }
    Some(vars)
}

fn split_neg(expr: &Expr) -> (bool, Expr) {
    match expr {
        Expr::Neg(inner) => (true, *inner.clone()),
        Expr::Constant(r) if r.is_negative() => (true, Expr::Constant(-r)),
        other => (false, other.clone()),
    }
}

fn bracket(ctx: u8, prec: u8, body: String) -> String {
    if prec < ctx {
        format!("({body})")
    } else {
        body
    }
}

fn show_rational(r: &BigRational) -> String {
    let n = r.numer().clone();
    let d = r.denom().clone();
    if d == 1.into() {
        format!("{n}")
    } else if n < 0.into() {
        format!("-{}/{}", -n, d)
    } else {
        format!("{}/{}", n, d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_expr;

    #[test]
    fn derivatives_print_in_diff_form() {
        let expr = parse_expr("diff(w(x, t), x, x, t)").unwrap();
        assert_eq!(pretty(&expr), "diff(w(x, t), x, x, t)");
    }

    #[test]
    fn evaluated_derivatives_print_slot_orders() {
        let expr = Expr::Function {
            name: "w".into(),
            args: vec![Expr::var("L"), Expr::var("t")],
            orders: vec![1, 0],
        };
        assert_eq!(pretty(&expr), "diff(w(L, t), L)");
        let at_zero = Expr::Function {
            name: "w".into(),
            args: vec![Expr::integer(0), Expr::var("t")],
            orders: vec![1, 0],
        };
        assert_eq!(pretty(&at_zero), "w^(1,0)(0, t)");
    }

    #[test]
    fn coefficient_products_print_flat() {
        let expr = Expr::Mul(
            Expr::integer(2).boxed(),
            Expr::Mul(Expr::var("L").boxed(), Expr::Sin(Expr::var("L").boxed()).boxed()).boxed(),
        );
        assert_eq!(pretty(&expr), "2*L*sin(L)");
        let quotient = parse_expr("a*(b/c)").unwrap();
        assert_eq!(pretty(&quotient), "a*(b/c)");
    }

    #[test]
    fn negative_products_hoist_the_sign() {
        let expr = parse_expr("-2*x + y").unwrap();
        assert_eq!(pretty(&expr), "-2*x + y");
    }
}
