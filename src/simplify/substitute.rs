use crate::expr::Expr;

/// Substitute variable `var` with `replacement` throughout `expr`, including function arguments.
pub fn substitute(expr: &Expr, var: &str, replacement: &Expr) -> Expr {
    substitute_expr(expr, &Expr::var(var), replacement)
}

/// Replace every occurrence of the subtree `target` with `replacement`.
///
/// Function nodes are matched whole, so replacing `w(x, t)` leaves its derivatives untouched.
pub fn substitute_expr(expr: &Expr, target: &Expr, replacement: &Expr) -> Expr {
    if expr == target {
        return replacement.clone();
    }
    let sub = |e: &Expr| substitute_expr(e, target, replacement).boxed();
    match expr {
        Expr::Add(a, b) => Expr::Add(sub(a), sub(b)),
        Expr::Sub(a, b) => Expr::Sub(sub(a), sub(b)),
        Expr::Mul(a, b) => Expr::Mul(sub(a), sub(b)),
        Expr::Div(a, b) => Expr::Div(sub(a), sub(b)),
        Expr::Pow(a, b) => Expr::Pow(sub(a), sub(b)),
        Expr::Neg(a) => Expr::Neg(sub(a)),
        Expr::Sin(a) => Expr::Sin(sub(a)),
        Expr::Cos(a) => Expr::Cos(sub(a)),
        Expr::Exp(a) => Expr::Exp(sub(a)),
        Expr::Log(a) => Expr::Log(sub(a)),
        Expr::Function { name, args, orders } => Expr::Function {
            name: name.clone(),
            args: args
                .iter()
                .map(|arg| substitute_expr(arg, target, replacement))
                .collect(),
            orders: orders.clone(),
        },
        _ => expr.clone(),
    }
}
