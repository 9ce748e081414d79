//! String-based UI helpers for quick usage and rendering.

mod integration;

use crate::calculus::{
    IntegrationResult, differentiate as differentiate_expr, integrate as integrate_expr,
};
use crate::error::{CasError, Result};
use crate::expr::Expr;
use crate::mechanics::{Displacement, gov_eq, int_by_parts};
use crate::parser::parse_expr;
use crate::simplify::simplify_fully;

pub use crate::format::pretty;
pub use integration::integration_summary;

pub fn parse(input: &str) -> Result<Expr> {
    parse_expr(input)
}

pub fn differentiate(input: &str, var: &str) -> Result<Expr> {
    let expr = parse_expr(input)?;
    Ok(simplify_fully(differentiate_expr(var, &expr)))
}

pub fn diff(input: &str, var: &str) -> Result<String> {
    Ok(pretty(&differentiate(input, var)?))
}

pub fn integrate(input: &str, var: &str) -> Result<IntegrationResult> {
    let expr = parse_expr(input)?;
    Ok(integrate_expr(var, &expr))
}

pub fn inte(input: &str, var: &str) -> Result<String> {
    let result = integrate(input, var)?;
    Ok(integration_summary(&result))
}

pub fn simplify(input: &str) -> Result<Expr> {
    let expr = parse_expr(input)?;
    Ok(simplify_fully(expr))
}

pub fn simp(input: &str) -> Result<String> {
    Ok(pretty(&simplify(input)?))
}

/// One strain component (`xx`, `yy`, `zz`, `yz`, `xz` or `xy`) of the displacement `(u, v, w)`.
pub fn strain(component: &str, u: &str, v: &str, w: &str) -> Result<String> {
    let strains = displacement(u, v, w)?.strains();
    pick(component, strains.components())
}

/// One stress component of the displacement `(u, v, w)`, named as in [`strain`].
pub fn stress(component: &str, u: &str, v: &str, w: &str) -> Result<String> {
    let stresses = displacement(u, v, w)?.stresses();
    pick(component, stresses.components())
}

pub fn int_parts(u: &str, dv: &str) -> Result<String> {
    let result = int_by_parts(&parse_expr(u)?, &parse_expr(dv)?)?;
    Ok(pretty(&result))
}

/// Equation of motion for the Lagrangian density `lagrangian` under the load `q`.
pub fn eom(lagrangian: &str, q: &str) -> Result<String> {
    let result = gov_eq(&parse_expr(lagrangian)?, &parse_expr(q)?)?;
    Ok(pretty(&result))
}

fn displacement(u: &str, v: &str, w: &str) -> Result<Displacement> {
    Ok(Displacement::new(parse_expr(u)?, parse_expr(v)?, parse_expr(w)?))
}

fn pick(component: &str, components: [(&'static str, &Expr); 6]) -> Result<String> {
    components
        .into_iter()
        .find(|(name, _)| *name == component)
        .map(|(_, expr)| pretty(expr))
        .ok_or_else(|| CasError::Unsupported(format!("unknown component {component:?}")))
}
