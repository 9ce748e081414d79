use std::collections::{BTreeMap, HashMap};

use crate::expr::{Expr, Rational, one, zero};
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Largest product, in sum terms, that `simplify_mul` will distribute.
pub const DISTRIBUTE_TERM_LIMIT: usize = 64;
/// Largest integer exponent for which a power of a sum is expanded.
pub const EXPAND_POW_LIMIT: u32 = 8;
/// Largest integer exponent folded into a rational constant; bigger powers stay symbolic.
pub const FOLD_POW_LIMIT: u32 = 4096;

#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
struct CanonKey(Vec<Expr>);

pub fn simplify(expr: Expr) -> Expr {
    let mut cache = HashMap::new();
    simplify_cached(expr, &mut cache)
}

fn simplify_cached(expr: Expr, cache: &mut HashMap<Expr, Expr>) -> Expr {
    if let Some(hit) = cache.get(&expr) {
        return hit.clone();
    }

    let key = expr.clone();
    let result = match expr {
        Expr::Add(a, b) => simplify_add(simplify_cached(*a, cache), simplify_cached(*b, cache)),
        Expr::Sub(a, b) => simplify_sub(simplify_cached(*a, cache), simplify_cached(*b, cache)),
        Expr::Mul(a, b) => simplify_mul(simplify_cached(*a, cache), simplify_cached(*b, cache)),
        Expr::Div(a, b) => simplify_div(simplify_cached(*a, cache), simplify_cached(*b, cache)),
        Expr::Pow(a, b) => simplify_pow(simplify_cached(*a, cache), simplify_cached(*b, cache)),
        Expr::Neg(a) => simplify_neg(simplify_cached(*a, cache)),

        Expr::Sin(a) => match simplify_cached(*a, cache) {
            x if is_zero(&x) => zero(),
            x if has_negative_coeff(&x) => simplify_neg(Expr::Sin(simplify_neg(x).boxed())),
            x => Expr::Sin(x.boxed()),
        },

        Expr::Cos(a) => match simplify_cached(*a, cache) {
            x if is_zero(&x) => one(),
            x if has_negative_coeff(&x) => Expr::Cos(simplify_neg(x).boxed()),
            x => Expr::Cos(x.boxed()),
        },

        Expr::Exp(a) => match simplify_cached(*a, cache) {
            x if is_zero(&x) => one(),
            Expr::Log(inner) => *inner,
            x => Expr::Exp(x.boxed()),
        },

        Expr::Log(a) => match simplify_cached(*a, cache) {
            x if is_one(&x) => zero(),
            Expr::Exp(inner) => *inner,
            x => Expr::Log(x.boxed()),
        },

        Expr::Function { name, args, orders } => Expr::Function {
            name,
            args: args
                .into_iter()
                .map(|arg| simplify_cached(arg, cache))
                .collect(),
            orders,
        },

        e => e,
    };

    cache.insert(key, result.clone());
    result
}

/// Apply simplification passes until the expression stops changing or we hit the iteration cap.
pub fn simplify_fully(expr: Expr) -> Expr {
    simplify_with_limit(expr, 64)
}

/// Apply simplification passes up to `max_iters`, returning the last value if convergence is not reached.
pub fn simplify_with_limit(expr: Expr, max_iters: usize) -> Expr {
    let mut cache = HashMap::new();
    let mut current = expr;
    for _ in 0..max_iters {
        let next = simplify_cached(current.clone(), &mut cache);
        if next == current {
            return current;
        }
        current = next;
    }
    current
}

pub fn simplify_add(x: Expr, y: Expr) -> Expr {
    rebuild_sum(collect_sum(flatten_sum(&x).into_iter().chain(flatten_sum(&y))))
}

pub fn simplify_sub(x: Expr, y: Expr) -> Expr {
    simplify_add(x, simplify_neg(y))
}

/// Split a sum into its terms, pushing subtraction and negation into the terms.
pub(crate) fn flatten_sum(expr: &Expr) -> Vec<Expr> {
    match expr {
        Expr::Add(a, b) => {
            let mut out = flatten_sum(a);
            out.extend(flatten_sum(b));
            out
        }
        Expr::Sub(a, b) => {
            let mut out = flatten_sum(a);
            out.extend(flatten_sum(b).into_iter().map(simplify_neg));
            out
        }
        Expr::Neg(a) => flatten_sum(a).into_iter().map(simplify_neg).collect(),
        other => vec![other.clone()],
    }
}

fn count_sum_terms(expr: &Expr) -> usize {
    match expr {
        Expr::Add(a, b) | Expr::Sub(a, b) => count_sum_terms(a) + count_sum_terms(b),
        Expr::Neg(inner) => count_sum_terms(inner),
        _ => 1,
    }
}

/// Separate the rational coefficient of a term from its (sorted) symbolic factors.
pub(crate) fn split_coeff(expr: &Expr) -> (Rational, Expr) {
    match expr {
        Expr::Constant(c) => (c.clone(), one()),
        Expr::Neg(e) => {
            let (c, b) = split_coeff(e);
            (-c, b)
        }
        Expr::Mul(_, _) => {
            let mut coeff = Rational::one();
            let mut rest = Vec::new();
            for factor in flatten_mul(expr) {
                let (c, b) = split_coeff(&factor);
                coeff *= c;
                rest.extend(flatten_mul(&b));
            }
            rest.sort();
            (coeff, mul_from_sorted_factors(&rest))
        }
        other => (Rational::one(), other.clone()),
    }
}

pub(crate) fn mul_from_sorted_factors(factors: &[Expr]) -> Expr {
    let mut iter = factors.iter().cloned();
    match iter.next() {
        None => one(),
        Some(first) => iter.fold(first, |acc, item| Expr::Mul(acc.boxed(), item.boxed())),
    }
}

fn collect_sum<I>(terms: I) -> HashMap<CanonKey, Rational>
where
    I: IntoIterator<Item = Expr>,
{
    let mut map = HashMap::new();
    for term in terms {
        let (c, b) = split_coeff(&term);
        if c.is_zero() {
            continue;
        }
        map.entry(CanonKey(flatten_mul(&b)))
            .and_modify(|acc| *acc += &c)
            .or_insert(c);
    }
    map
}

/// Split a product into its factors, dropping literal ones.
pub(crate) fn flatten_mul(expr: &Expr) -> Vec<Expr> {
    match expr {
        Expr::Mul(a, b) => {
            let mut out = flatten_mul(a);
            out.extend(flatten_mul(b));
            out
        }
        t if is_one(t) => vec![],
        t => vec![t.clone()],
    }
}

fn rebuild_sum(mut map: HashMap<CanonKey, Rational>) -> Expr {
    let const_term = map
        .remove(&CanonKey(Vec::new()))
        .unwrap_or_else(Rational::zero);
    let mut items: Vec<(CanonKey, Rational)> = map.into_iter().collect();
    items.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut terms: Vec<Expr> = items
        .into_iter()
        .filter_map(|(CanonKey(factors), coef)| {
            if coef.is_zero() {
                None
            } else {
                Some(term_from(&coef, mul_from_sorted_factors(&factors)))
            }
        })
        .collect();

    if !const_term.is_zero() {
        terms.push(Expr::Constant(const_term));
    }

    mk_add_list(terms)
}

fn term_from(coef: &Rational, base: Expr) -> Expr {
    if coef.is_zero() {
        return zero();
    }

    if is_one(&base) {
        return Expr::Constant(coef.clone());
    }

    if coef.is_one() {
        return base;
    }

    if coef == &-Rational::one() {
        return Expr::Neg(base.boxed());
    }

    Expr::Mul(Expr::Constant(coef.clone()).boxed(), base.boxed())
}

pub fn simplify_mul(x: Expr, y: Expr) -> Expr {
    match (x, y) {
        (Expr::Constant(xc), Expr::Constant(yc)) => Expr::Constant(xc * yc),
        (x, _) if is_zero(&x) => zero(),
        (_, y) if is_zero(&y) => zero(),
        (x, y) if is_one(&x) => y,
        (x, y) if is_one(&y) => x,
        (x, y) if is_sum(&x) || is_sum(&y) => {
            let term_count = count_sum_terms(&x) * count_sum_terms(&y);
            if term_count <= DISTRIBUTE_TERM_LIMIT {
                distribute(&x, &y)
            } else {
                collect_product(&[x, y])
            }
        }
        (x, y) => collect_product(&[x, y]),
    }
}

fn is_sum(expr: &Expr) -> bool {
    matches!(expr, Expr::Add(_, _) | Expr::Sub(_, _))
}

fn distribute(x: &Expr, y: &Expr) -> Expr {
    let mut terms = Vec::new();
    for a in flatten_sum(x) {
        for b in flatten_sum(y) {
            terms.push(simplify_mul(a.clone(), b));
        }
    }
    rebuild_sum(collect_sum(terms))
}

/// Multiply factors together, folding constants and merging powers of equal bases.
fn collect_product(items: &[Expr]) -> Expr {
    let mut coeff = Rational::one();
    let mut exponents: BTreeMap<Expr, Rational> = BTreeMap::new();
    let mut opaque = Vec::new();

    for item in items {
        let (c, core) = split_coeff(item);
        coeff *= c;
        for factor in flatten_mul(&core) {
            match factor {
                Expr::Pow(base, exp) => match *exp {
                    Expr::Constant(e) => add_exponent(&mut exponents, *base, e),
                    exp => opaque.push(Expr::Pow(base, exp.boxed())),
                },
                other => add_exponent(&mut exponents, other, Rational::one()),
            }
        }
    }

    if coeff.is_zero() {
        return zero();
    }

    let mut factors = opaque;
    for (base, exp) in exponents {
        if exp.is_zero() {
            continue;
        }
        let factor = if exp.is_one() {
            base
        } else {
            simplify_pow(base, Expr::Constant(exp))
        };
        match factor {
            Expr::Constant(c) => coeff *= c,
            other => {
                let (c, core) = split_coeff(&other);
                coeff *= c;
                factors.extend(flatten_mul(&core));
            }
        }
    }

    factors.sort();
    term_from(&coeff, mul_from_sorted_factors(&factors))
}

fn add_exponent(exponents: &mut BTreeMap<Expr, Rational>, base: Expr, exp: Rational) {
    exponents
        .entry(base)
        .and_modify(|acc| *acc += &exp)
        .or_insert(exp);
}

pub fn simplify_div(x: Expr, y: Expr) -> Expr {
    match (x, y) {
        (Expr::Constant(n), Expr::Constant(d)) => {
            if d.is_zero() {
                Expr::Div(Expr::Constant(n).boxed(), Expr::Constant(d).boxed())
            } else {
                Expr::Constant(n / d)
            }
        }
        (x, _) if is_zero(&x) => zero(),
        (x, y) if is_one(&y) => x,
        (x, Expr::Constant(d)) => {
            if d.is_zero() {
                Expr::Div(x.boxed(), Expr::Constant(d).boxed())
            } else {
                simplify_mul(Expr::Constant(d.recip()), x)
            }
        }
        (x, y) => {
            let (cx, bx) = split_coeff(&x);
            let (cy, by) = split_coeff(&y);
            if bx == by && !cy.is_zero() {
                Expr::Constant(cx / cy)
            } else {
                simplify_mul(x, simplify_pow(y, Expr::Constant(-Rational::one())))
            }
        }
    }
}

pub fn simplify_pow(x: Expr, y: Expr) -> Expr {
    match (x, y) {
        (_, Expr::Constant(e)) if e.is_zero() => one(),
        (base, Expr::Constant(e)) if e.is_one() => base,
        (Expr::Constant(b), Expr::Constant(e)) => pow_constant(b, e),
        (base, Expr::Constant(_)) if is_one(&base) => one(),
        (base, Expr::Constant(e)) if is_zero(&base) && e.is_positive() => zero(),
        (Expr::Pow(inner, inner_exp), Expr::Constant(e)) if e.is_integer() => match *inner_exp {
            Expr::Constant(k) => simplify_pow(*inner, Expr::Constant(k * e)),
            other => Expr::Pow(Expr::Pow(inner, other.boxed()).boxed(), Expr::Constant(e).boxed()),
        },
        (base, Expr::Constant(e)) if e.is_integer() && is_sum(&base) => {
            expand_sum_power(base, e)
        }
        (base @ (Expr::Mul(_, _) | Expr::Neg(_)), Expr::Constant(e)) if e.is_integer() => {
            let (c, core) = split_coeff(&base);
            let mut factors = vec![pow_constant(c, e.clone())];
            factors.extend(
                flatten_mul(&core)
                    .into_iter()
                    .map(|f| simplify_pow(f, Expr::Constant(e.clone()))),
            );
            collect_product(&factors)
        }
        (x, y) => Expr::Pow(x.boxed(), y.boxed()),
    }
}

fn pow_constant(b: Rational, e: Rational) -> Expr {
    if e.is_integer() {
        let k: BigInt = e.to_integer();
        let trivial_base = b.is_zero() || b.abs().is_one();
        if let Some(power) = k.abs().to_u32().filter(|p| trivial_base || *p <= FOLD_POW_LIMIT) {
            if !k.is_negative() {
                let num = b.numer().pow(power);
                let den = b.denom().pow(power);
                return Expr::Constant(Rational::new(num, den));
            } else if !b.is_zero() {
                let num = b.denom().pow(power);
                let den = b.numer().pow(power);
                return Expr::Constant(Rational::new(num, den));
            }
        }
    }
    Expr::Pow(Expr::Constant(b).boxed(), Expr::Constant(e).boxed())
}

fn expand_sum_power(base: Expr, e: Rational) -> Expr {
    let small = e
        .to_integer()
        .to_u32()
        .filter(|k| *k <= EXPAND_POW_LIMIT)
        .filter(|k| {
            count_sum_terms(&base)
                .checked_pow(*k)
                .is_some_and(|n| n <= DISTRIBUTE_TERM_LIMIT)
        });
    match small {
        Some(k) => (1..k).fold(base.clone(), |acc, _| simplify_mul(acc, base.clone())),
        None => Expr::Pow(base.boxed(), Expr::Constant(e).boxed()),
    }
}

pub fn simplify_neg(expr: Expr) -> Expr {
    match expr {
        Expr::Constant(x) => Expr::Constant(-x),
        Expr::Neg(x) => *x,
        other => simplify_mul(Expr::Constant(-Rational::one()), other),
    }
}

/// `-x`, `-2*x` and negative constants, but not sums.
fn has_negative_coeff(expr: &Expr) -> bool {
    split_coeff(expr).0.is_negative()
}

fn is_zero(expr: &Expr) -> bool {
    matches!(expr, Expr::Constant(r) if r.is_zero())
}

fn is_one(expr: &Expr) -> bool {
    matches!(expr, Expr::Constant(r) if r.is_one())
}

fn mk_add_list(items: Vec<Expr>) -> Expr {
    let mut iter = items.into_iter();
    match iter.next() {
        None => zero(),
        Some(first) => iter.fold(first, |acc, item| Expr::Add(acc.boxed(), item.boxed())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_expr;

    fn simp(input: &str) -> Expr {
        simplify(parse_expr(input).expect("parse"))
    }

    #[test]
    fn split_coeff_pulls_constants_out_of_nested_products() {
        let (c, core) = split_coeff(&parse_expr("2*(x*-3)*y").unwrap());
        assert_eq!(c, Rational::from_integer((-6).into()));
        assert_eq!(core, Expr::Mul(Expr::var("x").boxed(), Expr::var("y").boxed()));
    }

    #[test]
    fn like_bases_merge_into_powers() {
        assert_eq!(simp("x*x"), simp("x^2"));
        assert_eq!(simp("x^2*x^-2"), one());
    }

    #[test]
    fn huge_constant_powers_stay_symbolic() {
        assert_eq!(
            simp("2^4000000000"),
            Expr::Pow(Expr::integer(2).boxed(), Expr::integer(4000000000_i64).boxed())
        );
        assert_eq!(simp("1^4000000000"), one());
        assert_eq!(simp("(-1)^4000000001"), Expr::integer(-1));
        assert_eq!(simp("2^10"), Expr::integer(1024));
    }

    #[test]
    fn large_sum_products_stay_factored() {
        let wide = (0..10)
            .map(|i| format!("a{i}"))
            .collect::<Vec<_>>()
            .join(" + ");
        let expr = simp(&format!("({wide})*({wide})"));
        assert!(flatten_sum(&expr).len() == 1, "got {expr}");
    }
}
