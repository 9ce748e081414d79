//! Symbolic simplification and substitution utilities.

mod rules;
mod substitute;

pub(crate) use rules::{flatten_mul, flatten_sum, mul_from_sorted_factors, split_coeff};
pub use rules::{
    DISTRIBUTE_TERM_LIMIT, EXPAND_POW_LIMIT, FOLD_POW_LIMIT, simplify, simplify_add, simplify_div, simplify_fully,
    simplify_mul, simplify_neg, simplify_pow, simplify_sub, simplify_with_limit,
};
pub use substitute::{substitute, substitute_expr};
