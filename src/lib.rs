//! Symbolic algebra for continuum-mechanics derivations: linear-elastic strain and stress,
//! integration by parts over a member, and Euler-Lagrange equations of motion, on top of a
//! small exact-arithmetic expression engine.

pub mod calculus;
pub mod error;
pub mod expr;
pub mod format;
pub mod mechanics;
pub mod parser;
pub mod prelude;
pub mod simplify;
pub mod symbols;
pub mod ui;

pub use calculus::{
    AttemptStatus, IntegrandKind, IntegrandReport, IntegrationAttempt, IntegrationResult,
    ReasonCode, Strategy, antiderivative, differentiate, differentiate_n, differentiate_wrt,
    integrate, integrate_definite,
};
pub use error::{CasError, Result};
pub use expr::{Expr, Rational, add, div, mul, neg, one, pow, rational, sub, zero};
pub use format::{pretty, pretty_integration_result};
pub use mechanics::{
    Displacement, StrainState, StressState, gov_eq, int_by_parts, strain_x, strain_xy, strain_xz,
    strain_y, strain_yz, strain_z, stress_x, stress_xy, stress_xz, stress_y, stress_yz, stress_z,
};
pub use parser::parse_expr;
pub use simplify::{simplify, simplify_fully, simplify_with_limit, substitute};
