//! Formatting helpers for rendering expressions and integration reports.

pub mod expr;
pub mod integrate;

pub use expr::pretty;
pub use integrate::pretty_integration_result;
