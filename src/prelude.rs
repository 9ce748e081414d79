//! String-based convenience API for quick experimentation.

pub use crate::ui::{
    diff, differentiate, eom, int_parts, inte, integrate, parse, pretty, simp, simplify, strain,
    stress,
};
