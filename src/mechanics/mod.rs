//! Continuum-mechanics derivations built on the symbolic engine: linear-elastic strain and
//! stress, integration by parts over `[0, L]`, and Euler-Lagrange equations of motion.

mod motion;
mod parts;
mod state;
mod strain;
mod stress;

pub use motion::gov_eq;
pub use parts::int_by_parts;
pub use state::{Displacement, StrainState, StressState};
pub use strain::{strain_x, strain_xy, strain_xz, strain_y, strain_yz, strain_z};
pub use stress::{stress_x, stress_xy, stress_xz, stress_y, stress_yz, stress_z};
