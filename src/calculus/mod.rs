//! Calculus routines (differentiation and integration).

pub mod differentiate;
pub mod integrate;

pub use differentiate::{differentiate, differentiate_n, differentiate_wrt};
pub use integrate::{
    AttemptStatus, IntegrandKind, IntegrandReport, IntegrationAttempt, IntegrationResult,
    ReasonCode, Strategy, antiderivative, integrate, integrate_definite,
};
