use crate::expr::Expr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrandKind {
    Constant,
    Polynomial,
    Trig,
    Exponential,
    Logarithmic,
    /// A derivative of an undefined function such as `w(x, t)`.
    Field,
    Product(Box<IntegrandKind>, Box<IntegrandKind>),
    Sum,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReasonCode {
    NoRule,
    NonPolynomialFactor,
    StepLimit(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strategy {
    Direct,
    Linearity,
    Substitution,
    IntegrationByParts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptStatus {
    Succeeded,
    NotApplicable,
    Failed(ReasonCode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationAttempt {
    pub strategy: Strategy,
    pub status: AttemptStatus,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrandReport {
    pub kind: IntegrandKind,
    pub reason: Option<ReasonCode>,
    pub attempts: Vec<IntegrationAttempt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrationResult {
    Integrated {
        result: Expr,
        report: IntegrandReport,
    },
    NotIntegrable(IntegrandReport),
}

impl IntegrationResult {
    pub fn result(&self) -> Option<&Expr> {
        match self {
            IntegrationResult::Integrated { result, .. } => Some(result),
            IntegrationResult::NotIntegrable(_) => None,
        }
    }

    pub fn report(&self) -> &IntegrandReport {
        match self {
            IntegrationResult::Integrated { report, .. } => report,
            IntegrationResult::NotIntegrable(report) => report,
        }
    }

    pub fn into_expr(self) -> Option<Expr> {
        match self {
            IntegrationResult::Integrated { result, .. } => Some(result),
            IntegrationResult::NotIntegrable(_) => None,
        }
    }
}
