use crate::calculus::IntegrationResult;
use crate::format::pretty;

/// Render an `IntegrationResult` into a single-line summary.
pub fn integration_summary(result: &IntegrationResult) -> String {
    match result {
        IntegrationResult::Integrated { result, .. } => pretty(result),
        IntegrationResult::NotIntegrable(report) => match &report.reason {
            Some(reason) => format!("no closed form ({reason:?})"),
            None => "no closed form".to_string(),
        },
    }
}
