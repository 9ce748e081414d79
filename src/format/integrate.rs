use crate::calculus::integrate::{AttemptStatus, IntegrationAttempt, IntegrationResult};
use crate::format::expr::pretty;

/// Render an `IntegrationResult` into human-friendly lines.
pub fn pretty_integration_result(result: &IntegrationResult) -> Vec<String> {
    let mut lines = Vec::new();
    match result {
        IntegrationResult::Integrated { result, report } => {
            lines.push(format!("integrated: {}", pretty(result)));
            lines.push(format!("kind: {:?}", report.kind));
            lines.extend(report.attempts.iter().map(describe_attempt));
        }
        IntegrationResult::NotIntegrable(report) => {
            lines.push("not integrable".to_string());
            lines.push(format!("kind: {:?}", report.kind));
            if let Some(reason) = &report.reason {
                lines.push(format!("reason: {:?}", reason));
            }
            lines.extend(report.attempts.iter().map(describe_attempt));
        }
    }
    lines
}

fn describe_attempt(attempt: &IntegrationAttempt) -> String {
    let status = match &attempt.status {
        AttemptStatus::Succeeded => "ok".to_string(),
        AttemptStatus::NotApplicable => "n/a".to_string(),
        AttemptStatus::Failed(reason) => format!("failed {:?}", reason),
    };
    match &attempt.note {
        Some(note) => format!(" - {:?}: {status} ({note})", attempt.strategy),
        None => format!(" - {:?}: {status}", attempt.strategy),
    }
}
