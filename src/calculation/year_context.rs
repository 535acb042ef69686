//! Year context resolution.
//!
//! Picks the one-line economic summary shown alongside a result.

use crate::config::ReferenceData;
use crate::models::{AuditStep, ExternalEstimate};

/// Shown when neither the estimate nor the reference tables describe the year.
pub const GENERIC_YEAR_CONTEXT: &str =
    "Historical economic data for this period is being approximated.";

/// The resolved year context and the audit step recording where it came from.
#[derive(Debug, Clone)]
pub struct YearContextResult {
    /// The context text; never empty.
    pub context: String,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

fn non_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Resolves the context text for `year`.
///
/// Precedence: the estimate's context, then the reference table, then
/// [`GENERIC_YEAR_CONTEXT`]. Blank strings count as missing.
pub fn resolve_year_context(
    year: i32,
    estimate: Option<&ExternalEstimate>,
    reference: &ReferenceData,
    step_number: u32,
) -> YearContextResult {
    let from_estimate = estimate
        .and_then(|e| e.year_context.as_deref())
        .and_then(non_blank);

    let (context, source) = match from_estimate {
        Some(text) => (text, "external_estimate"),
        None => match reference.year_context(year).and_then(non_blank) {
            Some(text) => (text, "static_table"),
            None => (GENERIC_YEAR_CONTEXT, "generic"),
        },
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "year_context".to_string(),
        rule_name: "Year Context".to_string(),
        input: serde_json::json!({ "year": year }),
        output: serde_json::json!({ "source": source }),
        reasoning: format!("Context for {} taken from {}", year, source),
    };

    YearContextResult {
        context: context.to_string(),
        audit_step,
    }
}
