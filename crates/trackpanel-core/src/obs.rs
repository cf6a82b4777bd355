//! Structured observability hooks for the report pipeline.
//!
//! This module provides:
//! - Report-scoped tracing spans via the `ReportSpan` RAII guard
//! - Emission functions for the pipeline's lifecycle events: normalization
//!   finished, report generated, narrative skipped
//!
//! Events are emitted at `info!` level; see `telemetry::init_tracing` for
//! subscriber setup and `RUST_LOG` filtering.

use tracing::{info, warn};

use crate::domain::report::ReleaseDecisionReport;
use crate::normalize::NormalizeSummary;

/// RAII guard that enters a report-scoped tracing span.
///
/// # Example
///
/// ```ignore
/// let _span = ReportSpan::enter("track-9f2");
/// // tracing calls are now associated with track_id = "track-9f2"
/// ```
pub struct ReportSpan {
    _span: tracing::span::EnteredSpan,
}

impl ReportSpan {
    /// Create and enter a span tagged with the track id.
    pub fn enter(track_id: &str) -> Self {
        let span = tracing::info_span!("trackpanel.report", track_id = %track_id);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: normalization finished with drop accounting.
pub fn emit_reviews_normalized(summary: &NormalizeSummary) {
    info!(
        event = "normalize.finished",
        submitted = summary.submitted,
        kept = summary.kept,
        dropped_records = summary.dropped_records,
        dropped_fixes = summary.dropped_fixes,
    );
}

/// Emit event: report generated with consensus and panel size.
pub fn emit_report_generated(report: &ReleaseDecisionReport) {
    info!(
        event = "report.generated",
        report_id = %report.report_id,
        review_count = report.review_count,
        consensus = report.verdict.consensus.as_str(),
        confidence = report.verdict.confidence.as_str(),
        top_fixes = report.top_fixes.len(),
    );
}

/// Emit event: narrative collaborator failed and was skipped (warning level).
pub fn emit_narrative_skipped(report_id: &str, error: &dyn std::fmt::Display) {
    warn!(event = "narrative.skipped", report_id = %report_id, error = %error);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_span_create() {
        // Just ensure ReportSpan::enter doesn't panic
        let _span = ReportSpan::enter("test-track-id");
    }
}
