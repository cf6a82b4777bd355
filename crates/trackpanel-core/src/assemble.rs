//! Report assembly.
//!
//! Orchestrates normalization, verdict aggregation, score statistics, fix
//! clustering, and evidence collection, then stamps report metadata. Each
//! stage consumes only the previous stage's output — nothing reaches back
//! into the raw input once normalization has run. The assembler performs no
//! I/O and never calls the narrative collaborator; prose generation happens
//! entirely downstream of the returned report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cluster::{cluster_fixes, select_top_fixes, ClusterConfig};
use crate::domain::error::{ReportError, Result};
use crate::domain::report::ReleaseDecisionReport;
use crate::domain::review::RawReview;
use crate::evidence::{collect_evidence, EvidenceConfig};
use crate::normalize::normalize_reviews;
use crate::obs;
use crate::stats::score_statistics;
use crate::verdict::aggregate_verdicts;

/// Configuration for one report run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub clustering: ClusterConfig,
    pub evidence: EvidenceConfig,
}

/// Generate a release decision report with default configuration.
///
/// # Errors
///
/// `ReportError::InsufficientReviews` when zero valid records survive
/// normalization. A panel whose reviews carry no fix mentions is *not* an
/// error — it yields a report with an empty fix list.
pub fn generate_report(raw: &[RawReview]) -> Result<ReleaseDecisionReport> {
    generate_report_with(raw, &ReportConfig::default())
}

/// Generate a release decision report with explicit configuration.
pub fn generate_report_with(
    raw: &[RawReview],
    config: &ReportConfig,
) -> Result<ReleaseDecisionReport> {
    let report = assemble_report(raw, config, Uuid::new_v4(), Utc::now())?;
    obs::emit_report_generated(&report);
    Ok(report)
}

/// Deterministic assembly: a pure function of its inputs.
///
/// The public `generate_report*` wrappers supply the two metadata stamps
/// (`report_id`, `generated_at`); everything else in the returned report is
/// derived solely from `raw` and `config`, so identical inputs produce
/// identical reports.
pub fn assemble_report(
    raw: &[RawReview],
    config: &ReportConfig,
    report_id: Uuid,
    generated_at: DateTime<Utc>,
) -> Result<ReleaseDecisionReport> {
    let (records, summary) = normalize_reviews(raw);
    obs::emit_reviews_normalized(&summary);
    if records.is_empty() {
        return Err(ReportError::InsufficientReviews {
            submitted: raw.len(),
        });
    }

    let verdict = aggregate_verdicts(&records);
    let readiness_score = score_statistics(&records);
    let clusters = cluster_fixes(&records, &config.clustering);
    let top_fixes = select_top_fixes(clusters, config.clustering.top_fixes);
    let evidence = collect_evidence(&records, &config.evidence);

    Ok(ReleaseDecisionReport {
        report_id,
        generated_at,
        review_count: records.len(),
        verdict,
        readiness_score,
        top_fixes,
        strengths: evidence.strengths,
        risks: evidence.risks,
        competitive_benchmarks: evidence.competitive_benchmarks,
    })
}
