//! Downstream narrative collaborator interface.
//!
//! Prose generation (the "AI analysis" text shown next to a report) is not
//! part of the engine: it consumes the structured report and produces text
//! independently, and it is neither deterministic nor independently
//! testable the way the aggregates are. The boundary is a trait so callers
//! can plug in a real generator, a canned one, or nothing at all —
//! collaborator failure never blocks availability of the structured report.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::report::ReleaseDecisionReport;
use crate::obs;

/// Errors produced by a narrative collaborator.
#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    #[error("narrative generation failed: {0}")]
    Generation(String),

    #[error("narrative generator unavailable: {0}")]
    Unavailable(String),
}

/// Prose companion to a [`ReleaseDecisionReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseNarrative {
    pub summary: String,
    pub technical_insights: String,
    pub market_recommendation: String,
    pub estimated_work_required: String,
    pub prioritized_action_plan: Vec<String>,
}

/// Injectable prose generator.
///
/// Implement this trait to plug in an LLM client, a template renderer, or a
/// test stub. The generator receives the finished report and must not feed
/// anything back into aggregation.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Produce a narrative for `report`.
    async fn narrate(
        &self,
        report: &ReleaseDecisionReport,
    ) -> Result<ReleaseNarrative, NarrativeError>;
}

/// Run `generator` against `report`, degrading to `None` on failure.
///
/// The structured report stays available either way; a failed collaborator
/// only costs the prose.
pub async fn narrate_or_skip(
    generator: &dyn NarrativeGenerator,
    report: &ReleaseDecisionReport,
) -> Option<ReleaseNarrative> {
    match generator.narrate(report).await {
        Ok(narrative) => Some(narrative),
        Err(error) => {
            obs::emit_narrative_skipped(&report.report_id.to_string(), &error);
            None
        }
    }
}
