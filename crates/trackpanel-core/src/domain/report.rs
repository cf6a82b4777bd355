//! Release decision report value types.
//!
//! [`ReleaseDecisionReport`] is the single artifact the engine produces:
//! created once per run, immutable, ownership transferred entirely to the
//! caller. Presentation layers treat every count and score in it as
//! authoritative and never recompute them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::review::{Impact, Verdict};

/// Qualitative strength of agreement behind the consensus verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Wire-stable name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

/// Exact vote counts per verdict value.
///
/// # Invariants
///
/// The three counts sum to the report's `review_count`; the aggregator
/// derives them from the normalized records and nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictBreakdown {
    pub release_now: usize,
    pub fix_first: usize,
    pub needs_work: usize,
}

impl VerdictBreakdown {
    /// Votes for a given verdict.
    pub fn count(&self, verdict: Verdict) -> usize {
        match verdict {
            Verdict::ReleaseNow => self.release_now,
            Verdict::FixFirst => self.fix_first,
            Verdict::NeedsWork => self.needs_work,
        }
    }

    /// Total votes across all three verdicts.
    pub fn total(&self) -> usize {
        self.release_now + self.fix_first + self.needs_work
    }
}

/// Aggregated verdict across the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictSummary {
    /// The winning (or conservatively tie-broken) verdict.
    pub consensus: Verdict,

    /// Exact per-verdict vote counts.
    pub breakdown: VerdictBreakdown,

    /// Strength of agreement behind `consensus`.
    pub confidence: Confidence,
}

/// Number of readiness-score distribution buckets:
/// `[0,20]`, `[21,40]`, `[41,60]`, `[61,80]`, `[81,100]`.
pub const SCORE_BUCKETS: usize = 5;

/// Aggregated readiness-score statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Arithmetic mean, rounded to the nearest integer.
    pub average: u8,

    /// Median; for even panel sizes, the rounded mean of the two central
    /// values.
    pub median: u8,

    /// `[min, max]` of the submitted scores.
    pub range: [u8; 2],

    /// Bucket counts over the [`SCORE_BUCKETS`] inclusive ranges. Sums to
    /// the report's `review_count`.
    pub distribution: [usize; SCORE_BUCKETS],
}

/// One ranked, deduplicated fix entry in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopFix {
    /// Human-facing issue description (the cluster's representative text).
    pub issue: String,

    /// Alternative phrasings of the same issue from other mentions.
    pub variations: Vec<String>,

    /// Distinct reviewers who raised this issue.
    pub mentioned_by: usize,

    /// Modal severity among the clustered mentions.
    pub avg_impact: Impact,

    /// Mean of the clustered time estimates, rounded to the nearest minute.
    pub avg_time_estimate_minutes: u32,
}

/// The immutable decision report for one track's review panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseDecisionReport {
    /// Identifier stamped at generation time.
    pub report_id: Uuid,

    /// Generation timestamp stamped at generation time.
    pub generated_at: DateTime<Utc>,

    /// Records that survived normalization.
    pub review_count: usize,

    /// Consensus verdict, breakdown, and confidence.
    pub verdict: VerdictSummary,

    /// Readiness-score statistics.
    pub readiness_score: ScoreSummary,

    /// Ranked, deduplicated fix list (at most the configured top-K).
    pub top_fixes: Vec<TopFix>,

    /// Collected strongest-element texts, deduplicated, in review order.
    pub strengths: Vec<String>,

    /// Collected biggest-risk texts, deduplicated, in review order.
    pub risks: Vec<String>,

    /// Collected competitive-benchmark texts, deduplicated, in review order.
    pub competitive_benchmarks: Vec<String>,
}
