//! Domain models for Trackpanel.
//!
//! Canonical definitions for the core entities:
//! - `RawReview`: loosely-typed review row as handed over by storage
//! - `ReviewRecord`: validated panelist record the pipeline consumes
//! - `ReleaseDecisionReport`: the immutable report handed to the caller

pub mod error;
pub mod report;
pub mod review;

// Re-export main types and errors
pub use error::{ReportError, Result};
pub use report::{
    Confidence, ReleaseDecisionReport, ScoreSummary, TopFix, VerdictBreakdown, VerdictSummary,
    SCORE_BUCKETS,
};
pub use review::{FixMention, Impact, RawFixMention, RawReview, ReviewRecord, Verdict};
