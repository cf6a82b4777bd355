//! Trackpanel Core Library
//!
//! The Release Decision Report engine: compresses a bounded panel of
//! independent peer reviews about one track into a single structured,
//! decision-oriented report — a consensus verdict with confidence, a
//! readiness-score distribution, a deduplicated/ranked fix list, and the
//! panel's qualitative evidence.
//!
//! The engine is a pure, synchronous computation over an in-memory snapshot
//! of reviews: no storage access, no I/O, no hidden state. Prose generation
//! is a downstream collaborator behind [`narrative::NarrativeGenerator`] and
//! never feeds back into aggregation.

pub mod assemble;
pub mod cluster;
pub mod domain;
pub mod evidence;
pub mod narrative;
pub mod normalize;
pub mod obs;
pub mod render;
pub mod stats;
pub mod telemetry;
pub mod verdict;

pub use assemble::{assemble_report, generate_report, generate_report_with, ReportConfig};

pub use cluster::{
    cluster_fixes, jaccard, keyword_signature, select_top_fixes, ClusterConfig, FixCluster,
};

pub use domain::{
    Confidence, FixMention, Impact, RawFixMention, RawReview, ReleaseDecisionReport, ReportError,
    Result, ReviewRecord, ScoreSummary, TopFix, Verdict, VerdictBreakdown, VerdictSummary,
    SCORE_BUCKETS,
};

pub use evidence::{collect_evidence, EvidenceConfig, EvidenceLists};

pub use narrative::{
    narrate_or_skip, NarrativeError, NarrativeGenerator, ReleaseNarrative,
};

pub use normalize::{normalize_reviews, NormalizeSummary, MAX_FIXES_PER_REVIEW};

pub use obs::{
    emit_narrative_skipped, emit_report_generated, emit_reviews_normalized, ReportSpan,
};

pub use render::{render_report_md, write_report_json};

pub use stats::score_statistics;

pub use telemetry::init_tracing;

pub use verdict::aggregate_verdicts;

/// Trackpanel version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
