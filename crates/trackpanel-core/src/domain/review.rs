//! Review panel input models.
//!
//! A report run consumes a fixed snapshot of panelist reviews. Storage hands
//! these over loosely typed ([`RawReview`]); the normalizer turns them into
//! canonical [`ReviewRecord`]s, which is the only shape the rest of the
//! pipeline ever sees.

use serde::{Deserialize, Serialize};

/// A reviewer's categorical release recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    ReleaseNow,
    FixFirst,
    NeedsWork,
}

impl Verdict {
    /// Parse a wire value, tolerating case and surrounding whitespace.
    /// Anything else is unknown and the record carrying it gets dropped.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "RELEASE_NOW" => Some(Self::ReleaseNow),
            "FIX_FIRST" => Some(Self::FixFirst),
            "NEEDS_WORK" => Some(Self::NeedsWork),
            _ => None,
        }
    }

    /// Rank used when a tied vote must resolve toward caution:
    /// `NEEDS_WORK` outranks `FIX_FIRST` outranks `RELEASE_NOW`.
    pub fn caution_rank(self) -> u8 {
        match self {
            Self::ReleaseNow => 0,
            Self::FixFirst => 1,
            Self::NeedsWork => 2,
        }
    }

    /// Wire-stable name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReleaseNow => "RELEASE_NOW",
            Self::FixFirst => "FIX_FIRST",
            Self::NeedsWork => "NEEDS_WORK",
        }
    }
}

/// Severity of a fix mention. `Ord` follows severity: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    /// Parse a wire value, tolerating case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "HIGH" => Some(Self::High),
            "MEDIUM" => Some(Self::Medium),
            "LOW" => Some(Self::Low),
            _ => None,
        }
    }

    /// Wire-stable name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

/// One reviewer's freeform description of a needed change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixMention {
    /// Non-empty description of the issue.
    pub text: String,

    /// Reviewer-assigned severity.
    pub impact: Impact,

    /// Reviewer-estimated time to address, in minutes (positive).
    pub time_estimate_minutes: u32,
}

/// A loosely-typed review row as handed over by storage.
///
/// Every field is tolerated missing or malformed; validation happens in the
/// normalizer, never downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawReview {
    /// Opaque reviewer identifier, unique per record in a report run.
    #[serde(default)]
    pub reviewer_id: String,

    /// Verdict wire value (`RELEASE_NOW` / `FIX_FIRST` / `NEEDS_WORK`).
    #[serde(default)]
    pub verdict: String,

    /// Readiness judgment, expected in 0–100.
    #[serde(default)]
    pub readiness_score: Option<i64>,

    /// Freeform fix mentions, in the reviewer's priority order.
    #[serde(default)]
    pub fixes: Vec<RawFixMention>,

    #[serde(default)]
    pub strongest_element: Option<String>,

    #[serde(default)]
    pub biggest_risk: Option<String>,

    #[serde(default)]
    pub competitive_benchmark: Option<String>,
}

/// A loosely-typed fix mention within a [`RawReview`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFixMention {
    #[serde(default)]
    pub text: String,

    /// Impact wire value (`HIGH` / `MEDIUM` / `LOW`).
    #[serde(default)]
    pub impact: String,

    #[serde(default)]
    pub time_estimate_minutes: Option<i64>,
}

/// A validated panelist record — the canonical pipeline input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Opaque reviewer identifier, unique per record in a report run.
    pub reviewer_id: String,

    /// The reviewer's release recommendation.
    pub verdict: Verdict,

    /// Readiness judgment in 0–100.
    pub readiness_score: u8,

    /// Validated fix mentions (at most 3). Order is a tie-break hint only,
    /// never a weight.
    pub fixes: Vec<FixMention>,

    pub strongest_element: Option<String>,

    pub biggest_risk: Option<String>,

    pub competitive_benchmark: Option<String>,
}

impl ReviewRecord {
    /// Create a record with no fixes or evidence text.
    pub fn new(reviewer_id: impl Into<String>, verdict: Verdict, readiness_score: u8) -> Self {
        Self {
            reviewer_id: reviewer_id.into(),
            verdict,
            readiness_score,
            fixes: Vec::new(),
            strongest_element: None,
            biggest_risk: None,
            competitive_benchmark: None,
        }
    }

    /// Append a fix mention.
    pub fn with_fix(
        mut self,
        text: impl Into<String>,
        impact: Impact,
        time_estimate_minutes: u32,
    ) -> Self {
        self.fixes.push(FixMention {
            text: text.into(),
            impact,
            time_estimate_minutes,
        });
        self
    }

    /// Set the strongest-element evidence text.
    pub fn with_strongest_element(mut self, text: impl Into<String>) -> Self {
        self.strongest_element = Some(text.into());
        self
    }

    /// Set the biggest-risk evidence text.
    pub fn with_biggest_risk(mut self, text: impl Into<String>) -> Self {
        self.biggest_risk = Some(text.into());
        self
    }

    /// Set the competitive-benchmark evidence text.
    pub fn with_competitive_benchmark(mut self, text: impl Into<String>) -> Self {
        self.competitive_benchmark = Some(text.into());
        self
    }
}
