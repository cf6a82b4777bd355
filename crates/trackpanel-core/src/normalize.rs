//! Review record normalizer.
//!
//! Validates loosely-typed review rows into canonical [`ReviewRecord`]s.
//! A malformed record is dropped, never fatal to the run; a malformed fix
//! mention is discarded individually while its record is kept. Every drop is
//! counted in a [`NormalizeSummary`] so callers can surface diagnostics.
//!
//! Normalization copies; it never mutates the input snapshot.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::domain::review::{FixMention, Impact, RawReview, ReviewRecord, Verdict};

/// Upper bound on fix mentions per record; extra valid mentions are dropped
/// and counted.
pub const MAX_FIXES_PER_REVIEW: usize = 3;

/// Drop accounting for one normalization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeSummary {
    /// Records handed to the normalizer.
    pub submitted: usize,

    /// Records that survived validation.
    pub kept: usize,

    /// Records dropped for any reason.
    pub dropped_records: usize,

    /// Fix mentions discarded from otherwise-kept records.
    pub dropped_fixes: usize,

    /// Records with an empty reviewer id.
    pub empty_reviewer_ids: usize,

    /// Records whose verdict matched none of the known values.
    pub unknown_verdicts: usize,

    /// Records with a missing or out-of-range readiness score.
    pub invalid_scores: usize,

    /// Records whose reviewer id duplicated an earlier record.
    pub duplicate_reviewers: usize,
}

/// Validate a snapshot of raw reviews into canonical records.
///
/// Record-level checks, in order: non-empty reviewer id, known verdict,
/// readiness score present and in `[0,100]`, reviewer id not seen earlier in
/// this run. Fix-level checks: non-empty text, recognized impact, positive
/// time estimate; survivors are capped at [`MAX_FIXES_PER_REVIEW`].
///
/// Returns the kept records in input order plus the drop accounting. Zero
/// kept records is not an error here — the assembler decides that.
pub fn normalize_reviews(raw: &[RawReview]) -> (Vec<ReviewRecord>, NormalizeSummary) {
    let mut summary = NormalizeSummary {
        submitted: raw.len(),
        ..Default::default()
    };
    let mut seen_reviewers: HashSet<String> = HashSet::new();
    let mut records = Vec::with_capacity(raw.len());

    for row in raw {
        let reviewer_id = row.reviewer_id.trim();
        if reviewer_id.is_empty() {
            summary.empty_reviewer_ids += 1;
            summary.dropped_records += 1;
            debug!(event = "normalize.record_dropped", reason = "empty_reviewer_id");
            continue;
        }

        let Some(verdict) = Verdict::parse(&row.verdict) else {
            summary.unknown_verdicts += 1;
            summary.dropped_records += 1;
            debug!(
                event = "normalize.record_dropped",
                reason = "unknown_verdict",
                reviewer_id = %reviewer_id,
                verdict = %row.verdict,
            );
            continue;
        };

        let readiness_score = match row.readiness_score {
            Some(score) if (0..=100).contains(&score) => score as u8,
            _ => {
                summary.invalid_scores += 1;
                summary.dropped_records += 1;
                debug!(
                    event = "normalize.record_dropped",
                    reason = "invalid_score",
                    reviewer_id = %reviewer_id,
                    score = ?row.readiness_score,
                );
                continue;
            }
        };

        if !seen_reviewers.insert(reviewer_id.to_string()) {
            summary.duplicate_reviewers += 1;
            summary.dropped_records += 1;
            debug!(
                event = "normalize.record_dropped",
                reason = "duplicate_reviewer",
                reviewer_id = %reviewer_id,
            );
            continue;
        }

        let mut fixes = Vec::new();
        for mention in &row.fixes {
            if fixes.len() == MAX_FIXES_PER_REVIEW {
                summary.dropped_fixes += 1;
                continue;
            }
            let text = mention.text.trim();
            let impact = Impact::parse(&mention.impact);
            let minutes = mention
                .time_estimate_minutes
                .and_then(|t| u32::try_from(t).ok())
                .filter(|&t| t > 0);
            match (text.is_empty(), impact, minutes) {
                (false, Some(impact), Some(time_estimate_minutes)) => fixes.push(FixMention {
                    text: text.to_string(),
                    impact,
                    time_estimate_minutes,
                }),
                _ => {
                    summary.dropped_fixes += 1;
                    debug!(
                        event = "normalize.fix_dropped",
                        reviewer_id = %reviewer_id,
                        text = %mention.text,
                    );
                }
            }
        }

        records.push(ReviewRecord {
            reviewer_id: reviewer_id.to_string(),
            verdict,
            readiness_score,
            fixes,
            strongest_element: clean_text(row.strongest_element.as_deref()),
            biggest_risk: clean_text(row.biggest_risk.as_deref()),
            competitive_benchmark: clean_text(row.competitive_benchmark.as_deref()),
        });
    }

    summary.kept = records.len();
    (records, summary)
}

/// Trimmed copy of an optional evidence text; empty becomes `None`.
fn clean_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
