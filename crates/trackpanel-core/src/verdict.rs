//! Verdict aggregation.
//!
//! Reduces the panel's verdicts to a single consensus with an exact vote
//! breakdown and a qualitative confidence grade. Ties resolve toward
//! caution: `NEEDS_WORK` beats `FIX_FIRST` beats `RELEASE_NOW`.

use crate::domain::report::{Confidence, VerdictBreakdown, VerdictSummary};
use crate::domain::review::{ReviewRecord, Verdict};

/// Aggregate the panel's verdicts.
///
/// Consensus is the strict-majority verdict; a tied count resolves to the
/// more conservative option. Confidence is graded from the winner's share of
/// `review_count` with integer arithmetic, so the 70%/50% boundaries are
/// exact: `>= 70%` is `HIGH`, `>= 50%` is `MEDIUM`, anything less is `LOW`.
pub fn aggregate_verdicts(records: &[ReviewRecord]) -> VerdictSummary {
    let mut breakdown = VerdictBreakdown::default();
    for record in records {
        match record.verdict {
            Verdict::ReleaseNow => breakdown.release_now += 1,
            Verdict::FixFirst => breakdown.fix_first += 1,
            Verdict::NeedsWork => breakdown.needs_work += 1,
        }
    }

    let consensus = [Verdict::ReleaseNow, Verdict::FixFirst, Verdict::NeedsWork]
        .into_iter()
        .max_by_key(|v| (breakdown.count(*v), v.caution_rank()))
        .unwrap_or(Verdict::NeedsWork);

    let total = records.len();
    let winner = breakdown.count(consensus);
    let confidence = if total > 0 && winner * 10 >= total * 7 {
        Confidence::High
    } else if total > 0 && winner * 2 >= total {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    VerdictSummary {
        consensus,
        breakdown,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(verdicts: &[Verdict]) -> Vec<ReviewRecord> {
        verdicts
            .iter()
            .enumerate()
            .map(|(i, v)| ReviewRecord::new(format!("rev-{i}"), *v, 50))
            .collect()
    }

    #[test]
    fn test_unanimous_is_high_confidence() {
        let summary = aggregate_verdicts(&records(&[Verdict::ReleaseNow; 5]));
        assert_eq!(summary.consensus, Verdict::ReleaseNow);
        assert_eq!(summary.confidence, Confidence::High);
        assert_eq!(summary.breakdown.release_now, 5);
    }

    #[test]
    fn test_seventy_percent_share_is_high() {
        let mut vs = vec![Verdict::FixFirst; 7];
        vs.extend([Verdict::ReleaseNow, Verdict::ReleaseNow, Verdict::NeedsWork]);
        let summary = aggregate_verdicts(&records(&vs));
        assert_eq!(summary.consensus, Verdict::FixFirst);
        assert_eq!(summary.confidence, Confidence::High);
    }

    #[test]
    fn test_just_below_seventy_percent_is_medium() {
        // 6/10 = 60%
        let mut vs = vec![Verdict::FixFirst; 6];
        vs.extend([Verdict::ReleaseNow; 4]);
        let summary = aggregate_verdicts(&records(&vs));
        assert_eq!(summary.confidence, Confidence::Medium);
    }

    #[test]
    fn test_plurality_below_half_is_low() {
        // 2/6 wins but is only 33%
        let vs = [
            Verdict::FixFirst,
            Verdict::FixFirst,
            Verdict::ReleaseNow,
            Verdict::NeedsWork,
            Verdict::ReleaseNow,
            Verdict::NeedsWork,
        ];
        let summary = aggregate_verdicts(&records(&vs));
        assert_eq!(summary.confidence, Confidence::Low);
    }

    #[test]
    fn test_tie_resolves_toward_caution() {
        let vs = [
            Verdict::ReleaseNow,
            Verdict::ReleaseNow,
            Verdict::FixFirst,
            Verdict::FixFirst,
        ];
        let summary = aggregate_verdicts(&records(&vs));
        assert_eq!(summary.consensus, Verdict::FixFirst);

        let vs = [
            Verdict::FixFirst,
            Verdict::NeedsWork,
            Verdict::FixFirst,
            Verdict::NeedsWork,
        ];
        let summary = aggregate_verdicts(&records(&vs));
        assert_eq!(summary.consensus, Verdict::NeedsWork);
    }

    #[test]
    fn test_three_way_tie_picks_most_conservative() {
        let vs = [Verdict::ReleaseNow, Verdict::FixFirst, Verdict::NeedsWork];
        let summary = aggregate_verdicts(&records(&vs));
        assert_eq!(summary.consensus, Verdict::NeedsWork);
    }

    #[test]
    fn test_breakdown_sums_to_record_count() {
        let vs = [
            Verdict::ReleaseNow,
            Verdict::FixFirst,
            Verdict::FixFirst,
            Verdict::NeedsWork,
        ];
        let summary = aggregate_verdicts(&records(&vs));
        assert_eq!(summary.breakdown.total(), 4);
    }

    #[test]
    fn test_single_review_panel() {
        let summary = aggregate_verdicts(&records(&[Verdict::NeedsWork]));
        assert_eq!(summary.consensus, Verdict::NeedsWork);
        assert_eq!(summary.confidence, Confidence::High);
    }
}
