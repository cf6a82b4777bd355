//! Readiness-score statistics.
//!
//! Reduces the panel's 0–100 readiness scores to an average, median, range,
//! and a five-bucket distribution. Every value is defined down to a
//! single-review panel: the range collapses and one bucket holds the count.

use crate::domain::report::{ScoreSummary, SCORE_BUCKETS};
use crate::domain::review::ReviewRecord;

/// Compute the panel's readiness-score summary.
///
/// `average` is the mean rounded to the nearest integer; `median` for even
/// panel sizes is the rounded mean of the two central values. Distribution
/// buckets cover the inclusive ranges `[0,20]`, `[21,40]`, `[41,60]`,
/// `[61,80]`, `[81,100]` and sum to the number of records.
pub fn score_statistics(records: &[ReviewRecord]) -> ScoreSummary {
    // Callers gate on InsufficientReviews before statistics run.
    if records.is_empty() {
        return ScoreSummary {
            average: 0,
            median: 0,
            range: [0, 0],
            distribution: [0; SCORE_BUCKETS],
        };
    }

    let mut scores: Vec<u8> = records.iter().map(|r| r.readiness_score).collect();
    scores.sort_unstable();
    let n = scores.len();

    let sum: u32 = scores.iter().map(|&s| u32::from(s)).sum();
    let average = (f64::from(sum) / n as f64).round() as u8;

    let median = if n % 2 == 1 {
        scores[n / 2]
    } else {
        let low = f64::from(scores[n / 2 - 1]);
        let high = f64::from(scores[n / 2]);
        ((low + high) / 2.0).round() as u8
    };

    let mut distribution = [0usize; SCORE_BUCKETS];
    for &score in &scores {
        distribution[bucket_index(score)] += 1;
    }

    ScoreSummary {
        average,
        median,
        range: [scores[0], scores[n - 1]],
        distribution,
    }
}

fn bucket_index(score: u8) -> usize {
    match score {
        0..=20 => 0,
        21..=40 => 1,
        41..=60 => 2,
        61..=80 => 3,
        _ => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::review::Verdict;

    fn records(scores: &[u8]) -> Vec<ReviewRecord> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &s)| ReviewRecord::new(format!("rev-{i}"), Verdict::FixFirst, s))
            .collect()
    }

    #[test]
    fn test_basic_summary() {
        let summary = score_statistics(&records(&[60, 65, 70, 75, 100]));
        assert_eq!(summary.average, 74);
        assert_eq!(summary.median, 70);
        assert_eq!(summary.range, [60, 100]);
        assert_eq!(summary.distribution, [0, 0, 1, 3, 1]);
    }

    #[test]
    fn test_single_review_collapses() {
        let summary = score_statistics(&records(&[85]));
        assert_eq!(summary.average, 85);
        assert_eq!(summary.median, 85);
        assert_eq!(summary.range, [85, 85]);
        assert_eq!(summary.distribution, [0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_even_count_median_rounds() {
        // central pair (65, 70) -> 67.5 -> 68
        let summary = score_statistics(&records(&[60, 65, 70, 80]));
        assert_eq!(summary.median, 68);
    }

    #[test]
    fn test_average_rounds_to_nearest() {
        // 10 + 11 = 21 / 2 = 10.5 -> 11
        let summary = score_statistics(&records(&[10, 11]));
        assert_eq!(summary.average, 11);
    }

    #[test]
    fn test_bucket_edges_inclusive() {
        let summary = score_statistics(&records(&[0, 20, 21, 40, 41, 60, 61, 80, 81, 100]));
        assert_eq!(summary.distribution, [2, 2, 2, 2, 2]);
    }

    #[test]
    fn test_distribution_sums_to_count() {
        let scores = [5, 15, 25, 52, 77, 77, 93];
        let summary = score_statistics(&records(&scores));
        let total: usize = summary.distribution.iter().sum();
        assert_eq!(total, scores.len());
    }

    #[test]
    fn test_unsorted_input_handled() {
        let summary = score_statistics(&records(&[90, 10, 50]));
        assert_eq!(summary.median, 50);
        assert_eq!(summary.range, [10, 90]);
    }
}
