//! Evidence collector.
//!
//! Gathers the freeform strongest-element, biggest-risk, and
//! competitive-benchmark texts across the panel. Only exact duplicates
//! (case-insensitive, whitespace-normalized) are dropped — no fuzzy
//! clustering here, since these lists preserve individual voice rather than
//! compress it the way fixes are.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::review::ReviewRecord;

/// Tuning knobs for evidence collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceConfig {
    /// Cap per list, for downstream display.
    pub max_entries: usize,
}

impl Default for EvidenceConfig {
    fn default() -> Self {
        Self { max_entries: 10 }
    }
}

/// The three collected evidence lists, each in original review order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvidenceLists {
    pub strengths: Vec<String>,
    pub risks: Vec<String>,
    pub competitive_benchmarks: Vec<String>,
}

/// Collect the panel's qualitative evidence.
pub fn collect_evidence(records: &[ReviewRecord], config: &EvidenceConfig) -> EvidenceLists {
    EvidenceLists {
        strengths: collect_field(records, config.max_entries, |r| {
            r.strongest_element.as_deref()
        }),
        risks: collect_field(records, config.max_entries, |r| r.biggest_risk.as_deref()),
        competitive_benchmarks: collect_field(records, config.max_entries, |r| {
            r.competitive_benchmark.as_deref()
        }),
    }
}

fn collect_field<'a, F>(records: &'a [ReviewRecord], max_entries: usize, field: F) -> Vec<String>
where
    F: Fn(&'a ReviewRecord) -> Option<&'a str>,
{
    let mut seen = HashSet::new();
    let mut collected = Vec::new();
    for record in records {
        if collected.len() == max_entries {
            break;
        }
        let Some(text) = field(record) else { continue };
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        if seen.insert(dedup_key(text)) {
            collected.push(text.to_string());
        }
    }
    collected
}

/// Case-insensitive, whitespace-normalized comparison key.
fn dedup_key(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::review::Verdict;

    fn review(id: &str) -> ReviewRecord {
        ReviewRecord::new(id, Verdict::ReleaseNow, 80)
    }

    #[test]
    fn test_collects_in_review_order() {
        let records = vec![
            review("rev-1").with_strongest_element("great hook"),
            review("rev-2").with_strongest_element("punchy drums"),
            review("rev-3").with_biggest_risk("generic drop"),
        ];
        let lists = collect_evidence(&records, &EvidenceConfig::default());
        assert_eq!(lists.strengths, vec!["great hook", "punchy drums"]);
        assert_eq!(lists.risks, vec!["generic drop"]);
        assert!(lists.competitive_benchmarks.is_empty());
    }

    #[test]
    fn test_dedup_is_case_and_whitespace_insensitive() {
        let records = vec![
            review("rev-1").with_strongest_element("Great  Hook"),
            review("rev-2").with_strongest_element("great hook"),
            review("rev-3").with_strongest_element("  GREAT HOOK  "),
        ];
        let lists = collect_evidence(&records, &EvidenceConfig::default());
        assert_eq!(lists.strengths, vec!["Great  Hook"]);
    }

    #[test]
    fn test_near_duplicates_are_kept() {
        // Only exact duplicates collapse; similar wording survives.
        let records = vec![
            review("rev-1").with_biggest_risk("the drop is generic"),
            review("rev-2").with_biggest_risk("generic drop"),
        ];
        let lists = collect_evidence(&records, &EvidenceConfig::default());
        assert_eq!(lists.risks.len(), 2);
    }

    #[test]
    fn test_cap_applies_per_list() {
        let records: Vec<ReviewRecord> = (0..15)
            .map(|i| review(&format!("rev-{i}")).with_strongest_element(format!("strength {i}")))
            .collect();
        let lists = collect_evidence(&records, &EvidenceConfig { max_entries: 10 });
        assert_eq!(lists.strengths.len(), 10);
        assert_eq!(lists.strengths[0], "strength 0");
        assert_eq!(lists.strengths[9], "strength 9");
    }

    #[test]
    fn test_missing_values_skipped() {
        let records = vec![review("rev-1"), review("rev-2").with_strongest_element("hook")];
        let lists = collect_evidence(&records, &EvidenceConfig::default());
        assert_eq!(lists.strengths, vec!["hook"]);
    }
}
