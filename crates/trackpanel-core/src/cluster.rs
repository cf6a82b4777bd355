//! Fix clustering engine.
//!
//! Reviewers independently describe the same underlying issue in different
//! words ("vocal too loud in the chorus" vs. "chorus vocal needs to come
//! down"). Listing every mention verbatim makes a noisy, repetitive report,
//! so this module groups mentions into clusters that each stand for one
//! issue, preserving provenance (how many distinct reviewers raised it) and
//! aggregated severity/time, then ranks the clusters for the top-fix list.
//!
//! The similarity metric is deliberately simple and explainable: the Jaccard
//! index over stop-word-stripped token sets. The pass is deterministic by
//! construction — mentions are processed in `(reviewer_id, rank)` order, so
//! the outcome does not depend on the order reviews arrive in.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::report::TopFix;
use crate::domain::review::{Impact, ReviewRecord};

/// Tokens ignored when building a mention's keyword signature.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "so", "of", "to", "in", "on", "at", "by", "for",
    "with", "from", "into", "about", "is", "are", "was", "were", "be", "been", "being", "it",
    "its", "this", "that", "these", "those", "there", "here", "i", "you", "we", "they", "my",
    "your", "our", "their", "me", "us", "them", "too", "very", "really", "just", "quite", "bit",
    "some", "any", "more", "most", "much", "as", "than", "then", "also", "still", "maybe",
    "probably", "should", "could", "would", "can", "will", "need", "needs", "needed",
];

/// Tuning knobs for the clustering pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Minimum Jaccard similarity for a mention to join an existing cluster.
    pub similarity_threshold: f64,

    /// Maximum number of clusters surfaced as top fixes.
    pub top_fixes: usize,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.4,
            top_fixes: 3,
        }
    }
}

/// A group of fix mentions judged to describe the same underlying issue.
///
/// Lives only between clustering and top-K selection; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixCluster {
    /// Longest member text (ties broken by earliest seen) — the human-facing
    /// issue string.
    pub representative_text: String,

    /// Every member text, in processing order.
    pub member_texts: Vec<String>,

    /// Distinct reviewers contributing at least one member.
    pub mentioned_by: usize,

    /// Modal impact among members, ties broken toward the more severe.
    pub avg_impact: Impact,

    /// Mean member time estimate, rounded to the nearest minute.
    pub avg_time_estimate_minutes: u32,
}

/// Normalized keyword signature: lower-cased, punctuation stripped, stop
/// words removed, remaining tokens kept as a set.
pub fn keyword_signature(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty() && !STOP_WORDS.contains(token))
        .map(ToOwned::to_owned)
        .collect()
}

/// Jaccard index of two token sets. An empty union scores 0.0, so mentions
/// with no signature tokens always end up in singleton clusters instead of
/// erroring.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

struct TaggedMention<'a> {
    reviewer_id: &'a str,
    rank: usize,
    text: &'a str,
    impact: Impact,
    time_estimate_minutes: u32,
    signature: BTreeSet<String>,
}

struct ClusterBuilder<'a> {
    /// Signature of the cluster's first member; every join decision compares
    /// against this, not against later members.
    seed_signature: BTreeSet<String>,
    members: Vec<TaggedMention<'a>>,
}

impl<'a> ClusterBuilder<'a> {
    fn seeded(mention: TaggedMention<'a>) -> Self {
        Self {
            seed_signature: mention.signature.clone(),
            members: vec![mention],
        }
    }

    fn push(&mut self, mention: TaggedMention<'a>) {
        self.members.push(mention);
    }

    fn build(&self) -> FixCluster {
        let mentioned_by = self
            .members
            .iter()
            .map(|m| m.reviewer_id)
            .collect::<BTreeSet<_>>()
            .len();

        let total_minutes: u64 = self
            .members
            .iter()
            .map(|m| u64::from(m.time_estimate_minutes))
            .sum();
        let avg_time_estimate_minutes =
            (total_minutes as f64 / self.members.len() as f64).round() as u32;

        // Longest text wins; scanning in order keeps the earliest on ties.
        let mut representative = &self.members[0];
        for member in &self.members[1..] {
            if member.text.len() > representative.text.len() {
                representative = member;
            }
        }

        FixCluster {
            representative_text: representative.text.to_string(),
            member_texts: self.members.iter().map(|m| m.text.to_string()).collect(),
            mentioned_by,
            avg_impact: modal_impact(self.members.iter().map(|m| m.impact)),
            avg_time_estimate_minutes,
        }
    }
}

fn modal_impact(impacts: impl Iterator<Item = Impact>) -> Impact {
    let mut counts = [0usize; 3];
    for impact in impacts {
        counts[impact as usize] += 1;
    }
    [Impact::Low, Impact::Medium, Impact::High]
        .into_iter()
        .max_by_key(|i| (counts[*i as usize], *i))
        .unwrap_or(Impact::Low)
}

/// Cluster all fix mentions across the panel and rank the clusters.
///
/// Single greedy pass: mentions are flattened, tagged with their reviewer,
/// and processed in stable `(reviewer_id, rank)` order. A mention joins the
/// existing cluster whose seed signature it matches best at or above the
/// threshold (earliest cluster wins exact ties), otherwise it seeds a new
/// cluster. The result is ranked by `(mentioned_by desc, severity desc,
/// avg time desc)`, stable beyond that.
///
/// Zero mentions produce an empty list, not an error. A permissive threshold
/// collapsing everything into one giant cluster is accepted as-is.
pub fn cluster_fixes(records: &[ReviewRecord], config: &ClusterConfig) -> Vec<FixCluster> {
    let mut mentions: Vec<TaggedMention<'_>> = records
        .iter()
        .flat_map(|record| {
            record.fixes.iter().enumerate().map(move |(rank, fix)| TaggedMention {
                reviewer_id: record.reviewer_id.as_str(),
                rank,
                text: fix.text.as_str(),
                impact: fix.impact,
                time_estimate_minutes: fix.time_estimate_minutes,
                signature: keyword_signature(&fix.text),
            })
        })
        .collect();
    // Stable processing order makes the clustering insensitive to the order
    // reviews were submitted or fetched in.
    mentions.sort_by(|a, b| (a.reviewer_id, a.rank).cmp(&(b.reviewer_id, b.rank)));

    let mut clusters: Vec<ClusterBuilder<'_>> = Vec::new();
    for mention in mentions {
        let mut best: Option<(usize, f64)> = None;
        for (idx, cluster) in clusters.iter().enumerate() {
            let score = jaccard(&mention.signature, &cluster.seed_signature);
            if score >= config.similarity_threshold
                && best.map_or(true, |(_, best_score)| score > best_score)
            {
                best = Some((idx, score));
            }
        }
        match best {
            Some((idx, _)) => clusters[idx].push(mention),
            None => clusters.push(ClusterBuilder::seeded(mention)),
        }
    }

    let mut built: Vec<FixCluster> = clusters.iter().map(ClusterBuilder::build).collect();
    built.sort_by(|a, b| {
        b.mentioned_by
            .cmp(&a.mentioned_by)
            .then_with(|| b.avg_impact.cmp(&a.avg_impact))
            .then_with(|| b.avg_time_estimate_minutes.cmp(&a.avg_time_estimate_minutes))
    });
    built
}

/// Turn the ranked clusters into the report's top-fix entries.
///
/// Takes at most `limit` clusters; each entry's `variations` are the member
/// texts other than the representative (one occurrence of it is removed).
pub fn select_top_fixes(clusters: Vec<FixCluster>, limit: usize) -> Vec<TopFix> {
    clusters
        .into_iter()
        .take(limit)
        .map(|cluster| {
            let mut variations = cluster.member_texts;
            if let Some(pos) = variations
                .iter()
                .position(|t| *t == cluster.representative_text)
            {
                variations.remove(pos);
            }
            TopFix {
                issue: cluster.representative_text,
                variations,
                mentioned_by: cluster.mentioned_by,
                avg_impact: cluster.avg_impact,
                avg_time_estimate_minutes: cluster.avg_time_estimate_minutes,
            }
        })
        .collect()
}
