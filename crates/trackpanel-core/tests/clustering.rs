use trackpanel_core::{cluster_fixes, select_top_fixes, ClusterConfig, Impact, ReviewRecord, Verdict};

fn review(id: &str) -> ReviewRecord {
    ReviewRecord::new(id, Verdict::FixFirst, 60)
}

/// Three phrasings of the same vocal issue plus one unrelated mention.
fn vocal_panel() -> Vec<ReviewRecord> {
    vec![
        review("rev-a").with_fix("vocal too loud in the chorus", Impact::High, 30),
        review("rev-b").with_fix("chorus vocal is way too loud", Impact::High, 20),
        review("rev-c").with_fix("loud vocal drowns the chorus", Impact::Medium, 40),
        review("rev-d").with_fix("kick drum sounds muddy", Impact::Low, 15),
    ]
}

// ---- Scenario: independent phrasings of one issue ----

#[test]
fn shared_tokens_collapse_into_one_cluster() {
    let clusters = cluster_fixes(&vocal_panel(), &ClusterConfig::default());
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].mentioned_by, 3);
    assert_eq!(clusters[1].mentioned_by, 1);
}

#[test]
fn cluster_aggregates_combine_members() {
    let clusters = cluster_fixes(&vocal_panel(), &ClusterConfig::default());
    let vocal = &clusters[0];
    assert_eq!(vocal.member_texts.len(), 3);
    // Modal impact: two HIGH, one MEDIUM.
    assert_eq!(vocal.avg_impact, Impact::High);
    // (30 + 20 + 40) / 3 = 30.
    assert_eq!(vocal.avg_time_estimate_minutes, 30);
}

// ---- Provenance ----

#[test]
fn one_reviewer_with_two_similar_mentions_counts_once() {
    let records = vec![
        review("rev-a")
            .with_fix("vocal too loud in the chorus", Impact::High, 30)
            .with_fix("chorus vocal still too loud", Impact::High, 10),
        review("rev-b").with_fix("loud chorus vocal", Impact::Medium, 20),
    ];
    let clusters = cluster_fixes(&records, &ClusterConfig::default());
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].member_texts.len(), 3);
    // Two mentions from rev-a still count as one reviewer.
    assert_eq!(clusters[0].mentioned_by, 2);
}

// ---- Order insensitivity (the primary property) ----

#[test]
fn reviewer_order_does_not_change_the_clusters() {
    let forward = vocal_panel();
    let mut backward = vocal_panel();
    backward.reverse();
    let mut rotated = vocal_panel();
    rotated.rotate_left(2);

    let config = ClusterConfig::default();
    let from_forward = cluster_fixes(&forward, &config);
    let from_backward = cluster_fixes(&backward, &config);
    let from_rotated = cluster_fixes(&rotated, &config);

    assert_eq!(from_forward, from_backward);
    assert_eq!(from_forward, from_rotated);
}

// ---- Selection ----

#[test]
fn top_fixes_never_exceed_limit_or_cluster_count() {
    let clusters = cluster_fixes(&vocal_panel(), &ClusterConfig::default());
    let formed = clusters.len();

    let top = select_top_fixes(clusters.clone(), 3);
    assert!(top.len() <= 3);
    assert!(top.len() <= formed);

    let top = select_top_fixes(clusters, 10);
    assert_eq!(top.len(), formed);
}

#[test]
fn top_fix_carries_attribution_and_variations() {
    let clusters = cluster_fixes(&vocal_panel(), &ClusterConfig::default());
    let top = select_top_fixes(clusters, 1);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].mentioned_by, 3);
    assert_eq!(top[0].variations.len(), 2);
    assert!(!top[0].variations.contains(&top[0].issue));
}

// ---- Degenerate input ----

#[test]
fn all_stop_word_texts_become_singletons() {
    let records = vec![
        review("rev-a").with_fix("it is too much", Impact::Low, 5),
        review("rev-b").with_fix("this and that", Impact::Low, 5),
    ];
    let clusters = cluster_fixes(&records, &ClusterConfig::default());
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].mentioned_by, 1);
    assert_eq!(clusters[1].mentioned_by, 1);
}

#[test]
fn no_mentions_produce_no_clusters() {
    let records = vec![review("rev-a"), review("rev-b")];
    assert!(cluster_fixes(&records, &ClusterConfig::default()).is_empty());
}
