//! Report artifacts.
//!
//! Presentation-side helpers that format the structured report without
//! recomputing any of its numbers:
//! - `render_report_md` — human-readable Markdown summary
//! - `write_report_json` — pretty-printed `report.json` artifact on disk

use std::path::{Path, PathBuf};

use crate::domain::error::Result;
use crate::domain::report::ReleaseDecisionReport;

/// Render the report as a Markdown string.
pub fn render_report_md(report: &ReleaseDecisionReport) -> String {
    let mut md = format!(
        "# Release Decision Report\n\n\
         - Consensus: **{}** (confidence {})\n\
         - Reviews: {}\n\
         - Generated: {}\n",
        report.verdict.consensus.as_str(),
        report.verdict.confidence.as_str(),
        report.review_count,
        report.generated_at.to_rfc3339(),
    );

    md.push_str("\n## Verdicts\n\n");
    let b = &report.verdict.breakdown;
    md.push_str(&format!("- RELEASE_NOW: {}\n", b.release_now));
    md.push_str(&format!("- FIX_FIRST: {}\n", b.fix_first));
    md.push_str(&format!("- NEEDS_WORK: {}\n", b.needs_work));

    md.push_str("\n## Readiness\n\n");
    let s = &report.readiness_score;
    md.push_str(&format!(
        "- Average {} / median {} / range {}–{}\n",
        s.average, s.median, s.range[0], s.range[1]
    ));
    md.push_str(&format!(
        "- Distribution (0-20 / 21-40 / 41-60 / 61-80 / 81-100): {} / {} / {} / {} / {}\n",
        s.distribution[0], s.distribution[1], s.distribution[2], s.distribution[3], s.distribution[4]
    ));

    md.push_str("\n## Top Fixes\n\n");
    if report.top_fixes.is_empty() {
        md.push_str("none reported\n");
    } else {
        for fix in &report.top_fixes {
            md.push_str(&format!(
                "- **{}** — {} reviewer(s), {} impact, ~{} min\n",
                fix.issue,
                fix.mentioned_by,
                fix.avg_impact.as_str(),
                fix.avg_time_estimate_minutes,
            ));
            for variation in &fix.variations {
                md.push_str(&format!("  - also phrased as: \"{variation}\"\n"));
            }
        }
    }

    push_evidence_section(&mut md, "Strengths", &report.strengths);
    push_evidence_section(&mut md, "Risks", &report.risks);
    push_evidence_section(&mut md, "Competitive Benchmarks", &report.competitive_benchmarks);

    md
}

fn push_evidence_section(md: &mut String, title: &str, entries: &[String]) {
    md.push_str(&format!("\n## {title}\n\n"));
    if entries.is_empty() {
        md.push_str("none reported\n");
    } else {
        for entry in entries {
            md.push_str(&format!("- {entry}\n"));
        }
    }
}

/// Persist `<dir>/<report_id>/report.json`.
pub fn write_report_json(report: &ReleaseDecisionReport, dir: &Path) -> Result<PathBuf> {
    let report_dir = dir.join(report.report_id.to_string());
    std::fs::create_dir_all(&report_dir)?;

    let path = report_dir.join("report.json");
    let json = serde_json::to_vec_pretty(report)?;
    std::fs::write(&path, &json)?;

    Ok(path)
}
