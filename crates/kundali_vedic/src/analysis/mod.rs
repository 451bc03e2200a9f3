//! Rule-based chart analysis.
//!
//! A flat registry of independent rules runs against one immutable chart;
//! the report is the set of findings the rules emitted, ordered by
//! descending score with registration order breaking ties.

pub mod rules;
pub mod tables;

use kundali_chart::ChartData;
use kundali_ephem::Body;

pub use rules::{RULES, Rule};

/// Category of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum FindingKind {
    /// Auspicious planetary combination.
    Yoga,
    /// Afflicting combination.
    Dosha,
    /// Dignity-based strength.
    Strength,
    /// Condition worth flagging without being a classical dosha.
    Caution,
}

/// One detected pattern.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Finding {
    pub kind: FindingKind,
    /// Stable machine-readable rule key.
    pub key: &'static str,
    /// Relative weight; higher sorts first in the report.
    pub score: f64,
    /// Bodies participating in the pattern.
    pub bodies: Vec<Body>,
    /// Houses involved, parallel to the pattern (not to `bodies`).
    pub houses: Vec<u8>,
}

/// Run every registered rule against the chart.
///
/// Never fails: a chart with no qualifying pattern simply yields an empty
/// report.
pub fn analyze(chart: &ChartData) -> Vec<Finding> {
    let mut findings: Vec<Finding> = RULES
        .iter()
        .filter_map(|(_, rule)| rule(chart))
        .collect();
    // Stable sort keeps registration order within equal scores.
    findings.sort_by(|a, b| b.score.total_cmp(&a.score));
    findings
}
