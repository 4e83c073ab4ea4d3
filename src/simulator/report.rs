//! Simulation report generation.

use super::runner::{SessionEnd, SessionResult};
use crate::equipment::RodLevel;
use crate::fishing::{adjusted_weights, FISH_CATALOG};
use serde::Serialize;

/// Observed versus expected frequency for one species.
#[derive(Debug, Clone, Serialize)]
pub struct SpeciesRow {
    pub name: &'static str,
    pub count: u64,
    pub observed_share: f64,
    pub expected_share: f64,
}

/// Aggregated results for one rod level.
#[derive(Debug, Clone, Serialize)]
pub struct RodReport {
    pub rod: u8,
    pub sessions: u64,
    pub catches: u64,
    pub line_breaks: u64,
    pub stuck: u64,
    pub catch_rate: f64,
    pub avg_seconds_to_resolve: f64,
    pub avg_payout: f64,
    pub species: Vec<SpeciesRow>,
    /// Pearson statistic of the species mix against the adjusted weights
    /// (7 degrees of freedom).
    pub chi_square: f64,
}

impl RodReport {
    pub(super) fn from_results(rod: RodLevel, results: &[SessionResult], frame_ms: f64) -> Self {
        let sessions = results.len() as u64;
        let mut counts = [0u64; FISH_CATALOG.len()];
        let mut line_breaks = 0;
        let mut stuck = 0;
        let mut payout_total = 0u64;
        let mut resolved_frames = 0u64;

        for r in results {
            match r.end {
                SessionEnd::Caught {
                    species_idx,
                    payout,
                } => {
                    counts[species_idx] += 1;
                    payout_total += payout;
                }
                SessionEnd::LineBroke => line_breaks += 1,
                SessionEnd::Stuck => {
                    stuck += 1;
                    continue;
                }
            }
            resolved_frames += r.frames as u64;
        }

        let catches: u64 = counts.iter().sum();
        let resolved = sessions - stuck;

        let weights = adjusted_weights(rod);
        let weight_total: f64 = weights.iter().sum();
        let species: Vec<SpeciesRow> = FISH_CATALOG
            .iter()
            .zip(counts)
            .zip(weights)
            .map(|((s, count), w)| SpeciesRow {
                name: s.name,
                count,
                observed_share: count as f64 / catches.max(1) as f64,
                expected_share: w / weight_total,
            })
            .collect();

        let chi_square = if catches == 0 {
            0.0
        } else {
            species
                .iter()
                .map(|row| {
                    let expected = row.expected_share * catches as f64;
                    (row.count as f64 - expected).powi(2) / expected
                })
                .sum()
        };

        Self {
            rod: rod.get(),
            sessions,
            catches,
            line_breaks,
            stuck,
            catch_rate: catches as f64 / sessions.max(1) as f64,
            avg_seconds_to_resolve: resolved_frames as f64 * frame_ms
                / 1000.0
                / resolved.max(1) as f64,
            avg_payout: payout_total as f64 / catches.max(1) as f64,
            species,
            chi_square,
        }
    }
}

/// Results for every simulated rod level.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub runs_per_rod: u32,
    pub seed: Option<u64>,
    pub hold_policy: &'static str,
    pub rods: Vec<RodReport>,
}

impl SimReport {
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                     CATCH SIMULATION\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");
        report.push_str(&format!(
            "Sessions per rod: {}   Hold policy: {}\n\n",
            self.runs_per_rod, self.hold_policy
        ));

        for rod in &self.rods {
            report.push_str(&format!(
                "── ROD LV {} ─────────────────────────────────────────────────────\n",
                rod.rod
            ));
            report.push_str(&format!(
                "  Catch rate:          {:.1}% ({} caught, {} snapped, {} stuck)\n",
                rod.catch_rate * 100.0,
                rod.catches,
                rod.line_breaks,
                rod.stuck
            ));
            report.push_str(&format!(
                "  Avg time to resolve: {:.2}s\n",
                rod.avg_seconds_to_resolve
            ));
            report.push_str(&format!("  Avg payout:          ${:.1}\n", rod.avg_payout));
            report.push_str(&format!(
                "  Species chi-square:  {:.2} (7 dof, p=0.001 at 24.32)\n",
                rod.chi_square
            ));
            for row in &rod.species {
                report.push_str(&format!(
                    "    {:<14} {:>7}  {:>6.2}%  (expected {:>6.2}%)\n",
                    row.name,
                    row.count,
                    row.observed_share * 100.0,
                    row.expected_share * 100.0
                ));
            }
            report.push('\n');
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
