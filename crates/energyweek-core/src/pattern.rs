//! Pattern analysis over the weekly energy grid.
//!
//! One recompute pass derives three views from the grid: time blocks
//! that average good or better, blocks that average low or worse, and
//! blocks reporting the identical level on at least three of the five
//! days. The pass is total and pure; it is rerun in full after every
//! edit rather than updated incrementally.

use serde::{Deserialize, Serialize};

use crate::grid::WeekGrid;
use crate::week::TimeBlock;

/// Mean energy for one time block across the week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockAverage {
    pub block: TimeBlock,
    /// Mean of the recorded scores, or 0.0 when the block has no data.
    pub average: f64,
    /// Number of days with a recorded level for this block (0-5).
    pub sample_count: usize,
}

/// Derived view over the grid. Disposable; recomputed after every edit.
///
/// All three lists follow canonical time block order (morning,
/// afternoon, evening), never weekday order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSummary {
    /// Blocks whose average is good or better
    pub best_times: Vec<TimeBlock>,
    /// Blocks whose average is low or worse
    pub challenge_times: Vec<TimeBlock>,
    /// Blocks with the identical level on at least three days
    pub consistent_periods: Vec<TimeBlock>,
}

impl PatternSummary {
    /// Whether all three lists are empty.
    pub fn is_empty(&self) -> bool {
        self.best_times.is_empty()
            && self.challenge_times.is_empty()
            && self.consistent_periods.is_empty()
    }

    /// Render the three lists, with a placeholder line for each empty one.
    pub fn render_report(&self) -> String {
        let mut output = String::from("Pattern Analysis\n");
        output.push_str(&"─".repeat(50));
        output.push('\n');

        Self::render_list(
            &mut output,
            "Best Energy Times:",
            &self.best_times,
            "No consistent high energy times detected yet",
        );
        Self::render_list(
            &mut output,
            "Challenge Times:",
            &self.challenge_times,
            "No consistent challenge times detected yet",
        );
        Self::render_list(
            &mut output,
            "Consistent Periods:",
            &self.consistent_periods,
            "No consistent patterns detected yet",
        );

        output.push_str(&"─".repeat(50));
        output
    }

    fn render_list(output: &mut String, header: &str, blocks: &[TimeBlock], placeholder: &str) {
        output.push_str(header);
        output.push('\n');
        if blocks.is_empty() {
            output.push_str(&format!("  {placeholder}\n"));
        } else {
            for block in blocks {
                output.push_str(&format!("  - {block}\n"));
            }
        }
    }
}

/// Analyzer deriving a [`PatternSummary`] from a grid.
#[derive(Debug, Clone)]
pub struct PatternAnalyzer {
    /// Minimum block average to count as a best time
    pub best_threshold: f64,
    /// Maximum block average to count as a challenge time
    pub challenge_threshold: f64,
    /// Minimum recorded days for a block to qualify as consistent
    pub consistency_min_samples: usize,
}

impl Default for PatternAnalyzer {
    fn default() -> Self {
        Self {
            best_threshold: 3.0,
            challenge_threshold: 2.0,
            consistency_min_samples: 3,
        }
    }
}

impl PatternAnalyzer {
    /// Create an analyzer with the standard thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom thresholds.
    pub fn with_thresholds(best: f64, challenge: f64, min_samples: usize) -> Self {
        Self {
            best_threshold: best,
            challenge_threshold: challenge,
            consistency_min_samples: min_samples,
        }
    }

    /// Mean energy per block in canonical order.
    ///
    /// Unset cells are excluded from the mean. A block with no data
    /// averages 0 and therefore lands below the challenge threshold;
    /// an untracked block reads as needing support, not as an error.
    pub fn block_averages(&self, grid: &WeekGrid) -> Vec<BlockAverage> {
        TimeBlock::ALL
            .iter()
            .map(|&block| {
                let levels = grid.block_levels(block);
                let average = if levels.is_empty() {
                    0.0
                } else {
                    let total: f64 = levels.iter().map(|level| level.score() as f64).sum();
                    total / levels.len() as f64
                };
                BlockAverage {
                    block,
                    average,
                    sample_count: levels.len(),
                }
            })
            .collect()
    }

    /// Recompute the full summary from the current grid.
    ///
    /// Total and side-effect free: absent values are simply excluded,
    /// and no input can fail.
    pub fn analyze(&self, grid: &WeekGrid) -> PatternSummary {
        let mut summary = PatternSummary::default();

        for entry in self.block_averages(grid) {
            if entry.average >= self.best_threshold {
                summary.best_times.push(entry.block);
            }
            if entry.average <= self.challenge_threshold {
                summary.challenge_times.push(entry.block);
            }
        }

        for &block in TimeBlock::ALL.iter() {
            let levels = grid.block_levels(block);
            if levels.len() >= self.consistency_min_samples
                && levels.iter().all(|&level| level == levels[0])
            {
                summary.consistent_periods.push(block);
            }
        }

        summary
    }

    /// Recommendation lines for a summary, one per non-empty list.
    pub fn recommendations(&self, summary: &PatternSummary) -> Vec<String> {
        let mut recommendations = Vec::new();

        if !summary.best_times.is_empty() {
            recommendations.push(format!(
                "Schedule important tasks during your high energy periods: {}",
                join_blocks(&summary.best_times)
            ));
        }
        if !summary.challenge_times.is_empty() {
            recommendations.push(format!(
                "Plan extra support or breaks during: {}",
                join_blocks(&summary.challenge_times)
            ));
        }
        if !summary.consistent_periods.is_empty() {
            recommendations.push(format!(
                "You have consistent energy during: {}. Consider building routines around these times.",
                join_blocks(&summary.consistent_periods)
            ));
        }

        recommendations
    }
}

fn join_blocks(blocks: &[TimeBlock]) -> String {
    blocks
        .iter()
        .map(|block| block.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
