//! The weekly energy grid and its single edit operation.
//!
//! `WeekGrid` is a fixed mapping from weekday and time block to an
//! optional energy level: exactly 15 cells, each independently nullable,
//! with no cross-cell constraints. Grids are never mutated in place;
//! applying an edit produces a new grid value.

use serde::{Deserialize, Serialize};

use crate::week::{EnergyLevel, TimeBlock, Weekday};

/// A single cell edit: set or clear one day/block slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridEdit {
    pub day: Weekday,
    pub block: TimeBlock,
    /// `Some` records a level, `None` returns the cell to unset.
    pub level: Option<EnergyLevel>,
}

/// Fixed 5x3 grid of optional energy levels, Monday through Friday.
///
/// Starts fully unset. The grid is the only state in the system; every
/// derived view is recomputed from it in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeekGrid {
    cells: [[Option<EnergyLevel>; 3]; 5],
}

impl WeekGrid {
    /// Create a fully unset grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Level recorded for a cell, if any.
    pub fn get(&self, day: Weekday, block: TimeBlock) -> Option<EnergyLevel> {
        self.cells[day.index()][block.index()]
    }

    /// Apply one edit, returning the new grid.
    ///
    /// Exactly one cell changes; the receiver is left untouched.
    pub fn apply(&self, edit: GridEdit) -> WeekGrid {
        let mut next = *self;
        next.cells[edit.day.index()][edit.block.index()] = edit.level;
        next
    }

    /// Non-null levels for a block, collected Monday through Friday.
    pub fn block_levels(&self, block: TimeBlock) -> Vec<EnergyLevel> {
        Weekday::ALL
            .iter()
            .filter_map(|day| self.get(*day, block))
            .collect()
    }

    /// Number of cells with a recorded level (0-15).
    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|day| day.iter())
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Whether no cell has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }

    /// Render the grid as an ASCII table, time blocks as rows and
    /// weekdays as columns. Unset cells are shown as `-`.
    pub fn render_table(&self, emoji: bool) -> String {
        let mut output = format!("{:<11}", "Time");
        for day in Weekday::ALL {
            output.push_str(&format!("{:<9}", day.short_label()));
        }
        output.push('\n');
        output.push_str(&"─".repeat(56));
        output.push('\n');

        for block in TimeBlock::ALL {
            output.push_str(&format!("{:<11}", block.as_str()));
            for day in Weekday::ALL {
                let cell = match self.get(day, block) {
                    Some(level) if emoji => level.emoji_label(),
                    Some(level) => level.label(),
                    None => "-",
                };
                output.push_str(&format!("{:<9}", cell));
            }
            output.push('\n');
        }

        output.push_str(&"─".repeat(56));
        output
    }
}
