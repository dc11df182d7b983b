// 🀄 Lo Shu Grid
// Tally of digits 1-9 from the birth date plus the derived roots
//
//   4 9 2
//   3 5 7
//   8 1 6
//
// Filling order:
// 1. Every nonzero digit of the date text
// 2. Mulank, only when the birth day has two digits
// 3. Bhagyank, always
// 4. Kua, always

use crate::birth::BirthDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Traditional magic-square placement of the digits
pub const GRID_LAYOUT: [[u32; 3]; 3] = [[4, 9, 2], [3, 5, 7], [8, 1, 6]];

// ============================================================================
// STATIC GRID
// ============================================================================

/// Digit label ("1".."9") → occurrence count. All nine keys are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoShuGrid {
    counts: BTreeMap<String, u32>,
}

impl LoShuGrid {
    /// Grid with every slot at zero
    pub fn empty() -> Self {
        LoShuGrid {
            counts: (1..=9).map(|d| (d.to_string(), 0)).collect(),
        }
    }

    /// Count for `digit`; 0 for anything outside 1-9
    pub fn count(&self, digit: u32) -> u32 {
        self.counts.get(&digit.to_string()).copied().unwrap_or(0)
    }

    /// Add one to `digit`'s slot. Values outside 1-9 (0, master numbers)
    /// have no slot and are ignored.
    pub fn mark(&mut self, digit: u32) {
        if let Some(count) = self.counts.get_mut(&digit.to_string()) {
            *count += 1;
        }
    }

    /// Digits that never appear
    pub fn missing_numbers(&self) -> Vec<u32> {
        (1..=9).filter(|&d| self.count(d) == 0).collect()
    }

    /// Counts arranged in the 3×3 layout
    pub fn rows(&self) -> [[u32; 3]; 3] {
        GRID_LAYOUT.map(|row| row.map(|digit| self.count(digit)))
    }

    pub fn counts(&self) -> &BTreeMap<String, u32> {
        &self.counts
    }

    /// Overlay the current personal year, month and day
    pub fn with_personal_periods(&self, year: u32, month: u32, day: u32) -> DynamicLoShuGrid {
        let mut grid = self.clone();
        let mut dynamic_numbers = Vec::new();

        for number in [year, month, day] {
            grid.mark(number);
            if (1..=9).contains(&number) && !dynamic_numbers.contains(&number) {
                dynamic_numbers.push(number);
            }
        }
        dynamic_numbers.sort_unstable();

        DynamicLoShuGrid {
            grid,
            dynamic_numbers,
        }
    }
}

impl Default for LoShuGrid {
    fn default() -> Self {
        Self::empty()
    }
}

/// Build the natal grid from the date text and its three derived roots
pub fn generate_lo_shu_grid(dob: &BirthDate, mulank: u32, bhagyank: u32, kua: u32) -> LoShuGrid {
    let mut grid = LoShuGrid::empty();

    dob.as_str()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .filter(|&d| d != 0)
        .for_each(|d| grid.mark(d));

    if dob.day > 9 {
        grid.mark(mulank);
    }
    grid.mark(bhagyank);
    grid.mark(kua);

    grid
}

// ============================================================================
// DYNAMIC GRID
// ============================================================================

/// Natal grid plus the running personal periods; `dynamic_numbers` lists the
/// digits that received a period contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicLoShuGrid {
    pub grid: LoShuGrid,
    pub dynamic_numbers: Vec<u32>,
}

impl DynamicLoShuGrid {
    pub fn is_dynamic(&self, digit: u32) -> bool {
        self.dynamic_numbers.contains(&digit)
    }
}

// ============================================================================
// TESTS
// ============================================================================
