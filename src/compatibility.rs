// 🤝 Compatibility Chart
// Is a number (phone, plate, house...) lucky for a given birth root?
//
// Each root 1-9 splits the digits 1-9 into lucky / unlucky / neutral.
// Roots 5 and 7 have no unlucky numbers at all.

use serde::{Deserialize, Serialize};

// ============================================================================
// CHART
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompatibilityEntry {
    pub root: u32,
    pub lucky: &'static [u32],
    pub unlucky: &'static [u32],
    pub neutral: &'static [u32],
}

pub const COMPATIBILITY_CHART: [CompatibilityEntry; 9] = [
    CompatibilityEntry { root: 1, lucky: &[1, 2, 3, 5, 6, 9], unlucky: &[8], neutral: &[4, 7] },
    CompatibilityEntry { root: 2, lucky: &[1, 3, 5], unlucky: &[4, 8, 9], neutral: &[2, 6, 7] },
    CompatibilityEntry { root: 3, lucky: &[1, 2, 3, 5, 7], unlucky: &[6], neutral: &[4, 8, 9] },
    CompatibilityEntry { root: 4, lucky: &[1, 5, 6, 7], unlucky: &[2, 9], neutral: &[3, 4, 8] },
    CompatibilityEntry { root: 5, lucky: &[1, 2, 3, 5, 6], unlucky: &[], neutral: &[4, 7, 8, 9] },
    CompatibilityEntry { root: 6, lucky: &[1, 5, 6, 7], unlucky: &[3], neutral: &[2, 4, 8, 9] },
    CompatibilityEntry { root: 7, lucky: &[1, 3, 4, 5, 6], unlucky: &[], neutral: &[2, 7, 8, 9] },
    CompatibilityEntry { root: 8, lucky: &[3, 5, 6], unlucky: &[1, 2], neutral: &[4, 7, 8, 9] },
    CompatibilityEntry { root: 9, lucky: &[1, 3, 5], unlucky: &[4, 8], neutral: &[2, 6, 7, 9] },
];

/// Chart row for `root`, if it is 1-9
pub fn chart_entry(root: u32) -> Option<&'static CompatibilityEntry> {
    COMPATIBILITY_CHART.iter().find(|entry| entry.root == root)
}

// ============================================================================
// LOOKUP
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompatibilityStatus {
    Lucky,
    Unlucky,
    Neutral,
    /// Reference root outside 1-9
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compatibility {
    pub status: CompatibilityStatus,
    pub lucky_numbers: Vec<u32>,
}

/// Status of `number` for someone whose root is `root`
pub fn get_compatibility(root: u32, number: u32) -> CompatibilityStatus {
    let Some(entry) = chart_entry(root) else {
        return CompatibilityStatus::Unknown;
    };

    if entry.lucky.contains(&number) {
        CompatibilityStatus::Lucky
    } else if entry.unlucky.contains(&number) {
        CompatibilityStatus::Unlucky
    } else {
        CompatibilityStatus::Neutral
    }
}

/// Status plus the root's lucky numbers. Unknown roots get an empty list.
pub fn check_compatibility(root: u32, number: u32) -> Compatibility {
    Compatibility {
        status: get_compatibility(root, number),
        lucky_numbers: chart_entry(root)
            .map(|entry| entry.lucky.to_vec())
            .unwrap_or_default(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
