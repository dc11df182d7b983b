// ⛰️ Pinnacles & Challenges
// Four life stages, each with an addition-based pinnacle (11/22 kept) and a
// subtraction-based challenge (always 1-9 or 0).
//
// Stage boundaries:
//   First:  0 ..= 36 - deduction
//   Second: next 9 years
//   Third:  next 9 years
//   Fourth: open-ended
//
// deduction = life path, except master life paths 11 → 2 and 22 → 4.

use crate::birth::BirthDate;
use crate::reduce::{reduce_preserving_master, reduce_to_single_digit};
use serde::{Deserialize, Serialize};

const FIRST_STAGE_BASE_AGE: u32 = 36;
const MIDDLE_STAGE_YEARS: u32 = 9;
const STAGE_LABELS: [&str; 4] = ["First", "Second", "Third", "Fourth"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeStage {
    pub cycle: String,
    pub start_age: u32,
    /// `None` for the last, open-ended stage
    pub end_age: Option<u32>,
    /// Display form: "0 - 27" or "46+"
    pub range: String,
    pub pinnacle: u32,
    pub challenge: u32,
}

/// Life path with master numbers kept (digit sum of the whole date)
pub fn life_path(dob: &BirthDate) -> u32 {
    reduce_preserving_master(dob.digit_total())
}

/// Years taken off 36 for the end of the first stage
pub fn life_path_deduction(dob: &BirthDate) -> u32 {
    match life_path(dob) {
        11 => 2,
        22 => 4,
        other => other,
    }
}

pub fn calculate_pinnacles(dob: &BirthDate) -> [u32; 4] {
    let month = pinnacle_month_base(dob.month);
    let day = reduce_to_single_digit(dob.day);
    let year = reduce_to_single_digit(dob.year);

    let first = reduce_preserving_master(month + day);
    let second = reduce_preserving_master(day + year);
    let third = reduce_preserving_master(first + second);
    let fourth = reduce_preserving_master(month + year);

    [first, second, third, fourth]
}

pub fn calculate_challenges(dob: &BirthDate) -> [u32; 4] {
    let month = reduce_to_single_digit(dob.month);
    let day = reduce_to_single_digit(dob.day);
    let year = reduce_to_single_digit(dob.year);

    let first = reduce_to_single_digit(month.abs_diff(day));
    let second = reduce_to_single_digit(day.abs_diff(year));
    let third = reduce_to_single_digit(first.abs_diff(second));
    let fourth = reduce_to_single_digit(month.abs_diff(year));

    [first, second, third, fourth]
}

/// November stays 11 for pinnacle sums; every other month is reduced
fn pinnacle_month_base(month: u32) -> u32 {
    if month == 11 {
        11
    } else {
        reduce_to_single_digit(month)
    }
}

/// (start, end) ages for the four stages; the last end is open
pub fn stage_ages(deduction: u32) -> [(u32, Option<u32>); 4] {
    let first_end = FIRST_STAGE_BASE_AGE.saturating_sub(deduction);
    let second_end = first_end + MIDDLE_STAGE_YEARS;
    let third_end = second_end + MIDDLE_STAGE_YEARS;

    [
        (0, Some(first_end)),
        (first_end + 1, Some(second_end)),
        (second_end + 1, Some(third_end)),
        (third_end + 1, None),
    ]
}

pub fn calculate_life_stages(dob: &BirthDate) -> Vec<LifeStage> {
    let pinnacles = calculate_pinnacles(dob);
    let challenges = calculate_challenges(dob);
    let ages = stage_ages(life_path_deduction(dob));

    (0..4)
        .map(|i| {
            let (start_age, end_age) = ages[i];
            let range = match end_age {
                Some(end) => format!("{} - {}", start_age, end),
                None => format!("{}+", start_age),
            };

            LifeStage {
                cycle: STAGE_LABELS[i].to_string(),
                start_age,
                end_age,
                range,
                pinnacle: pinnacles[i],
                challenge: challenges[i],
            }
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
