// 🎂 Birth-Date Numbers
// Mulank (day root), Bhagyank (full-date root) and Kua (year + gender root)
//
// Dates arrive as "YYYY-MM-DD" strings. We only check shape (three numeric
// parts); "1990-02-31" is accepted on purpose, the arithmetic never needs a
// real calendar date.

use crate::error::{NumerologyError, Result};
use crate::reduce::{digit_sum, digit_sum_str, reduce_to_single_digit};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// DATE OF BIRTH
// ============================================================================

/// Parsed date of birth. Keeps the raw text because Bhagyank and the
/// Lo Shu grid work on its digits, not on the numeric parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,

    #[serde(skip)]
    raw: String,
}

impl BirthDate {
    /// Parse "YYYY-MM-DD". Fails on a wrong number of parts or a
    /// non-numeric part.
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split('-').collect();
        if parts.len() != 3 {
            return Err(NumerologyError::malformed(
                input,
                format!("expected 3 '-'-separated parts, found {}", parts.len()),
            ));
        }

        let year = parse_part(input, parts[0], "year")?;
        let month = parse_part(input, parts[1], "month")?;
        let day = parse_part(input, parts[2], "day")?;

        Ok(BirthDate {
            year,
            month,
            day,
            raw: input.to_string(),
        })
    }

    /// The text this date was parsed from
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Sum of every digit in the date text, separators ignored
    pub fn digit_total(&self) -> u32 {
        digit_sum_str(&self.raw)
    }
}

fn parse_part(input: &str, part: &str, field: &str) -> Result<u32> {
    let part = part.trim();
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return Err(NumerologyError::malformed(
            input,
            format!("{} '{}' is not a number", field, part),
        ));
    }

    part.parse::<u32>()
        .map_err(|_| NumerologyError::malformed(input, format!("{} '{}' is out of range", field, part)))
}

impl FromStr for BirthDate {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self> {
        BirthDate::parse(s)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

// ============================================================================
// GENDER
// ============================================================================

/// Only "male" (any case) is male. Every other value, including empty or
/// unexpected strings, is treated as female.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn parse(input: &str) -> Self {
        if input.trim().eq_ignore_ascii_case("male") {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

// ============================================================================
// KUA FORMULA
// ============================================================================

/// The two Kua formulas in circulation. They disagree for most inputs, so
/// both are kept under explicit names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KuaFormula {
    /// Factor from the last two year digits; separate constants for the
    /// 1900s and 2000s. Other centuries have no formula and yield 0.
    #[default]
    CenturyAware,

    /// Factor from all year digits: male 11 − factor, female 4 + factor.
    Classic,
}

impl KuaFormula {
    pub fn name(&self) -> &'static str {
        match self {
            KuaFormula::CenturyAware => "century",
            KuaFormula::Classic => "classic",
        }
    }
}

impl FromStr for KuaFormula {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "century" | "century_aware" => Ok(KuaFormula::CenturyAware),
            "classic" => Ok(KuaFormula::Classic),
            other => Err(format!("unknown kua formula '{}' (expected century or classic)", other)),
        }
    }
}

// ============================================================================
// CALCULATIONS
// ============================================================================

/// Mulank: the birth day reduced to a single digit
pub fn calculate_mulank(dob: &BirthDate) -> u32 {
    reduce_to_single_digit(dob.day)
}

/// Bhagyank: every digit of the date summed, then reduced
pub fn calculate_bhagyank(dob: &BirthDate) -> u32 {
    reduce_to_single_digit(dob.digit_total())
}

/// Kua number using the default (century-aware) formula
pub fn calculate_kua(dob: &BirthDate, gender: Gender) -> u32 {
    calculate_kua_with(dob, gender, KuaFormula::default())
}

pub fn calculate_kua_with(dob: &BirthDate, gender: Gender, formula: KuaFormula) -> u32 {
    let kua = match formula {
        KuaFormula::CenturyAware => {
            let last_two = dob.year % 100;
            let factor = reduce_to_single_digit(last_two / 10 + last_two % 10);

            match (dob.year, gender) {
                (1900..=1999, Gender::Male) => 10 - factor,
                (1900..=1999, Gender::Female) => 5 + factor,
                (2000..=2099, Gender::Male) => 9 - factor,
                (2000..=2099, Gender::Female) => 6 + factor,
                _ => 0,
            }
        }
        KuaFormula::Classic => {
            let factor = reduce_to_single_digit(digit_sum(dob.year));
            match gender {
                Gender::Male => 11 - factor,
                Gender::Female => 4 + factor,
            }
        }
    };

    // 5 has no Kua direction: men take 2, women take 8
    match reduce_to_single_digit(kua) {
        5 => match gender {
            Gender::Male => 2,
            Gender::Female => 8,
        },
        other => other,
    }
}

// ============================================================================
// TESTS
// ============================================================================
