// 📅 Personal Periods
// Personal year / month / day for an evaluation date, plus a ten-year and a
// twelve-month outlook.
//
// The evaluation date is always passed in. Nothing in here reads the clock.

use crate::birth::BirthDate;
use crate::error::{NumerologyError, Result};
use crate::reduce::reduce_to_single_digit;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Number of yearly forecast entries (evaluation year + 9)
pub const YEARLY_FORECAST_LEN: i32 = 10;

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentPeriods {
    pub personal_year: u32,
    pub personal_month: u32,
    pub personal_day: u32,
    /// Evaluation date, YYYY-MM-DD
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearForecast {
    pub year: i32,
    pub personal_year: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthForecast {
    pub month: String,
    pub month_num: u32,
    pub personal_month: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalPeriods {
    pub current: CurrentPeriods,
    pub yearly_forecast: Vec<YearForecast>,
    pub monthly_forecast: Vec<MonthForecast>,
}

// ============================================================================
// CALCULATIONS
// ============================================================================

/// Personal year for calendar `year`: reduced day + reduced month + reduced year
pub fn personal_year(dob: &BirthDate, year: i32) -> u32 {
    personal_year_for(dob, year.unsigned_abs())
}

/// Same as `personal_year`, for years counted forward from a birth year
pub(crate) fn personal_year_for(dob: &BirthDate, year: u32) -> u32 {
    reduce_to_single_digit(
        reduce_to_single_digit(dob.day)
            + reduce_to_single_digit(dob.month)
            + reduce_to_single_digit(year),
    )
}

/// Personal month: personal year + reduced calendar month
pub fn personal_month(personal_year: u32, month: u32) -> u32 {
    reduce_to_single_digit(personal_year + reduce_to_single_digit(month))
}

/// Personal day: personal month + reduced calendar day
pub fn personal_day(personal_month: u32, day: u32) -> u32 {
    reduce_to_single_digit(personal_month + reduce_to_single_digit(day))
}

/// The personal year after `personal_year`: 9 wraps to 1, never 0 or 10
pub fn next_personal_year(personal_year: u32) -> u32 {
    if personal_year >= 9 {
        1
    } else {
        personal_year + 1
    }
}

/// Twelve personal months for a calendar year, holding `personal_year` fixed
pub fn monthly_forecast(personal_year: u32) -> Vec<MonthForecast> {
    MONTH_NAMES
        .iter()
        .zip(1u32..)
        .map(|(name, month_num)| MonthForecast {
            month: name.to_string(),
            month_num,
            personal_month: personal_month(personal_year, month_num),
        })
        .collect()
}

pub fn calculate_personal_periods(dob: &BirthDate, on: NaiveDate) -> PersonalPeriods {
    let py = personal_year(dob, on.year());
    let pm = personal_month(py, on.month());
    let pd = personal_day(pm, on.day());

    let mut yearly_forecast = Vec::with_capacity(YEARLY_FORECAST_LEN as usize);
    let mut cycle = py;
    for offset in 0..YEARLY_FORECAST_LEN {
        yearly_forecast.push(YearForecast {
            year: on.year() + offset,
            personal_year: cycle,
        });
        cycle = next_personal_year(cycle);
    }

    PersonalPeriods {
        current: CurrentPeriods {
            personal_year: py,
            personal_month: pm,
            personal_day: pd,
            date: on.format("%Y-%m-%d").to_string(),
        },
        yearly_forecast,
        monthly_forecast: monthly_forecast(py),
    }
}

/// Parse an evaluation date. Unlike birth dates these must be real dates.
pub fn parse_evaluation_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| NumerologyError::InvalidEvaluationDate(input.to_string()))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn periods(dob: &str, on: &str) -> PersonalPeriods {
        calculate_personal_periods(
            &BirthDate::parse(dob).unwrap(),
            parse_evaluation_date(on).unwrap(),
        )
    }

    #[test]
    fn test_personal_year_example() {
        // 29 → 2, June 6, 2025 → 9: 17 → 8
        let result = periods("1990-06-29", "2025-01-01");
        assert_eq!(result.current.personal_year, 8);
        assert_eq!(result.current.personal_month, 9);
        assert_eq!(result.current.personal_day, 1);
        assert_eq!(result.current.date, "2025-01-01");
    }

    #[test]
    fn test_monthly_forecast() {
        let result = periods("1990-06-29", "2025-01-01");
        assert_eq!(result.monthly_forecast.len(), 12);

        let jan = &result.monthly_forecast[0];
        assert_eq!(jan.month, "January");
        assert_eq!(jan.month_num, 1);
        assert_eq!(jan.personal_month, 9);

        let sep = result
            .monthly_forecast
            .iter()
            .find(|m| m.month == "September")
            .unwrap();
        assert_eq!(sep.personal_month, 8);

        // October 10 → 1: 8 + 1 = 9
        assert_eq!(result.monthly_forecast[9].personal_month, 9);
    }

    #[test]
    fn test_monthly_forecast_ignores_evaluation_month() {
        let january = periods("1990-06-29", "2025-01-01");
        let july = periods("1990-06-29", "2025-07-15");
        assert_eq!(january.monthly_forecast, july.monthly_forecast);
        assert_ne!(january.current.personal_month, july.current.personal_month);
    }

    #[test]
    fn test_yearly_forecast_cycles() {
        let result = periods("1990-06-29", "2025-01-01");
        let years: Vec<i32> = result.yearly_forecast.iter().map(|y| y.year).collect();
        let numbers: Vec<u32> = result.yearly_forecast.iter().map(|y| y.personal_year).collect();

        assert_eq!(years, (2025..=2034).collect::<Vec<_>>());
        assert_eq!(numbers, vec![8, 9, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_nine_wraps_to_one() {
        assert_eq!(next_personal_year(9), 1);
        assert_eq!(next_personal_year(8), 9);
        assert_eq!(next_personal_year(1), 2);
    }

    #[test]
    fn test_yearly_forecast_matches_direct_calculation() {
        let dob = BirthDate::parse("1984-11-03").unwrap();
        let result = calculate_personal_periods(&dob, parse_evaluation_date("2030-05-20").unwrap());

        for entry in &result.yearly_forecast {
            assert_eq!(entry.personal_year, personal_year(&dob, entry.year));
        }
    }

    #[test]
    fn test_personal_day() {
        // PY 8, Jan PM 9, day 29 → 2: 11 → 2
        let result = periods("1990-06-29", "2025-01-29");
        assert_eq!(result.current.personal_day, 2);
    }

    #[test]
    fn test_invalid_evaluation_date() {
        assert!(parse_evaluation_date("2025-02-30").is_err());
        assert!(parse_evaluation_date("2025/01/01").is_err());
        assert!(parse_evaluation_date("today").is_err());
    }
}
