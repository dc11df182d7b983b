// 🗓️ Life Timeline
// Year-by-year view of a life: personal year, its twelve personal months,
// and the essence for that age.

use crate::birth::BirthDate;
use crate::essence::EssenceEntry;
use crate::periods::{monthly_forecast, personal_year_for, MonthForecast};
use serde::{Deserialize, Serialize};

/// Number of years listed (ages 0-99)
pub const TIMELINE_YEARS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineYear {
    pub age: u32,
    pub year: u32,
    pub personal_year: u32,
    pub months: Vec<MonthForecast>,
    pub essence: Option<u32>,
    pub is_current_year: bool,
}

/// Build the timeline. `current_year` only sets the `is_current_year` flag.
/// Years past `u32::MAX` stick at `u32::MAX`.
pub fn generate_life_timeline(
    dob: &BirthDate,
    essence: &[EssenceEntry],
    current_year: i32,
) -> Vec<TimelineYear> {
    let current_year = u32::try_from(current_year).ok();

    (0..TIMELINE_YEARS)
        .map(|age| {
            let year = dob.year.saturating_add(age);
            let py = personal_year_for(dob, year);

            TimelineYear {
                age,
                year,
                personal_year: py,
                months: monthly_forecast(py),
                essence: essence.iter().find(|e| e.age == age).map(|e| e.essence),
                is_current_year: current_year == Some(year),
            }
        })
        .collect()
}
