// Numerology Calculator - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod error;
pub mod reduce;         // Digit reduction (single digit / master-preserving)
pub mod birth;          // Mulank, Bhagyank, Kua
pub mod loshu;          // Lo Shu grid (natal + dynamic)
pub mod name;           // Letter table + name number
pub mod identifier;     // Mobile / vehicle / house numbers
pub mod compatibility;  // Lucky / unlucky chart
pub mod periods;        // Personal year / month / day + forecasts
pub mod pinnacle;       // Pinnacles, challenges, life stages
pub mod essence;        // Age-indexed essence timeline
pub mod timeline;       // Year-by-year life timeline
pub mod report;         // Full and identifier reports
pub mod config;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use error::{NumerologyError, Result};
pub use reduce::{
    digit_sum, digit_sum_str, is_master_number,
    reduce_preserving_master, reduce_to_single_digit,
};
pub use birth::{
    BirthDate, Gender, KuaFormula,
    calculate_bhagyank, calculate_kua, calculate_kua_with, calculate_mulank,
};
pub use loshu::{DynamicLoShuGrid, LoShuGrid, generate_lo_shu_grid};
pub use name::{NameNumber, calculate_name_number, letter_value};
pub use identifier::{
    IdentifierKind, IdentifierNumber,
    calculate_house_number, calculate_identifier_number,
    calculate_mobile_number, calculate_vehicle_number,
};
pub use compatibility::{
    Compatibility, CompatibilityStatus, check_compatibility, get_compatibility,
};
pub use periods::{
    CurrentPeriods, MonthForecast, PersonalPeriods, YearForecast,
    calculate_personal_periods, parse_evaluation_date,
};
pub use pinnacle::{
    LifeStage, calculate_challenges, calculate_life_stages, calculate_pinnacles,
    life_path_deduction,
};
pub use essence::{EssenceEntry, NameParts, generate_essence_timeline};
pub use timeline::{TimelineYear, generate_life_timeline};
pub use report::{IdentifierReport, NumerologyReport, ReportInput};
pub use config::ServerConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
