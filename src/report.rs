// 📋 Reports
// Puts the individual calculations together into the documents the API and
// CLI hand out.

use crate::birth::{calculate_bhagyank, calculate_kua_with, calculate_mulank, BirthDate, Gender, KuaFormula};
use crate::compatibility::{check_compatibility, Compatibility};
use crate::error::Result;
use crate::essence::{generate_essence_timeline, EssenceEntry};
use crate::identifier::{calculate_identifier_number, IdentifierKind};
use crate::loshu::{generate_lo_shu_grid, DynamicLoShuGrid, LoShuGrid};
use crate::name::{calculate_name_number, NameNumber};
use crate::periods::{calculate_personal_periods, PersonalPeriods};
use crate::pinnacle::{calculate_life_stages, LifeStage};
use crate::timeline::{generate_life_timeline, TimelineYear};
use chrono::{Datelike, NaiveDate};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

// ============================================================================
// FULL ANALYSIS
// ============================================================================

/// What a full analysis needs
#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub name: &'a str,
    pub dob: &'a str,
    pub gender: &'a str,
    pub kua_formula: KuaFormula,
}

impl<'a> ReportInput<'a> {
    pub fn new(name: &'a str, dob: &'a str, gender: &'a str) -> Self {
        ReportInput {
            name,
            dob,
            gender,
            kua_formula: KuaFormula::default(),
        }
    }

    /// Builder pattern: pick the Kua formula
    pub fn with_kua_formula(mut self, formula: KuaFormula) -> Self {
        self.kua_formula = formula;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NumerologyReport {
    pub name: String,
    pub dob: BirthDate,
    pub gender: Gender,
    pub kua_formula: KuaFormula,

    pub mulank: u32,
    pub bhagyank: u32,
    pub kua: u32,
    pub name_number: NameNumber,

    pub loshu: LoShuGrid,
    pub dynamic_loshu: DynamicLoShuGrid,
    pub missing_numbers: Vec<u32>,

    pub periods: PersonalPeriods,
    pub pinnacles: Vec<LifeStage>,
    pub essence: Vec<EssenceEntry>,
    pub timeline: Vec<TimelineYear>,
}

impl NumerologyReport {
    /// Run every calculation for `input` as of `today`
    pub fn generate(input: &ReportInput<'_>, today: NaiveDate) -> Result<Self> {
        let dob = BirthDate::parse(input.dob)?;
        let gender = Gender::parse(input.gender);

        let mulank = calculate_mulank(&dob);
        let bhagyank = calculate_bhagyank(&dob);
        let kua = calculate_kua_with(&dob, gender, input.kua_formula);

        let loshu = generate_lo_shu_grid(&dob, mulank, bhagyank, kua);
        let periods = calculate_personal_periods(&dob, today);
        let dynamic_loshu = loshu.with_personal_periods(
            periods.current.personal_year,
            periods.current.personal_month,
            periods.current.personal_day,
        );

        let essence = generate_essence_timeline(input.name, dob.year);
        let timeline = generate_life_timeline(&dob, &essence, today.year());

        debug!(
            dob = %dob,
            mulank,
            bhagyank,
            kua,
            formula = input.kua_formula.name(),
            "generated numerology report"
        );

        Ok(NumerologyReport {
            name: input.name.to_string(),
            gender,
            kua_formula: input.kua_formula,
            mulank,
            bhagyank,
            kua,
            name_number: calculate_name_number(input.name),
            missing_numbers: loshu.missing_numbers(),
            loshu,
            dynamic_loshu,
            periods,
            pinnacles: calculate_life_stages(&dob),
            essence,
            timeline,
            dob,
        })
    }
}

// ============================================================================
// IDENTIFIER ANALYSIS
// ============================================================================

/// Mobile / vehicle / house analysis. Serialized with kind-specific keys,
/// e.g. `mobile_total` and `mobile_compound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierReport {
    pub kind: IdentifierKind,
    pub mulank: u32,
    pub bhagyank: u32,
    /// Reduced digit sum of the identifier
    pub total: u32,
    /// Raw digit sum of the identifier
    pub compound: u32,
    /// Identifier root checked against the mulank
    pub compatibility: Compatibility,
}

impl IdentifierReport {
    pub fn generate(dob: &str, kind: IdentifierKind, identifier: &str) -> Result<Self> {
        let dob = BirthDate::parse(dob)?;
        let mulank = calculate_mulank(&dob);
        let number = calculate_identifier_number(identifier);

        debug!(kind = kind.name(), mulank, total = number.single_digit, "generated identifier report");

        Ok(IdentifierReport {
            kind,
            mulank,
            bhagyank: calculate_bhagyank(&dob),
            total: number.single_digit,
            compound: number.total_sum,
            compatibility: check_compatibility(mulank, number.single_digit),
        })
    }
}

impl Serialize for IdentifierReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let prefix = self.kind.name();
        let mut map = serializer.serialize_map(Some(6))?;
        map.serialize_entry("kind", &self.kind)?;
        map.serialize_entry("mulank", &self.mulank)?;
        map.serialize_entry("bhagyank", &self.bhagyank)?;
        map.serialize_entry(&format!("{}_total", prefix), &self.total)?;
        map.serialize_entry(&format!("{}_compound", prefix), &self.compound)?;
        map.serialize_entry("compatibility", &self.compatibility)?;
        map.end()
    }
}

// ============================================================================
// TESTS
// ============================================================================
