// 📱 Identifier Numerology
// Mobile numbers, vehicle plates and house numbers: digits only, letters and
// punctuation are ignored.

use crate::reduce::{digit_sum_str, reduce_to_single_digit};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    Mobile,
    Vehicle,
    House,
}

impl IdentifierKind {
    pub fn name(&self) -> &'static str {
        match self {
            IdentifierKind::Mobile => "mobile",
            IdentifierKind::Vehicle => "vehicle",
            IdentifierKind::House => "house",
        }
    }
}

/// Raw digit sum plus its reduction. Both are always reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierNumber {
    pub total_sum: u32,
    pub single_digit: u32,
}

/// Shared by every identifier kind: the kinds differ only in naming
pub fn calculate_identifier_number(identifier: &str) -> IdentifierNumber {
    let total_sum = digit_sum_str(identifier);

    IdentifierNumber {
        total_sum,
        single_digit: reduce_to_single_digit(total_sum),
    }
}

pub fn calculate_mobile_number(mobile: &str) -> IdentifierNumber {
    calculate_identifier_number(mobile)
}

pub fn calculate_vehicle_number(plate: &str) -> IdentifierNumber {
    calculate_identifier_number(plate)
}

pub fn calculate_house_number(house: &str) -> IdentifierNumber {
    calculate_identifier_number(house)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_number() {
        let result = calculate_mobile_number("9876543210");
        assert_eq!(result.total_sum, 45);
        assert_eq!(result.single_digit, 9);
    }

    #[test]
    fn test_mobile_number_with_formatting() {
        assert_eq!(
            calculate_mobile_number("+91 98765-43210"),
            IdentifierNumber { total_sum: 55, single_digit: 1 }
        );
    }

    #[test]
    fn test_vehicle_plate_ignores_letters() {
        let result = calculate_vehicle_number("MH01AB1234");
        assert_eq!(result.total_sum, 11);
        assert_eq!(result.single_digit, 2);
    }

    #[test]
    fn test_house_number() {
        let result = calculate_house_number("101");
        assert_eq!(result.total_sum, 2);
        assert_eq!(result.single_digit, 2);

        assert_eq!(calculate_house_number("Flat 4B").single_digit, 4);
    }

    #[test]
    fn test_no_digits() {
        let empty = IdentifierNumber { total_sum: 0, single_digit: 0 };
        assert_eq!(calculate_identifier_number(""), empty);
        assert_eq!(calculate_vehicle_number("ABCD"), empty);
    }
}
