// 🔤 Name Numerology
// Letters → digits 1-8 (no letter maps to 9), summed and reduced
//
//   1: A I J Q Y    5: E H N X
//   2: B K R        6: U V W
//   3: C G L S      7: O Z
//   4: D M T        8: F P

use crate::reduce::reduce_to_single_digit;
use serde::{Deserialize, Serialize};

/// Digit for each letter A..=Z, by alphabet position
const LETTER_VALUES: [u32; 26] = [
    1, 2, 3, 4, 5, 8, 3, 5, 1, // A B C D E F G H I
    1, 2, 3, 4, 5, 7, 8, 1, 2, // J K L M N O P Q R
    3, 4, 6, 6, 6, 5, 1, 7, // S T U V W X Y Z
];

/// Digit value of a letter, case-insensitive. `None` for anything that is
/// not an ASCII letter.
pub fn letter_value(c: char) -> Option<u32> {
    if c.is_ascii_alphabetic() {
        let index = (c.to_ascii_uppercase() as u8 - b'A') as usize;
        Some(LETTER_VALUES[index])
    } else {
        None
    }
}

/// Uppercase letters of `text` with everything else dropped
pub fn clean_letters(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameNumber {
    pub total_sum: u32,
    pub single_digit: u32,
}

/// Sum every letter of `name` and reduce. Names with no letters give 0/0.
pub fn calculate_name_number(name: &str) -> NameNumber {
    let total_sum = name.chars().filter_map(letter_value).sum();

    NameNumber {
        total_sum,
        single_digit: reduce_to_single_digit(total_sum),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_table() {
        let groups: [(&str, u32); 8] = [
            ("AIJQY", 1),
            ("BKR", 2),
            ("CGLS", 3),
            ("DMT", 4),
            ("EHNX", 5),
            ("UVW", 6),
            ("OZ", 7),
            ("FP", 8),
        ];

        let mut seen = 0;
        for (letters, value) in groups {
            for c in letters.chars() {
                assert_eq!(letter_value(c), Some(value), "letter {}", c);
                assert_eq!(letter_value(c.to_ascii_lowercase()), Some(value));
                seen += 1;
            }
        }
        assert_eq!(seen, 26);
    }

    #[test]
    fn test_no_letter_maps_to_nine() {
        assert!(('A'..='Z').all(|c| letter_value(c) != Some(9)));
    }

    #[test]
    fn test_non_letters_have_no_value() {
        assert_eq!(letter_value(' '), None);
        assert_eq!(letter_value('7'), None);
        assert_eq!(letter_value('-'), None);
        assert_eq!(letter_value('é'), None);
    }

    #[test]
    fn test_name_numbers() {
        assert_eq!(
            calculate_name_number("Shivam"),
            NameNumber { total_sum: 20, single_digit: 2 }
        );
        assert_eq!(
            calculate_name_number("Ahuja"),
            NameNumber { total_sum: 14, single_digit: 5 }
        );
        assert_eq!(
            calculate_name_number("Shivam Ahuja"),
            NameNumber { total_sum: 34, single_digit: 7 }
        );
    }

    #[test]
    fn test_case_and_punctuation_ignored() {
        assert_eq!(calculate_name_number("SHIVAM"), calculate_name_number("shivam"));
        assert_eq!(calculate_name_number("Shi-vam!"), calculate_name_number("Shivam"));
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(
            calculate_name_number(""),
            NameNumber { total_sum: 0, single_digit: 0 }
        );
        assert_eq!(calculate_name_number("123 !!").total_sum, 0);
    }

    #[test]
    fn test_clean_letters() {
        assert_eq!(clean_letters("O'Brien-Smith 3rd"), "OBRIENSMITHRD");
        assert_eq!(clean_letters(""), "");
    }
}
