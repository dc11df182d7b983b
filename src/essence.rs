// ✨ Essence Timeline
// One number per age (0-100) from three letter cursors walking the first,
// middle and last names.
//
// Each letter is held for as many years as its value (A = 1 year, F = 8
// years), then the cursor moves on, wrapping to the first letter.

use crate::name::{clean_letters, letter_value};
use crate::reduce::reduce_preserving_master;
use serde::{Deserialize, Serialize};

/// Ages covered, inclusive
pub const ESSENCE_MAX_AGE: u32 = 100;

// ============================================================================
// NAME PARTS
// ============================================================================

/// Full name split into first / middle / last, already cleaned.
///
/// "Mary Anne Lee Smith" → MARY / ANNELEE / SMITH.
/// One token leaves last empty; two tokens leave middle empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameParts {
    pub first: String,
    pub middle: String,
    pub last: String,
}

impl NameParts {
    pub fn parse(full_name: &str) -> Self {
        let tokens: Vec<&str> = full_name.split_whitespace().collect();

        match tokens.as_slice() {
            [] => NameParts::default(),
            [only] => NameParts {
                first: clean_letters(only),
                ..NameParts::default()
            },
            [first, middle @ .., last] => NameParts {
                first: clean_letters(first),
                middle: middle.iter().map(|t| clean_letters(t)).collect(),
                last: clean_letters(last),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.middle.is_empty() && self.last.is_empty()
    }
}

// ============================================================================
// LETTER CURSOR
// ============================================================================

/// Walks one name part, holding each letter for its value in years
#[derive(Debug, Clone)]
struct LetterCursor {
    values: Vec<u32>,
    index: usize,
    remaining: u32,
}

impl LetterCursor {
    fn new(letters: &str) -> Self {
        let values: Vec<u32> = letters.chars().filter_map(letter_value).collect();
        let remaining = values.first().copied().unwrap_or(0);

        LetterCursor {
            values,
            index: 0,
            remaining,
        }
    }

    /// Value of the letter currently held, 0 for an empty part
    fn current(&self) -> u32 {
        self.values.get(self.index).copied().unwrap_or(0)
    }

    /// One year passes
    fn advance(&mut self) {
        if self.values.is_empty() {
            return;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.index = (self.index + 1) % self.values.len();
            self.remaining = self.values[self.index];
        }
    }
}

// ============================================================================
// TIMELINE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EssenceEntry {
    pub age: u32,
    pub year: u32,
    pub essence: u32,
}

/// Essence for ages 0..=100. Names without letters give an empty timeline.
pub fn generate_essence_timeline(full_name: &str, birth_year: u32) -> Vec<EssenceEntry> {
    let parts = NameParts::parse(full_name);
    if parts.is_empty() {
        return Vec::new();
    }

    let mut cursors = [
        LetterCursor::new(&parts.first),
        LetterCursor::new(&parts.middle),
        LetterCursor::new(&parts.last),
    ];

    (0..=ESSENCE_MAX_AGE)
        .map(|age| {
            let sum: u32 = cursors.iter().map(LetterCursor::current).sum();
            let entry = EssenceEntry {
                age,
                year: birth_year.saturating_add(age),
                essence: reduce_preserving_master(sum),
            };

            cursors.iter_mut().for_each(LetterCursor::advance);
            entry
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
