// 🔢 Digit Reducer
// The one primitive everything else is built on.
//
// Two policies, two functions:
// - reduce_to_single_digit: always collapse to 0..=9
// - reduce_preserving_master: stop early on 11 or 22
//
// Only the pinnacle/challenge/essence code uses the second one.

/// Master numbers exempt from reduction under `reduce_preserving_master`
pub const MASTER_NUMBERS: [u32; 2] = [11, 22];

/// Sum of the decimal digits of `n`
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Sum of every ASCII digit in `text`, ignoring everything else
pub fn digit_sum_str(text: &str) -> u32 {
    text.chars().filter_map(|c| c.to_digit(10)).sum()
}

/// Collapse `n` by repeated digit sums until it is at most 9.
///
/// Example: 38 → 11 → 2. Zero stays zero.
pub fn reduce_to_single_digit(mut n: u32) -> u32 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}

/// Like `reduce_to_single_digit`, but stops as soon as the value is 11 or 22.
///
/// Example: 29 → 11 (kept), 38 → 11 (kept), 40 → 4.
pub fn reduce_preserving_master(mut n: u32) -> u32 {
    while n > 9 && !is_master_number(n) {
        n = digit_sum(n);
    }
    n
}

pub fn is_master_number(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

// ============================================================================
// TESTS
// ============================================================================
