//! Digit reduction and the values derived from it.
//!
//! Reduction is a plain iterative digit sum. Zero stays zero and multiples of
//! nine reduce to nine; no modulo-9 shortcut is used anywhere in Jafr, so
//! every call site agrees on both edge cases.

/// Smallest wafq order; also the fallback for digits without a planetary square.
pub const MIN_MAGIC_SQUARE_SIZE: u8 = 3;

/// Sum the decimal digits of `n` until a single digit remains.
///
/// `reduce_to_single_digit(0) == 0`: zero is already one digit.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn reduce_to_single_digit(mut n: u64) -> u8 {
    while n > 9 {
        let mut sum = 0;
        while n > 0 {
            sum += n % 10;
            n /= 10;
        }
        n = sum;
    }
    // n <= 9 here.
    n as u8
}

/// Wafq (magic square) order for a reduced digit.
///
/// ```text
/// digit   3  4  5  6  7  8  9   0,1,2 and anything else
/// order   3  4  5  6  7  8  9   3
/// ```
///
/// Orders 3 through 9 are the seven planetary squares (Saturn through the Moon).
#[must_use]
pub const fn magic_square_size(reduced: u8) -> u8 {
    match reduced {
        3..=9 => reduced,
        _ => MIN_MAGIC_SQUARE_SIZE,
    }
}

/// Sum every decimal digit in a birth-date string.
///
/// Accepts ASCII, Arabic-Indic (`٠`–`٩`), and Extended Arabic-Indic
/// (`۰`–`۹`) digits and ignores separators or any other text, so
/// `"1990-05-17"` and `"١٩٩٠/٠٥/١٧"` both give 32.
#[must_use]
pub fn birth_date_value(text: &str) -> u64 {
    text.chars().filter_map(digit_value).map(u64::from).sum()
}

const fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        '٠'..='٩' => Some(c as u32 - '٠' as u32),
        '۰'..='۹' => Some(c as u32 - '۰' as u32),
        _ => None,
    }
}
