//! Integer puzzles: FizzBuzz, factorials, digit manipulation and checksums.

use core::fmt;

/// Result of [`get_fizz_buzz`]: a word, or the number itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FizzBuzz {
    Number(i64),
    Fizz,
    Buzz,
    FizzBuzz,
}

impl fmt::Display for FizzBuzz {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(formatter, "{number}"),
            Self::Fizz => formatter.write_str("Fizz"),
            Self::Buzz => formatter.write_str("Buzz"),
            Self::FizzBuzz => formatter.write_str("FizzBuzz"),
        }
    }
}

/// Multiples of 3 are `Fizz`, of 5 `Buzz`, of both `FizzBuzz`.
pub fn get_fizz_buzz(num: i64) -> FizzBuzz {
    match (num % 3 == 0, num % 5 == 0) {
        (true, true) => FizzBuzz::FizzBuzz,
        (true, false) => FizzBuzz::Fizz,
        (false, true) => FizzBuzz::Buzz,
        (false, false) => FizzBuzz::Number(num),
    }
}

/// `n!`, or `None` once it no longer fits in a `u64` (from `21!` on).
pub fn get_factorial(n: u64) -> Option<u64> {
    (2..=n).try_fold(1_u64, u64::checked_mul)
}

/// Sum of the integers from `n1` to `n2` inclusive; zero when `n1 > n2`.
/// `None` if the sum does not fit in an `i64`.
pub fn get_sum_between_numbers(n1: i64, n2: i64) -> Option<i64> {
    if n1 > n2 {
        return Some(0);
    }
    // Both factors are below 2^64 in magnitude and their product below 2^127.
    let (low, high) = (i128::from(n1), i128::from(n2));
    i64::try_from((low + high) * (high - low + 1) / 2).ok()
}

/// Digits of `num` in reverse order, e.g. `12345 -> 54321`. Trailing zeros vanish.
/// `None` if the reversed number does not fit in a `u64`.
pub fn reverse_integer(num: u64) -> Option<u64> {
    let mut remaining = num;
    let mut reversed = 0_u64;
    while remaining > 0 {
        reversed = reversed.checked_mul(10)?.checked_add(remaining % 10)?;
        remaining /= 10;
    }
    Some(reversed)
}

/// Luhn checksum over the decimal digits of `ccn`.
pub fn is_credit_card_number(ccn: u64) -> bool {
    let mut remaining = ccn;
    let mut sum = 0_u64;
    let mut double = false;
    while remaining > 0 {
        let mut digit = remaining % 10;
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
        remaining /= 10;
    }
    sum % 10 == 0
}

/// Sum the digits repeatedly until a single digit remains.
pub fn get_digital_root(num: u64) -> u64 {
    let mut number = num;
    while number > 9 {
        let mut sum = 0;
        while number > 0 {
            sum += number % 10;
            number /= 10;
        }
        number = sum;
    }
    number
}

/// `num` written in base `radix`, using `0-9a-z` digits. `None` unless `2 <= radix <= 36`.
pub fn to_nary_string(num: u64, radix: u32) -> Option<String> {
    if !(2..=36).contains(&radix) {
        return None;
    }
    if num == 0 {
        return Some("0".to_owned());
    }
    let base = u64::from(radix);
    let mut remaining = num;
    let mut digits = Vec::new();
    while remaining > 0 {
        let digit = (remaining % base) as u32;
        digits.push(char::from_digit(digit, radix)?);
        remaining /= base;
    }
    Some(digits.iter().rev().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fizz_buzz_words() {
        let rendered: Vec<String> = [2, 3, 4, 5, 15, 20, 21]
            .into_iter()
            .map(|num| get_fizz_buzz(num).to_string())
            .collect();
        assert_eq!(rendered, ["2", "Fizz", "4", "Buzz", "FizzBuzz", "Buzz", "Fizz"]);
        assert_eq!(get_fizz_buzz(15), FizzBuzz::FizzBuzz);
        assert_eq!(get_fizz_buzz(7), FizzBuzz::Number(7));
    }

    #[test]
    fn factorials() {
        assert_eq!(get_factorial(0), Some(1));
        assert_eq!(get_factorial(1), Some(1));
        assert_eq!(get_factorial(5), Some(120));
        assert_eq!(get_factorial(10), Some(3_628_800));
        assert_eq!(get_factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(get_factorial(21), None);
    }

    #[test]
    fn sums_between_numbers() {
        assert_eq!(get_sum_between_numbers(1, 2), Some(3));
        assert_eq!(get_sum_between_numbers(5, 10), Some(45));
        assert_eq!(get_sum_between_numbers(-1, 1), Some(0));
        assert_eq!(get_sum_between_numbers(3, 1), Some(0));
        assert_eq!(get_sum_between_numbers(-4, -2), Some(-9));
    }

    #[test]
    fn sums_that_overflow_are_none() {
        assert_eq!(get_sum_between_numbers(i64::MAX - 1, i64::MAX), None);
        assert_eq!(get_sum_between_numbers(i64::MIN, i64::MIN + 1), None);
        assert_eq!(get_sum_between_numbers(i64::MAX, i64::MAX), Some(i64::MAX));
        assert_eq!(get_sum_between_numbers(i64::MIN, i64::MAX), Some(i64::MIN));
    }

    #[test]
    fn reversed_integers() {
        assert_eq!(reverse_integer(12345), Some(54321));
        assert_eq!(reverse_integer(1111), Some(1111));
        assert_eq!(reverse_integer(87354), Some(45378));
        assert_eq!(reverse_integer(34143), Some(34143));
        assert_eq!(reverse_integer(1200), Some(21));
        assert_eq!(reverse_integer(0), Some(0));
    }

    #[test]
    fn reversed_integers_that_overflow_are_none() {
        assert_eq!(reverse_integer(10_000_000_000_000_000_002), None);
        assert_eq!(reverse_integer(u64::MAX), None);
        assert_eq!(
            reverse_integer(10_000_000_000_000_000_001),
            Some(10_000_000_000_000_000_001)
        );
    }

    #[test]
    fn luhn_checks() {
        for valid in [
            79_927_398_713,
            4_012_888_888_881_881,
            5_123_456_789_012_346,
            378_282_246_310_005,
            371_449_635_398_431,
        ] {
            assert!(is_credit_card_number(valid), "{valid} should pass");
        }
        for invalid in [4_571_234_567_890_111, 5_436_468_789_016_589, 4_916_123_456_789_012] {
            assert!(!is_credit_card_number(invalid), "{invalid} should fail");
        }
    }

    #[test]
    fn digital_roots() {
        assert_eq!(get_digital_root(12345), 6);
        assert_eq!(get_digital_root(23456), 2);
        assert_eq!(get_digital_root(10000), 1);
        assert_eq!(get_digital_root(165_536), 8);
        assert_eq!(get_digital_root(7), 7);
    }

    #[test]
    fn radix_strings() {
        assert_eq!(to_nary_string(1024, 2).as_deref(), Some("10000000000"));
        assert_eq!(to_nary_string(6561, 3).as_deref(), Some("100000000"));
        assert_eq!(to_nary_string(365, 2).as_deref(), Some("101101101"));
        assert_eq!(to_nary_string(365, 3).as_deref(), Some("111112"));
        assert_eq!(to_nary_string(365, 4).as_deref(), Some("11231"));
        assert_eq!(to_nary_string(365, 10).as_deref(), Some("365"));
        assert_eq!(to_nary_string(255, 16).as_deref(), Some("ff"));
        assert_eq!(to_nary_string(0, 7).as_deref(), Some("0"));
        assert_eq!(to_nary_string(10, 1), None);
        assert_eq!(to_nary_string(10, 37), None);
    }
}
