use crate::domain::phone::{LeadingDigit, NanpCode};
use crate::error::CoreError;

pub const NATIONAL_DIGITS: usize = 10;
pub const MAX_DIGITS: usize = 11;
pub const COUNTRY_CODE: char = '1';

type Check = fn(&str) -> Result<(), CoreError>;

// Run in order against the stripped input; the first failure wins.
const INPUT_CHECKS: [Check; 4] = [
    check_letters,
    check_punctuation,
    check_digit_count,
    check_country_code,
];

// Run in order against the 10-digit national number.
const NATIONAL_CHECKS: [Check; 2] = [check_area_code, check_exchange_code];

/// Validates `raw` against NANP rules and returns the 10-digit national number.
///
/// Formatting characters (`+`, whitespace, `-`, `(`, `)`, `.`) are ignored. A
/// leading country code `1` is accepted on 11-digit input and dropped.
pub fn validate_phone_digits(raw: &str) -> Result<String, CoreError> {
    let stripped = strip_formatting(raw);
    for check in INPUT_CHECKS {
        check(&stripped)?;
    }

    let national = if stripped.len() == MAX_DIGITS {
        &stripped[1..]
    } else {
        stripped.as_str()
    };
    for check in NATIONAL_CHECKS {
        check(national)?;
    }

    Ok(national.to_string())
}

fn strip_formatting(raw: &str) -> String {
    raw.chars()
        .filter(|&ch| !is_formatting(ch))
        .collect()
}

fn is_formatting(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '+' | '-' | '(' | ')' | '.')
}

fn check_letters(value: &str) -> Result<(), CoreError> {
    if value.chars().any(char::is_alphabetic) {
        return Err(CoreError::LettersNotPermitted);
    }
    Ok(())
}

fn check_punctuation(value: &str) -> Result<(), CoreError> {
    if value.chars().any(|ch| !ch.is_ascii_digit()) {
        return Err(CoreError::PunctuationNotPermitted);
    }
    Ok(())
}

// Only ASCII digits remain by the time this runs, so byte length is digit count.
fn check_digit_count(value: &str) -> Result<(), CoreError> {
    if value.len() < NATIONAL_DIGITS {
        Err(CoreError::IncorrectDigitCount)
    } else if value.len() > MAX_DIGITS {
        Err(CoreError::TooManyDigits)
    } else {
        Ok(())
    }
}

fn check_country_code(value: &str) -> Result<(), CoreError> {
    if value.len() == MAX_DIGITS && !value.starts_with(COUNTRY_CODE) {
        return Err(CoreError::InvalidCountryCode);
    }
    Ok(())
}

fn check_area_code(national: &str) -> Result<(), CoreError> {
    check_code(NanpCode::Area, &national[0..3])
}

fn check_exchange_code(national: &str) -> Result<(), CoreError> {
    check_code(NanpCode::Exchange, &national[3..6])
}

fn check_code(code: NanpCode, digits: &str) -> Result<(), CoreError> {
    let digit = match digits.chars().next() {
        Some('0') => LeadingDigit::Zero,
        Some('1') => LeadingDigit::One,
        _ => return Ok(()),
    };
    Err(CoreError::InvalidCode { code, digit })
}

#[cfg(test)]
mod tests {
    use super::{strip_formatting, validate_phone_digits};
    use crate::domain::phone::{LeadingDigit, NanpCode};
    use crate::error::CoreError;

    fn reason(raw: &str) -> String {
        validate_phone_digits(raw).unwrap_err().to_string()
    }

    #[test]
    fn strip_formatting_drops_separators() {
        assert_eq!(strip_formatting("+1 (223) 456-7890"), "12234567890");
        assert_eq!(strip_formatting("223.456.7890\t"), "2234567890");
        assert_eq!(strip_formatting("523-@:!-7890"), "523@:!7890");
    }

    #[test]
    fn validate_accepts_common_formats() {
        for raw in [
            "(223) 456-7890",
            "223.456.7890",
            "223 456   7890   ",
            "12234567890",
            "+1 (223) 456-7890",
            "1 223 456 7890",
        ] {
            assert_eq!(validate_phone_digits(raw).unwrap(), "2234567890", "{raw}");
        }
    }

    #[test]
    fn validate_rejects_nine_digits() {
        assert_eq!(reason("123456789"), "incorrect number of digits");
    }

    #[test]
    fn validate_rejects_more_than_eleven_digits() {
        assert_eq!(reason("321234567890"), "more than 11 digits");
    }

    #[test]
    fn validate_rejects_eleven_digits_without_country_code() {
        assert_eq!(reason("22234567890"), "11 digits must start with 1");
    }

    #[test]
    fn validate_rejects_letters_before_counting() {
        assert_eq!(reason("523-abc-7890"), "letters not permitted");
        assert_eq!(reason("223.456.7890x1"), "letters not permitted");
    }

    #[test]
    fn validate_rejects_punctuation() {
        assert_eq!(reason("523-@:!-7890"), "punctuations not permitted");
    }

    #[test]
    fn validate_rejects_bad_area_code() {
        assert_eq!(reason("(023) 456-7890"), "area code cannot start with zero");
        assert_eq!(reason("(123) 456-7890"), "area code cannot start with one");
        assert_eq!(reason("1 (023) 456-7890"), "area code cannot start with zero");
        assert_eq!(reason("1 (123) 456-7890"), "area code cannot start with one");
    }

    #[test]
    fn validate_rejects_bad_exchange_code() {
        assert_eq!(
            validate_phone_digits("(223) 056-7890").unwrap_err(),
            CoreError::InvalidCode {
                code: NanpCode::Exchange,
                digit: LeadingDigit::Zero,
            }
        );
        assert_eq!(reason("(223) 156-7890"), "exchange code cannot start with one");
        assert_eq!(reason("1 (223) 056-7890"), "exchange code cannot start with zero");
    }

    #[test]
    fn validate_reports_area_code_before_exchange_code() {
        assert_eq!(reason("123-056-7890"), "area code cannot start with one");
    }
}
