use crate::domain::phone::{LeadingDigit, NanpCode};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Cannot make change for negative value")]
    NegativeAmount,
    #[error("No coins small enough to make change")]
    NoCoinSmallEnough,
    #[error("No combination can add up to target")]
    NoCombination,
    #[error("invalid coin denomination: {0}")]
    InvalidDenomination(i64),
    #[error("amount too large: {0}")]
    AmountTooLarge(i64),
    #[error("incorrect number of digits")]
    IncorrectDigitCount,
    #[error("more than 11 digits")]
    TooManyDigits,
    #[error("11 digits must start with 1")]
    InvalidCountryCode,
    #[error("letters not permitted")]
    LettersNotPermitted,
    #[error("punctuations not permitted")]
    PunctuationNotPermitted,
    #[error("{code} cannot start with {digit}")]
    InvalidCode { code: NanpCode, digit: LeadingDigit },
}
