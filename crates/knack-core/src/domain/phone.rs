use crate::error::CoreError;
use crate::rules::validation::validate_phone_digits;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated NANP number, stored as its 10 national digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        Ok(Self(validate_phone_digits(raw)?))
    }

    pub fn number(&self) -> &str {
        &self.0
    }

    pub fn area_code(&self) -> &str {
        &self.0[0..3]
    }

    pub fn exchange_code(&self) -> &str {
        &self.0[3..6]
    }

    pub fn subscriber_number(&self) -> &str {
        &self.0[6..]
    }

    /// `(223) 456-7890`
    pub fn pretty(&self) -> String {
        format!(
            "({}) {}-{}",
            self.area_code(),
            self.exchange_code(),
            self.subscriber_number()
        )
    }

    /// `+12234567890`
    pub fn e164(&self) -> String {
        format!("+1{}", self.0)
    }

    pub fn format(&self, format: PhoneFormat) -> String {
        match format {
            PhoneFormat::Digits => self.0.clone(),
            PhoneFormat::Pretty => self.pretty(),
            PhoneFormat::E164 => self.e164(),
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NanpCode {
    Area,
    Exchange,
}

impl fmt::Display for NanpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NanpCode::Area => f.write_str("area code"),
            NanpCode::Exchange => f.write_str("exchange code"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadingDigit {
    Zero,
    One,
}

impl fmt::Display for LeadingDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeadingDigit::Zero => f.write_str("zero"),
            LeadingDigit::One => f.write_str("one"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneFormat {
    #[default]
    Digits,
    Pretty,
    E164,
}
