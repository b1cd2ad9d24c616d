use crate::secondary_validation::{compute_check_letter, DNI_LENGTH, LETTER_TABLE, NUMBER_LENGTH};
use std::fmt;
use strum::IntoStaticStr;
use thiserror::Error;

/// Largest number an 8-digit DNI can hold.
pub const MAX_DNI_NUMBER: u32 = 99_999_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedDniError {
    #[error("DNI must have 8 digits")]
    InvalidNumberFormat,
}

/// The numeric part of a DNI, always in `0..=99_999_999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DniNumber(u32);

impl DniNumber {
    /// Accepts exactly 8 ASCII digits. Leading zeros are significant for the length
    /// check only.
    pub fn parse(raw_number: &str) -> Result<Self, MalformedDniError> {
        if raw_number.len() != NUMBER_LENGTH || !raw_number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MalformedDniError::InvalidNumberFormat);
        }

        let value = raw_number
            .bytes()
            .fold(0u32, |acc, digit| acc * 10 + u32::from(digit - b'0'));
        Ok(DniNumber(value))
    }

    pub fn new(value: u32) -> Option<Self> {
        (value <= MAX_DNI_NUMBER).then_some(DniNumber(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn check_letter(&self) -> CheckLetter {
        compute_check_letter(self.0)
    }
}

impl fmt::Display for DniNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08}", self.0)
    }
}

/// One of the 23 letters of [`LETTER_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckLetter(char);

impl CheckLetter {
    pub(crate) fn from_table_index(index: usize) -> Self {
        CheckLetter(LETTER_TABLE[index])
    }

    pub fn as_char(&self) -> char {
        self.0
    }

    /// Case-insensitive comparison against raw user input. Anything other than a single
    /// character equal to this letter (after uppercasing) does not match.
    pub fn matches(&self, raw_letter: &str) -> bool {
        let mut normalized = raw_letter.chars().flat_map(char::to_uppercase);
        normalized.next() == Some(self.0) && normalized.next().is_none()
    }
}

impl fmt::Display for CheckLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ValidationResult {
    /// The letter matches the number.
    Valid,
    /// Well-formed number, wrong letter.
    Invalid,
    /// The number is not 8 ASCII digits; the letter was not looked at.
    Malformed(MalformedDniError),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Short identifier, used as a metric label value and in machine-readable output.
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    pub fn message(&self) -> String {
        match self {
            ValidationResult::Valid => "DNI is valid.".to_string(),
            ValidationResult::Invalid => "DNI is not valid.".to_string(),
            ValidationResult::Malformed(reason) => reason.to_string(),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Checks a DNI number and its check letter. Never panics, whatever the input.
pub fn validate(raw_number: &str, raw_letter: &str) -> ValidationResult {
    validate_parsed(DniNumber::parse(raw_number), raw_letter)
}

pub(crate) fn validate_parsed(
    number: Result<DniNumber, MalformedDniError>,
    raw_letter: &str,
) -> ValidationResult {
    match number {
        Ok(number) if number.check_letter().matches(raw_letter) => ValidationResult::Valid,
        Ok(_) => ValidationResult::Invalid,
        Err(err) => ValidationResult::Malformed(err),
    }
}

/// Same as [`validate`], for the 9-character form `12345678Z`.
pub fn validate_combined(raw: &str) -> ValidationResult {
    if raw.len() != DNI_LENGTH || !raw.is_char_boundary(NUMBER_LENGTH) {
        return ValidationResult::Malformed(MalformedDniError::InvalidNumberFormat);
    }
    let (number, letter) = raw.split_at(NUMBER_LENGTH);
    validate(number, letter)
}
