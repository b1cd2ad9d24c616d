use crate::secondary_validation::Validator;
use crate::validation::{CheckLetter, DniNumber};

pub struct SpanishDniChecksum;

/// Check letters indexed by `number % 23`.
pub const LETTER_TABLE: [char; 23] = [
    'T', 'R', 'W', 'A', 'G', 'M', 'Y', 'F', 'P', 'D', 'X', 'B', 'N', 'J', 'Z', 'S', 'Q', 'V', 'H',
    'L', 'C', 'K', 'E',
];

pub const DNI_LENGTH: usize = 9;
pub const NUMBER_LENGTH: usize = 8;

/// Returns the check letter for a DNI number.
///
/// Defined for every `u32`, so the full 8-digit range `0..=99_999_999` is covered.
pub fn compute_check_letter(dni: u32) -> CheckLetter {
    CheckLetter::from_table_index((dni % 23) as usize)
}

impl Validator for SpanishDniChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        /*
         * Spanish DNI format:
         * 8 digits followed by a letter
         * The letter is calculated by taking the number modulo 23 and using it as an index
         * into LETTER_TABLE. The letter is compared case-insensitively.
         */
        if candidate.len() != DNI_LENGTH || !candidate.is_char_boundary(NUMBER_LENGTH) {
            return false;
        }

        let (number_part, letter_part) = candidate.split_at(NUMBER_LENGTH);

        match DniNumber::parse(number_part) {
            Ok(number) => number.check_letter().matches(letter_part),
            Err(_) => false,
        }
    }
}
