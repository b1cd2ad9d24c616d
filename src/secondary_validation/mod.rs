mod spain_dni_checksum;

pub use crate::secondary_validation::spain_dni_checksum::{
    compute_check_letter, SpanishDniChecksum, DNI_LENGTH, LETTER_TABLE, NUMBER_LENGTH,
};

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}
