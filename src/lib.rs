// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod observability;
mod presentation;
mod secondary_validation;
mod validation;
mod validator;

// This is the public API of the DNI check library
pub use observability::labels::Labels;
pub use presentation::{Presenter, WriterPresenter};
pub use secondary_validation::{compute_check_letter, SpanishDniChecksum, Validator, LETTER_TABLE};
pub use validation::{
    validate, validate_combined, CheckLetter, DniNumber, MalformedDniError, ValidationResult,
    MAX_DNI_NUMBER,
};
pub use validator::{
    config::{ConfigError, DniValidatorConfig},
    metrics::{RESULT_LABEL, VALIDATIONS_METRIC},
    DniCheck, DniValidator,
};
