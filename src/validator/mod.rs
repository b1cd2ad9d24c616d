pub mod config;
pub mod metrics;

use crate::secondary_validation::compute_check_letter;
use crate::validation::{validate_parsed, CheckLetter, DniNumber, ValidationResult};
use self::config::DniValidatorConfig;
use self::metrics::ValidatorMetrics;

/// The inputs a validation ran on, after normalization, and what it found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DniCheck<'a> {
    pub number: &'a str,
    pub letter: &'a str,
    /// Set whenever `number` is well-formed.
    pub expected_letter: Option<CheckLetter>,
    pub result: ValidationResult,
}

/// Validates DNI numbers against their check letter and reports each outcome to the
/// installed metrics recorder.
///
/// Metric handles are resolved on construction, so build the validator once and reuse it.
pub struct DniValidator {
    trim_input: bool,
    metrics: ValidatorMetrics,
}

impl DniValidator {
    pub fn new(config: &DniValidatorConfig) -> Self {
        DniValidator {
            trim_input: config.trim_input,
            metrics: ValidatorMetrics::new(&config.labels),
        }
    }

    pub fn check_letter(&self, dni: u32) -> CheckLetter {
        compute_check_letter(dni)
    }

    pub fn validate(&self, raw_number: &str, raw_letter: &str) -> ValidationResult {
        self.check(raw_number, raw_letter).result
    }

    /// Like [`DniValidator::validate`], keeping the normalized inputs and the expected
    /// letter alongside the result.
    pub fn check<'a>(&self, raw_number: &'a str, raw_letter: &'a str) -> DniCheck<'a> {
        let (number, letter) = if self.trim_input {
            (raw_number.trim(), raw_letter.trim())
        } else {
            (raw_number, raw_letter)
        };

        let parsed = DniNumber::parse(number);
        let check = DniCheck {
            number,
            letter,
            expected_letter: parsed.ok().map(|number| number.check_letter()),
            result: validate_parsed(parsed, letter),
        };
        self.metrics.record(&check.result);
        check
    }
}

impl Default for DniValidator {
    fn default() -> Self {
        DniValidator::new(&DniValidatorConfig::default())
    }
}
