use crate::validation::ValidationResult;
use crate::Labels;
use metrics::{counter, Counter};

pub const VALIDATIONS_METRIC: &str = "dni.validations";
pub const RESULT_LABEL: &str = "result";

pub struct ValidatorMetrics {
    valid: Counter,
    invalid: Counter,
    malformed: Counter,
}

impl ValidatorMetrics {
    pub fn new(labels: &Labels) -> Self {
        let validations = |result: &str| {
            counter!(
                VALIDATIONS_METRIC,
                labels.clone_with_label(RESULT_LABEL, result)
            )
        };
        ValidatorMetrics {
            valid: validations("valid"),
            invalid: validations("invalid"),
            malformed: validations("malformed"),
        }
    }

    pub fn record(&self, result: &ValidationResult) {
        match result {
            ValidationResult::Valid => self.valid.increment(1),
            ValidationResult::Invalid => self.invalid.increment(1),
            ValidationResult::Malformed(_) => self.malformed.increment(1),
        }
    }
}

impl Default for ValidatorMetrics {
    fn default() -> Self {
        ValidatorMetrics::new(&Labels::default())
    }
}
