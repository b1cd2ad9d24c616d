use dni_check::DniCheck;
use serde::Serialize;

/// Machine-readable outcome of one validation.
#[derive(Serialize, Debug, PartialEq)]
pub struct Report<'a> {
    pub number: &'a str,
    pub letter: &'a str,
    pub result: &'static str,
    /// Present whenever the number itself is well-formed.
    pub expected_letter: Option<String>,
    pub message: String,
}

impl<'a> From<&DniCheck<'a>> for Report<'a> {
    fn from(check: &DniCheck<'a>) -> Self {
        Report {
            number: check.number,
            letter: check.letter,
            result: check.result.kind(),
            expected_letter: check.expected_letter.map(|letter| letter.to_string()),
            message: check.result.message(),
        }
    }
}
