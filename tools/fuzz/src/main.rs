use afl::fuzz;
use dni_check::{
    compute_check_letter, validate, validate_combined, SpanishDniChecksum, ValidationResult,
    Validator,
};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    let i = input.iter().position(|b| *b == b',')?;
    Some((&input[0..i], &input[i + 1..]))
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (number, letter) = split_bytes_once(bytes)?;

    let number_str = std::str::from_utf8(number).ok()?;
    let letter_str = std::str::from_utf8(letter).ok()?;

    run_fuzz(number_str, letter_str);

    Some(())
}

fn run_fuzz(number: &str, letter: &str) {
    #[cfg(feature = "manual_test")]
    {
        println!("Number: {:?}", number);
        println!("Letter: {:?}", letter);
    }

    let result = validate(number, letter);

    #[cfg(feature = "manual_test")]
    println!("Result: {:?}", result);

    let well_formed = number.len() == 8 && number.bytes().all(|b| b.is_ascii_digit());
    match result {
        ValidationResult::Malformed(_) => assert!(!well_formed),
        ValidationResult::Valid | ValidationResult::Invalid => {
            assert!(well_formed);
            let expected = compute_check_letter(number.parse().unwrap());
            assert_eq!(
                result.is_valid(),
                letter.to_uppercase() == expected.to_string()
            );
        }
    }

    if letter.is_ascii() {
        assert_eq!(result, validate(number, &letter.to_ascii_lowercase()));
    }

    let combined = format!("{number}{letter}");
    assert_eq!(
        SpanishDniChecksum.is_valid_match(&combined),
        validate_combined(&combined).is_valid()
    );
}
