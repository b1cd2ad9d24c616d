mod report;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use dni_check::{DniValidator, DniValidatorConfig, Presenter, ValidationResult, WriterPresenter};
use report::Report;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "validate-dni")]
#[command(about = "Check a Spanish DNI number against its check letter.")]
struct CommandLine {
    /// The 8-digit DNI number
    #[arg(allow_negative_numbers = true)]
    number: String,
    /// The check letter (case-insensitive)
    letter: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// JSON validator config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<DniValidatorConfig> {
    let Some(path) = path else {
        return Ok(DniValidatorConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = DniValidatorConfig::from_json(&json)
        .with_context(|| format!("failed to load config file {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded validator config");
    Ok(config)
}

/// Exit status when the tool itself fails (config, I/O). Distinct from the three
/// validation outcomes.
const FAILURE_EXIT_CODE: u8 = 3;

fn exit_code(result: &ValidationResult) -> u8 {
    match result {
        ValidationResult::Valid => 0,
        ValidationResult::Invalid => 1,
        ValidationResult::Malformed(_) => 2,
    }
}

fn run(commands: &CommandLine) -> anyhow::Result<ValidationResult> {
    let config = load_config(commands.config.as_deref())?;
    let validator = DniValidator::new(&config);
    let check = validator.check(&commands.number, &commands.letter);
    tracing::debug!(
        number = check.number,
        letter = check.letter,
        result = check.result.kind(),
        "validated DNI"
    );

    match commands.format {
        OutputFormat::Json => {
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer(&mut stdout, &Report::from(&check))?;
            writeln!(stdout)?;
            stdout.flush()?;
        }
        OutputFormat::Text if check.result.is_valid() => {
            WriterPresenter::new(std::io::stdout().lock()).present_result(&check.result)?;
        }
        OutputFormat::Text => {
            WriterPresenter::new(std::io::stderr().lock()).present_result(&check.result)?;
        }
    }

    Ok(check.result)
}

fn main() -> ExitCode {
    let commands = CommandLine::parse();
    init_tracing(commands.verbose);

    match run(&commands) {
        Ok(result) => ExitCode::from(exit_code(&result)),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;
    use dni_check::validate;

    #[test]
    fn verify_command_line() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn exit_codes_follow_outcome() {
        assert_eq!(exit_code(&validate("00000023", "T")), 0);
        assert_eq!(exit_code(&validate("00000023", "R")), 1);
        assert_eq!(exit_code(&validate("0000002", "T")), 2);
    }

    #[test]
    fn parses_positionals_and_flags() {
        let commands =
            CommandLine::try_parse_from(["validate-dni", "--format", "json", "12345678", "z"])
                .unwrap();
        assert_eq!(commands.number, "12345678");
        assert_eq!(commands.letter, "z");
        assert_eq!(commands.format, OutputFormat::Json);
        assert_eq!(commands.config, None);
        assert_eq!(commands.verbose, 0);
    }

    #[test]
    fn hyphenated_number_reaches_the_validator() {
        let commands = CommandLine::try_parse_from(["validate-dni", "-1234567", "T"]).unwrap();
        assert_eq!(commands.number, "-1234567");
        assert_eq!(exit_code(&validate(&commands.number, &commands.letter)), 2);
    }

    #[test]
    fn missing_letter_is_a_usage_error() {
        assert!(CommandLine::try_parse_from(["validate-dni", "12345678"]).is_err());
    }

    #[test]
    fn no_config_file_means_defaults() {
        assert_eq!(load_config(None).unwrap(), DniValidatorConfig::default());
    }

    #[test]
    fn unreadable_config_file_is_an_error() {
        let missing = Path::new("/nonexistent/validate-dni.json");
        let err = load_config(Some(missing)).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn tool_failure_does_not_look_like_an_outcome() {
        let commands = CommandLine::try_parse_from([
            "validate-dni",
            "--config",
            "/nonexistent/validate-dni.json",
            "12345678",
            "Z",
        ])
        .unwrap();
        assert!(run(&commands).is_err());
        for result in [
            validate("00000023", "T"),
            validate("00000023", "R"),
            validate("0000002", "T"),
        ] {
            assert_ne!(exit_code(&result), FAILURE_EXIT_CODE);
        }
    }
}
