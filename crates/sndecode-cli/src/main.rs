use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use sndecode_core::{DecodedSerial, FormatIssue, ValidationError};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("SNDECODE_BUILD_COMMIT"),
    ", built ",
    env!("SNDECODE_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "sndecode")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decode a manufacturer serial number into location, date, id and model.",
    long_about = None,
    after_help = "Examples:\n  sndecode C02051AABCD\n  sndecode dmphf9q1dfhw --json --pretty"
)]
struct Cli {
    /// Serial number (11 or 12 letters/digits, case-insensitive)
    serial: Option<String>,

    /// Print the decoded record as JSON
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pretty: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(serial) = cli.serial else {
        eprintln!("{}", Cli::command().render_usage());
        return ExitCode::from(1);
    };

    match cmd_decode(&serial, cli.json, cli.pretty) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        let hint = match &err {
            ValidationError::InvalidFormat { issue, .. } => issue_hint(issue),
            ValidationError::UnsupportedFormat { .. } => {
                "expected an 11-character (legacy) or 12-character (modern) serial number"
            }
        };
        CliError::new(err.to_string(), Some(hint.to_string()))
    }
}

fn issue_hint(issue: &FormatIssue) -> &'static str {
    match issue {
        FormatIssue::Empty | FormatIssue::NonAlphanumeric { .. } => {
            "serial numbers contain only letters A-Z and digits 0-9"
        }
        FormatIssue::YearNotDigit { .. }
        | FormatIssue::WeekNotNumeric { .. }
        | FormatIssue::WeekOutOfRange { .. } => {
            "legacy serials encode the year digit at position 3 and the week (01-53) at positions 4-5"
        }
        FormatIssue::UnknownSemesterCode { .. } | FormatIssue::UnknownWeekCode { .. } => {
            "modern serials never use A, B, E, I, O or U in the date codes (nor 0, S or Z for the week)"
        }
        FormatIssue::Truncated { .. } => "check the serial number for missing characters",
    }
}

fn cmd_decode(input: &str, json: bool, pretty: bool) -> Result<(), CliError> {
    let serial = sndecode_core::decode(input)?;
    if json {
        println!("{}", serialize_serial(&serial, pretty)?);
    } else {
        print!("{}", render_text(&serial));
    }
    Ok(())
}

fn serialize_serial(serial: &DecodedSerial, pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(serial).context("JSON serialization failed")
    } else {
        serde_json::to_string(serial).context("JSON serialization failed")
    }
}

fn render_text(serial: &DecodedSerial) -> String {
    format!(
        "Serial Number: {}\n\
         Manufacturing Location: {}\n\
         Year of Manufacture: {}\n\
         Week of Manufacture: {}\n\
         Unique identifier: {}\n\
         Model Number: {}\n",
        serial,
        serial.location(),
        serial.year(),
        serial.week(),
        serial.id(),
        serial.model()
    )
}

#[cfg(test)]
mod tests {
    use super::{CliError, render_text};

    #[test]
    fn text_output_has_one_field_per_line() {
        let serial = sndecode_core::decode("C02051AABCD").expect("decode");
        let text = render_text(&serial);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Serial Number: C02051AABCD",
                "Manufacturing Location: C0",
                "Year of Manufacture: 2002",
                "Week of Manufacture: 5",
                "Unique identifier: 1AA",
                "Model Number: BCD",
            ]
        );
    }

    #[test]
    fn validation_errors_carry_kind_and_hint() {
        let err: CliError = sndecode_core::decode("ABC").unwrap_err().into();
        assert!(err.message.starts_with("unsupported format"));
        assert!(err.hint.expect("hint").contains("11-character"));

        let err: CliError = sndecode_core::decode("C07A10000000").unwrap_err().into();
        assert!(err.message.starts_with("invalid format"));
        assert!(err.hint.expect("hint").contains("date codes"));
    }
}
