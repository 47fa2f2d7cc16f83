//! Turns validation results into the single line the user sees.

use std::error::Error;
use std::io::{self, Write};

use crate::licensing::{Outcome, ValidationError};

/// Any completed validation, valid or not.
pub const EXIT_SUCCESS: u8 = 0;
/// The validation never produced a result.
pub const EXIT_FAILURE: u8 = 1;

/// Placeholder printed when a valid key came back without its license payload.
pub const MISSING_LICENSE_ID: &str = "<missing>";

pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Valid { code, license } => format!("License key is valid: code={code} id={}", license.id),
        Outcome::ValidWithoutLicense { code } => {
            format!("License key is valid: code={code} id={MISSING_LICENSE_ID}")
        }
        Outcome::Invalid { code } => format!("License key is invalid: code={code}"),
    }
}

pub fn write_outcome<W: Write>(mut writer: W, outcome: &Outcome) -> io::Result<()> {
    if let Outcome::ValidWithoutLicense { code } = outcome {
        log::warn!("Licensing API reported the key as valid ({code}) but sent no license data");
    }
    writeln!(writer, "{}", format_outcome(outcome))
}

/// The error and its whole cause chain on one line, e.g.
/// `error sending request for url (...): client error (Connect): tcp connect error: Connection refused`.
pub fn format_error(error: &ValidationError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

pub fn write_error<W: Write>(mut writer: W, error: &ValidationError) -> io::Result<()> {
    writeln!(writer, "{}", format_error(error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::licensing::License;

    #[test]
    fn test_valid_line() {
        let outcome = Outcome::Valid {
            code: String::from("VALID"),
            license: License {
                license_type: String::from("foo"),
                id: String::from("abc-123"),
            },
        };
        assert_eq!(format_outcome(&outcome), "License key is valid: code=VALID id=abc-123");
    }

    #[test]
    fn test_invalid_line() {
        let outcome = Outcome::Invalid {
            code: String::from("NOT_FOUND"),
        };
        assert_eq!(format_outcome(&outcome), "License key is invalid: code=NOT_FOUND");
    }

    #[test]
    fn test_valid_without_license_line() {
        let outcome = Outcome::ValidWithoutLicense {
            code: String::from("VALID"),
        };
        assert_eq!(format_outcome(&outcome), "License key is valid: code=VALID id=<missing>");
    }

    #[test]
    fn test_write_outcome_appends_newline() {
        let mut output = Vec::new();
        write_outcome(
            &mut output,
            &Outcome::Invalid {
                code: String::from("EXPIRED"),
            },
        )
        .unwrap();
        assert_eq!(output, b"License key is invalid: code=EXPIRED\n");
    }

    #[test]
    fn test_write_error_api() {
        let mut output = Vec::new();
        let error = ValidationError::Api {
            status: 500,
            body: String::from("Internal Server Error"),
        };
        write_error(&mut output, &error).unwrap();
        assert_eq!(output, b"An API error occurred: Internal Server Error\n");
    }

    #[test]
    fn test_format_error_does_not_repeat_cause() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let cause = json_error.to_string();
        let message = format_error(&ValidationError::Decode(json_error));
        assert_eq!(message, format!("Invalid response from the licensing API: {cause}"));
    }

    #[test]
    fn test_format_error_cancelled() {
        assert_eq!(format_error(&ValidationError::Cancelled), "License validation cancelled");
    }
}
