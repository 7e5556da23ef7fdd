//! Output formatting for the CLI: text and JSON renderings of tokens,
//! syntax trees and compile errors.

use serde::Serialize;
use vdsh_lang::error::VdshError;

/// Output format selected with `-o`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

/// Parse the output mode from the `-o` argument.
pub fn parse_output_mode(format: Option<&str>) -> Result<OutputMode, String> {
    match format {
        None | Some("text") => Ok(OutputMode::Text),
        Some("json") => Ok(OutputMode::Json),
        Some(other) => Err(format!("Invalid output format: '{}'. Use: text, json", other)),
    }
}

/// Debug-render a stage result, on one line or pretty-printed.
pub fn format_debug<T: std::fmt::Debug>(value: &T, oneline: bool) -> String {
    if oneline {
        format!("{:?}", value)
    } else {
        format!("{:#?}", value)
    }
}

/// JSON-render a stage result.
pub fn format_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Failed to serialize output: {}", e))
}

#[derive(Serialize)]
struct JsonError<'a> {
    error: JsonErrorBody<'a>,
}

#[derive(Serialize)]
struct JsonErrorBody<'a> {
    kind: &'a str,
    message: &'a str,
    location: Option<JsonLocation>,
}

#[derive(Serialize)]
struct JsonLocation {
    row: u32,
    column: u32,
}

/// JSON error object with the message and source location, where known.
pub fn format_error_json(error: &VdshError) -> String {
    let body = JsonError {
        error: JsonErrorBody {
            kind: error.kind(),
            message: error.message(),
            location: error.position().map(|p| JsonLocation {
                row: p.row,
                column: p.column,
            }),
        },
    };

    // Serializing these borrowed fields cannot fail.
    serde_json::to_string(&body).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vdsh_lang::lexer::Position;

    #[test]
    fn output_mode_defaults_to_text() {
        assert_eq!(parse_output_mode(None), Ok(OutputMode::Text));
    }

    #[test]
    fn output_mode_json() {
        assert_eq!(parse_output_mode(Some("json")), Ok(OutputMode::Json));
    }

    #[test]
    fn output_mode_invalid() {
        assert!(parse_output_mode(Some("xml")).is_err());
    }

    #[test]
    fn error_json_includes_location() {
        let error = VdshError::lex("Unexpected character '@'", Position { row: 2, column: 5 });
        assert_eq!(
            format_error_json(&error),
            r#"{"error":{"kind":"LexError","message":"Unexpected character '@'","location":{"row":2,"column":5}}}"#
        );
    }

    #[test]
    fn error_json_without_location() {
        let error = VdshError::parse_no_position("broken");
        assert_eq!(
            format_error_json(&error),
            r#"{"error":{"kind":"ParseError","message":"broken","location":null}}"#
        );
    }
}
