use std::process::ExitCode;

use ps_parser::error::ParserError;
use serde::Serialize;

/// Terminal failure classes and their process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Failure {
    Usage = 1,
    NotFound = 2,
    Syntax = 3,
    Io = 4,
}

impl Failure {
    pub fn of(err: &ParserError) -> Self {
        match err {
            ParserError::NotFound { .. } => Self::NotFound,
            ParserError::Syntax { .. } => Self::Syntax,
            ParserError::Unreadable { .. } | ParserError::ParseFailed { .. } => Self::Io,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<Failure> for ExitCode {
    fn from(failure: Failure) -> Self {
        ExitCode::from(failure.code())
    }
}

/// Single-line JSON error object written to stderr.
#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorPayload {
    pub fn usage(usage: &str) -> Self {
        Self {
            error: format!("Usage: {usage}"),
            path: None,
        }
    }

    pub fn from_error(err: &ParserError) -> Self {
        let path = match err {
            ParserError::NotFound { .. } => None,
            _ => Some(err.path().display().to_string()),
        };
        Self {
            error: err.to_string(),
            path,
        }
    }

    pub fn emit(&self) {
        match serde_json::to_string(self) {
            Ok(line) => eprintln!("{line}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
