use std::fmt;

use pgmstego::pgm::{ErrorKind, PgmError};
use pgmstego::{ConfigError, PipelineError};

// Pipeline failures exit with their stage's negative code; see `Stage::exit_code`.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn pipeline_error(err: PipelineError) -> CliError {
    CliError::new(err.exit_code(), err.to_string())
}

pub fn config_error(err: ConfigError) -> CliError {
    CliError::new(USAGE, err.to_string())
}

pub fn pgm_error(context: &str, err: PgmError) -> CliError {
    let code = match &err {
        PgmError::Open { source, .. } if source.kind() == std::io::ErrorKind::PermissionDenied => {
            PERMISSION_DENIED
        }
        _ => match err.kind() {
            ErrorKind::Format | ErrorKind::TruncatedData | ErrorKind::DimensionMismatch => {
                DATA_INVALID
            }
            ErrorKind::Io | ErrorKind::AllocationFailure => FAILURE,
        },
    };
    CliError::new(code, format!("{context}: {err}"))
}
