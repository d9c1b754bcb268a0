//! # CLI Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in cutlist                                │
//! │                                                                         │
//! │  Command Function  ──►  Result<T, CliError>                             │
//! │         │                                                               │
//! │         ├── Catalog/session file unreadable ─► CliError::Io             │
//! │         ├── File is not valid JSON ──────────► CliError::Json           │
//! │         ├── Ledger/pricing failure ──────────► CliError::Core           │
//! │         └── Success ─────────────────────────► JSON on stdout           │
//! │                                                                         │
//! │  main(): {"code": "NOT_FOUND", "message": "..."} on stdout,             │
//! │          error!(...) on stderr, exit code ≠ 0                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::Write;
use std::path::PathBuf;

use cutlist_core::CoreError;
use serde::Serialize;
use thiserror::Error;

/// Error returned from commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error body printed on stdout when a command fails.
///
/// ## JSON Format
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Entry not found: 7f1c"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Machine-readable error code for scripts
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Writes the body as pretty JSON followed by a newline.
    pub fn write_to(&self, out: &mut impl Write) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }
}

impl From<&CliError> for ErrorResponse {
    fn from(err: &CliError) -> Self {
        ErrorResponse {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// Machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown entry or material id
    NotFound,

    /// Material with a non-positive sheet area or an unusable price
    InvalidMaterial,

    /// Bad basis, duplicate ids, inconsistent or malformed snapshot
    InvalidInput,

    /// Catalog or session file could not be read or written
    StorageError,

    /// Anything else
    Internal,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InvalidMaterial => "INVALID_MATERIAL",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        CliError::Json {
            path: path.into(),
            source,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CliError::Core(err) => match err {
                CoreError::EntryNotFound(_) | CoreError::MaterialNotFound(_) => ErrorCode::NotFound,
                CoreError::InvalidMaterial { .. } | CoreError::InvalidMaterialPrice { .. } => {
                    ErrorCode::InvalidMaterial
                }
                CoreError::InvalidBasis(_)
                | CoreError::DuplicateEntry(_)
                | CoreError::InconsistentEntry(_)
                | CoreError::Snapshot(_) => ErrorCode::InvalidInput,
            },
            CliError::Io { .. } => ErrorCode::StorageError,
            CliError::Json { .. } => ErrorCode::InvalidInput,
            CliError::Output(_) => ErrorCode::Internal,
            CliError::Config(_) => ErrorCode::InvalidInput,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self.code() {
            ErrorCode::NotFound => 3,
            ErrorCode::InvalidMaterial | ErrorCode::InvalidInput => 2,
            ErrorCode::StorageError | ErrorCode::Internal => 1,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_codes() {
        let err = CliError::from(CoreError::EntryNotFound("x".to_string()));
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.to_string(), "Entry not found: x");

        let err = CliError::from(CoreError::InvalidMaterial {
            material_id: "m".to_string(),
            width: 0.0,
            height: 0.0,
        });
        assert_eq!(err.code().as_str(), "INVALID_MATERIAL");
    }

    #[test]
    fn test_io_error_message_names_path() {
        let err = CliError::io(
            "/tmp/catalog.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.code(), ErrorCode::StorageError);
        assert!(err.to_string().contains("/tmp/catalog.json"));
    }

    #[test]
    fn test_error_response_json() {
        let err = CliError::from(CoreError::InconsistentEntry("7f1c".to_string()));
        let value = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(value["code"], ErrorCode::InvalidInput.as_str());
        assert_eq!(value["message"], "Inconsistent entry in snapshot: 7f1c");

        let mut out = Vec::new();
        ErrorResponse::from(&err).write_to(&mut out).unwrap();
        assert!(out.ends_with(b"}\n"));
        let written: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(written, value);

        let err = CliError::from(CoreError::InvalidMaterialPrice {
            material_id: "gold".to_string(),
            price: 1e300,
        });
        let value = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(value["code"], "INVALID_MATERIAL");
        assert_eq!(err.exit_code(), 2);
    }
}
