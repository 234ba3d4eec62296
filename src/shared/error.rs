use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let callers tell bad input data apart from bad arguments
/// and from everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the relation table was trimmed and written
    Success = 0,
    /// The relation table contains data the trimmer refuses (e.g. an invalid direction)
    InvalidInputData = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O error, malformed config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidInputData => write!(f, "Invalid Input Data (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for relation trimming.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Every variant that can reach the user carries a hint line.
#[derive(Debug, Error)]
pub enum TrimError {
    /// A row's direction is neither +1 nor -1. The whole batch is rejected.
    #[error("Invalid direction {value} in row {row}: expected 1 (forward) or -1 (reverse)\n\n💡 Hint: Fix the relation table; no rows were trimmed")]
    InvalidDirection { row: usize, value: i64 },

    #[error("Relation table not found: {path}\n\n💡 Hint: {suggestion}")]
    RelationTableNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse relation table: {path}\nDetails: {details}\n\n💡 Hint: Rows need primary_code, related_code and direction columns")]
    RelationTableParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for value objects and request options
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl TrimError {
    /// Maps an error to the exit code the CLI reports for it
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TrimError::InvalidDirection { .. } => ExitCode::InvalidInputData,
            _ => ExitCode::ApplicationError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidInputData.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidInputData),
            "Invalid Input Data (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_invalid_direction_display() {
        let error = TrimError::InvalidDirection { row: 4, value: 0 };
        let display = format!("{}", error);
        assert!(display.contains("Invalid direction 0 in row 4"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_invalid_direction_maps_to_input_data_exit_code() {
        let error = TrimError::InvalidDirection { row: 0, value: 2 };
        assert_eq!(error.exit_code(), ExitCode::InvalidInputData);
    }

    #[test]
    fn test_other_errors_map_to_application_exit_code() {
        let error = TrimError::Validation {
            message: "bad".to_string(),
        };
        assert_eq!(error.exit_code(), ExitCode::ApplicationError);
    }

    #[test]
    fn test_relation_table_not_found_display() {
        let error = TrimError::RelationTableNotFound {
            path: PathBuf::from("/data/relations.json"),
            suggestion: "Check the path".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Relation table not found"));
        assert!(display.contains("/data/relations.json"));
        assert!(display.contains("Check the path"));
    }

    #[test]
    fn test_relation_table_parse_error_display() {
        let error = TrimError::RelationTableParseError {
            path: PathBuf::from("/data/relations.json"),
            details: "row 3: missing field `direction`".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse relation table"));
        assert!(display.contains("row 3"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = TrimError::FileWriteError {
            path: PathBuf::from("/test/output.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_security_error_display() {
        let error = TrimError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("Use a regular file instead"));
    }
}
