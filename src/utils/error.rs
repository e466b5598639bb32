use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Missing input filename argument")]
    MissingArgument,

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unexpected filename '{filename}': expected a review, user or business dataset")]
    UnsupportedFileKind { filename: String },

    #[error("Malformed record on line {line}: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Data,
    System,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::MissingArgument
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::UnsupportedFileKind { .. } => ErrorCategory::Usage,
            EtlError::MalformedRecord { .. } => ErrorCategory::Data,
            EtlError::IoError(_) | EtlError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            EtlError::MissingArgument | EtlError::InvalidConfigValueError { .. } => 1,
            EtlError::UnsupportedFileKind { .. } => 2,
            EtlError::MalformedRecord { .. } => 3,
            EtlError::IoError(_) | EtlError::CsvError(_) => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::MissingArgument => "No input file given".to_string(),
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            EtlError::UnsupportedFileKind { filename } => {
                format!("Error! Unexpected filename used: {}", filename)
            }
            EtlError::MalformedRecord { line, source } => {
                format!("Could not read record on line {}: {}", line, source)
            }
            EtlError::IoError(e) => format!("File access failed: {}", e),
            EtlError::CsvError(e) => format!("Writing CSV output failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::MissingArgument => "Pass the dataset file to convert, e.g. yelp_academic_dataset_review.json",
            EtlError::InvalidConfigValueError { .. } => "Check the filename argument",
            EtlError::UnsupportedFileKind { .. } => {
                "Rename the file so it contains 'review', 'user' or 'business'"
            }
            EtlError::MalformedRecord { .. } => {
                "Each line must be one JSON object with the dataset's fields; the output file may be truncated"
            }
            EtlError::IoError(_) => "Check that the input exists and the working directory is writable",
            EtlError::CsvError(_) => "Check free disk space and permissions on the output file",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_category() {
        assert_eq!(EtlError::MissingArgument.exit_code(), 1);
        let unsupported = EtlError::UnsupportedFileKind {
            filename: "tips.json".to_string(),
        };
        assert_eq!(unsupported.exit_code(), 2);
        assert_eq!(unsupported.category(), ErrorCategory::Usage);

        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let malformed = EtlError::MalformedRecord { line: 7, source };
        assert_eq!(malformed.exit_code(), 3);
        assert_eq!(malformed.category(), ErrorCategory::Data);
        assert!(malformed.to_string().starts_with("Malformed record on line 7"));

        let io = EtlError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.exit_code(), 4);
    }

    #[test]
    fn test_unsupported_message_names_file() {
        let e = EtlError::UnsupportedFileKind {
            filename: "tips.json".to_string(),
        };
        assert!(e.user_friendly_message().contains("tips.json"));
    }
}
