use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Input file not readable: {path}: {source}")]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record at line {line}: found {found} fields, need at least {required}")]
    MalformedRecord {
        line: u64,
        found: usize,
        required: usize,
    },

    #[error("Invalid UTF-8 at line {line}")]
    InvalidEncoding { line: u64 },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Zip operation failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Archive error in {archive}: {message}")]
    Archive { archive: String, message: String },

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Data,
    Archive,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl FilterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FilterError::FileNotFound { .. } => ErrorCategory::Input,
            FilterError::Io { .. } => ErrorCategory::Output,
            FilterError::MalformedRecord { .. }
            | FilterError::InvalidEncoding { .. }
            | FilterError::Csv(_) => ErrorCategory::Data,
            FilterError::Zip(_) | FilterError::Archive { .. } => ErrorCategory::Archive,
            FilterError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 使用者修正參數後即可重跑
            FilterError::FileNotFound { .. } | FilterError::InvalidConfigValue { .. } => {
                ErrorSeverity::Medium
            }
            FilterError::MalformedRecord { .. }
            | FilterError::InvalidEncoding { .. }
            | FilterError::Csv(_)
            | FilterError::Zip(_)
            | FilterError::Archive { .. } => ErrorSeverity::High,
            FilterError::Io { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FilterError::FileNotFound { path, .. } => {
                format!("Cannot read the gazetteer file '{}'", path)
            }
            FilterError::Io { path, .. } => format!("Cannot write to '{}'", path),
            FilterError::MalformedRecord { line, found, .. } => format!(
                "Line {} of the gazetteer has only {} columns",
                line, found
            ),
            FilterError::InvalidEncoding { line } => {
                format!("Line {} of the gazetteer is not valid UTF-8", line)
            }
            FilterError::Csv(e) => format!("Could not process the gazetteer: {}", e),
            FilterError::Zip(e) => format!("Could not read the archive: {}", e),
            FilterError::Archive { archive, message } => {
                format!("Archive '{}': {}", archive, message)
            }
            FilterError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check that the input path exists and is readable",
            ErrorCategory::Output => {
                "Check that the output directory exists, is writable and has free space"
            }
            ErrorCategory::Data => {
                "Make sure the input is a tab-separated GeoNames dump with at least 9 columns per line"
            }
            ErrorCategory::Archive => {
                "Download the archive again and check the member name with `unzip -l`"
            }
            ErrorCategory::Configuration => "Review the command-line arguments",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
