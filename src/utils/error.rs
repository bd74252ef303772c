use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("File {path} not found")]
    FileNotFound { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid document: {message}")]
    InvalidDocument { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::FileNotFound { .. } => ErrorCategory::Input,
            EtlError::SerializationError(_) | EtlError::InvalidDocument { .. } => {
                ErrorCategory::Data
            }
            EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            EtlError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::System => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::FileNotFound { path } => format!("File {} not found.", path),
            EtlError::IoError(e) => format!("Could not access the animation file: {}", e),
            EtlError::SerializationError(e) => {
                format!("The animation file is not valid JSON: {}", e)
            }
            EtlError::InvalidDocument { message } => {
                format!("The animation file has an unexpected structure: {}", message)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::FileNotFound { .. } => {
                "Check the --file and --base-dir arguments point at an existing Lottie file"
            }
            EtlError::IoError(_) => "Check file permissions and available disk space",
            EtlError::SerializationError(_) => "Re-export the animation as Lottie JSON",
            EtlError::InvalidDocument { .. } => {
                "Make sure the file is a Lottie animation whose 'layers' entries are objects"
            }
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and retry"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
