use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregatorError {
    #[error("Cannot read source list '{path}': {source}")]
    SourceListError {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid match pattern '{pattern}': {reason}")]
    PatternError { pattern: String, reason: String },

    #[error("Settings file error: {0}")]
    SettingsError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, AggregatorError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AggregatorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AggregatorError::SourceListError { .. } => ErrorCategory::Input,
            AggregatorError::IoError(_) => ErrorCategory::System,
            AggregatorError::PatternError { .. }
            | AggregatorError::SettingsError(_)
            | AggregatorError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AggregatorError::SourceListError { .. } => ErrorSeverity::High,
            AggregatorError::IoError(_) => ErrorSeverity::Critical,
            AggregatorError::PatternError { .. }
            | AggregatorError::SettingsError(_)
            | AggregatorError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AggregatorError::SourceListError { path, .. } => {
                format!("Could not read the source list file '{}'", path)
            }
            AggregatorError::IoError(e) => format!("A file operation failed: {}", e),
            AggregatorError::PatternError { pattern, .. } => {
                format!(
                    "The match pattern '{}' is not a valid regex template",
                    pattern
                )
            }
            AggregatorError::SettingsError(e) => {
                format!("The settings file is not valid TOML: {}", e)
            }
            AggregatorError::InvalidConfigValueError { field, reason, .. } => {
                format!("The value given for '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AggregatorError::SourceListError { .. } => {
                "Check that the source file exists, is readable, and contains one url per line"
                    .to_string()
            }
            AggregatorError::IoError(_) => {
                "Check disk space and write permissions for the output directory".to_string()
            }
            AggregatorError::PatternError { .. } => {
                "Fix the pattern in the settings file; it must compile as a regex once '{keyword}' is substituted"
                    .to_string()
            }
            AggregatorError::SettingsError(_) => {
                "Fix the TOML syntax of the settings file or omit --settings to use the defaults"
                    .to_string()
            }
            AggregatorError::InvalidConfigValueError { .. } => {
                "Adjust the command line arguments and try again".to_string()
            }
        }
    }
}
