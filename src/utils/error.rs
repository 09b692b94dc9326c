use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookstoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Could not load titles from {source_name}: {reason}")]
    LoadFailure { source_name: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

impl BookstoreError {
    pub fn load_failure(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::LoadFailure {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::LoadFailure { .. })
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::LoadFailure { source_name, .. } => {
                format!("The title list '{}' could not be read", source_name)
            }
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::ConfigValidationError { field, message } => {
                format!("Setting '{}' is invalid: {}", field, message)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::MissingConfigError { field } => format!("Setting '{}' is required", field),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::LoadFailure { .. } => {
                "Check catalog.titles_path; the store starts with an empty catalog until it is fixed"
            }
            Self::ConfigError { .. } | Self::ConfigValidationError { .. } => {
                "Make sure the config file is valid TOML with [store] and [catalog] sections"
            }
            Self::InvalidConfigValueError { .. } => "Correct the value in the config file",
            Self::MissingConfigError { .. } => "Add the missing field to the config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, BookstoreError>;
