use thiserror::Error;

#[derive(Error, Debug)]
pub enum TypegenError {
    #[error("No translation for type: {signature}")]
    UnsupportedType { signature: String },

    #[error("Model '{name}' appears more than once in the allow-list")]
    DuplicateModel { name: String },

    #[error("Model '{name}' is not defined in the model catalog")]
    UnknownModel { name: String },

    #[error("Allow-list is empty, nothing to generate")]
    EmptyAllowList,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
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
    Schema,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl TypegenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TypegenError::UnsupportedType { .. } | TypegenError::DuplicateModel { .. } => {
                ErrorCategory::Schema
            }
            TypegenError::UnknownModel { .. }
            | TypegenError::EmptyAllowList
            | TypegenError::ConfigValidationError { .. }
            | TypegenError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            TypegenError::IoError(_) | TypegenError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Schema => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TypegenError::UnsupportedType { signature } => format!(
                "Add a mapping for '{}' to the translator, change the field type, or mark the field with json:\"-\"",
                signature
            ),
            TypegenError::DuplicateModel { name } => {
                format!("Remove the repeated '{}' entry from the allow-list", name)
            }
            TypegenError::UnknownModel { name } => format!(
                "Check the spelling of '{}' or run with --list-models to see the catalog",
                name
            ),
            TypegenError::EmptyAllowList => {
                "List at least one model under [models] allow_list".to_string()
            }
            TypegenError::IoError(_) => {
                "Check that the output path is writable and the config file exists".to_string()
            }
            TypegenError::SerializationError(_) => "Re-run with --verbose for details".to_string(),
            TypegenError::ConfigValidationError { .. } => {
                "Make sure the configuration file is valid TOML".to_string()
            }
            TypegenError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TypegenError::UnsupportedType { signature } => {
                format!("Type generation aborted: no TypeScript type for '{}'", signature)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TypegenError>;
