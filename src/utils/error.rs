use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Student ID {id} already exists")]
    DuplicateId { id: i64 },

    #[error("Age {age} is out of range (15-80)")]
    InvalidAge { age: i32 },

    #[error("Average {average} is out of range (0-10)")]
    InvalidAverage { average: f64 },

    #[error("Student name cannot be empty")]
    InvalidName,

    #[error("Student {id} not found")]
    NotFound { id: i64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Roster parsing error: {message}")]
    RosterParseError { message: String },

    #[error("Roster entry #{entry} (id {id}) rejected: {source}")]
    RosterEntryRejected {
        entry: usize,
        id: i64,
        source: Box<RegistryError>,
    },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Store-level failure kinds, as reported in outcome envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    DuplicateId,
    InvalidAge,
    InvalidAverage,
    InvalidName,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Lookup,
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RegistryError {
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            RegistryError::DuplicateId { .. } => Some(ErrorKind::DuplicateId),
            RegistryError::InvalidAge { .. } => Some(ErrorKind::InvalidAge),
            RegistryError::InvalidAverage { .. } => Some(ErrorKind::InvalidAverage),
            RegistryError::InvalidName => Some(ErrorKind::InvalidName),
            RegistryError::NotFound { .. } => Some(ErrorKind::NotFound),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RegistryError::DuplicateId { .. }
            | RegistryError::InvalidAge { .. }
            | RegistryError::InvalidAverage { .. }
            | RegistryError::InvalidName => ErrorCategory::Validation,
            RegistryError::NotFound { .. } => ErrorCategory::Lookup,
            RegistryError::RosterParseError { .. }
            | RegistryError::RosterEntryRejected { .. }
            | RegistryError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RegistryError::IoError(_) | RegistryError::SerializationError(_) => ErrorCategory::Io,
        }
    }

    /// Store rejections are routine input mistakes; configuration problems stop startup.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Lookup => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RegistryError::DuplicateId { .. } => {
                "Pick an ID that is not registered yet (use option 2 to list IDs)".to_string()
            }
            RegistryError::InvalidAge { .. } => "Enter an age between 15 and 80".to_string(),
            RegistryError::InvalidAverage { .. } => {
                "Enter an average between 0 and 10".to_string()
            }
            RegistryError::InvalidName => "Enter a non-blank student name".to_string(),
            RegistryError::NotFound { .. } => {
                "Check the ID against the student listing".to_string()
            }
            RegistryError::IoError(_) => {
                "Check that the roster file and the terminal streams are readable".to_string()
            }
            RegistryError::SerializationError(_) => {
                "Retry without --json to get plain text output".to_string()
            }
            RegistryError::RosterParseError { .. } => {
                "Fix the roster file so it is valid TOML with [[students]] entries".to_string()
            }
            RegistryError::RosterEntryRejected { source, .. } => format!(
                "Fix or remove that roster entry ({})",
                source.recovery_suggestion().to_lowercase()
            ),
            RegistryError::InvalidConfigValueError { .. } => {
                "Review the command line options (--help)".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Lookup => self.to_string(),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Io => format!("Input/output failure: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
