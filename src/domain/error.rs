//! Domain error types.

/// Top-level error type for edgebook.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("journal error: {reason}")]
    Journal { reason: String },

    #[error("invalid record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("invalid date range: {reason}")]
    DateRange { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&JournalError> for std::process::ExitCode {
    fn from(err: &JournalError) -> Self {
        let code: u8 = match err {
            JournalError::Io(_) => 1,
            JournalError::ConfigParse { .. }
            | JournalError::ConfigMissing { .. }
            | JournalError::ConfigInvalid { .. } => 2,
            JournalError::Journal { .. } | JournalError::InvalidRecord { .. } => 3,
            JournalError::DateRange { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
