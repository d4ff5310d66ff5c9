//! Journal configuration validation.
//!
//! Validates the config surface before a command touches any data files.

use crate::domain::error::JournalError;
use crate::ports::config_port::ConfigPort;

pub const JOURNAL_PATH_KEYS: [&str; 4] =
    ["trades_path", "edges_path", "formulas_path", "blocks_path"];

pub fn validate_journal_config(config: &dyn ConfigPort) -> Result<(), JournalError> {
    for key in JOURNAL_PATH_KEYS {
        validate_path_key(config, key)?;
    }
    validate_currency_symbol(config)?;
    Ok(())
}

fn validate_path_key(config: &dyn ConfigPort, key: &str) -> Result<(), JournalError> {
    match config.get_string("journal", key) {
        Some(s) if !s.trim().is_empty() => Ok(()),
        Some(_) => Err(JournalError::ConfigInvalid {
            section: "journal".to_string(),
            key: key.to_string(),
            reason: format!("{} must not be blank", key),
        }),
        None => Err(JournalError::ConfigMissing {
            section: "journal".to_string(),
            key: key.to_string(),
        }),
    }
}

fn validate_currency_symbol(config: &dyn ConfigPort) -> Result<(), JournalError> {
    if let Some(symbol) = config.get_string("report", "currency_symbol") {
        if symbol.trim().is_empty() {
            return Err(JournalError::ConfigInvalid {
                section: "report".to_string(),
                key: "currency_symbol".to_string(),
                reason: "currency_symbol must not be blank when set".to_string(),
            });
        }
    }
    Ok(())
}
