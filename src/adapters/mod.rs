pub mod json_journal_adapter;
pub mod file_config_adapter;
pub mod csv_export;
