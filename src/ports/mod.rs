pub mod journal_port;
pub mod config_port;
