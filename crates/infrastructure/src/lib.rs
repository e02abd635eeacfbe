//! Infrastructure layer - External integrations

pub mod config;
pub mod database;

pub use config::ServerConfig;
pub use database::SqliteReportRepository;
