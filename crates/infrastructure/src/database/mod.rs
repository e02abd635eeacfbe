pub mod entities;
pub mod report_repository;

pub use report_repository::SqliteReportRepository;
