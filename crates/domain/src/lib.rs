//! Domain layer - Pure business logic with no external dependencies
//!
//! This crate contains:
//! - The inspection `Report` record and its submission decoding
//! - Value objects (`FieldValue`, `ReportFilter`, `ReportStats`)
//! - Repository interface (`ReportRepository`)
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Testable in isolation

pub mod error;
pub mod report;

// Re-export commonly used types
pub use error::DomainError;
pub use report::{FieldValue, Report, ReportField, ReportFilter, ReportRepository, ReportStats};
