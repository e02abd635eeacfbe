pub mod entity;
pub mod filter;
pub mod repository;
pub mod stats;
pub mod value;

pub use entity::Report;
pub use filter::{ReportField, ReportFilter};
#[cfg(any(test, feature = "mock"))]
pub use repository::MockReportRepository;
pub use repository::ReportRepository;
pub use stats::ReportStats;
pub use value::FieldValue;
