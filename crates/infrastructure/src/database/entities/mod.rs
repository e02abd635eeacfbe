pub mod report;

pub use report::ReportRow;
