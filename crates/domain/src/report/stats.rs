use serde::{Deserialize, Serialize};

/// Aggregate counts over all stored reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    /// Distinct non-blank `tacId` values
    pub tac_issued: i64,
    /// Rows with a non-blank `testReportNumber`
    pub test_report_issued: i64,
}
