use super::{Report, ReportFilter, ReportStats};
use crate::DomainError;
use async_trait::async_trait;

/// Repository interface for report persistence
///
/// Implementations live in the infrastructure layer. Reports are append-only:
/// there is no update or delete.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Create the backing table if it does not exist yet. Safe to call repeatedly.
    async fn init(&self) -> Result<(), DomainError>;

    /// Append one report. Fails with `DuplicateKey` if the id is already stored.
    async fn insert(&self, report: &Report) -> Result<(), DomainError>;

    /// All reports matching the filter, newest `created_at` first.
    async fn query(&self, filter: &ReportFilter) -> Result<Vec<Report>, DomainError>;

    /// Aggregate counts across every stored report.
    async fn stats(&self) -> Result<ReportStats, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportField;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_mock_repository_is_object_safe() {
        let mut mock = MockReportRepository::new();
        let filter = ReportFilter::default().with(ReportField::TacId, "TAC");
        mock.expect_query()
            .with(eq(filter.clone()))
            .times(1)
            .returning(|_| Ok(vec![Report::default()]));
        mock.expect_stats().returning(|| Ok(ReportStats::default()));

        let repo: Box<dyn ReportRepository> = Box::new(mock);
        assert_eq!(repo.query(&filter).await.unwrap().len(), 1);
        assert_eq!(repo.stats().await.unwrap(), ReportStats::default());
    }
}
