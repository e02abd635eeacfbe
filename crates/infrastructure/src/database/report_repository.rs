use crate::database::entities::ReportRow;
use async_trait::async_trait;
use domain::{DomainError, FieldValue, Report, ReportFilter, ReportRepository, ReportStats};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection, QueryBuilder, Sqlite};
use std::path::{Path, PathBuf};
use tracing::debug;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS reports (
    id TEXT PRIMARY KEY,
    user TEXT,
    inspectionDate TEXT,
    manufactureName TEXT,
    address TEXT,
    country TEXT,
    city TEXT,
    pincode TEXT,
    tacId TEXT,
    plantInspectionReportNumber TEXT,
    testReportNumber TEXT,
    packModel TEXT,
    remark TEXT,
    createdAt INTEGER
)";

/// File-backed report store.
///
/// Holds connection options only. Each operation opens its own connection and
/// closes it before returning; an early return drops the connection, which
/// closes it as well. Concurrent writers are serialized by SQLite's file lock.
#[derive(Clone, Debug)]
pub struct SqliteReportRepository {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl SqliteReportRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        Self { path, options }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn connect(&self) -> Result<SqliteConnection, DomainError> {
        self.options.connect().await.map_err(storage_error)
    }
}

#[async_trait]
impl ReportRepository for SqliteReportRepository {
    async fn init(&self) -> Result<(), DomainError> {
        let mut conn = self.connect().await?;
        let outcome = sqlx::query(SCHEMA)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(storage_error);
        finish(conn, outcome).await?;

        debug!(path = %self.path.display(), "reports table ready");
        Ok(())
    }

    async fn insert(&self, report: &Report) -> Result<(), DomainError> {
        let mut statement = insert_statement(report);
        let mut conn = self.connect().await?;
        let outcome = statement
            .build()
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| insert_error(e, report));
        finish(conn, outcome).await?;

        debug!(report_id = %report.display_id(), "report stored");
        Ok(())
    }

    async fn query(&self, filter: &ReportFilter) -> Result<Vec<Report>, DomainError> {
        let mut builder =
            QueryBuilder::<Sqlite>::new(format!("SELECT {} FROM reports", ReportRow::select_list()));
        for (i, (field, value)) in filter.matchers().into_iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            // Column names come from a closed enum; values are always bound.
            builder.push(field.column());
            builder.push(" LIKE ");
            builder.push_bind(contains_pattern(value));
            builder.push(" ESCAPE '\\'");
        }
        builder.push(" ORDER BY createdAt DESC");

        let mut conn = self.connect().await?;
        let outcome = builder
            .build_query_as::<ReportRow>()
            .fetch_all(&mut conn)
            .await
            .map_err(storage_error);
        let rows = finish(conn, outcome).await?;

        debug!(?filter, rows = rows.len(), "reports queried");
        Ok(rows.into_iter().map(Report::from).collect())
    }

    async fn stats(&self) -> Result<ReportStats, DomainError> {
        let mut conn = self.connect().await?;
        let outcome = read_stats(&mut conn).await.map_err(storage_error);
        let stats = finish(conn, outcome).await?;

        debug!(
            tac_issued = stats.tac_issued,
            test_report_issued = stats.test_report_issued,
            "stats computed"
        );
        Ok(stats)
    }
}

/// `INSERT` binding each value with its own storage class, so the column
/// affinity converts it exactly as if the client's JSON scalar were stored.
fn insert_statement(report: &Report) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::<Sqlite>::new("INSERT INTO reports (");
    builder.push(Report::FIELDS.join(", "));
    builder.push(") VALUES (");
    let mut values = builder.separated(", ");
    for (_, value) in report.fields() {
        match value {
            Some(FieldValue::Integer(i)) => values.push_bind(*i),
            Some(FieldValue::Real(r)) => values.push_bind(*r),
            Some(FieldValue::Text(s)) => values.push_bind(s.clone()),
            None => values.push_bind(Option::<String>::None),
        };
    }
    builder.push(")");
    builder
}

async fn read_stats(conn: &mut SqliteConnection) -> Result<ReportStats, sqlx::Error> {
    let tac_issued: i64 = sqlx::query_scalar(
        "SELECT COUNT(DISTINCT tacId) FROM reports WHERE tacId IS NOT NULL AND TRIM(tacId) <> ''",
    )
    .fetch_one(&mut *conn)
    .await?;

    let test_report_issued: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM reports \
         WHERE testReportNumber IS NOT NULL AND TRIM(testReportNumber) <> ''",
    )
    .fetch_one(&mut *conn)
    .await?;

    Ok(ReportStats {
        tac_issued,
        test_report_issued,
    })
}

/// Close the connection, then hand back the operation's outcome.
async fn finish<T>(
    conn: SqliteConnection,
    outcome: Result<T, DomainError>,
) -> Result<T, DomainError> {
    let closed = conn.close().await;
    let value = outcome?;
    closed.map_err(storage_error)?;
    Ok(value)
}

/// `LIKE` pattern matching `value` anywhere, with wildcards in `value` escaped.
fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn insert_error(e: sqlx::Error, report: &Report) -> DomainError {
    let duplicate = matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation());
    if duplicate {
        DomainError::DuplicateKey(report.display_id())
    } else {
        storage_error(e)
    }
}

fn storage_error(e: sqlx::Error) -> DomainError {
    DomainError::StorageUnavailable(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_statement_lists_every_column() {
        let report = Report {
            id: Some("R1".into()),
            pincode: Some(FieldValue::Integer(560001)),
            ..Default::default()
        };
        let builder = insert_statement(&report);
        let sql = builder.sql();
        assert!(sql.starts_with("INSERT INTO reports (id, user, inspectionDate, "));
        assert!(sql.contains("remark, createdAt) VALUES (?, ?, "));
        assert_eq!(sql.matches('?').count(), 14);
    }

    #[test]
    fn test_contains_pattern_wraps_value() {
        assert_eq!(contains_pattern("BC1"), "%BC1%");
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("TAC_1%"), "%TAC\\_1\\%%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }
}
