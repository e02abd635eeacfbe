use domain::{FieldValue, Report};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

/// Row of the `reports` table, read as selected by [`ReportRow::select_list`].
///
/// Column affinity is advisory in SQLite, so any column may hold any storage
/// class. Each value is selected next to its `typeof()` and decoded by what
/// is actually stored rather than by the declared column type.
#[derive(Debug, Clone)]
pub struct ReportRow(pub Report);

impl ReportRow {
    /// `col, typeof(col)` for every column, in field order.
    pub fn select_list() -> String {
        Report::FIELDS
            .iter()
            .map(|column| format!("{column}, typeof({column})"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<'r> FromRow<'r, SqliteRow> for ReportRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let mut values: [Option<FieldValue>; 14] = Default::default();
        for (i, slot) in values.iter_mut().enumerate() {
            let column = 2 * i;
            let storage: String = row.try_get(column + 1)?;
            *slot = match storage.as_str() {
                "integer" => Some(FieldValue::Integer(row.try_get_unchecked(column)?)),
                "real" => Some(FieldValue::Real(row.try_get_unchecked(column)?)),
                "text" => Some(FieldValue::Text(row.try_get_unchecked(column)?)),
                "blob" => {
                    let bytes: Vec<u8> = row.try_get_unchecked(column)?;
                    Some(FieldValue::Text(String::from_utf8_lossy(&bytes).into_owned()))
                }
                _ => None,
            };
        }
        Ok(ReportRow(Report::from_values(values)))
    }
}

impl From<ReportRow> for Report {
    fn from(row: ReportRow) -> Self {
        row.0
    }
}
