use serde::{Deserialize, Serialize};

/// Report columns that listings can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportField {
    TacId,
    PlantInspectionReportNumber,
    TestReportNumber,
    PackModel,
}

impl ReportField {
    pub const FILTERABLE: [ReportField; 4] = [
        ReportField::TacId,
        ReportField::PlantInspectionReportNumber,
        ReportField::TestReportNumber,
        ReportField::PackModel,
    ];

    /// Column name, identical to the query-string key.
    pub fn column(self) -> &'static str {
        match self {
            ReportField::TacId => "tacId",
            ReportField::PlantInspectionReportNumber => "plantInspectionReportNumber",
            ReportField::TestReportNumber => "testReportNumber",
            ReportField::PackModel => "packModel",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::FILTERABLE.into_iter().find(|f| f.column() == key)
    }
}

/// Optional substring matchers for a report listing.
///
/// Values are kept as received; trimming and blank handling happen in
/// [`ReportFilter::matchers`], so a blank value behaves like an absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilter {
    pub tac_id: Option<String>,
    pub plant_inspection_report_number: Option<String>,
    pub test_report_number: Option<String>,
    pub pack_model: Option<String>,
}

impl ReportFilter {
    /// Build a filter from decoded query-string pairs.
    ///
    /// Empty values are skipped and the first remaining value for a key wins.
    /// Unknown keys are ignored.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut filter = Self::default();
        for (key, value) in pairs {
            let Some(field) = ReportField::from_key(key.as_ref()) else {
                continue;
            };
            let value = value.into();
            if value.is_empty() {
                continue;
            }
            let slot = filter.slot_mut(field);
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        filter
    }

    pub fn with(mut self, field: ReportField, value: impl Into<String>) -> Self {
        *self.slot_mut(field) = Some(value.into());
        self
    }

    pub fn get(&self, field: ReportField) -> Option<&str> {
        match field {
            ReportField::TacId => self.tac_id.as_deref(),
            ReportField::PlantInspectionReportNumber => {
                self.plant_inspection_report_number.as_deref()
            }
            ReportField::TestReportNumber => self.test_report_number.as_deref(),
            ReportField::PackModel => self.pack_model.as_deref(),
        }
    }

    fn slot_mut(&mut self, field: ReportField) -> &mut Option<String> {
        match field {
            ReportField::TacId => &mut self.tac_id,
            ReportField::PlantInspectionReportNumber => &mut self.plant_inspection_report_number,
            ReportField::TestReportNumber => &mut self.test_report_number,
            ReportField::PackModel => &mut self.pack_model,
        }
    }

    /// Active matchers in column order: present values, trimmed, non-blank.
    pub fn matchers(&self) -> Vec<(ReportField, &str)> {
        ReportField::FILTERABLE
            .into_iter()
            .filter_map(|field| {
                self.get(field)
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| (field, v))
            })
            .collect()
    }

    /// True when the filter matches every report.
    pub fn is_unrestricted(&self) -> bool {
        self.matchers().is_empty()
    }
}
