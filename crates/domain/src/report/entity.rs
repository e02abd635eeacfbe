use super::FieldValue;
use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// One inspection record.
///
/// Every field is caller-supplied, optional and untyped beyond "a scalar".
/// The server never generates `id` or `created_at`: a submission without them
/// is stored with NULLs, and since SQLite allows several NULLs in a TEXT
/// primary key, repeated id-less submissions all succeed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: Option<FieldValue>,
    pub user: Option<FieldValue>,
    pub inspection_date: Option<FieldValue>,
    pub manufacture_name: Option<FieldValue>,
    pub address: Option<FieldValue>,
    pub country: Option<FieldValue>,
    pub city: Option<FieldValue>,
    pub pincode: Option<FieldValue>,
    pub tac_id: Option<FieldValue>,
    pub plant_inspection_report_number: Option<FieldValue>,
    pub test_report_number: Option<FieldValue>,
    pub pack_model: Option<FieldValue>,
    pub remark: Option<FieldValue>,
    /// Epoch-like timestamp chosen by the client; drives listing order.
    pub created_at: Option<FieldValue>,
}

impl Report {
    /// Wire names of every field, which are also the column names.
    pub const FIELDS: [&'static str; 14] = [
        "id",
        "user",
        "inspectionDate",
        "manufactureName",
        "address",
        "country",
        "city",
        "pincode",
        "tacId",
        "plantInspectionReportNumber",
        "testReportNumber",
        "packModel",
        "remark",
        "createdAt",
    ];

    /// Decode a submission body.
    ///
    /// A zero-length body is read as `{}` and yields an all-null report.
    /// Anything else must be a JSON object whose known keys hold scalars or
    /// null; unknown keys are ignored.
    pub fn from_json_body(body: &[u8]) -> Result<Self> {
        if body.is_empty() {
            return Ok(Self::default());
        }

        let value: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| DomainError::MalformedPayload(e.to_string()))?;

        if !value.is_object() {
            return Err(DomainError::MalformedPayload(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        }

        serde_json::from_value(value).map_err(|e| DomainError::MalformedPayload(e.to_string()))
    }

    /// Build a report from values listed in [`Report::FIELDS`] order.
    pub fn from_values(values: [Option<FieldValue>; 14]) -> Self {
        let [
            id,
            user,
            inspection_date,
            manufacture_name,
            address,
            country,
            city,
            pincode,
            tac_id,
            plant_inspection_report_number,
            test_report_number,
            pack_model,
            remark,
            created_at,
        ] = values;

        Self {
            id,
            user,
            inspection_date,
            manufacture_name,
            address,
            country,
            city,
            pincode,
            tac_id,
            plant_inspection_report_number,
            test_report_number,
            pack_model,
            remark,
            created_at,
        }
    }

    /// Values paired with their field names, in [`Report::FIELDS`] order.
    pub fn fields(&self) -> [(&'static str, Option<&FieldValue>); 14] {
        let values = [
            &self.id,
            &self.user,
            &self.inspection_date,
            &self.manufacture_name,
            &self.address,
            &self.country,
            &self.city,
            &self.pincode,
            &self.tac_id,
            &self.plant_inspection_report_number,
            &self.test_report_number,
            &self.pack_model,
            &self.remark,
            &self.created_at,
        ];
        std::array::from_fn(|i| (Self::FIELDS[i], values[i].as_ref()))
    }

    /// Id used in log lines and error messages.
    pub fn display_id(&self) -> String {
        self.id
            .as_ref()
            .map_or_else(|| "<null>".to_string(), ToString::to_string)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_body_is_all_null_report() {
        let report = Report::from_json_body(b"").unwrap();
        assert_eq!(report, Report::default());
    }

    #[test]
    fn test_camel_case_body() {
        let body = json!({
            "id": "R1",
            "tacId": "TAC-9",
            "plantInspectionReportNumber": "PIR-1",
            "testReportNumber": "TR-7",
            "packModel": "PM-X",
            "inspectionDate": "2024-03-01",
            "createdAt": 100
        })
        .to_string();

        let report = Report::from_json_body(body.as_bytes()).unwrap();
        assert_eq!(report.id, Some(FieldValue::from("R1")));
        assert_eq!(report.tac_id, Some(FieldValue::from("TAC-9")));
        assert_eq!(report.plant_inspection_report_number, Some(FieldValue::from("PIR-1")));
        assert_eq!(report.test_report_number, Some(FieldValue::from("TR-7")));
        assert_eq!(report.pack_model, Some(FieldValue::from("PM-X")));
        assert_eq!(report.inspection_date, Some(FieldValue::from("2024-03-01")));
        assert_eq!(report.created_at, Some(FieldValue::Integer(100)));
        assert_eq!(report.remark, None);
    }

    #[test]
    fn test_missing_id_is_accepted() {
        let report = Report::from_json_body(br#"{"user":"alice"}"#).unwrap();
        assert_eq!(report.id, None);
        assert_eq!(report.created_at, None);
        assert_eq!(report.display_id(), "<null>");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let report = Report::from_json_body(br#"{"id":"R2","colour":"red"}"#).unwrap();
        assert_eq!(report.id, Some(FieldValue::from("R2")));
    }

    #[test]
    fn test_fields_of_any_scalar_type_are_accepted() {
        let body = br#"{"id":7,"pincode":560001,"createdAt":100.0,"remark":true}"#;
        let report = Report::from_json_body(body).unwrap();
        assert_eq!(report.id, Some(FieldValue::Integer(7)));
        assert_eq!(report.pincode, Some(FieldValue::Integer(560001)));
        assert_eq!(report.created_at, Some(FieldValue::Real(100.0)));
        assert_eq!(report.remark, Some(FieldValue::Integer(1)));
        assert_eq!(report.display_id(), "7");
    }

    #[test]
    fn test_string_created_at_is_accepted() {
        let report = Report::from_json_body(br#"{"createdAt":"1700000000000"}"#).unwrap();
        assert_eq!(report.created_at, Some(FieldValue::from("1700000000000")));
    }

    #[test]
    fn test_explicit_null_is_none() {
        let report = Report::from_json_body(br#"{"id":"R3","city":null}"#).unwrap();
        assert_eq!(report.city, None);
    }

    #[test]
    fn test_nested_field_value_is_malformed() {
        let result = Report::from_json_body(br#"{"id":"R4","address":{"line1":"x"}}"#);
        assert!(matches!(result, Err(DomainError::MalformedPayload(_))));

        let result = Report::from_json_body(br#"{"id":"R4","remark":["a","b"]}"#);
        assert!(matches!(result, Err(DomainError::MalformedPayload(_))));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let result = Report::from_json_body(b"{not json");
        assert!(matches!(result, Err(DomainError::MalformedPayload(_))));
    }

    #[test]
    fn test_whitespace_body_is_malformed() {
        let result = Report::from_json_body(b"   ");
        assert!(matches!(result, Err(DomainError::MalformedPayload(_))));
    }

    #[test]
    fn test_non_object_is_malformed() {
        let result = Report::from_json_body(br#"["R1","alice"]"#);
        assert_eq!(
            result.unwrap_err(),
            DomainError::MalformedPayload("expected a JSON object, got an array".to_string())
        );
    }

    #[test]
    fn test_fields_follow_column_order() {
        let report = Report {
            id: Some("R1".into()),
            created_at: Some(FieldValue::Integer(9)),
            ..Default::default()
        };

        let fields = report.fields();
        let names: Vec<_> = fields.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, Report::FIELDS.to_vec());
        assert_eq!(fields[0].1, Some(&FieldValue::from("R1")));
        assert_eq!(fields[13].1, Some(&FieldValue::Integer(9)));

        let values = fields.map(|(_, value)| value.cloned());
        assert_eq!(Report::from_values(values), report);
    }

    #[test]
    fn test_serializes_every_field() {
        let report = Report {
            id: Some("R1".into()),
            created_at: Some(FieldValue::Integer(5)),
            ..Default::default()
        };

        let value = serde_json::to_value(&report).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 14);
        assert_eq!(object["id"], json!("R1"));
        assert_eq!(object["createdAt"], json!(5));
        assert_eq!(object["manufactureName"], json!(null));
        assert_eq!(object["plantInspectionReportNumber"], json!(null));
        for name in Report::FIELDS {
            assert!(object.contains_key(name), "{name}");
        }
    }
}
