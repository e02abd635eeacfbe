use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A single scalar stored in a report column.
///
/// Report fields are not type-checked: whatever scalar the client sends is
/// stored and the column affinity decides the final storage class. Booleans
/// are stored as integers. Arrays and objects cannot be stored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum FieldValue {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl TryFrom<serde_json::Value> for FieldValue {
    type Error = String;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Bool(b) => Ok(FieldValue::Integer(i64::from(b))),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(FieldValue::Integer(i))
                } else if n.is_u64() {
                    Err(format!("integer {n} is too large to store"))
                } else {
                    n.as_f64()
                        .map(FieldValue::Real)
                        .ok_or_else(|| format!("number {n} cannot be stored"))
                }
            }
            serde_json::Value::String(s) => Ok(FieldValue::Text(s)),
            serde_json::Value::Null => Err("null is not a scalar value".to_string()),
            serde_json::Value::Array(_) => Err("arrays cannot be stored".to_string()),
            serde_json::Value::Object(_) => Err("objects cannot be stored".to_string()),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Integer(i) => serializer.serialize_i64(*i),
            FieldValue::Real(f) => serializer.serialize_f64(*f),
            FieldValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(i) => write!(f, "{i}"),
            FieldValue::Real(r) => write!(f, "{r}"),
            FieldValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Integer(i)
    }
}

impl From<f64> for FieldValue {
    fn from(r: f64) -> Self {
        FieldValue::Real(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars_are_accepted() {
        assert_eq!(
            FieldValue::try_from(json!("TAC-1")),
            Ok(FieldValue::Text("TAC-1".to_string()))
        );
        assert_eq!(
            FieldValue::try_from(json!(560001)),
            Ok(FieldValue::Integer(560001))
        );
        assert_eq!(FieldValue::try_from(json!(100.5)), Ok(FieldValue::Real(100.5)));
        assert_eq!(FieldValue::try_from(json!(true)), Ok(FieldValue::Integer(1)));
        assert_eq!(FieldValue::try_from(json!(false)), Ok(FieldValue::Integer(0)));
    }

    #[test]
    fn test_containers_are_rejected() {
        assert!(FieldValue::try_from(json!([1, 2])).is_err());
        assert!(FieldValue::try_from(json!({ "nested": true })).is_err());
    }

    #[test]
    fn test_out_of_range_integer_is_rejected() {
        assert!(FieldValue::try_from(json!(u64::MAX)).is_err());
    }

    #[test]
    fn test_serializes_as_plain_json() {
        assert_eq!(serde_json::to_value(FieldValue::from("x")).unwrap(), json!("x"));
        assert_eq!(serde_json::to_value(FieldValue::from(7_i64)).unwrap(), json!(7));
        assert_eq!(serde_json::to_value(FieldValue::from(2.5_f64)).unwrap(), json!(2.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::from("R1").to_string(), "R1");
        assert_eq!(FieldValue::from(42_i64).to_string(), "42");
    }
}
