use chrono::{DateTime, Utc};
use data_core_api::{DataError, DataResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single bind parameter or column value exchanged with a connection provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Uuid(Uuid),
    Timestamp(DateTime<Utc>),
}

impl Value {
    /// Short type name used in mapping error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Uuid(_) => "uuid",
            Value::Timestamp(_) => "timestamp",
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Timestamp(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Conversion from a column [`Value`] into a Rust type.
///
/// Conversions are lenient where drivers disagree on representation: Oracle
/// has no boolean or UUID column type, so `Int` 0/1 reads as `bool` and a
/// textual UUID reads as `Uuid`.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> DataResult<Self>;
}

fn mismatch<T>(expected: &str, value: &Value) -> DataResult<T> {
    Err(DataError::MappingError(format!(
        "Expected {expected}, found {}",
        value.type_name()
    )))
}

impl FromValue for bool {
    fn from_value(value: &Value) -> DataResult<Self> {
        match value {
            Value::Bool(v) => Ok(*v),
            Value::Int(0) => Ok(false),
            Value::Int(1) => Ok(true),
            other => mismatch("bool", other),
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> DataResult<Self> {
        match value {
            Value::Int(v) => Ok(*v),
            other => mismatch("int", other),
        }
    }
}

impl FromValue for u64 {
    fn from_value(value: &Value) -> DataResult<Self> {
        match value {
            Value::Int(v) => u64::try_from(*v)
                .map_err(|_| DataError::MappingError(format!("Negative value {v} for unsigned column"))),
            // NUMBER columns may come back as floating point
            Value::Float(v) if v.fract() == 0.0 && *v >= 0.0 => Ok(*v as u64),
            other => mismatch("unsigned int", other),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> DataResult<Self> {
        match value {
            Value::Float(v) => Ok(*v),
            Value::Int(v) => Ok(*v as f64),
            other => mismatch("float", other),
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> DataResult<Self> {
        match value {
            Value::Text(v) => Ok(v.clone()),
            other => mismatch("text", other),
        }
    }
}

impl FromValue for Uuid {
    fn from_value(value: &Value) -> DataResult<Self> {
        match value {
            Value::Uuid(v) => Ok(*v),
            Value::Text(v) => Uuid::parse_str(v)
                .map_err(|e| DataError::MappingError(format!("Invalid UUID '{v}': {e}"))),
            other => mismatch("uuid", other),
        }
    }
}

impl FromValue for DateTime<Utc> {
    fn from_value(value: &Value) -> DataResult<Self> {
        match value {
            Value::Timestamp(v) => Ok(*v),
            other => mismatch("timestamp", other),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> DataResult<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_into_value() {
        let none: Option<&str> = None;
        assert_eq!(Value::from(none), Value::Null);
        assert_eq!(Value::from(Some(7i64)), Value::Int(7));
    }

    #[test]
    fn test_oracle_friendly_conversions() {
        assert!(bool::from_value(&Value::Int(1)).unwrap());
        assert!(!bool::from_value(&Value::Int(0)).unwrap());

        let id = Uuid::new_v4();
        assert_eq!(Uuid::from_value(&Value::Text(id.to_string())).unwrap(), id);
        assert_eq!(u64::from_value(&Value::Float(12.0)).unwrap(), 12);
    }

    #[test]
    fn test_mismatch_is_mapping_error() {
        let err = i64::from_value(&Value::Text("one".into())).unwrap_err();
        assert_eq!(err, DataError::MappingError("Expected int, found text".into()));

        let err = u64::from_value(&Value::Int(-1)).unwrap_err();
        assert!(matches!(err, DataError::MappingError(_)));
    }

    #[test]
    fn test_null_into_option() {
        let v: Option<String> = FromValue::from_value(&Value::Null).unwrap();
        assert!(v.is_none());
        assert!(String::from_value(&Value::Null).is_err());
    }
}
