use data_core_api::{DataError, DataResult};

use super::value::{FromValue, Value};

/// A result row returned by a connection provider.
///
/// Columns keep the order the provider reported them in. Lookup by name
/// ignores case because Oracle and H2 report unquoted names in upper case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style column append
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(column, value);
        self
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.push((column.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Raw value of a column, if present
    pub fn value(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(column))
            .map(|(_, value)| value)
    }

    /// Typed value of a column.
    ///
    /// # Returns
    /// * `Err(DataError::MappingError)` - if the column is missing or holds an incompatible value
    pub fn try_get<T: FromValue>(&self, column: &str) -> DataResult<T> {
        let value = self
            .value(column)
            .ok_or_else(|| DataError::MappingError(format!("Column '{column}' not found in row")))?;
        T::from_value(value).map_err(|e| match e {
            DataError::MappingError(msg) => {
                DataError::MappingError(format!("Column '{column}': {msg}"))
            }
            other => other,
        })
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

/// A trait for converting a database row into a model.
pub trait TryFromRow: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &Row) -> DataResult<Self>;
}
