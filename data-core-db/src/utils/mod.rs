use data_core_api::{DataError, DataResult};
use heapless::String as HeaplessString;
use std::str::FromStr;

use crate::models::row::Row;

/// Retrieves a required `HeaplessString` from a row.
pub fn get_heapless_string<const N: usize>(
    row: &Row,
    col_name: &str,
) -> DataResult<HeaplessString<N>> {
    let s: String = row.try_get(col_name)?;
    HeaplessString::from_str(&s).map_err(|_| {
        DataError::MappingError(format!(
            "Value for column '{col_name}' is too long (max {N} chars)"
        ))
    })
}

/// Builds a `HeaplessString`, failing validation when `value` exceeds `N` bytes.
pub fn to_heapless_string<const N: usize>(value: &str) -> DataResult<HeaplessString<N>> {
    HeaplessString::from_str(value).map_err(|_| {
        DataError::ValidationError(format!("'{value}' is too long (max {N} chars)"))
    })
}
