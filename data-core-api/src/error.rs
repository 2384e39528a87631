use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// Unknown or missing dialect, bad configuration values.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Ambiguous or unbound repository contract at startup.
    #[error("Resolution error: {0}")]
    ResolutionError(String),

    /// Failure reported by the underlying connection or storage.
    #[error("Query execution error: {0}")]
    QueryExecutionError(String),

    /// A result row could not be converted to the declared type.
    #[error("Mapping error: {0}")]
    MappingError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl DataError {
    /// Startup errors abort initialization; everything else is a per-call failure.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DataError::ConfigurationError(_) | DataError::ResolutionError(_)
        )
    }
}

pub type DataResult<T> = Result<T, DataError>;

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for DataError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. } => DataError::MappingError(err.to_string()),
            sqlx::Error::Configuration(_) => DataError::ConfigurationError(err.to_string()),
            other => DataError::QueryExecutionError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_errors_are_fatal() {
        assert!(DataError::ConfigurationError("no dialect".into()).is_fatal());
        assert!(DataError::ResolutionError("duplicate".into()).is_fatal());
        assert!(!DataError::QueryExecutionError("connection reset".into()).is_fatal());
        assert!(!DataError::MappingError("bad row".into()).is_fatal());
    }

    #[test]
    fn test_error_messages() {
        let err = DataError::ConfigurationError("unknown dialect 'DB2'".to_string());
        assert_eq!(err.to_string(), "Configuration error: unknown dialect 'DB2'");

        let err = DataError::NotFound("country 42".to_string());
        assert_eq!(err.to_string(), "Not found: country 42");
    }
}

#[cfg(all(test, feature = "sqlx"))]
mod sqlx_tests {
    use super::*;

    #[test]
    fn test_column_errors_map_to_mapping_error() {
        let err: DataError = sqlx::Error::ColumnNotFound("iso2".to_string()).into();
        assert!(matches!(err, DataError::MappingError(_)));
    }

    #[test]
    fn test_other_sqlx_errors_map_to_query_execution_error() {
        let err: DataError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DataError::QueryExecutionError(_)));

        let err: DataError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, DataError::QueryExecutionError(_)));
    }
}
