pub mod postgres;

pub use postgres::PgConnectionProvider;

use async_trait::async_trait;
use data_core_api::DataResult;
use data_core_db::{Dialect, Row, Statement};

/// Connection/session collaborator a generated repository executes against.
///
/// Implementations decide how a connection is obtained for each call
/// (typically a checkout from a pool); repositories never hold one.
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    /// Human readable name used in logs
    fn name(&self) -> &str;

    /// Whether statements rendered for `dialect` can run on this provider
    fn supports(&self, dialect: Dialect) -> bool;

    /// Execute a statement and return its rows
    ///
    /// # Returns
    /// * `Err(DataError::QueryExecutionError)` - on connection or storage failure
    /// * `Err(DataError::MappingError)` - if a column cannot be decoded
    async fn fetch(&self, statement: &Statement) -> DataResult<Vec<Row>>;

    /// Execute a statement and return the number of affected rows
    async fn execute(&self, statement: &Statement) -> DataResult<u64>;
}
