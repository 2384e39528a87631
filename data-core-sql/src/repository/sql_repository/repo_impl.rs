use std::marker::PhantomData;
use std::sync::Arc;

use data_core_api::DataResult;
use data_core_db::{Dialect, Entity, QueryBuilder, Row, Statement, StatementSet};
use tracing::debug;

use crate::provider::ConnectionProvider;

/// Dialect-bound repository produced by the resolver for one declaration.
///
/// Holds the connection provider, the dialect and the statement templates
/// for `E`; nothing in it changes after construction, so one instance is
/// shared as `Arc` by every caller.
pub struct SqlRepository<E: Entity> {
    contract: &'static str,
    dialect: Dialect,
    provider: Arc<dyn ConnectionProvider>,
    builder: QueryBuilder,
    statements: StatementSet,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> SqlRepository<E> {
    pub fn new(
        contract: &'static str,
        dialect: Dialect,
        provider: Arc<dyn ConnectionProvider>,
    ) -> Self {
        let builder = QueryBuilder::new(dialect);
        let statements = builder.build::<E>();
        Self {
            contract,
            dialect,
            provider,
            builder,
            statements,
            _entity: PhantomData,
        }
    }

    /// Name of the contract this repository was generated for
    pub fn contract(&self) -> &'static str {
        self.contract
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn statements(&self) -> &StatementSet {
        &self.statements
    }

    pub(crate) fn builder(&self) -> &QueryBuilder {
        &self.builder
    }

    pub(crate) async fn fetch(&self, statement: Statement) -> DataResult<Vec<Row>> {
        debug!(
            contract = self.contract,
            dialect = %self.dialect,
            params = statement.params.len(),
            sql = %statement.sql,
            "fetch"
        );
        self.provider.fetch(&statement).await
    }

    pub(crate) async fn execute(&self, statement: Statement) -> DataResult<u64> {
        debug!(
            contract = self.contract,
            dialect = %self.dialect,
            params = statement.params.len(),
            sql = %statement.sql,
            "execute"
        );
        self.provider.execute(&statement).await
    }

    pub(crate) fn map_rows(rows: &[Row]) -> DataResult<Vec<E>> {
        rows.iter().map(E::try_from_row).collect()
    }
}

impl<E: Entity> std::fmt::Debug for SqlRepository<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlRepository")
            .field("contract", &self.contract)
            .field("entity", &E::METADATA.name)
            .field("dialect", &self.dialect)
            .field("provider", &self.provider.name())
            .finish()
    }
}
