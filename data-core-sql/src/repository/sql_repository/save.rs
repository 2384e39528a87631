use async_trait::async_trait;
use data_core_api::{DataError, DataResult};
use data_core_db::{Entity, Identifiable, Save, Statement};
use tracing::warn;

use super::repo_impl::SqlRepository;

impl<E: Entity> SqlRepository<E> {
    pub(super) async fn save_impl(repo: &SqlRepository<E>, item: E) -> DataResult<E> {
        let statement = Statement::new(repo.statements().insert.clone(), item.to_values());
        let affected = repo.execute(statement).await?;

        if affected != 1 {
            warn!(
                contract = repo.contract(),
                id = %item.get_id(),
                affected,
                "insert did not affect exactly one row"
            );
            return Err(DataError::QueryExecutionError(format!(
                "Insert of {} {} affected {affected} rows",
                E::METADATA.name,
                item.get_id()
            )));
        }

        Ok(item)
    }
}

#[async_trait]
impl<E: Entity> Save<E> for SqlRepository<E> {
    async fn save(&self, item: E) -> DataResult<E> {
        Self::save_impl(self, item).await
    }
}
