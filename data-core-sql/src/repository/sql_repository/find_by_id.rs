use async_trait::async_trait;
use data_core_api::{DataError, DataResult};
use data_core_db::{Entity, FindById, Statement};
use uuid::Uuid;

use super::repo_impl::SqlRepository;

impl<E: Entity> SqlRepository<E> {
    pub(super) async fn find_by_id_impl(
        repo: &SqlRepository<E>,
        id: Uuid,
    ) -> DataResult<Option<E>> {
        let statement = Statement::new(repo.statements().find_by_id.clone(), vec![id.into()]);
        let rows = repo.fetch(statement).await?;

        match rows.as_slice() {
            [] => Ok(None),
            [row] => E::try_from_row(row).map(Some),
            _ => Err(DataError::MappingError(format!(
                "Expected at most one {} for id {id}, found {}",
                E::METADATA.name,
                rows.len()
            ))),
        }
    }
}

#[async_trait]
impl<E: Entity> FindById<E> for SqlRepository<E> {
    async fn find_by_id(&self, id: Uuid) -> DataResult<Option<E>> {
        Self::find_by_id_impl(self, id).await
    }
}
