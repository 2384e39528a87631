use async_trait::async_trait;
use data_core_api::{DataError, DataResult};
use data_core_db::{Entity, Identifiable, Statement, Update, Value};
use tracing::warn;

use super::repo_impl::SqlRepository;

impl<E: Entity> SqlRepository<E> {
    /// Reorders entity values to match the update template: non-id columns, then the id
    fn update_params(item: &E) -> Vec<Value> {
        let meta = &E::METADATA;
        let mut id_value = Value::Null;
        let mut params = Vec::with_capacity(meta.columns.len());
        for (column, value) in meta.columns.iter().zip(item.to_values()) {
            if column.eq_ignore_ascii_case(meta.id_column) {
                id_value = value;
            } else {
                params.push(value);
            }
        }
        params.push(id_value);
        params
    }

    pub(super) async fn update_impl(repo: &SqlRepository<E>, item: E) -> DataResult<E> {
        let statement = Statement::new(repo.statements().update.clone(), Self::update_params(&item));
        let affected = repo.execute(statement).await?;

        match affected {
            0 => Err(DataError::NotFound(format!(
                "{} {}",
                E::METADATA.name,
                item.get_id()
            ))),
            1 => Ok(item),
            _ => {
                warn!(
                    contract = repo.contract(),
                    id = %item.get_id(),
                    affected,
                    "update by id affected more than one row"
                );
                Ok(item)
            }
        }
    }
}

#[async_trait]
impl<E: Entity> Update<E> for SqlRepository<E> {
    async fn update(&self, item: E) -> DataResult<E> {
        Self::update_impl(self, item).await
    }
}
