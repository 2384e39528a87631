use async_trait::async_trait;
use data_core_api::DataResult;
use data_core_db::{Entity, ExistsById, Statement};
use uuid::Uuid;

use super::repo_impl::SqlRepository;

impl<E: Entity> SqlRepository<E> {
    pub(super) async fn exists_by_id_impl(repo: &SqlRepository<E>, id: Uuid) -> DataResult<bool> {
        let statement = Statement::new(repo.statements().exists_by_id.clone(), vec![id.into()]);
        let rows = repo.fetch(statement).await?;
        Ok(!rows.is_empty())
    }
}

#[async_trait]
impl<E: Entity> ExistsById for SqlRepository<E> {
    async fn exists_by_id(&self, id: Uuid) -> DataResult<bool> {
        Self::exists_by_id_impl(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use data_core_db::{ExistsById, Row, Value};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_exists_by_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let country_repo = ctx.country_repo();

        ctx.provider.push_rows(vec![Row::new().with("1", 1i64)]);
        ctx.provider.push_rows(vec![]);

        let id = Uuid::new_v4();
        assert!(country_repo.exists_by_id(id).await?);
        assert!(!country_repo.exists_by_id(Uuid::new_v4()).await?);

        let statements = ctx.provider.statements();
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].sql, r#"SELECT 1 FROM "COUNTRY" WHERE "ID" = :1"#);
        assert_eq!(statements[0].params, vec![Value::Uuid(id)]);

        Ok(())
    }
}
