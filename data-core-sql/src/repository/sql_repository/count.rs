use async_trait::async_trait;
use data_core_api::{DataError, DataResult};
use data_core_db::{Count, Entity, Statement, COUNT_ALIAS};

use super::repo_impl::SqlRepository;

impl<E: Entity> SqlRepository<E> {
    pub(super) async fn count_impl(repo: &SqlRepository<E>) -> DataResult<u64> {
        let rows = repo
            .fetch(Statement::plain(repo.statements().count.clone()))
            .await?;
        let row = rows.first().ok_or_else(|| {
            DataError::MappingError(format!("Count of {} returned no row", E::METADATA.name))
        })?;
        row.try_get::<u64>(COUNT_ALIAS)
    }
}

#[async_trait]
impl<E: Entity> Count for SqlRepository<E> {
    async fn count(&self) -> DataResult<u64> {
        Self::count_impl(self).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use data_core_api::DataError;
    use data_core_db::{Count, Row};
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_count_reads_upper_case_alias() {
        let ctx = setup_test_context();
        let country_repo = ctx.country_repo();

        // Oracle NUMBER comes back as a float from some drivers
        ctx.provider.push_rows(vec![Row::new().with("TOTAL", 42.0)]);

        let total = assert_ok!(country_repo.count().await);
        assert_eq!(total, 42);
        assert_eq!(
            ctx.provider.statements()[0].sql,
            r#"SELECT COUNT(*) AS "TOTAL" FROM "COUNTRY""#
        );
    }

    #[tokio::test]
    async fn test_count_without_row_is_mapping_error() {
        let ctx = setup_test_context();
        let country_repo = ctx.country_repo();

        let err = assert_err!(country_repo.count().await);
        assert!(matches!(err, DataError::MappingError(_)));
    }
}
