use async_trait::async_trait;
use data_core_api::{DataError, DataResult};
use data_core_db::{CountryModel, CountryRepository, Entity, Statement, TryFromRow};

use crate::repository::sql_repository::SqlRepository;

impl SqlRepository<CountryModel> {
    async fn find_by_name_impl(
        repo: &SqlRepository<CountryModel>,
        name: &str,
    ) -> DataResult<Option<CountryModel>> {
        let sql = repo
            .builder()
            .find_by_column(&CountryModel::METADATA, "name")?;
        let rows = repo.fetch(Statement::new(sql, vec![name.into()])).await?;

        match rows.as_slice() {
            [] => Ok(None),
            [row] => CountryModel::try_from_row(row).map(Some),
            _ => Err(DataError::MappingError(format!(
                "Expected at most one Country named '{name}', found {}",
                rows.len()
            ))),
        }
    }
}

#[async_trait]
impl CountryRepository for SqlRepository<CountryModel> {
    async fn find_by_name(&self, name: &str) -> DataResult<Option<CountryModel>> {
        Self::find_by_name_impl(self, name).await
    }
}
