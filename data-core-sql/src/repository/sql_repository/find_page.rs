use async_trait::async_trait;
use data_core_api::{DataError, DataResult};
use data_core_db::{Entity, FindPage, Page, PageRequest, Statement};

use super::repo_impl::SqlRepository;

impl<E: Entity> SqlRepository<E> {
    pub(super) async fn find_page_impl(
        repo: &SqlRepository<E>,
        page: PageRequest,
    ) -> DataResult<Page<E>> {
        // Validate before touching the provider
        let sql = repo.builder().find_page(&E::METADATA, &page)?;

        let rows = repo.fetch(Statement::plain(sql)).await?;
        let items = Self::map_rows(&rows)?;

        let total = Self::count_impl(repo).await?;
        let total = usize::try_from(total).map_err(|_| {
            DataError::MappingError(format!("Count {total} does not fit in usize"))
        })?;

        Ok(Page::new(items, total, page.limit, page.offset))
    }
}

#[async_trait]
impl<E: Entity> FindPage<E> for SqlRepository<E> {
    async fn find_page(&self, page: PageRequest) -> DataResult<Page<E>> {
        Self::find_page_impl(self, page).await
    }
}
