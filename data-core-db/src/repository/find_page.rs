use async_trait::async_trait;
use data_core_api::DataResult;

use crate::models::entity::Entity;
use crate::repository::pagination::{Page, PageRequest};

/// Generic repository trait for loading entities page by page
///
/// # Example
/// ```ignore
/// use data_core_db::repository::pagination::{Order, PageRequest};
///
/// let page = repo.find_page(PageRequest::for_page(20, 2).with_sort(Order::asc("name"))).await?;
/// println!("Page {} of {}", page.page_number(), page.total_pages());
/// ```
#[async_trait]
pub trait FindPage<T: Entity>: Send + Sync {
    /// Load one page of entities plus the total count
    ///
    /// # Arguments
    /// * `page` - The pagination parameters (limit, offset and sort)
    ///
    /// # Returns
    /// * `Ok(Page<T>)` - The requested page
    /// * `Err(DataError::ValidationError)` - If the limit is zero or a sort property is unknown
    /// * `Err` - An error if either query could not be executed
    async fn find_page(&self, page: PageRequest) -> DataResult<Page<T>>;
}
