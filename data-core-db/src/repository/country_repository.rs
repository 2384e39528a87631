use async_trait::async_trait;
use data_core_api::DataResult;

use crate::models::country::CountryModel;
use crate::repository::crud::PageableRepository;

/// Contract for country repositories: the pageable base plus derived finders
#[async_trait]
pub trait CountryRepository: PageableRepository<CountryModel> {
    /// Find the single country with this exact name
    ///
    /// # Returns
    /// * `Ok(Some(CountryModel))` - The matching country
    /// * `Ok(None)` - If no country has this name
    /// * `Err(DataError::MappingError)` - If more than one row matches
    async fn find_by_name(&self, name: &str) -> DataResult<Option<CountryModel>>;
}
