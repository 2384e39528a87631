use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use data_core_api::{DataError, DataResult};
use data_core_db::Dialect;

use crate::repository::sql_repository::SqlRepository;

use super::declaration::RepositoryDefinition;

pub(crate) struct Binding {
    pub contract: &'static str,
    pub dialect: Dialect,
    pub instance: Arc<dyn Any + Send + Sync>,
}

/// Output of a successful resolution: one generated repository per contract
pub struct ResolvedRepositories {
    bindings: HashMap<TypeId, Binding>,
}

impl ResolvedRepositories {
    pub(crate) fn new(bindings: HashMap<TypeId, Binding>) -> Self {
        Self { bindings }
    }

    /// Look up the generated repository of contract `C`
    ///
    /// # Returns
    /// * `Err(DataError::ResolutionError)` - if `C` was not part of the resolved declarations
    pub fn get<C: RepositoryDefinition>(&self) -> DataResult<Arc<SqlRepository<C::Entity>>> {
        let binding = self.bindings.get(&TypeId::of::<C>()).ok_or_else(|| {
            DataError::ResolutionError(format!("No repository resolved for contract '{}'", C::NAME))
        })?;

        binding
            .instance
            .clone()
            .downcast::<SqlRepository<C::Entity>>()
            .map_err(|_| {
                DataError::ResolutionError(format!(
                    "Repository for contract '{}' is bound to a different entity",
                    C::NAME
                ))
            })
    }

    pub fn dialect_of<C: RepositoryDefinition>(&self) -> Option<Dialect> {
        self.bindings.get(&TypeId::of::<C>()).map(|b| b.dialect)
    }

    /// Resolved contract names, sorted
    pub fn contracts(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.bindings.values().map(|b| b.contract).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
