use std::any::{Any, TypeId};
use std::sync::Arc;

use data_core_db::{Dialect, Entity, EntityMetadata};

use crate::provider::ConnectionProvider;
use crate::repository::sql_repository::SqlRepository;

/// Static description of a repository contract.
///
/// Implemented on a marker type per contract; the marker is the key callers
/// use to look the generated repository up after resolution.
///
/// # Example
/// ```ignore
/// pub struct OracleCountryRepository;
///
/// impl RepositoryDefinition for OracleCountryRepository {
///     type Entity = CountryModel;
///     const NAME: &'static str = "OracleCountryRepository";
///     const DIALECT: Option<Dialect> = Some(Dialect::Oracle);
/// }
/// ```
pub trait RepositoryDefinition: 'static {
    type Entity: Entity;
    const NAME: &'static str;
    /// `None` leaves the dialect to configuration
    const DIALECT: Option<Dialect>;
}

pub(crate) type RepositoryFactory =
    fn(&'static str, Dialect, Arc<dyn ConnectionProvider>) -> Arc<dyn Any + Send + Sync>;

fn build_sql_repository<E: Entity>(
    contract: &'static str,
    dialect: Dialect,
    provider: Arc<dyn ConnectionProvider>,
) -> Arc<dyn Any + Send + Sync> {
    Arc::new(SqlRepository::<E>::new(contract, dialect, provider))
}

/// A (contract, entity, dialect) registration consumed once by the resolver
#[derive(Clone)]
pub struct RepositoryDeclaration {
    pub contract: &'static str,
    pub contract_type: TypeId,
    pub entity: EntityMetadata,
    pub entity_type: TypeId,
    pub dialect: Option<Dialect>,
    factory: RepositoryFactory,
}

impl RepositoryDeclaration {
    pub fn of<C: RepositoryDefinition>() -> Self {
        Self {
            contract: C::NAME,
            contract_type: TypeId::of::<C>(),
            entity: <C::Entity as Entity>::METADATA,
            entity_type: TypeId::of::<C::Entity>(),
            dialect: C::DIALECT,
            factory: build_sql_repository::<C::Entity>,
        }
    }

    /// Replace the declared dialect
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = Some(dialect);
        self
    }

    pub(crate) fn instantiate(
        &self,
        dialect: Dialect,
        provider: Arc<dyn ConnectionProvider>,
    ) -> Arc<dyn Any + Send + Sync> {
        (self.factory)(self.contract, dialect, provider)
    }
}

impl std::fmt::Debug for RepositoryDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepositoryDeclaration")
            .field("contract", &self.contract)
            .field("entity", &self.entity.name)
            .field("dialect", &self.dialect)
            .finish()
    }
}
