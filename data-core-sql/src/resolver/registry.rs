use std::any::TypeId;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use data_core_api::{DataError, DataResult};
use data_core_db::Dialect;
use tracing::{info, warn};

use crate::config::RepositoryConfig;
use crate::provider::ConnectionProvider;

use super::declaration::{RepositoryDeclaration, RepositoryDefinition};
use super::resolved::{Binding, ResolvedRepositories};

/// Explicit registration table of repository declarations and the
/// connection provider serving each dialect.
///
/// This is the startup-time replacement for annotation scanning: every
/// contract is declared here, then [`RepositoryRegistry::resolve`] produces
/// one generated repository per declaration, or fails without producing any.
///
/// # Example
/// ```ignore
/// let mut registry = RepositoryRegistry::new();
/// registry
///     .declare_definition::<OracleCountryRepository>()
///     .bind_provider(Dialect::Oracle, oracle_provider);
///
/// let repos = registry.resolve()?;
/// let countries = repos.get::<OracleCountryRepository>()?;
/// let france = countries.find_by_name("France").await?;
/// ```
#[derive(Default)]
pub struct RepositoryRegistry {
    declarations: Vec<RepositoryDeclaration>,
    providers: BTreeMap<Dialect, Arc<dyn ConnectionProvider>>,
}

type PlannedBinding<'a> = (
    &'a RepositoryDeclaration,
    Dialect,
    &'a Arc<dyn ConnectionProvider>,
);

impl RepositoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, declaration: RepositoryDeclaration) -> &mut Self {
        self.declarations.push(declaration);
        self
    }

    pub fn declare_definition<C: RepositoryDefinition>(&mut self) -> &mut Self {
        self.declare(RepositoryDeclaration::of::<C>())
    }

    /// Bind the provider serving `dialect`, replacing any earlier binding
    pub fn bind_provider(
        &mut self,
        dialect: Dialect,
        provider: Arc<dyn ConnectionProvider>,
    ) -> &mut Self {
        self.providers.insert(dialect, provider);
        self
    }

    pub fn declarations(&self) -> &[RepositoryDeclaration] {
        &self.declarations
    }

    /// Assign dialects from configuration, by contract name.
    ///
    /// Nothing is changed unless the whole configuration is valid.
    ///
    /// # Returns
    /// * `Err(DataError::ConfigurationError)` - if a dialect name is unknown or a configured
    ///   contract has not been declared
    pub fn apply_config(&mut self, config: &RepositoryConfig) -> DataResult<&mut Self> {
        let dialects = config.dialects()?;

        for contract in config.repositories.keys() {
            if !self.declarations.iter().any(|d| d.contract == contract.as_str()) {
                return Err(DataError::ConfigurationError(format!(
                    "Configuration names undeclared repository '{contract}'"
                )));
            }
        }

        for declaration in &mut self.declarations {
            if let Some(dialect) = dialects.get(declaration.contract) {
                if let Some(declared) = declaration.dialect.filter(|d| d != dialect) {
                    warn!(
                        contract = declaration.contract,
                        declared = %declared,
                        configured = %dialect,
                        "configuration overrides declared dialect"
                    );
                }
                declaration.dialect = Some(*dialect);
            }
        }
        Ok(self)
    }

    /// Validate every declaration and pick its provider, without building anything
    fn plan(&self) -> DataResult<Vec<PlannedBinding<'_>>> {
        let mut contracts: HashMap<TypeId, &'static str> = HashMap::new();
        let mut entity_dialects: HashMap<(TypeId, Dialect), &'static str> = HashMap::new();
        let mut plan = Vec::with_capacity(self.declarations.len());

        for declaration in &self.declarations {
            check_entity_metadata(declaration)?;

            let dialect = declaration.dialect.ok_or_else(|| {
                DataError::ConfigurationError(format!(
                    "Repository '{}' has no dialect",
                    declaration.contract
                ))
            })?;

            if contracts
                .insert(declaration.contract_type, declaration.contract)
                .is_some()
            {
                return Err(DataError::ResolutionError(format!(
                    "Repository '{}' is declared more than once",
                    declaration.contract
                )));
            }

            if let Some(existing) =
                entity_dialects.insert((declaration.entity_type, dialect), declaration.contract)
            {
                return Err(DataError::ResolutionError(format!(
                    "Repositories '{existing}' and '{}' both bind {} to dialect {dialect}",
                    declaration.contract, declaration.entity.name
                )));
            }

            let provider = self.providers.get(&dialect).ok_or_else(|| {
                DataError::ResolutionError(format!(
                    "No connection provider bound for dialect {dialect} (repository '{}')",
                    declaration.contract
                ))
            })?;

            if !provider.supports(dialect) {
                return Err(DataError::ResolutionError(format!(
                    "Connection provider '{}' does not support dialect {dialect}",
                    provider.name()
                )));
            }

            plan.push((declaration, dialect, provider));
        }

        Ok(plan)
    }

    /// Build one generated repository per declaration.
    ///
    /// Fails on the first invalid declaration and returns nothing in that
    /// case. Resolving the same registry again yields equivalent repositories.
    pub fn resolve(&self) -> DataResult<ResolvedRepositories> {
        let plan = self.plan().map_err(|e| {
            warn!(error = %e, "repository resolution failed");
            e
        })?;

        let mut bindings = HashMap::with_capacity(plan.len());
        for (declaration, dialect, provider) in plan {
            let instance = declaration.instantiate(dialect, provider.clone());
            info!(
                contract = declaration.contract,
                entity = declaration.entity.name,
                dialect = %dialect,
                provider = provider.name(),
                "repository bound"
            );
            bindings.insert(
                declaration.contract_type,
                Binding {
                    contract: declaration.contract,
                    dialect,
                    instance,
                },
            );
        }

        Ok(ResolvedRepositories::new(bindings))
    }
}

/// The id column must be mapped and at least one other column must exist
fn check_entity_metadata(declaration: &RepositoryDeclaration) -> DataResult<()> {
    let meta = &declaration.entity;
    if !meta.has_column(meta.id_column) {
        return Err(DataError::ResolutionError(format!(
            "Repository '{}': id column '{}' is not a column of {}",
            declaration.contract, meta.id_column, meta.name
        )));
    }
    if meta.non_id_columns().next().is_none() {
        return Err(DataError::ResolutionError(format!(
            "Repository '{}': {} maps no columns besides its id",
            declaration.contract, meta.name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::country_repository::{
        declare_country_repositories, ConfiguredCountryRepository, H2CountryRepository,
        MySqlCountryRepository, OracleCountryRepository, PostgresCountryRepository,
        SqlServerCountryRepository,
    };
    use crate::test_helper::{country_row, create_test_country, MockConnectionProvider};
    use data_core_db::{CountryModel, CountryRepository, EntityMetadata, FindById, Statement, Value};

    fn all_dialect_registry() -> (RepositoryRegistry, Arc<MockConnectionProvider>) {
        let provider = Arc::new(MockConnectionProvider::new(Dialect::ALL));
        let mut registry = RepositoryRegistry::new();
        declare_country_repositories(&mut registry);
        for dialect in Dialect::ALL {
            registry.bind_provider(dialect, provider.clone());
        }
        (registry, provider)
    }

    #[test]
    fn test_resolve_one_repository_per_declaration() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (registry, _) = all_dialect_registry();
        let repos = registry.resolve()?;

        assert_eq!(repos.len(), 5);
        assert_eq!(
            repos.contracts(),
            vec![
                "H2CountryRepository",
                "MySqlCountryRepository",
                "OracleCountryRepository",
                "PostgresCountryRepository",
                "SqlServerCountryRepository",
            ]
        );

        assert_eq!(repos.get::<OracleCountryRepository>()?.dialect(), Dialect::Oracle);
        assert_eq!(repos.get::<PostgresCountryRepository>()?.dialect(), Dialect::Postgres);
        assert_eq!(repos.get::<MySqlCountryRepository>()?.dialect(), Dialect::MySql);
        assert_eq!(repos.get::<H2CountryRepository>()?.dialect(), Dialect::H2);
        assert_eq!(repos.dialect_of::<SqlServerCountryRepository>(), Some(Dialect::SqlServer));

        Ok(())
    }

    #[test]
    fn test_resolve_is_idempotent() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (registry, _) = all_dialect_registry();
        let first = registry.resolve()?;
        let second = registry.resolve()?;

        assert_eq!(first.contracts(), second.contracts());
        let a = first.get::<OracleCountryRepository>()?;
        let b = second.get::<OracleCountryRepository>()?;
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a.dialect(), b.dialect());
        assert_eq!(a.statements(), b.statements());

        Ok(())
    }

    #[test]
    fn test_missing_dialect_is_configuration_error() {
        let provider = Arc::new(MockConnectionProvider::new(Dialect::ALL));
        let mut registry = RepositoryRegistry::new();
        registry
            .declare_definition::<OracleCountryRepository>()
            .declare_definition::<ConfiguredCountryRepository>()
            .bind_provider(Dialect::Oracle, provider);

        let err = registry.resolve().err().unwrap();
        assert_eq!(
            err,
            DataError::ConfigurationError(
                "Repository 'ConfiguredCountryRepository' has no dialect".to_string()
            )
        );
    }

    #[test]
    fn test_same_entity_and_dialect_is_resolution_error() {
        let provider = Arc::new(MockConnectionProvider::new(Dialect::ALL));
        let mut registry = RepositoryRegistry::new();
        registry
            .declare_definition::<OracleCountryRepository>()
            .declare(RepositoryDeclaration::of::<ConfiguredCountryRepository>().with_dialect(Dialect::Oracle))
            .bind_provider(Dialect::Oracle, provider);

        let err = registry.resolve().err().unwrap();
        assert!(matches!(err, DataError::ResolutionError(_)));
        assert!(err.to_string().contains("OracleCountryRepository"));
        assert!(err.to_string().contains("ConfiguredCountryRepository"));
    }

    #[test]
    fn test_same_entity_in_different_dialects_resolves() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let provider = Arc::new(MockConnectionProvider::new(Dialect::ALL));
        let mut registry = RepositoryRegistry::new();
        registry
            .declare_definition::<OracleCountryRepository>()
            .declare(RepositoryDeclaration::of::<ConfiguredCountryRepository>().with_dialect(Dialect::Ansi))
            .bind_provider(Dialect::Oracle, provider.clone())
            .bind_provider(Dialect::Ansi, provider);

        let repos = registry.resolve()?;
        assert_eq!(repos.dialect_of::<ConfiguredCountryRepository>(), Some(Dialect::Ansi));
        Ok(())
    }

    #[test]
    fn test_duplicate_contract_is_resolution_error() {
        let provider = Arc::new(MockConnectionProvider::new(Dialect::ALL));
        let mut registry = RepositoryRegistry::new();
        registry
            .declare_definition::<OracleCountryRepository>()
            .declare_definition::<OracleCountryRepository>()
            .bind_provider(Dialect::Oracle, provider);

        let err = registry.resolve().err().unwrap();
        assert_eq!(
            err,
            DataError::ResolutionError(
                "Repository 'OracleCountryRepository' is declared more than once".to_string()
            )
        );
    }

    #[test]
    fn test_unbound_or_unsupported_provider() {
        let mut registry = RepositoryRegistry::new();
        registry.declare_definition::<OracleCountryRepository>();
        let err = registry.resolve().err().unwrap();
        assert!(matches!(err, DataError::ResolutionError(_)));

        registry.bind_provider(
            Dialect::Oracle,
            Arc::new(MockConnectionProvider::new([Dialect::Postgres])),
        );
        let err = registry.resolve().err().unwrap();
        assert_eq!(
            err,
            DataError::ResolutionError(
                "Connection provider 'mock' does not support dialect ORACLE".to_string()
            )
        );
    }

    #[test]
    fn test_apply_config_assigns_dialect() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let provider = Arc::new(MockConnectionProvider::new(Dialect::ALL));
        let mut registry = RepositoryRegistry::new();
        registry
            .declare_definition::<ConfiguredCountryRepository>()
            .bind_provider(Dialect::MySql, provider);

        let config = RepositoryConfig::from_toml_str(
            r#"
            [repositories.ConfiguredCountryRepository]
            dialect = "mysql"
            "#,
        )?;
        registry.apply_config(&config)?;

        let repos = registry.resolve()?;
        let repo = repos.get::<ConfiguredCountryRepository>()?;
        assert_eq!(repo.dialect(), Dialect::MySql);
        assert_eq!(
            repo.statements().find_by_id,
            "SELECT `id`, `iso2`, `name` FROM `country` WHERE `id` = ?"
        );
        Ok(())
    }

    #[test]
    fn test_apply_config_rejects_bad_entries_without_changes() {
        let mut registry = RepositoryRegistry::new();
        registry.declare_definition::<ConfiguredCountryRepository>();

        let unknown_dialect = RepositoryConfig::from_toml_str(
            r#"
            [repositories.ConfiguredCountryRepository]
            dialect = "db2"
            "#,
        )
        .unwrap();
        assert!(matches!(
            registry.apply_config(&unknown_dialect).err(),
            Some(DataError::ConfigurationError(_))
        ));

        let undeclared = RepositoryConfig::from_toml_str(
            r#"
            [repositories.ConfiguredCountryRepository]
            dialect = "oracle"

            [repositories.RegionRepository]
            dialect = "oracle"
            "#,
        )
        .unwrap();
        assert!(matches!(
            registry.apply_config(&undeclared).err(),
            Some(DataError::ConfigurationError(_))
        ));
        assert_eq!(registry.declarations()[0].dialect, None);
    }

    #[test]
    fn test_malformed_entity_metadata_is_resolution_error() {
        let provider = Arc::new(MockConnectionProvider::new(Dialect::ALL));

        let mut missing_id = RepositoryDeclaration::of::<OracleCountryRepository>();
        missing_id.entity = EntityMetadata {
            name: "Bad",
            table: "bad",
            id_column: "id",
            columns: &["code"],
        };
        let mut registry = RepositoryRegistry::new();
        registry
            .declare(missing_id)
            .bind_provider(Dialect::Oracle, provider.clone());
        let err = registry.resolve().err().unwrap();
        assert_eq!(
            err,
            DataError::ResolutionError(
                "Repository 'OracleCountryRepository': id column 'id' is not a column of Bad"
                    .to_string()
            )
        );

        let mut id_only = RepositoryDeclaration::of::<OracleCountryRepository>();
        id_only.entity = EntityMetadata {
            name: "Bad",
            table: "bad",
            id_column: "id",
            columns: &["id"],
        };
        let mut registry = RepositoryRegistry::new();
        registry.declare(id_only).bind_provider(Dialect::Oracle, provider);
        let err = registry.resolve().err().unwrap();
        assert!(matches!(err, DataError::ResolutionError(_)));
    }

    #[test]
    fn test_apply_config_overrides_declared_dialect() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let provider = Arc::new(MockConnectionProvider::new(Dialect::ALL));
        let mut registry = RepositoryRegistry::new();
        registry
            .declare_definition::<OracleCountryRepository>()
            .bind_provider(Dialect::MySql, provider);

        let config = RepositoryConfig::from_toml_str(
            r#"
            [repositories.OracleCountryRepository]
            dialect = "mysql"
            "#,
        )?;
        registry.apply_config(&config)?;

        assert_eq!(registry.declarations()[0].dialect, Some(Dialect::MySql));
        let repos = registry.resolve()?;
        assert_eq!(repos.dialect_of::<OracleCountryRepository>(), Some(Dialect::MySql));
        Ok(())
    }

    #[test]
    fn test_get_unresolved_contract() {
        let (registry, _) = all_dialect_registry();
        let repos = registry.resolve().unwrap();
        let err = repos.get::<ConfiguredCountryRepository>().err().unwrap();
        assert!(matches!(err, DataError::ResolutionError(_)));
    }

    #[tokio::test]
    async fn test_oracle_country_find_by_id_scenario() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let provider = Arc::new(MockConnectionProvider::new([Dialect::Oracle]));
        let mut registry = RepositoryRegistry::new();
        registry
            .declare_definition::<OracleCountryRepository>()
            .bind_provider(Dialect::Oracle, provider.clone());

        let repos = registry.resolve()?;
        let countries: Arc<dyn CountryRepository> = repos.get::<OracleCountryRepository>()?;

        let country = create_test_country("NO", "Norway");
        provider.push_rows(vec![country_row(&country)]);

        let found: Option<CountryModel> = countries.find_by_id(country.id).await?;
        assert_eq!(found, Some(country.clone()));

        assert_eq!(
            provider.statements(),
            vec![Statement::new(
                r#"SELECT "ID", "ISO2", "NAME" FROM "COUNTRY" WHERE "ID" = :1"#,
                vec![Value::Uuid(country.id)],
            )]
        );
        Ok(())
    }
}
