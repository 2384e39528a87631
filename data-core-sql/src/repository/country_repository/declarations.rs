use data_core_db::{CountryModel, Dialect};

use crate::resolver::{RepositoryDefinition, RepositoryRegistry};

/// Country repository bound to the Oracle dialect
pub struct OracleCountryRepository;

impl RepositoryDefinition for OracleCountryRepository {
    type Entity = CountryModel;
    const NAME: &'static str = "OracleCountryRepository";
    const DIALECT: Option<Dialect> = Some(Dialect::Oracle);
}

pub struct PostgresCountryRepository;

impl RepositoryDefinition for PostgresCountryRepository {
    type Entity = CountryModel;
    const NAME: &'static str = "PostgresCountryRepository";
    const DIALECT: Option<Dialect> = Some(Dialect::Postgres);
}

pub struct MySqlCountryRepository;

impl RepositoryDefinition for MySqlCountryRepository {
    type Entity = CountryModel;
    const NAME: &'static str = "MySqlCountryRepository";
    const DIALECT: Option<Dialect> = Some(Dialect::MySql);
}

pub struct H2CountryRepository;

impl RepositoryDefinition for H2CountryRepository {
    type Entity = CountryModel;
    const NAME: &'static str = "H2CountryRepository";
    const DIALECT: Option<Dialect> = Some(Dialect::H2);
}

pub struct SqlServerCountryRepository;

impl RepositoryDefinition for SqlServerCountryRepository {
    type Entity = CountryModel;
    const NAME: &'static str = "SqlServerCountryRepository";
    const DIALECT: Option<Dialect> = Some(Dialect::SqlServer);
}

/// Country repository whose dialect comes from [`crate::config::RepositoryConfig`]
pub struct ConfiguredCountryRepository;

impl RepositoryDefinition for ConfiguredCountryRepository {
    type Entity = CountryModel;
    const NAME: &'static str = "ConfiguredCountryRepository";
    const DIALECT: Option<Dialect> = None;
}

/// Declare the dialect-bound country repositories on `registry`
pub fn declare_country_repositories(registry: &mut RepositoryRegistry) -> &mut RepositoryRegistry {
    registry
        .declare_definition::<OracleCountryRepository>()
        .declare_definition::<PostgresCountryRepository>()
        .declare_definition::<MySqlCountryRepository>()
        .declare_definition::<H2CountryRepository>()
        .declare_definition::<SqlServerCountryRepository>()
}
