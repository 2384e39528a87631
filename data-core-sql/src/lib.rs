pub mod config;
pub mod provider;
pub mod repository;
pub mod resolver;

pub use config::{DataSourceConfig, RepositoryConfig};
pub use provider::{ConnectionProvider, PgConnectionProvider};
pub use repository::country_repository::{
    declare_country_repositories, ConfiguredCountryRepository, H2CountryRepository, MySqlCountryRepository,
    OracleCountryRepository, PostgresCountryRepository, SqlServerCountryRepository,
};
pub use repository::sql_repository::SqlRepository;
pub use resolver::{RepositoryDeclaration, RepositoryDefinition, RepositoryRegistry, ResolvedRepositories};

#[cfg(test)]
pub mod test_helper;
