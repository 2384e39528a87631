//! Test helpers for exercising generated repositories without a database
//!
//! `MockConnectionProvider` replays canned rows and affected-row counts in
//! the order they were queued and records every statement it receives.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use data_core_api::{DataError, DataResult};
use data_core_db::{CountryModel, Dialect, Row, Statement};
use parking_lot::Mutex;

use crate::provider::ConnectionProvider;
use crate::repository::country_repository::OracleCountryRepository;
use crate::repository::sql_repository::SqlRepository;
use crate::resolver::{RepositoryRegistry, ResolvedRepositories};

#[derive(Default)]
struct MockState {
    rows: VecDeque<Vec<Row>>,
    affected: VecDeque<u64>,
    failure: Option<DataError>,
    recorded: Vec<Statement>,
}

pub struct MockConnectionProvider {
    dialects: Vec<Dialect>,
    state: Mutex<MockState>,
}

impl MockConnectionProvider {
    pub fn new(dialects: impl IntoIterator<Item = Dialect>) -> Self {
        Self {
            dialects: dialects.into_iter().collect(),
            state: Mutex::new(MockState::default()),
        }
    }

    /// Queue the result set of the next `fetch`
    pub fn push_rows(&self, rows: Vec<Row>) {
        self.state.lock().rows.push_back(rows);
    }

    /// Queue the affected-row count of the next `execute`
    pub fn push_affected(&self, affected: u64) {
        self.state.lock().affected.push_back(affected);
    }

    /// Make every following call fail with `error`
    pub fn fail_with(&self, error: DataError) {
        self.state.lock().failure = Some(error);
    }

    pub fn statements(&self) -> Vec<Statement> {
        self.state.lock().recorded.clone()
    }

    pub fn statement_count(&self) -> usize {
        self.state.lock().recorded.len()
    }
}

#[async_trait]
impl ConnectionProvider for MockConnectionProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn supports(&self, dialect: Dialect) -> bool {
        self.dialects.contains(&dialect)
    }

    async fn fetch(&self, statement: &Statement) -> DataResult<Vec<Row>> {
        let mut state = self.state.lock();
        state.recorded.push(statement.clone());
        if let Some(error) = &state.failure {
            return Err(error.clone());
        }
        Ok(state.rows.pop_front().unwrap_or_default())
    }

    async fn execute(&self, statement: &Statement) -> DataResult<u64> {
        let mut state = self.state.lock();
        state.recorded.push(statement.clone());
        if let Some(error) = &state.failure {
            return Err(error.clone());
        }
        Ok(state.affected.pop_front().unwrap_or(0))
    }
}

/// Resolved Oracle country repository wired to a fresh mock provider
pub struct TestContext {
    pub provider: Arc<MockConnectionProvider>,
    pub repos: ResolvedRepositories,
}

impl TestContext {
    pub fn country_repo(&self) -> Arc<SqlRepository<CountryModel>> {
        self.repos
            .get::<OracleCountryRepository>()
            .expect("OracleCountryRepository is declared by setup_test_context")
    }
}

pub fn setup_test_context() -> TestContext {
    let provider = Arc::new(MockConnectionProvider::new([Dialect::Oracle]));

    let mut registry = RepositoryRegistry::new();
    registry
        .declare_definition::<OracleCountryRepository>()
        .bind_provider(Dialect::Oracle, provider.clone());
    let repos = registry
        .resolve()
        .expect("a single Oracle declaration always resolves");

    TestContext { provider, repos }
}

pub fn country_row(country: &CountryModel) -> Row {
    Row::new()
        .with("ID", country.id)
        .with("ISO2", country.iso2.as_str())
        .with("NAME", country.name.as_str())
}

pub fn create_test_country(iso2: &str, name: &str) -> CountryModel {
    CountryModel::new(iso2, name).expect("test country fields fit their bounds")
}
