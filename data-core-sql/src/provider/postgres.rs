use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use data_core_api::{DataError, DataResult};
use data_core_db::{Dialect, Row, Statement, Value};
use sqlx::encode::{Encode, IsNull};
use sqlx::error::BoxDynError;
use sqlx::postgres::types::Oid;
use sqlx::postgres::{PgArgumentBuffer, PgArguments, PgPoolOptions, PgRow, PgTypeInfo};
use sqlx::query::Query;
use sqlx::{Column, PgPool, Postgres, Row as _, Type, TypeInfo};
use uuid::Uuid;

use crate::config::DataSourceConfig;

use super::ConnectionProvider;

/// Connection provider backed by an sqlx PostgreSQL pool.
///
/// Every call checks a connection out of the pool, so a single provider can be
/// shared by all repositories bound to the `POSTGRES` dialect.
pub struct PgConnectionProvider {
    pool: Arc<PgPool>,
}

impl PgConnectionProvider {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Open a pool from a data source configuration
    ///
    /// # Returns
    /// * `Err(DataError::ConfigurationError)` - if the data source is not a PostgreSQL one
    /// * `Err(DataError::QueryExecutionError)` - if the pool could not connect
    pub async fn connect(config: &DataSourceConfig) -> DataResult<Self> {
        if config.dialect != Dialect::Postgres {
            return Err(DataError::ConfigurationError(format!(
                "PgConnectionProvider cannot serve dialect {}",
                config.dialect
            )));
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.url)
            .await?;

        Ok(Self::new(Arc::new(pool)))
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }
}

/// SQL NULL sent with OID 0, so the server infers its type from the statement
struct UntypedNull;

impl Type<Postgres> for UntypedNull {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_oid(Oid(0))
    }
}

impl Encode<'_, Postgres> for UntypedNull {
    fn encode_by_ref(&self, _buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        Ok(IsNull::Yes)
    }
}

fn bind_values<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    params: &[Value],
) -> Query<'q, Postgres, PgArguments> {
    for param in params {
        query = match param {
            Value::Null => query.bind(UntypedNull),
            Value::Bool(v) => query.bind(*v),
            Value::Int(v) => query.bind(*v),
            Value::Float(v) => query.bind(*v),
            Value::Text(v) => query.bind(v.clone()),
            Value::Uuid(v) => query.bind(*v),
            Value::Timestamp(v) => query.bind(*v),
        };
    }
    query
}

/// Postgres column types that decode into a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Bool,
    Int2,
    Int4,
    Int8,
    Float4,
    Float8,
    Text,
    Uuid,
    TimestampTz,
    Timestamp,
}

fn column_kind(type_name: &str, column: &str) -> DataResult<ColumnKind> {
    Ok(match type_name {
        "BOOL" => ColumnKind::Bool,
        "INT2" => ColumnKind::Int2,
        "INT4" => ColumnKind::Int4,
        "INT8" => ColumnKind::Int8,
        "FLOAT4" => ColumnKind::Float4,
        "FLOAT8" => ColumnKind::Float8,
        "TEXT" | "VARCHAR" | "BPCHAR" | "CHAR" | "NAME" => ColumnKind::Text,
        "UUID" => ColumnKind::Uuid,
        "TIMESTAMPTZ" => ColumnKind::TimestampTz,
        "TIMESTAMP" => ColumnKind::Timestamp,
        other => {
            return Err(DataError::MappingError(format!(
                "Unsupported column type {other} for column '{column}'"
            )))
        }
    })
}

fn decode_row(row: &PgRow) -> DataResult<Row> {
    let mut decoded = Row::new();
    for (index, column) in row.columns().iter().enumerate() {
        let value: Value = match column_kind(column.type_info().name(), column.name())? {
            ColumnKind::Bool => row.try_get::<Option<bool>, _>(index)?.into(),
            ColumnKind::Int2 => row.try_get::<Option<i16>, _>(index)?.map(i64::from).into(),
            ColumnKind::Int4 => row.try_get::<Option<i32>, _>(index)?.map(i64::from).into(),
            ColumnKind::Int8 => row.try_get::<Option<i64>, _>(index)?.into(),
            ColumnKind::Float4 => row.try_get::<Option<f32>, _>(index)?.map(f64::from).into(),
            ColumnKind::Float8 => row.try_get::<Option<f64>, _>(index)?.into(),
            ColumnKind::Text => row.try_get::<Option<String>, _>(index)?.into(),
            ColumnKind::Uuid => row.try_get::<Option<Uuid>, _>(index)?.into(),
            ColumnKind::TimestampTz => row.try_get::<Option<DateTime<Utc>>, _>(index)?.into(),
            ColumnKind::Timestamp => row
                .try_get::<Option<NaiveDateTime>, _>(index)?
                .map(|ts| ts.and_utc())
                .into(),
        };
        decoded.push(column.name(), value);
    }
    Ok(decoded)
}

#[async_trait]
impl ConnectionProvider for PgConnectionProvider {
    fn name(&self) -> &str {
        "postgres"
    }

    fn supports(&self, dialect: Dialect) -> bool {
        dialect == Dialect::Postgres
    }

    async fn fetch(&self, statement: &Statement) -> DataResult<Vec<Row>> {
        let rows = bind_values(sqlx::query(&statement.sql), &statement.params)
            .fetch_all(&*self.pool)
            .await?;
        rows.iter().map(decode_row).collect()
    }

    async fn execute(&self, statement: &Statement) -> DataResult<u64> {
        let result = bind_values(sqlx::query(&statement.sql), &statement.params)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
