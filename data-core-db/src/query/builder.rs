use data_core_api::{DataError, DataResult};

use crate::dialect::Dialect;
use crate::models::entity::{Entity, EntityMetadata};
use crate::repository::pagination::PageRequest;

/// Alias given to the `COUNT(*)` column so every dialect reports the same name
pub const COUNT_ALIAS: &str = "total";

/// Precomputed statement templates for one entity in one dialect.
///
/// Built once when a repository is created; every contract method maps to
/// exactly one of these templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementSet {
    pub dialect: Dialect,
    pub find_by_id: String,
    pub exists_by_id: String,
    pub find_all: String,
    pub count: String,
    pub insert: String,
    pub update: String,
    pub delete_by_id: String,
    pub delete_all: String,
}

/// Renders dialect-correct statement text from entity metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryBuilder {
    dialect: Dialect,
}

impl QueryBuilder {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Build every fixed template for `E`
    pub fn build<E: Entity>(&self) -> StatementSet {
        let meta = &E::METADATA;
        StatementSet {
            dialect: self.dialect,
            find_by_id: self.find_by_id(meta),
            exists_by_id: self.exists_by_id(meta),
            find_all: self.find_all(meta),
            count: self.count(meta),
            insert: self.insert(meta),
            update: self.update(meta),
            delete_by_id: self.delete_by_id(meta),
            delete_all: self.delete_all(meta),
        }
    }

    fn table(&self, meta: &EntityMetadata) -> String {
        self.dialect.quote_identifier(meta.table)
    }

    fn column_list(&self, meta: &EntityMetadata) -> String {
        meta.columns
            .iter()
            .map(|c| self.dialect.quote_identifier(c))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn select_from(&self, meta: &EntityMetadata) -> String {
        format!("SELECT {} FROM {}", self.column_list(meta), self.table(meta))
    }

    fn where_equals(&self, column: &str, index: usize) -> String {
        format!(
            " WHERE {} = {}",
            self.dialect.quote_identifier(column),
            self.dialect.placeholder(index)
        )
    }

    pub fn find_by_id(&self, meta: &EntityMetadata) -> String {
        self.select_from(meta) + &self.where_equals(meta.id_column, 1)
    }

    pub fn exists_by_id(&self, meta: &EntityMetadata) -> String {
        format!("SELECT 1 FROM {}", self.table(meta)) + &self.where_equals(meta.id_column, 1)
    }

    pub fn find_all(&self, meta: &EntityMetadata) -> String {
        self.select_from(meta)
    }

    pub fn count(&self, meta: &EntityMetadata) -> String {
        format!(
            "SELECT COUNT(*) AS {} FROM {}",
            self.dialect.quote_identifier(COUNT_ALIAS),
            self.table(meta)
        )
    }

    /// Parameters bind in `columns` order
    pub fn insert(&self, meta: &EntityMetadata) -> String {
        let placeholders = (1..=meta.columns.len())
            .map(|i| self.dialect.placeholder(i))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table(meta),
            self.column_list(meta),
            placeholders
        )
    }

    /// Parameters bind as the non-id columns in order, then the id
    pub fn update(&self, meta: &EntityMetadata) -> String {
        let assignments = meta
            .non_id_columns()
            .enumerate()
            .map(|(i, c)| {
                format!(
                    "{} = {}",
                    self.dialect.quote_identifier(c),
                    self.dialect.placeholder(i + 1)
                )
            })
            .collect::<Vec<_>>();
        let id_index = assignments.len() + 1;
        format!("UPDATE {} SET {}", self.table(meta), assignments.join(", "))
            + &self.where_equals(meta.id_column, id_index)
    }

    pub fn delete_by_id(&self, meta: &EntityMetadata) -> String {
        format!("DELETE FROM {}", self.table(meta)) + &self.where_equals(meta.id_column, 1)
    }

    pub fn delete_all(&self, meta: &EntityMetadata) -> String {
        format!("DELETE FROM {}", self.table(meta))
    }

    /// Derived finder on a single column: `SELECT ... WHERE <column> = <p1>`
    ///
    /// # Returns
    /// * `Err(DataError::ValidationError)` - if `column` is not mapped by the entity
    pub fn find_by_column(&self, meta: &EntityMetadata, column: &str) -> DataResult<String> {
        let column = ensure_column(meta, column)?;
        Ok(self.select_from(meta) + &self.where_equals(column, 1))
    }

    /// Ordered, row-limited select for one page.
    ///
    /// Unsorted requests are ordered by the id column so consecutive pages
    /// never overlap.
    ///
    /// # Returns
    /// * `Err(DataError::ValidationError)` - if the limit is zero or a sort property is not a column
    pub fn find_page(&self, meta: &EntityMetadata, request: &PageRequest) -> DataResult<String> {
        if request.limit == 0 {
            return Err(DataError::ValidationError(
                "Page limit must be greater than zero".to_string(),
            ));
        }

        let order_by = if request.sort.is_sorted() {
            let mut terms = Vec::with_capacity(request.sort.orders.len());
            for order in &request.sort.orders {
                let column = ensure_column(meta, &order.property)?;
                terms.push(format!(
                    "{} {}",
                    self.dialect.quote_identifier(column),
                    order.direction.keyword()
                ));
            }
            terms.join(", ")
        } else {
            self.dialect.quote_identifier(meta.id_column)
        };

        Ok(format!(
            "{} ORDER BY {} {}",
            self.select_from(meta),
            order_by,
            self.dialect.pagination_clause(request.limit, request.offset)
        ))
    }
}

/// Mapped spelling of `column`
fn ensure_column(meta: &EntityMetadata, column: &str) -> DataResult<&'static str> {
    meta.column(column).ok_or_else(|| {
        DataError::ValidationError(format!("'{column}' is not a column of {}", meta.name))
    })
}
