use super::identifiable::Identifiable;
use super::row::TryFromRow;
use super::value::Value;

/// Table mapping of an entity type.
///
/// `columns` is the full, ordered column list used for every generated
/// statement; it must contain `id_column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMetadata {
    /// Entity name used in logs and error messages
    pub name: &'static str,
    pub table: &'static str,
    pub id_column: &'static str,
    pub columns: &'static [&'static str],
}

impl EntityMetadata {
    /// Mapped spelling of `column`, matched without regard to case
    pub fn column(&self, column: &str) -> Option<&'static str> {
        self.columns
            .iter()
            .copied()
            .find(|c| c.eq_ignore_ascii_case(column))
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.column(column).is_some()
    }

    /// Columns other than the id column, in declaration order
    pub fn non_id_columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns
            .iter()
            .copied()
            .filter(move |c| !c.eq_ignore_ascii_case(self.id_column))
    }
}

/// Trait for entity types a generated repository can persist
///
/// # Example
/// ```ignore
/// impl Entity for CountryModel {
///     const METADATA: EntityMetadata = EntityMetadata {
///         name: "Country",
///         table: "country",
///         id_column: "id",
///         columns: &["id", "iso2", "name"],
///     };
///
///     fn to_values(&self) -> Vec<Value> {
///         vec![self.id.into(), self.iso2.as_str().into(), self.name.as_str().into()]
///     }
/// }
/// ```
pub trait Entity: Identifiable + TryFromRow + Clone + Send + Sync + 'static {
    const METADATA: EntityMetadata;

    /// Column values in the order of `METADATA.columns`
    fn to_values(&self) -> Vec<Value>;
}
