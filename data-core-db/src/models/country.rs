use data_core_api::DataResult;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Entity, EntityMetadata, Identifiable, Row, TryFromRow, Value};
use crate::utils::{get_heapless_string, to_heapless_string};

/// # Documentation
/// - Country structure with ISO 3166-1 alpha-2 code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryModel {
    pub id: Uuid,

    pub iso2: HeaplessString<2>,

    pub name: HeaplessString<100>,
}

impl CountryModel {
    /// Create a country with a fresh id
    ///
    /// # Returns
    /// * `Err(DataError::ValidationError)` - if `iso2` or `name` exceed their bounds
    pub fn new(iso2: &str, name: &str) -> DataResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            iso2: to_heapless_string(iso2)?,
            name: to_heapless_string(name)?,
        })
    }
}

impl Identifiable for CountryModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl TryFromRow for CountryModel {
    fn try_from_row(row: &Row) -> DataResult<Self> {
        Ok(CountryModel {
            id: row.try_get("id")?,
            iso2: get_heapless_string(row, "iso2")?,
            name: get_heapless_string(row, "name")?,
        })
    }
}

impl Entity for CountryModel {
    const METADATA: EntityMetadata = EntityMetadata {
        name: "Country",
        table: "country",
        id_column: "id",
        columns: &["id", "iso2", "name"],
    };

    fn to_values(&self) -> Vec<Value> {
        vec![
            Value::Uuid(self.id),
            Value::from(self.iso2.as_str()),
            Value::from(self.name.as_str()),
        ]
    }
}
