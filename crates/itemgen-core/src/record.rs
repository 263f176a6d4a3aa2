//! Raw records as read from the item CSV export

use indexmap::IndexMap;

/// Column names the transformer reads
pub mod columns {
    pub const NAME: &str = "Name";
    pub const CATEGORY: &str = "Category";
    pub const RARITY: &str = "Rarity";
    pub const WEIGHT: &str = "Weight";
    pub const STACK_SIZE: &str = "StackSize";
    pub const SELL_PRICE: &str = "SellPrice";
    pub const IMAGE_URL: &str = "ImageUrl";
}

/// One input row keyed by header name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    /// 1-based data row number (the header row is not counted)
    pub row: usize,
    /// Header -> value, in header order
    pub fields: IndexMap<String, String>,
}

impl RawRecord {
    /// Create an empty record for the given row number
    pub fn new(row: usize) -> Self {
        Self {
            row,
            fields: IndexMap::new(),
        }
    }

    /// Set a field. A repeated header overwrites the earlier value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Get a field, `None` when the column is missing from the header or the row is short
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Get a field, treating a missing column as an empty value
    pub fn field_or_empty(&self, column: &str) -> &str {
        self.get(column).unwrap_or_default()
    }

    /// Number of fields present
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = RawRecord::new(0);
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}
