//! Record -> Item transformation and grouping by target category

use crate::category::{remap_category, remap_rarity, TargetCategory};
use crate::config::Config;
use crate::error::Result;
use crate::item::{self, Item, DEFAULT_ID_PREFIX};
use crate::record::{columns, RawRecord};
use indexmap::IndexMap;

/// Items grouped by target category.
///
/// Groups are kept in the order their category was first seen; items within
/// a group keep input order.
#[derive(Debug, Clone, Default)]
pub struct CategoryGroups {
    groups: IndexMap<TargetCategory, Vec<Item>>,
}

impl CategoryGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item to the group named by its `item_type`
    pub fn push(&mut self, item: Item) {
        self.groups.entry(item.item_type).or_default().push(item);
    }

    /// Items of one category, empty if none were seen
    pub fn get(&self, category: TargetCategory) -> &[Item] {
        self.groups
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of non-empty groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn total_items(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Per-category counts for the console report.
    ///
    /// Seen categories come first, in first-seen order. Every category of
    /// `order` that never appeared follows with a count of zero, matching the
    /// report the tool has always printed.
    pub fn summary(&self, order: &[TargetCategory]) -> Vec<(TargetCategory, usize)> {
        let mut summary: Vec<(TargetCategory, usize)> = self
            .groups
            .iter()
            .map(|(category, items)| (*category, items.len()))
            .collect();

        for category in order {
            if !self.groups.contains_key(category) {
                summary.push((*category, 0));
            }
        }

        summary
    }
}

/// Converts raw records into items
#[derive(Debug, Clone)]
pub struct Transformer {
    id_prefix: String,
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new(DEFAULT_ID_PREFIX)
    }
}

impl Transformer {
    pub fn new(id_prefix: impl Into<String>) -> Self {
        Self {
            id_prefix: id_prefix.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.id_prefix.clone())
    }

    /// Build an Item from one record
    pub fn transform_record(&self, record: &RawRecord) -> Result<Item> {
        let name = record.field_or_empty(columns::NAME);
        let raw_category = record.field_or_empty(columns::CATEGORY);

        let item_type = remap_category(raw_category);
        let rarity = remap_rarity(record.get(columns::RARITY));

        let weight = item::parse_weight(record.get(columns::WEIGHT), record.row)?;
        // Parsed so a malformed value still fails the run; the generated
        // BaseItem shape has no stack size field.
        let _stack_size = item::parse_stack_size(record.get(columns::STACK_SIZE), record.row)?;
        let value = item::parse_value(record.get(columns::SELL_PRICE), record.row)?;

        Ok(Item {
            id: item::derive_id(&self.id_prefix, name),
            name: item::escape_name(name),
            item_type,
            rarity,
            value,
            weight,
            description: item::describe(raw_category),
        })
    }

    /// Transform every record, stopping at the first error
    pub fn run<I>(&self, records: I) -> Result<CategoryGroups>
    where
        I: IntoIterator<Item = Result<RawRecord>>,
    {
        let mut groups = CategoryGroups::new();

        for record in records {
            let record = record?;
            let item = self.transform_record(&record)?;
            tracing::trace!(row = record.row, id = %item.id, category = %item.item_type, "transformed");
            groups.push(item);
        }

        tracing::debug!(
            "grouped {} items into {} categories",
            groups.total_items(),
            groups.len()
        );

        Ok(groups)
    }
}
