//! itemgen-core: convert item CSV exports into typed TypeScript data
//!
//! This library provides functionality to:
//! - Read a CSV export into raw header-keyed records
//! - Remap source categories and rarities through fixed lookup tables
//! - Derive item ids and coerce numeric columns with defaults
//! - Group items by target category and emit them as `export const` arrays

pub mod category;
pub mod config;
pub mod emitter;
pub mod error;
pub mod item;
pub mod parser;
pub mod pipeline;
pub mod record;
pub mod transform;

pub use category::{remap_category, remap_rarity, Rarity, TargetCategory, CATEGORY_TABLE, RARITY_TABLE};
pub use config::Config;
pub use emitter::{emit_file, render, write_declarations, EmitOptions};
pub use error::{Error, Result};
pub use item::{derive_id, Item};
pub use parser::{open_records, read_records_str, RecordReader};
pub use pipeline::{convert, load_groups, ConversionReport};
pub use record::RawRecord;
pub use transform::{CategoryGroups, Transformer};
