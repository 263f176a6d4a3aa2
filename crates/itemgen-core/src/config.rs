//! Conversion settings
//!
//! The defaults reproduce the fixed paths and layout the generator has always
//! used; a JSON file can override any of them.

use crate::category::TargetCategory;
use crate::error::{Error, Result};
use crate::item::DEFAULT_ID_PREFIX;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "items_arcraiders.csv";
pub const DEFAULT_OUTPUT: &str = "items_data.ts";
pub const DEFAULT_TYPE_NAME: &str = "BaseItem";
pub const DEFAULT_BANNER: &str = "ITEMS DATA - Généré depuis ARC Raiders Wiki CSV";

/// Settings for one conversion run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CSV export to read
    pub input: PathBuf,
    /// TypeScript file to write
    pub output: PathBuf,
    /// Prefix for derived item ids
    pub id_prefix: String,
    /// Element type of the emitted arrays. Must be declared wherever the
    /// output is imported.
    pub type_name: String,
    /// Title line of the comment banner at the top of the output
    pub banner: String,
    /// Categories to emit, in order. Categories not listed are skipped.
    pub emission_order: Vec<TargetCategory>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            type_name: DEFAULT_TYPE_NAME.to_string(),
            banner: DEFAULT_BANNER.to_string(),
            emission_order: TargetCategory::ALL.to_vec(),
        }
    }
}

impl Config {
    /// Load a config file from JSON. Missing keys take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| Error::FileRead {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the config to JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| Error::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Reject settings that would produce a broken output file
    pub fn validate(&self) -> Result<()> {
        for (i, category) in self.emission_order.iter().enumerate() {
            if self.emission_order[..i].contains(category) {
                return Err(Error::InvalidConfig(format!(
                    "category '{}' appears more than once in emission_order",
                    category
                )));
            }
        }

        if self.type_name.trim().is_empty() {
            return Err(Error::InvalidConfig("type_name must not be empty".to_string()));
        }

        Ok(())
    }
}
