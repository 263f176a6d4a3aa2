//! End-to-end conversion: load, transform, emit

use crate::category::TargetCategory;
use crate::config::Config;
use crate::emitter::{emit_file, EmitOptions};
use crate::error::Result;
use crate::parser::open_records;
use crate::transform::{CategoryGroups, Transformer};
use std::path::PathBuf;

/// Outcome of a successful conversion
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// File that was written
    pub output: PathBuf,
    /// Item count per category, in report order
    pub summary: Vec<(TargetCategory, usize)>,
    pub total_items: usize,
}

/// Read and transform the whole input without writing anything
pub fn load_groups(config: &Config) -> Result<CategoryGroups> {
    config.validate()?;

    tracing::info!("reading {}", config.input.display());
    let records = open_records(&config.input)?;
    Transformer::from_config(config).run(records)
}

/// Run a full conversion.
///
/// The input is read completely before the output file is created, so a bad
/// row never leaves a half-written file behind. Write failures midway do.
pub fn convert(config: &Config) -> Result<ConversionReport> {
    let groups = load_groups(config)?;

    emit_file(&config.output, &groups, &EmitOptions::from(config))?;

    Ok(ConversionReport {
        output: config.output.clone(),
        summary: groups.summary(&config.emission_order),
        total_items: groups.total_items(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;

    const CSV: &str = "\
Name,Category,Rarity,Weight,StackSize,SellPrice,ImageUrl
Rusty Bolt (Used),Basic Material,,,,50,https://img/bolt.png
Rusted Key,Key,Rare,0.2,1,300,https://img/key.png
Gold Watch,Trinket,Epic,1,,900,
Wild Herb,Nature,Uncommon,0,10,,
";

    fn config_in(dir: &std::path::Path) -> Config {
        Config {
            input: dir.join("items.csv"),
            output: dir.join("items_data.ts"),
            ..Config::default()
        }
    }

    #[test]
    fn test_convert_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.input, CSV).unwrap();

        let report = convert(&config).unwrap();
        assert_eq!(report.total_items, 4);
        assert_eq!(
            report.summary,
            vec![
                (TargetCategory::CraftingMaterials, 2),
                (TargetCategory::Gear, 2),
                (TargetCategory::Consumables, 0),
                (TargetCategory::Ammo, 0),
            ]
        );

        let out = fs::read_to_string(&config.output).unwrap();
        assert!(out.contains("// CRAFTING MATERIALS (2 items)"));
        assert!(out.contains("// GEAR (2 items)"));
        assert!(!out.contains("CONSUMABLES"));
        assert!(!out.contains("AMMO"));
        assert!(out.contains("    id: \"item_rusty_bolt_used\",\n    name: \"Rusty Bolt (Used)\",\n    type: \"Crafting Materials\",\n    rarity: \"Common\",\n    value: 50,\n    weight: 0.5,\n    description: \"Basic Material item\"\n"));
        assert!(out.contains("    id: \"item_wild_herb\",\n    name: \"Wild Herb\",\n    type: \"Crafting Materials\",\n    rarity: \"Uncommon\",\n    value: 100,\n    weight: 0.5,\n"));
        assert!(out.contains("    weight: 1.0,\n"));
        assert!(!out.contains("https://img"));
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        assert!(matches!(convert(&config), Err(Error::FileRead { .. })));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_bad_row_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.input, format!("{CSV}Broken,Key,,,,free,\n")).unwrap();

        assert!(matches!(convert(&config), Err(Error::InvalidNumber { row: 5, .. })));
        assert!(!config.output.exists());
    }
}
