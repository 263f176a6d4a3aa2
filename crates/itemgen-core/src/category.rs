//! Category and rarity lookup tables
//!
//! The wiki export uses fine-grained source categories; the generated data
//! file only knows four target categories. Both remaps are closed tables with
//! a fallback, so they never fail.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four categories items are grouped under in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TargetCategory {
    #[serde(rename = "Consumables")]
    Consumables,
    #[serde(rename = "Crafting Materials")]
    CraftingMaterials,
    #[serde(rename = "Gear")]
    Gear,
    #[serde(rename = "Ammo")]
    Ammo,
}

impl TargetCategory {
    /// All target categories in default emission order
    pub const ALL: [TargetCategory; 4] = [
        TargetCategory::Consumables,
        TargetCategory::CraftingMaterials,
        TargetCategory::Gear,
        TargetCategory::Ammo,
    ];

    /// Display name, also used as the `type` field of emitted items
    pub fn as_str(self) -> &'static str {
        match self {
            TargetCategory::Consumables => "Consumables",
            TargetCategory::CraftingMaterials => "Crafting Materials",
            TargetCategory::Gear => "Gear",
            TargetCategory::Ammo => "Ammo",
        }
    }

    /// Name of the exported array (e.g. `crafting_materials`)
    pub fn declaration_name(self) -> String {
        self.as_str().to_lowercase().replace(' ', "_")
    }

    /// Label for the comment above the array (e.g. `CRAFTING MATERIALS`)
    pub fn header_label(self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for TargetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()) || c.declaration_name() == s.trim())
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// Item rarity as emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source category -> target category
pub const CATEGORY_TABLE: &[(&str, TargetCategory)] = &[
    ("Quick Use", TargetCategory::Consumables),
    ("Nature", TargetCategory::CraftingMaterials),
    ("Basic Material", TargetCategory::CraftingMaterials),
    ("Topside Material", TargetCategory::CraftingMaterials),
    ("Refined Material", TargetCategory::CraftingMaterials),
    ("Recyclable", TargetCategory::CraftingMaterials),
    ("Trinket", TargetCategory::Gear),
    ("Key", TargetCategory::Gear),
    ("Mods", TargetCategory::Gear),
    ("Augment", TargetCategory::Gear),
    ("Shield", TargetCategory::Gear),
    ("Ammunition", TargetCategory::Ammo),
    ("Misc", TargetCategory::Consumables),
];

/// Recognized rarity strings
pub const RARITY_TABLE: &[(&str, Rarity)] = &[
    ("Common", Rarity::Common),
    ("Uncommon", Rarity::Uncommon),
    ("Rare", Rarity::Rare),
    ("Epic", Rarity::Epic),
    ("Legendary", Rarity::Legendary),
];

/// Fallback for source categories missing from the table
pub const DEFAULT_CATEGORY: TargetCategory = TargetCategory::Consumables;

/// Map a source category to its target category. Exact, case-sensitive match.
pub fn remap_category(raw: &str) -> TargetCategory {
    match CATEGORY_TABLE.iter().find(|(source, _)| *source == raw) {
        Some((_, target)) => *target,
        None => {
            tracing::debug!("unknown category '{}', using {}", raw, DEFAULT_CATEGORY);
            DEFAULT_CATEGORY
        }
    }
}

/// Map a raw rarity, falling back to Common for absent or unrecognized values
pub fn remap_rarity(raw: Option<&str>) -> Rarity {
    let Some(raw) = raw else {
        return Rarity::default();
    };

    RARITY_TABLE
        .iter()
        .find(|(source, _)| *source == raw)
        .map(|(_, rarity)| *rarity)
        .unwrap_or_default()
}
