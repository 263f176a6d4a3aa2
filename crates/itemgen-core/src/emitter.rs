//! TypeScript emitter for grouped items
//!
//! Output layout, per non-empty category in emission order:
//!
//! ```text
//! // GEAR (2 items)
//! export const gear: BaseItem[] = [
//!   {
//!     id: "item_rusted_key",
//!     ...
//!   },
//!   {
//!     ...
//!   }
//! ];
//! ```

use crate::category::TargetCategory;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::item::{format_weight, Item};
use crate::transform::CategoryGroups;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const RULE: &str =
    "// ============================================================================";

/// Layout settings for the emitted file
#[derive(Debug, Clone)]
pub struct EmitOptions {
    pub type_name: String,
    pub banner: String,
    pub order: Vec<TargetCategory>,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for EmitOptions {
    fn from(config: &Config) -> Self {
        Self {
            type_name: config.type_name.clone(),
            banner: config.banner.clone(),
            order: config.emission_order.clone(),
        }
    }
}

/// Write the banner and one array declaration per non-empty category
pub fn write_declarations<W: Write>(
    writer: &mut W,
    groups: &CategoryGroups,
    options: &EmitOptions,
) -> io::Result<()> {
    writeln!(writer, "{RULE}")?;
    writeln!(writer, "// {}", options.banner)?;
    writeln!(writer, "{RULE}")?;
    writeln!(writer)?;

    for &category in &options.order {
        let items = groups.get(category);
        if items.is_empty() {
            continue;
        }

        writeln!(writer, "// {} ({} items)", category.header_label(), items.len())?;
        writeln!(
            writer,
            "export const {}: {}[] = [",
            category.declaration_name(),
            options.type_name
        )?;

        for (idx, item) in items.iter().enumerate() {
            let comma = if idx + 1 < items.len() { "," } else { "" };
            write_item(writer, item)?;
            writeln!(writer, "  }}{comma}")?;
        }

        writeln!(writer, "];")?;
        writeln!(writer)?;
    }

    Ok(())
}

// Everything up to, not including, the closing brace
fn write_item<W: Write>(writer: &mut W, item: &Item) -> io::Result<()> {
    writeln!(writer, "  {{")?;
    writeln!(writer, "    id: \"{}\",", item.id)?;
    writeln!(writer, "    name: \"{}\",", item.name)?;
    writeln!(writer, "    type: \"{}\",", item.item_type)?;
    writeln!(writer, "    rarity: \"{}\",", item.rarity)?;
    writeln!(writer, "    value: {},", item.value)?;
    writeln!(writer, "    weight: {},", format_weight(item.weight))?;
    writeln!(writer, "    description: \"{}\"", item.description)
}

/// Render the whole file into a string
pub fn render(groups: &CategoryGroups, options: &EmitOptions) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_declarations(&mut buf, groups, options);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Create `path` and write the declarations into it.
///
/// A failure midway leaves whatever was written in place.
pub fn emit_file<P: AsRef<Path>>(
    path: P,
    groups: &CategoryGroups,
    options: &EmitOptions,
) -> Result<()> {
    let path = path.as_ref();
    let to_error = |e: io::Error| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);

    write_declarations(&mut writer, groups, options).map_err(to_error)?;
    writer.flush().map_err(to_error)?;

    tracing::info!("wrote {} items to {}", groups.total_items(), path.display());
    Ok(())
}
