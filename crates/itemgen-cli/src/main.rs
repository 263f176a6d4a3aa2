//! itemgen CLI
//!
//! Command-line tool for turning an item CSV export into a TypeScript data file.

use clap::{Parser, Subcommand};
use itemgen_core::{
    convert, load_groups, Config, ConversionReport, TargetCategory, CATEGORY_TABLE, RARITY_TABLE,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "itemgen")]
#[command(about = "Generate TypeScript item data from a CSV export", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by commands that read the CSV
#[derive(clap::Args)]
struct InputArgs {
    /// Config file (JSON); flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSV file to read
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Prefix for derived item ids
    #[arg(long)]
    prefix: Option<String>,

    /// Categories to emit, in order (comma-separated, e.g. "gear,ammo")
    #[arg(long, value_delimiter = ',')]
    order: Option<Vec<TargetCategory>>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the CSV export into a TypeScript file
    Convert {
        #[command(flatten)]
        input: InputArgs,

        /// TypeScript file to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Element type of the emitted arrays
        #[arg(long)]
        type_name: Option<String>,
    },

    /// Show the transformed items without writing anything
    Preview {
        #[command(flatten)]
        input: InputArgs,

        /// Maximum number of items to display per category
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print the category and rarity lookup tables
    Tables,

    /// Create a config file with the default settings
    CreateConfig {
        /// Output path for the config file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> itemgen_core::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            type_name,
        } => {
            let mut config = input.resolve()?;
            if let Some(output) = output {
                config.output = output;
            }
            if let Some(type_name) = type_name {
                config.type_name = type_name;
            }
            cmd_convert(&config)
        }
        Commands::Preview { input, limit } => cmd_preview(&input.resolve()?, limit),
        Commands::Tables => cmd_tables(),
        Commands::CreateConfig { output } => cmd_create_config(&output),
    }
}

impl InputArgs {
    fn resolve(self) -> itemgen_core::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(prefix) = self.prefix {
            config.id_prefix = prefix;
        }
        if let Some(order) = self.order {
            config.emission_order = order;
        }

        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }
}

fn cmd_convert(config: &Config) -> itemgen_core::Result<()> {
    let report = convert(config)?;
    print!("{}", format_report(&report));
    Ok(())
}

/// Console summary printed after a conversion
fn format_report(report: &ConversionReport) -> String {
    let mut out = format!("Generated file: {}\nItems by category:\n", report.output.display());
    for (category, count) in &report.summary {
        out.push_str(&format!("  - {}: {} items\n", category, count));
    }
    out
}

fn cmd_preview(config: &Config, limit: Option<usize>) -> itemgen_core::Result<()> {
    let groups = load_groups(config)?;

    println!("File: {}", config.input.display());
    println!("Items: {}", groups.total_items());

    for &category in &config.emission_order {
        let items = groups.get(category);
        if items.is_empty() {
            continue;
        }

        println!();
        println!("{} ({} items)", category.header_label(), items.len());
        println!("id\tname\trarity\tvalue\tweight\tdescription");
        println!("{}", "-".repeat(72));

        let row_limit = limit.unwrap_or(items.len());
        for item in items.iter().take(row_limit) {
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                item.id,
                item.name,
                item.rarity,
                item.value,
                itemgen_core::item::format_weight(item.weight),
                item.description
            );
        }

        if items.len() > row_limit {
            println!("... ({} more items)", items.len() - row_limit);
        }
    }

    Ok(())
}

fn cmd_tables() -> itemgen_core::Result<()> {
    println!("Categories ({} source -> {} target):", CATEGORY_TABLE.len(), TargetCategory::ALL.len());
    for (source, target) in CATEGORY_TABLE {
        println!("  {:<18} -> {}", source, target);
    }
    println!("  {:<18} -> {}", "(anything else)", itemgen_core::category::DEFAULT_CATEGORY);

    println!();
    println!("Rarities:");
    for (source, rarity) in RARITY_TABLE {
        println!("  {:<18} -> {}", source, rarity);
    }
    println!("  {:<18} -> {}", "(anything else)", itemgen_core::Rarity::default());

    Ok(())
}

fn cmd_create_config(output: &PathBuf) -> itemgen_core::Result<()> {
    let config = Config::default();
    config.save(output)?;

    println!("Created config file: {}", output.display());
    println!();
    println!("Edit the file to change paths or emission order, then run:");
    println!("  itemgen convert --config {}", output.display());

    Ok(())
}
