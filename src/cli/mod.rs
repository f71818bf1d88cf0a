pub mod add;
pub mod init;
pub mod list;
pub mod load;
pub mod remove;
pub mod status;
pub mod write_off;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use crate::error::{Result, WarehouseError};
use crate::log::FileLog;
use crate::models::Product;
use crate::parser::parse_file;
use crate::settings::Paths;

/// Load the inventory, sending per-record failures to the log file.
pub(crate) fn load_inventory(paths: &Paths) -> (Vec<Product>, FileLog) {
    let mut log = FileLog::new(&paths.log_file);
    let products = parse_file(&paths.data_file, &mut log);
    if log.entries() > 0 {
        eprintln!(
            "{}",
            format!(
                "Warning: load failed for {} record(s) or the file itself; see {}",
                log.entries(),
                log.path().display()
            )
            .yellow()
        );
    }
    (products, log)
}

/// Load for a command that will write the collection back. Refuses when
/// nothing could be read from an existing file, so it is never clobbered.
pub(crate) fn load_for_update(paths: &Paths) -> Result<Vec<Product>> {
    if !paths.data_file.exists() {
        return Err(WarehouseError::Other(format!(
            "No inventory found at {}\nRun `warehouse init` first.",
            paths.data_file.display()
        )));
    }
    let (products, log) = load_inventory(paths);
    if products.is_empty() && log.entries() > 0 {
        return Err(WarehouseError::Other(format!(
            "Could not load {}; nothing was changed. See {}",
            paths.data_file.display(),
            log.path().display()
        )));
    }
    Ok(products)
}

/// Convert a 1-based position as shown by `list` into an index.
pub(crate) fn index_for(products: &[Product], position: usize) -> Result<usize> {
    if position == 0 || position > products.len() {
        return Err(WarehouseError::Other(format!(
            "No product at position {position} (inventory has {})",
            products.len()
        )));
    }
    Ok(position - 1)
}

#[derive(Parser)]
#[command(name = "warehouse", about = "Warehouse inventory kept in a JSON file.")]
pub struct Cli {
    /// Inventory file to use instead of the configured one
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Choose an inventory file and create it if missing.
    Init {
        /// Path for the inventory (default: ~/Documents/warehouse/inventory.json)
        #[arg(long = "data-file")]
        data_file: Option<String>,
    },
    /// Switch to an existing inventory file.
    Load {
        /// Path to an inventory JSON file
        path: String,
    },
    /// Show all products in a table.
    List,
    /// Add a product.
    Add {
        #[command(subcommand)]
        command: AddCommands,
    },
    /// Write off the product at a position shown by `list`.
    WriteOff {
        /// Position in `warehouse list`
        position: usize,
        /// Write-off date: DD.MM.YYYY
        date: String,
    },
    /// Remove the product at a position shown by `list`.
    Remove {
        /// Position in `warehouse list`
        position: usize,
    },
    /// Show the current inventory file and summary statistics.
    Status,
}

#[derive(Args)]
pub struct BaseArgs {
    /// Product name
    pub name: String,
    /// Date of receipt: DD.MM.YYYY
    #[arg(long)]
    pub received: String,
    /// Number of units
    #[arg(long, allow_negative_numbers = true)]
    pub count: i64,
    /// Write-off date: DD.MM.YYYY
    #[arg(long = "written-off")]
    pub written_off: Option<String>,
}

#[derive(Subcommand)]
pub enum AddCommands {
    /// A product with no kind-specific attributes.
    Generic {
        #[command(flatten)]
        base: BaseArgs,
    },
    /// Clothing with a size, color and material.
    Clothing {
        #[command(flatten)]
        base: BaseArgs,
        /// One of XS, S, M, L, XL, XXL, XXXL
        #[arg(long)]
        size: String,
        #[arg(long)]
        color: String,
        #[arg(long)]
        material: String,
    },
    /// Furniture with material, WxLxH dimensions and weight.
    Furniture {
        #[command(flatten)]
        base: BaseArgs,
        #[arg(long)]
        material: String,
        /// Width x length x height, e.g. 100x50x30
        #[arg(long)]
        dimensions: String,
        #[arg(long, allow_negative_numbers = true)]
        weight: i64,
    },
}
