use comfy_table::{Cell, Table};

use super::load_inventory;
use crate::error::Result;
use crate::fmt::details;
use crate::settings::Paths;

pub fn run(paths: &Paths) -> Result<()> {
    let (products, _) = load_inventory(paths);

    let mut table = Table::new();
    table.set_header(vec!["#", "Name", "Type", "Received", "Written off", "Count", "Details"]);
    for (idx, product) in products.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(product.name()),
            Cell::new(product.kind().label()),
            Cell::new(product.formatted_date_of_receipt()),
            Cell::new(product.formatted_date_of_write_off()),
            Cell::new(product.count()),
            Cell::new(details(product)),
        ]);
    }
    println!("Inventory ({} products)\n{table}", products.len());
    Ok(())
}
